use crate::models::Category;

const FLAWLESS: &str = "Congratulations! You have an excellent understanding of cyberbullying. \
You did not make a single mistake in recognizing bullying comments!";

/// Feedback shown for the category the user struggled with most, or the
/// congratulatory message when nothing was missed.
pub fn feedback_for(weakest: Option<&Category>) -> String {
    let Some(category) = weakest else {
        return FLAWLESS.to_string();
    };

    let template = match category {
        Category::Positive => {
            "Growth Area: Recognizing non-bullying comments. \
It seems you sometimes identify harmless messages as bullying. \
It's good to be cautious, but remember — not every negative expression is cyberbullying. \
Try to distinguish between serious harassment and simple disagreement."
        }
        Category::GeneralNegative => {
            "Growth Area: Detecting offensive behavior. \
You sometimes missed comments that were actually bullying. \
Remember that even general insults and offensive language can be forms of cyberbullying."
        }
        Category::Gender => {
            "Growth Area: Identifying gender-based bullying. \
You may have overlooked bullying related to gender identity. \
Pay attention to comments that target or stereotype people based on their gender."
        }
        Category::Age => {
            "Growth Area: Recognizing age-based bullying. \
Bullying related to someone's age can be subtle but harmful. \
Be mindful of jokes or comments that mock someone's age or stage of life."
        }
        Category::Nationality => {
            "Growth Area: Spotting nationality-related bullying. \
You might have missed comments that targeted someone's nationality or cultural background. \
Discrimination based on nationality is a serious form of cyberbullying."
        }
        Category::Socioeconomic => {
            "Growth Area: Recognizing bullying based on socioeconomic status. \
Comments that mock someone's financial situation or social class are forms of bullying. \
Be sensitive to how money and status are discussed online."
        }
        Category::Educational => {
            "Growth Area: Identifying education-based bullying. \
Making fun of someone's education level, knowledge, or academic success is also bullying. \
Look closely for comments that shame or belittle people for their learning."
        }
        Category::Physical => {
            "Growth Area: Spotting physical appearance-based bullying. \
Teasing or insulting someone's physical appearance is a very common form of bullying. \
Be alert to comments about body image, disability, or physical traits."
        }
        Category::Other(label) => {
            return format!(
                "You did a good job overall! However, pay extra attention to the following area: {}.",
                label
            );
        }
    };

    template.to_string()
}
