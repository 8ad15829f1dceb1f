pub struct PromptBuilder;

impl PromptBuilder {
    /// Instructions for rewriting a social media comment into a friendly one.
    pub fn rewrite_prompt(text: &str) -> String {
        format!(
            "Rewrite the following social media comment to keep the meaning very close to the original without adding or removing key ideas. \
The rewritten version should be concise, not exceeding twice the length of the original. \
It should sound friendly, respectful, and either neutral or slightly positive, something teenagers might say casually to each other online. \
Avoid any form of bullying, blaming, sarcasm, mockery, offensive language, or any harsh or judgmental tone. \
Replace all harmful, negative, or offensive expressions with more neutral, respectful language while preserving the original intent of the message. \
Ensure the response is just the rewritten comment with no additional explanation or reasoning. \
The rewritten version should be appropriate for all audiences and sound conversational, like something a teen would write to a friend. \
Reply with the new sentence only: {}",
            text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_ends_with_text() {
        let prompt = PromptBuilder::rewrite_prompt("you are so dumb");
        assert!(prompt.starts_with("Rewrite the following social media comment"));
        assert!(prompt.ends_with("Reply with the new sentence only: you are so dumb"));
    }
}
