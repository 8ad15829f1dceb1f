/// One text-analysis result kept for later review.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord {
    pub text: String,
    pub is_bullying: bool,
    pub toxicity_score: f64,
    pub sentiment_score: f64,
    pub suggested_text: String,
    pub person_or_pronoun: bool,
    pub classifier_score: f64,
    pub zone: String,
    pub likelihood: String,
    pub comment: String,
}
