use super::Category;

/// A labelled social-media comment from the quiz pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    pub text: String,
    pub display_name: String,
    pub category: Category,
}

impl Comment {
    pub fn new(
        comment_id: i32,
        text: impl Into<String>,
        display_name: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            comment_id,
            text: text.into(),
            display_name: display_name.into(),
            category,
        }
    }
}
