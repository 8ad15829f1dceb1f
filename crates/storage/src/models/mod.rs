mod category;
mod comment;
mod message;
mod submission;

pub use category::Category;
pub use comment::Comment;
pub use message::MessageRecord;
pub use submission::{GradedResponse, Judgment, NewSubmission, RecordedSubmission, UserResponse};
