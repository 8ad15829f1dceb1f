pub mod analysis;
pub mod comment;
pub mod submission;
