pub mod analysis;
pub mod comments;
pub mod submissions;
