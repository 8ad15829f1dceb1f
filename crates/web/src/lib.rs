pub mod config;
pub mod error;
pub mod features;
pub mod openapi;
pub mod routes;
pub mod state;

pub use state::AppState;
