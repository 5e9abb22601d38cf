//! HTTP client and data records for the episode API.

pub mod models;
mod podcast;

pub use models::*;
pub use podcast::*;
