//! Custom Axum extractors

mod auth;
mod validated;

pub use auth::AuthUser;
pub use validated::{ValidatedJson, ValidatedQuery};
