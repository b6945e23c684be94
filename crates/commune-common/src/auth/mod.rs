//! Session token verification

mod session;

pub use session::{SessionClaims, SessionVerifier};
