//! Application services

mod context;
mod error;
mod group;
mod user;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use group::GroupService;
pub use user::UserService;
