//! PostgreSQL repository implementations

mod error;
mod group;
mod post;
mod user;

pub use group::PgGroupRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
