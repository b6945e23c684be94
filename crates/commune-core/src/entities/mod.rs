//! Domain entities

mod group;
mod post;
mod user;

pub use group::Group;
pub use post::Post;
pub use user::User;
