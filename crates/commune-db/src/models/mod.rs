//! Database models with SQLx `FromRow` derives

mod group;
mod post;
mod user;

pub use group::{GroupModel, PopularGroupModel};
pub use post::PostModel;
pub use user::UserModel;
