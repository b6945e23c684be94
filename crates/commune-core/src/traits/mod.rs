//! Repository traits (ports)

mod repositories;

pub use repositories::{
    GroupRepository, PopularGroup, PostRepository, RepoResult, UserRepository,
};
