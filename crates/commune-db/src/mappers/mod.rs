//! Entity <-> model mappers

mod group;
mod post;
mod user;
