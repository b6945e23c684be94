//! Value objects

mod snowflake;
mod theme;

pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use theme::{Theme, ThemeParseError};
