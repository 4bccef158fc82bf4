pub mod config;
pub mod logger;
pub mod error;
pub mod charset;
pub mod content;
pub mod post;
pub mod post_render;
mod text_utils;
mod test_data;

pub use crate::error::{ConfigError, ParseError, SourceField};
pub use crate::post::{FilenameRecord, PostParser, PostRecord};
