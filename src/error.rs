use std::fmt;
use std::fmt::Formatter;

use thiserror::Error;

/// Which part of a post source was being decoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceField {
    Title,
    TitlePic,
    Body,
}

impl fmt::Display for SourceField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceField::Title => "title",
            SourceField::TitlePic => "title_pic",
            SourceField::Body => "body",
        };
        write!(f, "{}", name)
    }
}

/// Failures of a single parse call. All of them are problems with the input,
/// calling again with the same input fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("separator between post header and body not found")]
    SeparatorNotFound,

    #[error("post title not found")]
    PostTitleNotFound,

    #[error("post {field} is not valid {charset}")]
    Encoding {
        field: SourceField,
        charset: &'static str,
    },

    #[error("invalid post name `{name}`, expected YYYY-MM-DD-HH-MM")]
    PostNameInvalid { name: String },

    #[error("error rendering markdown: {reason}")]
    Render { reason: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown charset `{0}`")]
    UnknownCharset(String),

    #[error("summary length must be greater than zero")]
    InvalidSummaryLength,
}
