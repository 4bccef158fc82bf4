use crate::error::ParseError;

pub mod header_scanner;
pub mod parsing_utils;

/// Raw pieces of a post source, still in the source encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedSource<'a> {
    pub title: &'a [u8],
    pub title_pic: &'a [u8],
    pub body: &'a [u8],
}

/// Splits a post source into title, title picture and markdown body.
///
/// Implementations must be deterministic and must not keep state between
/// calls. A failure is either [`ParseError::SeparatorNotFound`] or
/// [`ParseError::PostTitleNotFound`].
pub trait SourceScanner {
    fn scan<'a>(&self, raw: &'a [u8]) -> Result<ScannedSource<'a>, ParseError>;
}
