use spdlog::trace;

use crate::content::parsing_utils::{find_separator, split_title_pic};
use crate::content::{ScannedSource, SourceScanner};
use crate::error::ParseError;

/// Scanner for sources laid out as
/// ```text
/// Post title [optional/title/pic.png]
/// ---
/// markdown body
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct HeaderScanner;

impl SourceScanner for HeaderScanner {
    fn scan<'a>(&self, raw: &'a [u8]) -> Result<ScannedSource<'a>, ParseError> {
        let Some((header_end, body_start)) = find_separator(raw) else {
            return Err(ParseError::SeparatorNotFound);
        };
        trace!("Post separator found at bytes {}..{}", header_end, body_start);

        let (title, title_pic) = split_title_pic(&raw[..header_end]);
        if title.is_empty() {
            return Err(ParseError::PostTitleNotFound);
        }

        Ok(ScannedSource {
            title,
            title_pic,
            body: &raw[body_start..],
        })
    }
}
