use std::fmt;
use std::fmt::Formatter;

use chrono::NaiveDateTime;
use serde::Serialize;
use spdlog::{debug, warn};

use crate::config::{ParserConfig, ParserSettings};
use crate::content::header_scanner::HeaderScanner;
use crate::content::SourceScanner;
use crate::error::{ConfigError, ParseError, SourceField};
use crate::post_render::{MarkdownRenderer, CmarkRenderer};
use crate::text_utils::{char_prefix, format_date_time, parse_name_date_time};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRecord {
    pub title: String,
    pub markdown: String,
    pub html: String,
    pub summary: String,
    pub title_pic: String,
}

impl fmt::Display for PostRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "title={}, title_pic={}\nmarkdown:\n{}",
               self.title,
               self.title_pic,
               self.markdown
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilenameRecord {
    pub name: String,
    pub datetime: NaiveDateTime,
    pub filepath: String,
}

impl fmt::Display for FilenameRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (date, time) = format_date_time(&self.datetime);
        write!(f, "name={}, date={}, time={}, file={}", self.name, date, time, self.filepath)
    }
}

pub struct PostParser<S = HeaderScanner, R = CmarkRenderer> {
    scanner: S,
    renderer: R,
    settings: ParserSettings,
}

impl PostParser {
    pub fn from_config(cfg: &ParserConfig) -> Result<PostParser, ConfigError> {
        let settings = ParserSettings::try_from(cfg)?;
        Ok(PostParser::new(HeaderScanner, CmarkRenderer, settings))
    }
}

impl Default for PostParser {
    fn default() -> Self {
        PostParser::new(HeaderScanner, CmarkRenderer, ParserSettings::default())
    }
}

impl<S: SourceScanner, R: MarkdownRenderer> PostParser<S, R> {
    pub fn new(scanner: S, renderer: R, settings: ParserSettings) -> Self {
        PostParser {
            scanner,
            renderer,
            settings,
        }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    pub fn render_markdown(&self, md_text: &str) -> Result<String, ParseError> {
        self.renderer.render(md_text, &self.settings.extensions)
    }

    /// Fields are decoded in order and the first invalid one is reported
    pub fn parse(&self, raw: &[u8]) -> Result<PostRecord, ParseError> {
        let scanned = self.scanner.scan(raw)?;

        let charset = &self.settings.charset;
        let title = charset.decode(SourceField::Title, scanned.title)?;
        let title_pic = charset.decode(SourceField::TitlePic, scanned.title_pic)?;
        let markdown = charset.decode(SourceField::Body, scanned.body)?;

        let html = self.render_markdown(&markdown)?;
        let summary = self.render_markdown(char_prefix(&markdown, self.settings.summary_length))?;

        debug!("Parsed post '{}' ({} bytes of markdown)", title, markdown.len());

        Ok(PostRecord {
            title,
            markdown,
            html,
            summary,
            title_pic,
        })
    }

    /// e.g. `posts/2021-05-01-12-30.md`. The file is never touched.
    pub fn parse_filename(&self, filepath: &str) -> Result<FilenameRecord, ParseError> {
        let base_name = filepath.rsplit('/').next().unwrap_or_default();

        let Some(name) = base_name.strip_suffix(self.settings.source_extension.as_str()) else {
            warn!("Post file {} does not end with {}", filepath, self.settings.source_extension);
            return Err(ParseError::PostNameInvalid { name: base_name.to_string() });
        };

        let datetime = match parse_name_date_time(name) {
            Ok(d) => d,
            Err(e) => {
                warn!("{} - file={}", e, filepath);
                return Err(ParseError::PostNameInvalid { name: name.to_string() });
            }
        };
        debug!("Post file {} dated {}", filepath, datetime);

        Ok(FilenameRecord {
            name: name.to_string(),
            datetime,
            filepath: filepath.to_string(),
        })
    }
}
