use std::collections::BTreeSet;
use std::fmt;
use std::fmt::Formatter;

use pulldown_cmark::{Options, Parser};

use crate::error::ParseError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkdownExtension {
    Footnotes,
    SmartTypography,
    Tables,
    FencedCode,
}

impl fmt::Display for MarkdownExtension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkdownExtension::Footnotes => "footnotes",
            MarkdownExtension::SmartTypography => "smarty",
            MarkdownExtension::Tables => "tables",
            MarkdownExtension::FencedCode => "fenced_code",
        };
        write!(f, "{}", name)
    }
}

/// Unordered set of markdown extensions handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<MarkdownExtension>);

impl ExtensionSet {
    pub fn new<I: IntoIterator<Item = MarkdownExtension>>(extensions: I) -> Self {
        ExtensionSet(extensions.into_iter().collect())
    }

    /// The set every post is rendered with, both body and summary.
    pub fn fixed() -> Self {
        Self::new([
            MarkdownExtension::Footnotes,
            MarkdownExtension::SmartTypography,
            MarkdownExtension::Tables,
            MarkdownExtension::FencedCode,
        ])
    }

    pub fn contains(&self, extension: MarkdownExtension) -> bool {
        self.0.contains(&extension)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkdownExtension> {
        self.0.iter()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::fixed()
    }
}

pub trait MarkdownRenderer {
    fn render(&self, md_text: &str, extensions: &ExtensionSet) -> Result<String, ParseError>;
}

/// Renderer backed by `pulldown-cmark`. Raw HTML in the source is kept as is
/// and smart punctuation only touches text, never tags or attributes.
/// Fenced code is part of CommonMark there, so it cannot be switched off.
#[derive(Debug, Default, Copy, Clone)]
pub struct CmarkRenderer;

impl CmarkRenderer {
    fn options(extensions: &ExtensionSet) -> Options {
        let mut opts = Options::empty();
        if extensions.contains(MarkdownExtension::Footnotes) {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if extensions.contains(MarkdownExtension::SmartTypography) {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        if extensions.contains(MarkdownExtension::Tables) {
            opts.insert(Options::ENABLE_TABLES);
        }
        opts
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, md_text: &str, extensions: &ExtensionSet) -> Result<String, ParseError> {
        let parser = Parser::new_ext(md_text, Self::options(extensions));
        let mut html = String::with_capacity(md_text.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, parser);
        Ok(html)
    }
}
