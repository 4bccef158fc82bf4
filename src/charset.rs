use encoding_rs::{Encoding, UTF_8};

use crate::error::{ConfigError, ParseError, SourceField};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Charset(&'static Encoding);

impl Charset {
    pub fn from_label(label: &str) -> Result<Charset, ConfigError> {
        match Encoding::for_label(label.trim().as_bytes()) {
            Some(encoding) => Ok(Charset(encoding)),
            None => Err(ConfigError::UnknownCharset(label.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    // No BOM sniffing, no replacement characters
    pub fn decode(&self, field: SourceField, bytes: &[u8]) -> Result<String, ParseError> {
        match self.0.decode_without_bom_handling_and_without_replacement(bytes) {
            Some(text) => Ok(text.into_owned()),
            None => Err(ParseError::Encoding {
                field,
                charset: self.name(),
            }),
        }
    }
}

impl Default for Charset {
    fn default() -> Self {
        Charset(UTF_8)
    }
}
