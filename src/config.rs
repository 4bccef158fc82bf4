use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::charset::Charset;
use crate::error::ConfigError;
use crate::post_render::ExtensionSet;

pub const DEFAULT_CHARSET: &str = "utf-8";
pub const DEFAULT_SOURCE_EXTENSION: &str = ".md";
pub const DEFAULT_SUMMARY_LENGTH: usize = 200;

fn default_charset() -> String {
    DEFAULT_CHARSET.to_string()
}

fn default_source_extension() -> String {
    DEFAULT_SOURCE_EXTENSION.to_string()
}

fn default_summary_length() -> usize {
    DEFAULT_SUMMARY_LENGTH
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParserConfig {
    #[serde(default = "default_charset")]
    pub charset: String,
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_summary_length")]
    pub summary_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            charset: default_charset(),
            source_extension: default_source_extension(),
            summary_length: default_summary_length(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
    // Console messages at this level or above go to stderr, the rest to stdout
    #[serde(default)]
    pub stderr_level: Option<LogLevel>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    pub log: Option<Log>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParserSettings {
    pub charset: Charset,
    pub source_extension: String,
    pub summary_length: usize,
    pub extensions: ExtensionSet,
}

impl Default for ParserSettings {
    fn default() -> Self {
        ParserSettings {
            charset: Charset::default(),
            source_extension: default_source_extension(),
            summary_length: DEFAULT_SUMMARY_LENGTH,
            extensions: ExtensionSet::fixed(),
        }
    }
}

impl TryFrom<&ParserConfig> for ParserSettings {
    type Error = ConfigError;

    fn try_from(cfg: &ParserConfig) -> Result<Self, Self::Error> {
        if cfg.summary_length == 0 {
            return Err(ConfigError::InvalidSummaryLength);
        }

        Ok(ParserSettings {
            charset: Charset::from_label(&cfg.charset)?,
            source_extension: cfg.source_extension.clone(),
            summary_length: cfg.summary_length,
            extensions: ExtensionSet::fixed(),
        })
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_string_lossy().to_string()));
    match (exe_dir, path.to_str()) {
        (Some(exe_dir), Some(str_path)) => PathBuf::from(str_path.replace("${exe_dir}", &exe_dir)),
        _ => path,
    }
}

pub fn parse_config(cfg_content: &str) -> anyhow::Result<Config> {
    let mut cfg: Config = toml::from_str::<Config>(cfg_content)
        .context("Error parsing configuration file")?;

    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> anyhow::Result<Config> {
    let cfg_content = fs::read_to_string(cfg_path)
        .with_context(|| format!("Error opening configuration file {}", cfg_path.display()))?;

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r##"
[parser]
charset = "latin1"
source_extension = ".txt"
summary_length = 120

[log]
level = "Debug"
log_to_console = true
location = "/var/log/postsrc.log"
stderr_level = "Error"
"##;
        let cfg = parse_config(toml_str).unwrap();
        assert_eq!(cfg.parser.charset, "latin1");
        assert_eq!(cfg.parser.source_extension, ".txt");
        assert_eq!(cfg.parser.summary_length, 120);

        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(log.log_to_console);
        assert_eq!(log.location, Some(PathBuf::from("/var/log/postsrc.log")));
        assert_eq!(log.stderr_level, Some(LogLevel::Error));

        let settings = ParserSettings::try_from(&cfg.parser).unwrap();
        assert_eq!(settings.charset.name(), "windows-1252");
        assert_eq!(settings.summary_length, 120);
        assert_eq!(settings.extensions, ExtensionSet::fixed());
    }

    #[test]
    fn test_parse_defaults() {
        let cfg = parse_config("").unwrap();
        assert!(cfg.log.is_none());

        let settings = ParserSettings::try_from(&cfg.parser).unwrap();
        assert_eq!(settings, ParserSettings::default());

        let cfg = parse_config("[parser]\nsummary_length = 50\n").unwrap();
        assert_eq!(cfg.parser.charset, DEFAULT_CHARSET);
        assert_eq!(cfg.parser.source_extension, DEFAULT_SOURCE_EXTENSION);
        assert_eq!(cfg.parser.summary_length, 50);
    }

    #[test]
    fn test_invalid_settings() {
        let cfg = ParserConfig { charset: "nope".to_string(), ..ParserConfig::default() };
        let res = ParserSettings::try_from(&cfg);
        assert_eq!(res, Err(ConfigError::UnknownCharset("nope".to_string())));

        let cfg = ParserConfig { summary_length: 0, ..ParserConfig::default() };
        let res = ParserSettings::try_from(&cfg);
        assert_eq!(res, Err(ConfigError::InvalidSummaryLength));
    }

    #[test]
    fn test_invalid_config() {
        assert!(parse_config("[parser]\nsummary_length = \"long\"\n").is_err());
        assert!(parse_config("[log]\nlevel = \"Loud\"\nlog_to_console = false\n").is_err());
    }

    #[test]
    fn test_exe_dir_expansion() {
        let path = parse_path(PathBuf::from("${exe_dir}/logs/postsrc.log"));
        assert!(!path.to_string_lossy().contains("${exe_dir}"));
        assert!(path.ends_with("logs/postsrc.log"));

        let path = parse_path(PathBuf::from("/tmp/postsrc.log"));
        assert_eq!(path, PathBuf::from("/tmp/postsrc.log"));
    }

    #[test]
    fn test_read_missing_config() {
        let res = read_config(Path::new("/definitely/not/here/postsrc.toml"));
        let err = res.unwrap_err();
        assert!(err.to_string().starts_with("Error opening configuration file"));
    }
}
