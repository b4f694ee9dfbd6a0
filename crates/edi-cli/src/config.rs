//! CLI configuration file
//!
//! All keys are optional; unknown keys are rejected so that typos surface
//! as errors instead of silently falling back to defaults.

use edi_adapter_edifact::Separators;
use edi_adapter_xml::{XmlConfig, XmlEncoding};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::Level;

/// Errors raised while loading or applying configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {message}")]
    Read { path: String, message: String },

    #[error("invalid config '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("invalid separators: {0}")]
    Separators(#[from] edi_adapter_edifact::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when neither `RUST_LOG` nor `-v` is given
    pub log_level: Option<LogLevel>,
    pub separators: SeparatorConfig,
    pub output: OutputConfig,
}

/// Log level names accepted in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// EDIFACT separator characters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeparatorConfig {
    pub segment: char,
    pub element: char,
    pub component: char,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        let separators = Separators::default();
        Self {
            segment: separators.segment_char(),
            element: separators.element_char(),
            component: separators.component_char(),
        }
    }
}

impl SeparatorConfig {
    /// Validate and convert into splitter separators
    pub fn to_separators(&self) -> Result<Separators, ConfigError> {
        Ok(Separators::from_chars(
            self.segment,
            self.element,
            self.component,
        )?)
    }
}

/// Output format of the `convert` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
}

impl OutputFormat {
    /// File name used when no output path is given
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Xml => "delforoutput.xml",
            OutputFormat::Json => "delforoutput.json",
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub encoding: XmlEncoding,
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let xml = XmlConfig::default();
        Self {
            format: OutputFormat::default(),
            encoding: xml.encoding,
            indent: xml.indent,
        }
    }
}

impl CliConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&text).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, all-defaults config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CliConfig::from_yaml("").unwrap(), CliConfig::default());
        let config = CliConfig::default();
        assert_eq!(config.output.format, OutputFormat::Xml);
        assert_eq!(config.output.encoding, XmlEncoding::Latin1);
        assert_eq!(config.output.indent, 2);
        assert_eq!(config.separators.to_separators().unwrap(), Separators::default());
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
log_level: debug
separators:
  segment: "~"
  element: "*"
  component: ">"
output:
  format: json
  encoding: utf-8
  indent: 0
"#;
        let config = CliConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.log_level, Some(LogLevel::Debug));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.encoding, XmlEncoding::Utf8);
        assert_eq!(config.output.indent, 0);

        let separators = config.separators.to_separators().unwrap();
        assert_eq!(separators.segment_char(), '~');
        assert_eq!(separators.element_char(), '*');
        assert_eq!(separators.component_char(), '>');
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = CliConfig::from_yaml("output:\n  indent: 4\n").unwrap();
        assert_eq!(config.output.indent, 4);
        assert_eq!(config.output.encoding, XmlEncoding::Latin1);
        assert_eq!(config.separators, SeparatorConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CliConfig::from_yaml("color: neon").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_ambiguous_separators_rejected() {
        let config = CliConfig::from_yaml("separators:\n  element: \":\"\n").unwrap();
        assert!(matches!(
            config.separators.to_separators(),
            Err(ConfigError::Separators(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = CliConfig::load(Path::new("/no/such/delfor.yaml")).unwrap_err();
        assert!(err.to_string().contains("/no/such/delfor.yaml"));
    }
}
