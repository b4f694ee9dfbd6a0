//! XML output configuration

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text encoding declared in, and used for, the XML output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum XmlEncoding {
    /// ISO-8859-1 (default, what downstream DELFOR consumers expect)
    #[default]
    #[serde(rename = "iso-8859-1", alias = "ISO-8859-1", alias = "latin1")]
    Latin1,
    /// UTF-8
    #[serde(rename = "utf-8", alias = "UTF-8", alias = "utf8")]
    Utf8,
}

impl XmlEncoding {
    /// Label written into the XML declaration
    pub fn label(self) -> &'static str {
        match self {
            XmlEncoding::Latin1 => "ISO-8859-1",
            XmlEncoding::Utf8 => "UTF-8",
        }
    }

    /// Encode UTF-8 XML text into this encoding.
    ///
    /// Characters outside ISO-8859-1 are written as numeric character
    /// references, so this only has to be applied to markup whose names
    /// are ASCII.
    pub fn encode(self, xml: &str) -> Vec<u8> {
        match self {
            XmlEncoding::Utf8 => xml.as_bytes().to_vec(),
            XmlEncoding::Latin1 => {
                let mut out = Vec::with_capacity(xml.len());
                for c in xml.chars() {
                    match u8::try_from(u32::from(c)) {
                        Ok(byte) => out.push(byte),
                        Err(_) => out.extend_from_slice(format!("&#{};", u32::from(c)).as_bytes()),
                    }
                }
                out
            }
        }
    }
}

impl fmt::Display for XmlEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for XmlEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iso-8859-1" | "latin1" | "latin-1" => Ok(XmlEncoding::Latin1),
            "utf-8" | "utf8" => Ok(XmlEncoding::Utf8),
            _ => Err(Error::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// Configuration for the XML writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlConfig {
    /// Output encoding (default: ISO-8859-1)
    pub encoding: XmlEncoding,
    /// Spaces per nesting level; 0 writes everything on one line (default: 2)
    pub indent: usize,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            encoding: XmlEncoding::default(),
            indent: 2,
        }
    }
}

impl XmlConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output encoding
    pub fn encoding(mut self, encoding: XmlEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the indentation width
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
