//! EDIFACT syntax definitions and delimiter handling
//!
//! This module holds the default separators used in EDIFACT documents and
//! the checks applied to separators supplied by configuration.

use crate::{Error, Result};
use serde::Serialize;

/// Default EDIFACT separators
pub const DEFAULT_COMPONENT_SEPARATOR: u8 = b':';
pub const DEFAULT_ELEMENT_SEPARATOR: u8 = b'+';
pub const DEFAULT_SEGMENT_TERMINATOR: u8 = b'\'';

/// Separators used for splitting EDIFACT text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Separators {
    /// Component separator (default ':')
    pub component: u8,
    /// Element separator (default '+')
    pub element: u8,
    /// Segment terminator (default '\'')
    pub segment: u8,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            component: DEFAULT_COMPONENT_SEPARATOR,
            element: DEFAULT_ELEMENT_SEPARATOR,
            segment: DEFAULT_SEGMENT_TERMINATOR,
        }
    }
}

impl Separators {
    /// Build separators from configured characters.
    ///
    /// Each separator must be a single printable ASCII character and no two
    /// may be equal, otherwise splitting would be ambiguous.
    pub fn from_chars(segment: char, element: char, component: char) -> Result<Self> {
        let separators = Self {
            component: ascii_byte("component", component)?,
            element: ascii_byte("element", element)?,
            segment: ascii_byte("segment", segment)?,
        };
        separators.validate()?;
        Ok(separators)
    }

    /// Reject separator sets that would make splitting ambiguous
    pub fn validate(&self) -> Result<()> {
        if self.component == self.element
            || self.component == self.segment
            || self.element == self.segment
        {
            return Err(Error::Separator(format!(
                "separators must be distinct (segment '{}', element '{}', component '{}')",
                self.segment_char(),
                self.element_char(),
                self.component_char()
            )));
        }
        Ok(())
    }

    /// Segment terminator as a `char`
    pub fn segment_char(&self) -> char {
        char::from(self.segment)
    }

    /// Element separator as a `char`
    pub fn element_char(&self) -> char {
        char::from(self.element)
    }

    /// Component separator as a `char`
    pub fn component_char(&self) -> char {
        char::from(self.component)
    }
}

fn ascii_byte(role: &str, c: char) -> Result<u8> {
    if c.is_ascii_graphic() {
        // is_ascii_graphic guarantees a single byte
        Ok(c as u8)
    } else {
        Err(Error::Separator(format!(
            "{role} separator {c:?} is not a printable ASCII character"
        )))
    }
}
