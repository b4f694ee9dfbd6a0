//! Segment splitter
//!
//! Splits raw message text into an ordered list of segments and each
//! segment into its tag and data elements. No release-character or
//! envelope handling happens here: the DELFOR converter works on plain
//! terminator/separator splits and tolerates whatever shape comes out.

use crate::normalize::split_component;
use crate::syntax::Separators;
use serde::Serialize;
use tracing::{debug, trace};

/// A split EDIFACT segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Segment tag (text before the first element separator)
    pub tag: String,
    /// Data elements after the tag, in order
    pub fields: Vec<String>,
    /// 1-based position of the segment within the message
    pub ordinal: usize,
    #[serde(skip)]
    component_separator: u8,
}

impl Segment {
    /// Split one trimmed segment string into tag and fields
    pub fn parse(raw: &str, ordinal: usize, separators: &Separators) -> Self {
        let mut parts = raw.split(separators.element_char());
        let tag = parts.next().unwrap_or_default().to_string();
        let fields = parts.map(str::to_string).collect();

        Self {
            tag,
            fields,
            ordinal,
            component_separator: separators.component,
        }
    }

    /// Field `n` (1-based, the tag is field 0); empty when the segment is shorter
    pub fn field(&self, n: usize) -> &str {
        match n {
            0 => &self.tag,
            n => self.fields.get(n - 1).map_or("", String::as_str),
        }
    }

    /// Whether field `n` exists at all
    pub fn has_field(&self, n: usize) -> bool {
        n == 0 || self.fields.len() >= n
    }

    /// Field `n` decomposed as `code:value`
    pub fn components(&self, n: usize) -> (&str, &str) {
        split_component(self.field(n), self.component_separator)
    }

    /// Whether field `n` contains the component separator
    pub fn is_composite(&self, n: usize) -> bool {
        self.field(n).as_bytes().contains(&self.component_separator)
    }

    /// Qualifier of the segment: the first component of field 1
    pub fn qualifier(&self) -> &str {
        self.components(1).0
    }
}

/// Split message text into segments.
///
/// Pieces between terminators are trimmed; empty or whitespace-only pieces
/// are dropped. Order is preserved and empty input yields no segments.
pub fn split_segments(text: &str, separators: &Separators) -> Vec<Segment> {
    let segments: Vec<Segment> = text
        .split(separators.segment_char())
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(idx, piece)| {
            let segment = Segment::parse(piece, idx + 1, separators);
            trace!(
                ordinal = segment.ordinal,
                tag = %segment.tag,
                fields = segment.fields.len(),
                "Split segment"
            );
            segment
        })
        .collect();

    debug!(segment_count = segments.len(), "Split message into segments");
    segments
}
