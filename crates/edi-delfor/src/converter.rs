//! DELFOR message conversion entry point

use crate::detail::detail_pass;
use crate::header::header_pass;
use crate::model::Schedule;
use edi_adapter_edifact::{Segment, Separators, split_segments};
use tracing::info;

/// Converts DELFOR message text into a [`Schedule`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DelforConverter {
    separators: Separators,
}

impl DelforConverter {
    /// Create a converter using the default EDIFACT separators
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom separators
    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    /// Separators used for splitting
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Split and convert one message.
    ///
    /// Never fails: malformed segments degrade to empty values.
    pub fn convert(&self, text: &str) -> Schedule {
        let segments = split_segments(text, &self.separators);
        let schedule = convert_segments(&segments);
        info!(
            segments = segments.len(),
            article_lines = schedule.article_lines.len(),
            demand_lines = schedule.demand_lines.len(),
            "Converted DELFOR message"
        );
        schedule
    }
}

/// Run the header pass and then the detail pass over the same segments
pub fn convert_segments(segments: &[Segment]) -> Schedule {
    let mut schedule = Schedule::new();
    header_pass(&mut schedule, segments);
    detail_pass(&mut schedule, segments);
    schedule
}
