//! Cursor state threaded through the detail pass

/// Demand qualifier that opens a new demand line
pub const OPEN_DEMAND_QUALIFIER: &str = "4";

/// Cross-segment state of the detail pass.
///
/// Handlers take the context by value and return the updated one, so a
/// single transition can be exercised in isolation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanContext {
    /// Number of `LIN` segments seen so far
    pub line_counter: u32,
    /// Index of the current article line in `Schedule::article_lines`
    pub current_article: Option<usize>,
    /// Index of the current demand line in `Schedule::demand_lines`
    pub current_demand: Option<usize>,
    /// Qualifier of the most recent `SCC` segment
    pub demand_qualifier: Option<String>,
    /// Whether `QTY+3` currently attaches to the demand line
    pub demand_active: bool,
}

impl ScanContext {
    /// Fresh context: no lines open, counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last `SCC` qualifier opened a demand line
    pub fn in_demand_block(&self) -> bool {
        self.demand_qualifier.as_deref() == Some(OPEN_DEMAND_QUALIFIER)
    }

    /// Current demand line, only while activation is on
    pub fn active_demand(&self) -> Option<usize> {
        self.current_demand.filter(|_| self.demand_active)
    }
}
