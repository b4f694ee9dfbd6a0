//! Typed schedule records produced by the conversion passes

use serde::Serialize;

/// Schedule type emitted on every converted schedule
pub const SUPP_SCHED_TYPE: &str = "DELFOR";

/// Line type assigned to every demand line
pub const DEMAND_LINE_TYPE_ID: &str = "1";

/// One delivery schedule (one per message)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub message_id: Option<String>,
    pub vendor_no: Option<String>,
    pub ship_from: Option<String>,
    pub valid_from: Option<String>,
    pub valid_until: Option<String>,
    /// Article lines in creation order
    pub article_lines: Vec<ArticleLine>,
    /// Demand lines in creation order
    pub demand_lines: Vec<DemandLine>,
}

/// One shipped item, opened by a `LIN` segment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleLine {
    pub ean_code: String,
    /// Snapshot of the schedule's message id when the line was opened
    pub call_off_no: String,
    pub schedule_no: String,
    pub last_receipt_date: Option<String>,
    pub last_receipt_qty: Option<String>,
    pub supplier_ref: Option<String>,
}

/// One quantity-due-by-date entry, opened by `SCC+4`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemandLine {
    pub line_type_id: String,
    /// Snapshot of the schedule's ship-from party
    pub dock_code: String,
    pub schedule_no: String,
    /// Snapshot of the schedule's message id
    pub customer_po_no: String,
    pub delivery_due_date: Option<String>,
    pub to_date: Option<String>,
    pub cumulative_quantity_due: Option<String>,
}

impl Schedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new article line and return its index.
    ///
    /// `call_off_no` is copied from the current message id; later changes to
    /// the message id do not reach lines already opened.
    pub fn open_article_line(&mut self, ean_code: String, schedule_no: u32) -> usize {
        self.article_lines.push(ArticleLine {
            ean_code,
            call_off_no: self.message_id.clone().unwrap_or_default(),
            schedule_no: schedule_no.to_string(),
            ..ArticleLine::default()
        });
        self.article_lines.len() - 1
    }

    /// Append a new demand line and return its index.
    pub fn open_demand_line(&mut self, schedule_no: u32) -> usize {
        self.demand_lines.push(DemandLine {
            line_type_id: DEMAND_LINE_TYPE_ID.to_string(),
            dock_code: self.ship_from.clone().unwrap_or_default(),
            schedule_no: schedule_no.to_string(),
            customer_po_no: self.message_id.clone().unwrap_or_default(),
            ..DemandLine::default()
        });
        self.demand_lines.len() - 1
    }

    /// Whether no header field has been set and no line exists
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_line_snapshots_message_id() {
        let mut schedule = Schedule::new();
        schedule.message_id = Some("ORDER123".to_string());

        let idx = schedule.open_article_line("EAN001".to_string(), 1);
        schedule.message_id = Some("CHANGED".to_string());

        let line = &schedule.article_lines[idx];
        assert_eq!(line.call_off_no, "ORDER123");
        assert_eq!(line.schedule_no, "1");
        assert_eq!(line.ean_code, "EAN001");
        assert!(line.last_receipt_qty.is_none());
    }

    #[test]
    fn test_demand_line_copies_header_fields() {
        let mut schedule = Schedule::new();
        schedule.message_id = Some("ORDER123".to_string());
        schedule.ship_from = Some("DOCK7".to_string());

        let idx = schedule.open_demand_line(3);
        let line = &schedule.demand_lines[idx];
        assert_eq!(line.line_type_id, DEMAND_LINE_TYPE_ID);
        assert_eq!(line.dock_code, "DOCK7");
        assert_eq!(line.schedule_no, "3");
        assert_eq!(line.customer_po_no, "ORDER123");
        assert!(line.delivery_due_date.is_none());
    }

    #[test]
    fn test_lines_without_header_get_empty_copies() {
        let mut schedule = Schedule::new();
        assert!(schedule.is_empty());

        schedule.open_demand_line(0);
        assert!(!schedule.is_empty());
        assert_eq!(schedule.demand_lines[0].dock_code, "");
        assert_eq!(schedule.demand_lines[0].customer_po_no, "");
        assert_eq!(schedule.demand_lines[0].schedule_no, "0");
    }
}
