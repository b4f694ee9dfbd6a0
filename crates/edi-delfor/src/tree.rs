//! Record tree assembly
//!
//! Fixed output shape:
//!
//! ```text
//! SCHEDULES
//! └── SCHEDULES
//!     └── SCHEDULE
//!         ├── SUPP_SCHED_TYPE
//!         ├── MESSAGE_ID / VENDOR_NO / SHIP_FROM / VALID_FROM / VALID_UNTIL
//!         ├── ARTICLE_LINES/ARTICLE_LINE*
//!         └── DEMAND_LINES/SCHEDULE_LINE*
//! ```

use crate::model::{ArticleLine, DemandLine, SUPP_SCHED_TYPE, Schedule};
use edi_ir::document::DocumentMetadata;
use edi_ir::{Document, Node, NodeType, Value};

pub const ROOT_NODE: &str = "SCHEDULES";
pub const SCHEDULES_NODE: &str = "SCHEDULES";
pub const SCHEDULE_NODE: &str = "SCHEDULE";
pub const ARTICLE_LINES_NODE: &str = "ARTICLE_LINES";
pub const ARTICLE_LINE_NODE: &str = "ARTICLE_LINE";
pub const DEMAND_LINES_NODE: &str = "DEMAND_LINES";
pub const DEMAND_LINE_NODE: &str = "SCHEDULE_LINE";

/// Path of the schedule record relative to the document root
pub const SCHEDULE_PATH: &str = "SCHEDULES/SCHEDULE";

fn date_field(node: &mut Node, name: &str, date: Option<&str>) {
    if let Some(date) = date {
        node.add_child(Node::with_value(
            name,
            NodeType::Field,
            Value::DateTime(date.to_string()),
        ));
    }
}

impl ArticleLine {
    /// Render the line as an `ARTICLE_LINE` record
    pub fn to_node(&self) -> Node {
        let mut node = Node::new(ARTICLE_LINE_NODE, NodeType::Record);
        node.add_field("EAN_CODE", &self.ean_code)
            .add_field("CALL_OFF_NO", &self.call_off_no)
            .add_field("SCHEDULE_NO", &self.schedule_no);
        date_field(&mut node, "LAST_RECEIPT_DATE", self.last_receipt_date.as_deref());
        node.add_optional_field("LAST_RECEIPT_QTY", self.last_receipt_qty.as_deref())
            .add_optional_field("SUPPLIER_REF", self.supplier_ref.as_deref());
        node
    }
}

impl DemandLine {
    /// Render the line as a `SCHEDULE_LINE` record
    pub fn to_node(&self) -> Node {
        let mut node = Node::new(DEMAND_LINE_NODE, NodeType::Record);
        node.add_field("LINE_TYPE_ID", &self.line_type_id)
            .add_field("DOCK_CODE", &self.dock_code)
            .add_field("SCHEDULE_NO", &self.schedule_no)
            .add_field("CUSTOMER_PO_NO", &self.customer_po_no);
        date_field(&mut node, "DELIVERY_DUE_DATE", self.delivery_due_date.as_deref());
        date_field(&mut node, "TO_DATE", self.to_date.as_deref());
        node.add_optional_field(
            "CUMULATIVE_QUANTITY_DUE",
            self.cumulative_quantity_due.as_deref(),
        );
        node
    }
}

impl Schedule {
    /// Render the `SCHEDULE` record with both line collections
    pub fn to_node(&self) -> Node {
        let mut node = Node::new(SCHEDULE_NODE, NodeType::Record);
        node.add_field("SUPP_SCHED_TYPE", SUPP_SCHED_TYPE)
            .add_optional_field("MESSAGE_ID", self.message_id.as_deref())
            .add_optional_field("VENDOR_NO", self.vendor_no.as_deref())
            .add_optional_field("SHIP_FROM", self.ship_from.as_deref());
        date_field(&mut node, "VALID_FROM", self.valid_from.as_deref());
        date_field(&mut node, "VALID_UNTIL", self.valid_until.as_deref());

        let mut article_lines = Node::new(ARTICLE_LINES_NODE, NodeType::Collection);
        for line in &self.article_lines {
            article_lines.add_child(line.to_node());
        }
        let mut demand_lines = Node::new(DEMAND_LINES_NODE, NodeType::Collection);
        for line in &self.demand_lines {
            demand_lines.add_child(line.to_node());
        }
        node.add_child(article_lines).add_child(demand_lines);
        node
    }

    /// Wrap the schedule in the full document tree
    pub fn to_document(&self) -> Document {
        let mut schedules = Node::new(SCHEDULES_NODE, NodeType::Collection);
        schedules.add_child(self.to_node());
        let mut root = Node::new(ROOT_NODE, NodeType::Root);
        root.add_child(schedules);

        let metadata = DocumentMetadata {
            doc_type: Some(SUPP_SCHED_TYPE.to_string()),
            message_refs: self.message_id.iter().cloned().collect(),
            ..DocumentMetadata::default()
        };
        Document::with_metadata(root, metadata)
    }
}
