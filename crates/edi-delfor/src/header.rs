//! Header pass: document-level attributes

use crate::dispatch::{HandlerTable, Route};
use crate::model::Schedule;
use edi_adapter_edifact::{Segment, format_date, sanitize};
use tracing::{debug, trace};

/// Header segment handler
pub type HeaderHandler = fn(&mut Schedule, &Segment);

static HEADER_ROUTES: &[Route<HeaderHandler>] = &[
    Route {
        tag: "NAD",
        qualifier: Some("SU"),
        handler: supplier_party,
    },
    Route {
        tag: "NAD",
        qualifier: Some("SF"),
        handler: ship_from_party,
    },
    Route {
        tag: "BGM",
        qualifier: None,
        handler: message_id,
    },
    Route {
        tag: "DTM",
        qualifier: Some("137"),
        handler: valid_from,
    },
    Route {
        tag: "DTM",
        qualifier: Some("159"),
        handler: valid_until,
    },
];

/// Routes recognized by the header pass
pub static HEADER_TABLE: HandlerTable<HeaderHandler> = HandlerTable::new(HEADER_ROUTES);

/// Scan all segments once and fill the schedule's header fields.
///
/// Repeated segments overwrite earlier values.
pub fn header_pass(schedule: &mut Schedule, segments: &[Segment]) {
    let mut applied = 0usize;
    for segment in segments {
        if let Some(handler) = HEADER_TABLE.lookup(segment) {
            trace!(ordinal = segment.ordinal, tag = %segment.tag, "Header segment");
            handler(schedule, segment);
            applied += 1;
        }
    }
    debug!(
        applied,
        message_id = schedule.message_id.as_deref().unwrap_or_default(),
        "Header pass finished"
    );
}

fn party_id(segment: &Segment) -> String {
    sanitize(segment.components(2).0)
}

fn supplier_party(schedule: &mut Schedule, segment: &Segment) {
    schedule.vendor_no = Some(party_id(segment));
}

fn ship_from_party(schedule: &mut Schedule, segment: &Segment) {
    schedule.ship_from = Some(party_id(segment));
}

fn message_id(schedule: &mut Schedule, segment: &Segment) {
    if let Some(previous) = &schedule.message_id {
        debug!(ordinal = segment.ordinal, %previous, "Repeated BGM overrides message id");
    }
    schedule.message_id = Some(sanitize(segment.field(2)));
}

/// Formatted date of a `DTM` segment, `None` when it formats to nothing
pub(crate) fn segment_date(segment: &Segment) -> Option<String> {
    Some(format_date(segment.components(1).1)).filter(|date| !date.is_empty())
}

pub(crate) fn valid_from(schedule: &mut Schedule, segment: &Segment) {
    if let Some(date) = segment_date(segment) {
        schedule.valid_from = Some(date);
    }
}

pub(crate) fn valid_until(schedule: &mut Schedule, segment: &Segment) {
    if let Some(date) = segment_date(segment) {
        schedule.valid_until = Some(date);
    }
}
