//! Detail pass: article lines and demand lines
//!
//! The pass walks the segments in order and threads a [`ScanContext`]
//! through one handler call per routed segment. `QTY` and `DTM` segments
//! only take effect once an article line is open.

use crate::context::ScanContext;
use crate::dispatch::{HandlerTable, Route};
use crate::header::{segment_date, valid_from, valid_until};
use crate::model::Schedule;
use edi_adapter_edifact::{Segment, sanitize};
use tracing::{debug, trace};

/// Detail segment handler: one state-machine transition
pub type DetailHandler = fn(&mut Schedule, ScanContext, &Segment) -> ScanContext;

/// Tags ignored until the first article line is open
const ARTICLE_SCOPED_TAGS: [&str; 2] = ["QTY", "DTM"];

/// Receipt quantity written when `QTY+79` carries no value component
const MISSING_RECEIPT_QTY: &str = "0";

static DETAIL_ROUTES: &[Route<DetailHandler>] = &[
    Route {
        tag: "LIN",
        qualifier: None,
        handler: open_article_line,
    },
    Route {
        tag: "SCC",
        qualifier: Some("4"),
        handler: open_demand_line,
    },
    Route {
        tag: "SCC",
        qualifier: None,
        handler: deactivate_demand,
    },
    Route {
        tag: "QTY",
        qualifier: Some("79"),
        handler: last_receipt_qty,
    },
    Route {
        tag: "QTY",
        qualifier: Some("3"),
        handler: cumulative_quantity_due,
    },
    Route {
        tag: "DTM",
        qualifier: Some("158"),
        handler: delivery_due_date,
    },
    Route {
        tag: "DTM",
        qualifier: Some("137"),
        handler: schedule_valid_from,
    },
    Route {
        tag: "DTM",
        qualifier: Some("11"),
        handler: last_receipt_date,
    },
    Route {
        tag: "DTM",
        qualifier: Some("159"),
        handler: schedule_valid_until,
    },
    Route {
        tag: "RFF",
        qualifier: None,
        handler: supplier_ref,
    },
];

/// Routes recognized by the detail pass
pub static DETAIL_TABLE: HandlerTable<DetailHandler> = HandlerTable::new(DETAIL_ROUTES);

/// Build article and demand lines from the segments.
///
/// Must run after [`crate::header_pass`] so that lines copy final header
/// values. Returns the context as it stood after the last segment.
pub fn detail_pass(schedule: &mut Schedule, segments: &[Segment]) -> ScanContext {
    let ctx = segments
        .iter()
        .fold(ScanContext::new(), |ctx, segment| step(schedule, ctx, segment));

    debug!(
        article_lines = schedule.article_lines.len(),
        demand_lines = schedule.demand_lines.len(),
        "Detail pass finished"
    );
    ctx
}

/// Apply one segment to the schedule and return the next context
pub fn step(schedule: &mut Schedule, ctx: ScanContext, segment: &Segment) -> ScanContext {
    let Some(handler) = DETAIL_TABLE.lookup(segment) else {
        if !DETAIL_TABLE.recognizes_tag(&segment.tag) {
            trace!(
                ordinal = segment.ordinal,
                tag = %segment.tag,
                "Segment not used by detail pass"
            );
        }
        return ctx;
    };

    if ctx.current_article.is_none() && ARTICLE_SCOPED_TAGS.contains(&segment.tag.as_str()) {
        debug!(
            ordinal = segment.ordinal,
            tag = %segment.tag,
            "No article line open, segment skipped"
        );
        return ctx;
    }

    handler(schedule, ctx, segment)
}

fn open_article_line(
    schedule: &mut Schedule,
    mut ctx: ScanContext,
    segment: &Segment,
) -> ScanContext {
    ctx.line_counter = ctx.line_counter.saturating_add(1);
    let ean_code = if segment.is_composite(3) {
        sanitize(segment.components(3).0)
    } else {
        String::new()
    };
    let idx = schedule.open_article_line(ean_code, ctx.line_counter);
    trace!(ordinal = segment.ordinal, schedule_no = ctx.line_counter, "Opened article line");
    ctx.current_article = Some(idx);
    ctx
}

fn open_demand_line(
    schedule: &mut Schedule,
    mut ctx: ScanContext,
    segment: &Segment,
) -> ScanContext {
    let idx = schedule.open_demand_line(ctx.line_counter);
    trace!(ordinal = segment.ordinal, schedule_no = ctx.line_counter, "Opened demand line");
    ctx.demand_qualifier = Some(segment.qualifier().to_string());
    ctx.current_demand = Some(idx);
    ctx.demand_active = true;
    ctx
}

fn deactivate_demand(_: &mut Schedule, mut ctx: ScanContext, segment: &Segment) -> ScanContext {
    ctx.demand_qualifier = Some(segment.qualifier().to_string());
    ctx.demand_active = false;
    ctx
}

fn last_receipt_qty(schedule: &mut Schedule, ctx: ScanContext, segment: &Segment) -> ScanContext {
    if let Some(line) = ctx.current_article.and_then(|idx| schedule.article_lines.get_mut(idx)) {
        let qty = if segment.is_composite(1) {
            sanitize(segment.components(1).1)
        } else {
            MISSING_RECEIPT_QTY.to_string()
        };
        line.last_receipt_qty = Some(qty);
    }
    ctx
}

fn cumulative_quantity_due(
    schedule: &mut Schedule,
    ctx: ScanContext,
    segment: &Segment,
) -> ScanContext {
    // The quantity is taken raw, without sanitizing.
    if let Some(line) = ctx.active_demand().and_then(|idx| schedule.demand_lines.get_mut(idx)) {
        line.cumulative_quantity_due = Some(segment.components(1).1.to_string());
    }
    ctx
}

fn delivery_due_date(schedule: &mut Schedule, ctx: ScanContext, segment: &Segment) -> ScanContext {
    if !ctx.in_demand_block() {
        return ctx;
    }
    let date = segment_date(segment);
    if let (Some(date), Some(line)) = (
        date,
        ctx.current_demand.and_then(|idx| schedule.demand_lines.get_mut(idx)),
    ) {
        line.to_date = Some(date.clone());
        line.delivery_due_date = Some(date);
    }
    ctx
}

fn last_receipt_date(schedule: &mut Schedule, ctx: ScanContext, segment: &Segment) -> ScanContext {
    if let (Some(date), Some(line)) = (
        segment_date(segment),
        ctx.current_article.and_then(|idx| schedule.article_lines.get_mut(idx)),
    ) {
        line.last_receipt_date = Some(date);
    }
    ctx
}

fn schedule_valid_from(
    schedule: &mut Schedule,
    ctx: ScanContext,
    segment: &Segment,
) -> ScanContext {
    valid_from(schedule, segment);
    ctx
}

fn schedule_valid_until(
    schedule: &mut Schedule,
    ctx: ScanContext,
    segment: &Segment,
) -> ScanContext {
    valid_until(schedule, segment);
    ctx
}

fn supplier_ref(schedule: &mut Schedule, ctx: ScanContext, segment: &Segment) -> ScanContext {
    match ctx.current_article.and_then(|idx| schedule.article_lines.get_mut(idx)) {
        Some(line) => line.supplier_ref = Some(sanitize(segment.components(1).1)),
        None => debug!(ordinal = segment.ordinal, "RFF before any LIN, skipped"),
    }
    ctx
}
