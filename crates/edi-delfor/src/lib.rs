#![deny(rust_2018_idioms)]
#![warn(clippy::all)]

//! # edi-delfor
//!
//! DELFOR (delivery schedule) conversion into a schedule record tree.
//!
//! Conversion runs two passes over the split segments: a header pass that
//! collects document-level attributes, then a detail pass that builds
//! article lines and demand lines while threading a [`ScanContext`].

pub mod context;
pub mod converter;
pub mod detail;
pub mod dispatch;
pub mod header;
pub mod model;
pub mod tree;

pub use context::ScanContext;
pub use converter::{DelforConverter, convert_segments};
pub use detail::{DETAIL_TABLE, detail_pass, step};
pub use dispatch::{HandlerTable, Route, RouteKey};
pub use header::{HEADER_TABLE, header_pass};
pub use model::{ArticleLine, DemandLine, SUPP_SCHED_TYPE, Schedule};

/// Convert message text with the default separators
pub fn convert(text: &str) -> Schedule {
    DelforConverter::new().convert(text)
}
