//! Tag/qualifier routing tables
//!
//! Each pass owns a static table of routes. A route matches on the segment
//! tag and, optionally, on the segment qualifier (first component of the
//! first field). Exact qualifier routes win over wildcard routes.

use edi_adapter_edifact::Segment;

/// One entry in a routing table
#[derive(Debug, Clone, Copy)]
pub struct Route<H: 'static> {
    pub tag: &'static str,
    /// `None` matches any qualifier
    pub qualifier: Option<&'static str>,
    pub handler: H,
}

/// A `(tag, qualifier)` pair recognized by a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub tag: &'static str,
    pub qualifier: Option<&'static str>,
}

/// Static routing table for one pass
#[derive(Debug, Clone, Copy)]
pub struct HandlerTable<H: 'static> {
    routes: &'static [Route<H>],
}

impl<H: Copy> HandlerTable<H> {
    pub const fn new(routes: &'static [Route<H>]) -> Self {
        Self { routes }
    }

    /// Handler for a segment, if the table recognizes it
    pub fn lookup(&self, segment: &Segment) -> Option<H> {
        self.lookup_key(&segment.tag, segment.qualifier())
    }

    /// Handler for an explicit tag and qualifier
    pub fn lookup_key(&self, tag: &str, qualifier: &str) -> Option<H> {
        self.routes
            .iter()
            .find(|r| r.tag == tag && r.qualifier == Some(qualifier))
            .or_else(|| {
                self.routes
                    .iter()
                    .find(|r| r.tag == tag && r.qualifier.is_none())
            })
            .map(|r| r.handler)
    }

    /// All recognized `(tag, qualifier)` pairs, in table order
    pub fn keys(&self) -> impl Iterator<Item = RouteKey> + '_ {
        self.routes.iter().map(|r| RouteKey {
            tag: r.tag,
            qualifier: r.qualifier,
        })
    }

    /// Whether any route is registered for the tag
    pub fn recognizes_tag(&self, tag: &str) -> bool {
        self.routes.iter().any(|r| r.tag == tag)
    }
}
