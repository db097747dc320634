//! Route types.
//!
//! A `Route` is an ordered sequence of stops served by one tram line. The
//! order encodes physical traversal order in one direction; the line is
//! traversable in either direction by walking the sequence in reverse.

use super::Stop;

/// A tram line: a named, coloured, ordered sequence of stops.
///
/// A route's stop sequence contains no duplicate stop; this is validated
/// when the route graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Line name, e.g. "Altrincham – Piccadilly".
    pub name: String,

    /// Line colour as shown on network maps.
    pub colour: String,

    stops: Vec<Stop>,
}

impl Route {
    /// Create a new route from an ordered stop sequence.
    pub fn new(name: impl Into<String>, colour: impl Into<String>, stops: Vec<Stop>) -> Self {
        Self {
            name: name.into(),
            colour: colour.into(),
            stops,
        }
    }

    /// The route's stops in declared traversal order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Zero-based position of `stop` on this route, if it is served.
    pub fn position_of(&self, stop: &Stop) -> Option<usize> {
        self.stops.iter().position(|s| s.code == stop.code)
    }

    /// True if this route serves `stop`.
    pub fn serves(&self, stop: &Stop) -> bool {
        self.position_of(stop).is_some()
    }

    /// The stops strictly between `from` and `to`, in travel order.
    ///
    /// Travel direction is resolved from the two positions: if `to` comes
    /// earlier in the declared sequence, the slice is reversed. Adjacent
    /// stops yield an empty list. Returns `None` if either stop is not on
    /// this route.
    pub fn between(&self, from: &Stop, to: &Stop) -> Option<Vec<Stop>> {
        let a = self.position_of(from)?;
        let b = self.position_of(to)?;

        let stops = if a == b {
            Vec::new()
        } else if a < b {
            self.stops[a + 1..b].to_vec()
        } else {
            self.stops[b + 1..a].iter().rev().cloned().collect()
        };

        Some(stops)
    }
}
