//! Planned journey types.
//!
//! A `PlannedJourney` is the immutable result of a planning request: a
//! single-route trip, or a two-leg trip through one interchange stop.

use super::Stop;

/// The second leg of an interchange journey.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InterchangeLeg {
    /// Stop where the traveller changes trams.
    stop: Stop,

    /// Stops strictly between the interchange and the destination,
    /// in travel order.
    stops_to_destination: Vec<Stop>,
}

/// A complete planned journey from origin to destination.
///
/// Constructed once per planning request and read-only afterwards. A
/// journey either runs directly along one route, or changes exactly once
/// at an interchange stop; the interchange leg is present only in the
/// second case, so an "interchange required but no interchange stop"
/// state cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedJourney {
    origin: Stop,
    destination: Stop,

    /// Stops strictly between the origin and the interchange (or the
    /// destination, for a direct journey), in travel order.
    stops_from_origin: Vec<Stop>,

    interchange: Option<InterchangeLeg>,
}

impl PlannedJourney {
    /// A journey along a single route, with no change of tram.
    ///
    /// `stops_from_origin` may be empty: adjacent stops are a valid
    /// journey.
    pub fn direct(origin: Stop, destination: Stop, stops_from_origin: Vec<Stop>) -> Self {
        Self {
            origin,
            destination,
            stops_from_origin,
            interchange: None,
        }
    }

    /// A two-leg journey changing trams once at `interchange`.
    pub fn via_interchange(
        origin: Stop,
        destination: Stop,
        stops_from_origin: Vec<Stop>,
        interchange: Stop,
        stops_from_interchange: Vec<Stop>,
    ) -> Self {
        Self {
            origin,
            destination,
            stops_from_origin,
            interchange: Some(InterchangeLeg {
                stop: interchange,
                stops_to_destination: stops_from_interchange,
            }),
        }
    }

    /// The journey's origin stop.
    pub fn origin(&self) -> &Stop {
        &self.origin
    }

    /// The journey's destination stop.
    pub fn destination(&self) -> &Stop {
        &self.destination
    }

    /// True if the traveller must change trams.
    pub fn requires_interchange(&self) -> bool {
        self.interchange.is_some()
    }

    /// The interchange stop, when one is required.
    pub fn interchange_stop(&self) -> Option<&Stop> {
        self.interchange.as_ref().map(|leg| &leg.stop)
    }

    /// Stops strictly between the origin and the interchange (or the
    /// destination, for a direct journey), in travel order.
    pub fn stops_from_origin(&self) -> &[Stop] {
        &self.stops_from_origin
    }

    /// Stops strictly between the interchange and the destination, when an
    /// interchange is required.
    pub fn stops_from_interchange(&self) -> Option<&[Stop]> {
        self.interchange
            .as_ref()
            .map(|leg| leg.stops_to_destination.as_slice())
    }

    /// Every stop on the journey in travel order: origin, intermediate
    /// stops, the interchange and its intermediate stops if present, then
    /// the destination.
    pub fn calling_points(&self) -> impl Iterator<Item = &Stop> {
        let change = self.interchange.iter().flat_map(|leg| {
            std::iter::once(&leg.stop).chain(leg.stops_to_destination.iter())
        });

        std::iter::once(&self.origin)
            .chain(self.stops_from_origin.iter())
            .chain(change)
            .chain(std::iter::once(&self.destination))
    }
}
