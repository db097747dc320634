//! Direct and interchange journey search.

use crate::domain::{PlannedJourney, Stop, StopCode};
use crate::network::RouteGraph;

/// Errors from journey planning.
///
/// Both are terminal for the request: the network topology does not
/// change within the process lifetime, so retrying cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Origin and destination are the same stop
    #[error("origin and destination are both {0}: nothing to plan")]
    SameStop(StopCode),

    /// No direct or single-interchange path exists
    #[error("no route between {origin} and {destination}")]
    NoRoute {
        origin: StopCode,
        destination: StopCode,
    },
}

/// An interchange candidate found during the search.
struct Candidate {
    stop: Stop,
    stops_from_origin: Vec<Stop>,
    stops_to_destination: Vec<Stop>,
}

impl Candidate {
    /// Ranking key: fewest stops from the origin first, then fewest stops
    /// on to the destination. Remaining ties keep the first candidate
    /// found under the fixed route/stop enumeration order.
    fn cost(&self) -> (usize, usize) {
        (self.stops_from_origin.len(), self.stops_to_destination.len())
    }
}

/// Journey planner over an immutable route graph.
pub struct Planner<'a> {
    graph: &'a RouteGraph<'a>,
}

impl<'a> Planner<'a> {
    /// Create a planner over the given graph.
    pub fn new(graph: &'a RouteGraph<'a>) -> Self {
        Self { graph }
    }

    /// Plan a journey between two resolved stops.
    ///
    /// Prefers a direct route (the first one, by the route set's declared
    /// order, serving both stops); otherwise searches for a single
    /// interchange stop shared between a route through the origin and a
    /// route through the destination.
    ///
    /// # Errors
    ///
    /// - [`PlanError::SameStop`] if origin and destination share a code.
    /// - [`PlanError::NoRoute`] if the network is disconnected for this
    ///   pair. A correctly configured network should never produce this,
    ///   but it is handled rather than assumed impossible.
    pub fn plan(&self, origin: &Stop, destination: &Stop) -> Result<PlannedJourney, PlanError> {
        if origin.code == destination.code {
            return Err(PlanError::SameStop(origin.code.clone()));
        }

        let from_origin = self.graph.routes_through(origin);
        let to_destination = self.graph.routes_through(destination);

        // Direct: first route in declared order serving both ends.
        for route in &from_origin {
            if let Some(stops_between) = route.between(origin, destination) {
                tracing::debug!(route = %route.name, "found direct route");
                return Ok(PlannedJourney::direct(
                    origin.clone(),
                    destination.clone(),
                    stops_between,
                ));
            }
        }

        // Interchange: try every stop shared between a route through the
        // origin and a route through the destination. The origin and
        // destination themselves are excluded; a shared route through
        // either would have been caught by the direct case above.
        let mut best: Option<Candidate> = None;

        for origin_route in &from_origin {
            for destination_route in &to_destination {
                for stop in origin_route.stops() {
                    if stop.code == origin.code || stop.code == destination.code {
                        continue;
                    }

                    let Some(first_leg) = origin_route.between(origin, stop) else {
                        continue;
                    };
                    let Some(second_leg) = destination_route.between(stop, destination) else {
                        continue;
                    };

                    let candidate = Candidate {
                        stop: stop.clone(),
                        stops_from_origin: first_leg,
                        stops_to_destination: second_leg,
                    };

                    let improves = match &best {
                        None => true,
                        Some(current) => candidate.cost() < current.cost(),
                    };
                    if improves {
                        best = Some(candidate);
                    }
                }
            }
        }

        match best {
            Some(found) => {
                tracing::debug!(interchange = %found.stop.code, "found interchange journey");
                Ok(PlannedJourney::via_interchange(
                    origin.clone(),
                    destination.clone(),
                    found.stops_from_origin,
                    found.stop,
                    found.stops_to_destination,
                ))
            }
            None => Err(PlanError::NoRoute {
                origin: origin.code.clone(),
                destination: destination.code.clone(),
            }),
        }
    }
}
