//! Route graph over the fixed network.
//!
//! Wraps the static route set and answers "which routes pass through this
//! stop", preserving each route's declared stop order for direction-aware
//! traversal. Referential integrity is checked once when the graph is
//! built: a route referencing a stop missing from the stop set is a fatal
//! configuration error, reported at load time rather than at query time.

use std::collections::{HashMap, HashSet};

use crate::domain::{Route, Stop, StopCode};

/// Errors from route-graph construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A route references a stop that is not in the stop set
    #[error("route {route:?} references unknown stop {code}")]
    UnknownStop { route: String, code: StopCode },

    /// A route lists the same stop more than once
    #[error("route {route:?} lists stop {code} more than once")]
    DuplicateStop { route: String, code: StopCode },
}

/// Index from stop code to the routes serving that stop.
///
/// Built once from the full stop and route sets; read-only afterwards.
#[derive(Debug)]
pub struct RouteGraph<'a> {
    routes: &'a [Route],
    by_stop: HashMap<&'a StopCode, Vec<usize>>,
}

impl<'a> RouteGraph<'a> {
    /// Build the graph, validating every route against the stop set.
    pub fn new(stops: &[Stop], routes: &'a [Route]) -> Result<Self, NetworkError> {
        let known: HashSet<&StopCode> = stops.iter().map(|s| &s.code).collect();
        let mut by_stop: HashMap<&StopCode, Vec<usize>> = HashMap::new();

        for (idx, route) in routes.iter().enumerate() {
            let mut seen = HashSet::new();

            for stop in route.stops() {
                if !known.contains(&stop.code) {
                    return Err(NetworkError::UnknownStop {
                        route: route.name.clone(),
                        code: stop.code.clone(),
                    });
                }

                if !seen.insert(&stop.code) {
                    return Err(NetworkError::DuplicateStop {
                        route: route.name.clone(),
                        code: stop.code.clone(),
                    });
                }

                by_stop.entry(&stop.code).or_default().push(idx);
            }
        }

        Ok(Self { routes, by_stop })
    }

    /// The routes passing through `stop`, in the route set's declared
    /// order. Empty if no route serves the stop.
    pub fn routes_through(&self, stop: &Stop) -> Vec<&'a Route> {
        self.by_stop
            .get(&stop.code)
            .map(|indices| indices.iter().map(|&i| &self.routes[i]).collect())
            .unwrap_or_default()
    }

    /// The full route set in declared order.
    pub fn routes(&self) -> &'a [Route] {
        self.routes
    }
}
