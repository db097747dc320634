//! Domain types for the tram journey planner.
//!
//! This module contains the core domain model: stops, routes, zone labels
//! and planned journeys. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod journey;
mod route;
mod stop;
mod zone;

pub use journey::PlannedJourney;
pub use route::Route;
pub use stop::{InvalidStopCode, Stop, StopCode};
pub use zone::{MalformedZone, ZoneLabel};
