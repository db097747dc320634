//! Journey planning.
//!
//! This module implements the core planning algorithm that answers:
//! "how do I travel from stop A to stop B, and must I change trams?"
//!
//! Journeys are either direct along a single route, or two legs joined at
//! one interchange stop; the fixed network is small enough that deeper
//! searches are never needed.

mod plan;

pub use plan::{PlanError, Planner};
