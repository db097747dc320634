//! Fare-zone identification.
//!
//! Given a planned journey, produces the ascending, deduplicated list of
//! fare zones crossed. Boundary labels such as `"3/4"` represent an
//! ambiguous coordinate rather than a committed zone, and are excluded
//! from the result entirely rather than contributing both halves.

use std::collections::BTreeSet;

use crate::domain::{MalformedZone, PlannedJourney};

/// The fare zones a journey crosses, ascending and deduplicated.
pub type ZoneSet = Vec<u32>;

/// Identify every fare zone a journey crosses.
///
/// Collects the zone label of each calling point in travel order, drops
/// boundary labels, and parses the rest. Collection goes through an
/// ordered set, so the result is deterministic for a given journey.
///
/// # Errors
///
/// Returns [`MalformedZone`] if a non-boundary label is not a valid
/// integer. That is a network configuration defect, not a user error.
pub fn identify_zones(journey: &PlannedJourney) -> Result<ZoneSet, MalformedZone> {
    let mut zones = BTreeSet::new();

    for stop in journey.calling_points() {
        if stop.zone.is_boundary() {
            continue;
        }
        zones.insert(stop.zone.number()?);
    }

    Ok(zones.into_iter().collect())
}
