//! Bundled sample network.
//!
//! A fixed two-line slice of the Manchester Metrolink: the Altrincham
//! line running through to Piccadilly, and the Eccles line terminating at
//! Cornbrook, where the two meet. Used as the CLI default network and as
//! a realistic fixture in tests.

use std::collections::HashMap;

use crate::domain::{Route, Stop, StopCode, ZoneLabel};

use super::Network;

const STOPS: &[(&str, &str, &str)] = &[
    ("Altrincham", "ALT", "4"),
    ("Navigation Road", "NAV", "3/4"),
    ("Timperley", "TIM", "3"),
    ("Sale", "SAL", "3"),
    ("Stretford", "STR", "2"),
    ("Old Trafford", "OTR", "2"),
    ("Trafford Bar", "TRA", "2"),
    ("Cornbrook", "COR", "1"),
    ("Deansgate-Castlefield", "DEA", "1"),
    ("St Peter's Square", "STP", "1"),
    ("Piccadilly Gardens", "PIG", "1"),
    ("Piccadilly", "PIC", "1"),
    ("Eccles", "ECC", "3"),
    ("Weaste", "WEA", "2/3"),
    ("Broadway", "BRO", "2"),
    ("Harbour City", "HAR", "2"),
    ("Salford Quays", "SAQ", "2"),
    ("Exchange Quay", "EXQ", "2"),
    ("Pomona", "POM", "1/2"),
];

const ALTRINCHAM_LINE: &[&str] = &[
    "ALT", "NAV", "TIM", "SAL", "STR", "OTR", "TRA", "COR", "DEA", "STP", "PIG", "PIC",
];

const ECCLES_LINE: &[&str] = &[
    "ECC", "WEA", "BRO", "HAR", "SAQ", "EXQ", "POM", "COR",
];

/// The bundled Metrolink sample network.
///
/// The stop and route data are compile-time constants with known-valid
/// codes, so entries that fail to parse are silently skipped (there are
/// none; the tests below pin the counts).
pub fn metrolink() -> Network {
    let stops: Vec<Stop> = STOPS
        .iter()
        .filter_map(|&(name, code, zone)| {
            StopCode::parse(code)
                .ok()
                .map(|code| Stop::new(name, code, ZoneLabel::new(zone)))
        })
        .collect();

    let routes = {
        let by_code: HashMap<&str, &Stop> = stops.iter().map(|s| (s.code.as_str(), s)).collect();

        let line = |name: &str, colour: &str, codes: &[&str]| {
            Route::new(
                name,
                colour,
                codes
                    .iter()
                    .filter_map(|code| by_code.get(code).map(|&s| s.clone()))
                    .collect(),
            )
        };

        vec![
            line("Altrincham – Piccadilly", "purple", ALTRINCHAM_LINE),
            line("Eccles – Cornbrook", "blue", ECCLES_LINE),
        ]
    };

    Network::new(stops, routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StopCatalog;
    use crate::network::RouteGraph;

    #[test]
    fn sample_network_is_complete() {
        let network = metrolink();
        assert_eq!(network.stops().len(), STOPS.len());
        assert_eq!(network.routes().len(), 2);
        assert_eq!(network.routes()[0].stops().len(), ALTRINCHAM_LINE.len());
        assert_eq!(network.routes()[1].stops().len(), ECCLES_LINE.len());
    }

    #[test]
    fn sample_network_builds_a_valid_graph() {
        let network = metrolink();
        assert!(RouteGraph::new(network.stops(), network.routes()).is_ok());
    }

    #[test]
    fn sample_stops_resolve() {
        let network = metrolink();
        let catalog = StopCatalog::new(network.stops());

        assert_eq!(catalog.resolve("Altrincham").unwrap().code.as_str(), "ALT");
        assert_eq!(catalog.resolve("ecc").unwrap().name, "Eccles");
    }
}
