//! Network snapshot loading.
//!
//! The engine itself only borrows plain in-memory collections; this module
//! owns getting them there. A network file is a JSON document listing the
//! stop set and the routes, with routes referencing stops by code:
//!
//! ```json
//! {
//!   "stops": [
//!     { "name": "Altrincham", "code": "ALT", "zone": "4" }
//!   ],
//!   "routes": [
//!     { "name": "Altrincham – Piccadilly", "colour": "purple", "stops": ["ALT"] }
//!   ]
//! }
//! ```
//!
//! All validation happens at load time: the loaded [`Network`] is an
//! immutable snapshot for the engine's lifetime. If the underlying data
//! changes, load a fresh snapshot and swap the old one out whole; the
//! engine defines no refresh mechanism.

pub mod sample;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{InvalidStopCode, Route, Stop, StopCode, ZoneLabel};

/// Errors from loading a network file.
///
/// Every variant is a fatal configuration error: the file must be fixed,
/// retrying cannot help.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the file failed
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON or misses required fields
    #[error("failed to parse network file: {0}")]
    Json(#[from] serde_json::Error),

    /// A stop record carries an invalid code
    #[error("stop {name:?}: {source}")]
    BadStopCode {
        name: String,
        source: InvalidStopCode,
    },

    /// Two stop records share a code
    #[error("duplicate stop code {0}")]
    DuplicateCode(StopCode),

    /// Two stop records share a name (compared case-insensitively,
    /// matching how lookup works)
    #[error("duplicate stop name {0:?}")]
    DuplicateName(String),

    /// A route references a code with no stop record
    #[error("route {route:?} references unknown stop code {code:?}")]
    UnknownStop { route: String, code: String },

    /// A route lists the same stop twice
    #[error("route {route:?} lists stop {code} more than once")]
    DuplicateRouteStop { route: String, code: StopCode },

    /// A route has no stops at all
    #[error("route {0:?} has no stops")]
    EmptyRoute(String),
}

#[derive(Debug, Deserialize)]
struct StopRecord {
    name: String,
    code: String,
    zone: String,
}

#[derive(Debug, Deserialize)]
struct RouteRecord {
    name: String,
    colour: String,
    stops: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NetworkFile {
    stops: Vec<StopRecord>,
    routes: Vec<RouteRecord>,
}

/// An owned, validated snapshot of the stop and route sets.
///
/// The engine components borrow from this snapshot; it is never mutated
/// after construction.
#[derive(Debug, Clone)]
pub struct Network {
    stops: Vec<Stop>,
    routes: Vec<Route>,
}

impl Network {
    /// Assemble a network from already-built domain values.
    pub fn new(stops: Vec<Stop>, routes: Vec<Route>) -> Self {
        Self { stops, routes }
    }

    /// Load and validate a network from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load and validate a network from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let file: NetworkFile = serde_json::from_str(text)?;
        Self::from_records(file)
    }

    fn from_records(file: NetworkFile) -> Result<Self, LoadError> {
        let mut stops = Vec::with_capacity(file.stops.len());
        let mut by_code: HashMap<StopCode, usize> = HashMap::new();
        let mut seen_names: HashSet<String> = HashSet::new();

        for record in file.stops {
            let code = StopCode::parse(&record.code).map_err(|source| LoadError::BadStopCode {
                name: record.name.clone(),
                source,
            })?;

            if by_code.contains_key(&code) {
                return Err(LoadError::DuplicateCode(code));
            }
            if !seen_names.insert(record.name.to_lowercase()) {
                return Err(LoadError::DuplicateName(record.name));
            }

            by_code.insert(code.clone(), stops.len());
            stops.push(Stop::new(record.name, code, ZoneLabel::new(record.zone)));
        }

        let mut routes = Vec::with_capacity(file.routes.len());

        for record in file.routes {
            if record.stops.is_empty() {
                return Err(LoadError::EmptyRoute(record.name));
            }

            let mut resolved = Vec::with_capacity(record.stops.len());

            for raw in &record.stops {
                let stop = StopCode::parse(raw)
                    .ok()
                    .and_then(|code| by_code.get(&code))
                    .map(|&idx| &stops[idx])
                    .ok_or_else(|| LoadError::UnknownStop {
                        route: record.name.clone(),
                        code: raw.clone(),
                    })?;

                if resolved.iter().any(|s: &Stop| s.code == stop.code) {
                    return Err(LoadError::DuplicateRouteStop {
                        route: record.name,
                        code: stop.code.clone(),
                    });
                }

                resolved.push(stop.clone());
            }

            routes.push(Route::new(record.name, record.colour, resolved));
        }

        tracing::info!(
            stops = stops.len(),
            routes = routes.len(),
            "loaded network snapshot"
        );

        Ok(Self { stops, routes })
    }

    /// The full stop set.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The full route set, in declared order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"{
        "stops": [
            { "name": "Altrincham", "code": "ALT", "zone": "4" },
            { "name": "Sale", "code": "SAL", "zone": "3" },
            { "name": "Cornbrook", "code": "COR", "zone": "1" }
        ],
        "routes": [
            { "name": "Altrincham – Cornbrook", "colour": "purple", "stops": ["ALT", "SAL", "COR"] }
        ]
    }"#;

    #[test]
    fn loads_valid_network() {
        let network = Network::from_json(VALID).unwrap();
        assert_eq!(network.stops().len(), 3);
        assert_eq!(network.routes().len(), 1);
        assert_eq!(network.routes()[0].stops()[1].name, "Sale");
    }

    #[test]
    fn route_stop_codes_resolve_case_insensitively() {
        let text = VALID.replace("\"ALT\", \"SAL\"", "\"alt\", \"sal\"");
        let network = Network::from_json(&text).unwrap();
        assert_eq!(network.routes()[0].stops()[0].name, "Altrincham");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            Network::from_json("{ not json"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn rejects_duplicate_stop_code() {
        let text = VALID.replace("\"code\": \"SAL\"", "\"code\": \"ALT\"");
        assert!(matches!(
            Network::from_json(&text),
            Err(LoadError::DuplicateCode(_))
        ));
    }

    #[test]
    fn rejects_duplicate_stop_name() {
        let text = VALID.replace("\"name\": \"Sale\"", "\"name\": \"altrincham\"");
        assert!(matches!(
            Network::from_json(&text),
            Err(LoadError::DuplicateName(_))
        ));
    }

    #[test]
    fn rejects_bad_stop_code() {
        let text = VALID.replace("\"code\": \"SAL\"", "\"code\": \"S A L\"");
        assert!(matches!(
            Network::from_json(&text),
            Err(LoadError::BadStopCode { .. })
        ));
    }

    #[test]
    fn rejects_unknown_route_stop() {
        let text = VALID.replace("\"COR\"]", "\"COR\", \"BRY\"]");
        let err = Network::from_json(&text).unwrap_err();
        assert!(matches!(err, LoadError::UnknownStop { .. }));
        assert_eq!(
            err.to_string(),
            "route \"Altrincham – Cornbrook\" references unknown stop code \"BRY\""
        );
    }

    #[test]
    fn rejects_duplicate_stop_on_route() {
        let text = VALID.replace("\"COR\"]", "\"COR\", \"ALT\"]");
        assert!(matches!(
            Network::from_json(&text),
            Err(LoadError::DuplicateRouteStop { .. })
        ));
    }

    #[test]
    fn rejects_empty_route() {
        let text = VALID.replace("[\"ALT\", \"SAL\", \"COR\"]", "[]");
        assert!(matches!(
            Network::from_json(&text),
            Err(LoadError::EmptyRoute(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();

        let network = Network::from_path(file.path()).unwrap();
        assert_eq!(network.stops().len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Network::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
