//! Stop resolution by name or code.
//!
//! User input identifies a stop either by its full name or by its short
//! code, in any letter casing. Matching is exact: a close-but-wrong code
//! must not silently resolve to an unrelated stop, so there is no fuzzy
//! or prefix matching here.

use std::collections::HashMap;

use crate::domain::Stop;

/// Errors from stop resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The identifier was empty or whitespace-only
    #[error("stop identifier must not be empty")]
    EmptyIdentifier,

    /// The identifier matched no stop's name or code
    #[error("no stop with name or code {identifier:?}")]
    NotFound { identifier: String },
}

/// Case-insensitive exact-match lookup over the full stop set.
///
/// Both indexes are precomputed once at construction; `resolve` is a pure
/// lookup with no side effects.
#[derive(Debug)]
pub struct StopCatalog<'a> {
    by_name: HashMap<String, &'a Stop>,
    by_code: HashMap<String, &'a Stop>,
}

impl<'a> StopCatalog<'a> {
    /// Build the catalog from the full stop set.
    pub fn new(stops: &'a [Stop]) -> Self {
        let mut by_name = HashMap::with_capacity(stops.len());
        let mut by_code = HashMap::with_capacity(stops.len());

        for stop in stops {
            by_name.insert(stop.name.to_lowercase(), stop);
            by_code.insert(stop.code.as_str().to_lowercase(), stop);
        }

        Self { by_name, by_code }
    }

    /// Resolve a user-supplied identifier to its canonical stop.
    ///
    /// The identifier is compared case-insensitively against every stop's
    /// name and code; the match must be exact.
    pub fn resolve(&self, identifier: &str) -> Result<&'a Stop, LookupError> {
        if identifier.trim().is_empty() {
            return Err(LookupError::EmptyIdentifier);
        }

        let needle = identifier.to_lowercase();

        self.by_name
            .get(&needle)
            .or_else(|| self.by_code.get(&needle))
            .copied()
            .ok_or_else(|| LookupError::NotFound {
                identifier: identifier.to_string(),
            })
    }

    /// Number of stops in the catalog.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True if the catalog holds no stops.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{StopCode, ZoneLabel};
    use proptest::prelude::*;

    proptest! {
        /// Any stop resolves by its own name and code in arbitrary casing.
        #[test]
        fn resolves_under_any_casing(
            name in "[A-Za-z][A-Za-z ]{0,20}",
            code in "[A-Za-z0-9]{1,8}",
            flip in proptest::collection::vec(any::<bool>(), 1..30),
        ) {
            let stops = vec![Stop::new(
                name.clone(),
                StopCode::parse(&code).unwrap(),
                ZoneLabel::new("1"),
            )];
            let catalog = StopCatalog::new(&stops);

            let scramble = |s: &str| -> String {
                s.chars()
                    .zip(flip.iter().cycle())
                    .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                    .collect()
            };

            prop_assert_eq!(catalog.resolve(&scramble(&name)).unwrap(), &stops[0]);
            prop_assert_eq!(catalog.resolve(&scramble(&code)).unwrap(), &stops[0]);
        }
    }
}
