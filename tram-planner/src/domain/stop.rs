//! Stop and stop-code types.

use std::fmt;

use super::ZoneLabel;

/// Error returned when parsing an invalid stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A valid transit-authority stop code.
///
/// Stop codes are short ASCII alphanumeric references (typically 3
/// letters, e.g. `ALT` for Altrincham). Input is normalized to uppercase,
/// so any `StopCode` value is canonical by construction.
///
/// # Examples
///
/// ```
/// use tram_planner::domain::StopCode;
///
/// let alt = StopCode::parse("alt").unwrap();
/// assert_eq!(alt.as_str(), "ALT");
///
/// // Empty and over-long codes are rejected
/// assert!(StopCode::parse("").is_err());
/// assert!(StopCode::parse("ALTRINCHAM").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopCode(String);

impl StopCode {
    /// Parse a stop code from a string.
    ///
    /// The input must be 1 to 8 ASCII letters or digits; it is uppercased
    /// before being stored.
    pub fn parse(s: &str) -> Result<Self, InvalidStopCode> {
        if s.is_empty() {
            return Err(InvalidStopCode {
                reason: "must not be empty",
            });
        }

        if s.len() > 8 {
            return Err(InvalidStopCode {
                reason: "must be at most 8 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStopCode {
                reason: "must be ASCII letters and digits only",
            });
        }

        Ok(StopCode(s.to_ascii_uppercase()))
    }

    /// Returns the canonical (uppercase) code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.0)
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A physical tram stop.
///
/// `code` is unique across the whole stop set and `name` is unique and
/// stable for lookup. A stop is immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Full display name, e.g. "Altrincham".
    pub name: String,

    /// Short transit-authority reference, e.g. `ALT`.
    pub code: StopCode,

    /// Fare-zone label, e.g. `"2"` or the boundary `"3/4"`.
    pub zone: ZoneLabel,
}

impl Stop {
    /// Create a new stop.
    pub fn new(name: impl Into<String>, code: StopCode, zone: ZoneLabel) -> Self {
        Self {
            name: name.into(),
            code,
            zone,
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for valid stop codes: 1-8 ASCII alphanumerics.
    fn valid_code_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z0-9]{1,8}").unwrap()
    }

    proptest! {
        /// Any valid code parses, and parsing is case-insensitive.
        #[test]
        fn valid_always_parses(s in valid_code_string()) {
            let code = StopCode::parse(&s).unwrap();
            let upper = s.to_ascii_uppercase();
            prop_assert_eq!(code.as_str(), upper.as_str());
            prop_assert_eq!(StopCode::parse(&s.to_ascii_lowercase()).unwrap(), code);
        }

        /// Over-long codes are always rejected
        #[test]
        fn too_long_rejected(s in "[A-Z0-9]{9,16}") {
            prop_assert!(StopCode::parse(&s).is_err());
        }

        /// Codes with punctuation or whitespace are rejected
        #[test]
        fn non_alphanumeric_rejected(s in "[A-Z]{0,3}[-_ /.][A-Z]{0,3}") {
            prop_assert!(StopCode::parse(&s).is_err());
        }
    }
}
