//! Fare-zone labels.

use std::fmt;

/// Separator used by boundary labels such as `"3/4"`.
const BOUNDARY_SEPARATOR: char = '/';

/// Error returned when a non-boundary zone label is not a valid integer.
///
/// This indicates a network configuration defect, not a user error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed zone label {label:?}: expected an integer such as \"2\"")]
pub struct MalformedZone {
    label: String,
}

/// The fare-zone label of a stop, as it appears in the network data.
///
/// Usually a single integer (`"2"`), but a stop sitting on the boundary
/// between two zones carries both, separated by a slash (`"3/4"`), and is
/// administratively counted in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLabel(String);

impl ZoneLabel {
    /// Create a zone label from the raw textual form.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the raw label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this label denotes a zone boundary, e.g. `"3/4"`.
    pub fn is_boundary(&self) -> bool {
        self.0.contains(BOUNDARY_SEPARATOR)
    }

    /// The numeric zone for a non-boundary label.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedZone`] if the label does not parse as an
    /// unsigned integer. Boundary labels always fail; callers are expected
    /// to check [`ZoneLabel::is_boundary`] first.
    pub fn number(&self) -> Result<u32, MalformedZone> {
        self.0.trim().parse().map_err(|_| MalformedZone {
            label: self.0.clone(),
        })
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_label_is_not_boundary() {
        let zone = ZoneLabel::new("2");
        assert!(!zone.is_boundary());
        assert_eq!(zone.number(), Ok(2));
    }

    #[test]
    fn boundary_label_detected() {
        let zone = ZoneLabel::new("3/4");
        assert!(zone.is_boundary());
        assert!(zone.number().is_err());
    }

    #[test]
    fn surrounding_whitespace_tolerated() {
        assert_eq!(ZoneLabel::new(" 4 ").number(), Ok(4));
    }

    #[test]
    fn malformed_label_fails() {
        let err = ZoneLabel::new("two").number().unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed zone label \"two\": expected an integer such as \"2\""
        );
    }

    #[test]
    fn display_is_raw_label() {
        assert_eq!(format!("{}", ZoneLabel::new("3/4")), "3/4");
    }
}
