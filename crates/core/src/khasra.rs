//! Parcel (khasra) number handling.
//!
//! A khasra record is stored either as an exact textual number (`"45/2"`) or
//! as an inclusive numeric range. A lookup value is therefore compared two
//! ways: verbatim against exact records, and as an integer against ranges.
//! Values that are not integers can only ever hit exact records.
//!
//! Whitespace is only ignored for the integer form. `" 7 "` falls in the
//! range `1..=10` but does not equal the exact record `"7"`.

use crate::error::CoreError;

/// A validated khasra number supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelNumber {
    text: String,
    numeric: Option<i64>,
}

impl ParcelNumber {
    /// Parse a caller-supplied khasra number.
    ///
    /// An absent or blank value is rejected. The text is kept exactly as
    /// given; a value that is not a plain integer once trimmed is accepted
    /// with no numeric form.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("khasraNumber is required".to_string()));
        }

        Ok(Self {
            text: raw.to_string(),
            numeric: trimmed.parse::<i64>().ok(),
        })
    }

    /// The value used for exact (`is_range = false`) comparison.
    pub fn as_text(&self) -> &str {
        &self.text
    }

    /// The value used for range comparison, if the number is an integer.
    pub fn numeric(&self) -> Option<i64> {
        self.numeric
    }
}

impl std::fmt::Display for ParcelNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn integer_has_numeric_form() {
        let p = ParcelNumber::parse("150").unwrap();
        assert_eq!(p.as_text(), "150");
        assert_eq!(p.numeric(), Some(150));
    }

    #[test]
    fn fractional_khasra_has_no_numeric_form() {
        let p = ParcelNumber::parse("45/2").unwrap();
        assert_eq!(p.as_text(), "45/2");
        assert_eq!(p.numeric(), None);
    }

    #[test]
    fn whitespace_only_ignored_for_numeric_form() {
        let p = ParcelNumber::parse("  7 ").unwrap();
        assert_eq!(p.as_text(), "  7 ");
        assert_eq!(p.numeric(), Some(7));
    }

    #[test]
    fn blank_is_rejected() {
        for raw in ["", "   ", "\t"] {
            assert_matches!(
                ParcelNumber::parse(raw),
                Err(CoreError::Validation(ref msg)) if msg == "khasraNumber is required"
            );
        }
    }

    #[test]
    fn overflowing_integer_is_treated_as_text_only() {
        let p = ParcelNumber::parse("99999999999999999999").unwrap();
        assert_eq!(p.numeric(), None);
    }
}
