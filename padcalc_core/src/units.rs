//! # Unit Types
//!
//! The three units a pin measurement can carry: inches, millimeters, and
//! mils (thousandths of an inch). These are the units PCB fabrication
//! houses quote drill and pad sizes in.
//!
//! ## Design Philosophy
//!
//! A fieldless enum rather than a units library because:
//! - The unit set is closed (three tags) and never grows at runtime
//! - We want JSON serialization to be clean (just the code string)
//! - Conversion is a six-entry factor table, nothing more
//!
//! Every conversion rounds to the target unit's display precision, so
//! round trips recover the value to within that precision rather than
//! bit-exactly.
//!
//! ## Example
//!
//! ```rust
//! use padcalc_core::units::Unit;
//!
//! let mm = Unit::Mm;
//! assert_eq!(mm.convert(25.4, Unit::In), 1.0);
//! assert_eq!(Unit::In.convert(1.0, Unit::Mil), 1000.0);
//! assert_eq!(mm.code(), "mm");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Millimeters per inch (exact)
pub const MM_PER_IN: f64 = 25.4;

/// Mils per inch (exact)
pub const MIL_PER_IN: f64 = 1000.0;

/// Unit of a pin measurement.
///
/// Serializes as its lowercase code string (`"in"`, `"mm"`, `"mil"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Inches
    #[default]
    In,
    /// Millimeters
    Mm,
    /// Mils (1/1000 inch)
    Mil,
}

impl Unit {
    /// The unit's code string, as it appears in input and display.
    pub fn code(self) -> &'static str {
        match self {
            Unit::In => "in",
            Unit::Mm => "mm",
            Unit::Mil => "mil",
        }
    }

    /// Decimal places used when displaying or converting into this unit.
    ///
    /// Finer units get fewer places: 5 for inches, 4 for mm, 3 for mil.
    pub fn places(self) -> u32 {
        match self {
            Unit::In => 5,
            Unit::Mm => 4,
            Unit::Mil => 3,
        }
    }

    /// All three units, in display order.
    pub fn all() -> [Unit; 3] {
        [Unit::In, Unit::Mm, Unit::Mil]
    }

    /// Conversion factor from this unit into `to`. Identity for same unit.
    fn factor(self, to: Unit) -> f64 {
        match (self, to) {
            (Unit::In, Unit::Mm) => MM_PER_IN,
            (Unit::In, Unit::Mil) => MIL_PER_IN,
            (Unit::Mm, Unit::In) => 1.0 / MM_PER_IN,
            (Unit::Mm, Unit::Mil) => MIL_PER_IN / MM_PER_IN,
            (Unit::Mil, Unit::In) => 1.0 / MIL_PER_IN,
            (Unit::Mil, Unit::Mm) => MM_PER_IN / MIL_PER_IN,
            _ => 1.0,
        }
    }

    /// Convert `value` from this unit into `to`, rounded to `to`'s
    /// display precision. Same-unit conversion still rounds.
    pub fn convert(self, value: f64, to: Unit) -> f64 {
        round_to(value * self.factor(to), to.places())
    }
}

/// Round `value` to `places` decimal digits.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Unit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "in" => Ok(Unit::In),
            "mm" => Ok(Unit::Mm),
            "mil" => Ok(Unit::Mil),
            other => Err(CalcError::invalid_unit(other)),
        }
    }
}

impl TryFrom<&str> for Unit {
    type Error = CalcError;

    fn try_from(s: &str) -> CalcResult<Self> {
        s.parse()
    }
}

// A Unit compares equal to its raw code string.
impl PartialEq<str> for Unit {
    fn eq(&self, other: &str) -> bool {
        self.code() == other
    }
}

impl PartialEq<&str> for Unit {
    fn eq(&self, other: &&str) -> bool {
        self.code() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_factors() {
        assert_eq!(Unit::In.convert(1.0, Unit::Mm), 25.4);
        assert_eq!(Unit::In.convert(1.0, Unit::Mil), 1000.0);
        assert_eq!(Unit::Mil.convert(1.0, Unit::In), 0.001);
        assert_eq!(Unit::Mil.convert(1.0, Unit::Mm), 0.0254);
    }

    #[test]
    fn test_mm_to_in_rounds_to_five_places() {
        // 1/25.4 = 0.039370078... -> 5 places
        assert_eq!(Unit::Mm.convert(1.0, Unit::In), 0.03937);
    }

    #[test]
    fn test_mm_to_mil_uses_exact_ratio() {
        // 1000/25.4 = 39.3700787... -> 3 places
        assert_eq!(Unit::Mm.convert(1.0, Unit::Mil), 39.37);
    }

    #[test]
    fn test_same_unit_rounds_only() {
        assert_eq!(Unit::Mil.convert(5005.9004, Unit::Mil), 5005.9);
    }

    #[test]
    fn test_round_trip_within_precision() {
        for a in Unit::all() {
            for b in Unit::all() {
                let x = 1.2345;
                let back = b.convert(a.convert(x, b), a);
                let places = a.places().min(b.places());
                let tol = 10f64.powi(-(places as i32));
                assert!(
                    (back - x).abs() <= tol,
                    "{a}->{b}->{a}: {x} came back as {back}"
                );
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("in".parse::<Unit>().unwrap(), Unit::In);
        assert_eq!("mm".parse::<Unit>().unwrap(), Unit::Mm);
        assert_eq!("mil".parse::<Unit>().unwrap(), Unit::Mil);
        let err = "foo".parse::<Unit>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_UNIT");
    }

    #[test]
    fn test_compares_to_code_string() {
        assert_eq!(Unit::Mm, "mm");
        assert_ne!(Unit::Mm, "in");
    }

    #[test]
    fn test_serialization_is_code_string() {
        assert_eq!(serde_json::to_string(&Unit::Mil).unwrap(), "\"mil\"");
        let roundtrip: Unit = serde_json::from_str("\"mm\"").unwrap();
        assert_eq!(roundtrip, Unit::Mm);
    }
}
