//! # Rectangular Pin Hole/Pad Sizing
//!
//! Derives drill-hole and solder-pad diameters for a rectangular
//! through-hole pin from its cross-section dimensions, or back-derives
//! the pin dimensions from a target hole size.
//!
//! ## Assumptions
//!
//! - The pin cross-section is rectangular; the drill must clear its
//!   diagonal (hypotenuse)
//! - Drill sizes are manufactured in whole-mil increments
//! - Pad sizing uses a 4 mil annular ring plus the IPC Level A
//!   fabrication allowance of 16 mil
//!
//! ## Example
//!
//! ```rust
//! use padcalc_core::rect_calc::{calculate, RectInput};
//! use padcalc_core::measurement::Measurement;
//! use padcalc_core::units::Unit;
//!
//! let input = RectInput::from_dimensions(
//!     Measurement::new(3.0, Unit::In).unwrap(),
//!     Measurement::new(4.0, Unit::In).unwrap(),
//! );
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.hypotenuse.value(), 5.0);
//! assert_eq!(result.hole_size.value(), 5.006);
//! assert!((result.pad_size.value() - 5.026).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::measurement::Measurement;
use crate::units::Unit;

/// Drill clearance over the pin diagonal, inches.
/// 2.9 mil plating allowance plus 3 mil drill tolerance.
pub const HOLE_CLEARANCE_IN: f64 = 0.0059;

/// Annular ring width, inches
pub const ANNULAR_RING_IN: f64 = 0.004;

/// IPC Level A fabrication allowance, inches
pub const LEVEL_A_IN: f64 = 0.016;

/// Agreement required between a supplied hole size and the one derived
/// from the pin dimensions, inches
pub const HOLE_TOLERANCE_IN: f64 = 0.001;

/// Input for a hole/pad sizing run.
///
/// Supply both dimensions, one dimension (the pin is assumed square and
/// the other copies it), or a target hole size alone (the square pin
/// that needs that hole is back-derived). Supplying dimensions and a
/// hole size together turns on the consistency check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": { "value": 3.0, "unit": "in" },
///   "width": { "value": 4.0, "unit": "in" }
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RectInput {
    /// Pin cross-section length
    pub length: Option<Measurement>,

    /// Pin cross-section width; defaults to `length` when absent
    pub width: Option<Measurement>,

    /// Target hole size. Alone it drives back-derivation; alongside
    /// dimensions it is checked against the derived hole size.
    pub hole: Option<Measurement>,
}

impl RectInput {
    /// Input from both pin dimensions.
    pub fn from_dimensions(length: Measurement, width: Measurement) -> Self {
        RectInput {
            length: Some(length),
            width: Some(width),
            hole: None,
        }
    }

    /// Input for a square pin from a single side.
    pub fn square(side: Measurement) -> Self {
        RectInput {
            length: Some(side),
            width: None,
            hole: None,
        }
    }

    /// Input from a target hole size alone.
    pub fn from_hole(hole: Measurement) -> Self {
        RectInput {
            length: None,
            width: None,
            hole: Some(hole),
        }
    }

    /// Attach a target hole size for the consistency check.
    pub fn with_hole(mut self, hole: Measurement) -> Self {
        self.hole = Some(hole);
        self
    }

    /// Validate that at least one input is present.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length.is_none() && self.width.is_none() && self.hole.is_none() {
            return Err(CalcError::MissingInput);
        }
        Ok(())
    }
}

/// The five mutually-consistent measurements of a sizing run, all in
/// inches. Convert per field for display in other units, or use
/// [`RectCalc::report`] for all three units at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectCalc {
    /// Pin cross-section length
    pub length: Measurement,

    /// Pin cross-section width
    pub width: Measurement,

    /// Pin diagonal the drill must clear
    pub hypotenuse: Measurement,

    /// Finished hole size, rounded to a whole-mil drill
    pub hole_size: Measurement,

    /// Pad diameter: hole plus annular ring plus Level A allowance
    pub pad_size: Measurement,
}

/// Run the sizing pipeline for `input`.
///
/// Dimensions are normalized to inches, then hypotenuse, hole, and pad
/// are derived in sequence. With only a hole size, the square pin that
/// needs it is back-derived first.
pub fn calculate(input: &RectInput) -> CalcResult<RectCalc> {
    input.validate()?;

    if input.length.is_none() && input.width.is_none() {
        // Hole-only path. validate() guarantees the hole is present.
        let hole = input.hole.unwrap_or_default().convert(Unit::In);
        return calculate_from_hole(hole);
    }

    // Square assumption: a single dimension stands in for both.
    let length = input
        .length
        .or(input.width)
        .unwrap_or_default()
        .convert(Unit::In);
    let width = input
        .width
        .or(input.length)
        .unwrap_or_default()
        .convert(Unit::In);

    let hypotenuse = calc_hypotenuse(length, width)?;
    let hole_size = calc_hole(hypotenuse)?;
    let pad_size = calc_pad(hole_size)?;

    if let Some(supplied) = input.hole {
        check_hole_consistency(supplied, hole_size)?;
    }

    Ok(RectCalc {
        length,
        width,
        hypotenuse,
        hole_size,
        pad_size,
    })
}

fn calculate_from_hole(hole: Measurement) -> CalcResult<RectCalc> {
    let hypotenuse = hole - HOLE_CLEARANCE_IN;
    let side = hypotenuse / 2f64.sqrt();
    let pad_size = calc_pad(hole)?;
    Ok(RectCalc {
        length: side,
        width: side,
        hypotenuse,
        hole_size: hole,
        pad_size,
    })
}

fn check_hole_consistency(supplied: Measurement, derived: Measurement) -> CalcResult<()> {
    let supplied_in = supplied.value_in(Unit::In);
    let derived_in = derived.value_in(Unit::In);
    if (supplied_in - derived_in).abs() > HOLE_TOLERANCE_IN {
        return Err(CalcError::InconsistentHoleSize {
            supplied_in,
            derived_in,
            tolerance_in: HOLE_TOLERANCE_IN,
        });
    }
    Ok(())
}

/// Diagonal of the pin cross-section, in inches.
pub fn calc_hypotenuse(length: Measurement, width: Measurement) -> CalcResult<Measurement> {
    let a = length.value_in(Unit::In);
    let b = width.value_in(Unit::In);
    Measurement::new(a.hypot(b), Unit::In)
}

/// Finished hole size for a given pin diagonal, in inches.
///
/// The raw size (diagonal plus clearance) is pushed to the nearest
/// whole-mil drill: convert to mils, round, convert back.
pub fn calc_hole(hypotenuse: Measurement) -> CalcResult<Measurement> {
    let raw = hypotenuse.convert(Unit::In) + HOLE_CLEARANCE_IN;
    let whole_mils = raw.value_in(Unit::Mil).round();
    Ok(Measurement::new(whole_mils, Unit::Mil)?.convert(Unit::In))
}

/// Pad diameter for a given hole size. Keeps the hole's unit.
pub fn calc_pad(hole_size: Measurement) -> CalcResult<Measurement> {
    let growth = Measurement::new(ANNULAR_RING_IN + LEVEL_A_IN, Unit::In)?;
    Ok(hole_size + growth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(value: f64, unit: Unit) -> Measurement {
        Measurement::new(value, unit).unwrap()
    }

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_three_four_five_pin() {
        let input = RectInput::from_dimensions(m(3.0, Unit::In), m(4.0, Unit::In));
        let result = calculate(&input).unwrap();
        assert_eq!(result.hypotenuse.value(), 5.0);
        // 5.0059 in -> 5005.9 mil -> 5006 mil -> 5.006 in
        assert_eq!(result.hole_size.value(), 5.006);
        assert_eq!(result.hole_size.unit(), Unit::In);
        assert!(close(result.pad_size.value(), 5.026, 1e-9));
    }

    #[test]
    fn test_metric_input_normalizes_to_inches() {
        let input = RectInput::from_dimensions(m(1.0, Unit::Mm), m(1.0, Unit::Mm));
        let result = calculate(&input).unwrap();
        assert_eq!(result.length.unit(), Unit::In);
        assert_eq!(result.length.value(), 0.03937);
        assert_eq!(result.width.value(), 0.03937);
        // hypo = 0.03937 * sqrt(2) = 0.0556775...
        assert!(close(result.hypotenuse.value(), 0.055678, 1e-6));
        // 0.0615775... in = 61.578 mil -> 62 mil -> 0.062 in
        assert_eq!(result.hole_size.value(), 0.062);
        assert!(close(result.pad_size.value(), 0.082, 1e-9));
        // Every field converts to mm and mil
        for field in [
            result.length,
            result.width,
            result.hypotenuse,
            result.hole_size,
            result.pad_size,
        ] {
            assert_eq!(field.convert(Unit::Mm).unit(), Unit::Mm);
            assert_eq!(field.convert(Unit::Mil).unit(), Unit::Mil);
        }
    }

    #[test]
    fn test_single_dimension_assumes_square() {
        let one = calculate(&RectInput::square(m(2.0, Unit::Mm))).unwrap();
        let two = calculate(&RectInput::from_dimensions(
            m(2.0, Unit::Mm),
            m(2.0, Unit::Mm),
        ))
        .unwrap();
        assert_eq!(one, two);

        // Width alone behaves the same as length alone
        let width_only = RectInput {
            length: None,
            width: Some(m(2.0, Unit::Mm)),
            hole: None,
        };
        assert_eq!(calculate(&width_only).unwrap(), two);
    }

    #[test]
    fn test_back_derivation_from_hole() {
        let hole = m(0.062, Unit::In);
        let result = calculate(&RectInput::from_hole(hole)).unwrap();
        let expected_side = (0.062 - HOLE_CLEARANCE_IN) / 2f64.sqrt();
        assert!(close(result.length.value(), expected_side, 1e-12));
        assert_eq!(result.length, result.width);
        assert_eq!(result.hole_size, hole);
        assert!(close(result.pad_size.value(), 0.082, 1e-9));

        // Forward pass over the derived pin recovers the same drill
        let forward = calculate(&RectInput::from_dimensions(result.length, result.width)).unwrap();
        assert_eq!(forward.hole_size, hole);
    }

    #[test]
    fn test_hole_input_normalizes_to_inches() {
        let result = calculate(&RectInput::from_hole(m(62.0, Unit::Mil))).unwrap();
        assert_eq!(result.hole_size.unit(), Unit::In);
        assert_eq!(result.hole_size.value(), 0.062);
    }

    #[test]
    fn test_missing_input() {
        let err = calculate(&RectInput::default()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_INPUT");
    }

    #[test]
    fn test_consistent_supplied_hole_accepted() {
        let input = RectInput::from_dimensions(m(3.0, Unit::In), m(4.0, Unit::In))
            .with_hole(m(5.0061, Unit::In));
        let result = calculate(&input).unwrap();
        // The derived value wins; the supplied one only gets checked
        assert_eq!(result.hole_size.value(), 5.006);
    }

    #[test]
    fn test_inconsistent_supplied_hole_rejected() {
        let input = RectInput::from_dimensions(m(3.0, Unit::In), m(4.0, Unit::In))
            .with_hole(m(5.010, Unit::In));
        let err = calculate(&input).unwrap_err();
        match err {
            CalcError::InconsistentHoleSize {
                supplied_in,
                derived_in,
                ..
            } => {
                assert_eq!(supplied_in, 5.010);
                assert_eq!(derived_in, 5.006);
            }
            other => panic!("expected InconsistentHoleSize, got {other:?}"),
        }
    }

    #[test]
    fn test_supplied_hole_checked_in_inches() {
        // 5006 mil == 5.006 in, well within tolerance
        let input = RectInput::from_dimensions(m(3.0, Unit::In), m(4.0, Unit::In))
            .with_hole(m(5006.0, Unit::Mil));
        assert!(calculate(&input).is_ok());
    }

    #[test]
    fn test_formula_helpers_standalone() {
        let hypo = calc_hypotenuse(m(3.0, Unit::In), m(4000.0, Unit::Mil)).unwrap();
        assert_eq!(hypo.value(), 5.0);
        let hole = calc_hole(hypo).unwrap();
        assert_eq!(hole.value(), 5.006);
        let pad = calc_pad(hole).unwrap();
        assert!(close(pad.value(), 5.026, 1e-9));
        assert_eq!(pad.unit(), Unit::In);
    }

    #[test]
    fn test_pad_keeps_hole_unit() {
        let pad = calc_pad(m(62.0, Unit::Mil)).unwrap();
        assert_eq!(pad.unit(), Unit::Mil);
        assert!(close(pad.value(), 82.0, 1e-9));
    }
}
