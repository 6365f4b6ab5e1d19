//! # Result Reporting
//!
//! Read-only projection of a [`RectCalc`] into all three units, each
//! field rounded to that unit's display precision. This is what front
//! ends render as a table or JSON; it never feeds back into the
//! derivation.

use serde::{Deserialize, Serialize};

use crate::measurement::Measurement;
use crate::rect_calc::RectCalc;
use crate::units::Unit;

/// One row of the report: all five fields expressed in a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub unit: Unit,
    pub length: f64,
    pub width: f64,
    pub hypotenuse: f64,
    pub hole_size: f64,
    pub pad_size: f64,
}

impl ReportRow {
    fn project(calc: &RectCalc, unit: Unit) -> Self {
        ReportRow {
            unit,
            length: rounded(calc.length, unit),
            width: rounded(calc.width, unit),
            hypotenuse: rounded(calc.hypotenuse, unit),
            hole_size: rounded(calc.hole_size, unit),
            pad_size: rounded(calc.pad_size, unit),
        }
    }

    /// The row's fields in display order, paired with column labels.
    pub fn cells(&self) -> [(&'static str, f64); 5] {
        [
            ("Length", self.length),
            ("Width", self.width),
            ("Hypotenuse", self.hypotenuse),
            ("Hole Size", self.hole_size),
            ("Pad Size", self.pad_size),
        ]
    }
}

/// Unit-aware rounding, even when no conversion happens.
fn rounded(meas: Measurement, unit: Unit) -> f64 {
    meas.unit().convert(meas.value(), unit)
}

/// The full three-unit report, one row per unit in display order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub rows: [ReportRow; 3],
}

impl RectCalc {
    /// Project this result into all three units for display.
    pub fn report(&self) -> Report {
        Report {
            rows: Unit::all().map(|unit| ReportRow::project(self, unit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect_calc::{calculate, RectInput};

    fn three_four_five() -> RectCalc {
        let input = RectInput::from_dimensions(
            Measurement::new(3.0, Unit::In).unwrap(),
            Measurement::new(4.0, Unit::In).unwrap(),
        );
        calculate(&input).unwrap()
    }

    #[test]
    fn test_row_order_is_in_mm_mil() {
        let report = three_four_five().report();
        let units: Vec<Unit> = report.rows.iter().map(|r| r.unit).collect();
        assert_eq!(units, vec![Unit::In, Unit::Mm, Unit::Mil]);
    }

    #[test]
    fn test_rows_are_converted_and_rounded() {
        let report = three_four_five().report();
        let [inches, mm, mil] = report.rows;

        assert_eq!(inches.hypotenuse, 5.0);
        assert_eq!(inches.hole_size, 5.006);

        assert_eq!(mm.length, 76.2);
        assert_eq!(mm.hypotenuse, 127.0);
        // 5.006 in * 25.4 = 127.1524 mm, 4 places
        assert_eq!(mm.hole_size, 127.1524);

        assert_eq!(mil.length, 3000.0);
        assert_eq!(mil.hole_size, 5006.0);
        assert_eq!(mil.pad_size, 5026.0);
    }

    #[test]
    fn test_inch_row_rounds_raw_values() {
        // 1mm square pin: the stored hypotenuse carries full sqrt
        // precision; the inch row must show at most 5 decimal places.
        let input = RectInput::from_dimensions(
            Measurement::new(1.0, Unit::Mm).unwrap(),
            Measurement::new(1.0, Unit::Mm).unwrap(),
        );
        let calc = calculate(&input).unwrap();
        let inches = calc.report().rows[0];
        assert_eq!(inches.hypotenuse, 0.05568);
    }

    #[test]
    fn test_cells_match_fields() {
        let report = three_four_five().report();
        let cells = report.rows[0].cells();
        assert_eq!(cells[0], ("Length", 3.0));
        assert_eq!(cells[3].1, report.rows[0].hole_size);
    }

    #[test]
    fn test_report_serializes() {
        let report = three_four_five().report();
        let json = serde_json::to_string(&report).unwrap();
        let roundtrip: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
