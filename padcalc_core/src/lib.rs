//! # padcalc_core - Hole and Pad Sizing Engine
//!
//! `padcalc_core` computes drill-hole and solder-pad dimensions for
//! rectangular through-hole pin components, with unit conversion among
//! inches, millimeters, and mils. All inputs and outputs are
//! JSON-serializable value types.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable value types
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Inches Internally**: Derivation always runs in inches; other
//!   units exist at the input and display boundaries
//!
//! ## Quick Start
//!
//! ```rust
//! use padcalc_core::measurement::Measurement;
//! use padcalc_core::rect_calc::{calculate, RectInput};
//! use padcalc_core::units::Unit;
//!
//! let length = Measurement::new(1.0, Unit::Mm).unwrap();
//! let width = Measurement::new(1.0, Unit::Mm).unwrap();
//! let result = calculate(&RectInput::from_dimensions(length, width)).unwrap();
//!
//! // Serialize the three-unit report for display or transmission
//! let json = serde_json::to_string_pretty(&result.report()).unwrap();
//! assert!(json.contains("hole_size"));
//! ```
//!
//! ## Modules
//!
//! - [`units`] - The three-unit tag type and conversion table
//! - [`measurement`] - Unit-tagged values with unit-aware arithmetic
//! - [`rect_calc`] - The hypotenuse → hole → pad derivation pipeline
//! - [`report`] - Three-unit display projection of a result
//! - [`errors`] - Structured error types

pub mod errors;
pub mod measurement;
pub mod rect_calc;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use measurement::{BinOp, Measurement, Operand};
pub use rect_calc::{calculate, RectCalc, RectInput};
pub use report::{Report, ReportRow};
pub use units::Unit;
