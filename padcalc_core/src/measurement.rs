//! # Measurement
//!
//! A `(value, unit)` pair with unit-aware arithmetic. Operators return
//! new values; nothing mutates in place. When the right-hand side is a
//! `Measurement` in a different unit it is converted to the left-hand
//! side's unit first, and the result keeps the left-hand side's unit.
//!
//! ## Example
//!
//! ```rust
//! use padcalc_core::measurement::Measurement;
//! use padcalc_core::units::Unit;
//!
//! let a = Measurement::new(1.0, Unit::In).unwrap();
//! let b = Measurement::new(25.4, Unit::Mm).unwrap();
//! let sum = a + b; // 2.0 in
//! assert_eq!(sum.value(), 2.0);
//! assert_eq!(sum.unit(), Unit::In);
//! assert_eq!(sum.to_string(), "2 in");
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Unit;

/// A measured length: a finite floating-point value tagged with a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    value: f64,
    unit: Unit,
}

impl Measurement {
    /// Create a measurement. Integer inputs coerce to floating point.
    ///
    /// Fails with [`CalcError::InvalidValue`] if the value is NaN or
    /// infinite.
    pub fn new(value: impl Into<f64>, unit: Unit) -> CalcResult<Self> {
        let value = value.into();
        if !value.is_finite() {
            return Err(CalcError::invalid_value(value));
        }
        Ok(Measurement { value, unit })
    }

    /// Shorthand for an inch measurement.
    pub fn inches(value: f64) -> CalcResult<Self> {
        Measurement::new(value, Unit::In)
    }

    /// The numeric value, in this measurement's own unit.
    pub fn value(self) -> f64 {
        self.value
    }

    /// The unit tag.
    pub fn unit(self) -> Unit {
        self.unit
    }

    /// Convert into `to`, returning a new measurement.
    ///
    /// Same-unit conversion is an identity fast path; the stored value
    /// is returned untouched rather than re-rounded.
    pub fn convert(self, to: Unit) -> Measurement {
        if self.unit == to {
            return self;
        }
        Measurement {
            value: self.unit.convert(self.value, to),
            unit: to,
        }
    }

    /// The value converted into `to`, without building a new measurement.
    pub fn value_in(self, to: Unit) -> f64 {
        self.convert(to).value
    }

    /// Convert to an integer. Fails with [`CalcError::NotIntegral`] if
    /// the value has a fractional part.
    pub fn to_int(self) -> CalcResult<i64> {
        if self.value.fract() != 0.0 {
            return Err(CalcError::NotIntegral { value: self.value });
        }
        Ok(self.value as i64)
    }

    /// Apply a binary operation with a dynamically-typed operand.
    ///
    /// This is the entry point for callers working from parsed text,
    /// where the operand may turn out to be a bare number (taken to be
    /// in this measurement's unit) or another measurement (converted to
    /// this measurement's unit first). Multiplication and division only
    /// accept bare numbers; a measurement operand there fails with
    /// [`CalcError::InvalidOperand`].
    pub fn apply(self, op: BinOp, operand: Operand) -> CalcResult<Measurement> {
        let value = match (op, operand) {
            (BinOp::Add, operand) => self.value + self.operand_value(operand),
            (BinOp::Sub, operand) => self.value - self.operand_value(operand),
            (BinOp::Mul, Operand::Number(n)) => self.value * n,
            (BinOp::Div, Operand::Number(n)) => self.value / n,
            (BinOp::FloorDiv, Operand::Number(n)) => (self.value / n).floor(),
            (op, Operand::Measurement(m)) => {
                return Err(CalcError::invalid_operand(op.symbol(), m));
            }
        };
        // Division by zero surfaces here as a non-finite value.
        Measurement::new(value, self.unit)
    }

    fn operand_value(self, operand: Operand) -> f64 {
        match operand {
            Operand::Number(n) => n,
            Operand::Measurement(m) => m.value_in(self.unit),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl FromStr for Measurement {
    type Err = CalcError;

    /// Parse the display form, `"<value> <code>"`. A bare number is
    /// taken to be in inches.
    fn from_str(s: &str) -> CalcResult<Self> {
        let mut parts = s.split_whitespace();
        let value_part = parts.next().ok_or_else(|| CalcError::invalid_value(s))?;
        let value: f64 = value_part
            .parse()
            .map_err(|_| CalcError::invalid_value(value_part))?;
        let unit = match parts.next() {
            Some(code) => code.parse()?,
            None => Unit::In,
        };
        if parts.next().is_some() {
            return Err(CalcError::invalid_value(s));
        }
        Measurement::new(value, unit)
    }
}

impl Add for Measurement {
    type Output = Measurement;
    fn add(self, rhs: Measurement) -> Measurement {
        Measurement {
            value: self.value + rhs.value_in(self.unit),
            unit: self.unit,
        }
    }
}

impl Sub for Measurement {
    type Output = Measurement;
    fn sub(self, rhs: Measurement) -> Measurement {
        Measurement {
            value: self.value - rhs.value_in(self.unit),
            unit: self.unit,
        }
    }
}

// Bare numbers are treated as already being in the measurement's unit.
impl Add<f64> for Measurement {
    type Output = Measurement;
    fn add(self, rhs: f64) -> Measurement {
        Measurement {
            value: self.value + rhs,
            unit: self.unit,
        }
    }
}

impl Sub<f64> for Measurement {
    type Output = Measurement;
    fn sub(self, rhs: f64) -> Measurement {
        Measurement {
            value: self.value - rhs,
            unit: self.unit,
        }
    }
}

impl Mul<f64> for Measurement {
    type Output = Measurement;
    fn mul(self, rhs: f64) -> Measurement {
        Measurement {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl Div<f64> for Measurement {
    type Output = Measurement;
    fn div(self, rhs: f64) -> Measurement {
        Measurement {
            value: self.value / rhs,
            unit: self.unit,
        }
    }
}

/// Binary operations available through [`Measurement::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Division followed by floor, for whole-step sizing
    FloorDiv,
}

impl BinOp {
    /// The operator's conventional symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::FloorDiv => "//",
        }
    }
}

/// A dynamically-typed right-hand operand: a bare number or a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Number(f64),
    Measurement(Measurement),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => write!(f, "{n}"),
            Operand::Measurement(m) => write!(f, "{m}"),
        }
    }
}

impl FromStr for Operand {
    type Err = CalcError;

    /// Parse either a bare number or a `"<value> <code>"` pair. Anything
    /// else fails with [`CalcError::InvalidOperand`].
    fn from_str(s: &str) -> CalcResult<Self> {
        if let Ok(n) = s.trim().parse::<f64>() {
            if !n.is_finite() {
                return Err(CalcError::invalid_operand("parse", s));
            }
            return Ok(Operand::Number(n));
        }
        s.parse::<Measurement>()
            .map(Operand::Measurement)
            .map_err(|_| CalcError::invalid_operand("parse", s))
    }
}
