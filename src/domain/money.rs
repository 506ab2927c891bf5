//! Numeric types for price and projected-points representation.

use rust_decimal::Decimal;

/// Player price represented as a Decimal for precision.
pub type Price = Decimal;

/// Projected points represented as a Decimal for precision.
pub type Points = Decimal;
