//! Conversion factor tables for the closed unit sets.
//!
//! Purpose
//! -------
//! Map ordered unit pairs to scalar multipliers. [`factor`] is total over
//! `DistanceUnit` pairs (all nine, identity on the diagonal); the match is
//! exhaustive, so adding a unit without a factor fails to compile.
//! [`metric_factor`] is deliberately partial, mirroring the metric
//! converter's covered pairs only.
//!
//! Conventions
//! -----------
//! - Factors are multipliers: converting `x` from `a` to `b` is
//!   `x * factor(a, b)`. Inverse directions divide by expressing the factor
//!   as a reciprocal, so `factor(a, b) * factor(b, a) == 1` up to floating
//!   point.
use crate::distance::units::{DistanceUnit, MetricUnit};

/// Millimeters per international inch (exact by definition).
pub const MM_PER_INCH: f64 = 25.4;

/// Centimeters per international inch (exact by definition).
pub const CM_PER_INCH: f64 = 2.54;

/// Millimeters per centimeter.
pub const MM_PER_CM: f64 = 10.0;

/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;

/// Multiplier taking a value in `from` to a value in `to`.
///
/// Total over the closed inch/cm/mm set; equal units map to `1.0`.
pub fn factor(from: DistanceUnit, to: DistanceUnit) -> f64 {
    use DistanceUnit::{Centimeter, Inch, Millimeter};

    match (from, to) {
        (Inch, Inch) | (Centimeter, Centimeter) | (Millimeter, Millimeter) => 1.0,
        (Inch, Millimeter) => MM_PER_INCH,
        (Millimeter, Inch) => 1.0 / MM_PER_INCH,
        (Inch, Centimeter) => CM_PER_INCH,
        (Centimeter, Inch) => 1.0 / CM_PER_INCH,
        (Centimeter, Millimeter) => MM_PER_CM,
        (Millimeter, Centimeter) => 1.0 / MM_PER_CM,
    }
}

/// Multiplier for the metric converter's covered pairs.
///
/// Returns `None` for recognized pairs with no rule (e.g. mm → cm); the
/// caller decides how to surface the gap.
pub fn metric_factor(from: MetricUnit, to: MetricUnit) -> Option<f64> {
    use MetricUnit::{Centimeter, Meter, Millimeter};

    match (from, to) {
        (Centimeter, Centimeter) | (Millimeter, Millimeter) | (Meter, Meter) => Some(1.0),
        (Centimeter, Millimeter) => Some(MM_PER_CM),
        (Centimeter, Meter) => Some(1.0 / CM_PER_M),
        _ => None,
    }
}
