//! Elementwise distance conversion over `ndarray` sequences.
//!
//! Purpose
//! -------
//! Implement the two public converters: the general inch/cm/mm converter
//! with its typed and string-label surfaces, and the metric cm/mm/m
//! converter. Each call is a pure, stateless elementwise transform; the
//! output is freshly allocated and index-aligned with the input.
//!
//! Key behaviors
//! -------------
//! - [`convert`] dispatches on typed unit pairs and is infallible; the
//!   factor table is total over the closed set.
//! - [`convert_distance`] validates string labels and signals unknown
//!   labels with a NaN-filled output of the same length, never an error.
//!   `from` is checked before `to`, so an invalid source label short-circuits
//!   before the target label is considered.
//! - [`convert_metric`] validates labels and pair coverage and reports both
//!   failure kinds as structured [`ConvError`] values.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output length always equals input length.
//! - Input values are used as-is: no finiteness checks, no rounding policy
//!   beyond native `f64` multiplication.
//! - No I/O and no logging; these functions operate purely on `ndarray`
//!   containers and scalar factors.
//!
//! Downstream usage
//! ----------------
//! - Native Rust callers that already hold typed units should prefer
//!   [`convert`]; the string-label surfaces exist for embedding callers
//!   that pass labels through from a host environment.
//! - The Python bindings in the crate root wrap [`convert_distance`] and
//!   [`convert_metric`] directly.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover label checking order, NaN fill, identity, and
//!   the metric converter's error paths.
//! - The integration test under `tests/` exercises the end-to-end numeric
//!   properties (fixed expected vectors and round-trips).
use ndarray::{Array1, ArrayView1};

use crate::distance::{
    errors::{ConvError, ConvResult},
    factors::{factor, metric_factor},
    units::{DistanceUnit, MetricUnit},
};

/// Convert a sequence between typed distance units.
///
/// Parameters
/// ----------
/// - `values`: `ArrayView1<f64>`
///   Input sequence; read-only, any length (including empty).
/// - `from`, `to`: [`DistanceUnit`]
///   Source and target units.
///
/// Returns
/// -------
/// `Array1<f64>`
///   Freshly allocated sequence of the same length with every element
///   multiplied by the pair's conversion factor. Equal units return the
///   values unchanged.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Infallible by construction: the factor table is total over the closed
///   inch/cm/mm set, so there is no unit pair without a rule.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use rust_unitconv::distance::{convert, DistanceUnit};
///
/// let values = array![1.0, 2.0, 3.0];
/// let out = convert(values.view(), DistanceUnit::Centimeter, DistanceUnit::Millimeter);
/// assert_eq!(out, array![10.0, 20.0, 30.0]);
/// ```
pub fn convert(values: ArrayView1<'_, f64>, from: DistanceUnit, to: DistanceUnit) -> Array1<f64> {
    if from == to {
        return values.to_owned();
    }
    let k = factor(from, to);
    values.mapv(|v| v * k)
}

/// Convert a sequence between distance units given as string labels.
///
/// Parameters
/// ----------
/// - `values`: `ArrayView1<f64>`
///   Input sequence; read-only, any length.
/// - `from`, `to`: `&str`
///   Case-sensitive unit labels; recognized labels are `"inch"`, `"cm"`,
///   and `"mm"`.
///
/// Returns
/// -------
/// `Array1<f64>`
///   The converted sequence, or a same-length NaN-filled sequence when
///   either label is unrecognized. `from` is checked first.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - This surface never returns an error: the NaN fill is a value-level
///   "missing" signal, so callers must check elements rather than match on
///   a result. Callers that want structured errors should parse labels via
///   [`DistanceUnit::parse`] and use [`convert`].
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use rust_unitconv::distance::convert_distance;
///
/// let values = array![1.0, 2.0, 3.0];
/// assert_eq!(convert_distance(values.view(), "cm", "mm"), array![10.0, 20.0, 30.0]);
///
/// let missing = convert_distance(values.view(), "cm", "bad");
/// assert!(missing.iter().all(|v| v.is_nan()));
/// ```
pub fn convert_distance(values: ArrayView1<'_, f64>, from: &str, to: &str) -> Array1<f64> {
    let from_unit = match DistanceUnit::parse(from) {
        Ok(unit) => unit,
        Err(_) => return Array1::from_elem(values.len(), f64::NAN),
    };
    let to_unit = match DistanceUnit::parse(to) {
        Ok(unit) => unit,
        Err(_) => return Array1::from_elem(values.len(), f64::NAN),
    };
    convert(values, from_unit, to_unit)
}

/// Convert a sequence between metric units (cm/mm/m), covered pairs only.
///
/// Parameters
/// ----------
/// - `values`: `ArrayView1<f64>`
///   Input sequence; read-only, any length.
/// - `from`, `to`: `&str`
///   Case-sensitive unit labels; recognized labels are `"cm"`, `"mm"`,
///   and `"m"`.
///
/// Returns
/// -------
/// `ConvResult<Array1<f64>>`
///   - `Ok` with the input copied through when `from == to`.
///   - `Ok` with elements multiplied by 10 for cm → mm, or divided by 100
///     for cm → m.
///
/// Errors
/// ------
/// - [`ConvError::UnknownUnit`] if either label is not in the cm/mm/m set.
/// - [`ConvError::UnsupportedConversion`] for recognized pairs with no rule
///   (mm → cm, mm → m, m → cm, m → mm).
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Uncovered pairs are reported, never zero-filled: this converter does
///   not fabricate output values.
///
/// Examples
/// --------
/// ```rust
/// use ndarray::array;
/// use rust_unitconv::distance::{convert_metric, ConvError};
///
/// let values = array![1.0, 2.0, 3.0];
/// let out = convert_metric(values.view(), "cm", "mm").unwrap();
/// assert_eq!(out, array![10.0, 20.0, 30.0]);
///
/// assert!(matches!(
///     convert_metric(values.view(), "mm", "cm"),
///     Err(ConvError::UnsupportedConversion { .. })
/// ));
/// ```
pub fn convert_metric(
    values: ArrayView1<'_, f64>, from: &str, to: &str,
) -> ConvResult<Array1<f64>> {
    let from_unit = MetricUnit::parse(from)?;
    let to_unit = MetricUnit::parse(to)?;

    if from_unit == to_unit {
        return Ok(values.to_owned());
    }
    match metric_factor(from_unit, to_unit) {
        Some(k) => Ok(values.mapv(|v| v * k)),
        None => Err(ConvError::UnsupportedConversion { from: from_unit, to: to_unit }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Identity behavior and output shape of all three entry points.
    // - NaN fill for unknown labels in `convert_distance`, including the
    //   from-before-to checking order and empty inputs.
    // - Structured error paths of `convert_metric`.
    //
    // They intentionally DO NOT cover:
    // - Numeric values of every unit pair (factor reciprocity is tested in
    //   `factors`; end-to-end expected vectors live in the integration test).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that equal units return the input values unchanged on all
    // three surfaces.
    //
    // Given
    // -----
    // - The sequence [1.5, -2.0, 0.0] and matching from/to units.
    //
    // Expect
    // ------
    // - Output equals input exactly for `convert`, `convert_distance`, and
    //   `convert_metric`.
    fn equal_units_pass_values_through() {
        // Arrange
        let values = array![1.5, -2.0, 0.0];

        // Act / Assert
        let typed = convert(values.view(), DistanceUnit::Millimeter, DistanceUnit::Millimeter);
        assert_eq!(typed, values);

        let labeled = convert_distance(values.view(), "inch", "inch");
        assert_eq!(labeled, values);

        let metric = convert_metric(values.view(), "m", "m").unwrap();
        assert_eq!(metric, values);
    }

    #[test]
    // Purpose
    // -------
    // Verify that an unknown source label yields a NaN-filled output of the
    // input's length, even when the target label is also invalid.
    //
    // Given
    // -----
    // - `convert_distance([1, 2, 3], "bad", "m")` — both labels are outside
    //   the inch/cm/mm set.
    //
    // Expect
    // ------
    // - A length-3 output in which every element is NaN.
    fn unknown_from_label_yields_nan_fill() {
        // Arrange
        let values = array![1.0, 2.0, 3.0];

        // Act
        let out = convert_distance(values.view(), "bad", "m");

        // Assert
        assert_eq!(out.len(), values.len());
        assert!(out.iter().all(|v| v.is_nan()), "expected all-NaN output, got {out:?}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that a valid source label with an unknown target label also
    // yields the NaN fill.
    //
    // Given
    // -----
    // - `convert_distance([1, 2, 3], "cm", "bad")`.
    //
    // Expect
    // ------
    // - A length-3 output in which every element is NaN.
    fn unknown_to_label_yields_nan_fill() {
        // Arrange
        let values = array![1.0, 2.0, 3.0];

        // Act
        let out = convert_distance(values.view(), "cm", "bad");

        // Assert
        assert_eq!(out.len(), values.len());
        assert!(out.iter().all(|v| v.is_nan()), "expected all-NaN output, got {out:?}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that empty inputs stay empty on every path, including the
    // NaN-fill path.
    //
    // Given
    // -----
    // - An empty sequence with valid and invalid labels.
    //
    // Expect
    // ------
    // - Every output has length 0; no panic.
    fn empty_input_yields_empty_output() {
        // Arrange
        let values = Array1::<f64>::zeros(0);

        // Act / Assert
        assert_eq!(convert_distance(values.view(), "inch", "mm").len(), 0);
        assert_eq!(convert_distance(values.view(), "nope", "mm").len(), 0);
        assert_eq!(convert_metric(values.view(), "cm", "m").unwrap().len(), 0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the metric converter reports unknown labels as
    // `UnknownUnit` rather than NaN-filling or zero-filling.
    //
    // Given
    // -----
    // - `convert_metric([1], "inch", "mm")` — "inch" is outside the cm/mm/m
    //   set.
    //
    // Expect
    // ------
    // - `Err(ConvError::UnknownUnit)` carrying the label "inch".
    fn metric_converter_rejects_unknown_labels() {
        // Arrange
        let values = array![1.0];

        // Act
        let err = convert_metric(values.view(), "inch", "mm").unwrap_err();

        // Assert
        match err {
            ConvError::UnknownUnit { label } => assert_eq!(label, "inch"),
            other => panic!("expected UnknownUnit, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that every recognized-but-uncovered metric pair is reported as
    // `UnsupportedConversion` with the pair attached.
    //
    // Given
    // -----
    // - The four uncovered ordered pairs: mm → cm, mm → m, m → cm, m → mm.
    //
    // Expect
    // ------
    // - Each call returns `Err(ConvError::UnsupportedConversion)` whose
    //   payload matches the requested pair.
    fn metric_converter_reports_uncovered_pairs() {
        // Arrange
        let values = array![1.0, 2.0];
        let uncovered = [
            ("mm", MetricUnit::Millimeter, "cm", MetricUnit::Centimeter),
            ("mm", MetricUnit::Millimeter, "m", MetricUnit::Meter),
            ("m", MetricUnit::Meter, "cm", MetricUnit::Centimeter),
            ("m", MetricUnit::Meter, "mm", MetricUnit::Millimeter),
        ];

        for (from, from_unit, to, to_unit) in uncovered {
            // Act
            let err = convert_metric(values.view(), from, to).unwrap_err();

            // Assert
            assert_eq!(
                err,
                ConvError::UnsupportedConversion { from: from_unit, to: to_unit },
                "unexpected error for {from} → {to}"
            );
        }
    }
}
