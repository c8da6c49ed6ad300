//! distance::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used by the distance converters,
//! together with a conversion layer to Python exceptions for PyO3-based
//! bindings. This keeps label validation and pair-dispatch failures
//! localized while exposing a clean error surface to both Rust and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`ConvResult`] and [`ConvError`] as the canonical result and
//!   error types for unit parsing and the metric converter.
//! - Attach human-readable `Display` messages to each variant so that
//!   diagnostics are meaningful without additional context.
//! - Implement `From<ConvError> for PyErr` (behind `python-bindings`) to map
//!   Rust-side failures into `PyValueError` values visible to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - `ConvError` values are small, cheap to clone, and suitable for use in
//!   unit tests and higher-level orchestration code alike.
//! - The Python-facing conversion preserves the Rust error message verbatim
//!   inside the `PyValueError` string representation.
//!
//! Conventions
//! -----------
//! - The general string-label converter ([`crate::distance::convert_distance`])
//!   never returns these errors; its failure signal is a NaN-filled output
//!   vector. Structured errors belong to the typed parse layer and the
//!   metric converter.
//! - Error messages are phrased in terms of domain constraints ("unknown
//!   unit label", "no conversion rule") rather than low-level details.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (offending label or unit pair).
//! - The `From<ConvError> for PyErr` conversion is exercised by Python-level
//!   tests, since it requires linking against the Python C API.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

use crate::distance::units::MetricUnit;

/// Crate-wide result alias for conversion operations that may produce
/// [`ConvError`].
pub type ConvResult<T> = Result<T, ConvError>;

/// ConvError — error conditions for distance unit conversion.
///
/// Variants
/// --------
/// - `UnknownUnit { label }`
///   A unit label did not match any unit in the converter's closed set
///   (labels are case-sensitive and untrimmed).
/// - `UnsupportedConversion { from, to }`
///   Both labels were recognized by the metric converter, but the ordered
///   pair has no conversion rule; the gap is reported rather than
///   zero-filled.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
/// - Behind the `python-bindings` feature, `From<ConvError> for PyErr`
///   maps both cases to `PyValueError` with the `Display` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvError {
    /// Label is not in the converter's unit set.
    UnknownUnit { label: String },

    /// Recognized pair with no conversion rule in the metric converter.
    UnsupportedConversion { from: MetricUnit, to: MetricUnit },
}

impl std::error::Error for ConvError {}

impl std::fmt::Display for ConvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvError::UnknownUnit { label } => {
                write!(f, "Unknown unit label: {label:?}.")
            }
            ConvError::UnsupportedConversion { from, to } => {
                write!(
                    f,
                    "No conversion rule from {} to {}.",
                    from.label(),
                    to.label()
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ConvError> for PyErr {
    fn from(err: ConvError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for ConvError variants.
    // - Embedding of payload values (labels, unit pair) into error messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<ConvError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled
    //   by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `ConvError::UnknownUnit` includes the offending label in
    // its `Display` representation.
    //
    // Given
    // -----
    // - An `UnknownUnit` error with label "furlong".
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "furlong".
    fn unknown_unit_includes_label_in_display() {
        // Arrange
        let err = ConvError::UnknownUnit { label: "furlong".to_string() };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("furlong"),
            "Display message should include offending label.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `ConvError::UnsupportedConversion` names both units of the
    // uncovered pair.
    //
    // Given
    // -----
    // - An `UnsupportedConversion` error for mm → m.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains both "mm" and "m".
    fn unsupported_conversion_names_both_units() {
        // Arrange
        let err = ConvError::UnsupportedConversion {
            from: MetricUnit::Millimeter,
            to: MetricUnit::Meter,
        };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("mm"), "Display message should name the source unit.\nGot: {msg}");
        assert!(msg.contains("m"), "Display message should name the target unit.\nGot: {msg}");
    }
}
