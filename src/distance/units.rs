//! Distance units and their string labels.
//!
//! - [`DistanceUnit`] is the closed inch/cm/mm set used by the general
//!   converter.
//! - [`MetricUnit`] is the narrower cm/mm/m set used by the metric-only
//!   converter.
//!
//! Notes
//! -----
//! - Labels are matched case-sensitively and without trimming; `"CM"` and
//!   `" cm"` are unknown labels, not aliases.
use crate::distance::errors::{ConvError, ConvResult};

/// Units of the general distance converter.
///
/// The set is closed on purpose: every ordered pair of these units has a
/// conversion factor, so dispatch over pairs is exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    /// International inch (25.4 mm).
    Inch,
    /// Centimeter.
    Centimeter,
    /// Millimeter.
    Millimeter,
}

impl DistanceUnit {
    /// Parse a case-sensitive unit label (`"inch"`, `"cm"`, `"mm"`).
    ///
    /// # Errors
    /// - [`ConvError::UnknownUnit`] for any other string.
    pub fn parse(label: &str) -> ConvResult<Self> {
        match label {
            "inch" => Ok(DistanceUnit::Inch),
            "cm" => Ok(DistanceUnit::Centimeter),
            "mm" => Ok(DistanceUnit::Millimeter),
            other => Err(ConvError::UnknownUnit { label: other.to_string() }),
        }
    }

    /// The canonical label for this unit, as accepted by [`Self::parse`].
    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::Inch => "inch",
            DistanceUnit::Centimeter => "cm",
            DistanceUnit::Millimeter => "mm",
        }
    }
}

/// Units of the metric-only converter.
///
/// Shares `cm`/`mm` labels with [`DistanceUnit`] but swaps `inch` for `m`;
/// the two sets stay separate types so neither converter can be handed a
/// unit outside its closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricUnit {
    /// Centimeter.
    Centimeter,
    /// Millimeter.
    Millimeter,
    /// Meter.
    Meter,
}

impl MetricUnit {
    /// Parse a case-sensitive unit label (`"cm"`, `"mm"`, `"m"`).
    ///
    /// # Errors
    /// - [`ConvError::UnknownUnit`] for any other string.
    pub fn parse(label: &str) -> ConvResult<Self> {
        match label {
            "cm" => Ok(MetricUnit::Centimeter),
            "mm" => Ok(MetricUnit::Millimeter),
            "m" => Ok(MetricUnit::Meter),
            other => Err(ConvError::UnknownUnit { label: other.to_string() }),
        }
    }

    /// The canonical label for this unit, as accepted by [`Self::parse`].
    pub fn label(&self) -> &'static str {
        match self {
            MetricUnit::Centimeter => "cm",
            MetricUnit::Millimeter => "mm",
            MetricUnit::Meter => "m",
        }
    }
}
