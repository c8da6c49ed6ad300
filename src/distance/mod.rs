//! distance — elementwise unit conversion for distance sequences.
//!
//! Purpose
//! -------
//! Collect the building blocks for converting numeric sequences between
//! distance units: the closed unit sets, the conversion factor tables, the
//! converter entry points, and the error surface. Everything here is pure
//! computation over `ndarray` containers; there is no state, no I/O, and no
//! concurrency.
//!
//! Key behaviors
//! -------------
//! - Define the typed unit sets ([`DistanceUnit`] for inch/cm/mm,
//!   [`MetricUnit`] for cm/mm/m) with case-sensitive label parsing.
//! - Map ordered unit pairs to scalar multipliers ([`factor`],
//!   [`metric_factor`]); the general table is total and compiler-checked,
//!   the metric table is deliberately partial.
//! - Apply factors elementwise via the converters ([`convert`],
//!   [`convert_distance`], [`convert_metric`]), always returning a freshly
//!   allocated sequence index-aligned with the input.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output length equals input length on every path, including failure
//!   paths.
//! - `convert(x, u, u) == x` for every unit `u`, and forward/backward
//!   factors are reciprocals, so round-trips recover the input up to
//!   floating point.
//! - Input values are taken as-is; there is no finiteness validation and
//!   no rounding policy beyond native `f64` multiplication.
//!
//! Conventions
//! -----------
//! - Unit labels are exact, case-sensitive strings (`"inch"`, `"cm"`,
//!   `"mm"`, `"m"`); normalization belongs to callers.
//! - The string-label converter signals unknown labels with a NaN-filled
//!   output (the embedding host's missing marker), while the typed parse
//!   layer and the metric converter report structured [`ConvError`] values.
//! - This module avoids I/O and logging; errors are reported via
//!   [`ConvResult`], and no public function panics.
//!
//! Downstream usage
//! ----------------
//! - Rust callers with typed units use [`convert`] directly; embedding
//!   callers that forward labels from a host environment use
//!   [`convert_distance`] / [`convert_metric`].
//! - The Python bindings in the crate root wrap the two label-based entry
//!   points and translate [`ConvError`] into `ValueError`.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover label parsing, factor identity and
//!   reciprocity, NaN-fill behavior, and the metric error paths.
//! - The integration test under `tests/` exercises the end-to-end numeric
//!   properties (fixed expected vectors, round-trips within tolerance).

pub mod convert;
pub mod errors;
pub mod factors;
pub mod units;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::convert::{convert, convert_distance, convert_metric};
pub use self::errors::{ConvError, ConvResult};
pub use self::factors::{factor, metric_factor, CM_PER_INCH, CM_PER_M, MM_PER_CM, MM_PER_INCH};
pub use self::units::{DistanceUnit, MetricUnit};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_unitconv::distance::prelude::*;
//
// to import the main conversion surface in a single line.

pub mod prelude {
    pub use super::convert::{convert, convert_distance, convert_metric};
    pub use super::errors::{ConvError, ConvResult};
    pub use super::units::{DistanceUnit, MetricUnit};
}
