//! hf-core: stable foundation for hemoflow.
//!
//! Contains:
//! - units (uom SI types + physiological constructors)
//! - numeric (float comparison tolerances)
//! - params (named scalar parameter bags from model definitions)
//! - timing (wall-clock run diagnostics)

pub mod numeric;
pub mod params;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::{Tolerances, nearly_equal};
pub use params::{ParamError, ParamReader, ParamValue, Params};
pub use timing::{RunStats, Timer};
