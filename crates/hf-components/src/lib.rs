//! hf-components: component library for lumped-parameter circuits.
//!
//! Provides the behavioural contract every physical model satisfies
//! ([`Component`]) and the canonical implementation of it: the
//! [`Compliance`] reservoir with its non-linear pressure-volume law and
//! mass-balance guard.
//!
//! Components are built from a definition's named parameter bag through a
//! validating, typed configuration struct; they never apply arbitrary keys
//! onto their fields.

pub mod compliance;
pub mod error;
pub mod mixing;
pub mod traits;

// Re-exports
pub use compliance::{Compliance, ComplianceConfig};
pub use error::{ComponentError, ComponentResult};
pub use mixing::{ContentKind, ContentMixer};
pub use traits::Component;
