//! Fixed-step simulation engine for lumped-parameter physiological circuits.
//!
//! Provides:
//! - Component registry resolving definition kinds to factories, with
//!   best-effort assembly and an explicit build-warning surface
//! - Insertion-ordered component map owned by the engine
//! - Fixed-step simulation clock with a per-step observer hook
//! - Wall-clock run diagnostics
//!
//! Control flow is synchronous and single-threaded end to end: one `run`
//! call sweeps every component in declaration order for every step, with no
//! suspension points and no I/O beyond the observer callback.

pub mod component_map;
pub mod engine;
pub mod error;
pub mod observer;
pub mod registry;

// Re-exports for public API
pub use component_map::ComponentMap;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use observer::{ClockRecorder, NullObserver, StepObserver};
pub use registry::{BuildWarning, ComponentRegistry, Factory, build_components};
