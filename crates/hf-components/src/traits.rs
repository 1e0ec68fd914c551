//! Core traits for component models.

use std::any::Any;

/// Behavioural contract every physical component satisfies.
///
/// Components are constructed once from named parameters, then advanced in
/// lock-step by the simulation clock. One `step` call updates the
/// component's derived state for the current model time; the engine calls
/// every component exactly once per step, in definition declaration order.
///
/// A disabled component keeps its place in the component map but treats
/// `step` (and any state-changing operation it exposes) as a no-op. That is
/// how a component is taken out of the simulated network at run time;
/// structural edits to the map never happen during a run.
pub trait Component: Send {
    /// Component name for lookup and diagnostics.
    fn name(&self) -> &str;

    /// The kind identifier this component was registered under.
    fn kind(&self) -> &'static str;

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Advance the component by one fixed step of `dt_s` seconds.
    ///
    /// Expected run-time conditions (a disabled component, an exhausted
    /// reservoir) are expressed as values, not errors, so `step` is
    /// infallible by contract.
    fn step(&mut self, dt_s: f64);

    /// Downcast support for engine-side access to concrete component state.
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
