//! The engine: fixed-step simulation clock over an owned component map.

use crate::component_map::ComponentMap;
use crate::error::{SimError, SimResult};
use crate::observer::StepObserver;
use crate::registry::{BuildWarning, ComponentRegistry, build_components};
use hf_components::Compliance;
use hf_core::{RunStats, Timer};
use hf_project::{ModelDefinition, validate_definition};

/// A live model: the component instances plus the simulation clock.
///
/// The engine exclusively owns every component. Construction happens once,
/// the map's key set never changes afterwards, and everything here runs on
/// one thread: within a step every component update completes before the
/// observer is notified, and the observer completes before the clock
/// advances. Components that read siblings during a step see exactly the
/// siblings declared before them already advanced and the rest not yet;
/// that declared-order visibility is the reproducibility contract.
pub struct Engine {
    name: String,
    description: String,
    weight_kg: f64,
    stepsize_s: f64,
    model_clock_s: f64,
    components: ComponentMap,
    stats: RunStats,
}

impl Engine {
    /// Build an engine from a definition.
    ///
    /// Definition-level problems (non-positive step size, duplicate names)
    /// are fatal. Component-level problems are returned as build warnings
    /// alongside the engine; the run proceeds with whatever subset built.
    pub fn build(
        definition: &ModelDefinition,
        registry: &ComponentRegistry,
    ) -> SimResult<(Self, Vec<BuildWarning>)> {
        validate_definition(definition)?;
        let (components, warnings) = build_components(definition, registry);

        let engine = Self {
            name: definition.name.clone(),
            description: definition.description.clone(),
            weight_kg: definition.weight_kg,
            stepsize_s: definition.stepsize_s,
            model_clock_s: 0.0,
            components,
            stats: RunStats::default(),
        };
        Ok((engine, warnings))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Fixed step size for this run (seconds).
    pub fn stepsize_s(&self) -> f64 {
        self.stepsize_s
    }

    /// Cumulative model time (seconds). Advances by exactly one step size
    /// per iteration, never by wall-clock time.
    pub fn model_clock_s(&self) -> f64 {
        self.model_clock_s
    }

    /// Diagnostics from the most recent [`Engine::run`] call.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn components(&self) -> &ComponentMap {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut ComponentMap {
        &mut self.components
    }

    /// Advance the model by `duration_s` seconds of model time.
    ///
    /// Executes `floor(duration_s / stepsize_s)` full sweeps; a duration
    /// shorter than one step (or zero, or negative) performs no iterations
    /// and is not an error. Each sweep updates every component in
    /// declaration order, then notifies the observer exactly once with the
    /// current model time, then advances the clock by one step size.
    pub fn run(&mut self, duration_s: f64, observer: &mut dyn StepObserver) {
        let steps = steps_for(duration_s, self.stepsize_s);
        let dt_s = self.stepsize_s;

        let timer = Timer::start();
        for _ in 0..steps {
            for component in self.components.iter_mut() {
                component.step(dt_s);
            }
            observer.on_step(self.model_clock_s);
            self.model_clock_s += dt_s;
        }
        self.stats = RunStats::from_run(steps, timer.elapsed_seconds());

        tracing::debug!(
            model = %self.name,
            steps,
            run_duration_s = self.stats.run_duration_s,
            avg_step_s = self.stats.avg_step_s,
            "run complete"
        );
    }

    /// Look up a named compliance reservoir.
    pub fn compliance(&self, name: &str) -> Option<&Compliance> {
        self.components.get(name)?.as_any().downcast_ref()
    }

    /// Look up a named compliance reservoir, mutable.
    pub fn compliance_mut(&mut self, name: &str) -> SimResult<&mut Compliance> {
        let component =
            self.components
                .get_mut(name)
                .ok_or_else(|| SimError::UnknownComponent {
                    name: name.to_string(),
                })?;
        component
            .as_any_mut()
            .downcast_mut()
            .ok_or_else(|| SimError::NotAReservoir {
                name: name.to_string(),
            })
    }

    /// Move `dvol_l` litres from one named reservoir into another.
    ///
    /// Returns the volume that did not make the trip: the donor's shortfall
    /// plus anything the acceptor rejected. What to do with it (re-attempt
    /// elsewhere, book as a leak, ignore) is the caller's policy.
    pub fn transfer_volume(&mut self, from: &str, to: &str, dvol_l: f64) -> SimResult<f64> {
        // Resolve both ends before touching either, so a bad name cannot
        // leave volume half-moved.
        self.compliance_mut(to)?;
        let moved_l = {
            let donor = self.compliance_mut(from)?;
            dvol_l - donor.remove_volume(dvol_l, to)
        };
        let acceptor = self.compliance_mut(to)?;
        let rejected_l = acceptor.add_volume(moved_l, from);
        Ok((dvol_l - moved_l) + rejected_l)
    }
}

fn steps_for(duration_s: f64, stepsize_s: f64) -> u64 {
    let steps = (duration_s / stepsize_s).floor();
    if steps.is_finite() && steps > 0.0 {
        steps as u64
    } else {
        0
    }
}
