//! Per-step observation of the running engine.

/// External collaborator notified once per step, after every component has
/// updated and before the model clock advances.
pub trait StepObserver {
    fn on_step(&mut self, model_time_s: f64);
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn on_step(&mut self, _model_time_s: f64) {}
}

/// Records the model-time value of every step notification.
#[derive(Clone, Debug, Default)]
pub struct ClockRecorder {
    pub times_s: Vec<f64>,
}

impl StepObserver for ClockRecorder {
    fn on_step(&mut self, model_time_s: f64) {
        self.times_s.push(model_time_s);
    }
}
