//! Engine and evaluation options.

/// Options applied at engine construction.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Defaults applied to every evaluation unless overridden per call.
    pub default_eval_options: EvalOptions,
}

/// Options for a single evaluation.
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// Maximum number of tree nodes an evaluation may force. `None`
    /// (the default) means unbounded. A budget guards the calling thread
    /// against runaway host functions.
    pub max_steps: Option<u64>,
}

impl EvalOptions {
    /// Merge an override into these options (set fields win).
    pub fn override_with(&mut self, other: &EvalOptionsOverride) {
        if let Some(max_steps) = other.max_steps {
            self.max_steps = Some(max_steps);
        }
    }
}

/// Partial [`EvalOptions`]: only the set fields override the defaults.
#[derive(Debug, Clone, Default)]
pub struct EvalOptionsOverride {
    pub max_steps: Option<u64>,
}
