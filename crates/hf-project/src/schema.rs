//! Model definition schema.

use hf_core::Params;
use serde::{Deserialize, Serialize};

/// Declarative description of a model, consumed once at startup.
///
/// The component list is declaration-ordered and that order is semantically
/// meaningful: it is the order in which the engine updates components on
/// every step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Subject weight in kg (scaling input for component parameters).
    pub weight_kg: f64,
    /// Fixed modeling step size in seconds.
    pub stepsize_s: f64,
    pub components: Vec<ComponentSpec>,
}

/// One component declaration: a kind selecting the implementation, a unique
/// name, and an open bag of initialisation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentSpec {
    pub kind: String,
    pub name: String,
    #[serde(flatten)]
    pub params: Params,
}

impl ModelDefinition {
    /// Distinct kinds referenced by the component list, in first-use order.
    pub fn distinct_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for spec in &self.components {
            if !kinds.contains(&spec.kind.as_str()) {
                kinds.push(&spec.kind);
            }
        }
        kinds
    }
}
