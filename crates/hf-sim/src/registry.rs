//! Kind resolution and best-effort model assembly.
//!
//! The registry is an explicit registration table from kind identifier to
//! component factory, populated at process start and queried by string key.
//! A kind with no entry is a normal, checked "not found" result.
//!
//! Assembly is deliberately best-effort: a component that fails to build is
//! skipped with a warning and the rest of the model is constructed anyway.
//! The warning list is part of the build result so the host can log it or
//! reject the run; nothing here is silent.

use crate::component_map::ComponentMap;
use hf_components::{Compliance, Component, ComponentError};
use hf_project::{ComponentSpec, ModelDefinition};
use std::collections::HashMap;
use thiserror::Error;

/// Produces one live component from its specification.
///
/// On success also returns the parameter keys the component did not
/// understand, which the loader turns into unknown-parameter warnings.
pub type Factory = fn(&ComponentSpec) -> Result<(Box<dyn Component>, Vec<String>), ComponentError>;

/// Recoverable problems recorded while assembling a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildWarning {
    #[error("Component kind '{kind}' is not registered")]
    UnknownKind { kind: String },

    #[error("Component '{name}' failed to build: {reason}")]
    BuildFailed { name: String, reason: String },

    #[error("Component '{component}' does not understand parameter '{key}'")]
    UnknownParam { component: String, key: String },
}

/// Registration table: kind identifier -> factory.
pub struct ComponentRegistry {
    factories: HashMap<String, Factory>,
}

impl ComponentRegistry {
    /// An empty registry. Most callers want [`ComponentRegistry::default`],
    /// which knows the built-in kinds.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register(&mut self, kind: impl Into<String>, factory: Factory) {
        self.factories.insert(kind.into(), factory);
    }

    pub fn resolve(&self, kind: &str) -> Option<Factory> {
        self.factories.get(kind).copied()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Compliance::KIND, compliance_factory);
        registry
    }
}

fn compliance_factory(
    spec: &ComponentSpec,
) -> Result<(Box<dyn Component>, Vec<String>), ComponentError> {
    let (compliance, unknown) = Compliance::from_params(spec.name.clone(), &spec.params)?;
    Ok((Box::new(compliance), unknown))
}

/// Assemble the component map for a validated definition.
///
/// A kind that does not resolve yields one [`BuildWarning::UnknownKind`] per
/// distinct kind; its components are skipped. A failing factory yields a
/// [`BuildWarning::BuildFailed`] for that component. Construction of the
/// remaining components always continues, and a component that failed simply
/// does not appear in the returned map.
pub fn build_components(
    definition: &ModelDefinition,
    registry: &ComponentRegistry,
) -> (ComponentMap, Vec<BuildWarning>) {
    let mut warnings = Vec::new();

    for kind in definition.distinct_kinds() {
        if registry.resolve(kind).is_none() {
            warnings.push(BuildWarning::UnknownKind {
                kind: kind.to_string(),
            });
        }
    }

    let mut components = ComponentMap::new();
    for spec in &definition.components {
        let Some(factory) = registry.resolve(&spec.kind) else {
            continue; // already warned once for this kind
        };

        match factory(spec) {
            Ok((component, unknown_keys)) => {
                for key in unknown_keys {
                    warnings.push(BuildWarning::UnknownParam {
                        component: spec.name.clone(),
                        key,
                    });
                }
                if let Err(name) = components.insert(component) {
                    warnings.push(BuildWarning::BuildFailed {
                        name,
                        reason: "duplicate component name".to_string(),
                    });
                }
            }
            Err(err) => {
                warnings.push(BuildWarning::BuildFailed {
                    name: spec.name.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    for warning in &warnings {
        tracing::warn!(%warning, "model build warning");
    }

    (components, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::{ParamValue, Params};

    fn compliance_params() -> Params {
        let mut params = Params::new();
        params.insert("vol_l", ParamValue::Number(0.16));
        params.insert("u_vol_l", ParamValue::Number(0.08));
        params.insert("el_base_mmhg_per_l", ParamValue::Number(120.0));
        params
    }

    fn spec(kind: &str, name: &str, params: Params) -> ComponentSpec {
        ComponentSpec {
            kind: kind.to_string(),
            name: name.to_string(),
            params,
        }
    }

    fn definition(components: Vec<ComponentSpec>) -> ModelDefinition {
        ModelDefinition {
            name: "test".to_string(),
            description: String::new(),
            weight_kg: 3.3,
            stepsize_s: 0.0005,
            components,
        }
    }

    #[test]
    fn default_registry_resolves_compliance() {
        let registry = ComponentRegistry::default();
        assert!(registry.resolve("Compliance").is_some());
        assert!(registry.resolve("BloodPump").is_none());
    }

    #[test]
    fn builds_all_resolvable_components() {
        let def = definition(vec![
            spec("Compliance", "LV", compliance_params()),
            spec("Compliance", "AO", compliance_params()),
        ]);
        let (map, warnings) = build_components(&def, &ComponentRegistry::default());
        assert_eq!(map.len(), 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn unknown_kind_warns_once_per_kind() {
        let def = definition(vec![
            spec("Ventilator", "vent", Params::new()),
            spec("Ventilator", "vent2", Params::new()),
            spec("Compliance", "LV", compliance_params()),
        ]);
        let (map, warnings) = build_components(&def, &ComponentRegistry::default());
        assert_eq!(map.len(), 1);
        assert!(map.contains("LV"));
        assert_eq!(
            warnings,
            vec![BuildWarning::UnknownKind {
                kind: "Ventilator".to_string()
            }]
        );
    }

    #[test]
    fn factory_failure_skips_only_that_component() {
        let def = definition(vec![
            spec("Compliance", "broken", Params::new()), // missing required params
            spec("Compliance", "LV", compliance_params()),
        ]);
        let (map, warnings) = build_components(&def, &ComponentRegistry::default());
        assert_eq!(map.len(), 1);
        assert!(map.contains("LV"));
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            &warnings[0],
            BuildWarning::BuildFailed { name, .. } if name == "broken"
        ));
    }

    #[test]
    fn unknown_parameters_become_warnings() {
        let mut params = compliance_params();
        params.insert("el_min", ParamValue::Number(1.0));
        let def = definition(vec![spec("Compliance", "LV", params)]);

        let (map, warnings) = build_components(&def, &ComponentRegistry::default());
        assert_eq!(map.len(), 1);
        assert_eq!(
            warnings,
            vec![BuildWarning::UnknownParam {
                component: "LV".to_string(),
                key: "el_min".to_string()
            }]
        );
    }
}
