//! Definition validation logic.
//!
//! Violations found here are fatal build errors: without a positive step
//! size and a well-formed component list the engine cannot be constructed.
//! Unresolvable kinds and bad component parameters are deliberately *not*
//! checked here; those are recoverable and reported as build warnings by
//! the loader.

use crate::schema::ModelDefinition;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate component name: {name}")]
    DuplicateName { name: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing value: {field}")]
    MissingValue { field: String },
}

pub fn validate_definition(def: &ModelDefinition) -> Result<(), ValidationError> {
    if def.name.trim().is_empty() {
        return Err(ValidationError::MissingValue {
            field: "name".to_string(),
        });
    }

    validate_positive_finite("stepsize_s", def.stepsize_s)?;
    validate_positive_finite("weight_kg", def.weight_kg)?;

    let mut names = HashSet::new();
    for spec in &def.components {
        if spec.name.trim().is_empty() {
            return Err(ValidationError::MissingValue {
                field: "component name".to_string(),
            });
        }
        if spec.kind.trim().is_empty() {
            return Err(ValidationError::MissingValue {
                field: format!("component '{}' kind", spec.name),
            });
        }
        if !names.insert(&spec.name) {
            return Err(ValidationError::DuplicateName {
                name: spec.name.clone(),
            });
        }
    }

    Ok(())
}

fn validate_positive_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ComponentSpec;
    use hf_core::Params;

    fn minimal() -> ModelDefinition {
        ModelDefinition {
            name: "normal neonate".to_string(),
            description: String::new(),
            weight_kg: 3.3,
            stepsize_s: 0.0005,
            components: vec![ComponentSpec {
                kind: "Compliance".to_string(),
                name: "LV".to_string(),
                params: Params::new(),
            }],
        }
    }

    #[test]
    fn minimal_definition_is_valid() {
        assert!(validate_definition(&minimal()).is_ok());
    }

    #[test]
    fn empty_component_list_is_valid() {
        let mut def = minimal();
        def.components.clear();
        assert!(validate_definition(&def).is_ok());
    }

    #[test]
    fn non_positive_stepsize_is_fatal() {
        for bad in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let mut def = minimal();
            def.stepsize_s = bad;
            assert!(validate_definition(&def).is_err(), "stepsize {bad}");
        }
    }

    #[test]
    fn duplicate_component_names_are_fatal() {
        let mut def = minimal();
        def.components.push(def.components[0].clone());
        let err = validate_definition(&def).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateName { .. }));
    }

    #[test]
    fn blank_kind_is_fatal() {
        let mut def = minimal();
        def.components[0].kind = "  ".to_string();
        let err = validate_definition(&def).unwrap_err();
        assert!(matches!(err, ValidationError::MissingValue { .. }));
    }
}
