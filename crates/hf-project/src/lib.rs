//! hf-project: canonical model definition format and validation.

pub mod schema;
pub mod validate;

pub use schema::{ComponentSpec, ModelDefinition};
pub use validate::{ValidationError, validate_definition};

pub type DefinitionResult<T> = Result<T, DefinitionError>;

#[derive(thiserror::Error, Debug)]
pub enum DefinitionError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_json(path: &std::path::Path) -> DefinitionResult<ModelDefinition> {
    let content = std::fs::read_to_string(path)?;
    let definition: ModelDefinition = serde_json::from_str(&content)?;
    validate_definition(&definition)?;
    Ok(definition)
}

pub fn save_json(path: &std::path::Path, definition: &ModelDefinition) -> DefinitionResult<()> {
    validate_definition(definition)?;
    let content = serde_json::to_string_pretty(definition)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_yaml(path: &std::path::Path) -> DefinitionResult<ModelDefinition> {
    let content = std::fs::read_to_string(path)?;
    let definition: ModelDefinition = serde_yaml::from_str(&content)?;
    validate_definition(&definition)?;
    Ok(definition)
}

pub fn save_yaml(path: &std::path::Path, definition: &ModelDefinition) -> DefinitionResult<()> {
    validate_definition(definition)?;
    let content = serde_yaml::to_string(definition)?;
    std::fs::write(path, content)?;
    Ok(())
}
