use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("not initialized: run 'amodel init'")]
    NotInitialized,

    #[error("action '{id}' has invalid path '{path}': expected a site and at least one more segment")]
    InvalidActionPath { id: String, path: String },

    #[error("invalid model id part '{0}': must be non-empty and must not contain ':' or whitespace")]
    InvalidModelPart(String),

    #[error("action declared more than once: {0}")]
    DuplicateAction(String),

    #[error("invalid action model XML: {0}")]
    Xml(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<roxmltree::Error> for ModelError {
    fn from(e: roxmltree::Error) -> Self {
        ModelError::Xml(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
