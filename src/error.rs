use thiserror::Error;

/// Errors raised while resolving or rendering a transcript export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The input value does not have the shape the renderer needs.
    #[error("unexpected transcript shape: {0}")]
    InputType(String),

    /// Structural serialization of the export failed.
    #[error("failed serializing export: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
