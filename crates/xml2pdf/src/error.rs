use thiserror::Error;

/// Errors that can occur during document conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Parse(String),

    #[error("renderer configuration error: {0}")]
    Config(String),

    #[error("transform error: {0}")]
    Compile(String),

    #[error("render error: {0}")]
    Render(String),
}

/// A non-fatal warning emitted while converting a document.
#[derive(Debug, Clone)]
pub struct ConvertWarning {
    /// Pipeline stage that produced the warning.
    pub stage: String,
    /// Description of the issue.
    pub reason: String,
}

impl ConvertWarning {
    pub(crate) fn new(stage: &str, reason: impl Into<String>) -> Self {
        Self {
            stage: stage.to_string(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ConvertWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.stage, self.reason)
    }
}

/// Result of a successful conversion, containing PDF bytes and any warnings.
#[derive(Debug)]
pub struct ConvertResult {
    /// The generated PDF bytes.
    pub pdf: Vec<u8>,
    /// Warnings collected during conversion (non-fatal issues).
    pub warnings: Vec<ConvertWarning>,
}
