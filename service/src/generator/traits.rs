//! Generator error type and the rendering seam used by the service

use rust_xlsxwriter::XlsxError;
use thiserror::Error;
use workbook_core::{TemplateDefinition, TemplateError};

/// Result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while producing a workbook
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Resolution or lookup error from the template layer
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Definition cannot be rendered as given
    #[error("Template validation failed: {0}")]
    Validation(String),

    /// Spreadsheet library operation failed
    #[error("Workbook generation failed: {0}")]
    Generation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<XlsxError> for GeneratorError {
    fn from(err: XlsxError) -> Self {
        GeneratorError::Generation(err.to_string())
    }
}

impl GeneratorError {
    /// Whether the failure was caused by the caller rather than the service
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Template(err) => err.is_client_error(),
            Self::Validation(_) => true,
            Self::Generation(_) | Self::Io(_) => false,
        }
    }
}

/// Renders a resolved template definition into file bytes
pub trait TemplateGenerator: Send + Sync {
    /// Short generator name used in logs
    fn name(&self) -> &'static str;

    /// File extension of the produced document, without the dot
    fn file_extension(&self) -> &'static str;

    /// Check that the definition can be rendered
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Validation` describing the first problem found.
    fn validate_definition(&self, _definition: &TemplateDefinition) -> GeneratorResult<()> {
        Ok(())
    }

    /// Render the definition
    ///
    /// # Errors
    ///
    /// Returns a validation error for unusable definitions or a generation
    /// error if rendering fails.
    fn generate(&self, definition: &TemplateDefinition) -> GeneratorResult<Vec<u8>>;
}
