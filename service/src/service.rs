//! Template generation service

use std::sync::Arc;

use tracing::{info, instrument};
use workbook_core::TemplateDefinition;

use crate::config::TemplateRegistry;
use crate::generator::{ExcelTemplateGenerator, GeneratorResult, TemplateGenerator};

/// Generates workbook templates by instrument type
///
/// The service reads resolved definitions from a shared [`TemplateRegistry`]
/// and renders them with a [`TemplateGenerator`]. Every call renders into its
/// own workbook, so one service can be shared across threads.
#[derive(Clone)]
pub struct TemplateService {
    registry: Arc<TemplateRegistry>,
    generator: Arc<dyn TemplateGenerator>,
}

impl std::fmt::Debug for TemplateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateService")
            .field("registry", &self.registry)
            .field("generator", &self.generator.name())
            .finish()
    }
}

impl TemplateService {
    /// Create a service rendering Excel workbooks with the registry's render settings
    ///
    /// Render settings are read once here; later registry mutations change
    /// which templates resolve but not how they are rendered.
    #[must_use]
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        let generator = ExcelTemplateGenerator::from_settings(&registry.render_settings());
        Self::with_generator(registry, Arc::new(generator))
    }

    /// Create a service with a custom generator
    #[must_use]
    pub fn with_generator(
        registry: Arc<TemplateRegistry>,
        generator: Arc<dyn TemplateGenerator>,
    ) -> Self {
        Self {
            registry,
            generator,
        }
    }

    /// The registry the service reads definitions from
    #[must_use]
    pub fn registry(&self) -> &Arc<TemplateRegistry> {
        &self.registry
    }

    /// Generate the workbook template for an instrument type
    ///
    /// Blank and unknown instrument types fail before any workbook is
    /// allocated.
    ///
    /// # Errors
    ///
    /// - `TemplateError::InvalidArgument` if the instrument type is blank
    /// - `TemplateError::UnknownInstrumentType` if it is not configured
    /// - any resolution, validation or generation error
    #[instrument(skip(self), fields(generator = self.generator.name()))]
    pub fn generate_template(&self, instrument_type: &str) -> GeneratorResult<Vec<u8>> {
        let definition = self.registry.definition(instrument_type)?;
        let bytes = self.generate_definition(&definition)?;
        info!(
            instrument_type,
            sheets = definition.len(),
            bytes = bytes.len(),
            "generated template"
        );
        Ok(bytes)
    }

    /// Generate a workbook from an already resolved definition
    ///
    /// # Errors
    ///
    /// Returns a validation error for unusable definitions or a generation
    /// error if rendering fails.
    pub fn generate_definition(&self, definition: &TemplateDefinition) -> GeneratorResult<Vec<u8>> {
        self.generator.validate_definition(definition)?;
        self.generator.generate(definition)
    }

    /// File name offered for a generated template
    #[must_use]
    pub fn download_filename(&self, instrument_type: &str) -> String {
        download_filename(instrument_type, self.generator.file_extension())
    }
}

/// `<instrument type in lower case>_template.<extension>`
#[must_use]
pub fn download_filename(instrument_type: &str, extension: &str) -> String {
    format!(
        "{}_template.{extension}",
        instrument_type.trim().to_lowercase()
    )
}
