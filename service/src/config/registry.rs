//! Configuration holder with a cached, explicitly invalidated resolution

use crate::inheritance::{ResolvedTemplates, resolve_config};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use workbook_core::prelude::*;
use workbook_core::utils::has_text;

#[derive(Debug)]
struct RegistryState {
    config: TemplateConfig,
    resolved: Option<Arc<ResolvedTemplates>>,
}

/// Owns the raw template configuration and caches its resolution
///
/// Resolution runs lazily on first use and is reused until the configuration
/// is mutated through one of the `upsert`/`remove`/`replace` methods.
#[derive(Debug)]
pub struct TemplateRegistry {
    state: RwLock<RegistryState>,
}

impl TemplateRegistry {
    /// Create a registry over a configuration
    #[must_use]
    pub fn new(config: TemplateConfig) -> Self {
        Self {
            state: RwLock::new(RegistryState {
                config,
                resolved: None,
            }),
        }
    }

    /// Create a registry over the built-in templates
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(super::default_config())
    }

    /// Load a registry from a YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Configuration` if the file cannot be loaded.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(super::load_config(path)?))
    }

    /// Resolve eagerly so configuration errors surface at startup
    ///
    /// # Errors
    ///
    /// Returns any resolution error.
    pub fn initialize(&self) -> Result<()> {
        self.resolved().map(|_| ())
    }

    /// Resolved templates, resolving and caching them if needed
    ///
    /// # Errors
    ///
    /// Returns any resolution error; nothing is cached on failure.
    pub fn resolved(&self) -> Result<Arc<ResolvedTemplates>> {
        if let Some(resolved) = &self.state.read().resolved {
            return Ok(Arc::clone(resolved));
        }

        let mut state = self.state.write();
        if let Some(resolved) = &state.resolved {
            return Ok(Arc::clone(resolved));
        }
        let resolved = Arc::new(resolve_config(&state.config)?);
        state.resolved = Some(Arc::clone(&resolved));
        Ok(resolved)
    }

    /// Resolved definition for an instrument type
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the instrument type is blank
    /// - `UnknownInstrumentType` if no template is registered under the name
    /// - any resolution error
    pub fn definition(&self, instrument_type: &str) -> Result<Arc<TemplateDefinition>> {
        if !has_text(instrument_type) {
            return Err(TemplateError::invalid_argument(
                "instrumentType must be provided",
            ));
        }
        self.resolved()?
            .definition(instrument_type)
            .cloned()
            .ok_or_else(|| TemplateError::UnknownInstrumentType(instrument_type.to_string()))
    }

    /// Snapshot of the raw configuration
    #[must_use]
    pub fn config(&self) -> TemplateConfig {
        self.state.read().config.clone()
    }

    /// Current render settings
    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        self.state.read().config.render.clone()
    }

    /// Replace the whole configuration
    pub fn replace(&self, config: TemplateConfig) {
        let mut state = self.state.write();
        state.config = config;
        Self::invalidate(&mut state);
    }

    /// Add a sheet, or replace the sheet with the same name
    pub fn upsert_sheet(&self, sheet: TemplateSheet) {
        let mut state = self.state.write();
        let sheets = &mut state.config.template_sheets;
        match sheets.iter_mut().find(|existing| existing.name == sheet.name) {
            Some(existing) => *existing = sheet,
            None => sheets.push(sheet),
        }
        Self::invalidate(&mut state);
    }

    /// Add an instrument template, or replace the one with the same name
    pub fn upsert_template(&self, instrument_type: impl Into<String>, settings: TemplateSettings) {
        let mut state = self.state.write();
        state
            .config
            .instrument_templates
            .insert(instrument_type.into(), settings);
        Self::invalidate(&mut state);
    }

    /// Remove an instrument template, returning whether it existed
    pub fn remove_template(&self, instrument_type: &str) -> bool {
        let mut state = self.state.write();
        let removed = state
            .config
            .instrument_templates
            .shift_remove(instrument_type)
            .is_some();
        if removed {
            Self::invalidate(&mut state);
        }
        removed
    }

    /// Drop the cached resolution so the next read resolves again
    pub fn reset(&self) {
        Self::invalidate(&mut self.state.write());
    }

    fn invalidate(state: &mut RegistryState) {
        if state.resolved.take().is_some() {
            debug!("invalidated cached template resolution");
        }
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
