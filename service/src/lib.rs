//! # Workbook Template Service
//!
//! Resolves declarative spreadsheet templates and renders them as Excel
//! workbooks.
//!
//! ## Overview
//!
//! - [`inheritance`] flattens sheet and instrument-template inheritance into
//!   ordered, cycle-free definitions.
//! - [`config`] loads template configuration from YAML and caches its
//!   resolution in a [`TemplateRegistry`].
//! - [`generator`] renders a resolved definition into an xlsx workbook with
//!   column formats, data validation, header notes, required-cell
//!   highlighting, filters and frozen headers.
//! - [`service`] ties lookup and rendering together behind
//!   [`TemplateService`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use workbook_service::{TemplateRegistry, TemplateService};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(TemplateRegistry::with_defaults());
//! registry.initialize()?;
//!
//! let service = TemplateService::new(registry);
//! let bytes = service.generate_template("MORTGAGE")?;
//! assert!(!bytes.is_empty());
//! assert_eq!(service.download_filename("MORTGAGE"), "mortgage_template.xlsx");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Template inheritance resolution
pub mod inheritance;

/// Configuration loading and the template registry
pub mod config;

/// Workbook generators
pub mod generator;

/// Template generation service
pub mod service;

/// Command-line interface
pub mod cli;

pub use config::{TemplateRegistry, default_config, load_config};
pub use generator::{
    ExcelFeatures, ExcelTemplateGenerator, GeneratorError, GeneratorResult, TemplateGenerator,
};
pub use inheritance::{ResolvedTemplates, resolve, resolve_config};
pub use service::TemplateService;
pub use workbook_core::{
    Column, ColumnType, ReferenceKind, RenderSettings, RequiredHighlight, ResolvedSheet,
    TemplateConfig, TemplateDefinition, TemplateError, TemplateSettings, TemplateSheet,
};
