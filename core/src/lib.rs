//! # Workbook Template Core
//!
//! Data model, configuration shapes and error types for declarative
//! spreadsheet templates.
//!
//! A template configuration declares named *sheets* made of typed *columns*,
//! and named *instrument templates* that select and order sheets for one
//! business entity type. Both may inherit from other declarations; the
//! service crate resolves that inheritance and renders workbooks.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types for template operations
pub mod error;

/// Column and sheet definitions
pub mod types;

/// Instrument template settings and resolved definitions
pub mod settings;

/// Configuration shapes supplied by the configuration layer
pub mod config;

/// Name and value normalisation helpers
pub mod utils;

pub use config::{RenderSettings, RequiredHighlight, TemplateConfig};
pub use error::{ReferenceKind, Result, TemplateError};
pub use settings::{TemplateDefinition, TemplateSettings};
pub use types::{Column, ColumnType, ResolvedSheet, TemplateSheet};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::{ReferenceKind, Result, TemplateError};
    pub use crate::settings::*;
    pub use crate::types::*;
}
