//! Command-line interface for generating workbook templates

mod app;
mod types;

pub use app::TemplateApp;
pub use types::{TemplateCli, TemplateCommand};
