//! Template configuration loading
//!
//! This module loads template configuration from YAML files with
//! environment variable substitution, and holds the loaded configuration
//! together with its cached resolution.

pub mod defaults;
pub mod registry;

pub use defaults::default_config;
pub use registry::TemplateRegistry;

use std::env;
use std::path::Path;
use workbook_core::{Result, TemplateConfig, TemplateError};

/// Load a template configuration from a `YAML` file
///
/// # Errors
///
/// Returns `TemplateError::Configuration` if the file cannot be read, the
/// YAML cannot be parsed, or the render settings are unusable.
pub fn load_config(path: &Path) -> Result<TemplateConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        TemplateError::config(format!("Failed to read {}: {e}", path.display()))
    })?;
    parse_config(&contents)
}

/// Parse a template configuration from `YAML` text
///
/// # Errors
///
/// Returns `TemplateError::Configuration` if the YAML cannot be parsed or the
/// render settings are unusable.
pub fn parse_config(contents: &str) -> Result<TemplateConfig> {
    let substituted = substitute_env_vars(contents);
    let config: TemplateConfig = serde_yaml::from_str(&substituted)
        .map_err(|e| TemplateError::config(format!("Failed to parse YAML config: {e}")))?;
    config.render.validate()?;
    Ok(config)
}

/// Substitute environment variables in the format `${VAR}` or `${VAR:-default}`
fn substitute_env_vars(content: &str) -> String {
    let re = match regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}") {
        Ok(regex) => regex,
        Err(_) => return content.to_string(),
    };

    re.replace_all(content, |caps: &regex::Captures| {
        let default_value = caps.get(2).map_or("", |m| m.as_str());
        env::var(&caps[1]).unwrap_or_else(|_| default_value.to_string())
    })
    .to_string()
}
