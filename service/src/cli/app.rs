//! Workbook template CLI application

use super::types::{TemplateCli, TemplateCommand};
use crate::config::TemplateRegistry;
use crate::generator::{ExcelTemplateGenerator, TemplateGenerator};
use crate::service::TemplateService;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Workbook template CLI application
#[derive(Debug)]
pub struct TemplateApp {
    cli: TemplateCli,
}

impl TemplateApp {
    /// Create the application from process arguments
    #[must_use]
    pub fn from_args() -> Self {
        Self::new(TemplateCli::parse())
    }

    /// Create the application from parsed arguments
    #[must_use]
    pub fn new(cli: TemplateCli) -> Self {
        Self { cli }
    }

    /// Install logging and run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> anyhow::Result<()> {
        self.init_logging();
        let result = self.execute(&mut std::io::stdout().lock());
        if let Err(err) = &result {
            error!("Command failed: {err:#}");
        }
        result
    }

    /// Configure tracing subscriber based on CLI flags, or `RUST_LOG` when set
    fn init_logging(&self) {
        let builder = tracing_subscriber::fmt()
            .with_target(false)
            .with_writer(std::io::stderr);

        if std::env::var_os("RUST_LOG").is_some() {
            builder.with_env_filter(EnvFilter::from_default_env()).init();
        } else if self.cli.quiet {
            builder.with_max_level(tracing::Level::ERROR).init();
        } else if self.cli.verbose {
            builder.with_max_level(tracing::Level::DEBUG).init();
        } else {
            builder.with_max_level(tracing::Level::INFO).init();
        }
    }

    /// Run the selected command, writing listings to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or resolved,
    /// or generation or writing fails.
    pub fn execute(&self, out: &mut impl Write) -> anyhow::Result<()> {
        match &self.cli.command {
            TemplateCommand::Generate {
                instrument_type,
                config,
                output,
                info_row,
            } => generate(instrument_type, config.as_deref(), output.clone(), *info_row),
            TemplateCommand::List { config } => list(config.as_deref(), out),
            TemplateCommand::Check { config } => check(config, out),
        }
    }
}

fn registry(config: Option<&Path>) -> anyhow::Result<TemplateRegistry> {
    match config {
        Some(path) => TemplateRegistry::from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(TemplateRegistry::with_defaults()),
    }
}

fn generate(
    instrument_type: &str,
    config: Option<&Path>,
    output: Option<PathBuf>,
    info_row: bool,
) -> anyhow::Result<()> {
    let registry = registry(config)?;
    if info_row {
        let mut updated = registry.config();
        updated.render.info_row = true;
        registry.replace(updated);
    }

    let service = TemplateService::new(Arc::new(registry));
    let bytes = service.generate_template(instrument_type)?;
    let path = output.unwrap_or_else(|| PathBuf::from(service.download_filename(instrument_type)));
    std::fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote template");
    Ok(())
}

fn list(config: Option<&Path>, out: &mut impl Write) -> anyhow::Result<()> {
    let resolved = registry(config)?.resolved()?;
    for (instrument_type, definition) in resolved.instrument_templates() {
        let sheets: Vec<&str> = definition.sheet_names().collect();
        writeln!(out, "{instrument_type}: {}", sheets.join(", "))?;
    }
    Ok(())
}

fn check(config: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let registry = registry(Some(config))?;
    let resolved = registry.resolved()?;
    let generator = ExcelTemplateGenerator::from_settings(&registry.render_settings());
    for (instrument_type, definition) in resolved.instrument_templates() {
        generator
            .validate_definition(definition)
            .with_context(|| format!("instrument template {instrument_type}"))?;
    }
    writeln!(
        out,
        "{}: {} sheets, {} instrument templates",
        config.display(),
        resolved.sheet_index().len(),
        resolved.instrument_templates().len()
    )?;
    Ok(())
}
