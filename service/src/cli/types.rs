//! CLI type definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Workbook template command-line interface
#[derive(Parser, Debug)]
#[command(
    name = "workbook-template",
    version,
    about = "Generate spreadsheet upload templates"
)]
pub struct TemplateCli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: TemplateCommand,
}

/// Workbook template subcommands
#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// Generate the workbook template for an instrument type
    Generate {
        /// Instrument type, e.g. MORTGAGE
        #[arg(short, long)]
        instrument_type: String,
        /// Template configuration file; built-in templates when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output file; `<type>_template.xlsx` when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Add a row under the header describing each column
        #[arg(long)]
        info_row: bool,
    },

    /// List instrument types with their resolved sheet order
    List {
        /// Template configuration file; built-in templates when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Resolve a configuration file and report errors
    Check {
        /// Template configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
}
