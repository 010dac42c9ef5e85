//! Configuration shapes for template sheets, instrument templates and rendering

use crate::error::{Result, TemplateError};
use crate::settings::TemplateSettings;
use crate::types::TemplateSheet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Last zero-based row index of an xlsx worksheet
pub const MAX_SHEET_ROW: u32 = 1_048_575;

/// Default number of data rows covered by validations and highlighting
pub const DEFAULT_DATA_ROWS: u32 = 10_000;

/// Default multiplier applied to estimated column widths
pub const DEFAULT_COLUMN_PADDING: f64 = 1.25;

/// Complete template configuration as supplied by the configuration layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TemplateConfig {
    /// Raw sheet declarations
    pub template_sheets: Vec<TemplateSheet>,

    /// Raw instrument templates keyed by instrument type, in declaration order
    pub instrument_templates: IndexMap<String, TemplateSettings>,

    /// Workbook rendering settings
    pub render: RenderSettings,
}

impl TemplateConfig {
    /// Create a configuration from sheets and templates with default rendering
    #[must_use]
    pub fn new(
        template_sheets: Vec<TemplateSheet>,
        instrument_templates: IndexMap<String, TemplateSettings>,
    ) -> Self {
        Self {
            template_sheets,
            instrument_templates,
            render: RenderSettings::default(),
        }
    }
}

/// How blank required cells are flagged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequiredHighlight {
    /// No conditional formatting for required columns
    Off,
    /// Flag cells whose text length is zero
    Blank,
    /// Flag cells whose trimmed text length is zero
    #[default]
    BlankOrWhitespace,
}

/// Workbook rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderSettings {
    /// Number of data rows below the header covered by validations
    pub data_rows: u32,

    /// Write an info row under the header describing each column
    pub info_row: bool,

    /// Protect worksheets so only data cells are editable
    pub protect_sheets: bool,

    /// Optional password for worksheet protection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_password: Option<String>,

    /// Conditional formatting rule for required columns
    pub required_highlight: RequiredHighlight,

    /// Multiplier applied to estimated column widths
    pub column_padding: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            data_rows: DEFAULT_DATA_ROWS,
            info_row: false,
            protect_sheets: true,
            protection_password: None,
            required_highlight: RequiredHighlight::default(),
            column_padding: DEFAULT_COLUMN_PADDING,
        }
    }
}

impl RenderSettings {
    /// Number of rows above the data band
    #[must_use]
    pub fn header_rows(&self) -> u32 {
        if self.info_row { 2 } else { 1 }
    }

    /// Check the settings describe a renderable layout
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Configuration` if the data band is empty or
    /// runs past the last worksheet row, or the padding is not a finite
    /// multiplier of at least one.
    pub fn validate(&self) -> Result<()> {
        if self.data_rows == 0 {
            return Err(TemplateError::config("render.data-rows must be at least 1"));
        }
        let last_row = u64::from(self.header_rows()) + u64::from(self.data_rows) - 1;
        if last_row > u64::from(MAX_SHEET_ROW) {
            return Err(TemplateError::config(format!(
                "render.data-rows {} exceeds the worksheet row limit",
                self.data_rows
            )));
        }
        if !self.column_padding.is_finite() || self.column_padding < 1.0 {
            return Err(TemplateError::config(format!(
                "render.column-padding must be a finite value >= 1.0, got {}",
                self.column_padding
            )));
        }
        Ok(())
    }
}
