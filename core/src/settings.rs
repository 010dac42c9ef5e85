//! Instrument template settings and resolved template definitions

use crate::types::ResolvedSheet;
use crate::utils::{deserialize_names, non_blank_names};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Sheet selection for one instrument type, before inheritance is applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateSettings {
    /// Sheet names in workbook order
    #[serde(default, deserialize_with = "deserialize_names")]
    pub sheets: Vec<String>,

    /// Templates whose sheet lists are inherited, in merge order
    #[serde(default, deserialize_with = "deserialize_names")]
    pub base_templates: Vec<String>,
}

impl TemplateSettings {
    /// Create settings selecting the given sheets
    #[must_use]
    pub fn new<I, S>(sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sheets: non_blank_names(sheets),
            base_templates: Vec::new(),
        }
    }

    /// Set the inherited templates, dropping blank names
    #[must_use]
    pub fn with_base_templates<I, S>(mut self, base_templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_templates = non_blank_names(base_templates);
        self
    }

    /// Replace the selected sheets, dropping blank names
    pub fn set_sheets<I, S>(&mut self, sheets: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sheets = non_blank_names(sheets);
    }
}

/// Fully resolved instrument template: the ordered sheets of one workbook
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDefinition {
    sheets: Vec<Arc<ResolvedSheet>>,
}

impl TemplateDefinition {
    /// Create a definition from shared resolved sheets
    #[must_use]
    pub fn new(sheets: Vec<Arc<ResolvedSheet>>) -> Self {
        Self { sheets }
    }

    /// Create a definition that owns its sheets
    #[must_use]
    pub fn from_sheets(sheets: impl IntoIterator<Item = ResolvedSheet>) -> Self {
        Self {
            sheets: sheets.into_iter().map(Arc::new).collect(),
        }
    }

    /// Sheets in workbook order
    #[must_use]
    pub fn sheets(&self) -> &[Arc<ResolvedSheet>] {
        &self.sheets
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str())
    }

    /// Number of sheets
    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether the definition selects no sheets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
