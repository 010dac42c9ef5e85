//! Column and sheet definitions for spreadsheet templates

use crate::utils::{deserialize_names, deserialize_value_set, has_text, non_blank_names, non_blank_set};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Allowed values of a `BOOLEAN` column that declares none of its own
pub const BOOLEAN_VALUES: [&str; 2] = ["YES", "NO"];

/// Data type of a template column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    /// Free text
    #[default]
    #[serde(alias = "text")]
    Text,
    /// Decimal number
    #[serde(alias = "number")]
    Number,
    /// Calendar date
    #[serde(alias = "date")]
    Date,
    /// One of an explicit list of values
    #[serde(alias = "list")]
    List,
    /// Yes/no flag, rendered as a list
    #[serde(alias = "boolean")]
    Boolean,
}

impl ColumnType {
    /// All column types in declaration order
    pub const ALL: [ColumnType; 5] = [
        Self::Text,
        Self::Number,
        Self::Date,
        Self::List,
        Self::Boolean,
    ];

    /// Cell format pattern used when a column has no explicit format
    #[must_use]
    pub fn default_format(self) -> &'static str {
        match self {
            Self::Text | Self::List | Self::Boolean => "@",
            Self::Number => "#,##0.00############",
            Self::Date => "dd/mm/yyyy",
        }
    }

    /// Upper-case label shown to spreadsheet users
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Number => "NUMBER",
            Self::Date => "DATE",
            Self::List => "LIST",
            Self::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed column of a template sheet
///
/// Columns are keyed by [`Column::header`] within a resolved sheet: a later
/// column with the same header replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Column {
    /// Header label written to the header row
    pub header: String,

    /// Whether a value must be supplied for every data row
    #[serde(default)]
    pub required: bool,

    /// Free-text description of the column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Explicit cell format pattern, overriding the type default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Help text shown for the column, overriding the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Declared type; `TEXT` when unset
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,

    #[serde(
        default,
        deserialize_with = "deserialize_value_set",
        skip_serializing_if = "IndexSet::is_empty"
    )]
    allowed_values: IndexSet<String>,
}

impl Column {
    /// Create an optional `TEXT` column
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    /// Set whether the column is required
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the column description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set an explicit cell format pattern
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the help text shown for the column
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the column type
    #[must_use]
    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    /// Set the allowed values, dropping blanks and repeats
    #[must_use]
    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_allowed_values(values);
        self
    }

    /// Replace the allowed values, dropping blanks and repeats
    pub fn set_allowed_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = non_blank_set(values);
    }

    /// Allowed values exactly as declared
    #[must_use]
    pub fn allowed_values(&self) -> &IndexSet<String> {
        &self.allowed_values
    }

    /// Declared type, falling back to `TEXT`
    #[must_use]
    pub fn resolved_type(&self) -> ColumnType {
        self.column_type.unwrap_or_default()
    }

    /// Explicit format when it carries text, otherwise the type default
    #[must_use]
    pub fn resolved_format(&self) -> &str {
        self.format
            .as_deref()
            .map(str::trim)
            .filter(|format| !format.is_empty())
            .unwrap_or_else(|| self.resolved_type().default_format())
    }

    /// Values offered to the user; `BOOLEAN` columns default to `YES`/`NO`
    #[must_use]
    pub fn resolved_allowed_values(&self) -> Vec<&str> {
        if self.allowed_values.is_empty() && self.resolved_type() == ColumnType::Boolean {
            return BOOLEAN_VALUES.to_vec();
        }
        self.allowed_values.iter().map(String::as_str).collect()
    }

    /// Help text: the tooltip, else the description, else empty
    #[must_use]
    pub fn tooltip_text(&self) -> &str {
        [self.tooltip.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| has_text(text))
            .unwrap_or("")
    }

    /// Label of the resolved type
    #[must_use]
    pub fn type_label(&self) -> &'static str {
        self.resolved_type().label()
    }
}

/// A sheet as declared in configuration, before inheritance is applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateSheet {
    /// Sheet name, also used as the worksheet name
    #[serde(default)]
    pub name: String,

    /// Sheets whose columns are inherited, in merge order
    #[serde(default, deserialize_with = "deserialize_names")]
    pub base_sheets: Vec<String>,

    /// Columns declared by this sheet
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl TemplateSheet {
    /// Create an empty sheet
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the inherited sheets, dropping blank names
    #[must_use]
    pub fn with_base_sheets<I, S>(mut self, base_sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_sheets = non_blank_names(base_sheets);
        self
    }

    /// Replace the declared columns
    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    /// Append a declared column
    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }
}

/// A sheet with all inherited columns merged in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSheet {
    /// Sheet name
    pub name: String,
    /// Columns in final order, unique by header
    pub columns: Vec<Column>,
}

impl ResolvedSheet {
    /// Headers in column order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.header.as_str())
    }

    /// Look up a column by header
    #[must_use]
    pub fn column(&self, header: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.header == header)
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the sheet has no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
