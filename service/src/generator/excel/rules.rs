//! Per-column rendering rules, kept free of worksheet state.

use super::super::traits::GeneratorResult;
use super::cast::{column_letter, text_width};
use rust_xlsxwriter::{DataValidation, DataValidationRule, ExcelDateTime};
use workbook_core::utils::has_text;
use workbook_core::{Column, ColumnType, RequiredHighlight};

/// Widest column Excel accepts, in character units.
pub(super) const MAX_COLUMN_WIDTH: f64 = 255.0;

/// Longest info text counted towards a column's width.
const INFO_WIDTH_CAP: u16 = 50;

/// Lower bound of the decimal validation range.
pub(super) const DECIMAL_MIN: f64 = -1e307;

/// Upper bound of the decimal validation range.
pub(super) const DECIMAL_MAX: f64 = 1e307;

/// Rows used by one worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct SheetLayout {
    /// Row carrying the column headers.
    pub(super) header_row: u32,
    /// Optional row describing each column.
    pub(super) info_row: Option<u32>,
    /// First row of the data band.
    pub(super) first_data_row: u32,
    /// Last row of the data band, inclusive.
    pub(super) last_data_row: u32,
}

impl SheetLayout {
    /// Layout for a header, an optional info row, and `data_rows` data rows.
    ///
    /// The caller checks the band fits in a worksheet.
    pub(super) fn new(info_row: bool, data_rows: u32) -> Self {
        let info_row = info_row.then_some(1);
        let first_data_row = info_row.map_or(1, |row| row + 1);
        Self {
            header_row: 0,
            info_row,
            first_data_row,
            last_data_row: first_data_row + data_rows.saturating_sub(1),
        }
    }

    /// Number of rows above the data band.
    pub(super) fn header_rows(&self) -> u32 {
        self.first_data_row
    }

    /// Last row of the header band, which carries the filter buttons.
    pub(super) fn filter_row(&self) -> u32 {
        self.first_data_row - 1
    }
}

/// Data validation applied to a column's data band.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ValidationRule<'a> {
    /// Value must be one of the listed strings.
    List(Vec<&'a str>),
    /// Value must be a date between 1900-01-01 and 9999-12-31.
    DateRange,
    /// Value must be a decimal between `DECIMAL_MIN` and `DECIMAL_MAX`.
    DecimalRange,
}

impl ValidationRule<'_> {
    /// Build the validation with a stop-style error alert.
    pub(super) fn to_data_validation(&self) -> GeneratorResult<DataValidation> {
        let (validation, message) = match self {
            Self::List(values) => (
                DataValidation::new().allow_list_strings(values.as_slice())?,
                format!("Choose one of: {}", values.join(", ")),
            ),
            Self::DateRange => (
                DataValidation::new().allow_date(DataValidationRule::Between(
                    ExcelDateTime::from_ymd(1900, 1, 1)?,
                    ExcelDateTime::from_ymd(9999, 12, 31)?,
                )),
                "Enter a date between 01/01/1900 and 31/12/9999".to_string(),
            ),
            Self::DecimalRange => (
                DataValidation::new()
                    .allow_decimal_number(DataValidationRule::Between(DECIMAL_MIN, DECIMAL_MAX)),
                "Enter a number".to_string(),
            ),
        };

        Ok(validation
            .set_error_title("Invalid value")?
            .set_error_message(truncate_message(&message))?)
    }
}

/// Excel rejects error messages longer than 255 characters.
fn truncate_message(message: &str) -> String {
    const MAX_MESSAGE: usize = 255;
    if message.chars().count() <= MAX_MESSAGE {
        return message.to_string();
    }
    let mut truncated: String = message.chars().take(MAX_MESSAGE - 3).collect();
    truncated.push_str("...");
    truncated
}

/// Validation for a column, if its type carries one.
pub(super) fn validation_rule(column: &Column) -> Option<ValidationRule<'_>> {
    match column.resolved_type() {
        ColumnType::List | ColumnType::Boolean => {
            let values = column.resolved_allowed_values();
            (!values.is_empty()).then_some(ValidationRule::List(values))
        }
        ColumnType::Date => Some(ValidationRule::DateRange),
        ColumnType::Number => Some(ValidationRule::DecimalRange),
        ColumnType::Text => None,
    }
}

/// Conditional format formula flagging a blank cell at the top of the band.
///
/// `first_data_row` is zero-based; the formula uses a row-relative reference
/// so Excel applies it to every row of the band.
pub(super) fn blank_formula(
    mode: RequiredHighlight,
    column: u16,
    first_data_row: u32,
) -> Option<String> {
    let cell = format!("${}{}", column_letter(column), first_data_row + 1);
    match mode {
        RequiredHighlight::Off => None,
        RequiredHighlight::Blank => Some(format!("LEN({cell})=0")),
        RequiredHighlight::BlankOrWhitespace => Some(format!("LEN(TRIM({cell}))=0")),
    }
}

/// Info row text: type, requiredness, description, allowed values, format.
pub(super) fn info_text(column: &Column) -> String {
    let mut parts = vec![
        column.type_label().to_string(),
        if column.required { "required" } else { "optional" }.to_string(),
    ];
    if let Some(description) = column.description.as_deref().filter(|d| has_text(d)) {
        parts.push(description.trim().to_string());
    }
    let values = column.resolved_allowed_values();
    if !values.is_empty() {
        parts.push(values.join(", "));
    }
    parts.push(column.resolved_format().to_string());
    parts.join(" | ")
}

/// Padded column width for the column's content.
///
/// Content width is the longest of the header, the widest allowed value,
/// the date format pattern, and the info text capped at 50 characters.
pub(super) fn column_width(column: &Column, info: Option<&str>, padding: f64) -> f64 {
    let widest_value = column
        .resolved_allowed_values()
        .into_iter()
        .map(text_width)
        .max()
        .unwrap_or(0);
    let date_format = if column.resolved_type() == ColumnType::Date {
        text_width(column.resolved_format())
    } else {
        0
    };
    let info = info.map_or(0, |text| text_width(text).min(INFO_WIDTH_CAP));

    let content = text_width(&column.header)
        .max(widest_value)
        .max(date_format)
        .max(info);

    (f64::from(content) * padding).min(MAX_COLUMN_WIDTH)
}
