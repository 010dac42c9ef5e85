use super::super::traits::{GeneratorError, GeneratorResult, TemplateGenerator};
use super::cast::MAX_EXCEL_COLUMNS;
use super::formats::FormatCache;
use super::generator::ExcelTemplateGenerator;
use super::rules::{SheetLayout, ValidationRule, validation_rule};
use rust_xlsxwriter::Workbook;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use workbook_core::config::MAX_SHEET_ROW;
use workbook_core::{Column, TemplateDefinition};

/// Longest worksheet name Excel accepts.
const MAX_SHEET_NAME_CHARS: usize = 31;

/// Characters Excel rejects in worksheet names.
const INVALID_SHEET_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Longest comma-joined value list Excel accepts in a list validation.
const MAX_LIST_CHARS: usize = 255;

impl ExcelTemplateGenerator {
    /// Generate the workbook and save it to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if workbook generation fails or the file cannot be written.
    pub fn generate_file(&self, definition: &TemplateDefinition, path: &Path) -> GeneratorResult<()> {
        let content = self.generate_workbook(definition)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Generate the workbook as a byte buffer.
    ///
    /// The definition is validated before any workbook is allocated.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Validation` if the definition or the row band
    /// cannot be rendered, or `GeneratorError::Generation` if the spreadsheet
    /// library fails.
    pub fn generate_workbook(&self, definition: &TemplateDefinition) -> GeneratorResult<Vec<u8>> {
        self.check_definition(definition)?;
        let layout = self.layout()?;

        let mut workbook = Workbook::new();
        let mut formats = FormatCache::new();
        for sheet in definition.sheets() {
            self.render_sheet(&mut workbook, sheet, &layout, &mut formats)?;
            debug!(sheet = %sheet.name, "added worksheet");
        }

        let bytes = workbook.save_to_buffer()?;
        info!(
            sheets = definition.len(),
            bytes = bytes.len(),
            "generated workbook"
        );
        Ok(bytes)
    }

    /// Row layout for the configured features and band size.
    fn layout(&self) -> GeneratorResult<SheetLayout> {
        let data_rows = self.data_rows();
        if data_rows == 0 {
            return Err(GeneratorError::Validation(
                "data row band must cover at least one row".to_string(),
            ));
        }
        let padding = self.column_padding();
        if !padding.is_finite() || padding < 1.0 {
            return Err(GeneratorError::Validation(format!(
                "column padding must be a finite value >= 1.0, got {padding}"
            )));
        }
        let header_rows: u32 = if self.info_row() { 2 } else { 1 };
        if u64::from(header_rows) + u64::from(data_rows) - 1 > u64::from(MAX_SHEET_ROW) {
            return Err(GeneratorError::Validation(format!(
                "data row band of {data_rows} rows exceeds the worksheet row limit"
            )));
        }
        Ok(SheetLayout::new(self.info_row(), data_rows))
    }

    fn check_definition(&self, definition: &TemplateDefinition) -> GeneratorResult<()> {
        if definition.is_empty() {
            return Err(GeneratorError::Validation(
                "template definition must contain at least one sheet".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for sheet in definition.sheets() {
            check_sheet_name(&sheet.name)?;
            if !seen.insert(sheet.name.to_lowercase()) {
                return Err(GeneratorError::Validation(format!(
                    "Worksheet name '{}' is used more than once",
                    sheet.name
                )));
            }
            if sheet.columns.len() > MAX_EXCEL_COLUMNS {
                return Err(GeneratorError::Validation(format!(
                    "Sheet '{}' has {} columns (max: {MAX_EXCEL_COLUMNS})",
                    sheet.name,
                    sheet.columns.len()
                )));
            }
            if self.add_validation() {
                for column in &sheet.columns {
                    check_list_values(&sheet.name, column)?;
                }
            }
        }
        Ok(())
    }
}

/// Excel stores list validations as one comma-separated string, so values
/// must not contain commas and the joined list must fit the formula limit.
fn check_list_values(sheet: &str, column: &Column) -> GeneratorResult<()> {
    let Some(ValidationRule::List(values)) = validation_rule(column) else {
        return Ok(());
    };
    if let Some(value) = values.iter().find(|value| value.contains(',')) {
        return Err(GeneratorError::Validation(format!(
            "Sheet '{sheet}' column '{}': allowed value '{value}' contains a comma",
            column.header
        )));
    }
    // Quotes are doubled when the list is written.
    let length = values
        .iter()
        .map(|value| value.chars().count() + value.matches('"').count())
        .sum::<usize>()
        + values.len()
        - 1;
    if length > MAX_LIST_CHARS {
        return Err(GeneratorError::Validation(format!(
            "Sheet '{sheet}' column '{}': allowed values are {length} characters (max: {MAX_LIST_CHARS})",
            column.header
        )));
    }
    Ok(())
}

fn check_sheet_name(name: &str) -> GeneratorResult<()> {
    let length = name.chars().count();
    if length == 0 || length > MAX_SHEET_NAME_CHARS {
        return Err(GeneratorError::Validation(format!(
            "Worksheet name '{name}' must be 1 to {MAX_SHEET_NAME_CHARS} characters"
        )));
    }
    if let Some(invalid) = name.chars().find(|c| INVALID_SHEET_NAME_CHARS.contains(c)) {
        return Err(GeneratorError::Validation(format!(
            "Worksheet name '{name}' contains invalid character '{invalid}'"
        )));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(GeneratorError::Validation(format!(
            "Worksheet name '{name}' must not start or end with an apostrophe"
        )));
    }
    Ok(())
}

impl TemplateGenerator for ExcelTemplateGenerator {
    fn name(&self) -> &'static str {
        "excel"
    }

    fn file_extension(&self) -> &'static str {
        "xlsx"
    }

    fn validate_definition(&self, definition: &TemplateDefinition) -> GeneratorResult<()> {
        self.check_definition(definition)?;
        self.layout().map(|_| ())
    }

    fn generate(&self, definition: &TemplateDefinition) -> GeneratorResult<Vec<u8>> {
        self.generate_workbook(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workbook_core::{ColumnType, ResolvedSheet};

    fn list_definition(values: &[String]) -> TemplateDefinition {
        TemplateDefinition::from_sheets([ResolvedSheet {
            name: "PARTIES".to_string(),
            columns: vec![
                Column::new("PARTY_NAME")
                    .with_type(ColumnType::List)
                    .with_allowed_values(values.iter().cloned()),
            ],
        }])
    }

    fn definition(names: &[&str]) -> TemplateDefinition {
        TemplateDefinition::from_sheets(names.iter().map(|name| ResolvedSheet {
            name: (*name).to_string(),
            columns: vec![Column::new("ID")],
        }))
    }

    #[test]
    fn test_sheet_name_rules() {
        assert!(check_sheet_name("LINKED_DEALS").is_ok());
        assert!(check_sheet_name(&"S".repeat(31)).is_ok());
        assert!(check_sheet_name("").is_err());
        assert!(check_sheet_name(&"S".repeat(32)).is_err());
        assert!(check_sheet_name("DEALS/2024").is_err());
        assert!(check_sheet_name("[DEALS]").is_err());
        assert!(check_sheet_name("'DEALS").is_err());
        assert!(check_sheet_name("DEALS'").is_err());
        assert!(check_sheet_name("O'NEIL").is_ok());
    }

    #[test]
    fn test_empty_definition_is_rejected() {
        let err = ExcelTemplateGenerator::new()
            .generate(&TemplateDefinition::default())
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Validation(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_case_insensitive_duplicate_names_are_rejected() {
        let generator = ExcelTemplateGenerator::new();
        let err = generator
            .validate_definition(&definition(&["Deals", "DEALS"]))
            .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_band_limits() {
        let generator = ExcelTemplateGenerator::new().with_data_rows(0);
        assert!(generator.validate_definition(&definition(&["A"])).is_err());

        let generator = ExcelTemplateGenerator::new()
            .with_info_row(true)
            .with_data_rows(MAX_SHEET_ROW);
        assert!(generator.validate_definition(&definition(&["A"])).is_err());

        let generator = ExcelTemplateGenerator::new().with_data_rows(MAX_SHEET_ROW);
        assert!(generator.validate_definition(&definition(&["A"])).is_ok());
    }

    #[test]
    fn test_allowed_value_with_comma_is_rejected() {
        let definition = list_definition(&["Smith, John".to_string(), "Doe".to_string()]);
        let err = ExcelTemplateGenerator::new()
            .generate(&definition)
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Validation(_)));
        assert!(err.is_client_error());
        let message = err.to_string();
        assert!(message.contains("PARTIES"));
        assert!(message.contains("PARTY_NAME"));
        assert!(message.contains("'Smith, John'"));

        // Without validations the list is never written.
        let unvalidated = ExcelTemplateGenerator::new().with_validation(false);
        assert!(unvalidated.validate_definition(&definition).is_ok());
    }

    #[test]
    fn test_allowed_value_list_length_limit() {
        // 50 values of 4 chars plus 49 commas: 249 characters.
        let fits: Vec<String> = (0..50).map(|i| format!("V{i:03}")).collect();
        let generator = ExcelTemplateGenerator::new().with_data_rows(10);
        assert!(generator.generate(&list_definition(&fits)).is_ok());

        let too_long: Vec<String> = (0..80).map(|i| format!("VALUE{i:02}")).collect();
        let err = generator
            .validate_definition(&list_definition(&too_long))
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Validation(_)));
        assert!(err.to_string().contains("PARTY_NAME"));
        assert!(err.to_string().contains("max: 255"));
    }

    #[test]
    fn test_column_padding_limits() {
        let sheets = definition(&["A"]);
        for padding in [0.0, -1.25, 0.99, f64::NAN, f64::INFINITY] {
            let err = ExcelTemplateGenerator::new()
                .with_column_padding(padding)
                .validate_definition(&sheets)
                .unwrap_err();
            assert!(matches!(err, GeneratorError::Validation(_)), "padding {padding}");
        }
        assert!(
            ExcelTemplateGenerator::new()
                .with_column_padding(1.0)
                .validate_definition(&sheets)
                .is_ok()
        );
    }

    #[test]
    fn test_generates_xlsx_bytes() -> anyhow::Result<()> {
        let bytes = ExcelTemplateGenerator::new()
            .with_data_rows(10)
            .generate(&definition(&["A", "B"]))?;
        assert!(bytes.starts_with(b"PK"));
        Ok(())
    }
}
