//! Rendering tests for hand-built definitions and generator options

mod common;

use common::{count, part_names, row_values, sheet_xml};
use pretty_assertions::assert_eq;
use workbook_service::{
    Column, ColumnType, ExcelFeatures, ExcelTemplateGenerator, GeneratorError, RequiredHighlight,
    ResolvedSheet, TemplateDefinition, TemplateGenerator,
};

fn sheet(name: &str, columns: Vec<Column>) -> ResolvedSheet {
    ResolvedSheet {
        name: name.to_string(),
        columns,
    }
}

fn single(columns: Vec<Column>) -> TemplateDefinition {
    TemplateDefinition::from_sheets([sheet("DATA", columns)])
}

/// Test that validations and highlighting cover exactly the configured band
#[test]
fn test_bounded_row_band() {
    let definition = single(vec![
        Column::new("AMOUNT")
            .with_required(true)
            .with_type(ColumnType::Number),
    ]);
    let bytes = ExcelTemplateGenerator::new()
        .with_data_rows(50)
        .generate(&definition)
        .unwrap();

    let xml = sheet_xml(&bytes, 1);
    assert!(xml.contains("sqref=\"A2:A51\""));
    assert!(xml.contains("<conditionalFormatting sqref=\"A2:A51\">"));
    assert!(!xml.contains("A10001"));
}

/// Test that BOOLEAN columns default to a YES/NO list
#[test]
fn test_boolean_column_defaults_to_yes_no() {
    let definition = single(vec![Column::new("ACTIVE").with_type(ColumnType::Boolean)]);
    let xml = sheet_xml(&ExcelTemplateGenerator::new().generate(&definition).unwrap(), 1);
    assert!(xml.contains("type=\"list\""));
    assert!(xml.contains("YES,NO"));
}

/// Test that a LIST column without values gets no validation
#[test]
fn test_list_without_values_is_unvalidated() {
    let definition = single(vec![Column::new("KIND").with_type(ColumnType::List)]);
    let xml = sheet_xml(&ExcelTemplateGenerator::new().generate(&definition).unwrap(), 1);
    assert!(!xml.contains("<dataValidation"));
}

/// Test that the info row shifts the header band down by one row
#[test]
fn test_info_row_layout() {
    let definition = single(vec![
        Column::new("CURRENCY")
            .with_required(true)
            .with_type(ColumnType::List)
            .with_description("ISO 4217 currency code")
            .with_allowed_values(["PLN", "EUR", "USD"]),
        Column::new("ISSUE_DATE").with_type(ColumnType::Date),
    ]);
    let bytes = ExcelTemplateGenerator::new()
        .with_info_row(true)
        .generate(&definition)
        .unwrap();

    assert_eq!(row_values(&bytes, "DATA", 0), ["CURRENCY", "ISSUE_DATE"]);
    assert_eq!(
        row_values(&bytes, "DATA", 1),
        [
            "LIST | required | ISO 4217 currency code | PLN, EUR, USD | @",
            "DATE | optional | dd/mm/yyyy",
        ]
    );

    let xml = sheet_xml(&bytes, 1);
    assert!(xml.contains("ySplit=\"2\""));
    assert!(xml.contains("<autoFilter ref=\"A2:B2\""));
    assert!(xml.contains("sqref=\"A3:A10002\""));
    assert!(xml.contains("sqref=\"B3:B10002\""));
    assert!(xml.contains("<formula>LEN(TRIM($A3))=0</formula>"));
}

/// Test that a sheet without columns is still frozen but not filtered
#[test]
fn test_empty_sheet() {
    let definition = TemplateDefinition::from_sheets([
        sheet("EMPTY", Vec::new()),
        sheet("IDS", vec![Column::new("ID")]),
    ]);
    let bytes = ExcelTemplateGenerator::new().generate(&definition).unwrap();

    let empty = sheet_xml(&bytes, 1);
    assert!(empty.contains("state=\"frozen\""));
    assert!(!empty.contains("<autoFilter"));
    assert!(sheet_xml(&bytes, 2).contains("<autoFilter ref=\"A1"));
}

/// Test the stricter blank-only highlight mode
#[test]
fn test_blank_only_highlight() {
    let definition = single(vec![Column::new("ID").with_required(true)]);
    let xml = sheet_xml(
        &ExcelTemplateGenerator::new()
            .with_highlight_mode(RequiredHighlight::Blank)
            .generate(&definition)
            .unwrap(),
        1,
    );
    assert!(xml.contains("<formula>LEN($A2)=0</formula>"));

    let off = sheet_xml(
        &ExcelTemplateGenerator::new()
            .with_highlight_mode(RequiredHighlight::Off)
            .generate(&definition)
            .unwrap(),
        1,
    );
    assert!(!off.contains("<conditionalFormatting"));
}

/// Test that disabled features leave no trace in the worksheet
#[test]
fn test_minimal_features() {
    let definition = single(vec![
        Column::new("AMOUNT")
            .with_required(true)
            .with_type(ColumnType::Number)
            .with_description("Amount"),
    ]);
    let bytes = ExcelTemplateGenerator::new()
        .with_features(ExcelFeatures::NONE)
        .generate(&definition)
        .unwrap();

    let xml = sheet_xml(&bytes, 1);
    assert!(!xml.contains("<dataValidation"));
    assert!(!xml.contains("<conditionalFormatting"));
    assert!(!xml.contains("<autoFilter"));
    assert!(!xml.contains("<pane"));
    assert!(!xml.contains("<sheetProtection"));
    assert!(!part_names(&bytes).iter().any(|name| name.starts_with("xl/comments")));
    assert_eq!(row_values(&bytes, "DATA", 0), ["AMOUNT"]);
}

/// Test that a blank tooltip falls back to the description and empty text adds no note
#[test]
fn test_tooltip_fallback() {
    let definition = single(vec![
        Column::new("A").with_tooltip("  ").with_description("from description"),
        Column::new("B"),
    ]);
    let bytes = ExcelTemplateGenerator::new().generate(&definition).unwrap();
    let notes = common::part_xml(&bytes, "xl/comments1.xml");
    assert!(notes.contains("from description"));
    assert_eq!(count(&notes, "<comment "), 1);
}

/// Test that unusable definitions fail before rendering
#[test]
fn test_invalid_definitions() {
    let generator = ExcelTemplateGenerator::new();

    let err = generator.generate(&TemplateDefinition::default()).unwrap_err();
    assert!(matches!(err, GeneratorError::Validation(_)));

    let err = generator
        .generate(&single_named("BAD:NAME"))
        .unwrap_err();
    assert!(matches!(err, GeneratorError::Validation(_)));

    let err = generator
        .generate(&single_named("A_VERY_LONG_SHEET_NAME_OVER_31_CHARS"))
        .unwrap_err();
    assert!(err.to_string().contains("1 to 31 characters"));

    let too_wide = single((0..16_385).map(|i| Column::new(format!("C{i}"))).collect());
    let err = generator.validate_definition(&too_wide).unwrap_err();
    assert!(err.to_string().contains("16384"));
}

fn single_named(name: &str) -> TemplateDefinition {
    TemplateDefinition::from_sheets([sheet(name, vec![Column::new("ID")])])
}

/// Test that protection with a password is applied
#[test]
fn test_password_protection() {
    let definition = single(vec![Column::new("ID")]);
    let xml = sheet_xml(
        &ExcelTemplateGenerator::new()
            .with_protection_password("secret")
            .generate(&definition)
            .unwrap(),
        1,
    );
    assert!(xml.contains("<sheetProtection"));
    assert!(xml.contains("password=\""));
}
