//! Configuration loading and registry tests

use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;
use workbook_service::{
    ReferenceKind, RequiredHighlight, TemplateError, TemplateRegistry, TemplateService,
    default_config, load_config,
};

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

/// Test that the shipped configuration loads and matches the built-in templates
#[test]
fn test_shipped_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/instrument-templates.yaml");
    let config = load_config(&path).unwrap();
    assert_eq!(config, default_config());
}

/// Test environment substitution with defaults inside render settings
#[test]
fn test_env_substitution_with_default() {
    let file = write_config(
        r"
template-sheets:
  - name: IDS
    columns:
      - header: ID
        required: true
instrument-templates:
  LOAN:
    sheets: [IDS]
render:
  data-rows: ${WORKBOOK_TEMPLATE_TEST_ROWS_UNSET:-25}
  protection-password: ${WORKBOOK_TEMPLATE_TEST_PASSWORD_UNSET:-changeit}
  required-highlight: blank
",
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.render.data_rows, 25);
    assert_eq!(config.render.protection_password.as_deref(), Some("changeit"));
    assert_eq!(config.render.required_highlight, RequiredHighlight::Blank);
}

/// Test template inheritance declared in YAML
#[test]
fn test_yaml_template_inheritance() {
    let file = write_config(
        r"
template-sheets:
  - name: SHEET_A
    columns: [{header: A}]
  - name: SHEET_B
    columns: [{header: B}]
  - name: SHEET_C
    base-sheets: [SHEET_A, '  ']
    columns: [{header: C}]
instrument-templates:
  ONE:
    sheets: [SHEET_A]
  TWO:
    sheets: [SHEET_B]
  COMBINED:
    base-templates: [ONE, TWO]
    sheets: [SHEET_C, SHEET_A, '']
",
    );
    let registry = TemplateRegistry::from_file(file.path()).unwrap();
    let combined = registry.definition("COMBINED").unwrap();
    assert_eq!(
        combined.sheet_names().collect::<Vec<_>>(),
        ["SHEET_A", "SHEET_B", "SHEET_C"]
    );
    let sheet_c = &combined.sheets()[2];
    assert_eq!(sheet_c.headers().collect::<Vec<_>>(), ["A", "C"]);
}

/// Test that configuration errors surface from initialize
#[test]
fn test_initialize_reports_unknown_base_sheet() {
    let file = write_config(
        r"
template-sheets:
  - name: DERIVED
    base-sheets: [MISSING]
instrument-templates:
  T:
    sheets: [DERIVED]
",
    );
    let registry = TemplateRegistry::from_file(file.path()).unwrap();
    assert_eq!(
        registry.initialize().unwrap_err(),
        TemplateError::UnknownReference {
            kind: ReferenceKind::Sheet,
            name: "MISSING".to_string(),
        }
    );
}

/// Test that an empty template map is a configuration error
#[test]
fn test_empty_templates_rejected() {
    let file = write_config("template-sheets: []\ninstrument-templates: {}\n");
    let registry = TemplateRegistry::from_file(file.path()).unwrap();
    assert!(matches!(
        registry.initialize(),
        Err(TemplateError::Configuration(_))
    ));
}

/// Test that a missing file is reported as a configuration error
#[test]
fn test_missing_file() {
    let err = load_config(Path::new("/nonexistent/instrument-templates.yaml")).unwrap_err();
    assert!(matches!(err, TemplateError::Configuration(_)));
}

/// Test that a service picks up render settings from the loaded configuration
#[test]
fn test_service_uses_configured_band() {
    let file = write_config(
        r"
template-sheets:
  - name: IDS
    columns:
      - header: AMOUNT
        type: number
instrument-templates:
  LOAN:
    sheets: [IDS]
render:
  data-rows: 5
",
    );
    let registry = Arc::new(TemplateRegistry::from_file(file.path()).unwrap());
    let service = TemplateService::new(registry);
    let bytes = service.generate_template("LOAN").unwrap();

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    std::io::Read::read_to_string(
        &mut archive.by_name("xl/worksheets/sheet1.xml").unwrap(),
        &mut xml,
    )
    .unwrap();
    assert!(xml.contains("sqref=\"A2:A6\""));
}
