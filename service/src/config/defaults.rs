//! Built-in template configuration
//!
//! The same templates ship as `config/instrument-templates.yaml`; the test at
//! the bottom of this module keeps the two in step.

use indexmap::IndexMap;
use workbook_core::prelude::*;

/// Instrument type served by the built-in configuration
pub const MORTGAGE: &str = "MORTGAGE";

fn text(header: &str, required: bool) -> Column {
    Column::new(header)
        .with_required(required)
        .with_type(ColumnType::Text)
}

fn number(header: &str, required: bool) -> Column {
    Column::new(header)
        .with_required(required)
        .with_type(ColumnType::Number)
}

fn date(header: &str, required: bool, format: &str) -> Column {
    Column::new(header)
        .with_required(required)
        .with_type(ColumnType::Date)
        .with_format(format)
}

fn list(header: &str, required: bool, values: &[&str]) -> Column {
    Column::new(header)
        .with_required(required)
        .with_type(ColumnType::List)
        .with_allowed_values(values.iter().copied())
}

/// Sheets shipped with the service, in declaration order
#[must_use]
pub fn default_sheets() -> Vec<TemplateSheet> {
    vec![
        TemplateSheet::new("INSTRUMENT_DETAILS").with_columns([
            text("INSTRUMENT_ID", true).with_description("Unique instrument identifier"),
            text("INSTRUMENT_NAME", true).with_description("Instrument name"),
            list("CURRENCY", true, &["PLN", "EUR", "USD"])
                .with_description("ISO 4217 currency code"),
            date("ISSUE_DATE", false, "dd/mm/yyyy").with_description("Issue date"),
        ]),
        TemplateSheet::new("LINKED_DEALS").with_columns([
            text("DEAL_ID", true),
            list("DEAL_TYPE", true, &["PRIMARY", "SECONDARY", "TERTIARY"])
                .with_description("Deal type (e.g. PRIMARY, SECONDARY)"),
            date("DEAL_DATE", true, "dd.mm.yyyy")
                .with_tooltip("Select the deal date in dd.mm.yyyy format"),
            number("NOTIONAL", true)
                .with_description("Notional amount")
                .with_tooltip("Provide the notional amount in the deal currency"),
        ]),
        TemplateSheet::new("LINKED_ASSETS").with_columns([
            text("ASSET_ID", true),
            text("ASSET_CLASS", true),
            number("ASSET_VALUE", false),
        ]),
        TemplateSheet::new("PERSISTED_IDS").with_columns([
            text("ENTITY_TYPE", true),
            text("LEGACY_ID", true),
            text("SOURCE_SYSTEM", false),
        ]),
        TemplateSheet::new("LINKED_INSTRUMENTS").with_columns([
            text("MASTER_INSTRUMENT_ID", true),
            text("RELATED_INSTRUMENT_ID", true),
            text("RELATIONSHIP_TYPE", true),
        ]),
        TemplateSheet::new("LINKED_PARTIES").with_columns([
            text("PARTY_ID", true),
            text("PARTY_ROLE", true).with_description("Role (e.g. ISSUER, GUARANTOR)"),
            text("PARTY_NAME", true),
            text("COUNTRY", false),
        ]),
    ]
}

/// Configuration with the built-in sheets and the `MORTGAGE` template
#[must_use]
pub fn default_config() -> TemplateConfig {
    let sheets = default_sheets();
    let mortgage = TemplateSettings::new(sheets.iter().map(|sheet| sheet.name.clone()));

    let mut templates = IndexMap::new();
    templates.insert(MORTGAGE.to_string(), mortgage);
    TemplateConfig::new(sheets, templates)
}
