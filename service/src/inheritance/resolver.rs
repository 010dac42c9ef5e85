//! Inheritance resolution for template sheets and instrument templates
//!
//! Sheets inherit columns from their base sheets and instrument templates
//! inherit sheet lists from their base templates. Both are resolved
//! depth-first with memoisation and an in-progress set for cycle detection.

use indexmap::{IndexMap, IndexSet};
use std::sync::Arc;
use tracing::{debug, info};
use workbook_core::prelude::*;
use workbook_core::utils::{has_text, ordered_unique};

/// Flattened, cycle-free result of resolving a template configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTemplates {
    sheet_index: IndexMap<String, Arc<ResolvedSheet>>,
    instrument_templates: IndexMap<String, Arc<TemplateDefinition>>,
}

impl ResolvedTemplates {
    /// Resolved sheets keyed by name, in declaration order
    #[must_use]
    pub fn sheet_index(&self) -> &IndexMap<String, Arc<ResolvedSheet>> {
        &self.sheet_index
    }

    /// Resolved instrument templates keyed by instrument type, in declaration order
    #[must_use]
    pub fn instrument_templates(&self) -> &IndexMap<String, Arc<TemplateDefinition>> {
        &self.instrument_templates
    }

    /// Look up a resolved sheet
    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Arc<ResolvedSheet>> {
        self.sheet_index.get(name)
    }

    /// Look up the definition for an instrument type
    #[must_use]
    pub fn definition(&self, instrument_type: &str) -> Option<&Arc<TemplateDefinition>> {
        self.instrument_templates.get(instrument_type)
    }

    /// Instrument types in declaration order
    pub fn instrument_types(&self) -> impl Iterator<Item = &str> {
        self.instrument_templates.keys().map(String::as_str)
    }
}

/// Resolve sheet and instrument template inheritance
///
/// # Errors
///
/// - `Configuration` if no instrument templates are declared or a sheet name repeats
/// - `BlankName` if a sheet or template has a blank name
/// - `UnknownReference` if a base sheet, base template or selected sheet is undeclared
/// - `CircularReference` if an inheritance chain loops
pub fn resolve(
    sheets: &[TemplateSheet],
    instrument_templates: &IndexMap<String, TemplateSettings>,
) -> Result<ResolvedTemplates> {
    if instrument_templates.is_empty() {
        return Err(TemplateError::config("instrument-templates must not be empty"));
    }

    let sheet_index = SheetResolver::new(sheets)?.resolve_all()?;
    let instrument_templates = TemplateResolver::new(instrument_templates)?.resolve_all(&sheet_index)?;

    info!(
        sheets = sheet_index.len(),
        templates = instrument_templates.len(),
        "resolved template configuration"
    );

    Ok(ResolvedTemplates {
        sheet_index,
        instrument_templates,
    })
}

/// Resolve a complete configuration
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_config(config: &TemplateConfig) -> Result<ResolvedTemplates> {
    resolve(&config.template_sheets, &config.instrument_templates)
}

/// Resolves column inheritance between sheets
struct SheetResolver<'a> {
    source: IndexMap<&'a str, &'a TemplateSheet>,
    resolved: IndexMap<String, Arc<ResolvedSheet>>,
    in_progress: IndexSet<&'a str>,
}

impl<'a> SheetResolver<'a> {
    fn new(sheets: &'a [TemplateSheet]) -> Result<Self> {
        let mut source = IndexMap::with_capacity(sheets.len());
        for sheet in sheets {
            if !has_text(&sheet.name) {
                return Err(TemplateError::BlankName {
                    kind: ReferenceKind::Sheet,
                });
            }
            if source.insert(sheet.name.as_str(), sheet).is_some() {
                return Err(TemplateError::config(format!(
                    "template sheet '{}' is declared more than once",
                    sheet.name
                )));
            }
        }

        Ok(Self {
            source,
            resolved: IndexMap::with_capacity(sheets.len()),
            in_progress: IndexSet::new(),
        })
    }

    fn resolve_all(mut self) -> Result<IndexMap<String, Arc<ResolvedSheet>>> {
        let names: Vec<&'a str> = self.source.keys().copied().collect();
        for name in names {
            self.resolve_sheet(name)?;
        }

        // Declaration order rather than completion order
        let mut index = IndexMap::with_capacity(self.resolved.len());
        for name in self.source.keys() {
            if let Some(sheet) = self.resolved.swap_remove(*name) {
                index.insert((*name).to_string(), sheet);
            }
        }
        Ok(index)
    }

    fn resolve_sheet(&mut self, name: &str) -> Result<Arc<ResolvedSheet>> {
        if let Some(cached) = self.resolved.get(name) {
            return Ok(Arc::clone(cached));
        }

        let (key, sheet) = self
            .source
            .get_key_value(name)
            .map(|(key, sheet)| (*key, *sheet))
            .ok_or_else(|| TemplateError::unknown_reference(ReferenceKind::Sheet, name))?;

        if !self.in_progress.insert(key) {
            return Err(TemplateError::circular_reference(
                ReferenceKind::Sheet,
                name,
                self.in_progress.iter().copied(),
            ));
        }

        let mut bases = Vec::with_capacity(sheet.base_sheets.len());
        for base_name in &sheet.base_sheets {
            bases.push(self.resolve_sheet(base_name)?);
        }

        // Re-inserting an existing header keeps its slot and replaces the column
        let mut columns: IndexMap<&str, Column> = IndexMap::new();
        for base in &bases {
            for column in &base.columns {
                columns.insert(column.header.as_str(), column.clone());
            }
        }
        for column in &sheet.columns {
            columns.insert(column.header.as_str(), column.clone());
        }

        let merged = Arc::new(ResolvedSheet {
            name: sheet.name.clone(),
            columns: columns.into_values().collect(),
        });

        self.in_progress.shift_remove(key);
        debug!(
            sheet = %merged.name,
            bases = sheet.base_sheets.len(),
            columns = merged.columns.len(),
            "resolved template sheet"
        );
        self.resolved.insert(key.to_string(), Arc::clone(&merged));
        Ok(merged)
    }
}

/// Resolves sheet-list inheritance between instrument templates
struct TemplateResolver<'a> {
    source: &'a IndexMap<String, TemplateSettings>,
    resolved: IndexMap<String, Arc<Vec<String>>>,
    in_progress: IndexSet<&'a str>,
}

impl<'a> TemplateResolver<'a> {
    fn new(source: &'a IndexMap<String, TemplateSettings>) -> Result<Self> {
        if source.keys().any(|name| !has_text(name)) {
            return Err(TemplateError::BlankName {
                kind: ReferenceKind::Template,
            });
        }

        Ok(Self {
            source,
            resolved: IndexMap::with_capacity(source.len()),
            in_progress: IndexSet::new(),
        })
    }

    fn resolve_all(
        mut self,
        sheet_index: &IndexMap<String, Arc<ResolvedSheet>>,
    ) -> Result<IndexMap<String, Arc<TemplateDefinition>>> {
        let source = self.source;
        let mut definitions = IndexMap::with_capacity(source.len());
        for name in source.keys() {
            let sheet_names = self.resolve_template(name)?;
            let definition = Self::materialize(&sheet_names, sheet_index)?;
            debug!(
                template = %name,
                sheets = definition.len(),
                "resolved instrument template"
            );
            definitions.insert(name.clone(), Arc::new(definition));
        }
        Ok(definitions)
    }

    fn resolve_template(&mut self, name: &str) -> Result<Arc<Vec<String>>> {
        if let Some(cached) = self.resolved.get(name) {
            return Ok(Arc::clone(cached));
        }

        let source = self.source;
        let (key, template) = source
            .get_key_value(name)
            .ok_or_else(|| TemplateError::unknown_reference(ReferenceKind::Template, name))?;

        if !self.in_progress.insert(key.as_str()) {
            return Err(TemplateError::circular_reference(
                ReferenceKind::Template,
                name,
                self.in_progress.iter().copied(),
            ));
        }

        let mut merged = Vec::new();
        for base_name in &template.base_templates {
            let base = self.resolve_template(base_name)?;
            merged.extend(base.iter().cloned());
        }
        merged.extend(template.sheets.iter().cloned());

        // A repeated name keeps its first position
        let sheet_names = Arc::new(ordered_unique(merged));

        self.in_progress.shift_remove(key.as_str());
        self.resolved.insert(key.clone(), Arc::clone(&sheet_names));
        Ok(sheet_names)
    }

    fn materialize(
        sheet_names: &[String],
        sheet_index: &IndexMap<String, Arc<ResolvedSheet>>,
    ) -> Result<TemplateDefinition> {
        let sheets = sheet_names
            .iter()
            .map(|name| {
                sheet_index
                    .get(name)
                    .map(Arc::clone)
                    .ok_or_else(|| TemplateError::unknown_reference(ReferenceKind::Sheet, name))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(TemplateDefinition::new(sheets))
    }
}
