use crate::generator::traits::GeneratorResult;
use rust_xlsxwriter::{ConditionalFormatFormula, Note, Workbook, Worksheet};
use tracing::trace;
use workbook_core::{Column, ResolvedSheet};

use super::super::formats::FormatCache;
use super::super::generator::ExcelTemplateGenerator;
use super::super::rules::{self, SheetLayout};
use super::super::cast;

impl ExcelTemplateGenerator {
    /// Add one worksheet for `sheet` and render all of its columns.
    pub(in crate::generator::excel) fn render_sheet(
        &self,
        workbook: &mut Workbook,
        sheet: &ResolvedSheet,
        layout: &SheetLayout,
        formats: &mut FormatCache,
    ) -> GeneratorResult<()> {
        let worksheet = workbook.add_worksheet().set_name(&sheet.name)?;

        for (index, column) in sheet.columns.iter().enumerate() {
            let col = cast::usize_to_u16_column(index)?;
            self.render_column(worksheet, col, column, layout, formats)?;
        }

        self.finalize_sheet(worksheet, sheet.columns.len(), layout)?;
        trace!(sheet = %sheet.name, columns = sheet.columns.len(), "rendered worksheet");
        Ok(())
    }

    fn render_column(
        &self,
        worksheet: &mut Worksheet,
        col: u16,
        column: &Column,
        layout: &SheetLayout,
        formats: &mut FormatCache,
    ) -> GeneratorResult<()> {
        worksheet.set_column_format(col, formats.column(column.resolved_format()))?;

        if self.add_validation()
            && let Some(rule) = rules::validation_rule(column)
        {
            worksheet.add_data_validation(
                layout.first_data_row,
                col,
                layout.last_data_row,
                col,
                &rule.to_data_validation()?,
            )?;
        }

        if self.add_tooltips() {
            let tooltip = column.tooltip_text().trim();
            if !tooltip.is_empty() {
                let note = Note::new(tooltip).add_author_prefix(false);
                worksheet.insert_note(layout.header_row, col, &note)?;
            }
        }

        worksheet.write_string_with_format(
            layout.header_row,
            col,
            &column.header,
            formats.header(column.required),
        )?;

        let info = layout.info_row.map(|row| (row, rules::info_text(column)));
        if let Some((row, text)) = &info {
            worksheet.write_string_with_format(*row, col, text, formats.info())?;
        }

        if column.required && self.highlight_required() {
            self.highlight_blank_cells(worksheet, col, layout, formats)?;
        }

        if self.autosize() {
            let info_text = info.as_ref().map(|(_, text)| text.as_str());
            let width = rules::column_width(column, info_text, self.column_padding());
            worksheet.set_column_width(col, width)?;
        }

        Ok(())
    }

    fn highlight_blank_cells(
        &self,
        worksheet: &mut Worksheet,
        col: u16,
        layout: &SheetLayout,
        formats: &FormatCache,
    ) -> GeneratorResult<()> {
        let Some(formula) = rules::blank_formula(self.highlight_mode(), col, layout.first_data_row)
        else {
            return Ok(());
        };

        let conditional_format = ConditionalFormatFormula::new()
            .set_rule(formula.as_str())
            .set_format(formats.highlight());
        worksheet.add_conditional_format(
            layout.first_data_row,
            col,
            layout.last_data_row,
            col,
            &conditional_format,
        )?;
        Ok(())
    }
}
