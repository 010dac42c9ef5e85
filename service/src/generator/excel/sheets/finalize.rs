use crate::generator::traits::GeneratorResult;
use rust_xlsxwriter::{ProtectionOptions, Worksheet};

use super::super::cast;
use super::super::generator::ExcelTemplateGenerator;
use super::super::rules::SheetLayout;

impl ExcelTemplateGenerator {
    /// Apply the auto-filter, frozen header band and protection.
    pub(super) fn finalize_sheet(
        &self,
        worksheet: &mut Worksheet,
        column_count: usize,
        layout: &SheetLayout,
    ) -> GeneratorResult<()> {
        if self.add_filters() && column_count > 0 {
            let last_col = cast::usize_to_u16_column(column_count - 1)?;
            let row = layout.filter_row();
            worksheet.autofilter(row, 0, row, last_col)?;
        }

        if self.freeze_headers() {
            worksheet.set_freeze_panes(layout.header_rows(), 0)?;
        }

        if self.protect_sheets() {
            if let Some(password) = self.protection_password() {
                worksheet.protect_with_password(password);
            }
            // Header cells stay locked; column formats leave data cells editable.
            let options = ProtectionOptions {
                use_autofilter: true,
                ..ProtectionOptions::default()
            };
            worksheet.protect_with_options(&options);
        }

        Ok(())
    }
}
