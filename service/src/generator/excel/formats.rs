use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};
use std::collections::HashMap;

/// Font color of required column headers.
const REQUIRED_HEADER_FONT: Color = Color::RGB(0x00FF_FF99);

/// Formats shared by every sheet of one workbook.
///
/// Column formats are cached by their trimmed number format pattern, so a
/// workbook holds one format per distinct pattern. A cache lives for a single
/// generation call.
#[derive(Debug)]
pub(super) struct FormatCache {
    columns: HashMap<String, Format>,
    header: Format,
    required_header: Format,
    info: Format,
    highlight: Format,
}

impl FormatCache {
    pub(super) fn new() -> Self {
        let header = Format::new()
            .set_bold()
            .set_background_color(Color::Gray)
            .set_font_color(Color::White)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter);

        let required_header = header.clone().set_font_color(REQUIRED_HEADER_FONT);

        let info = Format::new()
            .set_italic()
            .set_font_color(Color::Gray)
            .set_align(FormatAlign::Top);

        let highlight = Format::new()
            .set_border(FormatBorder::Thin)
            .set_border_color(Color::Red);

        Self {
            columns: HashMap::new(),
            header,
            required_header,
            info,
            highlight,
        }
    }

    /// Unlocked column-wide format carrying the number format pattern.
    pub(super) fn column(&mut self, pattern: &str) -> &Format {
        let pattern = pattern.trim();
        self.columns
            .entry(pattern.to_string())
            .or_insert_with(|| Format::new().set_num_format(pattern).set_unlocked())
    }

    /// Header format for a required or optional column.
    pub(super) fn header(&self, required: bool) -> &Format {
        if required {
            &self.required_header
        } else {
            &self.header
        }
    }

    pub(super) fn info(&self) -> &Format {
        &self.info
    }

    /// Border applied by the blank required cell rule.
    pub(super) fn highlight(&self) -> &Format {
        &self.highlight
    }

    #[cfg(test)]
    fn column_format_count(&self) -> usize {
        self.columns.len()
    }
}
