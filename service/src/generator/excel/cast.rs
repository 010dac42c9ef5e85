use super::super::traits::GeneratorError;

/// Maximum number of columns in an xlsx worksheet.
pub(super) const MAX_EXCEL_COLUMNS: usize = 16_384;

/// Safely cast usize to u16 for Excel column indices.
pub(super) fn usize_to_u16_column(value: usize) -> Result<u16, GeneratorError> {
    if value >= MAX_EXCEL_COLUMNS {
        return Err(GeneratorError::Validation(format!(
            "Too many columns for Excel: {value} (max: {MAX_EXCEL_COLUMNS})"
        )));
    }

    u16::try_from(value)
        .map_err(|_| GeneratorError::Generation(format!("Column index {value} cannot fit in u16")))
}

/// Column letters for a zero-based column index (`0` is `A`, `26` is `AA`).
pub(super) fn column_letter(column: u16) -> String {
    let mut remaining = u32::from(column) + 1;
    let mut letters = Vec::new();

    while remaining > 0 {
        let offset = (remaining - 1) % 26;
        letters.push(char::from_u32(u32::from(b'A') + offset).unwrap_or('A'));
        remaining = (remaining - 1) / 26;
    }

    letters.iter().rev().collect()
}

/// Display width of a string in characters, saturating at `u16::MAX`.
pub(super) fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}
