//! Helpers for reading generated workbooks back

#![allow(dead_code)]

use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Worksheet names in workbook order
pub fn sheet_names(bytes: &[u8]) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec())).unwrap();
    workbook.sheet_names()
}

/// Cell text of one row of a worksheet, empty cells as empty strings
pub fn row_values(bytes: &[u8], sheet: &str, row: u32) -> Vec<String> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec())).unwrap();
    let range = workbook.worksheet_range(sheet).unwrap();
    let Some((_, last_col)) = range.end() else {
        return Vec::new();
    };
    (0..=last_col)
        .map(|col| {
            range
                .get_value((row, col))
                .map(Data::to_string)
                .unwrap_or_default()
        })
        .collect()
}

/// Raw XML of a part of the xlsx package
pub fn part_xml(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut xml = String::new();
    file.read_to_string(&mut xml).unwrap();
    xml
}

/// Raw XML of the worksheet at a one-based position
pub fn sheet_xml(bytes: &[u8], position: usize) -> String {
    part_xml(bytes, &format!("xl/worksheets/sheet{position}.xml"))
}

/// Names of all parts in the xlsx package
pub fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(str::to_string).collect()
}

/// Style index attribute of a cell, e.g. `cell_style(xml, "A1")`
pub fn cell_style(sheet_xml: &str, cell: &str) -> Option<String> {
    let start = sheet_xml.find(&format!("<c r=\"{cell}\""))?;
    let element = &sheet_xml[start..];
    let element = &element[..element.find('>')?];
    let style = element.find(" s=\"")? + 4;
    let rest = &element[style..];
    Some(rest[..rest.find('"')?].to_string())
}

/// Number of non-overlapping occurrences of `needle`
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// The `<dataValidation>` element covering exactly `sqref`, tags included
pub fn data_validation(sheet_xml: &str, sqref: &str) -> Option<String> {
    let attribute = format!("sqref=\"{sqref}\"");
    sheet_xml
        .split("<dataValidation ")
        .skip(1)
        .map(|rest| {
            let end = rest
                .find("</dataValidation>")
                .map_or(rest.len(), |end| end + "</dataValidation>".len());
            format!("<dataValidation {}", &rest[..end])
        })
        .find(|element| element[..element.find('>').unwrap_or(element.len())].contains(&attribute))
}

/// Numeric `<formula1>` and `<formula2>` bounds of a validation element
pub fn validation_bounds(element: &str) -> (f64, f64) {
    let formula = |tag: &str| -> f64 {
        let open = format!("<{tag}>");
        let start = element.find(&open).unwrap() + open.len();
        let end = start + element[start..].find('<').unwrap();
        element[start..end].trim().parse().unwrap()
    };
    (formula("formula1"), formula("formula2"))
}
