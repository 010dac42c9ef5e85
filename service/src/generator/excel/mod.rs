//! Excel renderer for resolved template definitions.
//!
//! Each resolved sheet becomes one worksheet. Columns get a column-wide number
//! format, a type-driven data validation over the data band, a header help
//! note and, for required columns, a blank-cell highlight. Sheets are then
//! filtered, frozen, sized and protected according to [`ExcelFeatures`].

mod cast;
mod features;
mod formats;
mod generator;
mod rules;
mod sheets;
mod workbook;

pub use features::ExcelFeatures;
pub use generator::ExcelTemplateGenerator;
