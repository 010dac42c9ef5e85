//! Workbook generators
//!
//! [`TemplateGenerator`] is the seam between the generation service and a
//! concrete renderer. The only renderer is the Excel one in [`excel`].

pub mod excel;
pub mod traits;

pub use excel::{ExcelFeatures, ExcelTemplateGenerator};
pub use traits::{GeneratorError, GeneratorResult, TemplateGenerator};
