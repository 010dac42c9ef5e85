//! Inheritance resolution for template sheets and instrument templates
//!
//! - Sheets merge the columns of their base sheets, keyed by header
//! - Instrument templates merge the sheet lists of their base templates
//! - Cycles and dangling references are configuration errors

pub mod resolver;

pub use resolver::{ResolvedTemplates, resolve, resolve_config};
