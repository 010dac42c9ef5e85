use super::features::ExcelFeatures;
use workbook_core::config::{DEFAULT_COLUMN_PADDING, DEFAULT_DATA_ROWS};
use workbook_core::{RenderSettings, RequiredHighlight};

/// Excel template generator entry point.
///
/// Renders a resolved template definition into an xlsx workbook with one
/// worksheet per sheet. The generator holds only rendering options, so one
/// instance can serve concurrent calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcelTemplateGenerator {
    /// Enabled rendering steps.
    features: ExcelFeatures,
    /// Number of data rows covered by validations and highlighting.
    data_rows: u32,
    /// Trigger condition for blank required cells.
    required_highlight: RequiredHighlight,
    /// Optional worksheet protection password.
    protection_password: Option<String>,
    /// Multiplier applied to estimated column widths.
    column_padding: f64,
}

macro_rules! feature_toggle {
    ($(#[$doc:meta])* $setter:ident, $getter:ident, $flag:ident) => {
        $(#[$doc])*
        #[must_use]
        pub fn $setter(mut self, enabled: bool) -> Self {
            self.features.set(ExcelFeatures::$flag, enabled);
            self
        }

        #[doc = concat!("Check if `", stringify!($flag), "` is enabled.")]
        #[must_use]
        pub fn $getter(&self) -> bool {
            self.features.contains(ExcelFeatures::$flag)
        }
    };
}

impl ExcelTemplateGenerator {
    /// Create a generator with the default features and options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            features: ExcelFeatures::DEFAULT,
            data_rows: DEFAULT_DATA_ROWS,
            required_highlight: RequiredHighlight::default(),
            protection_password: None,
            column_padding: DEFAULT_COLUMN_PADDING,
        }
    }

    /// Create a generator from configured render settings.
    #[must_use]
    pub fn from_settings(settings: &RenderSettings) -> Self {
        let mut features = ExcelFeatures::DEFAULT;
        features.set(ExcelFeatures::INFO_ROW, settings.info_row);
        features.set(ExcelFeatures::PROTECT, settings.protect_sheets);
        features.set(
            ExcelFeatures::HIGHLIGHT_REQUIRED,
            settings.required_highlight != RequiredHighlight::Off,
        );

        Self {
            features,
            data_rows: settings.data_rows,
            required_highlight: settings.required_highlight,
            protection_password: settings.protection_password.clone(),
            column_padding: settings.column_padding,
        }
    }

    /// Replace the whole feature set.
    #[must_use]
    pub fn with_features(mut self, features: ExcelFeatures) -> Self {
        self.features = features;
        self
    }

    /// Enabled features.
    #[must_use]
    pub fn features(&self) -> ExcelFeatures {
        self.features
    }

    feature_toggle!(
        /// Configure type-driven data validation.
        with_validation, add_validation, VALIDATION
    );
    feature_toggle!(
        /// Configure header help notes.
        with_tooltips, add_tooltips, TOOLTIPS
    );
    feature_toggle!(
        /// Configure blank required cell highlighting.
        with_required_highlight, highlight_required, HIGHLIGHT_REQUIRED
    );
    feature_toggle!(
        /// Configure header freezing.
        with_frozen_headers, freeze_headers, FREEZE_HEADERS
    );
    feature_toggle!(
        /// Configure the header auto-filter.
        with_filters, add_filters, FILTERS
    );
    feature_toggle!(
        /// Configure column sizing.
        with_autosize, autosize, AUTOSIZE
    );
    feature_toggle!(
        /// Configure the info row under the header.
        with_info_row, info_row, INFO_ROW
    );
    feature_toggle!(
        /// Configure worksheet protection.
        with_protection, protect_sheets, PROTECT
    );

    /// Set the number of data rows covered by validations and highlighting.
    #[must_use]
    pub fn with_data_rows(mut self, data_rows: u32) -> Self {
        self.data_rows = data_rows;
        self
    }

    /// Number of data rows covered by validations and highlighting.
    #[must_use]
    pub fn data_rows(&self) -> u32 {
        self.data_rows
    }

    /// Set the trigger condition for required cell highlighting.
    ///
    /// `RequiredHighlight::Off` suppresses highlighting even when the feature
    /// flag is set.
    #[must_use]
    pub fn with_highlight_mode(mut self, mode: RequiredHighlight) -> Self {
        self.required_highlight = mode;
        self
    }

    /// Trigger condition for required cell highlighting.
    #[must_use]
    pub fn highlight_mode(&self) -> RequiredHighlight {
        self.required_highlight
    }

    /// Protect worksheets with a password.
    #[must_use]
    pub fn with_protection_password(mut self, password: impl Into<String>) -> Self {
        self.protection_password = Some(password.into());
        self
    }

    pub(super) fn protection_password(&self) -> Option<&str> {
        self.protection_password.as_deref()
    }

    /// Set the multiplier applied to estimated column widths.
    #[must_use]
    pub fn with_column_padding(mut self, padding: f64) -> Self {
        self.column_padding = padding;
        self
    }

    /// Multiplier applied to estimated column widths.
    #[must_use]
    pub fn column_padding(&self) -> f64 {
        self.column_padding
    }
}

impl Default for ExcelTemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything_but_info_row() {
        let generator = ExcelTemplateGenerator::new();
        assert!(generator.add_validation());
        assert!(generator.add_tooltips());
        assert!(generator.highlight_required());
        assert!(generator.freeze_headers());
        assert!(generator.add_filters());
        assert!(generator.autosize());
        assert!(generator.protect_sheets());
        assert!(!generator.info_row());
        assert_eq!(generator.data_rows(), 10_000);
    }

    #[test]
    fn test_from_settings() {
        let settings = RenderSettings {
            data_rows: 25,
            info_row: true,
            protect_sheets: false,
            protection_password: Some("secret".to_string()),
            required_highlight: RequiredHighlight::Off,
            column_padding: 1.5,
        };
        let generator = ExcelTemplateGenerator::from_settings(&settings);
        assert!(generator.info_row());
        assert!(!generator.protect_sheets());
        assert!(!generator.highlight_required());
        assert_eq!(generator.data_rows(), 25);
        assert_eq!(generator.protection_password(), Some("secret"));
        assert!((generator.column_padding() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_toggles() {
        let generator = ExcelTemplateGenerator::new()
            .with_validation(false)
            .with_info_row(true);
        assert!(!generator.add_validation());
        assert!(generator.info_row());
        assert_eq!(
            generator.features(),
            (ExcelFeatures::DEFAULT - ExcelFeatures::VALIDATION) | ExcelFeatures::INFO_ROW
        );
    }
}
