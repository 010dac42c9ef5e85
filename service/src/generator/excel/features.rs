use bitflags::bitflags;

bitflags! {
    /// Workbook rendering steps to enable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ExcelFeatures: u16 {
        /// Type-driven data validation over the data band.
        const VALIDATION = 0b0000_0001;
        /// Help note on each header cell.
        const TOOLTIPS = 0b0000_0010;
        /// Conditional formatting for blank required cells.
        const HIGHLIGHT_REQUIRED = 0b0000_0100;
        /// Freeze the header band.
        const FREEZE_HEADERS = 0b0000_1000;
        /// Auto-filter on the header band.
        const FILTERS = 0b0001_0000;
        /// Size columns to their content.
        const AUTOSIZE = 0b0010_0000;
        /// Info row under the header describing each column.
        const INFO_ROW = 0b0100_0000;
        /// Protect sheets so only data cells are editable.
        const PROTECT = 0b1000_0000;

        /// Everything except the info row (default).
        const DEFAULT = Self::VALIDATION.bits()
                      | Self::TOOLTIPS.bits()
                      | Self::HIGHLIGHT_REQUIRED.bits()
                      | Self::FREEZE_HEADERS.bits()
                      | Self::FILTERS.bits()
                      | Self::AUTOSIZE.bits()
                      | Self::PROTECT.bits();

        /// Headers and column formats only.
        const NONE = 0;
    }
}

impl Default for ExcelFeatures {
    fn default() -> Self {
        Self::DEFAULT
    }
}
