//! Error types for the reconciliation library.
//!
//! This module defines all error types that can occur while loading documents,
//! accessing grids, and reconciling sheets against pages.

/// Result type alias for reconciliation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during reconciliation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Row index outside the valid range of a grid
    #[error("Row index out of range: {index} (grid has {count} rows)")]
    RowOutOfRange {
        /// Requested row index
        index: usize,
        /// Number of rows in the grid
        count: usize,
    },

    /// Column index outside the valid range of a grid
    #[error("Column index out of range: {index} (grid has {count} columns)")]
    ColumnOutOfRange {
        /// Requested column index
        index: usize,
        /// Number of columns in the grid
        count: usize,
    },

    /// Page index outside the valid range of a paginated document
    #[error("Page index out of range: {index} (document has {count} pages)")]
    PageOutOfRange {
        /// Requested page index
        index: usize,
        /// Number of pages in the document
        count: usize,
    },

    /// Sheet index outside the valid range of a workbook
    #[error("Sheet index out of range: {index} (workbook has {count} sheets)")]
    SheetOutOfRange {
        /// Requested sheet index
        index: usize,
        /// Number of sheets in the workbook
        count: usize,
    },

    /// Requested sheet name not present in the workbook
    #[error("Sheet not found: {0:?}")]
    SheetNotFound(String),

    /// Spreadsheet could not be opened or read
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Paginated document could not be opened or read
    #[cfg(feature = "pdfium")]
    #[error("PDF error: {0}")]
    Pdf(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
