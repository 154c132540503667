//! # gridmatch
//!
//! Reconciles the tabular content of a spreadsheet document against the text
//! layout of a paginated rendering, sheet by page, to verify that a generated
//! or scanned document faithfully reproduces its tabular source data.
//!
//! ## How it works
//!
//! A page arrives as a loose collection of positioned words - there is no
//! explicit grid, only scattered tokens. [`PageGrid`] infers the row/column
//! structure statistically: every distinct y-coordinate is a row, the
//! most-frequent x-coordinates are column starts, and rows populating fewer
//! columns than detected are dropped as header/footer noise. The
//! reconstructed grid and the spreadsheet sheet both implement [`TableGrid`],
//! and [`GridComparator`] walks them cell by cell with a pluggable equality
//! policy (numeric-aware by default, so `"007"` matches `7`).
//!
//! [`DocumentMatcher`] orchestrates the whole run: sheet *n* is paired with
//! page *n* in order and each pair produces a [`SheetMatch`] report.
//!
//! ## Quick start
//!
//! ```
//! use calamine::{Data, Range};
//! use gridmatch::geometry::Rect;
//! use gridmatch::page::{MemoryDocument, PageText, Word};
//! use gridmatch::sheet::{Sheet, Workbook};
//! use gridmatch::DocumentMatcher;
//!
//! // The spreadsheet side: a 2x2 sheet.
//! let mut range = Range::new((0, 0), (1, 1));
//! range.set_value((0, 0), Data::Int(1));
//! range.set_value((0, 1), Data::String("Alice".into()));
//! range.set_value((1, 0), Data::Int(2));
//! range.set_value((1, 1), Data::String("Bob".into()));
//! let workbook = Workbook::from_sheets(vec![Sheet::from_range("people", range)]);
//!
//! // The rendered side: the same table as positioned words on one page.
//! let words = vec![
//!     Word::new(Rect::from_points(72.0, 100.0, 80.0, 112.0), "1", 0, 0, 0),
//!     Word::new(Rect::from_points(200.0, 100.0, 240.0, 112.0), "Alice", 0, 0, 1),
//!     Word::new(Rect::from_points(72.0, 130.0, 80.0, 142.0), "2", 0, 1, 0),
//!     Word::new(Rect::from_points(200.0, 130.0, 230.0, 142.0), "Bob", 0, 1, 1),
//! ];
//! let document = MemoryDocument::new(vec![PageText::new(words, Vec::new())]);
//!
//! let matcher = DocumentMatcher::new(workbook, document);
//! let results = matcher.match_sheets();
//! assert!(results[0].as_ref().unwrap().matched);
//! ```
//!
//! ## Scope
//!
//! Spreadsheet reading goes through [calamine](https://docs.rs/calamine);
//! paginated-document extraction is behind the
//! [`PaginatedDocument`] trait, with a pdfium-backed adapter available under
//! the `pdfium` feature. The crate reports results programmatically -
//! rendering reports or wiring up a CLI belongs to the caller.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Positioned text and geometry
pub mod geometry;
pub mod page;

// Grid inference and comparison
pub mod grid;

// Document adapters
#[cfg(feature = "pdfium")]
#[cfg_attr(docsrs, doc(cfg(feature = "pdfium")))]
pub mod pdfium;
pub mod sheet;

// Orchestration
pub mod matcher;

pub use error::{Error, Result};
pub use grid::{
    CellMatcher, GridComparator, GridDiff, InferenceConfig, NumericAware, PageGrid, TableGrid,
};
pub use matcher::{DocumentMatcher, SheetMatch};
pub use page::{MemoryDocument, PageText, PaginatedDocument, Word};
pub use sheet::{Sheet, Workbook};

#[cfg(feature = "pdfium")]
pub use pdfium::PdfiumDocument;
