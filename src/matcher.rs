//! Top-level orchestration: pair sheets with pages and reconcile them.
//!
//! [`DocumentMatcher`] owns one open [`Workbook`] and one
//! [`PaginatedDocument`]. Sheet *n* is paired with page *n* in order; each
//! page is reconstructed into a [`PageGrid`] and compared against its sheet.
//! Both documents are released when the matcher drops, on every path.

use serde::Serialize;

use crate::error::Result;
use crate::grid::{CellMatcher, GridComparator, GridDiff, InferenceConfig, PageGrid, TableGrid};
use crate::page::PaginatedDocument;
use crate::sheet::{Sheet, Workbook};

/// The reconciliation outcome for one sheet/page pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetMatch {
    /// Name of the sheet
    pub sheet: String,
    /// Whether the reconstructed page grid equals the sheet
    pub matched: bool,
    /// The first difference found, when `matched` is false
    pub diff: Option<GridDiff>,
}

/// Reconciles a spreadsheet document against a paginated document.
pub struct DocumentMatcher<D: PaginatedDocument> {
    workbook: Workbook,
    document: D,
    config: InferenceConfig,
}

impl<D: PaginatedDocument> DocumentMatcher<D> {
    /// Create a matcher over an open workbook and paginated document.
    pub fn new(workbook: Workbook, document: D) -> Self {
        Self {
            workbook,
            document,
            config: InferenceConfig::default(),
        }
    }

    /// Use a non-default inference configuration for page grids.
    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    /// The workbook side of the pairing.
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// The paginated-document side of the pairing.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Reconcile sheet `n` against page `n`, with the default numeric-aware
    /// comparator.
    ///
    /// Returns [`Error::SheetOutOfRange`](crate::Error::SheetOutOfRange) when
    /// the workbook has no sheet `n`, and
    /// [`Error::PageOutOfRange`](crate::Error::PageOutOfRange) when the
    /// document has no page `n`.
    pub fn match_sheet(&self, n: usize) -> Result<SheetMatch> {
        let sheets = self.workbook.sheets();
        let sheet = sheets.get(n).ok_or(crate::Error::SheetOutOfRange {
            index: n,
            count: sheets.len(),
        })?;
        self.reconcile(n, sheet, &GridComparator::new())
    }

    /// Reconcile every sheet against the page at the same ordinal index,
    /// with the default numeric-aware comparator.
    ///
    /// Results come back in sheet order, one entry per sheet. A sheet whose
    /// page is missing yields [`Error::PageOutOfRange`](crate::Error::PageOutOfRange)
    /// in its slot; results for other sheets are unaffected.
    pub fn match_sheets(&self) -> Vec<Result<SheetMatch>> {
        self.match_sheets_with(&GridComparator::new())
    }

    /// Reconcile every sheet with a caller-supplied comparator.
    pub fn match_sheets_with<M: CellMatcher>(
        &self,
        comparator: &GridComparator<M>,
    ) -> Vec<Result<SheetMatch>> {
        self.workbook
            .sheets()
            .iter()
            .enumerate()
            .map(|(n, sheet)| self.reconcile(n, sheet, comparator))
            .collect()
    }

    fn reconcile<M: CellMatcher>(
        &self,
        page_index: usize,
        sheet: &Sheet,
        comparator: &GridComparator<M>,
    ) -> Result<SheetMatch> {
        let page = self.document.page(page_index)?;
        let grid = PageGrid::infer_with(page, &self.config);

        log::debug!(
            "reconciling sheet {:?} ({}x{}) against page {} ({}x{})",
            sheet.name(),
            sheet.row_count(),
            sheet.column_count(),
            page_index,
            grid.row_count(),
            grid.column_count()
        );

        let diff = comparator.diff(sheet, &grid)?;
        Ok(SheetMatch {
            sheet: sheet.name().to_string(),
            matched: diff.is_none(),
            diff,
        })
    }
}

#[cfg(feature = "pdfium")]
impl DocumentMatcher<crate::pdfium::PdfiumDocument> {
    /// Open a spreadsheet file and a PDF file and pair them for
    /// reconciliation.
    pub fn open<P, Q>(spreadsheet: P, pdf: Q) -> Result<Self>
    where
        P: AsRef<std::path::Path>,
        Q: AsRef<std::path::Path>,
    {
        let workbook = Workbook::open(spreadsheet)?;
        let document = crate::pdfium::PdfiumDocument::open(pdf)?;
        Ok(Self::new(workbook, document))
    }
}
