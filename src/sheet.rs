//! Spreadsheet adapter over calamine.
//!
//! [`Workbook::open`] reads a spreadsheet file (XLSX, XLS, ODS - whatever
//! calamine auto-detects) and materializes every sheet into a [`Sheet`], a
//! [`TableGrid`] view with cell values rendered to strings. The file handle
//! is released when `open` returns; the workbook afterwards is a plain
//! in-memory value.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::{Error, Result};
use crate::grid::{CellMatcher, GridComparator, TableGrid};

/// An open spreadsheet document: an ordered list of named sheets.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Open a spreadsheet file and read all of its sheets in workbook order.
    ///
    /// A missing or unreadable file is reported as [`Error::Io`]; a file
    /// calamine cannot parse as [`Error::Spreadsheet`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        std::fs::metadata(path.as_ref())?;
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| Error::Spreadsheet(format!("failed to open workbook: {e}")))?;

        let names: Vec<String> = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(names.len());
        for name in names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| Error::Spreadsheet(format!("failed to read sheet {name:?}: {e}")))?;
            sheets.push(Sheet { name, range });
        }

        Ok(Self { sheets })
    }

    /// Assemble a workbook from sheets built elsewhere.
    pub fn from_sheets(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    /// The sheets in workbook order.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Look up a sheet by name.
    ///
    /// Returns [`Error::SheetNotFound`] when no sheet has that name.
    pub fn sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    /// Whether the workbook has no sheets.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Whether every sheet of this workbook has an equal counterpart (by
    /// name) in `other`.
    ///
    /// Sheets present in `other` but absent here are not considered.
    pub fn matches<M: CellMatcher>(
        &self,
        other: &Workbook,
        comparator: &GridComparator<M>,
    ) -> Result<bool> {
        for sheet in &self.sheets {
            match other.sheet(&sheet.name) {
                Ok(peer) => {
                    if !comparator.equals(sheet, peer)? {
                        return Ok(false);
                    }
                }
                Err(Error::SheetNotFound(_)) => return Ok(false),
                Err(e) => return Err(e),
            }
        }
        Ok(true)
    }
}

/// One sheet of a spreadsheet document.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    range: Range<Data>,
}

impl Sheet {
    /// Build a sheet directly from a calamine cell range.
    pub fn from_range(name: impl Into<String>, range: Range<Data>) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }

    /// Name of the sheet.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TableGrid for Sheet {
    fn row_count(&self) -> usize {
        self.range.height()
    }

    fn column_count(&self) -> usize {
        self.range.width()
    }

    fn cell(&self, row: usize, col: usize) -> Result<String> {
        if row >= self.row_count() {
            return Err(Error::RowOutOfRange {
                index: row,
                count: self.row_count(),
            });
        }
        if col >= self.column_count() {
            return Err(Error::ColumnOutOfRange {
                index: col,
                count: self.column_count(),
            });
        }
        Ok(self.range.get((row, col)).map(cell_text).unwrap_or_default())
    }
}

/// Render a cell value to a string.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Whole floats render like ints, the rest to two decimals
            if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                format!("{:.2}", f)
            }
        }
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#ERR:{:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_empty() {
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_cell_text_int() {
        assert_eq!(cell_text(&Data::Int(42)), "42");
    }

    #[test]
    fn test_cell_text_float() {
        assert_eq!(cell_text(&Data::Float(1.25)), "1.25");
        assert_eq!(cell_text(&Data::Float(10.0)), "10");
        assert_eq!(cell_text(&Data::Float(1.23456)), "1.23");
    }

    #[test]
    fn test_cell_text_bool() {
        assert_eq!(cell_text(&Data::Bool(true)), "TRUE");
        assert_eq!(cell_text(&Data::Bool(false)), "FALSE");
    }

    #[test]
    fn test_cell_text_string() {
        assert_eq!(cell_text(&Data::String("Hello".to_string())), "Hello");
    }
}
