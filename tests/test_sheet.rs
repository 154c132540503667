//! Integration tests for the spreadsheet adapter.
//!
//! Sheets are assembled from calamine cell ranges directly, the same shape
//! `Workbook::open` produces from a file.

use calamine::{Data, Range};
use gridmatch::sheet::{Sheet, Workbook};
use gridmatch::{Error, GridComparator, TableGrid};

/// Build a 2x2 sheet: ids in the first column, names in the second.
fn people_sheet(name: &str, second_name: &str) -> Sheet {
    let mut range = Range::new((0, 0), (1, 1));
    range.set_value((0, 0), Data::Int(1));
    range.set_value((0, 1), Data::String("Alice".to_string()));
    range.set_value((1, 0), Data::Int(2));
    range.set_value((1, 1), Data::String(second_name.to_string()));
    Sheet::from_range(name, range)
}

// ============================================================================
// Sheet Grid Access
// ============================================================================

#[test]
fn test_sheet_exposes_dimensions_and_cells() {
    let sheet = people_sheet("people", "Bob");
    assert_eq!(sheet.name(), "people");
    assert_eq!(sheet.row_count(), 2);
    assert_eq!(sheet.column_count(), 2);
    assert_eq!(sheet.cell(0, 0).unwrap(), "1");
    assert_eq!(sheet.cell(0, 1).unwrap(), "Alice");
    assert_eq!(sheet.cell(1, 1).unwrap(), "Bob");
}

#[test]
fn test_sheet_cell_access_is_bounds_checked() {
    let sheet = people_sheet("people", "Bob");
    assert!(matches!(
        sheet.cell(2, 0),
        Err(Error::RowOutOfRange { index: 2, count: 2 })
    ));
    assert!(matches!(
        sheet.cell(0, 2),
        Err(Error::ColumnOutOfRange { index: 2, count: 2 })
    ));
}

#[test]
fn test_cell_values_render_as_text() {
    let mut range = Range::new((0, 0), (0, 4));
    range.set_value((0, 0), Data::Float(10.0));
    range.set_value((0, 1), Data::Float(1.25));
    range.set_value((0, 2), Data::Float(1.23456));
    range.set_value((0, 3), Data::Bool(true));
    // (0, 4) left empty
    let sheet = Sheet::from_range("types", range);
    assert_eq!(sheet.cell(0, 0).unwrap(), "10");
    assert_eq!(sheet.cell(0, 1).unwrap(), "1.25");
    assert_eq!(sheet.cell(0, 2).unwrap(), "1.23");
    assert_eq!(sheet.cell(0, 3).unwrap(), "TRUE");
    assert_eq!(sheet.cell(0, 4).unwrap(), "");
}

#[test]
fn test_empty_sheet_has_zero_dimensions() {
    let sheet = Sheet::from_range("empty", Range::empty());
    assert_eq!(sheet.row_count(), 0);
    assert_eq!(sheet.column_count(), 0);
    assert!(sheet.is_empty());
}

// ============================================================================
// Workbook Surface
// ============================================================================

#[test]
fn test_workbook_lists_sheets_in_order() {
    let workbook = Workbook::from_sheets(vec![
        people_sheet("first", "Bob"),
        people_sheet("second", "Dave"),
    ]);
    assert_eq!(workbook.sheet_names(), vec!["first", "second"]);
    assert_eq!(workbook.sheets().len(), 2);
    assert!(!workbook.is_empty());
}

#[test]
fn test_workbook_sheet_lookup_by_name() {
    let workbook = Workbook::from_sheets(vec![people_sheet("people", "Bob")]);
    assert_eq!(workbook.sheet("people").unwrap().name(), "people");
    assert!(matches!(
        workbook.sheet("missing"),
        Err(Error::SheetNotFound(name)) if name == "missing"
    ));
}

#[test]
fn test_workbook_matches_compares_sheets_pairwise() {
    let cmp = GridComparator::new();

    let a = Workbook::from_sheets(vec![people_sheet("people", "Bob")]);
    let b = Workbook::from_sheets(vec![people_sheet("people", "Bob")]);
    assert!(a.matches(&b, &cmp).unwrap());

    let c = Workbook::from_sheets(vec![people_sheet("people", "Dave")]);
    assert!(!a.matches(&c, &cmp).unwrap());

    let d = Workbook::from_sheets(vec![people_sheet("other", "Bob")]);
    assert!(!a.matches(&d, &cmp).unwrap());
}

#[test]
fn test_open_missing_file_is_an_io_error() {
    let err = Workbook::open("/nonexistent/workbook.xlsx").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_workbook_matches_is_numeric_aware() {
    // Ids stored as Int on one side and as zero-padded text on the other
    // still reconcile under the default matcher.
    let mut range = Range::new((0, 0), (0, 0));
    range.set_value((0, 0), Data::String("007".to_string()));
    let padded = Workbook::from_sheets(vec![Sheet::from_range("ids", range)]);

    let mut range = Range::new((0, 0), (0, 0));
    range.set_value((0, 0), Data::Int(7));
    let plain = Workbook::from_sheets(vec![Sheet::from_range("ids", range)]);

    assert!(padded.matches(&plain, &GridComparator::new()).unwrap());
}
