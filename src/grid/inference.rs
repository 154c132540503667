//! Grid reconstruction from positioned words.
//!
//! Given a page's loose collection of positioned words, infer a row/column
//! structure purely from the statistical distribution of word positions:
//! every distinct y-coordinate is a row, and the x-coordinates that occur
//! most often are taken to be column start boundaries. Coordinates are
//! rounded to 3 decimal digits to absorb floating-point jitter in the
//! extracted positions.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::grid::TableGrid;
use crate::page::PageText;

/// Rounding precision: coordinates are bucketed to milliunits.
const BUCKET_SCALE: f64 = 1000.0;

/// Round a coordinate into its integer milliunit bucket.
fn bucket(v: f32) -> i64 {
    (v as f64 * BUCKET_SCALE).round() as i64
}

/// Options for interpreting row offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Drop the first (topmost) row offset before building the table.
    pub skip_header: bool,
    /// Drop the last (bottommost) row offset before building the table.
    pub skip_footer: bool,
}

/// A table reconstructed from the word positions of one page.
///
/// Construction runs three passes over the page: gather x0/y0 frequency
/// statistics, interpret them as row and column offsets, then assemble cell
/// strings row by row. The grid is immutable afterwards.
///
/// Column detection is a heuristic: the x-coordinates whose occurrence count
/// equals the maximum observed count are treated as column starts, on the
/// assumption that a column populated in every row (an ID column, say)
/// recurs once per row and dominates the frequency count. When several
/// x-coordinates tie at the maximum for different structural reasons the
/// heuristic conflates them; that is a known precision limit of the
/// approach, not something this type tries to disambiguate.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGrid {
    rows: Vec<Vec<String>>,
    ncols: usize,
}

impl PageGrid {
    /// Reconstruct a grid from a page with the default configuration.
    ///
    /// A page with zero words produces an empty grid
    /// (`row_count() == column_count() == 0`); construction never fails.
    pub fn infer(page: &PageText) -> Self {
        Self::infer_with(page, &InferenceConfig::default())
    }

    /// Reconstruct a grid from a page, optionally trimming the first/last
    /// row offset.
    pub fn infer_with(page: &PageText, config: &InferenceConfig) -> Self {
        let (xs, ys) = gather_stats(page);
        let row_offsets = detect_row_offsets(&ys, config);
        let col_offsets = detect_col_offsets(&xs);
        let ncols = col_offsets.len();

        log::debug!(
            "inferring grid: {} distinct x buckets, {} distinct y buckets, {} columns, {} candidate rows",
            xs.len(),
            ys.len(),
            ncols,
            row_offsets.len()
        );

        let mut rows = Vec::with_capacity(row_offsets.len());
        for &y in &row_offsets {
            // Gather this row's words keyed by x bucket. A duplicate x within
            // the row overwrites: last-seen-wins.
            let mut row_words: BTreeMap<i64, &str> = BTreeMap::new();
            for word in page.words() {
                if bucket(word.bbox.y) == y {
                    row_words.insert(bucket(word.bbox.x), word.text.as_str());
                }
            }

            // Rows populating fewer x positions than the detected column
            // count are header/footer noise.
            if row_words.len() < ncols {
                log::trace!(
                    "dropping row at y bucket {} ({} of {} columns populated)",
                    y,
                    row_words.len(),
                    ncols
                );
                continue;
            }

            rows.push(partition_row(&row_words, &col_offsets));
        }

        Self { rows, ncols }
    }

    /// The cells of row `n`, left to right.
    ///
    /// Returns [`Error::RowOutOfRange`] when `n >= row_count()`.
    pub fn row(&self, n: usize) -> Result<&[String]> {
        self.rows.get(n).map(Vec::as_slice).ok_or(Error::RowOutOfRange {
            index: n,
            count: self.rows.len(),
        })
    }

    /// Iterate over all cells left to right, top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

impl TableGrid for PageGrid {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.ncols
    }

    fn cell(&self, row: usize, col: usize) -> Result<String> {
        let cells = self.row(row)?;
        if col >= self.ncols {
            return Err(Error::ColumnOutOfRange {
                index: col,
                count: self.ncols,
            });
        }
        // A row can legitimately hold fewer cells than the column count when
        // its trailing columns were empty.
        Ok(cells.get(col).cloned().unwrap_or_default())
    }
}

/// Pass 1: frequency of rounded x0 and y0 over all words on the page.
fn gather_stats(page: &PageText) -> (BTreeMap<i64, usize>, BTreeMap<i64, usize>) {
    let mut xs: BTreeMap<i64, usize> = BTreeMap::new();
    let mut ys: BTreeMap<i64, usize> = BTreeMap::new();
    for word in page.words() {
        *xs.entry(bucket(word.bbox.x)).or_insert(0) += 1;
        *ys.entry(bucket(word.bbox.y)).or_insert(0) += 1;
    }
    (xs, ys)
}

/// Pass 2a: every distinct y bucket is a candidate row, ascending.
fn detect_row_offsets(ys: &BTreeMap<i64, usize>, config: &InferenceConfig) -> Vec<i64> {
    let mut offsets: Vec<i64> = ys.keys().copied().collect();
    if config.skip_header && !offsets.is_empty() {
        offsets.remove(0);
    }
    if config.skip_footer {
        offsets.pop();
    }
    offsets
}

/// Pass 2b: the x buckets tying for maximum frequency are the column starts,
/// ascending.
fn detect_col_offsets(xs: &BTreeMap<i64, usize>) -> Vec<i64> {
    let Some(max) = xs.values().copied().max() else {
        return Vec::new();
    };
    xs.iter()
        .filter(|(_, &count)| count == max)
        .map(|(&x, _)| x)
        .collect()
}

/// Pass 3: split one row's words into cells at the column boundaries.
///
/// Words accumulate into the current cell until an x bucket reaches the next
/// boundary in `col_offsets[1..]`; the cell is then sealed with leading
/// whitespace trimmed. A boundary nothing reached leaves an empty cell so
/// later cells stay column-aligned. A residual non-empty buffer after the
/// last boundary becomes a trailing cell.
fn partition_row(row_words: &BTreeMap<i64, &str>, col_offsets: &[i64]) -> Vec<String> {
    let mut cells = Vec::with_capacity(col_offsets.len());
    let mut boundaries = col_offsets[1..].iter().copied().peekable();
    let mut buf = String::new();

    for (&x, &word) in row_words {
        while boundaries.peek().is_some_and(|&b| x >= b) {
            cells.push(std::mem::take(&mut buf).trim_start().to_string());
            boundaries.next();
        }
        if !buf.is_empty() {
            buf.push(' ');
        }
        buf.push_str(word);
    }
    if !buf.is_empty() {
        cells.push(buf);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::page::Word;

    fn word(text: &str, x: f32, y: f32) -> Word {
        Word::new(Rect::from_points(x, y, x + 20.0, y + 10.0), text, 0, 0, 0)
    }

    fn page(words: Vec<Word>) -> PageText {
        PageText::new(words, Vec::new())
    }

    #[test]
    fn test_bucket_absorbs_jitter() {
        assert_eq!(bucket(72.0001), bucket(72.0004));
        assert_ne!(bucket(72.0001), bucket(72.0006));
    }

    #[test]
    fn test_empty_page_yields_empty_grid() {
        let grid = PageGrid::infer(&page(Vec::new()));
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.column_count(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_two_by_two_grid() {
        let grid = PageGrid::infer(&page(vec![
            word("1", 72.0, 100.0),
            word("Alice", 200.0, 100.0),
            word("2", 72.0, 130.0),
            word("Bob", 200.0, 130.0),
        ]));
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.row(0).unwrap(), ["1", "Alice"]);
        assert_eq!(grid.row(1).unwrap(), ["2", "Bob"]);
    }

    #[test]
    fn test_multi_word_cell_concatenates() {
        let grid = PageGrid::infer(&page(vec![
            word("1", 72.0, 100.0),
            word("Alice", 200.0, 100.0),
            word("Smith", 230.0, 100.0),
            word("2", 72.0, 130.0),
            word("Bob", 200.0, 130.0),
        ]));
        // x=230 occurs once, below the max frequency of 2, so it is not a
        // column start; "Smith" folds into the second cell.
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.row(0).unwrap(), ["1", "Alice Smith"]);
    }

    #[test]
    fn test_duplicate_x_in_row_last_seen_wins() {
        let grid = PageGrid::infer(&page(vec![
            word("first", 72.0, 100.0),
            word("second", 72.0, 100.0),
            word("a", 72.0, 130.0),
        ]));
        assert_eq!(grid.row(0).unwrap(), ["second"]);
    }

    #[test]
    fn test_row_index_out_of_range() {
        let grid = PageGrid::infer(&page(vec![word("a", 72.0, 100.0)]));
        assert!(matches!(
            grid.row(1),
            Err(Error::RowOutOfRange { index: 1, count: 1 })
        ));
    }

    #[test]
    fn test_detect_col_offsets_keeps_frequency_ties() {
        let mut xs = BTreeMap::new();
        xs.insert(72_000, 3);
        xs.insert(200_000, 3);
        xs.insert(150_000, 1);
        assert_eq!(detect_col_offsets(&xs), vec![72_000, 200_000]);
    }

    #[test]
    fn test_skip_header_and_footer_trim_offsets() {
        let mut ys = BTreeMap::new();
        ys.insert(50_000, 1);
        ys.insert(100_000, 2);
        ys.insert(700_000, 1);
        let config = InferenceConfig {
            skip_header: true,
            skip_footer: true,
        };
        assert_eq!(detect_row_offsets(&ys, &config), vec![100_000]);
    }
}
