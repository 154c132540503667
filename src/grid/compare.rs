//! Grid comparison with pluggable per-cell equality.
//!
//! Two grids are equal when their dimensions match and every cell pair
//! satisfies the comparator's [`CellMatcher`]. The default matcher is
//! numeric-aware: cells that both parse as integers compare as integers, so
//! `"007"` equals `"7"`. That is a minimal baseline - deployments wanting
//! case-insensitive, whitespace-normalizing, or locale-aware comparison
//! supply their own matcher.

use serde::Serialize;

use crate::error::Result;
use crate::grid::TableGrid;

/// Per-cell equality policy.
///
/// Any `Fn(&str, &str) -> bool` closure is a matcher, so ad hoc policies can
/// be passed without a named type.
pub trait CellMatcher {
    /// Whether two cell values are considered equal.
    fn cells_match(&self, a: &str, b: &str) -> bool;
}

impl<F> CellMatcher for F
where
    F: Fn(&str, &str) -> bool,
{
    fn cells_match(&self, a: &str, b: &str) -> bool {
        self(a, b)
    }
}

/// The default matcher: integer-aware string comparison.
///
/// If both cells parse as `i64` (surrounding whitespace ignored) they compare
/// numerically; otherwise they compare as exact strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericAware;

impl CellMatcher for NumericAware {
    fn cells_match(&self, a: &str, b: &str) -> bool {
        match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
            (Ok(x), Ok(y)) => x == y,
            _ => a == b,
        }
    }
}

/// The first difference found between two grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridDiff {
    /// Row or column counts differ; no cells were compared.
    Shape {
        /// Row count of the left grid
        left_rows: usize,
        /// Column count of the left grid
        left_cols: usize,
        /// Row count of the right grid
        right_rows: usize,
        /// Column count of the right grid
        right_cols: usize,
    },
    /// The first cell pair the matcher rejected, in row-major order.
    Cell {
        /// Row of the mismatching cell
        row: usize,
        /// Column of the mismatching cell
        col: usize,
        /// Value in the left grid
        left: String,
        /// Value in the right grid
        right: String,
    },
}

/// Compares two [`TableGrid`]s for structural and content equality.
#[derive(Debug, Clone, Default)]
pub struct GridComparator<M = NumericAware> {
    matcher: M,
}

impl GridComparator<NumericAware> {
    /// A comparator with the default numeric-aware matcher.
    pub fn new() -> Self {
        Self {
            matcher: NumericAware,
        }
    }
}

impl<M: CellMatcher> GridComparator<M> {
    /// A comparator with a caller-supplied per-cell matcher.
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    /// The first difference between two grids, or `None` when they are equal.
    ///
    /// Dimensions are checked first; on a mismatch no cells are compared and
    /// a [`GridDiff::Shape`] is reported. Otherwise both grids are walked in
    /// lock-step row-major order and the first rejected cell pair is
    /// reported. A structural or content mismatch is an outcome, not an
    /// error; only cell access failures propagate as errors.
    pub fn diff<A, B>(&self, left: &A, right: &B) -> Result<Option<GridDiff>>
    where
        A: TableGrid + ?Sized,
        B: TableGrid + ?Sized,
    {
        if left.row_count() != right.row_count() || left.column_count() != right.column_count() {
            return Ok(Some(GridDiff::Shape {
                left_rows: left.row_count(),
                left_cols: left.column_count(),
                right_rows: right.row_count(),
                right_cols: right.column_count(),
            }));
        }

        for row in 0..left.row_count() {
            for col in 0..left.column_count() {
                let a = left.cell(row, col)?;
                let b = right.cell(row, col)?;
                if !self.matcher.cells_match(&a, &b) {
                    return Ok(Some(GridDiff::Cell {
                        row,
                        col,
                        left: a,
                        right: b,
                    }));
                }
            }
        }

        Ok(None)
    }

    /// Whether two grids are equal under this comparator's matcher.
    pub fn equals<A, B>(&self, left: &A, right: &B) -> Result<bool>
    where
        A: TableGrid + ?Sized,
        B: TableGrid + ?Sized,
    {
        Ok(self.diff(left, right)?.is_none())
    }
}
