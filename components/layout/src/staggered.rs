//! Staggered grid that deals children into rows round-robin.

use alloc::{vec, vec::Vec};
use core::num::NonZeroUsize;

use crate::{
    ConfigurationIssue, Layout, LayoutError, LayoutResult, Measurable, Measured, Point, Rect,
    Size, SizeConstraint, measure_child,
};

/// Row count used by [`StaggeredGridLayout::default`].
pub const DEFAULT_ROWS: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(rows) => rows,
    None => unreachable!(),
};

/// Lays children out in a fixed number of horizontal rows.
///
/// Child `i` goes to row `i % rows`, regardless of its size. Each row is as
/// tall as its tallest child, rows are stacked top to bottom in row order, and
/// within a row children run left to right in input order.
///
/// Rows keep independent horizontal cursors: the `n`th child of one row is not
/// aligned with the `n`th child of another.
///
/// # Layout Behavior
///
/// - **Width:** widest row (sum of its children's widths), clamped into the
///   constraint; `min_width` when there are no children
/// - **Height:** sum of row heights, clamped into the constraint
/// - **Overflow:** clamping never feeds back into measurement
///
/// # Examples
///
/// ```ignore
/// let chips = StaggeredGridLayout::new(3)?;
/// let result = chips.layout(&children, SizeConstraint::unbounded())?;
/// ```
//
// ═══════════════════════════════════════════════════════════════════════════
// INTERNAL: Layout Contract for Host Implementers
// ═══════════════════════════════════════════════════════════════════════════
//
// Measurement: every child gets the grid's full incoming constraint
// Rows with no children: zero width, zero height, contribute nothing
// Placement: (row_x[row], row_y[row]), row_x advanced by child width
//
// ═══════════════════════════════════════════════════════════════════════════
//
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaggeredGridLayout {
    #[cfg_attr(feature = "serde", serde(default = "default_rows"))]
    rows: NonZeroUsize,
}

#[cfg(feature = "serde")]
const fn default_rows() -> NonZeroUsize {
    DEFAULT_ROWS
}

impl Default for StaggeredGridLayout {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS }
    }
}

impl StaggeredGridLayout {
    /// Creates a grid with `rows` rows.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfiguration`] if `rows` is zero.
    pub const fn new(rows: usize) -> Result<Self, LayoutError> {
        match NonZeroUsize::new(rows) {
            Some(rows) => Ok(Self { rows }),
            None => Err(LayoutError::InvalidConfiguration(
                ConfigurationIssue::ZeroRows,
            )),
        }
    }

    /// Creates a grid from an already-validated row count.
    #[must_use]
    pub const fn with_rows(rows: NonZeroUsize) -> Self {
        Self { rows }
    }

    /// Returns the configured row count.
    #[must_use]
    pub const fn rows(&self) -> NonZeroUsize {
        self.rows
    }
}

/// Per-row aggregates gathered during the measure pass.
#[derive(Debug, Clone, Copy, Default)]
struct RowExtent {
    width: u32,
    height: u32,
}

impl Layout for StaggeredGridLayout {
    fn layout(
        &self,
        children: &[&dyn Measurable],
        constraints: SizeConstraint,
    ) -> Result<LayoutResult, LayoutError> {
        let num_rows = self.rows.get();
        if num_rows > children.len() {
            tracing::debug!(
                rows = num_rows,
                children = children.len(),
                "staggered grid has more rows than children"
            );
        }

        // Rows past the child count stay empty, so only the used ones are kept.
        let used_rows = num_rows.min(children.len());

        // Measure once, folding each child into its row as we go.
        let mut rows = vec![RowExtent::default(); used_rows];
        let measurements: Vec<Measured> = children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let measured = measure_child(*child, constraints);
                let row = &mut rows[index % num_rows];
                row.width = row.width.saturating_add(measured.width());
                row.height = row.height.max(measured.height());
                measured
            })
            .collect();

        let width = if children.is_empty() {
            constraints.min_width()
        } else {
            constraints.constrain_width(rows.iter().map(|row| row.width).max().unwrap_or(0))
        };
        let height = constraints.constrain_height(
            rows.iter()
                .fold(0_u32, |total, row| total.saturating_add(row.height)),
        );

        let mut row_y = Vec::with_capacity(used_rows);
        let mut cursor_y: u32 = 0;
        for row in &rows {
            row_y.push(cursor_y);
            cursor_y = cursor_y.saturating_add(row.height);
        }

        let mut row_x = vec![0_u32; used_rows];
        let placements = measurements
            .iter()
            .enumerate()
            .map(|(index, measured)| {
                let row = index % num_rows;
                let origin = Point::new(row_x[row], row_y[row]);
                row_x[row] = row_x[row].saturating_add(measured.width());
                Rect::new(origin, measured.size())
            })
            .collect();

        tracing::trace!(
            rows = num_rows,
            children = children.len(),
            width,
            height,
            "staggered grid layout"
        );

        Ok(LayoutResult::new(Size::new(width, height), placements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedSize;

    #[test]
    fn test_staggered_grid_round_robin() {
        let chip = FixedSize::new(20, 10);
        let children: Vec<&dyn Measurable> = vec![&chip, &chip, &chip, &chip];
        let constraints = SizeConstraint::new(0, 1000, 0, 1000).unwrap();

        let result = StaggeredGridLayout::new(2)
            .unwrap()
            .layout(&children, constraints)
            .unwrap();

        assert_eq!(result.size(), Size::new(40, 20));
        assert_eq!(result.placement(0), Some(Point::new(0, 0)));
        assert_eq!(result.placement(1), Some(Point::new(0, 10)));
        assert_eq!(result.placement(2), Some(Point::new(20, 0)));
        assert_eq!(result.placement(3), Some(Point::new(20, 10)));
    }

    #[test]
    fn test_staggered_grid_zero_rows() {
        assert_eq!(
            StaggeredGridLayout::new(0),
            Err(LayoutError::InvalidConfiguration(ConfigurationIssue::ZeroRows))
        );
    }

    #[test]
    fn test_staggered_grid_default_rows() {
        assert_eq!(StaggeredGridLayout::default().rows().get(), 3);
    }

    #[test]
    fn test_staggered_grid_row_height_is_tallest_child() {
        let short = FixedSize::new(10, 5);
        let tall = FixedSize::new(10, 30);
        let medium = FixedSize::new(10, 12);
        // Row 0: short, medium. Row 1: tall.
        let children: Vec<&dyn Measurable> = vec![&short, &tall, &medium];

        let result = StaggeredGridLayout::new(2)
            .unwrap()
            .layout(&children, SizeConstraint::unbounded())
            .unwrap();

        assert_eq!(result.height(), 42); // 12 + 30
        assert_eq!(result.width(), 20);
        assert_eq!(result.placement(1), Some(Point::new(0, 12)));
        assert_eq!(result.placement(2), Some(Point::new(10, 0)));
    }

    #[test]
    fn test_staggered_grid_more_rows_than_children() {
        let chip = FixedSize::new(20, 10);
        let children: Vec<&dyn Measurable> = vec![&chip, &chip];

        let result = StaggeredGridLayout::new(5)
            .unwrap()
            .layout(&children, SizeConstraint::unbounded())
            .unwrap();

        assert_eq!(result.size(), Size::new(20, 20));
        assert_eq!(result.placement(1), Some(Point::new(0, 10)));
    }

    #[test]
    fn test_staggered_grid_huge_row_count() {
        let chip = FixedSize::new(20, 10);
        let children: Vec<&dyn Measurable> = vec![&chip, &chip];

        let result = StaggeredGridLayout::new(usize::MAX)
            .unwrap()
            .layout(&children, SizeConstraint::unbounded())
            .unwrap();

        assert_eq!(result.size(), Size::new(20, 20));
        assert_eq!(result.placement(1), Some(Point::new(0, 10)));
    }

    #[test]
    fn test_staggered_grid_empty_uses_min_width() {
        let constraints = SizeConstraint::new(15, 100, 7, 100).unwrap();

        let result = StaggeredGridLayout::default()
            .layout(&[], constraints)
            .unwrap();

        assert_eq!(result.size(), Size::new(15, 7));
        assert!(result.is_empty());
    }

    #[test]
    fn test_staggered_grid_clamps_without_remeasuring() {
        let chip = FixedSize::new(60, 40);
        let children: Vec<&dyn Measurable> = vec![&chip, &chip, &chip, &chip];
        let constraints = SizeConstraint::new(0, 100, 0, 50).unwrap();

        let result = StaggeredGridLayout::new(2)
            .unwrap()
            .layout(&children, constraints)
            .unwrap();

        // Rows are 120 wide and 80 tall in total, clamped to 100 x 50.
        assert_eq!(result.size(), Size::new(100, 50));
        // Placement still follows the unclamped row extents.
        assert_eq!(result.placement(3), Some(Point::new(60, 40)));
    }
}
