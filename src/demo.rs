//! The topic chip grid: a staggered grid of labelled chips inside a
//! horizontally scrolling row.
//!
//! Chips are modelled as [`FixedSize`] leaves whose width follows the label
//! length, which is enough to drive [`StaggeredGridLayout`] the way a real
//! text measurer would.

use trellis_layout::{
    FixedSize, Layout, LayoutError, LayoutResult, Measurable, SizeConstraint, StaggeredGridLayout,
};

/// Topics shown in the chip grid.
pub const TOPICS: [&str; 19] = [
    "Arts & Crafts",
    "Beauty",
    "Books",
    "Business",
    "Comics",
    "Culinary",
    "Design",
    "Fashion",
    "Film",
    "History",
    "Maths",
    "Music",
    "People",
    "Philosophy",
    "Religion",
    "Social sciences",
    "Technology",
    "TV",
    "Writing",
];

/// Width of one glyph of chip label text.
pub const GLYPH_WIDTH: u32 = 8;
/// Height of one line of chip label text.
pub const LINE_HEIGHT: u32 = 20;
/// Margin around each chip.
pub const CHIP_MARGIN: u32 = 8;
/// Horizontal padding inside the chip border.
pub const CHIP_PADDING_H: u32 = 8;
/// Vertical padding inside the chip border.
pub const CHIP_PADDING_V: u32 = 4;
/// Side of the colored swatch before the label.
pub const SWATCH_SIZE: u32 = 16;
/// Gap between swatch and label.
pub const SWATCH_GAP: u32 = 4;

/// Builds the leaf for one chip.
#[must_use]
pub fn chip(label: &str) -> FixedSize {
    let glyphs = u32::try_from(label.chars().count()).unwrap_or(u32::MAX);
    let label_width = glyphs.saturating_mul(GLYPH_WIDTH);
    let width = label_width
        .saturating_add(SWATCH_SIZE + SWATCH_GAP)
        .saturating_add(2 * (CHIP_PADDING_H + CHIP_MARGIN));
    let height = LINE_HEIGHT.max(SWATCH_SIZE) + 2 * (CHIP_PADDING_V + CHIP_MARGIN);
    FixedSize::new(width, height)
}

/// Lays the [`TOPICS`] chips out in a staggered grid of `rows` rows.
///
/// The grid sits in a horizontally scrolling row, so it gets unbounded width
/// and at most `max_height`.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidConfiguration`] if `rows` is zero.
pub fn chip_grid(rows: usize, max_height: u32) -> Result<LayoutResult, LayoutError> {
    let chips: Vec<FixedSize> = TOPICS.iter().map(|topic| chip(topic)).collect();
    let children: Vec<&dyn Measurable> = chips.iter().map(|leaf| leaf as &dyn Measurable).collect();
    StaggeredGridLayout::new(rows)?
        .layout(&children, SizeConstraint::loose(SizeConstraint::INFINITY, max_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip_height() -> u32 {
        chip("TV").measure(SizeConstraint::unbounded()).height()
    }

    #[test]
    fn test_chip_size_follows_label() {
        let short = chip("TV").measure(SizeConstraint::unbounded());
        let long = chip("Social sciences").measure(SizeConstraint::unbounded());

        assert_eq!(short.height(), long.height());
        assert_eq!(long.width() - short.width(), 13 * GLYPH_WIDTH);
    }

    #[test]
    fn test_topics_fill_three_rows() {
        let result = chip_grid(3, 1000).unwrap();

        assert_eq!(result.len(), TOPICS.len());
        assert_eq!(result.height(), 3 * chip_height());

        // Every row starts at the leading edge.
        for (row, band_y) in [0, chip_height(), 2 * chip_height()].into_iter().enumerate() {
            assert_eq!(result.placements()[row].x(), 0);
            assert_eq!(result.placements()[row].y(), band_y);
        }

        // The grid is as wide as its widest row.
        let widest = (0..3)
            .map(|row| {
                TOPICS
                    .iter()
                    .skip(row)
                    .step_by(3)
                    .map(|topic| chip(topic).measure(SizeConstraint::unbounded()).width())
                    .sum::<u32>()
            })
            .max()
            .unwrap();
        assert_eq!(result.width(), widest);
    }

    #[test]
    fn test_grid_height_is_clamped_by_viewport() {
        let result = chip_grid(3, 100).unwrap();

        assert_eq!(result.height(), 100);
        // Placement still uses the unclamped row bands.
        assert_eq!(result.placements()[2].y(), 2 * chip_height());
    }

    #[test]
    fn test_zero_rows_is_an_error() {
        assert!(chip_grid(0, 100).is_err());
    }
}
