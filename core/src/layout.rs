//! Layout primitives and geometry types for the `trellis` layout kernel.
//!
//! # Integer Pixels
//!
//! All layout values are whole, non-negative pixels. The host renderer is
//! responsible for any density conversion before it hands constraints to a
//! layout and after it reads placements back.
//!
//! # Single Pass
//!
//! A layout pass measures every child exactly once against a
//! [`SizeConstraint`], aggregates the [`Measured`] results into its own size,
//! and then assigns each child an offset. No child is placed before its size
//! is known, and no child is re-measured.
//!
//! ```ignore
//! let constraints = SizeConstraint::loose(100, 100);
//! let result = ColumnLayout.layout(&children, constraints)?;
//! for rect in result.placements() {
//!     host.place(rect.origin(), rect.size());
//! }
//! ```

use core::fmt::Debug;

use alloc::vec::Vec;

use crate::error::{ConfigurationIssue, LayoutError};

// ============================================================================
// SizeConstraint
// ============================================================================

/// The min/max width and height envelope a layout pass must respect.
///
/// A constraint can only be built through validating constructors, so
/// `min <= max` always holds on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SizeConstraint {
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
}

impl SizeConstraint {
    /// Marks an unbounded maximum on either axis.
    pub const INFINITY: u32 = u32::MAX;

    /// Creates a constraint from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfiguration`] if `min > max` on either
    /// axis.
    pub const fn new(
        min_width: u32,
        max_width: u32,
        min_height: u32,
        max_height: u32,
    ) -> Result<Self, LayoutError> {
        if min_width > max_width {
            return Err(LayoutError::InvalidConfiguration(
                ConfigurationIssue::WidthRange {
                    min: min_width,
                    max: max_width,
                },
            ));
        }
        if min_height > max_height {
            return Err(LayoutError::InvalidConfiguration(
                ConfigurationIssue::HeightRange {
                    min: min_height,
                    max: max_height,
                },
            ));
        }
        Ok(Self {
            min_width,
            max_width,
            min_height,
            max_height,
        })
    }

    /// A constraint with zero minimums and the given maximums.
    #[must_use]
    pub const fn loose(max_width: u32, max_height: u32) -> Self {
        Self {
            min_width: 0,
            max_width,
            min_height: 0,
            max_height,
        }
    }

    /// A constraint that only admits exactly `width` x `height`.
    #[must_use]
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// A constraint with no lower bound and no upper bound.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::loose(Self::INFINITY, Self::INFINITY)
    }

    /// Returns the minimum width.
    #[must_use]
    pub const fn min_width(&self) -> u32 {
        self.min_width
    }

    /// Returns the maximum width.
    #[must_use]
    pub const fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Returns the minimum height.
    #[must_use]
    pub const fn min_height(&self) -> u32 {
        self.min_height
    }

    /// Returns the maximum height.
    #[must_use]
    pub const fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Returns true if the maximum width is finite.
    #[must_use]
    pub const fn has_bounded_width(&self) -> bool {
        self.max_width != Self::INFINITY
    }

    /// Returns true if the maximum height is finite.
    #[must_use]
    pub const fn has_bounded_height(&self) -> bool {
        self.max_height != Self::INFINITY
    }

    /// Clamps a width into `[min_width, max_width]`.
    #[must_use]
    pub const fn constrain_width(&self, width: u32) -> u32 {
        clamp(width, self.min_width, self.max_width)
    }

    /// Clamps a height into `[min_height, max_height]`.
    #[must_use]
    pub const fn constrain_height(&self, height: u32) -> u32 {
        clamp(height, self.min_height, self.max_height)
    }

    /// Clamps both dimensions of `size` into this constraint.
    #[must_use]
    pub const fn constrain(&self, size: Size) -> Size {
        Size::new(
            self.constrain_width(size.width),
            self.constrain_height(size.height),
        )
    }

    /// Returns true if `size` already lies within this constraint.
    #[must_use]
    pub const fn contains(&self, size: Size) -> bool {
        size.width >= self.min_width
            && size.width <= self.max_width
            && size.height >= self.min_height
            && size.height <= self.max_height
    }
}

impl Default for SizeConstraint {
    fn default() -> Self {
        Self::unbounded()
    }
}

// `Ord::clamp` is not const.
const fn clamp(value: u32, min: u32, max: u32) -> u32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

// ============================================================================
// Measured
// ============================================================================

/// What a child reported when it was measured against a [`SizeConstraint`].
///
/// Some children (text, mostly) expose a first baseline: the distance from
/// their own top edge to the first line of text. Others have none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Measured {
    size: Size,
    first_baseline: Option<u32>,
}

impl Measured {
    /// A measurement without baseline metrics.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            first_baseline: None,
        }
    }

    /// Attaches a first baseline, measured from the child's top edge.
    #[must_use]
    pub const fn with_baseline(mut self, first_baseline: u32) -> Self {
        self.first_baseline = Some(first_baseline);
        self
    }

    /// Returns the measured size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the measured width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.size.width
    }

    /// Returns the measured height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.size.height
    }

    /// Returns the first baseline, if the child has one.
    #[must_use]
    pub const fn first_baseline(&self) -> Option<u32> {
        self.first_baseline
    }

    /// Coerces the size into `constraints`, keeping the baseline untouched.
    #[must_use]
    pub const fn coerce(self, constraints: &SizeConstraint) -> Self {
        Self {
            size: constraints.constrain(self.size),
            first_baseline: self.first_baseline,
        }
    }
}

// ============================================================================
// Measurable Trait - Child Proxy
// ============================================================================

/// A child that can report its size for a given constraint.
///
/// Layouts call [`measure`](Self::measure) at most once per pass. A child is
/// expected to answer within the constraint; layouts coerce answers that fall
/// outside it.
pub trait Measurable {
    /// Measures this child against `constraints`.
    fn measure(&self, constraints: SizeConstraint) -> Measured;
}

impl<M: Measurable + ?Sized> Measurable for &M {
    fn measure(&self, constraints: SizeConstraint) -> Measured {
        (**self).measure(constraints)
    }
}

/// Measures `child` once and coerces the answer into `constraints`.
///
/// Every layout in the kernel funnels its measurements through here.
pub fn measure_child(child: &dyn Measurable, constraints: SizeConstraint) -> Measured {
    let measured = child.measure(constraints);
    if !constraints.contains(measured.size()) {
        tracing::debug!(
            width = measured.width(),
            height = measured.height(),
            ?constraints,
            "child measured outside its constraint; coercing"
        );
    }
    measured.coerce(&constraints)
}

// ============================================================================
// Layout Trait - Container Layout
// ============================================================================

/// A single-pass layout algorithm.
///
/// Implementations measure each child once, compute their own size, and
/// place every child. Results are a pure function of the inputs: calling
/// `layout` twice with the same children and constraints yields equal
/// results, and nothing is shared between calls.
pub trait Layout: Debug {
    /// Measures and places `children` within `constraints`.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the layout cannot be performed with the
    /// given children. No partial result is produced.
    fn layout(
        &self,
        children: &[&dyn Measurable],
        constraints: SizeConstraint,
    ) -> Result<LayoutResult, LayoutError>;
}

/// Output of one layout pass.
///
/// `placements()[i]` always belongs to `children[i]` of the call that
/// produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct LayoutResult {
    size: Size,
    placements: Vec<Rect>,
}

impl LayoutResult {
    /// Bundles a container size with per-child rectangles.
    #[must_use]
    pub const fn new(size: Size, placements: Vec<Rect>) -> Self {
        Self { size, placements }
    }

    /// The container's own measured size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Container width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.size.width
    }

    /// Container height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.size.height
    }

    /// Each child's rectangle, in input order.
    #[must_use]
    pub fn placements(&self) -> &[Rect] {
        &self.placements
    }

    /// Top-left offset of the child at `index`.
    #[must_use]
    pub fn placement(&self, index: usize) -> Option<Point> {
        self.placements.get(index).map(Rect::origin)
    }

    /// Number of placed children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if no child was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Consumes the result, returning the child rectangles.
    #[must_use]
    pub fn into_placements(self) -> Vec<Rect> {
        self.placements
    }
}

// ============================================================================
// Geometry Types
// ============================================================================

/// Axis-aligned rectangle relative to its container's origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle at (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.size.height
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> u32 {
        self.origin.x.saturating_add(self.size.width)
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> u32 {
        self.origin.y.saturating_add(self.size.height)
    }
}

/// Two-dimensional size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// The width in pixels.
    pub width: u32,
    /// The height in pixels.
    pub height: u32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    /// Returns true if both dimensions are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// Offset of a child's top-left corner from its container's origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The x-coordinate in pixels.
    pub x: u32,
    /// The y-coordinate in pixels.
    pub y: u32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Oversized;

    impl Measurable for Oversized {
        fn measure(&self, _constraints: SizeConstraint) -> Measured {
            Measured::new(500, 2).with_baseline(1)
        }
    }

    #[test]
    fn test_constraint_rejects_inverted_ranges() {
        assert_eq!(
            SizeConstraint::new(10, 5, 0, 0),
            Err(LayoutError::InvalidConfiguration(
                ConfigurationIssue::WidthRange { min: 10, max: 5 }
            ))
        );
        assert_eq!(
            SizeConstraint::new(0, 5, 7, 6),
            Err(LayoutError::InvalidConfiguration(
                ConfigurationIssue::HeightRange { min: 7, max: 6 }
            ))
        );
        assert!(SizeConstraint::new(5, 5, 0, 0).is_ok());
    }

    #[test]
    fn test_constrain() {
        let constraints = SizeConstraint::new(10, 100, 20, 40).unwrap();

        assert_eq!(constraints.constrain(Size::new(5, 50)), Size::new(10, 40));
        assert_eq!(constraints.constrain(Size::new(50, 30)), Size::new(50, 30));
        assert!(constraints.contains(Size::new(10, 20)));
        assert!(!constraints.contains(Size::new(101, 20)));
    }

    #[test]
    fn test_unbounded() {
        let constraints = SizeConstraint::unbounded();

        assert!(!constraints.has_bounded_width());
        assert!(!constraints.has_bounded_height());
        assert!(SizeConstraint::loose(10, 10).has_bounded_width());
    }

    #[test]
    fn test_measure_child_coerces_and_keeps_baseline() {
        let measured = measure_child(&Oversized, SizeConstraint::new(0, 100, 10, 20).unwrap());

        assert_eq!(measured.size(), Size::new(100, 10));
        assert_eq!(measured.first_baseline(), Some(1));
    }

    #[test]
    fn test_rect_geometry() {
        let rect = Rect::new(Point::new(10, 20), Size::new(100, 50));

        assert_eq!(rect.max_x(), 110);
        assert_eq!(rect.max_y(), 70);
        assert_eq!(Rect::new(Point::new(u32::MAX, 0), Size::new(1, 1)).max_x(), u32::MAX);
    }

    #[test]
    fn test_layout_result_accessors() {
        let result = LayoutResult::new(
            Size::new(10, 10),
            alloc::vec![Rect::new(Point::new(0, 4), Size::new(2, 2))],
        );

        assert_eq!(result.placement(0), Some(Point::new(0, 4)));
        assert_eq!(result.placement(1), None);
        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());
    }
}
