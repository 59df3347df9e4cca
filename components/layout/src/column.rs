//! Single-column layout that stacks children top to bottom.

use alloc::vec::Vec;

use crate::{
    Layout, LayoutError, LayoutResult, Measurable, Point, Rect, Size, SizeConstraint,
    measure_child,
};

/// Stacks children vertically, each at `x = 0`, in input order.
///
/// Every child is measured against the column's full incoming constraint;
/// nothing is narrowed per child. The column always fills the maximum size it
/// is offered rather than shrinking to fit its children.
///
/// # Layout Behavior
///
/// - **Size:** `max_width` x `max_height` of the incoming constraint
/// - **Placement:** each child's `y` is the sum of the heights above it
/// - **Overflow:** children past `max_height` are still placed; clipping is
///   left to the host
///
/// # Examples
///
/// ```ignore
/// let result = ColumnLayout.layout(&[&title, &subtitle], SizeConstraint::loose(320, 480))?;
/// assert_eq!(result.placement(1), Some(Point::new(0, title_height)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout;

impl Layout for ColumnLayout {
    fn layout(
        &self,
        children: &[&dyn Measurable],
        constraints: SizeConstraint,
    ) -> Result<LayoutResult, LayoutError> {
        let size = Size::new(constraints.max_width(), constraints.max_height());

        let mut placements = Vec::with_capacity(children.len());
        let mut cursor_y: u32 = 0;

        for child in children {
            let measured = measure_child(*child, constraints);
            placements.push(Rect::new(Point::new(0, cursor_y), measured.size()));
            cursor_y = cursor_y.saturating_add(measured.height());
        }

        tracing::trace!(
            children = children.len(),
            width = size.width,
            height = size.height,
            content_height = cursor_y,
            "column layout"
        );

        Ok(LayoutResult::new(size, placements))
    }
}
