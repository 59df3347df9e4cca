//! Padding measured from the top edge to a child's first text baseline.

use alloc::vec;

use crate::{
    ConfigurationIssue, Layout, LayoutError, LayoutResult, Measurable, Point, Rect, Size,
    SizeConstraint, measure_child,
};

/// Offsets a single child so its first baseline sits `distance` pixels below
/// the container's top edge.
///
/// Regular top padding is measured to the child's top edge, which puts text
/// at different heights depending on its font metrics. This layout pads to
/// the baseline instead.
///
/// The container is as wide as the child and as tall as the child plus the
/// offset. If the baseline already sits deeper than `distance`, the child is
/// placed at the top edge.
///
/// # Examples
///
/// ```ignore
/// let padded = FirstBaselineToTop::new(32).layout(&[&label], constraints)?;
/// assert_eq!(padded.placement(0), Some(Point::new(0, 32 - label_baseline)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirstBaselineToTop {
    distance: u32,
}

impl FirstBaselineToTop {
    /// Creates a modifier that places the first baseline `distance` pixels
    /// from the top.
    #[must_use]
    pub const fn new(distance: u32) -> Self {
        Self { distance }
    }

    /// Returns the configured baseline distance.
    #[must_use]
    pub const fn distance(&self) -> u32 {
        self.distance
    }

    /// Measures and offsets one child.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MissingBaseline`] if the child reports no first
    /// baseline.
    pub fn layout_child(
        &self,
        child: &dyn Measurable,
        constraints: SizeConstraint,
    ) -> Result<LayoutResult, LayoutError> {
        let measured = measure_child(child, constraints);
        let baseline = measured
            .first_baseline()
            .ok_or(LayoutError::MissingBaseline)?;

        let offset_y = if baseline > self.distance {
            tracing::warn!(
                baseline,
                distance = self.distance,
                "first baseline is below the requested distance; placing at top"
            );
            0
        } else {
            self.distance - baseline
        };

        let size = constraints.constrain(Size::new(
            measured.width(),
            measured.height().saturating_add(offset_y),
        ));

        tracing::trace!(
            offset_y,
            width = size.width,
            height = size.height,
            "first baseline to top"
        );

        Ok(LayoutResult::new(
            size,
            vec![Rect::new(Point::new(0, offset_y), measured.size())],
        ))
    }
}

impl Layout for FirstBaselineToTop {
    fn layout(
        &self,
        children: &[&dyn Measurable],
        constraints: SizeConstraint,
    ) -> Result<LayoutResult, LayoutError> {
        match children {
            [] => Ok(LayoutResult::new(
                Size::new(constraints.min_width(), constraints.min_height()),
                vec![],
            )),
            [child] => self.layout_child(*child, constraints),
            _ => Err(LayoutError::InvalidConfiguration(
                ConfigurationIssue::SingleChild {
                    found: children.len(),
                },
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::FixedSize;

    #[test]
    fn test_baseline_offset() {
        let text = FixedSize::new(80, 20).with_baseline(15);

        let result = FirstBaselineToTop::new(32)
            .layout_child(&text, SizeConstraint::unbounded())
            .unwrap();

        assert_eq!(result.placement(0), Some(Point::new(0, 17)));
        assert_eq!(result.size(), Size::new(80, 37)); // 20 + 17
    }

    #[test]
    fn test_missing_baseline() {
        let icon = FixedSize::new(24, 24);

        assert_eq!(
            FirstBaselineToTop::new(32).layout_child(&icon, SizeConstraint::unbounded()),
            Err(LayoutError::MissingBaseline)
        );
    }

    #[test]
    fn test_baseline_deeper_than_distance() {
        let text = FixedSize::new(80, 40).with_baseline(30);

        let result = FirstBaselineToTop::new(10)
            .layout_child(&text, SizeConstraint::unbounded())
            .unwrap();

        assert_eq!(result.placement(0), Some(Point::zero()));
        assert_eq!(result.height(), 40);
    }

    #[test]
    fn test_baseline_without_children() {
        let constraints = SizeConstraint::new(5, 50, 7, 50).unwrap();

        let result = FirstBaselineToTop::new(32).layout(&[], constraints).unwrap();

        assert_eq!(result.size(), Size::new(5, 7));
        assert!(result.is_empty());
    }

    #[test]
    fn test_baseline_rejects_several_children() {
        let text = FixedSize::new(80, 20).with_baseline(15);
        let children: Vec<&dyn Measurable> = vec![&text, &text];

        assert_eq!(
            FirstBaselineToTop::new(32).layout(&children, SizeConstraint::unbounded()),
            Err(LayoutError::InvalidConfiguration(
                ConfigurationIssue::SingleChild { found: 2 }
            ))
        );
    }

    #[test]
    fn test_baseline_container_respects_constraint() {
        let text = FixedSize::new(80, 20).with_baseline(15);

        let result = FirstBaselineToTop::new(32)
            .layout_child(&text, SizeConstraint::loose(100, 30))
            .unwrap();

        assert_eq!(result.height(), 30);
        assert_eq!(result.placement(0), Some(Point::new(0, 17)));
    }
}
