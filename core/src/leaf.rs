//! Leaf children with an intrinsic size.

use crate::{Measurable, Measured, Size, SizeConstraint};

/// A leaf that always asks for the same size, like an icon or an image
/// given an explicit size.
///
/// The answer is coerced into whatever constraint it is measured against.
//
// ═══════════════════════════════════════════════════════════════════════════
// INTERNAL: Layout Contract for Host Implementers
// ═══════════════════════════════════════════════════════════════════════════
//
// Measurement: intrinsic (width, height) clamped into the constraint
// Baseline: reported unchanged when set, even if the height was clamped
//
// ═══════════════════════════════════════════════════════════════════════════
//
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedSize {
    width: u32,
    height: u32,
    first_baseline: Option<u32>,
}

impl FixedSize {
    /// Creates a leaf with the given intrinsic size and no baseline.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            first_baseline: None,
        }
    }

    /// Gives the leaf a first baseline, measured from its top edge.
    #[must_use]
    pub const fn with_baseline(mut self, first_baseline: u32) -> Self {
        self.first_baseline = Some(first_baseline);
        self
    }
}

impl Measurable for FixedSize {
    fn measure(&self, constraints: SizeConstraint) -> Measured {
        let size = constraints.constrain(Size::new(self.width, self.height));
        let measured = Measured::new(size.width, size.height);
        match self.first_baseline {
            Some(baseline) => measured.with_baseline(baseline),
            None => measured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_size_clamps() {
        let leaf = FixedSize::new(200, 5);
        let measured = leaf.measure(SizeConstraint::new(0, 100, 10, 50).unwrap());

        assert_eq!(measured.width(), 100);
        assert_eq!(measured.height(), 10);
        assert_eq!(measured.first_baseline(), None);
    }

    #[test]
    fn test_fixed_size_baseline() {
        let leaf = FixedSize::new(40, 20).with_baseline(15);

        assert_eq!(
            leaf.measure(SizeConstraint::unbounded()).first_baseline(),
            Some(15)
        );
    }
}
