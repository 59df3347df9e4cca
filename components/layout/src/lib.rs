#![no_std]
//! Layout policies for the `trellis` layout kernel.
//!
//! Each policy implements [`Layout`]: it measures every child once against
//! the incoming [`SizeConstraint`], sizes itself, and places every child.
//!
//! - [`ColumnLayout`] stacks children top to bottom and fills the offered
//!   space.
//! - [`StaggeredGridLayout`] deals children round-robin into rows.
//! - [`FirstBaselineToTop`] pads a single child so its first text baseline
//!   lands at a fixed distance from the top.
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_layout::{FixedSize, Layout, Measurable, SizeConstraint, StaggeredGridLayout};
//!
//! let chip = FixedSize::new(20, 10);
//! let children: Vec<&dyn Measurable> = vec![&chip, &chip, &chip, &chip];
//! let result = StaggeredGridLayout::new(2)?.layout(&children, SizeConstraint::loose(1000, 1000))?;
//! assert_eq!(result.size(), Size::new(40, 20));
//! ```

extern crate alloc;

pub use trellis_core::*;

pub mod baseline;
pub mod column;
pub mod staggered;

pub use baseline::FirstBaselineToTop;
pub use column::ColumnLayout;
pub use staggered::StaggeredGridLayout;
