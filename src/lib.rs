#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod demo;
pub mod logging;
pub mod state;

#[doc(inline)]
pub use trellis_layout as layout;

pub use config::{ConfigError, LayoutConfig};
pub use trellis_layout::{
    ColumnLayout, ConfigurationIssue, FirstBaselineToTop, FixedSize, Layout, LayoutError,
    LayoutResult, Measurable, Measured, Point, Rect, Size, SizeConstraint, StaggeredGridLayout,
};

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! ```rust
    //! use trellis::prelude::*;
    //!
    //! let result = ColumnLayout.layout(&[], SizeConstraint::loose(10, 10)).unwrap();
    //! assert_eq!(result.size(), Size::new(10, 10));
    //! ```
    pub use super::{
        ColumnLayout, FirstBaselineToTop, FixedSize, Layout, LayoutError, LayoutResult,
        Measurable, Measured, Point, Rect, Size, SizeConstraint, StaggeredGridLayout,
    };
}
