#![no_std]
//! Core types for the `trellis` layout kernel.
//!
//! The kernel is a pure function from children and a [`SizeConstraint`] to a
//! [`LayoutResult`]. This crate defines the shared vocabulary:
//!
//! - geometry ([`Size`], [`Point`], [`Rect`]) and [`SizeConstraint`],
//! - the [`Measurable`] child trait and the [`Layout`] container trait,
//! - [`LayoutError`],
//! - [`FixedSize`], a leaf with an intrinsic size.
//!
//! Concrete layouts live in `trellis-layout`.

extern crate alloc;

pub mod error;
pub mod layout;
pub mod leaf;

pub use error::{ConfigurationIssue, LayoutError};
pub use layout::*;
pub use leaf::FixedSize;
