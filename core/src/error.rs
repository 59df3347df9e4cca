//! Errors raised by layout passes.
//!
//! Layout is deterministic and side-effect free, so none of these are
//! transient: retrying with the same inputs fails the same way.

use core::fmt;

use thiserror::Error;

/// Failure of a layout pass. No partial [`LayoutResult`](crate::LayoutResult)
/// accompanies an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout or its constraint was configured with impossible values.
    #[error("invalid layout configuration: {0}")]
    InvalidConfiguration(ConfigurationIssue),
    /// A child asked to be offset by its first baseline does not have one.
    #[error("child exposes no first baseline")]
    MissingBaseline,
}

/// The specific reason a configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationIssue {
    /// A staggered grid needs at least one row.
    ZeroRows,
    /// A single-child layout was handed several children.
    SingleChild {
        /// Number of children supplied.
        found: usize,
    },
    /// Minimum width exceeds maximum width.
    WidthRange {
        /// Requested minimum.
        min: u32,
        /// Requested maximum.
        max: u32,
    },
    /// Minimum height exceeds maximum height.
    HeightRange {
        /// Requested minimum.
        min: u32,
        /// Requested maximum.
        max: u32,
    },
}

impl fmt::Display for ConfigurationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRows => f.write_str("row count must be positive"),
            Self::SingleChild { found } => {
                write!(f, "expected at most one child, found {found}")
            }
            Self::WidthRange { min, max } => {
                write!(f, "min width {min} exceeds max width {max}")
            }
            Self::HeightRange { min, max } => {
                write!(f, "min height {min} exceeds max height {max}")
            }
        }
    }
}
