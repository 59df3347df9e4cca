//! Serializable layout descriptions.
//!
//! A host that keeps its screen description as data can name the layout for
//! a container in JSON and turn it into a [`Layout`] at runtime:
//!
//! ```rust
//! use trellis::{Layout, LayoutConfig, SizeConstraint};
//!
//! let layout = LayoutConfig::load(r#"{ "kind": "staggered_grid", "rows": 2 }"#).unwrap();
//! let result = layout.layout(&[], SizeConstraint::loose(100, 100)).unwrap();
//! assert!(result.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trellis_layout::{ColumnLayout, FirstBaselineToTop, Layout, StaggeredGridLayout};

/// Which layout to run for a container, and its parameters.
///
/// The parameterised variants carry the layouts themselves, so a description
/// that parses is always buildable: `rows: 0` is rejected while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutConfig {
    /// [`ColumnLayout`].
    #[default]
    Column,
    /// [`StaggeredGridLayout`]; `rows` defaults to 3.
    StaggeredGrid(StaggeredGridLayout),
    /// [`FirstBaselineToTop`] at `distance` pixels.
    FirstBaselineToTop(FirstBaselineToTop),
}

/// Failure to turn a description into a layout.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The description is not valid JSON or does not name a valid layout.
    #[error("failed to parse layout config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LayoutConfig {
    /// Parses a description from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `json` does not describe a layout.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the description to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds the layout this description names.
    #[must_use]
    pub fn build(&self) -> Box<dyn Layout + Send + Sync> {
        tracing::debug!(config = ?self, "building layout");
        match *self {
            Self::Column => Box::new(ColumnLayout),
            Self::StaggeredGrid(grid) => Box::new(grid),
            Self::FirstBaselineToTop(baseline) => Box::new(baseline),
        }
    }

    /// Parses and builds in one step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if parsing fails.
    pub fn load(json: &str) -> Result<Box<dyn Layout + Send + Sync>, ConfigError> {
        Ok(Self::from_json(json)?.build())
    }
}
