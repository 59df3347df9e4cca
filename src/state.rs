//! Plain state containers for the host's event loop.
//!
//! Layout never reads these. They hold the small bits of UI state a screen
//! around the kernel keeps (a favorite flag, a click count, which rows are
//! expanded) and notify a callback when the host mutates them. The host
//! decides what to do on change, typically re-running layout.
//!
//! ```rust
//! use trellis::state::Toggle;
//!
//! let mut favorite = Toggle::new(false).on_change(|on| println!("favorite: {on}"));
//! assert!(favorite.toggle());
//! ```

use core::fmt;
use std::collections::BTreeSet;

type Callback<T> = Box<dyn FnMut(T) + Send>;

/// A boolean flag such as a favorite button.
pub struct Toggle {
    value: bool,
    on_change: Option<Callback<bool>>,
}

impl fmt::Debug for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toggle")
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Toggle {
    /// Creates a toggle with an initial value.
    #[must_use]
    pub const fn new(value: bool) -> Self {
        Self {
            value,
            on_change: None,
        }
    }

    /// Registers the callback invoked whenever the value changes.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(bool) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Returns the current value.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.value
    }

    /// Sets the value. The callback only fires if it actually changed.
    pub fn set(&mut self, value: bool) {
        if self.value == value {
            return;
        }
        self.value = value;
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
    }

    /// Flips the value and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.set(!self.value);
        self.value
    }
}

/// A monotonically increasing click counter.
pub struct Counter {
    count: u64,
    on_change: Option<Callback<u64>>,
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("count", &self.count)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Counter {
    /// Creates a counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            on_change: None,
        }
    }

    /// Registers the callback invoked with the new count after each click.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(u64) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Returns the number of clicks so far.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Records one click and returns the new count.
    pub fn increment(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.count);
        }
        self.count
    }
}

/// Per-row selection flags for a list, keyed by row index.
#[derive(Default)]
pub struct Selection {
    selected: BTreeSet<usize>,
    on_change: Option<Callback<(usize, bool)>>,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("selected", &self.selected)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Selection {
    /// Creates a selection with no rows selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: BTreeSet::new(),
            on_change: None,
        }
    }

    /// Registers the callback invoked with `(row, selected)` on every change.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut((usize, bool)) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Returns true if `row` is selected.
    #[must_use]
    pub fn is_selected(&self, row: usize) -> bool {
        self.selected.contains(&row)
    }

    /// Flips the flag of `row` and returns its new state.
    pub fn toggle(&mut self, row: usize) -> bool {
        let selected = if self.selected.remove(&row) {
            false
        } else {
            self.selected.insert(row);
            true
        };
        if let Some(callback) = self.on_change.as_mut() {
            callback((row, selected));
        }
        selected
    }

    /// Selected rows in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Clears every selection without notifying.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
