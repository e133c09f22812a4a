//! Screen definitions and the registry that tracks the active screen.
//!
//! Screens are immutable for the session. The registry only knows about
//! index arithmetic; everything that reacts to an index change lives in
//! `core::pager`.

use serde::{Deserialize, Serialize};

/// Selector that matches every module.
pub const ALL_MODULES: &str = "all";

/// A named group of modules shown together as one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenDefinition {
    pub name: String,
    /// Member selectors: `"all"`, a module name, a module tag or a position slot
    #[serde(rename = "modules", default)]
    pub members: Vec<String>,
}

impl ScreenDefinition {
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    pub fn has_member(&self, selector: &str) -> bool {
        self.members.iter().any(|m| m == selector)
    }
}

/// Ordered screens plus the index of the one currently shown.
///
/// `current_index` always points at a valid screen. Construction rejects an
/// empty list, so `count()` is never zero.
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    screens: Vec<ScreenDefinition>,
    current_index: usize,
}

impl ScreenRegistry {
    /// Build a registry positioned on the first screen.
    ///
    /// Returns `None` for an empty list; callers substitute the default
    /// layout before getting here.
    pub fn new(screens: Vec<ScreenDefinition>) -> Option<Self> {
        if screens.is_empty() {
            return None;
        }
        Some(Self {
            screens,
            current_index: 0,
        })
    }

    pub fn count(&self) -> usize {
        self.screens.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &ScreenDefinition {
        &self.screens[self.current_index]
    }

    pub fn screens(&self) -> &[ScreenDefinition] {
        &self.screens
    }

    pub fn get(&self, index: usize) -> Option<&ScreenDefinition> {
        self.screens.get(index)
    }

    /// Index of the screen after the current one, wrapping to the first.
    pub fn next(&self) -> usize {
        (self.current_index + 1) % self.count()
    }

    /// Index of the screen before the current one, wrapping to the last.
    pub fn previous(&self) -> usize {
        (self.current_index + self.count() - 1) % self.count()
    }

    pub fn last(&self) -> usize {
        self.count() - 1
    }

    /// Move to `index`. Returns true only when the current screen changed.
    ///
    /// Out-of-range and same-index requests are no-ops, not failures.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.count() || index == self.current_index {
            return false;
        }
        self.current_index = index;
        true
    }
}
