//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait the terminal frontend implements.
//! It provides a unified interface for event polling, rendering, and cleanup.

pub mod events;
pub mod tui;

use crate::dashboard::Dashboard;
use crate::data::PagerFrame;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Everything a frontend draws for one frame
pub struct Scene<'a> {
    /// `None` while the pager is inert (no mount point yet)
    pub frame: Option<&'a PagerFrame>,
    pub dashboard: &'a Dashboard,
}

/// Frontend trait
///
/// Separates rendering and input translation from the paging core.
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events (keyboard, mouse, resize, focus) converted
    /// to the frontend-agnostic `FrontendEvent` enum, empty if none.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render one frame
    fn render(&mut self, scene: &Scene<'_>) -> Result<()>;

    /// Restore the terminal before exit
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size in cells
    fn size(&self) -> (u16, u16);
}
