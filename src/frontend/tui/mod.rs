//! TUI Frontend (ratatui-based)
//!
//! Implements the Frontend trait using ratatui for terminal rendering.
//! It wraps crossterm for event handling and terminal management.

pub mod animation;
pub mod app;
pub mod indicator;
pub mod input;
pub mod pager_view;

pub use app::TuiFrontend;
pub use input::MouseAction;
