//! Data layer - Pure state without UI coupling
//!
//! Screens, module snapshots and view state as plain data structures.
//! NO imports from frontend/ or any rendering code.
//! The pager core updates these, frontends read them to render.

pub mod module;
pub mod screen;
pub mod view;

pub use module::*;
pub use screen::*;
pub use view::*;
