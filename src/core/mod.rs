//! Core paging logic
//!
//! Gesture interpretation, screen navigation, visibility sync and
//! auto-rotation. NO imports from frontend/ or rendering code.
//! The host lends its module set and notification bus through the traits in
//! [`host`]; frontends read [`crate::data::PagerFrame`] snapshots to render.

pub mod auto_rotate;
pub mod default_layout;
pub mod gesture;
pub mod host;
pub mod keyboard;
pub mod notifications;
pub mod pager;
pub mod visibility;

pub use auto_rotate::{AutoRotateTick, AutoRotateTimer};
pub use gesture::{GestureInterpreter, GestureOutcome, NavIntent, PointerEvent, PointerSource};
pub use host::{ModuleRegistry, NotificationBus};
pub use notifications::{HostNotification, Notification};
pub use pager::PagingController;
