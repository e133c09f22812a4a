//! Screen pager for dashboard displays
//!
//! Groups a host's modules into named screens, shows one screen at a time and
//! moves between them on swipe, drag, keyboard, indicator click, timed
//! auto-rotation or host request. The [`core`] layer is host-agnostic; the
//! [`dashboard`] and [`frontend`] modules provide a terminal host for it.

pub mod config;
pub mod core;
pub mod dashboard;
pub mod data;
pub mod frontend;
pub mod validator;
