//! Keyboard routing for screen navigation
//!
//! Stateless: each key press maps straight to a [`NavIntent`]:
//! - Right arrow: next screen
//! - Left arrow: previous screen
//! - Home / End: first / last screen

use crate::core::gesture::NavIntent;
use crossterm::event::KeyCode;

/// Route a key to a navigation intent, if it is a navigation key
pub fn route_key(code: KeyCode) -> Option<NavIntent> {
    match code {
        KeyCode::Right => Some(NavIntent::Next),
        KeyCode::Left => Some(NavIntent::Previous),
        KeyCode::Home => Some(NavIntent::First),
        KeyCode::End => Some(NavIntent::Last),
        _ => None,
    }
}
