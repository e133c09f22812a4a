//! View state - what renderers need to draw the pager
//!
//! The core never touches a rendering surface. It publishes a declarative
//! transform and a frame snapshot; a rendering adapter applies them.

use std::time::Duration;

/// Size of the pager mount point in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Horizontal position of the screen strip.
///
/// `offset_percent` is measured in percent of the viewport width; screen `i`
/// at rest sits at `i * 100`. Renderers translate the strip by its negation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub offset_percent: f32,
    /// false while the strip follows a drag
    pub animated: bool,
}

impl ViewTransform {
    /// Resting transform for a screen, with transition animation enabled
    pub fn at_screen(index: usize) -> Self {
        Self {
            offset_percent: index as f32 * 100.0,
            animated: true,
        }
    }

    /// Transform that follows a drag of `delta_x` px away from `index`
    pub fn dragging(index: usize, delta_x: f32, viewport_width: f32) -> Self {
        let drag = if viewport_width > 0.0 {
            delta_x / viewport_width * 100.0
        } else {
            0.0
        };
        Self {
            offset_percent: index as f32 * 100.0 + drag,
            animated: false,
        }
    }

    /// CSS-style translateX percentage
    pub fn translate_x(&self) -> f32 {
        -self.offset_percent
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::at_screen(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleView {
    /// Position in the host's module list; names are not unique
    pub slot: usize,
    pub name: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub name: String,
    pub active: bool,
    /// Modules that belong to this screen, in host order
    pub modules: Vec<ModuleView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    pub index: usize,
    pub active: bool,
}

/// Snapshot of everything a renderer draws for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PagerFrame {
    pub screens: Vec<ScreenView>,
    pub current_index: usize,
    pub transform: ViewTransform,
    /// Empty when indicators are disabled
    pub indicators: Vec<IndicatorState>,
    pub animation_duration: Duration,
    pub auto_rotating: bool,
}

impl PagerFrame {
    pub fn current_screen(&self) -> Option<&ScreenView> {
        self.screens.get(self.current_index)
    }
}
