//! Terminal input translation
//!
//! Crossterm reports the mouse in cells; the gesture interpreter works in px.
//! [`MouseTranslator`] converts with the configured cell size and decides
//! which mouse events are pointer gestures and which are indicator clicks.

use crate::core::gesture::{PointerEvent, PointerSource};
use crate::core::notifications::{Notification, NEXT_SCREEN, PREVIOUS_SCREEN};
use crate::frontend::tui::indicator;
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use serde_json::Value;
use std::time::Instant;

/// Screen regions that accept mouse input, from the last layout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitAreas {
    pub pager: Rect,
    pub indicators: Vec<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseAction {
    Pointer(PointerEvent),
    /// Left click on the dot for this screen
    Indicator(usize),
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

#[derive(Debug, Clone)]
pub struct MouseTranslator {
    cell_width_px: f32,
    cell_height_px: f32,
    pressed: bool,
}

impl MouseTranslator {
    pub fn new(cell_width_px: f32, cell_height_px: f32) -> Self {
        Self {
            cell_width_px,
            cell_height_px,
            pressed: false,
        }
    }

    pub fn to_px(&self, x: u16, y: u16) -> (f32, f32) {
        (x as f32 * self.cell_width_px, y as f32 * self.cell_height_px)
    }

    /// Left button down/drag/up become press/move/release. A drag that exits
    /// the pager area becomes a leave, after which the drag is ignored.
    pub fn translate(
        &mut self,
        kind: MouseEventKind,
        x: u16,
        y: u16,
        areas: &HitAreas,
        at: Instant,
    ) -> Option<MouseAction> {
        let (px, py) = self.to_px(x, y);
        let source = PointerSource::Mouse;

        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = indicator::hit_test(&areas.indicators, x, y) {
                    return Some(MouseAction::Indicator(index));
                }
                if !contains(areas.pager, x, y) {
                    return None;
                }
                self.pressed = true;
                Some(MouseAction::Pointer(PointerEvent::press(source, px, py, at)))
            }
            MouseEventKind::Drag(MouseButton::Left) if self.pressed => {
                if contains(areas.pager, x, y) {
                    Some(MouseAction::Pointer(PointerEvent::moved(source, px, py, at)))
                } else {
                    self.pressed = false;
                    Some(MouseAction::Pointer(PointerEvent::leave(source, px, py, at)))
                }
            }
            MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                self.pressed = false;
                Some(MouseAction::Pointer(PointerEvent::release(source, px, py, at)))
            }
            _ => None,
        }
    }
}

/// Keys that stand in for requests from other host modules: digits jump,
/// `n`/`p` step. They go through the same notification path as the host.
pub fn key_to_notification(code: KeyCode) -> Option<Notification> {
    match code {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Some(Notification::go_to(index))
        }
        KeyCode::Char('n') => Notification::parse(NEXT_SCREEN, Value::Null),
        KeyCode::Char('p') => Notification::parse(PREVIOUS_SCREEN, Value::Null),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gesture::PointerPhase;

    fn areas() -> HitAreas {
        HitAreas {
            pager: Rect::new(0, 1, 40, 10),
            indicators: indicator::dot_rects(Rect::new(0, 11, 40, 1), 3),
        }
    }

    fn phase(action: Option<MouseAction>) -> Option<PointerPhase> {
        match action {
            Some(MouseAction::Pointer(e)) => Some(e.phase),
            _ => None,
        }
    }

    #[test]
    fn test_cells_convert_to_px() {
        let mut mouse = MouseTranslator::new(8.0, 16.0);
        let action = mouse.translate(
            MouseEventKind::Down(MouseButton::Left),
            10,
            3,
            &areas(),
            Instant::now(),
        );
        match action {
            Some(MouseAction::Pointer(e)) => {
                assert_eq!((e.x, e.y), (80.0, 48.0));
                assert_eq!(e.source, PointerSource::Mouse);
                assert_eq!(e.phase, PointerPhase::Press);
            }
            other => panic!("expected press, got {:?}", other),
        }
    }

    #[test]
    fn test_press_drag_release() {
        let mut mouse = MouseTranslator::new(8.0, 16.0);
        let now = Instant::now();
        let a = areas();

        assert_eq!(
            phase(mouse.translate(MouseEventKind::Down(MouseButton::Left), 20, 5, &a, now)),
            Some(PointerPhase::Press)
        );
        assert_eq!(
            phase(mouse.translate(MouseEventKind::Drag(MouseButton::Left), 15, 5, &a, now)),
            Some(PointerPhase::Move)
        );
        assert_eq!(
            phase(mouse.translate(MouseEventKind::Up(MouseButton::Left), 15, 5, &a, now)),
            Some(PointerPhase::Release)
        );
        // Nothing pressed any more
        assert_eq!(mouse.translate(MouseEventKind::Up(MouseButton::Left), 15, 5, &a, now), None);
    }

    #[test]
    fn test_drag_out_of_pager_is_leave() {
        let mut mouse = MouseTranslator::new(8.0, 16.0);
        let now = Instant::now();
        let a = areas();

        mouse.translate(MouseEventKind::Down(MouseButton::Left), 20, 5, &a, now);
        assert_eq!(
            phase(mouse.translate(MouseEventKind::Drag(MouseButton::Left), 20, 0, &a, now)),
            Some(PointerPhase::Leave)
        );
        assert_eq!(mouse.translate(MouseEventKind::Drag(MouseButton::Left), 20, 5, &a, now), None);
        assert_eq!(mouse.translate(MouseEventKind::Up(MouseButton::Left), 20, 5, &a, now), None);
    }

    #[test]
    fn test_indicator_click_and_outside_press() {
        let mut mouse = MouseTranslator::new(8.0, 16.0);
        let now = Instant::now();
        let a = areas();
        let middle = a.indicators[1];

        assert_eq!(
            mouse.translate(MouseEventKind::Down(MouseButton::Left), middle.x, middle.y, &a, now),
            Some(MouseAction::Indicator(1))
        );
        assert_eq!(mouse.translate(MouseEventKind::Down(MouseButton::Left), 0, 0, &a, now), None);
        assert_eq!(mouse.translate(MouseEventKind::Down(MouseButton::Right), 20, 5, &a, now), None);
        assert_eq!(mouse.translate(MouseEventKind::ScrollDown, 20, 5, &a, now), None);
    }

    #[test]
    fn test_host_request_keys() {
        assert_eq!(key_to_notification(KeyCode::Char('1')), Some(Notification::go_to(0)));
        assert_eq!(key_to_notification(KeyCode::Char('9')), Some(Notification::go_to(8)));
        assert_eq!(key_to_notification(KeyCode::Char('0')), None);
        assert_eq!(key_to_notification(KeyCode::Char('n')), Some(Notification::NextScreen));
        assert_eq!(key_to_notification(KeyCode::Char('p')), Some(Notification::PreviousScreen));
        assert_eq!(key_to_notification(KeyCode::Right), None);
    }
}
