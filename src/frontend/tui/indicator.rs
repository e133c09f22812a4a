//! Row of page dots, one per screen.
//!
//! The active screen's dot is filled. Dots are click targets, so the layout
//! is exposed through [`dot_rects`] for hit testing.

use crate::data::IndicatorState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const DOT_WIDTH: u16 = 3;
/// Narrower dot cell used when a full-width row would not fit
const COMPACT_DOT_WIDTH: u16 = 2;
const ACTIVE_DOT: char = '●';
const INACTIVE_DOT: char = '○';

/// Click targets for `count` dots centered in `area`.
///
/// Dots shrink to [`COMPACT_DOT_WIDTH`] cells when the full row would not
/// fit; any that still do not fit are dropped from the right.
pub fn dot_rects(area: Rect, count: usize) -> Vec<Rect> {
    if area.width == 0 || area.height == 0 || count == 0 {
        return Vec::new();
    }

    let dot_width = if count * DOT_WIDTH as usize > area.width as usize {
        COMPACT_DOT_WIDTH
    } else {
        DOT_WIDTH
    };
    let fit = (area.width / dot_width) as usize;
    if count > fit {
        tracing::debug!(
            "Indicator row {} cells wide fits {} of {} dots",
            area.width,
            fit,
            count
        );
    }

    let shown = count.min(fit);
    let total = shown as u16 * dot_width;
    let start_x = area.x + (area.width - total) / 2;

    (0..shown)
        .map(|i| Rect::new(start_x + i as u16 * dot_width, area.y, dot_width, 1))
        .collect()
}

/// Index of the dot under (x, y)
pub fn hit_test(rects: &[Rect], x: u16, y: u16) -> Option<usize> {
    rects
        .iter()
        .position(|r| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height)
}

pub struct IndicatorStrip<'a> {
    indicators: &'a [IndicatorState],
    active_color: Color,
    inactive_color: Color,
}

impl<'a> IndicatorStrip<'a> {
    pub fn new(indicators: &'a [IndicatorState]) -> Self {
        Self {
            indicators,
            active_color: Color::White,
            inactive_color: Color::DarkGray,
        }
    }

    pub fn colors(mut self, active: Color, inactive: Color) -> Self {
        self.active_color = active;
        self.inactive_color = inactive;
        self
    }
}

impl Widget for IndicatorStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rects = dot_rects(area, self.indicators.len());
        for (rect, indicator) in rects.iter().zip(self.indicators) {
            let (symbol, color) = if indicator.active {
                (ACTIVE_DOT, self.active_color)
            } else {
                (INACTIVE_DOT, self.inactive_color)
            };
            let x = rect.x + rect.width / 2;
            if x < buf.area().right() && rect.y < buf.area().bottom() {
                buf[(x, rect.y)]
                    .set_char(symbol)
                    .set_style(Style::default().fg(color));
            }
        }
    }
}
