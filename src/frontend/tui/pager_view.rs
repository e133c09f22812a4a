//! Horizontal strip of screens.
//!
//! Screen `i` is laid out one viewport width to the right of screen `i - 1`;
//! the whole strip is shifted left by the current offset. Each screen is drawn
//! into a scratch buffer and copied column by column, so screens that are only
//! partly on-screen during a drag are clipped cleanly.

use crate::dashboard::Dashboard;
use crate::data::ScreenView;
use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use std::time::Instant;

/// Panels need this many columns before a screen splits into two columns
const TWO_COLUMN_MIN_WIDTH: u16 = 40;

pub struct PagerView<'a> {
    screens: &'a [ScreenView],
    dashboard: &'a Dashboard,
    offset_percent: f32,
    now: Instant,
    clock: DateTime<Local>,
}

impl<'a> PagerView<'a> {
    pub fn new(screens: &'a [ScreenView], dashboard: &'a Dashboard, offset_percent: f32) -> Self {
        Self {
            screens,
            dashboard,
            offset_percent,
            now: Instant::now(),
            clock: Local::now(),
        }
    }

    /// Override the instants used for fades and clock bodies
    pub fn at(mut self, now: Instant, clock: DateTime<Local>) -> Self {
        self.now = now;
        self.clock = clock;
        self
    }

    /// Column (relative to the strip area) where screen `index` starts
    fn screen_left(&self, index: usize, width: u16) -> i32 {
        let percent = index as f32 * 100.0 - self.offset_percent;
        (percent / 100.0 * width as f32).round() as i32
    }

    fn render_screen(&self, screen: &ScreenView, area: Rect, buf: &mut Buffer) {
        let title_style = if screen.active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::styled(screen.name.as_str(), title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 || screen.modules.is_empty() {
            return;
        }

        let count = screen.modules.len();
        let columns = if count > 1 && inner.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
        let rows = count.div_ceil(columns);

        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(inner);
        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                if let Some(module) = screen.modules.get(row * columns + col) {
                    self.render_module(module.slot, *cell, buf);
                }
            }
        }
    }

    fn render_module(&self, slot: usize, area: Rect, buf: &mut Buffer) {
        let Some(module) = self.dashboard.get(slot) else {
            return;
        };

        let opacity = module.opacity(self.now);
        let (border, text) = if opacity >= 0.66 {
            (Color::Blue, Color::White)
        } else if opacity > 0.0 {
            (Color::DarkGray, Color::Gray)
        } else {
            (Color::Black, Color::DarkGray)
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .title(Line::styled(module.name(), Style::default().fg(text)));

        // Fully hidden modules keep their outline so the layout doesn't jump
        let lines: Vec<Line> = if opacity > 0.0 {
            module.body(self.clock).into_iter().map(Line::from).collect()
        } else {
            Vec::new()
        };

        Paragraph::new(lines)
            .style(Style::default().fg(text))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

impl Widget for PagerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as i32;

        for (index, screen) in self.screens.iter().enumerate() {
            let left = self.screen_left(index, area.width);
            if left >= width || left + width <= 0 {
                continue;
            }

            let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, area.height));
            self.render_screen(screen, scratch.area, &mut scratch);

            for sx in 0..area.width {
                let dx = left + sx as i32;
                if !(0..width).contains(&dx) {
                    continue;
                }
                for y in 0..area.height {
                    buf[(area.x + dx as u16, area.y + y)] = scratch[(sx, y)].clone();
                }
            }
        }
    }
}
