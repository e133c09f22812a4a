use crate::config::UiConfig;
use crate::data::{PagerFrame, Viewport};
use crate::frontend::tui::animation::StripAnimator;
use crate::frontend::tui::indicator::{self, IndicatorStrip};
use crate::frontend::tui::input::{HitAreas, MouseAction, MouseTranslator};
use crate::frontend::tui::pager_view::PagerView;
use crate::frontend::{Frontend, FrontendEvent, Scene};
use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Regions of the terminal: header row, screen strip, indicator row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub pager: Rect,
    pub indicators: Rect,
}

impl ScreenAreas {
    pub fn split(area: Rect, show_indicators: bool) -> Self {
        let indicator_rows = if show_indicators { 1 } else { 0 };
        let [header, pager, indicators] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(indicator_rows),
        ])
        .areas(area);
        Self {
            header,
            pager,
            indicators,
        }
    }
}

/// TUI Frontend using ratatui
///
/// Renders the pager with ratatui and handles events via crossterm.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    ui: UiConfig,
    show_indicators: bool,
    animator: StripAnimator,
    mouse: MouseTranslator,
    hit_areas: HitAreas,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture and focus
    /// reporting, and enters alternate screen.
    pub fn new(ui: &UiConfig, show_indicators: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(ui.poll_timeout_ms),
            mouse: MouseTranslator::new(ui.cell_width_px, ui.cell_height_px),
            ui: ui.clone(),
            show_indicators,
            animator: StripAnimator::new(0.0),
            hit_areas: HitAreas::default(),
        })
    }

    /// Set poll timeout (for controlling frame rate)
    pub fn set_poll_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    fn areas(&self) -> ScreenAreas {
        let (width, height) = self.size();
        ScreenAreas::split(Rect::new(0, 0, width, height), self.show_indicators)
    }

    /// Pager mount point in px; `None` when the terminal leaves it no room
    pub fn viewport(&self) -> Option<Viewport> {
        let pager = self.areas().pager;
        if pager.width == 0 || pager.height == 0 {
            return None;
        }
        Some(Viewport::new(
            pager.width as f32 * self.ui.cell_width_px,
            pager.height as f32 * self.ui.cell_height_px,
        ))
    }

    /// Map a mouse event against the last rendered layout
    pub fn translate_mouse(
        &mut self,
        kind: MouseEventKind,
        x: u16,
        y: u16,
        at: Instant,
    ) -> Option<MouseAction> {
        self.mouse.translate(kind, x, y, &self.hit_areas, at)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating(Instant::now())
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only key presses; repeats and releases are ignored
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::Key {
                    code: key_event.code,
                    modifiers: key_event.modifiers,
                })
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::Mouse {
                kind: mouse_event.kind,
                x: mouse_event.column,
                y: mouse_event.row,
                modifiers: mouse_event.modifiers,
            }),
            Event::Resize(w, h) => Some(FrontendEvent::Resize {
                width: w,
                height: h,
            }),
            Event::FocusGained => Some(FrontendEvent::FocusGained),
            Event::FocusLost => Some(FrontendEvent::FocusLost),
            _ => None,
        }
    }

    fn header_line(&self, frame: Option<&PagerFrame>) -> Line<'static> {
        let mut spans = Vec::new();

        if self.ui.show_clock {
            spans.push(Span::styled(
                Local::now().format("%H:%M ").to_string(),
                Style::default().fg(Color::Yellow),
            ));
        }

        match frame {
            Some(frame) => {
                let name = frame
                    .current_screen()
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                spans.push(Span::styled(name, Style::default().add_modifier(Modifier::BOLD)));
                spans.push(Span::raw(format!(
                    " ({}/{})",
                    frame.current_index + 1,
                    frame.screens.len()
                )));
                if frame.auto_rotating {
                    spans.push(Span::styled(" ⟳", Style::default().fg(Color::Green)));
                }
            }
            None => spans.push(Span::styled(
                "waiting for view",
                Style::default().fg(Color::DarkGray),
            )),
        }

        Line::from(spans)
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Poll events with timeout
        while event::poll(self.poll_timeout)? {
            if let Ok(ev) = event::read() {
                if let Some(frontend_event) = Self::convert_event(ev) {
                    events.push(frontend_event);
                }
            }
        }

        Ok(events)
    }

    fn render(&mut self, scene: &Scene<'_>) -> Result<()> {
        let now = Instant::now();
        if let Some(frame) = scene.frame {
            self.animator
                .update(frame.transform, frame.animation_duration, now);
        }
        let offset = self.animator.offset(now);
        let header = self.header_line(scene.frame);

        let mut hit_areas = HitAreas::default();
        let show_indicators = self.show_indicators;

        self.terminal.draw(|f| {
            let areas = ScreenAreas::split(f.area(), show_indicators);
            f.render_widget(Paragraph::new(header), areas.header);
            hit_areas.pager = areas.pager;

            let Some(frame) = scene.frame else {
                return;
            };

            f.render_widget(
                PagerView::new(&frame.screens, scene.dashboard, offset).at(now, Local::now()),
                areas.pager,
            );

            if !frame.indicators.is_empty() {
                hit_areas.indicators = indicator::dot_rects(areas.indicators, frame.indicators.len());
                f.render_widget(IndicatorStrip::new(&frame.indicators), areas.indicators);
            }
        })?;

        self.hit_areas = hit_areas;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        // Restore terminal
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}
