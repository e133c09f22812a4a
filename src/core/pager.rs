//! Paging controller
//!
//! Owns the current screen index and funnels every navigation source (swipe,
//! drag, keyboard, indicator click, auto-rotation, host request) through
//! [`PagingController::go_to_screen`], the single place the index changes.
//!
//! The controller is inert until [`PagingController::initialize`] succeeds:
//! with no mount point there is nothing to page, so navigation, gestures and
//! auto-rotation are all no-ops.

use crate::config::PagerConfig;
use crate::core::auto_rotate::{AutoRotateTick, AutoRotateTimer};
use crate::core::default_layout::generate_default_screens;
use crate::core::gesture::{GestureInterpreter, GestureOutcome, NavIntent, PointerEvent};
use crate::core::host::{ModuleRegistry, NotificationBus};
use crate::core::keyboard;
use crate::core::notifications::{screen_index_from_payload, HostNotification, Notification};
use crate::core::visibility::{self, VisibilityReport};
use crate::data::{
    IndicatorState, ModuleView, PagerFrame, ScreenDefinition, ScreenRegistry, ScreenView,
    ViewTransform, Viewport,
};
use crossterm::event::KeyCode;
use tokio::sync::mpsc::UnboundedSender;

pub struct PagingController<M, B> {
    config: PagerConfig,
    modules: M,
    bus: B,
    ticks: UnboundedSender<AutoRotateTick>,
    registry: Option<ScreenRegistry>,
    viewport: Option<Viewport>,
    gestures: GestureInterpreter,
    transform: ViewTransform,
    timer: Option<AutoRotateTimer>,
    timer_generation: u64,
    suspended: bool,
}

impl<M: ModuleRegistry, B: NotificationBus> PagingController<M, B> {
    /// Create an uninitialized controller.
    ///
    /// `ticks` is where the auto-rotation timer delivers its ticks; the host
    /// loop passes them back through [`Self::on_auto_rotate_tick`].
    pub fn new(
        config: PagerConfig,
        modules: M,
        bus: B,
        ticks: UnboundedSender<AutoRotateTick>,
    ) -> Self {
        tracing::info!("Starting screen pager");
        if config.debug {
            tracing::info!("Screen pager config: {:?}", config);
        }

        Self {
            gestures: GestureInterpreter::new(config.swipe_threshold),
            config,
            modules,
            bus,
            ticks,
            registry: None,
            viewport: None,
            transform: ViewTransform::default(),
            timer: None,
            timer_generation: 0,
            suspended: false,
        }
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn modules(&self) -> &M {
        &self.modules
    }

    pub fn modules_mut(&mut self) -> &mut M {
        &mut self.modules
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn is_initialized(&self) -> bool {
        self.registry.is_some()
    }

    /// Index of the active screen (0 while inert)
    pub fn current_index(&self) -> usize {
        self.registry
            .as_ref()
            .map(ScreenRegistry::current_index)
            .unwrap_or(0)
    }

    /// Number of screens (0 while inert)
    pub fn screen_count(&self) -> usize {
        self.registry.as_ref().map(ScreenRegistry::count).unwrap_or(0)
    }

    pub fn screens(&self) -> &[ScreenDefinition] {
        self.registry
            .as_ref()
            .map(ScreenRegistry::screens)
            .unwrap_or(&[])
    }

    pub fn current_screen(&self) -> Option<&ScreenDefinition> {
        self.registry.as_ref().map(ScreenRegistry::current)
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Record the mount point size; `None` means the mount is gone
    pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
        self.viewport = viewport;
    }

    /// Build the screen registry and start auto-rotation if configured.
    ///
    /// Falls back to the default layout when no screens are configured.
    /// Without a mount point the controller logs and stays inert.
    pub fn initialize(&mut self) -> bool {
        tracing::info!("Setting up screens");

        if self.viewport.is_none() {
            tracing::error!("Screen pager mount point not found, no screens rendered");
            return false;
        }

        let mut screens = self.config.screens.clone();
        if screens.is_empty() {
            screens = generate_default_screens(&self.modules.modules());
            tracing::info!("No screens configured, generated {} default screens", screens.len());
        }

        let Some(mut registry) = ScreenRegistry::new(screens) else {
            tracing::error!("Screen registry could not be built");
            return false;
        };

        // Re-initialization keeps the active screen when it still exists
        if let Some(previous) = &self.registry {
            registry.go_to(previous.current_index());
        }

        tracing::info!(
            "Screen pager ready with {} screens, showing screen {}",
            registry.count(),
            registry.current_index()
        );
        self.transform = ViewTransform::at_screen(registry.current_index());
        self.registry = Some(registry);
        self.gestures.reset();

        if self.config.auto_rotate {
            self.start_auto_rotate();
        }
        true
    }

    pub fn handle_notification(&mut self, notification: Notification) {
        if self.config.debug {
            tracing::info!("Screen pager received notification: {}", notification.name());
        }

        match notification {
            Notification::ViewReady => {
                self.initialize();
            }
            Notification::AllModulesStarted => {
                self.sync_visibility();
            }
            Notification::NextScreen => {
                self.next_screen();
            }
            Notification::PreviousScreen => {
                self.previous_screen();
            }
            Notification::GoToScreen(payload) => match screen_index_from_payload(&payload) {
                Some(index) => {
                    self.go_to_screen(index);
                }
                None => tracing::debug!("Ignoring jump request with payload {}", payload),
            },
        }
    }

    /// Make `index` the active screen.
    ///
    /// Returns true when the screen changed. Same-index and out-of-range
    /// requests change nothing and emit nothing.
    pub fn go_to_screen(&mut self, index: usize) -> bool {
        let Some(registry) = self.registry.as_mut() else {
            return false;
        };
        if !registry.go_to(index) {
            return false;
        }
        let total_screens = registry.count();

        tracing::info!("Updating screen display to screen {}", index);
        self.transform = ViewTransform::at_screen(index);
        self.sync_visibility();
        self.bus.send_notification(HostNotification::ScreenChanged {
            screen_index: index,
            total_screens,
        });
        true
    }

    pub fn next_screen(&mut self) -> bool {
        match self.registry.as_ref().map(ScreenRegistry::next) {
            Some(index) => self.go_to_screen(index),
            None => false,
        }
    }

    pub fn previous_screen(&mut self) -> bool {
        match self.registry.as_ref().map(ScreenRegistry::previous) {
            Some(index) => self.go_to_screen(index),
            None => false,
        }
    }

    pub fn apply_intent(&mut self, intent: NavIntent) -> bool {
        match intent {
            NavIntent::Next => self.next_screen(),
            NavIntent::Previous => self.previous_screen(),
            NavIntent::First => self.go_to_screen(0),
            NavIntent::Last => match self.registry.as_ref().map(ScreenRegistry::last) {
                Some(index) => self.go_to_screen(index),
                None => false,
            },
            NavIntent::GoTo(index) => self.go_to_screen(index),
        }
    }

    /// Show the active screen's modules and hide the rest
    pub fn sync_visibility(&mut self) -> VisibilityReport {
        let Some(registry) = &self.registry else {
            return VisibilityReport::default();
        };

        tracing::info!(
            "Updating module visibility for screen {}",
            registry.current_index()
        );
        visibility::sync_visibility(
            registry.current(),
            &mut self.modules,
            self.config.animation_duration(),
        )
    }

    /// Feed a pointer event through the gesture interpreter.
    ///
    /// The returned outcome tells the host whether to suppress the platform
    /// default (see [`GestureOutcome::suppresses_default`]).
    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        if self.registry.is_none() {
            return GestureOutcome::Ignored;
        }

        let outcome = self.gestures.handle(event);
        match outcome {
            GestureOutcome::Ignored | GestureOutcome::Undecided => {}
            GestureOutcome::Pressed => {
                self.stop_auto_rotate();
            }
            GestureOutcome::Dragging { delta_x } => {
                let width = self.viewport.map(|v| v.width).unwrap_or(0.0);
                self.transform = ViewTransform::dragging(self.current_index(), delta_x, width);
            }
            GestureOutcome::Commit(intent) => {
                self.transform = ViewTransform::at_screen(self.current_index());
                self.apply_intent(intent);
                self.start_auto_rotate();
            }
            GestureOutcome::SnapBack => {
                self.transform = ViewTransform::at_screen(self.current_index());
                self.start_auto_rotate();
            }
        }
        outcome
    }

    /// Handle a key press. Returns true when the key navigated (and the
    /// platform default should be suppressed).
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if !self.config.enable_keyboard_nav || self.registry.is_none() {
            return false;
        }
        let Some(intent) = keyboard::route_key(code) else {
            return false;
        };
        self.apply_intent(intent);
        true
    }

    /// Indicator for screen `index` was clicked
    pub fn click_indicator(&mut self, index: usize) -> bool {
        if !self.config.show_indicators {
            return false;
        }
        self.go_to_screen(index)
    }

    /// Start the auto-rotation timer. No-op when disabled, suspended,
    /// inert or already running.
    pub fn start_auto_rotate(&mut self) -> bool {
        if !self.config.auto_rotate
            || self.suspended
            || self.timer.is_some()
            || self.registry.is_none()
        {
            return false;
        }

        self.timer_generation += 1;
        match AutoRotateTimer::spawn(
            self.timer_generation,
            self.config.auto_rotate_delay(),
            self.ticks.clone(),
        ) {
            Some(timer) => {
                tracing::debug!("Auto-rotate timer {} started", timer.generation());
                self.timer = Some(timer);
                true
            }
            None => {
                tracing::warn!("No async runtime available, auto-rotation not started");
                false
            }
        }
    }

    /// Cancel the auto-rotation timer, if any
    pub fn stop_auto_rotate(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                tracing::debug!("Auto-rotate timer {} stopped", timer.generation());
                true
            }
            None => false,
        }
    }

    /// Advance on a tick from the live timer; ticks from a stopped timer are dropped
    pub fn on_auto_rotate_tick(&mut self, tick: AutoRotateTick) -> bool {
        match &self.timer {
            Some(timer) if timer.generation() == tick.generation => self.next_screen(),
            _ => {
                tracing::debug!("Dropping stale auto-rotate tick {}", tick.generation);
                false
            }
        }
    }

    pub fn suspend(&mut self) {
        if self.config.debug {
            tracing::info!("Screen pager suspended");
        }
        self.suspended = true;
        self.stop_auto_rotate();
    }

    pub fn resume(&mut self) {
        if self.config.debug {
            tracing::info!("Screen pager resumed");
        }
        self.suspended = false;
        if self.config.auto_rotate {
            self.start_auto_rotate();
        }
    }

    /// Snapshot for renderers; `None` while inert
    pub fn frame(&self) -> Option<PagerFrame> {
        let registry = self.registry.as_ref()?;
        let current_index = registry.current_index();
        let modules = self.modules.modules();

        let screens = registry
            .screens()
            .iter()
            .enumerate()
            .map(|(index, screen)| ScreenView {
                name: screen.name.clone(),
                active: index == current_index,
                modules: modules
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| visibility::is_member(m, screen))
                    .map(|(slot, m)| ModuleView {
                        slot,
                        name: m.name.clone(),
                        visible: !m.hidden,
                    })
                    .collect(),
            })
            .collect();

        let indicators = if self.config.show_indicators {
            (0..registry.count())
                .map(|index| IndicatorState {
                    index,
                    active: index == current_index,
                })
                .collect()
        } else {
            Vec::new()
        };

        Some(PagerFrame {
            screens,
            current_index,
            transform: self.transform,
            indicators,
            animation_duration: self.config.animation_duration(),
            auto_rotating: self.is_auto_rotating(),
        })
    }
}
