//! Pointer gesture interpretation
//!
//! Touch and mouse input share one state machine, parameterized by
//! [`PointerSource`]:
//!
//! ```text
//! Idle --press--> Pressed --move--> AxisUndecided --(|dx| > |dy| && |dx| > 10px)--> Swiping
//!   ^                                    |                                              |
//!   +------------- release / leave ------+----------------------------------------------+
//! ```
//!
//! Only one gesture is tracked at a time. The source that pressed first owns
//! it until release; presses and moves from the other source are ignored
//! meanwhile.
//!
//! The interpreter never touches the current screen index. It reports
//! outcomes and the paging controller applies them.

use std::time::Instant;

/// Horizontal travel (px) required before a drag locks onto the horizontal axis
pub const AXIS_LOCK_DISTANCE: f32 = 10.0;

/// Release velocity (px/ms) above which a short swipe still commits
pub const FLICK_VELOCITY: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Touch,
    Mouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
    /// Pointer left the interactive region
    Leave,
}

/// Raw pointer input, coordinates in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub source: PointerSource,
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    pub at: Instant,
}

impl PointerEvent {
    pub fn new(source: PointerSource, phase: PointerPhase, x: f32, y: f32, at: Instant) -> Self {
        Self {
            source,
            phase,
            x,
            y,
            at,
        }
    }

    pub fn press(source: PointerSource, x: f32, y: f32, at: Instant) -> Self {
        Self::new(source, PointerPhase::Press, x, y, at)
    }

    pub fn moved(source: PointerSource, x: f32, y: f32, at: Instant) -> Self {
        Self::new(source, PointerPhase::Move, x, y, at)
    }

    pub fn release(source: PointerSource, x: f32, y: f32, at: Instant) -> Self {
        Self::new(source, PointerPhase::Release, x, y, at)
    }

    pub fn leave(source: PointerSource, x: f32, y: f32, at: Instant) -> Self {
        Self::new(source, PointerPhase::Leave, x, y, at)
    }
}

/// Navigation requested by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Previous,
    First,
    Last,
    GoTo(usize),
}

/// What a pointer event meant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// No gesture in progress for this source, or another source owns it
    Ignored,
    /// A new gesture started
    Pressed,
    /// Pointer moved without horizontal intent; platform default applies
    Undecided,
    /// Horizontal drag in progress; `delta_x` is start minus current (px)
    Dragging { delta_x: f32 },
    /// Gesture ended with a page change
    Commit(NavIntent),
    /// Gesture ended without a page change; restore the resting transform
    SnapBack,
}

impl GestureOutcome {
    /// Whether the platform's native scroll/selection should be suppressed
    pub fn suppresses_default(&self) -> bool {
        matches!(self, GestureOutcome::Dragging { .. })
    }

    pub fn ends_gesture(&self) -> bool {
        matches!(self, GestureOutcome::Commit(_) | GestureOutcome::SnapBack)
    }
}

/// State of the gesture in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub source: PointerSource,
    pub start_x: f32,
    pub start_y: f32,
    pub start_time: Instant,
    /// Set once horizontal intent is confirmed; stays set until release
    pub axis_locked: bool,
}

/// Turns pointer events into drag updates and navigation commits
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    swipe_threshold: f32,
    active: Option<GestureState>,
}

impl GestureInterpreter {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe_threshold,
            active: None,
        }
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    pub fn active(&self) -> Option<&GestureState> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.map(|g| g.axis_locked).unwrap_or(false)
    }

    /// Forget any gesture in progress without evaluating it
    pub fn reset(&mut self) {
        self.active = None;
    }

    pub fn handle(&mut self, event: PointerEvent) -> GestureOutcome {
        match event.phase {
            PointerPhase::Press => self.press(event),
            PointerPhase::Move => self.moved(event),
            PointerPhase::Release | PointerPhase::Leave => self.release(event),
        }
    }

    fn owned_by(&self, source: PointerSource) -> Option<GestureState> {
        self.active.filter(|g| g.source == source)
    }

    fn press(&mut self, event: PointerEvent) -> GestureOutcome {
        if let Some(other) = self.active.filter(|g| g.source != event.source) {
            tracing::debug!(
                "Ignoring {:?} press while {:?} gesture is active",
                event.source,
                other.source
            );
            return GestureOutcome::Ignored;
        }

        self.active = Some(GestureState {
            source: event.source,
            start_x: event.x,
            start_y: event.y,
            start_time: event.at,
            axis_locked: false,
        });
        GestureOutcome::Pressed
    }

    fn moved(&mut self, event: PointerEvent) -> GestureOutcome {
        let Some(mut gesture) = self.owned_by(event.source) else {
            return GestureOutcome::Ignored;
        };

        let delta_x = gesture.start_x - event.x;
        let delta_y = gesture.start_y - event.y;

        if !gesture.axis_locked
            && delta_x.abs() > delta_y.abs()
            && delta_x.abs() > AXIS_LOCK_DISTANCE
        {
            tracing::debug!("{:?} gesture locked horizontal at dx={}", event.source, delta_x);
            gesture.axis_locked = true;
            self.active = Some(gesture);
        }

        if gesture.axis_locked {
            GestureOutcome::Dragging { delta_x }
        } else {
            GestureOutcome::Undecided
        }
    }

    fn release(&mut self, event: PointerEvent) -> GestureOutcome {
        let Some(gesture) = self.owned_by(event.source) else {
            return GestureOutcome::Ignored;
        };
        self.active = None;

        let delta_x = gesture.start_x - event.x;
        // Floor at 1ms so a same-instant release cannot divide by zero
        let elapsed_ms = (event
            .at
            .saturating_duration_since(gesture.start_time)
            .as_secs_f32()
            * 1000.0)
            .max(1.0);
        let velocity = delta_x.abs() / elapsed_ms;

        let commits = gesture.axis_locked
            && (delta_x.abs() > self.swipe_threshold || velocity > FLICK_VELOCITY);

        tracing::debug!(
            "{:?} release: dx={} elapsed={}ms velocity={:.3} locked={} commit={}",
            event.source,
            delta_x,
            elapsed_ms,
            velocity,
            gesture.axis_locked,
            commits
        );

        if !commits {
            GestureOutcome::SnapBack
        } else if delta_x > 0.0 {
            GestureOutcome::Commit(NavIntent::Next)
        } else {
            GestureOutcome::Commit(NavIntent::Previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const TOUCH: PointerSource = PointerSource::Touch;
    const MOUSE: PointerSource = PointerSource::Mouse;

    /// Press at (start_x, 100), move to end_x, release at end_x after `ms`
    fn swipe(source: PointerSource, start_x: f32, end_x: f32, ms: u64) -> GestureOutcome {
        let mut interp = GestureInterpreter::new(50.0);
        let t0 = Instant::now();
        assert_eq!(
            interp.handle(PointerEvent::press(source, start_x, 100.0, t0)),
            GestureOutcome::Pressed
        );
        let mid = t0 + Duration::from_millis(ms / 2);
        interp.handle(PointerEvent::moved(source, end_x, 100.0, mid));
        interp.handle(PointerEvent::release(
            source,
            end_x,
            100.0,
            t0 + Duration::from_millis(ms),
        ))
    }

    #[test]
    fn test_threshold_swipe_commits_regardless_of_time() {
        // dx = +80 (moved left) -> next
        assert_eq!(
            swipe(TOUCH, 300.0, 220.0, 5_000),
            GestureOutcome::Commit(NavIntent::Next)
        );
        // dx = -80 (moved right) -> previous
        assert_eq!(
            swipe(TOUCH, 220.0, 300.0, 5_000),
            GestureOutcome::Commit(NavIntent::Previous)
        );
        assert_eq!(
            swipe(MOUSE, 300.0, 220.0, 5_000),
            GestureOutcome::Commit(NavIntent::Next)
        );
    }

    #[test]
    fn test_fast_flick_commits_below_threshold() {
        // 30px in 60ms = 0.5 px/ms
        assert_eq!(
            swipe(TOUCH, 300.0, 270.0, 60),
            GestureOutcome::Commit(NavIntent::Next)
        );
        assert_eq!(
            swipe(MOUSE, 270.0, 300.0, 60),
            GestureOutcome::Commit(NavIntent::Previous)
        );
    }

    #[test]
    fn test_slow_short_drag_snaps_back() {
        // 30px in 1s = 0.03 px/ms
        assert_eq!(swipe(TOUCH, 300.0, 270.0, 1_000), GestureOutcome::SnapBack);
    }

    #[test]
    fn test_vertical_gesture_never_locks() {
        let mut interp = GestureInterpreter::new(50.0);
        let t0 = Instant::now();
        interp.handle(PointerEvent::press(TOUCH, 100.0, 100.0, t0));

        // |dx| <= |dy| throughout
        for step in 1..=10 {
            let outcome = interp.handle(PointerEvent::moved(
                TOUCH,
                100.0 - step as f32 * 6.0,
                100.0 - step as f32 * 20.0,
                t0 + Duration::from_millis(step * 10),
            ));
            assert_eq!(outcome, GestureOutcome::Undecided);
            assert!(!outcome.suppresses_default());
        }
        assert!(!interp.is_dragging());

        // Large fast release without lock still snaps back
        let outcome = interp.handle(PointerEvent::release(
            TOUCH,
            40.0,
            -100.0,
            t0 + Duration::from_millis(110),
        ));
        assert_eq!(outcome, GestureOutcome::SnapBack);
    }

    #[test]
    fn test_short_horizontal_move_stays_undecided() {
        let mut interp = GestureInterpreter::new(50.0);
        let t0 = Instant::now();
        interp.handle(PointerEvent::press(MOUSE, 100.0, 100.0, t0));
        let outcome = interp.handle(PointerEvent::moved(MOUSE, 90.0, 100.0, t0));
        assert_eq!(outcome, GestureOutcome::Undecided);
    }

    #[test]
    fn test_axis_lock_persists_for_gesture_lifetime() {
        let mut interp = GestureInterpreter::new(50.0);
        let t0 = Instant::now();
        interp.handle(PointerEvent::press(TOUCH, 200.0, 100.0, t0));

        let outcome = interp.handle(PointerEvent::moved(TOUCH, 180.0, 100.0, t0));
        assert_eq!(outcome, GestureOutcome::Dragging { delta_x: 20.0 });
        assert!(outcome.suppresses_default());

        // Drifting mostly vertical afterwards keeps the lock
        let outcome = interp.handle(PointerEvent::moved(TOUCH, 185.0, 10.0, t0));
        assert_eq!(outcome, GestureOutcome::Dragging { delta_x: 15.0 });
        assert!(interp.is_dragging());
    }

    #[test]
    fn test_leave_while_pressed_evaluates_like_release() {
        let mut interp = GestureInterpreter::new(50.0);
        let t0 = Instant::now();
        interp.handle(PointerEvent::press(MOUSE, 300.0, 100.0, t0));
        interp.handle(PointerEvent::moved(MOUSE, 200.0, 100.0, t0));
        let outcome = interp.handle(PointerEvent::leave(
            MOUSE,
            200.0,
            100.0,
            t0 + Duration::from_secs(2),
        ));
        assert_eq!(outcome, GestureOutcome::Commit(NavIntent::Next));
        assert!(interp.active().is_none());

        // Leave with nothing pressed is ignored
        let outcome = interp.handle(PointerEvent::leave(MOUSE, 0.0, 0.0, t0));
        assert_eq!(outcome, GestureOutcome::Ignored);
    }

    #[test]
    fn test_other_source_cannot_steal_gesture() {
        let mut interp = GestureInterpreter::new(50.0);
        let t0 = Instant::now();
        interp.handle(PointerEvent::press(TOUCH, 300.0, 100.0, t0));

        assert_eq!(
            interp.handle(PointerEvent::press(MOUSE, 0.0, 0.0, t0)),
            GestureOutcome::Ignored
        );
        assert_eq!(
            interp.handle(PointerEvent::moved(MOUSE, 100.0, 0.0, t0)),
            GestureOutcome::Ignored
        );
        assert_eq!(
            interp.handle(PointerEvent::release(MOUSE, 100.0, 0.0, t0)),
            GestureOutcome::Ignored
        );
        assert_eq!(interp.active().map(|g| g.source), Some(TOUCH));
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut interp = GestureInterpreter::new(50.0);
        let outcome = interp.handle(PointerEvent::moved(TOUCH, 10.0, 10.0, Instant::now()));
        assert_eq!(outcome, GestureOutcome::Ignored);
    }

    #[test]
    fn test_same_instant_release_does_not_divide_by_zero() {
        let mut interp = GestureInterpreter::new(50.0);
        let t0 = Instant::now();
        interp.handle(PointerEvent::press(TOUCH, 100.0, 100.0, t0));
        interp.handle(PointerEvent::moved(TOUCH, 80.0, 100.0, t0));
        // 20px over the 1ms floor = 20 px/ms
        let outcome = interp.handle(PointerEvent::release(TOUCH, 80.0, 100.0, t0));
        assert_eq!(outcome, GestureOutcome::Commit(NavIntent::Next));
    }
}
