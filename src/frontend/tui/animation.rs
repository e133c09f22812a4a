//! Eases the screen strip between resting positions.
//!
//! The core publishes a target [`ViewTransform`]. Animated targets are eased
//! toward over the configured duration; drag targets are applied immediately
//! so the strip tracks the pointer.

use crate::data::ViewTransform;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct StripAnimator {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

impl StripAnimator {
    pub fn new(offset_percent: f32) -> Self {
        Self {
            from: offset_percent,
            to: offset_percent,
            started: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    /// Retarget toward `transform`; a no-op when the target is unchanged
    pub fn update(&mut self, transform: ViewTransform, duration: Duration, now: Instant) {
        if (transform.offset_percent - self.to).abs() < f32::EPSILON {
            return;
        }

        if transform.animated && !duration.is_zero() {
            // Start from wherever the strip is drawn right now
            self.from = self.offset(now);
            self.duration = duration;
        } else {
            self.from = transform.offset_percent;
            self.duration = Duration::ZERO;
        }
        self.to = transform.offset_percent;
        self.started = now;
    }

    /// Offset (percent of viewport width) to draw at `now`
    pub fn offset(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * ease_out(t)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.duration.is_zero() && now.saturating_duration_since(self.started) < self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn test_animated_target_eases_over_duration() {
        let t0 = Instant::now();
        let mut anim = StripAnimator::new(0.0);
        anim.update(ViewTransform::at_screen(1), MS_300, t0);

        assert_eq!(anim.offset(t0), 0.0);
        let mid = anim.offset(t0 + Duration::from_millis(150));
        assert!(mid > 50.0 && mid < 100.0, "ease-out is past halfway at the midpoint: {}", mid);
        assert_eq!(anim.offset(t0 + MS_300), 100.0);
        assert!(anim.is_animating(t0 + Duration::from_millis(299)));
        assert!(!anim.is_animating(t0 + MS_300));
    }

    #[test]
    fn test_drag_target_applies_immediately() {
        let t0 = Instant::now();
        let mut anim = StripAnimator::new(100.0);
        anim.update(ViewTransform::dragging(1, 80.0, 800.0), MS_300, t0);
        assert!((anim.offset(t0) - 110.0).abs() < 1e-4);
        assert!(!anim.is_animating(t0));
    }

    #[test]
    fn test_snap_back_starts_from_drag_position() {
        let t0 = Instant::now();
        let mut anim = StripAnimator::new(100.0);
        anim.update(ViewTransform::dragging(1, 80.0, 800.0), MS_300, t0);
        anim.update(ViewTransform::at_screen(1), MS_300, t0);

        assert!((anim.offset(t0) - 110.0).abs() < 1e-4);
        assert!((anim.offset(t0 + MS_300) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_unchanged_target_keeps_running_animation() {
        let t0 = Instant::now();
        let mut anim = StripAnimator::new(0.0);
        anim.update(ViewTransform::at_screen(2), MS_300, t0);
        let before = anim.offset(t0 + Duration::from_millis(100));
        anim.update(ViewTransform::at_screen(2), MS_300, t0 + Duration::from_millis(100));
        assert_eq!(anim.offset(t0 + Duration::from_millis(100)), before);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let t0 = Instant::now();
        let mut anim = StripAnimator::new(0.0);
        anim.update(ViewTransform::at_screen(3), Duration::ZERO, t0);
        assert_eq!(anim.offset(t0), 300.0);
    }
}
