//! Stat count-up animation.
//!
//! The numeric part is pure: [`CountUp::value_at`] maps progress to a value
//! with ease-out cubic. [`animate_count`] drives it frame by frame on a tokio
//! interval for callers that want a live sequence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval};

/// Frame period of the driver, roughly 60 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Animation of a number from `start` to `target` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub start: f64,
    pub target: f64,
    pub duration: Duration,
}

impl CountUp {
    /// Counts from zero.
    pub fn new(target: f64, duration: Duration) -> Self {
        Self {
            start: 0.0,
            target,
            duration,
        }
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Value at normalized progress `t`. `value_at(1.0)` is exactly `target`.
    pub fn value_at(&self, t: f64) -> f64 {
        if t >= 1.0 {
            return self.target;
        }
        self.start + (self.target - self.start) * ease_out_cubic(t)
    }

    /// Normalized progress after `elapsed`, in `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn sample(&self, elapsed: Duration) -> f64 {
        self.value_at(self.progress(elapsed))
    }

    /// Whole number shown to the reader at `elapsed`.
    pub fn display(&self, elapsed: Duration) -> i64 {
        self.sample(elapsed).floor() as i64
    }
}

/// How a call to [`animate_count`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// The final frame carried the exact target.
    Completed,
    /// `cancel` was observed before the animation finished.
    Cancelled,
    /// `activated` was already set, no frame was emitted.
    AlreadyActivated,
}

/// Runs `count_up`, calling `on_frame` with the value of every frame.
///
/// The animation runs at most once per `activated` flag. Once `cancel` is
/// set no further frame is emitted.
pub async fn animate_count<F>(
    count_up: &CountUp,
    mut on_frame: F,
    activated: &AtomicBool,
    cancel: &AtomicBool,
) -> AnimationOutcome
where
    F: FnMut(f64),
{
    if activated
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        debug!("count-up already activated, skipping");
        return AnimationOutcome::AlreadyActivated;
    }

    let started = Instant::now();
    let mut ticker = interval(FRAME_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        if cancel.load(Ordering::Acquire) {
            trace!("count-up cancelled");
            return AnimationOutcome::Cancelled;
        }

        let t = count_up.progress(started.elapsed());
        on_frame(count_up.value_at(t));
        if t >= 1.0 {
            return AnimationOutcome::Completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat() -> CountUp {
        CountUp::new(5000.0, Duration::from_millis(2200))
    }

    #[test]
    fn test_count_up_monotone_with_exact_endpoint() {
        let c = stat();
        let mut prev = c.value_at(0.0);
        assert_eq!(prev, 0.0);
        for i in 1..=1000 {
            let v = c.value_at(i as f64 / 1000.0);
            assert!(v >= prev, "value decreased at step {i}: {prev} -> {v}");
            assert!(v <= 5000.0);
            prev = v;
        }
        assert_eq!(c.value_at(1.0), 5000.0);
        assert_eq!(c.sample(Duration::from_millis(2200)), 5000.0);
        assert_eq!(c.sample(Duration::from_secs(10)), 5000.0);
    }

    #[test]
    fn test_display_floors() {
        let c = stat();
        assert_eq!(c.display(Duration::ZERO), 0);
        assert_eq!(c.display(Duration::from_millis(2200)), 5000);
        let mid = c.sample(Duration::from_millis(1100));
        assert_eq!(c.display(Duration::from_millis(1100)), mid.floor() as i64);
        // eased: past the linear midpoint
        assert!(mid > 2500.0);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let c = CountUp::new(42.0, Duration::ZERO).with_start(7.0);
        assert_eq!(c.sample(Duration::ZERO), 42.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_animation_ends_on_target() {
        let activated = AtomicBool::new(false);
        let cancel = AtomicBool::new(false);
        let mut frames = Vec::new();

        let outcome = animate_count(&stat(), |v| frames.push(v), &activated, &cancel).await;

        assert_eq!(outcome, AnimationOutcome::Completed);
        assert_eq!(frames.last().copied(), Some(5000.0));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!(frames.len() > 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_animation_runs_once() {
        let activated = AtomicBool::new(false);
        let cancel = AtomicBool::new(false);
        let c = CountUp::new(10.0, Duration::from_millis(100));

        let first = animate_count(&c, |_| {}, &activated, &cancel).await;
        let mut frames = 0;
        let second = animate_count(&c, |_| frames += 1, &activated, &cancel).await;

        assert_eq!(first, AnimationOutcome::Completed);
        assert_eq!(second, AnimationOutcome::AlreadyActivated);
        assert_eq!(frames, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_frames() {
        let activated = AtomicBool::new(false);
        let cancel = AtomicBool::new(false);
        let mut frames = Vec::new();

        let outcome = animate_count(
            &stat(),
            |v| {
                frames.push(v);
                if frames.len() == 5 {
                    cancel.store(true, Ordering::Release);
                }
            },
            &activated,
            &cancel,
        )
        .await;

        assert_eq!(outcome, AnimationOutcome::Cancelled);
        assert_eq!(frames.len(), 5);
        assert!(frames.iter().all(|v| *v < 5000.0));
    }
}
