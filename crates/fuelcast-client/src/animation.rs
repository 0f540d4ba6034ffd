//! Count-up animation driven by a paint-cycle clock.
//!
//! Each frame computes `p = clamp((now - start) / duration, 0, 1)` and
//! renders `floor(p * (end - start_value) + start_value)`. The frame where
//! `p` reaches 1 renders the exact end value, so floor truncation never
//! leaks into the final display. Intermediate values are clamped to the
//! `[start, end]` range, so a count down to a negative fraction never dips
//! past its target.

use std::future::Future;
use std::time::Duration;

use fuelcast_core::traits::SubmitView;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::format::NumberFormat;

/// One interpolated frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub progress: f64,
    pub value: f64,
    pub done: bool,
}

/// Time-based interpolation from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    start: f64,
    end: f64,
    duration: Duration,
}

impl CountUp {
    pub fn new(start: f64, end: f64, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Frame at `elapsed` since the first frame. A zero duration completes
    /// immediately.
    pub fn frame(&self, elapsed: Duration) -> Frame {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };

        if progress < 1.0 {
            let (low, high) = if self.start <= self.end {
                (self.start, self.end)
            } else {
                (self.end, self.start)
            };
            let value = (progress * (self.end - self.start) + self.start).floor();
            Frame {
                progress,
                value: value.clamp(low, high),
                done: false,
            }
        } else {
            Frame {
                progress: 1.0,
                value: self.end,
                done: true,
            }
        }
    }
}

/// Source of display refresh timestamps.
pub trait FrameClock {
    /// Wait for the next paint and return its timestamp, measured from the
    /// clock's origin.
    fn next_frame(&mut self) -> impl Future<Output = Duration> + Send;
}

/// Real-time clock ticking at a fixed paint period.
#[derive(Debug)]
pub struct IntervalClock {
    interval: Interval,
    origin: Instant,
}

impl IntervalClock {
    pub fn new(period: Duration) -> Self {
        let origin = Instant::now();
        let mut interval = tokio::time::interval_at(origin, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval, origin }
    }
}

impl FrameClock for IntervalClock {
    async fn next_frame(&mut self) -> Duration {
        self.interval.tick().await.duration_since(self.origin)
    }
}

/// Virtual clock advancing a fixed step per frame without waiting.
#[derive(Debug, Clone)]
pub struct SteppedClock {
    step: Duration,
    now: Duration,
}

impl SteppedClock {
    /// `step` is raised to at least 1 ms so animations always finish.
    pub fn new(step: Duration) -> Self {
        Self {
            step: step.max(Duration::from_millis(1)),
            now: Duration::ZERO,
        }
    }
}

impl FrameClock for SteppedClock {
    async fn next_frame(&mut self) -> Duration {
        tokio::task::yield_now().await;
        let at = self.now;
        self.now += self.step;
        at
    }
}

/// Render `count_up` into the view's result display, one value per frame,
/// until the end value is shown. Returns the number of frames rendered.
///
/// The first frame's timestamp is the animation's start time.
pub async fn animate<V, C>(
    view: &V,
    count_up: &CountUp,
    clock: &mut C,
    format: &NumberFormat,
) -> usize
where
    V: SubmitView + ?Sized,
    C: FrameClock,
{
    let mut started_at: Option<Duration> = None;
    let mut frames = 0;

    loop {
        let now = clock.next_frame().await;
        let start = *started_at.get_or_insert(now);
        let frame = count_up.frame(now.saturating_sub(start));

        view.render_value(&format.format(frame.value));
        frames += 1;

        if frame.done {
            tracing::trace!(frames, value = frame.value, "count-up finished");
            return frames;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_start_value() {
        let count_up = CountUp::new(0.0, 500.0, Duration::from_millis(1000));
        let frame = count_up.frame(Duration::ZERO);
        assert_eq!(frame.value, 0.0);
        assert!(!frame.done);
    }

    #[test]
    fn intermediate_frames_are_floored() {
        let count_up = CountUp::new(0.0, 500.7, Duration::from_millis(1000));
        assert_eq!(count_up.frame(Duration::from_millis(500)).value, 250.0);
        assert_eq!(count_up.frame(Duration::from_millis(999)).value, 500.0);
    }

    #[test]
    fn final_frame_is_exact() {
        let count_up = CountUp::new(0.0, 500.7, Duration::from_millis(1000));
        let frame = count_up.frame(Duration::from_millis(1000));
        assert_eq!(frame.value, 500.7);
        assert!(frame.done);

        let late = count_up.frame(Duration::from_secs(5));
        assert_eq!(late.value, 500.7);
        assert_eq!(late.progress, 1.0);
    }

    #[test]
    fn negative_fraction_never_overshoots() {
        let count_up = CountUp::new(0.0, -0.01, Duration::from_millis(1000));
        assert_eq!(count_up.frame(Duration::ZERO).value, 0.0);
        assert_eq!(count_up.frame(Duration::from_millis(16)).value, -0.01);
        assert_eq!(count_up.frame(Duration::from_millis(1000)).value, -0.01);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let count_up = CountUp::new(0.0, 42.5, Duration::ZERO);
        let frame = count_up.frame(Duration::ZERO);
        assert!(frame.done);
        assert_eq!(frame.value, 42.5);
    }

    #[tokio::test]
    async fn stepped_clock_advances_by_step() {
        let mut clock = SteppedClock::new(Duration::from_millis(16));
        assert_eq!(clock.next_frame().await, Duration::ZERO);
        assert_eq!(clock.next_frame().await, Duration::from_millis(16));
        assert_eq!(clock.next_frame().await, Duration::from_millis(32));
    }

    #[tokio::test]
    async fn stepped_clock_never_stalls() {
        let mut clock = SteppedClock::new(Duration::ZERO);
        clock.next_frame().await;
        assert_eq!(clock.next_frame().await, Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn interval_clock_ticks_at_period() {
        let mut clock = IntervalClock::new(Duration::from_millis(16));
        assert_eq!(clock.next_frame().await, Duration::ZERO);
        assert_eq!(clock.next_frame().await, Duration::from_millis(16));
    }
}
