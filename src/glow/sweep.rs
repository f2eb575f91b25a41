//! Sweep animation driver
//!
//! The traveling highlight is driven by a single scalar progress value
//! that rises linearly from -0.5 to 1.5 over one period and then snaps
//! back, so the gradient window enters from beyond the left edge and
//! leaves past the right edge without visible truncation. Progress is a
//! pure function of elapsed time; the wall-clock bookkeeping (mount
//! instant, pausing) lives in [`SweepClock`].

use std::time::{Duration, Instant};

/// Progress value at the start of a cycle, below the visible range.
pub const SWEEP_START: f32 = -0.5;
/// Progress value at the end of a cycle, above the visible range.
pub const SWEEP_END: f32 = 1.5;
/// Length of one full sweep cycle.
pub const SWEEP_PERIOD: Duration = Duration::from_millis(2000);

/// Periodic linear progress function.
#[derive(Debug, Clone, Copy)]
pub struct Sweep {
    period: Duration,
}

impl Default for Sweep {
    fn default() -> Self {
        Self { period: SWEEP_PERIOD }
    }
}

impl Sweep {
    /// Sweep with a custom period (zero falls back to the default)
    pub fn with_period(period: Duration) -> Self {
        if period.is_zero() {
            Self::default()
        } else {
            Self { period }
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Progress at a given elapsed time since mount.
    ///
    /// Monotonically increasing within each period, restarting at the
    /// cycle boundary (no ping-pong).
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        let period_ms = self.period.as_secs_f64() * 1000.0;
        let t = (elapsed.as_secs_f64() * 1000.0) % period_ms;
        let fraction = (t / period_ms) as f32;
        SWEEP_START + (SWEEP_END - SWEEP_START) * fraction
    }
}

/// Wall-clock state for a mounted sweep: when it started and whether it
/// is currently frozen.
#[derive(Debug, Clone)]
pub struct SweepClock {
    sweep: Sweep,
    mounted: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
}

impl SweepClock {
    pub fn new(sweep: Sweep) -> Self {
        Self {
            sweep,
            mounted: Instant::now(),
            paused_at: None,
            paused_total: Duration::ZERO,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Animated time since mount, excluding paused stretches
    pub fn elapsed(&self) -> Duration {
        let end = self.paused_at.unwrap_or_else(Instant::now);
        end.duration_since(self.mounted)
            .saturating_sub(self.paused_total)
    }

    /// Current progress value
    pub fn progress(&self) -> f32 {
        self.sweep.progress_at(self.elapsed())
    }

    /// Freeze the animation at its current progress
    pub fn pause(&mut self) {
        if self.paused_at.is_none() {
            self.paused_at = Some(Instant::now());
        }
    }

    /// Resume after a pause; elapsed time does not include the gap
    pub fn resume(&mut self) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += paused_at.elapsed();
        }
    }

    pub fn toggle_paused(&mut self) {
        if self.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Restart the sweep from the beginning of a cycle
    pub fn restart(&mut self) {
        self.mounted = Instant::now();
        self.paused_total = Duration::ZERO;
        if self.paused_at.is_some() {
            self.paused_at = Some(self.mounted);
        }
    }
}

/// Frame budget for a given refresh rate
pub fn frame_duration(fps: u16) -> Duration {
    let fps = fps.max(1);
    Duration::from_secs_f64(1.0 / fps as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "expected {} ~= {}", a, b);
    }

    #[test]
    fn test_progress_samples() {
        let sweep = Sweep::default();
        assert_close(sweep.progress_at(Duration::from_millis(0)), -0.5);
        assert_close(sweep.progress_at(Duration::from_millis(999)), 0.499);
        // Cycle boundary restarts discontinuously
        assert_close(sweep.progress_at(Duration::from_millis(2000)), -0.5);
        assert_close(sweep.progress_at(Duration::from_millis(2001)), -0.499);
    }

    #[test]
    fn test_progress_monotonic_within_period() {
        let sweep = Sweep::default();
        let mut last = f32::NEG_INFINITY;
        for ms in (0..2000).step_by(50) {
            let p = sweep.progress_at(Duration::from_millis(ms));
            assert!(p > last, "progress must increase within a period");
            last = p;
        }
    }

    #[test]
    fn test_progress_periodic() {
        let sweep = Sweep::default();
        for ms in [0u64, 137, 500, 1234, 1999] {
            assert_close(
                sweep.progress_at(Duration::from_millis(ms)),
                sweep.progress_at(Duration::from_millis(ms + 2000)),
            );
        }
    }

    #[test]
    fn test_progress_range() {
        let sweep = Sweep::default();
        for ms in 0..4000u64 {
            let p = sweep.progress_at(Duration::from_millis(ms));
            assert!((SWEEP_START..SWEEP_END).contains(&p));
        }
    }

    #[test]
    fn test_custom_period() {
        let sweep = Sweep::with_period(Duration::from_millis(1000));
        assert_close(sweep.progress_at(Duration::from_millis(500)), 0.5);
        // Zero period is rejected rather than dividing by zero
        let fallback = Sweep::with_period(Duration::ZERO);
        assert_eq!(fallback.period(), SWEEP_PERIOD);
    }

    #[test]
    fn test_clock_pause_freezes_elapsed() {
        let mut clock = SweepClock::new(Sweep::default());
        clock.pause();
        let e1 = clock.elapsed();
        let e2 = clock.elapsed();
        assert_eq!(e1, e2);
        assert!(clock.is_paused());

        clock.resume();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_clock_restart_rewinds() {
        let mut clock = SweepClock::new(Sweep::default());
        clock.pause();
        clock.restart();
        // Still paused, but back at the start of the cycle
        assert!(clock.is_paused());
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_close(clock.progress(), SWEEP_START);
    }

    #[test]
    fn test_frame_duration() {
        // 60fps = ~16.67ms per frame
        let d = frame_duration(60);
        assert!(d.as_millis() >= 16 && d.as_millis() <= 17);
        // Degenerate fps clamps instead of dividing by zero
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }
}
