/// Gain interpolation
///
/// A `Fade` is an owned value sampled from the scheduler tick: dropping or
/// replacing it is the cancellation, so there is never a stale interval
/// timer still mutating a track's gain.
use std::time::Duration;

/// Recommended tick cadence for sampling fades
pub const TICK: Duration = Duration::from_millis(50);

/// Linear gain ramp between two levels over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    start: Duration,
    duration: Duration,
    from: f32,
    to: f32,
}

impl Fade {
    pub fn new(start: Duration, duration: Duration, from: f32, to: f32) -> Self {
        Self {
            start,
            duration,
            from,
            to,
        }
    }

    /// `lerp(from, to, clamp(elapsed / duration, 0, 1))`
    pub fn gain(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_sub(self.start);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    pub fn done(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.duration
    }
}
