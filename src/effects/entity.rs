/// Entity pool: typed records for everything the effect engine animates
///
/// Pure data. Every entity carries its creation time and a life span;
/// progress is always recomputed from the clock, never stored. An entity is
/// live iff `now - start < life` and is dropped on the first update where
/// that no longer holds.
use std::time::Duration;

use crossbeam_channel::Sender;

use super::color::Rgba;
use crate::units::ProjectileType;

/// Normalized elapsed fraction of a lifetime, clamped to [0, 1]
pub fn progress(start: Duration, life: Duration, now: Duration) -> f32 {
    if life.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start);
    (elapsed.as_secs_f32() / life.as_secs_f32()).clamp(0.0, 1.0)
}

/// Liveness test shared by every entity family
pub fn is_live(start: Duration, life: Duration, now: Duration) -> bool {
    now.saturating_sub(start) < life
}

/// A projectile in flight from muzzle to target
pub struct ShotAnimation {
    pub from_x: f32,
    pub from_y: f32,
    pub to_x: f32,
    pub to_y: f32,
    pub start: Duration,
    pub duration: Duration,
    pub projectile: ProjectileType,
    pub critical: bool,

    /// One-shot completion signal; taken and fired exactly once when the
    /// shot expires. This is the only channel gameplay logic has for
    /// learning that the projectile visually landed.
    pub(crate) done: Option<Sender<()>>,
}

impl ShotAnimation {
    pub fn progress(&self, now: Duration) -> f32 {
        progress(self.start, self.duration, now)
    }

    pub fn is_live(&self, now: Duration) -> bool {
        is_live(self.start, self.duration, now)
    }
}

/// Particle behavior variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleKind {
    /// Moves by velocity integration each frame
    Spark,
    /// Stationary, stroke radius animated from `from` to `to` over life
    Ring { from: f32, to: f32 },
    /// Stationary radial flash, expands and fades
    Flash,
    /// Drifts upward, grows multiplicatively
    Smoke,
    /// Stationary irregular polygon
    Splatter,
}

pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: Rgba,
    pub start: Duration,
    pub life: Duration,
    pub kind: ParticleKind,

    /// Alpha tracks remaining life when set
    pub fade_out: bool,

    /// Added to vy each frame; 0 for unaffected particles
    pub gravity: f32,

    /// Per-frame size multiplier; 1.0 keeps the size constant
    pub grow: f32,
}

impl Particle {
    pub fn progress(&self, now: Duration) -> f32 {
        progress(self.start, self.life, now)
    }

    pub fn is_live(&self, now: Duration) -> bool {
        is_live(self.start, self.life, now)
    }
}

/// Expanding fireball; radius rises then collapses back to zero
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    pub max_radius: f32,
    pub start: Duration,
    pub duration: Duration,
    pub inner: Rgba,
    pub mid: Rgba,
    pub rim: Rgba,
}

impl Explosion {
    pub fn progress(&self, now: Duration) -> f32 {
        progress(self.start, self.duration, now)
    }

    pub fn is_live(&self, now: Duration) -> bool {
        is_live(self.start, self.duration, now)
    }

    /// `max_radius * sin(progress * PI)`: zero at both ends, peak at 0.5
    pub fn radius(&self, now: Duration) -> f32 {
        self.max_radius * (self.progress(now) * std::f32::consts::PI).sin()
    }
}

/// Floating damage number
pub struct DamageText {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub color: Rgba,
    pub outline: Rgba,
    pub size: f32,
    pub start: Duration,
    pub life: Duration,

    /// Vertical velocity per frame; negative values float upward
    pub vy: f32,
}

impl DamageText {
    pub fn progress(&self, now: Duration) -> f32 {
        progress(self.start, self.life, now)
    }

    pub fn is_live(&self, now: Duration) -> bool {
        is_live(self.start, self.life, now)
    }

    /// Fully opaque for 70% of life, then fades linearly to zero
    pub fn alpha(&self, now: Duration) -> f32 {
        let p = self.progress(now);
        if p < 0.7 {
            1.0
        } else {
            ((1.0 - p) / 0.3).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(ms(100), ms(200), ms(50)), 0.0);
        assert_eq!(progress(ms(100), ms(200), ms(200)), 0.5);
        assert_eq!(progress(ms(100), ms(200), ms(900)), 1.0);
    }

    #[test]
    fn test_liveness_boundary() {
        // Live strictly before start + life, dead exactly at it
        assert!(is_live(ms(0), ms(300), ms(299)));
        assert!(!is_live(ms(0), ms(300), ms(300)));
        assert!(!is_live(ms(0), ms(300), ms(301)));
    }

    #[test]
    fn test_explosion_radius_profile() {
        let e = Explosion {
            x: 0.0,
            y: 0.0,
            max_radius: 75.0,
            start: ms(0),
            duration: ms(1050),
            inner: Rgba::WHITE,
            mid: Rgba::WHITE,
            rim: Rgba::WHITE,
        };

        assert!(e.radius(ms(0)).abs() < 1e-3);
        assert!((e.radius(ms(525)) - 75.0).abs() < 1e-3);
        assert!(e.radius(ms(1050)).abs() < 1e-3);
        // Never monotonic growth: halfway beats three quarters
        assert!(e.radius(ms(525)) > e.radius(ms(787)));
    }

    #[test]
    fn test_damage_text_alpha_fades_last_30_percent() {
        let t = DamageText {
            x: 0.0,
            y: 0.0,
            text: "42".to_string(),
            color: Rgba::WHITE,
            outline: Rgba::BLACK,
            size: 12.0,
            start: ms(0),
            life: ms(1000),
            vy: -0.5,
        };

        assert_eq!(t.alpha(ms(0)), 1.0);
        assert_eq!(t.alpha(ms(699)), 1.0);
        let late = t.alpha(ms(850));
        assert!(late > 0.0 && late < 1.0);
        assert!(t.alpha(ms(1000)) < 1e-6);
    }
}
