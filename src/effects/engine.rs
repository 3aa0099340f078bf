/// Effect engine: lifecycle, kinematics and compositing of transient visuals
///
/// Gameplay code calls the factory methods, which enqueue entities and play
/// the matched sound through the injected `AudioScheduler`. A frame driver
/// calls `update` once per frame and `draw` with the host's surface. Factory
/// calls never fail; missing or unknown unit data degrades to the default
/// bullet/rifle visuals.
use std::f32::consts::PI;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::color::Rgba;
use super::entity::{DamageText, Explosion, Particle, ParticleKind, ShotAnimation};
use super::surface::DrawSurface;
use crate::audio::AudioScheduler;
use crate::units::{ProjectileType, UnitCatalog};

const SHOT_DURATION: Duration = Duration::from_millis(300);
const MUZZLE_FLASH_LIFE: Duration = Duration::from_millis(100);
const RICOCHET_RING_LIFE: Duration = Duration::from_millis(300);

const EXPLOSION_BASE_RADIUS: f32 = 50.0;
const EXPLOSION_BASE_DURATION_MS: f32 = 700.0;
const DEBRIS_BASE_COUNT: f32 = 15.0;
const SMOKE_BASE_COUNT: f32 = 10.0;

/// Trailing rounds lag the lead round by this much progress
const BURST_ROUND_OFFSET: f32 = 0.12;
const TRACER_ROUND_OFFSET: f32 = 0.08;

const BLOOD_COLORS: [Rgba; 3] = [
    Rgba::new(158, 22, 22),
    Rgba::new(120, 10, 10),
    Rgba::new(88, 2, 2),
];
const SPARK_COLORS: [Rgba; 3] = [
    Rgba::new(255, 204, 64),
    Rgba::new(255, 140, 0),
    Rgba::new(255, 232, 160),
];
const DEBRIS_COLORS: [Rgba; 3] = [
    Rgba::new(90, 90, 90),
    Rgba::new(130, 120, 110),
    Rgba::new(255, 140, 0),
];
const SPLATTER_COLOR: Rgba = Rgba::new(96, 6, 6);
const SMOKE_COLOR: Rgba = Rgba::with_alpha(70, 70, 70, 0.6);
const RING_COLOR: Rgba = Rgba::new(255, 220, 150);

/// Explosion size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionSize {
    Small,
    Medium,
    Large,
    Huge,
}

impl ExplosionSize {
    /// Multiplier applied to base radius, duration and particle counts
    pub fn multiplier(&self) -> f32 {
        match self {
            ExplosionSize::Small => 0.7,
            ExplosionSize::Medium => 1.0,
            ExplosionSize::Large => 1.5,
            ExplosionSize::Huge => 2.5,
        }
    }
}

/// One-shot completion token returned by `shot`
///
/// Fulfilled with no payload when the projectile visually arrives. Gameplay
/// can poll it from its own update, or select on the raw receiver.
pub struct ShotToken {
    rx: Receiver<()>,
    landed: bool,
}

impl ShotToken {
    /// True once the shot has landed; latches after the first true
    pub fn poll(&mut self) -> bool {
        if !self.landed && self.rx.try_recv().is_ok() {
            self.landed = true;
        }
        self.landed
    }

    pub fn receiver(&self) -> &Receiver<()> {
        &self.rx
    }
}

/// Secondary explosion waiting on its stagger delay
struct PendingExplosion {
    due: Duration,
    x: f32,
    y: f32,
    size: ExplosionSize,
}

pub struct EffectEngine {
    catalog: UnitCatalog,
    shots: Vec<ShotAnimation>,
    particles: Vec<Particle>,
    explosions: Vec<Explosion>,
    damage_texts: Vec<DamageText>,
    pending: Vec<PendingExplosion>,
    rng: StdRng,
}

impl EffectEngine {
    pub fn new(catalog: UnitCatalog) -> Self {
        Self::with_seed(catalog, rand::random())
    }

    /// Deterministic engine for tests
    pub fn with_seed(catalog: UnitCatalog, seed: u64) -> Self {
        Self {
            catalog,
            shots: Vec::new(),
            particles: Vec::new(),
            explosions: Vec::new(),
            damage_texts: Vec::new(),
            pending: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // ---- factory operations ------------------------------------------------

    /// Launch a projectile animation from `from` to `to`.
    ///
    /// Picks the projectile visual and weapon sound from the firing unit's
    /// category, emits a muzzle flash at the origin, and returns a token
    /// fulfilled exactly once when the shot lands (progress reaches 1).
    pub fn shot(
        &mut self,
        audio: &mut AudioScheduler,
        now: Duration,
        from: (f32, f32),
        to: (f32, f32),
        unit: Option<&str>,
        critical: bool,
    ) -> ShotToken {
        let category = self.catalog.resolve(unit);
        audio.play_sound(category.weapon_sound(), 0.6);
        self.muzzle_flash(now, from.0, from.1);

        let (tx, rx) = bounded(1);
        self.shots.push(ShotAnimation {
            from_x: from.0,
            from_y: from.1,
            to_x: to.0,
            to_y: to.1,
            start: now,
            duration: SHOT_DURATION,
            projectile: category.projectile(),
            critical,
            done: Some(tx),
        });

        tracing::debug!(
            "Shot ({:?}) from ({:.0},{:.0}) to ({:.0},{:.0})",
            category.projectile(),
            from.0,
            from.1,
            to.0,
            to.1
        );
        ShotToken { rx, landed: false }
    }

    /// Sparks plus an expanding ring where a shot glanced off armor
    pub fn ricochet(&mut self, audio: &mut AudioScheduler, now: Duration, x: f32, y: f32) {
        audio.play_sound("ricochet", 0.4);

        let count = self.rng.gen_range(8..=12);
        let base_angle = self.rng.gen_range(0.0..PI * 2.0);
        for _ in 0..count {
            let angle = base_angle + self.rng.gen_range(-0.25..0.25);
            let speed = self.rng.gen_range(0.8..2.2);
            let life = Duration::from_millis(self.rng.gen_range(200..450));
            let color = SPARK_COLORS[self.rng.gen_range(0..SPARK_COLORS.len())];
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                size: self.rng.gen_range(1.0..2.5),
                color,
                start: now,
                life,
                kind: ParticleKind::Spark,
                fade_out: true,
                gravity: 0.0,
                grow: 1.0,
            });
        }

        self.particles.push(Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 5.0,
            color: RING_COLOR,
            start: now,
            life: RICOCHET_RING_LIFE,
            kind: ParticleKind::Ring { from: 5.0, to: 25.0 },
            fade_out: true,
            gravity: 0.0,
            grow: 1.0,
        });
    }

    /// Impact feedback: particles, a shockwave ring and a damage number.
    ///
    /// Infantry bleed red; vehicles throw yellow sparks. Blocked hits get
    /// fewer, weaker particles. The text reads "BLOCKED" whenever the damage
    /// value is zero, independent of the penetration flag.
    #[allow(clippy::too_many_arguments)]
    pub fn hit(
        &mut self,
        audio: &mut AudioScheduler,
        now: Duration,
        x: f32,
        y: f32,
        damage: u32,
        critical: bool,
        penetrated: bool,
        unit: Option<&str>,
    ) {
        let category = self.catalog.resolve(unit);
        let vehicle = category.is_vehicle();
        let scale = if penetrated { 1.0 } else { 0.5 };

        audio.play_sound(if vehicle { "hit_armor" } else { "hit_flesh" }, 0.5);

        let count = if penetrated {
            self.rng.gen_range(8..=12)
        } else {
            self.rng.gen_range(4..=6)
        };
        let palette = if vehicle { &SPARK_COLORS } else { &BLOOD_COLORS };
        for _ in 0..count {
            let angle = self.rng.gen_range(0.0..PI * 2.0);
            let speed = self.rng.gen_range(0.8..2.4) * scale;
            let life_ms = if vehicle {
                self.rng.gen_range(250..500)
            } else {
                self.rng.gen_range(300..600)
            };
            let color = palette[self.rng.gen_range(0..palette.len())];
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                size: self.rng.gen_range(1.5..3.5) * scale,
                color,
                start: now,
                life: Duration::from_millis(life_ms),
                kind: ParticleKind::Spark,
                fade_out: true,
                gravity: 0.0,
                grow: 1.0,
            });
        }

        // Shockwave ring, scaled down the same way on a block
        self.particles.push(Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 2.0,
            color: RING_COLOR,
            start: now,
            life: Duration::from_millis(250),
            kind: ParticleKind::Ring {
                from: 2.0,
                to: 16.0 * scale,
            },
            fade_out: true,
            gravity: 0.0,
            grow: 1.0,
        });

        // Long-lived ground splatter on a penetrating infantry hit
        if penetrated && !vehicle {
            for _ in 0..3 {
                let ox = self.rng.gen_range(-12.0..12.0);
                let oy = self.rng.gen_range(-12.0..12.0);
                self.particles.push(Particle {
                    x: x + ox,
                    y: y + oy,
                    vx: 0.0,
                    vy: 0.0,
                    size: self.rng.gen_range(3.0..7.0),
                    color: SPLATTER_COLOR,
                    start: now,
                    life: Duration::from_millis(self.rng.gen_range(2000..=5000)),
                    kind: ParticleKind::Splatter,
                    fade_out: true,
                    gravity: 0.0,
                    grow: 1.0,
                });
            }
        }

        let text = if damage == 0 {
            "BLOCKED".to_string()
        } else {
            damage.to_string()
        };
        let (size, color) = if critical {
            (18.0, Rgba::new(255, 90, 40))
        } else {
            (12.0, Rgba::WHITE)
        };
        self.damage_texts.push(DamageText {
            x,
            y,
            text,
            color,
            outline: Rgba::BLACK,
            size,
            start: now,
            life: Duration::from_millis(900),
            vy: -0.7,
        });
    }

    /// Fireball, debris, smoke and a shockwave ring, all scaled by `size`
    pub fn explosion(
        &mut self,
        audio: &mut AudioScheduler,
        now: Duration,
        x: f32,
        y: f32,
        size: ExplosionSize,
    ) {
        let m = size.multiplier();
        audio.play_sound("explosion", (0.5 * m).min(1.0));

        self.explosions.push(Explosion {
            x,
            y,
            max_radius: EXPLOSION_BASE_RADIUS * m,
            start: now,
            duration: Duration::from_millis((EXPLOSION_BASE_DURATION_MS * m) as u64),
            inner: Rgba::new(255, 240, 180),
            mid: Rgba::new(255, 120, 30),
            rim: Rgba::new(120, 40, 10),
        });

        let debris_count = (DEBRIS_BASE_COUNT * m).floor() as usize;
        for _ in 0..debris_count {
            let angle = self.rng.gen_range(0.0..PI * 2.0);
            let speed = self.rng.gen_range(1.0..3.5) * m;
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed - 1.0,
                size: self.rng.gen_range(1.5..3.5),
                color: DEBRIS_COLORS[self.rng.gen_range(0..DEBRIS_COLORS.len())],
                start: now,
                life: Duration::from_millis(self.rng.gen_range(400..800)),
                kind: ParticleKind::Spark,
                fade_out: true,
                gravity: 0.15,
                grow: 1.0,
            });
        }

        let smoke_count = (SMOKE_BASE_COUNT * m).floor() as usize;
        for _ in 0..smoke_count {
            let life_ms = (self.rng.gen_range(900.0..1500.0) * m) as u64;
            self.particles.push(Particle {
                x: x + self.rng.gen_range(-6.0..6.0) * m,
                y: y + self.rng.gen_range(-6.0..6.0) * m,
                vx: self.rng.gen_range(-0.3..0.3),
                vy: self.rng.gen_range(-0.8..-0.3),
                size: self.rng.gen_range(4.0..8.0) * m,
                color: SMOKE_COLOR,
                start: now,
                life: Duration::from_millis(life_ms),
                kind: ParticleKind::Smoke,
                fade_out: true,
                gravity: 0.0,
                grow: 1.02,
            });
        }

        self.particles.push(Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 8.0,
            color: RING_COLOR,
            start: now,
            life: Duration::from_millis(400),
            kind: ParticleKind::Ring {
                from: 8.0,
                to: 60.0 * m,
            },
            fade_out: true,
            gravity: 0.0,
            grow: 1.0,
        });

        tracing::debug!(
            "Explosion {:?} at ({:.0},{:.0}): {} debris, {} smoke",
            size,
            x,
            y,
            debris_count,
            smoke_count
        );
    }

    /// Destruction feedback for a killed unit.
    ///
    /// Vehicles detonate twice: a primary explosion now and a smaller one
    /// nearby after a short random stagger. Infantry just scatter debris.
    pub fn unit_destroyed(
        &mut self,
        audio: &mut AudioScheduler,
        now: Duration,
        x: f32,
        y: f32,
        unit: Option<&str>,
    ) {
        let category = self.catalog.resolve(unit);
        if category.is_vehicle() {
            let primary = if category.is_heavy() {
                ExplosionSize::Large
            } else {
                ExplosionSize::Medium
            };
            self.explosion(audio, now, x, y, primary);

            let delay = Duration::from_millis(self.rng.gen_range(100..=200));
            let ox = self.rng.gen_range(-20.0..=20.0);
            let oy = self.rng.gen_range(-20.0..=20.0);
            self.pending.push(PendingExplosion {
                due: now + delay,
                x: x + ox,
                y: y + oy,
                size: ExplosionSize::Small,
            });
        } else {
            for _ in 0..10 {
                self.particles.push(Particle {
                    x,
                    y,
                    vx: self.rng.gen_range(-1.0..1.0),
                    vy: self.rng.gen_range(-3.0..-0.5),
                    size: self.rng.gen_range(1.5..3.0),
                    color: BLOOD_COLORS[self.rng.gen_range(0..BLOOD_COLORS.len())],
                    start: now,
                    life: Duration::from_millis(self.rng.gen_range(500..900)),
                    kind: ParticleKind::Spark,
                    fade_out: true,
                    gravity: 0.15,
                    grow: 1.0,
                });
            }
        }
    }

    /// Short radial flash and a handful of sparks at a muzzle
    pub fn muzzle_flash(&mut self, now: Duration, x: f32, y: f32) {
        self.particles.push(Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 6.0,
            color: Rgba::new(255, 230, 140),
            start: now,
            life: MUZZLE_FLASH_LIFE,
            kind: ParticleKind::Flash,
            fade_out: true,
            gravity: 0.0,
            grow: 1.0,
        });

        for _ in 0..5 {
            let angle = self.rng.gen_range(0.0..PI * 2.0);
            let speed = self.rng.gen_range(1.0..2.5);
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                size: self.rng.gen_range(1.0..2.0),
                color: SPARK_COLORS[0],
                start: now,
                life: Duration::from_millis(self.rng.gen_range(80..150)),
                kind: ParticleKind::Spark,
                fade_out: true,
                gravity: 0.0,
                grow: 1.0,
            });
        }
    }

    // ---- per-frame driver --------------------------------------------------

    /// Advance all entities and drop the ones whose life has ended.
    ///
    /// Shot completion tokens fire before the shot is removed, in creation
    /// order. Due secondary explosions are released here as well, which is
    /// why the audio scheduler is needed.
    pub fn update(&mut self, audio: &mut AudioScheduler, now: Duration) {
        let mut due = Vec::new();
        self.pending.retain(|p| {
            if p.due <= now {
                due.push((p.x, p.y, p.size));
                false
            } else {
                true
            }
        });
        for (x, y, size) in due {
            self.explosion(audio, now, x, y, size);
        }

        self.shots.retain_mut(|shot| {
            if shot.is_live(now) {
                return true;
            }
            if let Some(done) = shot.done.take() {
                let _ = done.try_send(());
            }
            false
        });

        self.particles.retain_mut(|p| {
            if !p.is_live(now) {
                return false;
            }
            match p.kind {
                ParticleKind::Spark => {
                    p.x += p.vx;
                    p.y += p.vy;
                    p.vy += p.gravity;
                }
                ParticleKind::Smoke => {
                    p.x += p.vx;
                    p.y += p.vy;
                    p.size *= p.grow;
                }
                // Rings, flashes and splatters stay where they were born
                _ => {}
            }
            true
        });

        self.explosions.retain(|e| e.is_live(now));

        self.damage_texts.retain_mut(|t| {
            if !t.is_live(now) {
                return false;
            }
            t.y += t.vy;
            true
        });
    }

    /// Render every live entity. Pure: no state is mutated, so this can be
    /// called any number of times per frame.
    pub fn draw(&self, surface: &mut dyn DrawSurface, now: Duration) {
        for e in &self.explosions {
            let r = e.radius(now);
            if r <= 0.0 {
                continue;
            }
            surface.radial_glow(e.x, e.y, r, e.inner, e.mid);
            surface.stroke_circle(e.x, e.y, r, 2.0, e.rim);
        }

        for p in &self.particles {
            Self::draw_particle(surface, p, now);
        }

        for shot in &self.shots {
            Self::draw_shot(surface, shot, now);
        }

        for t in &self.damage_texts {
            let alpha = t.alpha(now);
            surface.text(
                t.x,
                t.y,
                &t.text,
                t.size,
                t.color.faded(alpha),
                Some(t.outline.faded(alpha)),
            );
        }
    }

    fn draw_particle(surface: &mut dyn DrawSurface, p: &Particle, now: Duration) {
        let progress = p.progress(now);
        let alpha = if p.fade_out { 1.0 - progress } else { 1.0 };
        match p.kind {
            ParticleKind::Spark | ParticleKind::Smoke => {
                surface.fill_circle(p.x, p.y, p.size, p.color.faded(alpha));
            }
            ParticleKind::Ring { from, to } => {
                let r = from + (to - from) * progress;
                surface.stroke_circle(p.x, p.y, r, 2.0, p.color.faded(alpha));
            }
            ParticleKind::Flash => {
                let r = p.size * (1.0 + 2.0 * progress);
                surface.radial_glow(p.x, p.y, r, p.color.faded(alpha), p.color.faded(0.0));
            }
            ParticleKind::Splatter => {
                let points = splatter_points(p.x, p.y, p.size);
                surface.fill_polygon(&points, p.color.faded(alpha));
            }
        }
    }

    fn draw_shot(surface: &mut dyn DrawSurface, shot: &ShotAnimation, now: Duration) {
        let progress = shot.progress(now);
        let dx = shot.to_x - shot.from_x;
        let dy = shot.to_y - shot.from_y;
        let angle = dy.atan2(dx);

        let at = |p: f32| (shot.from_x + dx * p, shot.from_y + dy * p);

        match shot.projectile {
            ProjectileType::Bullet => {
                let (x, y) = at(progress);
                draw_round(surface, x, y, angle, 10.0, shot.critical);
            }
            ProjectileType::Burst => {
                for i in 0..3 {
                    let rp = progress - i as f32 * BURST_ROUND_OFFSET;
                    if rp > 0.0 {
                        let (x, y) = at(rp.min(1.0));
                        draw_round(surface, x, y, angle, 8.0, shot.critical);
                    }
                }
            }
            ProjectileType::Tracer => {
                for i in 0..4 {
                    let rp = progress - i as f32 * TRACER_ROUND_OFFSET;
                    if rp > 0.0 {
                        let (x, y) = at(rp.min(1.0));
                        draw_tracer(surface, x, y, angle, 16.0, shot.critical);
                    }
                }
            }
            ProjectileType::SniperRound => {
                let (x, y) = at(progress);
                draw_tracer(surface, x, y, angle, 40.0, shot.critical);
            }
            ProjectileType::Shell => {
                let (x, y) = at(progress);
                if shot.critical {
                    surface.radial_glow(
                        x,
                        y,
                        9.0,
                        Rgba::with_alpha(255, 140, 40, 0.5),
                        Rgba::with_alpha(255, 140, 40, 0.0),
                    );
                }
                surface.fill_ellipse(x, y, 6.0, 2.5, angle, Rgba::new(60, 60, 50));
            }
            ProjectileType::ArtilleryShell => {
                let (x, y) = at(progress);
                let arc = (progress * PI).sin() * (dx.abs() / 2.0).min(100.0);
                let y = y - arc;
                surface.line(
                    x - angle.cos() * 8.0,
                    y - angle.sin() * 8.0,
                    x,
                    y,
                    2.0,
                    Rgba::with_alpha(120, 120, 120, 0.5),
                );
                surface.fill_ellipse(x, y, 5.0, 2.5, angle, Rgba::new(50, 50, 45));
            }
        }
    }

    // ---- read-only views (used by draw-order tests and host HUDs) ----------

    pub fn shots(&self) -> &[ShotAnimation] {
        &self.shots
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn damage_texts(&self) -> &[DamageText] {
        &self.damage_texts
    }

    /// Staggered secondary explosions not yet released
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.shots.is_empty()
            && self.particles.is_empty()
            && self.explosions.is_empty()
            && self.damage_texts.is_empty()
            && self.pending.is_empty()
    }
}

fn draw_round(surface: &mut dyn DrawSurface, x: f32, y: f32, angle: f32, trail: f32, critical: bool) {
    let (radius, color) = if critical {
        (3.0, Rgba::new(255, 120, 40))
    } else {
        (2.0, Rgba::new(255, 236, 160))
    };
    surface.line(
        x - angle.cos() * trail,
        y - angle.sin() * trail,
        x,
        y,
        1.5,
        color.faded(0.5),
    );
    surface.fill_circle(x, y, radius, color);
    if critical {
        surface.radial_glow(x, y, 6.0, color.faded(0.6), color.faded(0.0));
    }
}

fn draw_tracer(surface: &mut dyn DrawSurface, x: f32, y: f32, angle: f32, length: f32, critical: bool) {
    let color = if critical {
        Rgba::new(255, 120, 40)
    } else {
        Rgba::new(220, 240, 255)
    };
    surface.line(
        x - angle.cos() * length,
        y - angle.sin() * length,
        x,
        y,
        2.0,
        color,
    );
    surface.fill_circle(x, y, 1.5, Rgba::WHITE);
}

/// Deterministic irregular polygon for a splatter: the shape must be stable
/// across frames, so vertex wobble is derived from the particle's own fields.
fn splatter_points(x: f32, y: f32, size: f32) -> Vec<(f32, f32)> {
    let seed = x * 13.37 + y * 7.77 + size;
    (0..8)
        .map(|i| {
            let angle = i as f32 * PI * 2.0 / 8.0;
            let wobble = ((seed + i as f32 * 12.9898).sin() * 43758.547).fract().abs();
            let r = size * (0.55 + 0.45 * wobble);
            (x + angle.cos() * r, y + angle.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_multipliers() {
        assert_eq!(ExplosionSize::Small.multiplier(), 0.7);
        assert_eq!(ExplosionSize::Medium.multiplier(), 1.0);
        assert_eq!(ExplosionSize::Large.multiplier(), 1.5);
        assert_eq!(ExplosionSize::Huge.multiplier(), 2.5);
    }

    #[test]
    fn test_large_explosion_derived_values() {
        let m = ExplosionSize::Large.multiplier();
        assert_eq!(EXPLOSION_BASE_RADIUS * m, 75.0);
        assert_eq!((EXPLOSION_BASE_DURATION_MS * m) as u64, 1050);
        assert_eq!((DEBRIS_BASE_COUNT * m).floor() as usize, 22);
        assert_eq!((SMOKE_BASE_COUNT * m).floor() as usize, 15);
    }

    #[test]
    fn test_splatter_points_are_stable() {
        let a = splatter_points(10.0, 20.0, 5.0);
        let b = splatter_points(10.0, 20.0, 5.0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }
}
