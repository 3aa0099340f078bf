/// Effect engine module
///
/// Owns every short-lived visual entity the game shows: projectile flights,
/// impact particles, explosions and floating damage numbers.
///
/// ## Architecture
///
/// ```text
/// EffectEngine
///   ├── shots        (ShotAnimation, 300ms, completion token)
///   ├── particles    (Spark / Ring / Flash / Smoke / Splatter)
///   ├── explosions   (radius = max * sin(progress * PI))
///   ├── damage texts (rise + late fade)
///   └── pending      (staggered secondary explosions)
/// ```
///
/// Entities are created only by the factory methods, mutated only by
/// `update`, read only by `draw`, and dropped by `update` once expired.
/// `draw` renders through the `DrawSurface` trait the host implements.
pub mod color;
pub mod engine;
pub mod entity;
pub mod surface;

// Re-export commonly used types
pub use color::Rgba;
pub use engine::{EffectEngine, ExplosionSize, ShotToken};
pub use entity::{DamageText, Explosion, Particle, ParticleKind, ShotAnimation};
pub use surface::DrawSurface;
