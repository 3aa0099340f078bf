/// battlefx - transient combat feedback for a real-time tactical game
///
/// Two subsystems with real temporal state:
/// - The effect engine (`effects`): projectile flights, impacts, explosions
///   and floating damage numbers, all driven by a shared wall clock.
/// - The audio scheduler (`audio`): bounded concurrent sound playback plus a
///   crossfading battle-music playlist.
///
/// ## Architecture
///
/// ```text
/// host frame loop
///   ├── EffectEngine::update(now, &mut audio)
///   ├── EffectEngine::draw(&mut surface, now)
///   └── AudioScheduler::tick(now)
///
/// EffectEngine                     AudioScheduler
///   ├── shots (ShotAnimation)        ├── SoundPool (max 8 voices, FIFO)
///   ├── particles (tagged kinds)     ├── MusicPlayer (slot + crossfade)
///   ├── explosions                   ├── SoundLibrary (id -> bytes)
///   └── damage texts                 └── AudioSettings (persisted)
/// ```
///
/// Both components are constructed explicitly and passed by reference to
/// whatever owns the frame loop; there are no process-wide singletons. Audio
/// output sits behind the `AudioBackend` trait so the scheduling logic can be
/// exercised without audio hardware.
pub mod audio;
pub mod effects;
pub mod error;
pub mod logging;
pub mod settings;
pub mod units;

// Re-export commonly used types
pub use audio::{AudioBackend, AudioScheduler, PlaylistMode, RodioBackend, SoundLibrary, Voice};
pub use effects::{DrawSurface, EffectEngine, ExplosionSize, Rgba, ShotToken};
pub use error::{AppResult, AudioError, SettingsError};
pub use settings::{AudioSettings, FileSettingsStore, MemorySettingsStore, SettingsStore};
pub use units::{ProjectileType, UnitCatalog, UnitCategory};
