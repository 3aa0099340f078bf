/// Audio scheduler module
///
/// Bounded concurrent sound-effect playback plus a crossfading music
/// playlist, all driven from the host's single logical thread.
///
/// ## Architecture
///
/// ```text
/// AudioScheduler
///   ├── SoundLibrary   (id -> decoded bytes, filled by the host loader)
///   ├── SoundPool      (max 8 voices, FIFO eviction, self-reaping)
///   ├── MusicPlayer    (single slot + crossfade state machine)
///   ├── AudioSettings  (persisted on every change)
///   └── AudioBackend   (rodio in production, fakes in tests)
/// ```
///
/// The scheduler runs off its own periodic `tick` (recommended cadence
/// `fade::TICK`, ~50ms): fades are owned `Fade` values sampled from the
/// tick, not ambient interval timers, and track completion is detected by
/// polling each voice.
pub mod backend;
pub mod fade;
pub mod library;
pub mod music;
pub mod playlist;
pub mod pool;
pub mod scheduler;

// Re-export commonly used types
pub use backend::{AudioBackend, RodioBackend, Voice};
pub use fade::{Fade, TICK};
pub use library::SoundLibrary;
pub use playlist::{Playlist, PlaylistMode};
pub use pool::{SoundPool, MAX_CONCURRENT_SOUNDS};
pub use scheduler::AudioScheduler;
