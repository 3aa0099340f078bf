/// Audio scheduler facade
///
/// Owns the sound pool, the music player, the sound library and the
/// persisted settings. Constructed explicitly by the host and driven from
/// its loop: `play_sound`/`play_music` at gameplay events, `tick` roughly
/// every `fade::TICK`.
use std::time::Duration;

use super::backend::AudioBackend;
use super::library::SoundLibrary;
use super::music::MusicPlayer;
use super::playlist::{Playlist, PlaylistMode};
use super::pool::SoundPool;
use crate::error::AudioError;
use crate::settings::{AudioSettings, SettingsStore};

pub struct AudioScheduler {
    backend: Box<dyn AudioBackend>,
    library: SoundLibrary,
    store: Box<dyn SettingsStore>,
    settings: AudioSettings,
    pool: SoundPool,
    music: MusicPlayer,
}

impl AudioScheduler {
    /// Build a scheduler, loading persisted settings (with legacy-schema
    /// migration) from the store.
    pub fn new(
        backend: Box<dyn AudioBackend>,
        library: SoundLibrary,
        store: Box<dyn SettingsStore>,
    ) -> Self {
        let settings = AudioSettings::load(store.as_ref());
        tracing::info!(
            "Audio scheduler ready: sound {} ({:.2}), music {} ({:.2})",
            if settings.sound_enabled { "on" } else { "off" },
            settings.sound_volume,
            if settings.music_enabled { "on" } else { "off" },
            settings.music_volume,
        );
        // A saved music-off state must hold before the first play_music
        let mut music = MusicPlayer::new(Playlist::battle());
        music.set_enabled(&settings, Duration::ZERO, settings.music_enabled);
        Self {
            backend,
            library,
            store,
            settings,
            pool: SoundPool::new(),
            music,
        }
    }

    // ---- sound effects -----------------------------------------------------

    /// Fire-and-forget playback of a sound effect. No-op when sound is
    /// disabled or the id is unknown; start failures are dropped silently
    /// (effects are not worth a retry).
    pub fn play_sound(&mut self, id: &str, volume: f32) {
        if !self.settings.sound_enabled {
            return;
        }
        let Some(data) = self.library.get(id) else {
            tracing::warn!("{}", AudioError::MissingResource(id.to_string()));
            return;
        };
        let gain = (volume * self.settings.sound_volume).clamp(0.0, 1.0);
        match self.backend.start(id, data, gain, false) {
            Ok(voice) => self.pool.insert(id, voice),
            Err(e) => tracing::warn!("Sound playback failed for {}: {}", id, e),
        }
    }

    // ---- music -------------------------------------------------------------

    pub fn play_music(&mut self, now: Duration, id: &str, fade_ms: u64) {
        self.music.play(
            self.backend.as_ref(),
            &self.library,
            &self.settings,
            now,
            id,
            fade_ms,
        );
    }

    pub fn crossfade_to(&mut self, now: Duration, id: &str) {
        self.music.crossfade_to(
            self.backend.as_ref(),
            &self.library,
            &self.settings,
            now,
            id,
        );
    }

    pub fn stop_music(&mut self) {
        self.music.stop();
    }

    pub fn set_playlist_mode(&mut self, mode: PlaylistMode) {
        self.music.set_mode(mode);
    }

    pub fn set_crossfade_ms(&mut self, ms: u64) {
        self.music.set_crossfade_ms(ms);
    }

    // ---- settings ----------------------------------------------------------

    pub fn settings(&self) -> &AudioSettings {
        &self.settings
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.settings.sound_enabled = enabled;
        if !enabled {
            self.pool.stop_all();
        }
        self.persist();
    }

    pub fn set_music_enabled(&mut self, now: Duration, enabled: bool) {
        self.settings.music_enabled = enabled;
        self.music.set_enabled(&self.settings, now, enabled);
        self.persist();
    }

    pub fn set_sound_volume(&mut self, volume: f32) {
        self.settings.sound_volume = volume.clamp(0.0, 1.0);
        self.persist();
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.settings.music_volume = volume.clamp(0.0, 1.0);
        self.music.refresh_volume(&self.settings);
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.settings.save(self.store.as_ref()) {
            tracing::warn!("Failed to persist audio settings: {}", e);
        }
    }

    // ---- lifecycle ---------------------------------------------------------

    /// Periodic driver: reap finished sound voices, sample music fades,
    /// run pending retries and playlist advancement.
    pub fn tick(&mut self, now: Duration) {
        self.pool.reap();
        self.music.tick(self.backend.as_ref(), &self.library, &self.settings, now);
    }

    /// Stop all playback and cancel pending work
    pub fn shutdown(&mut self) {
        self.pool.stop_all();
        self.music.stop();
        tracing::info!("Audio scheduler shut down");
    }

    // ---- introspection -----------------------------------------------------

    pub fn library(&self) -> &SoundLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut SoundLibrary {
        &mut self.library
    }

    pub fn active_sounds(&self) -> usize {
        self.pool.len()
    }

    pub fn current_track(&self) -> Option<&str> {
        self.music.current_track()
    }

    pub fn is_transitioning(&self) -> bool {
        self.music.is_transitioning()
    }

    pub fn music_gain(&self) -> Option<f32> {
        self.music.current_gain()
    }
}
