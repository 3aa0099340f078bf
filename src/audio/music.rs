/// Music slot and crossfade state machine
///
/// At most one active track at a time, plus a transient second track while a
/// crossfade is in flight. All fades are `Fade` values sampled from `tick`;
/// starting a new transition replaces the previous fade, so a stale ramp can
/// never keep mutating a track's gain.
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::backend::{AudioBackend, Voice};
use super::fade::Fade;
use super::library::SoundLibrary;
use super::playlist::{Playlist, PlaylistMode};
use crate::settings::AudioSettings;

/// Delay before the single start retry
const RETRY_DELAY: Duration = Duration::from_millis(100);

/// Fade length used when music is toggled off/on
const MUTE_FADE: Duration = Duration::from_millis(1000);

pub const DEFAULT_CROSSFADE_MS: u64 = 2000;
pub const MAX_CROSSFADE_MS: u64 = 10_000;

struct TrackSlot {
    id: String,
    voice: Box<dyn Voice>,
    looped: bool,
    /// Last gain applied to the voice
    gain: f32,
}

enum Phase {
    /// No fade in flight
    Steady,
    /// Sequential track switch: old track fades to silence first, the next
    /// one only starts once that fade has finished
    FadeOutThenPlay {
        fade: Fade,
        next_id: String,
        fade_ms: u64,
    },
    /// Current slot ramping up to the configured music volume
    FadeIn { fade: Fade },
    /// Playlist advancement: outgoing and incoming ramp concurrently
    Crossfade {
        outgoing: TrackSlot,
        fade_out: Fade,
        fade_in: Fade,
    },
    /// Music toggled off: ramp to zero, then pause without clearing the slot
    FadeToSilence { fade: Fade },
}

/// One-shot retry after a failed playback start
struct PendingStart {
    due: Duration,
    id: String,
    fade_ms: u64,
}

enum TickAction {
    None,
    Switch { next_id: String, fade_ms: u64 },
    SettleFadeIn,
    SettleCrossfade,
    SettleMute,
}

pub struct MusicPlayer {
    slot: Option<TrackSlot>,
    phase: Phase,
    playlist: Playlist,
    crossfade: Duration,
    muted: bool,
    retry: Option<PendingStart>,
    rng: StdRng,
}

impl MusicPlayer {
    pub fn new(playlist: Playlist) -> Self {
        Self {
            slot: None,
            phase: Phase::Steady,
            playlist,
            crossfade: Duration::from_millis(DEFAULT_CROSSFADE_MS),
            muted: false,
            retry: None,
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    pub fn current_track(&self) -> Option<&str> {
        self.slot.as_ref().map(|s| s.id.as_str())
    }

    /// True while a track switch or crossfade is in flight. Completion
    /// signals arriving in that window are ignored so two transitions can
    /// never overlap on the single music slot.
    pub fn is_transitioning(&self) -> bool {
        matches!(
            self.phase,
            Phase::FadeOutThenPlay { .. } | Phase::FadeIn { .. } | Phase::Crossfade { .. }
        )
    }

    pub fn set_mode(&mut self, mode: PlaylistMode) {
        self.playlist.set_mode(mode);
    }

    /// Crossfade duration, accepted in (0, 10000] ms; out-of-range values
    /// are clamped with a warning rather than rejected.
    pub fn set_crossfade_ms(&mut self, ms: u64) {
        let clamped = ms.clamp(1, MAX_CROSSFADE_MS);
        if clamped != ms {
            tracing::warn!("Crossfade duration {}ms out of range, using {}ms", ms, clamped);
        }
        self.crossfade = Duration::from_millis(clamped);
    }

    /// Start playing `id`. An active track fades to silence over `fade_ms`
    /// first; the new track then fades in over the same duration.
    pub fn play(
        &mut self,
        backend: &dyn AudioBackend,
        library: &SoundLibrary,
        settings: &AudioSettings,
        now: Duration,
        id: &str,
        fade_ms: u64,
    ) {
        // A new request supersedes whatever was in flight
        self.retry = None;
        if let Phase::Crossfade { outgoing, .. } = std::mem::replace(&mut self.phase, Phase::Steady)
        {
            outgoing.voice.stop();
        }

        match &self.slot {
            Some(slot) if !self.muted => {
                let fade = Fade::new(now, Duration::from_millis(fade_ms), slot.gain, 0.0);
                self.phase = Phase::FadeOutThenPlay {
                    fade,
                    next_id: id.to_string(),
                    fade_ms,
                };
            }
            Some(_) => {
                // Muted: swap the slot silently so unmuting resumes the new track
                if let Some(slot) = self.slot.take() {
                    slot.voice.stop();
                }
                self.start_track(backend, library, settings, now, id, fade_ms, false);
            }
            None => {
                self.start_track(backend, library, settings, now, id, fade_ms, false);
            }
        }
    }

    /// Begin a concurrent crossfade to `id`. Ignored while another
    /// transition is active (the mutual-exclusion guard).
    pub fn crossfade_to(
        &mut self,
        backend: &dyn AudioBackend,
        library: &SoundLibrary,
        settings: &AudioSettings,
        now: Duration,
        id: &str,
    ) {
        if self.is_transitioning() {
            tracing::debug!("Ignoring crossfade to {} while a transition is active", id);
            return;
        }
        if self.muted {
            return;
        }
        let Some(slot) = self.slot.take() else {
            self.start_track(backend, library, settings, now, id, DEFAULT_CROSSFADE_MS, false);
            return;
        };

        let Some(data) = library.get(id) else {
            tracing::warn!("No music loaded for id: {}", id);
            self.slot = Some(slot);
            return;
        };
        let looped = !self.playlist.contains(id);
        match backend.start(id, data, 0.0, looped) {
            Ok(voice) => {
                tracing::info!("Crossfading from {} to {}", slot.id, id);
                let fade_out = Fade::new(now, self.crossfade, slot.gain, 0.0);
                let fade_in = Fade::new(now, self.crossfade, 0.0, settings.music_volume);
                self.phase = Phase::Crossfade {
                    outgoing: slot,
                    fade_out,
                    fade_in,
                };
                self.slot = Some(TrackSlot {
                    id: id.to_string(),
                    voice,
                    looped,
                    gain: 0.0,
                });
            }
            Err(e) => {
                tracing::warn!(
                    "Music playback failed for {}, retrying in {:?}: {}",
                    id,
                    RETRY_DELAY,
                    e
                );
                // Keep the old track; the retry replaces it if it succeeds
                self.slot = Some(slot);
                self.retry = Some(PendingStart {
                    due: now + RETRY_DELAY,
                    id: id.to_string(),
                    fade_ms: self.crossfade.as_millis() as u64,
                });
            }
        }
    }

    /// Toggle handler: off fades to silence and pauses without clearing the
    /// slot, on resumes the paused track with a fade-in.
    pub fn set_enabled(&mut self, settings: &AudioSettings, now: Duration, enabled: bool) {
        if enabled == !self.muted {
            return;
        }
        if enabled {
            self.muted = false;
            if let Some(slot) = &self.slot {
                slot.voice.resume();
                self.phase = Phase::FadeIn {
                    fade: Fade::new(now, MUTE_FADE, 0.0, settings.music_volume),
                };
                tracing::info!("Music enabled, resuming {}", slot.id);
            }
        } else {
            self.muted = true;
            self.retry = None;
            if let Phase::Crossfade { outgoing, .. } =
                std::mem::replace(&mut self.phase, Phase::Steady)
            {
                outgoing.voice.stop();
            }
            if let Some(slot) = &self.slot {
                self.phase = Phase::FadeToSilence {
                    fade: Fade::new(now, MUTE_FADE, slot.gain, 0.0),
                };
                tracing::info!("Music disabled, fading {} to silence", slot.id);
            }
        }
    }

    /// Apply a changed music volume to a steadily playing track
    pub fn refresh_volume(&mut self, settings: &AudioSettings) {
        if self.muted || self.is_transitioning() {
            return;
        }
        if let Some(slot) = &mut self.slot {
            slot.gain = settings.music_volume;
            slot.voice.set_volume(slot.gain);
        }
    }

    /// Stop playback and cancel every pending fade and retry
    pub fn stop(&mut self) {
        if let Phase::Crossfade { outgoing, .. } = std::mem::replace(&mut self.phase, Phase::Steady)
        {
            outgoing.voice.stop();
        }
        if let Some(slot) = self.slot.take() {
            slot.voice.stop();
            tracing::info!("Stopped music: {}", slot.id);
        }
        self.phase = Phase::Steady;
        self.retry = None;
    }

    /// Sample fades, settle finished transitions, run the pending retry,
    /// and advance the playlist when the current track completes.
    pub fn tick(
        &mut self,
        backend: &dyn AudioBackend,
        library: &SoundLibrary,
        settings: &AudioSettings,
        now: Duration,
    ) {
        if self.retry.as_ref().is_some_and(|r| r.due <= now) {
            let retry = self.retry.take().expect("retry checked above");
            if let Some(slot) = self.slot.take() {
                slot.voice.stop();
            }
            self.start_track(backend, library, settings, now, &retry.id, retry.fade_ms, true);
        }

        let mut action = TickAction::None;
        match &mut self.phase {
            Phase::Steady => {}
            Phase::FadeOutThenPlay {
                fade,
                next_id,
                fade_ms,
            } => {
                if let Some(slot) = &mut self.slot {
                    slot.gain = fade.gain(now);
                    slot.voice.set_volume(slot.gain);
                }
                if fade.done(now) {
                    action = TickAction::Switch {
                        next_id: next_id.clone(),
                        fade_ms: *fade_ms,
                    };
                }
            }
            Phase::FadeIn { fade } => {
                if let Some(slot) = &mut self.slot {
                    slot.gain = fade.gain(now);
                    slot.voice.set_volume(slot.gain);
                }
                if fade.done(now) {
                    action = TickAction::SettleFadeIn;
                }
            }
            Phase::Crossfade {
                outgoing,
                fade_out,
                fade_in,
            } => {
                outgoing.gain = fade_out.gain(now);
                outgoing.voice.set_volume(outgoing.gain);
                if let Some(slot) = &mut self.slot {
                    slot.gain = fade_in.gain(now);
                    slot.voice.set_volume(slot.gain);
                }
                if fade_out.done(now) && fade_in.done(now) {
                    action = TickAction::SettleCrossfade;
                }
            }
            Phase::FadeToSilence { fade } => {
                if let Some(slot) = &mut self.slot {
                    slot.gain = fade.gain(now);
                    slot.voice.set_volume(slot.gain);
                }
                if fade.done(now) {
                    action = TickAction::SettleMute;
                }
            }
        }

        match action {
            TickAction::None => {}
            TickAction::Switch { next_id, fade_ms } => {
                self.phase = Phase::Steady;
                if let Some(slot) = self.slot.take() {
                    slot.voice.stop();
                }
                self.start_track(backend, library, settings, now, &next_id, fade_ms, false);
            }
            TickAction::SettleFadeIn => {
                self.phase = Phase::Steady;
            }
            TickAction::SettleCrossfade => {
                if let Phase::Crossfade { outgoing, .. } =
                    std::mem::replace(&mut self.phase, Phase::Steady)
                {
                    outgoing.voice.stop();
                }
            }
            TickAction::SettleMute => {
                self.phase = Phase::Steady;
                if let Some(slot) = &self.slot {
                    slot.voice.pause();
                }
            }
        }

        // Playlist advancement on natural completion. Only reachable in the
        // steady state, which is what makes overlapping transitions impossible.
        if !self.muted && !self.is_transitioning() {
            let completed = self
                .slot
                .as_ref()
                .is_some_and(|s| !s.looped && s.voice.is_finished());
            if completed {
                let current = self.slot.as_ref().expect("slot checked above").id.clone();
                match self.playlist.next(&current, &mut self.rng) {
                    Some(next) => {
                        tracing::info!("Track {} completed, advancing to {}", current, next);
                        self.crossfade_to(backend, library, settings, now, &next);
                    }
                    None => {
                        // Not in the playlist: loop in place
                        self.slot = None;
                        self.start_track(
                            backend,
                            library,
                            settings,
                            now,
                            &current,
                            DEFAULT_CROSSFADE_MS,
                            false,
                        );
                    }
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn start_track(
        &mut self,
        backend: &dyn AudioBackend,
        library: &SoundLibrary,
        settings: &AudioSettings,
        now: Duration,
        id: &str,
        fade_ms: u64,
        is_retry: bool,
    ) {
        let Some(data) = library.get(id) else {
            tracing::warn!("No music loaded for id: {}", id);
            return;
        };
        let looped = !self.playlist.contains(id);
        match backend.start(id, data, 0.0, looped) {
            Ok(voice) => {
                tracing::info!("Playing music: {}", id);
                let slot = TrackSlot {
                    id: id.to_string(),
                    voice,
                    looped,
                    gain: 0.0,
                };
                if self.muted {
                    slot.voice.pause();
                    self.slot = Some(slot);
                    self.phase = Phase::Steady;
                } else {
                    self.slot = Some(slot);
                    self.phase = Phase::FadeIn {
                        fade: Fade::new(
                            now,
                            Duration::from_millis(fade_ms),
                            0.0,
                            settings.music_volume,
                        ),
                    };
                }
            }
            Err(e) if is_retry => {
                tracing::warn!("Music playback failed again for {}, giving up: {}", id, e);
            }
            Err(e) => {
                tracing::warn!(
                    "Music playback failed for {}, retrying in {:?}: {}",
                    id,
                    RETRY_DELAY,
                    e
                );
                self.retry = Some(PendingStart {
                    due: now + RETRY_DELAY,
                    id: id.to_string(),
                    fade_ms,
                });
            }
        }
    }

    /// Gain last applied to the active track (tests and HUD meters)
    pub fn current_gain(&self) -> Option<f32> {
        self.slot.as_ref().map(|s| s.gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::backend::test_support::FakeBackend;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn library() -> SoundLibrary {
        let mut lib = SoundLibrary::new();
        for id in crate::audio::playlist::BATTLE_TRACKS {
            lib.insert(id, vec![0u8; 4]);
        }
        lib.insert("menu_theme", vec![0u8; 4]);
        lib
    }

    fn settings() -> AudioSettings {
        AudioSettings::default()
    }

    fn settle(
        player: &mut MusicPlayer,
        backend: &FakeBackend,
        lib: &SoundLibrary,
        cfg: &AudioSettings,
        from_ms: u64,
        to_ms: u64,
    ) {
        let mut t = from_ms;
        while t <= to_ms {
            player.tick(backend, lib, cfg, ms(t));
            t += 50;
        }
    }

    #[test]
    fn test_play_fades_in_to_music_volume() {
        let backend = FakeBackend::new();
        let lib = library();
        let cfg = settings();
        let mut player = MusicPlayer::new(Playlist::battle());

        player.play(&backend, &lib, &cfg, ms(0), "battle_theme_1", 400);
        assert!(player.is_transitioning());
        assert_eq!(player.current_track(), Some("battle_theme_1"));

        settle(&mut player, &backend, &lib, &cfg, 0, 500);
        assert!(!player.is_transitioning());
        let v = backend.voice(0);
        assert!((v.lock().volume - cfg.music_volume).abs() < 1e-6);
    }

    #[test]
    fn test_sequential_play_never_overlaps_tracks() {
        let backend = FakeBackend::new();
        let lib = library();
        let cfg = settings();
        let mut player = MusicPlayer::new(Playlist::battle());

        player.play(&backend, &lib, &cfg, ms(0), "battle_theme_1", 400);
        settle(&mut player, &backend, &lib, &cfg, 0, 500);

        // Interrupt before the fade-out can finish
        player.play(&backend, &lib, &cfg, ms(600), "battle_theme_2", 400);
        player.tick(&backend, &lib, &cfg, ms(650));
        // Still only one voice started: the new track waits out the fade
        assert_eq!(backend.started(), 1);

        settle(&mut player, &backend, &lib, &cfg, 700, 1600);
        assert_eq!(backend.started(), 2);
        assert_eq!(player.current_track(), Some("battle_theme_2"));

        let old = backend.voice(0);
        assert!(old.lock().stopped);
        assert!(old.lock().volume < 1e-6);
        let new = backend.voice(1);
        assert!((new.lock().volume - cfg.music_volume).abs() < 1e-6);
    }

    #[test]
    fn test_completion_advances_sequentially() {
        let backend = FakeBackend::new();
        let lib = library();
        let cfg = settings();
        let mut player = MusicPlayer::new(Playlist::battle());

        player.play(&backend, &lib, &cfg, ms(0), "battle_theme_1", 100);
        settle(&mut player, &backend, &lib, &cfg, 0, 200);

        backend.voice(0).lock().finished = true;
        player.tick(&backend, &lib, &cfg, ms(300));

        assert_eq!(player.current_track(), Some("battle_theme_2"));
        assert!(player.is_transitioning());
    }

    #[test]
    fn test_second_completion_signal_ignored_during_transition() {
        let backend = FakeBackend::new();
        let lib = library();
        let cfg = settings();
        let mut player = MusicPlayer::new(Playlist::battle());

        player.play(&backend, &lib, &cfg, ms(0), "battle_theme_1", 100);
        settle(&mut player, &backend, &lib, &cfg, 0, 200);

        backend.voice(0).lock().finished = true;
        player.tick(&backend, &lib, &cfg, ms(300));
        assert_eq!(backend.started(), 2);

        // Outgoing still reports finished on every subsequent tick; no third
        // voice may start while the crossfade runs
        player.tick(&backend, &lib, &cfg, ms(350));
        player.tick(&backend, &lib, &cfg, ms(400));
        assert_eq!(backend.started(), 2);

        // After the transition settles the next completion is accepted again
        settle(&mut player, &backend, &lib, &cfg, 400, 2600);
        assert!(!player.is_transitioning());
        backend.voice(1).lock().finished = true;
        player.tick(&backend, &lib, &cfg, ms(2700));
        assert_eq!(backend.started(), 3);
        assert_eq!(player.current_track(), Some("battle_theme_3"));
    }

    #[test]
    fn test_non_playlist_track_loops_without_advancing() {
        let backend = FakeBackend::new();
        let lib = library();
        let cfg = settings();
        let mut player = MusicPlayer::new(Playlist::battle());

        player.play(&backend, &lib, &cfg, ms(0), "menu_theme", 100);
        assert!(backend.voice(0).lock().looped);

        // Looped voices never report finished, so the slot just stays put
        settle(&mut player, &backend, &lib, &cfg, 0, 1000);
        assert_eq!(player.current_track(), Some("menu_theme"));
        assert_eq!(backend.started(), 1);
    }

    #[test]
    fn test_start_failure_retries_once_then_gives_up() {
        let backend = FakeBackend::new();
        let lib = library();
        let cfg = settings();
        let mut player = MusicPlayer::new(Playlist::battle());

        backend.fail_next_starts(2);
        player.play(&backend, &lib, &cfg, ms(0), "battle_theme_1", 100);
        assert_eq!(player.current_track(), None);

        // Before the 100ms retry delay nothing happens
        player.tick(&backend, &lib, &cfg, ms(50));
        assert_eq!(player.current_track(), None);

        // Retry fires and fails too: abandoned, no further attempts
        player.tick(&backend, &lib, &cfg, ms(150));
        settle(&mut player, &backend, &lib, &cfg, 200, 1000);
        assert_eq!(player.current_track(), None);
        assert_eq!(backend.started(), 0);
    }

    #[test]
    fn test_start_failure_recovers_on_retry() {
        let backend = FakeBackend::new();
        let lib = library();
        let cfg = settings();
        let mut player = MusicPlayer::new(Playlist::battle());

        backend.fail_next_starts(1);
        player.play(&backend, &lib, &cfg, ms(0), "battle_theme_1", 100);
        player.tick(&backend, &lib, &cfg, ms(120));

        assert_eq!(player.current_track(), Some("battle_theme_1"));
        assert_eq!(backend.started(), 1);
    }

    #[test]
    fn test_disable_fades_out_but_keeps_slot() {
        let backend = FakeBackend::new();
        let lib = library();
        let cfg = settings();
        let mut player = MusicPlayer::new(Playlist::battle());

        player.play(&backend, &lib, &cfg, ms(0), "battle_theme_1", 100);
        settle(&mut player, &backend, &lib, &cfg, 0, 200);

        player.set_enabled(&cfg, ms(300), false);
        settle(&mut player, &backend, &lib, &cfg, 300, 1400);

        let v = backend.voice(0);
        assert!(v.lock().paused);
        assert!(v.lock().volume < 1e-6);
        assert!(!v.lock().stopped);
        assert_eq!(player.current_track(), Some("battle_theme_1"));

        // Toggle back on: same voice resumes and ramps back up
        player.set_enabled(&cfg, ms(1500), true);
        settle(&mut player, &backend, &lib, &cfg, 1500, 2600);
        assert!(!v.lock().paused);
        assert!((v.lock().volume - cfg.music_volume).abs() < 1e-6);
    }

    #[test]
    fn test_stop_cancels_everything() {
        let backend = FakeBackend::new();
        let lib = library();
        let cfg = settings();
        let mut player = MusicPlayer::new(Playlist::battle());

        player.play(&backend, &lib, &cfg, ms(0), "battle_theme_1", 100);
        settle(&mut player, &backend, &lib, &cfg, 0, 200);
        player.crossfade_to(&backend, &lib, &cfg, ms(300), "battle_theme_4");

        player.stop();
        assert_eq!(player.current_track(), None);
        assert!(!player.is_transitioning());
        assert!(backend.voice(0).lock().stopped);
        assert!(backend.voice(1).lock().stopped);
    }

    #[test]
    fn test_crossfade_duration_clamped() {
        let mut player = MusicPlayer::new(Playlist::battle());
        player.set_crossfade_ms(0);
        assert_eq!(player.crossfade, Duration::from_millis(1));
        player.set_crossfade_ms(50_000);
        assert_eq!(player.crossfade, Duration::from_millis(MAX_CROSSFADE_MS));
        player.set_crossfade_ms(3000);
        assert_eq!(player.crossfade, Duration::from_millis(3000));
    }
}
