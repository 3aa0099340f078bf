/// Bounded pool of concurrently playing sound-effect voices
///
/// The bound is enforced synchronously at insertion: when full, the oldest
/// active voice is stopped and discarded before the new one is admitted
/// (FIFO eviction). Finished voices self-remove on `reap`.
use std::collections::VecDeque;

use super::backend::Voice;

pub const MAX_CONCURRENT_SOUNDS: usize = 8;

struct ActiveSound {
    id: String,
    voice: Box<dyn Voice>,
}

pub struct SoundPool {
    active: VecDeque<ActiveSound>,
    max: usize,
}

impl SoundPool {
    pub fn new() -> Self {
        Self::with_limit(MAX_CONCURRENT_SOUNDS)
    }

    pub fn with_limit(max: usize) -> Self {
        Self {
            active: VecDeque::new(),
            max: max.max(1),
        }
    }

    /// Admit a newly started voice, evicting the least-recently-started one
    /// first if the pool is at capacity.
    pub fn insert(&mut self, id: impl Into<String>, voice: Box<dyn Voice>) {
        if self.active.len() >= self.max {
            if let Some(oldest) = self.active.pop_front() {
                oldest.voice.stop();
                tracing::debug!("Sound pool full, evicted oldest instance of {}", oldest.id);
            }
        }
        self.active.push_back(ActiveSound {
            id: id.into(),
            voice,
        });
    }

    /// Drop voices whose playback has completed
    pub fn reap(&mut self) {
        self.active.retain(|s| !s.voice.is_finished());
    }

    pub fn stop_all(&mut self) {
        for sound in &self.active {
            sound.voice.stop();
        }
        self.active.clear();
        tracing::debug!("Stopped all active sounds");
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active sound ids, oldest first
    pub fn active_ids(&self) -> Vec<&str> {
        self.active.iter().map(|s| s.id.as_str()).collect()
    }
}

impl Default for SoundPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::backend::test_support::FakeBackend;
    use crate::audio::backend::AudioBackend;
    use std::sync::Arc;

    fn start(backend: &FakeBackend, id: &str) -> Box<dyn Voice> {
        backend
            .start(id, Arc::new(Vec::new()), 1.0, false)
            .unwrap()
    }

    #[test]
    fn test_bound_never_exceeded() {
        let backend = FakeBackend::new();
        let mut pool = SoundPool::new();
        for i in 0..20 {
            pool.insert(format!("sound_{}", i), start(&backend, "x"));
            assert!(pool.len() <= MAX_CONCURRENT_SOUNDS);
        }
        assert_eq!(pool.len(), MAX_CONCURRENT_SOUNDS);
    }

    #[test]
    fn test_fifo_eviction_stops_oldest() {
        let backend = FakeBackend::new();
        let mut pool = SoundPool::with_limit(2);
        pool.insert("first", start(&backend, "first"));
        pool.insert("second", start(&backend, "second"));
        pool.insert("third", start(&backend, "third"));

        assert_eq!(pool.active_ids(), vec!["second", "third"]);
        assert!(backend.voice(0).lock().stopped);
        assert!(!backend.voice(1).lock().stopped);
    }

    #[test]
    fn test_reap_removes_finished_voices() {
        let backend = FakeBackend::new();
        let mut pool = SoundPool::new();
        pool.insert("a", start(&backend, "a"));
        pool.insert("b", start(&backend, "b"));

        backend.voice(0).lock().finished = true;
        pool.reap();

        assert_eq!(pool.active_ids(), vec!["b"]);
    }

    #[test]
    fn test_stop_all_clears() {
        let backend = FakeBackend::new();
        let mut pool = SoundPool::new();
        pool.insert("a", start(&backend, "a"));
        pool.stop_all();

        assert!(pool.is_empty());
        assert!(backend.voice(0).lock().stopped);
    }
}
