/// Sound library: id to decoded audio bytes
///
/// Filled by the host's asset loader; the scheduler never fetches bytes
/// itself. Lookups share the underlying buffers via Arc.
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::AppResult;

#[derive(Default)]
pub struct SoundLibrary {
    sounds: HashMap<String, Arc<Vec<u8>>>,
}

impl SoundLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, data: Vec<u8>) {
        self.sounds.insert(id.into(), Arc::new(data));
    }

    pub fn insert_shared(&mut self, id: impl Into<String>, data: Arc<Vec<u8>>) {
        self.sounds.insert(id.into(), data);
    }

    /// Read a file into the library under `id`
    pub fn load_file(&mut self, id: impl Into<String>, path: &Path) -> AppResult<()> {
        let id = id.into();
        let data = std::fs::read(path)?;
        tracing::info!(
            "Loaded audio for {}: {} ({} bytes)",
            id,
            path.display(),
            data.len()
        );
        self.insert(id, data);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<Vec<u8>>> {
        self.sounds.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sounds.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}
