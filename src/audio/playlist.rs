/// Battle-music playlist
///
/// Tracks in the playlist advance on completion, sequentially or randomly;
/// anything outside it (the menu theme, stingers) loops in place instead.
use rand::Rng;

/// The four battle themes that rotate during combat
pub const BATTLE_TRACKS: [&str; 4] = [
    "battle_theme_1",
    "battle_theme_2",
    "battle_theme_3",
    "battle_theme_4",
];

/// Selection policy for the next track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistMode {
    Sequential,
    Random,
}

#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<String>,
    mode: PlaylistMode,
}

impl Playlist {
    pub fn new(tracks: Vec<String>, mode: PlaylistMode) -> Self {
        Self { tracks, mode }
    }

    /// The standard battle rotation
    pub fn battle() -> Self {
        Self::new(
            BATTLE_TRACKS.iter().map(|t| t.to_string()).collect(),
            PlaylistMode::Sequential,
        )
    }

    pub fn mode(&self) -> PlaylistMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PlaylistMode) {
        self.mode = mode;
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tracks.iter().any(|t| t == id)
    }

    /// Pick the successor of `current`, or None when `current` is not in the
    /// playlist (those tracks loop in place rather than advancing).
    pub fn next(&self, current: &str, rng: &mut impl Rng) -> Option<String> {
        let index = self.tracks.iter().position(|t| t == current)?;
        if self.tracks.len() == 1 {
            return Some(self.tracks[0].clone());
        }
        match self.mode {
            PlaylistMode::Sequential => {
                Some(self.tracks[(index + 1) % self.tracks.len()].clone())
            }
            PlaylistMode::Random => {
                // Uniform over the other tracks: skip past the current index
                let pick = rng.gen_range(0..self.tracks.len() - 1);
                let pick = if pick >= index { pick + 1 } else { pick };
                Some(self.tracks[pick].clone())
            }
        }
    }
}
