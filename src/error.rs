use thiserror::Error;

/// Library-level errors using thiserror for structured error handling.
///
/// Nothing in this crate treats these as fatal: missing resources and
/// playback failures degrade to "sound not heard" / "effect not shown" at
/// the call site. The variants exist so the degradation can be logged with
/// a cause chain.

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("No sound loaded for id: {0}")]
    MissingResource(String),

    #[error("Failed to initialize audio output stream")]
    StreamInitFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to decode audio data for {id}")]
    DecodeFailed {
        id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Audio playback failed for {0}")]
    PlaybackFailed(String),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings for key {key}")]
    ReadFailed {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to write settings for key {key}")]
    WriteFailed {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid settings payload: {0}")]
    Invalid(String),
}

/// Type alias for host-facing Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;
