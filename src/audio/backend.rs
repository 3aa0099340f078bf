/// Playback backend seam
///
/// The scheduler's state machines only need "start a voice, adjust it,
/// ask if it finished". Production uses rodio; tests inject fakes so the
/// crossfade and pool logic run without audio hardware.
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::error::AudioError;

/// A single independently playing instance of a loaded resource
pub trait Voice {
    fn set_volume(&self, volume: f32);
    fn stop(&self);
    fn pause(&self);
    fn resume(&self);

    /// True once playback has run to completion (never true while paused)
    fn is_finished(&self) -> bool;
}

pub trait AudioBackend {
    /// Start playback of decoded bytes at the given volume. `looped` voices
    /// repeat forever and never report finished.
    fn start(
        &self,
        id: &str,
        data: Arc<Vec<u8>>,
        volume: f32,
        looped: bool,
    ) -> Result<Box<dyn Voice>, AudioError>;
}

/// rodio-backed output
pub struct RodioBackend {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
}

impl RodioBackend {
    pub fn new() -> Result<Self, AudioError> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| AudioError::StreamInitFailed(Box::new(e)))?;
        tracing::info!("Audio output stream initialized");
        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }
}

impl AudioBackend for RodioBackend {
    fn start(
        &self,
        id: &str,
        data: Arc<Vec<u8>>,
        volume: f32,
        looped: bool,
    ) -> Result<Box<dyn Voice>, AudioError> {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| AudioError::StreamInitFailed(Box::new(e)))?;

        // rodio's Decoder needs owned data with a 'static lifetime, so each
        // voice decodes its own copy of the preloaded bytes
        let cursor = std::io::Cursor::new((*data).clone());
        let decoder = Decoder::new(cursor).map_err(|e| AudioError::DecodeFailed {
            id: id.to_string(),
            source: Box::new(e),
        })?;

        if looped {
            sink.append(decoder.repeat_infinite());
        } else {
            sink.append(decoder);
        }
        sink.set_volume(volume.clamp(0.0, 1.0));
        sink.play();

        Ok(Box::new(RodioVoice { sink }))
    }
}

struct RodioVoice {
    sink: Sink,
}

impl Voice for RodioVoice {
    fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume.clamp(0.0, 1.0));
    }

    fn stop(&self) {
        self.sink.stop();
    }

    fn pause(&self) {
        self.sink.pause();
    }

    fn resume(&self) {
        self.sink.play();
    }

    fn is_finished(&self) -> bool {
        !self.sink.is_paused() && self.sink.empty()
    }
}
