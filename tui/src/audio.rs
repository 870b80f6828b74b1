use crate::{assets::AssetError, sounds::SoundBank};
use chop_core::Cue;
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Handle to the default audio output.
///
/// The stream must stay alive for anything to be heard, so it is kept here
/// even though only the handle is used.
pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    pub fn new() -> Result<Self, AssetError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    /// Start playing the clip for `cue` and return immediately.
    ///
    /// Each cue gets its own sink, so cues overlap instead of queueing.
    pub fn play(&self, sounds: &SoundBank, cue: Cue) {
        let Ok(sink) = Sink::try_new(&self.handle) else {
            tracing::warn!(?cue, "could not open a sink");
            return;
        };
        sink.append(sounds.clip(cue).source());
        sink.detach();
    }
}
