#[cfg(feature = "whisper-rs")]
mod whisper;

use futures::future::BoxFuture;
use std::path::{Path, PathBuf};

#[cfg(feature = "whisper-rs")]
pub use whisper::WhisperTranscriber;

pub const CANONICAL_SAMPLE_RATE: u32 = 16_000;
pub const CANONICAL_CHANNELS: u16 = 1;

#[derive(thiserror::Error, Debug)]
pub enum TranscribeError {
    #[error("failed to load speech model: {0}")]
    ModelLoad(String),

    #[error("unreadable waveform: {0}")]
    UnreadableWaveform(String),

    #[error("unsupported waveform format: {sample_rate} Hz, {channels} channel(s)")]
    UnsupportedWaveform { sample_rate: u32, channels: u16 },

    #[error("recognition failed: {0}")]
    RecognitionFailed(String),
}

/// Narrow capability interface over the speech-recognition oracle.
///
/// One canonical waveform in, one transcript string out. A single attempt
/// per file; no retry policy.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, waveform: PathBuf) -> BoxFuture<'_, Result<String, TranscribeError>>;
}

pub fn i16_to_f32_pcm(samples: &[i16]) -> Vec<f32> {
    if samples.is_empty() {
        return Vec::new();
    }
    let scale = 1.0f32 / 32768.0f32;
    samples.iter().map(|&s| f32::from(s) * scale).collect()
}

/// Load a canonical waveform file into f32 samples for recognition.
#[allow(deprecated)]
pub fn load_canonical_waveform(path: &Path) -> Result<Vec<f32>, TranscribeError> {
    let mut file =
        std::fs::File::open(path).map_err(|e| TranscribeError::UnreadableWaveform(e.to_string()))?;
    let (header, data) =
        wav::read(&mut file).map_err(|e| TranscribeError::UnreadableWaveform(e.to_string()))?;

    if header.sampling_rate != CANONICAL_SAMPLE_RATE
        || header.channel_count != CANONICAL_CHANNELS
    {
        return Err(TranscribeError::UnsupportedWaveform {
            sample_rate: header.sampling_rate,
            channels: header.channel_count,
        });
    }

    match data {
        wav::BitDepth::Sixteen(samples) => Ok(i16_to_f32_pcm(&samples)),
        wav::BitDepth::ThirtyTwoFloat(samples) => Ok(samples),
        other => Err(TranscribeError::UnreadableWaveform(format!(
            "unsupported bit depth: {other:?}"
        ))),
    }
}
