use futures::future::BoxFuture;
use std::path::{Path, PathBuf};

#[cfg(feature = "ffmpeg-sidecar")]
use futures::FutureExt;

pub const CANONICAL_EXTENSION: &str = "wav";

#[derive(thiserror::Error, Debug)]
pub enum NormalizeError {
    #[error("codec unavailable: {0}")]
    CodecUnavailable(String),

    #[error("ffmpeg failed: {0}")]
    FfmpegFailed(String),
}

/// Narrow capability interface over the host transcoding codec.
pub trait AudioNormalizer: Send + Sync {
    /// Probe for the codec executable. A missing codec is a configuration
    /// failure and must be detected before any per-file work starts.
    fn ensure_available(&self) -> BoxFuture<'_, Result<(), NormalizeError>>;

    /// Transcode `source` into the canonical single-channel 16 kHz WAV,
    /// written alongside the source (same stem, `.wav` extension,
    /// overwriting any prior file at that path). Returns the new path.
    fn normalize(&self, source: PathBuf) -> BoxFuture<'_, Result<PathBuf, NormalizeError>>;
}

/// Derived output location for a normalized source.
pub fn canonical_path(source: &Path) -> PathBuf {
    source.with_extension(CANONICAL_EXTENSION)
}

#[cfg(feature = "ffmpeg-sidecar")]
#[derive(Clone, Debug, Default)]
pub struct FfmpegNormalizer;

#[cfg(feature = "ffmpeg-sidecar")]
impl AudioNormalizer for FfmpegNormalizer {
    fn ensure_available(&self) -> BoxFuture<'_, Result<(), NormalizeError>> {
        async {
            ffmpeg_sidecar::download::auto_download()
                .map_err(|e| NormalizeError::CodecUnavailable(e.to_string()))
        }
        .boxed()
    }

    fn normalize(&self, source: PathBuf) -> BoxFuture<'_, Result<PathBuf, NormalizeError>> {
        async move {
            let target = canonical_path(&source);

            let output = tokio::process::Command::new(ffmpeg_sidecar::paths::ffmpeg_path())
                .args(["-hide_banner", "-nostdin", "-loglevel", "error", "-y"])
                .arg("-i")
                .arg(&source)
                .args(["-vn", "-ac", "1", "-ar", "16000", "-acodec", "pcm_s16le"])
                .arg(&target)
                .output()
                .await
                .map_err(|e| NormalizeError::FfmpegFailed(e.to_string()))?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
                return Err(NormalizeError::FfmpegFailed(format!(
                    "exit_code={:?} stderr={stderr}",
                    output.status.code()
                )));
            }

            Ok(target)
        }
        .boxed()
    }
}
