use serde::{Deserialize, Serialize};
use std::path::Path;

/// Audio containers accepted at the input boundary. Only `Wav` is the
/// canonical waveform container the transcriber consumes; everything else
/// goes through the normalizer first.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AudioContainer {
    Wav,
    Mp3,
    Ogg,
    Aac,
    Flac,
}

impl AudioContainer {
    pub fn is_canonical(self) -> bool {
        matches!(self, AudioContainer::Wav)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SourceFormat {
    Text,
    Pdf,
    Audio(AudioContainer),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unsupported file extension: {extension:?}")]
    UnsupportedExtension { extension: String },
}

/// Classify a source file by its filename suffix.
///
/// Matching is case-sensitive and exact: `.txt`, `.pdf`, `.mp3`, `.wav`,
/// `.ogg`, `.aac`, `.flac`. The file contents are never inspected.
pub fn classify(path: &Path) -> Result<SourceFormat, FormatError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    match extension {
        "txt" => Ok(SourceFormat::Text),
        "pdf" => Ok(SourceFormat::Pdf),
        "mp3" => Ok(SourceFormat::Audio(AudioContainer::Mp3)),
        "wav" => Ok(SourceFormat::Audio(AudioContainer::Wav)),
        "ogg" => Ok(SourceFormat::Audio(AudioContainer::Ogg)),
        "aac" => Ok(SourceFormat::Audio(AudioContainer::Aac)),
        "flac" => Ok(SourceFormat::Audio(AudioContainer::Flac)),
        other => Err(FormatError::UnsupportedExtension {
            extension: other.to_owned(),
        }),
    }
}
