pub mod pdf;

use crate::normalize::NormalizeError;
use std::path::Path;

pub use pdf::{LopdfTextSource, PdfError, PdfTextSource};

#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Pdf(#[from] PdfError),

    #[error(transparent)]
    Normalize(NormalizeError),
}

/// Read a plain-text source and split it into line units.
///
/// No trimming happens here; blank units are carried through and filtered
/// at scoring time.
pub async fn text_units(path: &Path) -> Result<Vec<String>, ExtractError> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(split_lines(&text))
}

/// Split extracted text into units on line boundaries.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_owned).collect()
}

/// Split a transcript into units on literal `'.'` boundaries.
///
/// Deliberately naive: a trailing period produces a trailing empty unit,
/// and decimal numbers or abbreviations split too. Downstream aggregation
/// filters blank units, so the naive split must stay as-is.
pub fn split_sentences(transcript: &str) -> Vec<String> {
    transcript.split('.').map(str::to_owned).collect()
}
