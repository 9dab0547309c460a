use futures::future::BoxFuture;
use futures::FutureExt;
use lopdf::Document;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum PdfError {
    #[error("failed to open document: {0}")]
    Open(String),

    #[error("failed to extract page {page}: {details}")]
    Page { page: u32, details: String },
}

/// Narrow capability interface over a PDF text-extraction library, so the
/// pipeline can be exercised with fakes instead of real documents.
pub trait PdfTextSource: Send + Sync {
    /// Concatenated text of every page in document order. A page that
    /// extracts to an empty string is acceptable output, not an error.
    fn document_text(&self, path: PathBuf) -> BoxFuture<'_, Result<String, PdfError>>;
}

#[derive(Clone, Debug, Default)]
pub struct LopdfTextSource;

fn read_document_text(path: &Path) -> Result<String, PdfError> {
    let doc = Document::load(path).map_err(|e| PdfError::Open(e.to_string()))?;

    let mut text = String::new();
    for page in doc.get_pages().keys().copied() {
        let page_text = doc.extract_text(&[page]).map_err(|e| PdfError::Page {
            page,
            details: e.to_string(),
        })?;
        text.push_str(&page_text);
    }
    Ok(text)
}

impl PdfTextSource for LopdfTextSource {
    fn document_text(&self, path: PathBuf) -> BoxFuture<'_, Result<String, PdfError>> {
        async move {
            tokio::task::spawn_blocking(move || read_document_text(&path))
                .await
                .map_err(|e| PdfError::Open(e.to_string()))?
        }
        .boxed()
    }
}
