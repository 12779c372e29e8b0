//! Document extraction — turns uploaded bytes into the plain text the analysis core consumes.
//!
//! `AppState` holds an `Arc<dyn DocumentExtractor>`; the default `PdfTextExtractor` handles
//! plain text and PDF. Image input is recognised but rejected, since no OCR engine is bundled.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
    Image,
}

#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, AppError>;
}

/// Default extractor backed by `pdf-extract`.
pub struct PdfTextExtractor;

#[async_trait]
impl DocumentExtractor for PdfTextExtractor {
    async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, AppError> {
        match kind {
            DocumentKind::Text => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            DocumentKind::Pdf => extract_pdf_text(bytes).await,
            DocumentKind::Image => Err(AppError::UnsupportedMedia(
                "Text extraction from images is not supported; upload a PDF or paste the text"
                    .to_string(),
            )),
        }
    }
}

/// PDF parsing is CPU-bound, so it runs on the blocking pool.
async fn extract_pdf_text(bytes: Bytes) -> Result<String, AppError> {
    let size = bytes.len();
    let result = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await;

    match result {
        Ok(Ok(text)) => {
            debug!("Extracted {} chars from {size}-byte PDF", text.len());
            Ok(text)
        }
        Ok(Err(e)) => Err(AppError::Extraction(format!(
            "Could not read text from PDF: {e}"
        ))),
        // pdf-extract panics on some malformed documents
        Err(e) if e.is_panic() => Err(AppError::Extraction(
            "Could not read text from PDF: malformed document".to_string(),
        )),
        Err(e) => Err(AppError::Internal(anyhow::anyhow!(
            "spawn_blocking failed extracting PDF text: {e}"
        ))),
    }
}
