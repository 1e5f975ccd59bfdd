use std::path::Path;

use lopdf::Document;
use thiserror::Error;
use tracing::{debug, info};

use super::validator::DocumentKind;

/// Extraction budget: pages after this one are never read.
pub const MAX_PDF_PAGES: usize = 50;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("Error reading TXT: {0}")]
    Text(String),
}

/// Extract the text of a stored upload.
///
/// TXT files are returned verbatim. PDF text is the first
/// [`MAX_PDF_PAGES`] pages joined with newlines and trimmed.
pub async fn extract(path: &Path, kind: DocumentKind) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Txt => extract_txt(path).await,
        DocumentKind::Pdf => {
            let path = path.to_path_buf();
            tokio::task::spawn_blocking(move || extract_pdf(&path))
                .await
                .map_err(|e| ExtractionError::Pdf(format!("extraction task failed: {}", e)))?
        }
    }
}

async fn extract_txt(path: &Path) -> Result<String, ExtractionError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ExtractionError::Text(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| ExtractionError::Text(format!("invalid UTF-8: {}", e)))
}

fn extract_pdf(path: &Path) -> Result<String, ExtractionError> {
    let doc = Document::load(path).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    if doc.is_encrypted() {
        return Err(ExtractionError::Pdf("encrypted PDFs are not supported".to_string()));
    }

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let page_count = page_numbers.len();

    let mut pages = Vec::with_capacity(page_count.min(MAX_PDF_PAGES));
    for page_number in page_numbers.into_iter().take(MAX_PDF_PAGES) {
        let text = doc
            .extract_text(&[page_number])
            .map_err(|e| ExtractionError::Pdf(format!("page {}: {}", page_number, e)))?;
        pages.push(text);
    }

    if page_count > MAX_PDF_PAGES {
        debug!(page_count, "Skipping pages beyond the extraction budget");
    }
    info!(page_count, pages_read = pages.len(), "PDF text extraction complete");

    Ok(pages.join("\n").trim().to_string())
}
