//! Plain-text extraction from source documents.
//!
//! The generation pipeline only sees concatenated plain text; extraction
//! failures are opaque I/O errors that abort generation.

use std::path::Path;

use anyhow::{Context, Result};

/// Extract plain text from a source document based on its extension.
///
/// PDF pages come back concatenated in page order. Legacy word-processor
/// formats are rejected rather than half-read.
pub fn extract_text(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path)
            .map_err(|e| anyhow::anyhow!("failed to extract text from {}: {e}", path.display())),
        "txt" | "md" | "markdown" | "text" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        "docx" | "doc" => anyhow::bail!(
            "word-processor formats are not supported; convert {} to PDF or plain text",
            path.display()
        ),
        other => anyhow::bail!("unsupported source type: '{other}'"),
    }
}
