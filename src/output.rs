//! Output adapters over [`generate`].
//!
//! Each adapter exists in two forms: a plain one using default
//! [`RenderOptions`] and a `_with` variant for callers that override the
//! geometry or pin the footer date.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;

use crate::document::{generate, RenderOptions};
use crate::error::Result;
use crate::model::FormConfig;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A PDF paired with its MIME type, ready to hand to a download or upload API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfBlob {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

impl PdfBlob {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Raw PDF bytes.
pub fn render(config: &FormConfig) -> Result<Vec<u8>> {
    render_with(config, &RenderOptions::default())
}

pub fn render_with(config: &FormConfig, options: &RenderOptions) -> Result<Vec<u8>> {
    Ok(generate(config, options)?.bytes)
}

/// The PDF as a `data:application/pdf;base64,...` URI.
pub fn render_data_uri(config: &FormConfig) -> Result<String> {
    render_data_uri_with(config, &RenderOptions::default())
}

pub fn render_data_uri_with(config: &FormConfig, options: &RenderOptions) -> Result<String> {
    let bytes = render_with(config, options)?;
    Ok(to_data_uri(&bytes))
}

pub fn render_blob(config: &FormConfig) -> Result<PdfBlob> {
    render_blob_with(config, &RenderOptions::default())
}

pub fn render_blob_with(config: &FormConfig, options: &RenderOptions) -> Result<PdfBlob> {
    Ok(PdfBlob {
        bytes: render_with(config, options)?,
        mime_type: PDF_MIME_TYPE,
    })
}

/// Write the PDF into `dir` under its sanitized file name and return the path.
pub fn download(config: &FormConfig, dir: impl AsRef<Path>) -> Result<PathBuf> {
    download_with(config, dir, &RenderOptions::default())
}

pub fn download_with(
    config: &FormConfig,
    dir: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<PathBuf> {
    let rendered = generate(config, options)?;
    let path = dir.as_ref().join(&rendered.file_name);
    fs::write(&path, &rendered.bytes)?;
    tracing::info!(path = %path.display(), bytes = rendered.bytes.len(), "saved paper form");
    Ok(path)
}

pub fn to_data_uri(bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        PDF_MIME_TYPE,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_prefix_and_payload() {
        assert_eq!(to_data_uri(b"%PDF"), "data:application/pdf;base64,JVBERg==");
    }

    #[test]
    fn blob_reports_length() {
        let blob = PdfBlob {
            bytes: vec![1, 2, 3],
            mime_type: PDF_MIME_TYPE,
        };
        assert_eq!(blob.len(), 3);
        assert!(!blob.is_empty());
    }
}
