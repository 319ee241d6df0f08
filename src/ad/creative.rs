//! The generated advertisement and its provenance.

use crate::asset::ImageFormat;
use crate::error::Result;
use base64::Engine;
use std::path::Path;
use std::time::SystemTime;

/// A finished creative: image bytes plus enough provenance to reproduce
/// it.
///
/// Immutable once created; a later successful generation replaces the
/// whole value rather than mutating it. No history is kept.
#[derive(Debug, Clone)]
#[must_use = "generated creative should be displayed or saved"]
pub struct GeneratedCreative {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// Image format as declared by the service.
    pub format: ImageFormat,
    /// When this creative was produced.
    pub created_at: SystemTime,
    /// The exact instruction text that produced it.
    pub prompt: String,
}

impl GeneratedCreative {
    /// Wraps a generation result, stamping the creation time.
    pub fn new(data: Vec<u8>, format: ImageFormat, prompt: String) -> Self {
        Self {
            data,
            format,
            created_at: SystemTime::now(),
            prompt,
        }
    }

    /// Returns the size of the image data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Encodes the image data as base64.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }

    /// Returns the image as a data URL for inline display.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.format.mime_type(), self.to_base64())
    }

    /// Saves the image to the given path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }

    /// The file name offered for download.
    pub fn download_file_name(&self, brand_name: &str) -> String {
        format!("{brand_name}-Meta-Ad.png")
    }
}
