//! Asset intake: the three optional creative inputs and their encodings.

use crate::error::{AdForgeError, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Image formats the pipeline recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG format (lossless).
    #[default]
    Png,
    /// JPEG format (lossy).
    Jpeg,
    /// WebP format.
    WebP,
}

impl ImageFormat {
    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    /// Looks up a format by MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Detects the format from leading magic bytes, if recognizable.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }
        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some(Self::WebP);
        }
        None
    }
}

/// Which of the three upload slots an asset lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    /// The product photo. Required before a generation request.
    Product,
    /// Optional style/lighting reference.
    Concept,
    /// Optional brand logo.
    Logo,
}

impl AssetSlot {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Concept => "concept",
            Self::Logo => "logo",
        }
    }
}

/// A user-supplied image held fully in memory with its declared format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAsset {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// Declared format, sniffed from the bytes where possible.
    pub format: ImageFormat,
}

impl EncodedAsset {
    /// Wraps raw bytes, sniffing the format from magic bytes.
    ///
    /// Unrecognized bytes are declared as JPEG rather than rejected; the
    /// service tolerates a mismatched declaration better than a refusal
    /// here would serve the user.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let format = ImageFormat::sniff(&data).unwrap_or(ImageFormat::Jpeg);
        Self { data, format }
    }

    /// Parses a `data:` URL into an asset.
    ///
    /// Lenient on purpose: tolerates a missing `data:` scheme, embedded
    /// whitespace, and missing base64 padding.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let b64 = match url.find(";base64,") {
            Some(pos) => &url[pos + 8..],
            None => url,
        };
        let cleaned: String = b64.chars().filter(|c| !c.is_ascii_whitespace()).collect();

        let data = base64::engine::general_purpose::STANDARD
            .decode(&cleaned)
            .or_else(|_| base64::engine::general_purpose::STANDARD_NO_PAD.decode(&cleaned))
            .map_err(|e| AdForgeError::Decode(e.to_string()))?;

        let declared = url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .and_then(ImageFormat::from_mime);

        Ok(match declared {
            Some(format) => Self { data, format },
            None => Self::from_bytes(data),
        })
    }

    /// Encodes the asset bytes as base64.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }

    /// Returns the asset as a data URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.format.mime_type(), self.to_base64())
    }
}

/// Holds the up-to-three creative inputs for one session.
///
/// Each slot is independent; re-selecting a slot replaces whatever was
/// there (last write wins). Nothing is persisted beyond the session.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    product: Option<EncodedAsset>,
    concept: Option<EncodedAsset>,
    logo: Option<EncodedAsset>,
}

impl AssetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the asset in the given slot, if any.
    pub fn get(&self, slot: AssetSlot) -> Option<&EncodedAsset> {
        match slot {
            AssetSlot::Product => self.product.as_ref(),
            AssetSlot::Concept => self.concept.as_ref(),
            AssetSlot::Logo => self.logo.as_ref(),
        }
    }

    /// Places an asset in a slot, replacing any previous one.
    pub fn set(&mut self, slot: AssetSlot, asset: EncodedAsset) {
        tracing::debug!(slot = slot.label(), bytes = asset.data.len(), "asset set");
        match slot {
            AssetSlot::Product => self.product = Some(asset),
            AssetSlot::Concept => self.concept = Some(asset),
            AssetSlot::Logo => self.logo = Some(asset),
        }
    }

    /// Reads a local file fully into memory and encodes it into a slot.
    pub async fn load(&mut self, slot: AssetSlot, path: impl AsRef<Path>) -> Result<()> {
        let data = tokio::fs::read(path).await?;
        self.set(slot, EncodedAsset::from_bytes(data));
        Ok(())
    }

    /// Clears a single slot.
    pub fn clear(&mut self, slot: AssetSlot) {
        match slot {
            AssetSlot::Product => self.product = None,
            AssetSlot::Concept => self.concept = None,
            AssetSlot::Logo => self.logo = None,
        }
    }

    /// Resets all three slots to absent.
    pub fn clear_all(&mut self) {
        self.product = None;
        self.concept = None;
        self.logo = None;
    }

    /// True when no slot holds an asset.
    pub fn is_empty(&self) -> bool {
        self.product.is_none() && self.concept.is_none() && self.logo.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 12] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    const JPEG_MAGIC: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];
    const WEBP_MAGIC: [u8; 12] = *b"RIFF\x00\x00\x00\x00WEBP";

    #[test]
    fn test_sniff() {
        assert_eq!(ImageFormat::sniff(&PNG_MAGIC), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::sniff(&JPEG_MAGIC), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(&WEBP_MAGIC), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::sniff(b"not an image"), None);
    }

    #[test]
    fn test_from_bytes_falls_back_to_jpeg() {
        let asset = EncodedAsset::from_bytes(vec![0, 1, 2, 3]);
        assert_eq!(asset.format, ImageFormat::Jpeg);

        let asset = EncodedAsset::from_bytes(PNG_MAGIC.to_vec());
        assert_eq!(asset.format, ImageFormat::Png);
    }

    #[test]
    fn test_data_url_round_trip() {
        let asset = EncodedAsset::from_bytes(PNG_MAGIC.to_vec());
        let url = asset.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));

        let parsed = EncodedAsset::from_data_url(&url).unwrap();
        assert_eq!(parsed, asset);
    }

    #[test]
    fn test_from_data_url_lenient() {
        // Whitespace inside the payload and no padding.
        let url = "data:image/jpeg;base64,/9 j/\n4A A";
        let parsed = EncodedAsset::from_data_url(url).unwrap();
        assert_eq!(parsed.format, ImageFormat::Jpeg);
        assert_eq!(parsed.data, vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00]);

        // Bare base64 without a data: scheme sniffs the decoded bytes.
        let bare = base64::engine::general_purpose::STANDARD.encode(PNG_MAGIC);
        let parsed = EncodedAsset::from_data_url(&bare).unwrap();
        assert_eq!(parsed.format, ImageFormat::Png);
    }

    #[test]
    fn test_from_data_url_rejects_garbage() {
        assert!(EncodedAsset::from_data_url("data:image/png;base64,@@@").is_err());
    }

    #[test]
    fn test_set_replaces_existing() {
        let mut store = AssetStore::new();
        store.set(AssetSlot::Product, EncodedAsset::from_bytes(vec![1]));
        store.set(AssetSlot::Product, EncodedAsset::from_bytes(vec![2]));
        assert_eq!(store.get(AssetSlot::Product).unwrap().data, vec![2]);
    }

    #[test]
    fn test_clear_all() {
        let mut store = AssetStore::new();
        store.set(AssetSlot::Product, EncodedAsset::from_bytes(vec![1]));
        store.set(AssetSlot::Concept, EncodedAsset::from_bytes(vec![2]));
        store.set(AssetSlot::Logo, EncodedAsset::from_bytes(vec![3]));
        assert!(!store.is_empty());

        store.clear_all();
        assert!(store.is_empty());
        assert!(store.get(AssetSlot::Product).is_none());
    }

    #[test]
    fn test_clear_single_slot() {
        let mut store = AssetStore::new();
        store.set(AssetSlot::Product, EncodedAsset::from_bytes(vec![1]));
        store.set(AssetSlot::Logo, EncodedAsset::from_bytes(vec![3]));

        store.clear(AssetSlot::Logo);
        assert!(store.get(AssetSlot::Logo).is_none());
        assert!(store.get(AssetSlot::Product).is_some());
    }

    #[tokio::test]
    async fn test_load_reads_file_into_slot() {
        let path = std::env::temp_dir().join(format!("adforge-asset-{}.png", std::process::id()));
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let mut store = AssetStore::new();
        store.load(AssetSlot::Product, &path).await.unwrap();
        let asset = store.get(AssetSlot::Product).unwrap();
        assert_eq!(asset.format, ImageFormat::Png);
        assert_eq!(asset.data, PNG_MAGIC.to_vec());

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let mut store = AssetStore::new();
        let err = store
            .load(AssetSlot::Product, "/nonexistent/adforge.png")
            .await
            .unwrap_err();
        assert!(matches!(err, AdForgeError::Io(_)));
    }
}
