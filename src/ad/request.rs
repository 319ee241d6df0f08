//! Builds the ordered generation payload and selects the model tier.

use crate::ad::params::{AdParameters, AspectRatio, ResolutionTier};
use crate::asset::{AssetSlot, AssetStore, EncodedAsset};
use crate::error::{AdForgeError, Result};

/// Static description of one generation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSpec {
    /// Wire identifier sent to the service.
    pub id: &'static str,
    /// Human-readable name used in phase labels.
    pub display_name: &'static str,
    /// Whether this model accepts an output-resolution hint.
    pub forwards_resolution: bool,
}

/// Baseline model: fast, 1K output, no resolution parameter.
const FLASH: ModelSpec = ModelSpec {
    id: "gemini-2.5-flash-image",
    display_name: "Gemini 2.5 Flash",
    forwards_resolution: false,
};

/// Upgraded model: 2K/4K capable, always told the requested resolution.
const PRO: ModelSpec = ModelSpec {
    id: "gemini-3-pro-image-preview",
    display_name: "Gemini 3 Pro",
    forwards_resolution: true,
};

impl ModelSpec {
    /// Tier-to-model lookup. Adding a tier means adding a row here.
    pub fn for_tier(tier: ResolutionTier) -> Self {
        match tier {
            ResolutionTier::Standard => FLASH,
            ResolutionTier::High | ResolutionTier::Premium => PRO,
        }
    }
}

/// One entry in the ordered request payload.
#[derive(Debug, Clone)]
pub enum RequestPart {
    /// The instruction text. Always first.
    Text(String),
    /// An inline image with its declared MIME type.
    Image {
        /// Raw image bytes.
        data: Vec<u8>,
        /// Declared MIME type for the bytes.
        mime_type: &'static str,
    },
}

/// A fully assembled request for one generation call.
///
/// Part order is significant to the service: prompt text first, then
/// product, then concept and logo when present.
#[derive(Debug, Clone)]
pub struct CreativeRequest {
    /// The selected model.
    pub model: ModelSpec,
    /// Ordered payload parts.
    pub parts: Vec<RequestPart>,
    /// Always passed through verbatim.
    pub aspect_ratio: AspectRatio,
    /// Set only when the selected model forwards resolution.
    pub resolution: Option<ResolutionTier>,
}

impl CreativeRequest {
    /// Assembles a request from the session configuration.
    ///
    /// Fails with [`AdForgeError::MissingRequiredAsset`] when no product
    /// photo is present; that check runs before model selection so an
    /// invalid submission never reaches the network.
    pub fn build(params: &AdParameters, assets: &AssetStore, prompt: String) -> Result<Self> {
        let product = assets
            .get(AssetSlot::Product)
            .ok_or(AdForgeError::MissingRequiredAsset)?;

        let model = ModelSpec::for_tier(params.resolution);

        let mut parts = vec![RequestPart::Text(prompt)];
        parts.push(image_part(product));
        if let Some(concept) = assets.get(AssetSlot::Concept) {
            parts.push(image_part(concept));
        }
        if let Some(logo) = assets.get(AssetSlot::Logo) {
            parts.push(image_part(logo));
        }

        Ok(Self {
            model,
            parts,
            aspect_ratio: params.aspect_ratio,
            resolution: model.forwards_resolution.then_some(params.resolution),
        })
    }

    /// The instruction text this request carries.
    pub fn prompt(&self) -> &str {
        self.parts
            .iter()
            .find_map(|part| match part {
                RequestPart::Text(text) => Some(text.as_str()),
                RequestPart::Image { .. } => None,
            })
            .unwrap_or("")
    }
}

fn image_part(asset: &EncodedAsset) -> RequestPart {
    RequestPart::Image {
        data: asset.data.clone(),
        mime_type: asset.format.mime_type(),
    }
}
