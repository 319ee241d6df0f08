//! Sale and creative configuration for one session.

use serde::{Deserialize, Serialize};

/// Requested output resolution class.
///
/// The tier also decides which generation model handles the request; see
/// the model lookup in the request builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResolutionTier {
    /// 1K output, baseline model.
    #[default]
    #[serde(rename = "1K")]
    Standard,
    /// 2K output, upgraded model.
    #[serde(rename = "2K")]
    High,
    /// 4K output, upgraded model.
    #[serde(rename = "4K")]
    Premium,
}

impl ResolutionTier {
    /// Returns the wire label for this tier (e.g., "2K").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "1K",
            Self::High => "2K",
            Self::Premium => "4K",
        }
    }
}

impl std::fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target aspect ratios for the generated creative.
///
/// `Standard` and `StandardPortrait` are accepted by the service but not
/// offered by the current selection surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1:1, square post.
    #[default]
    #[serde(rename = "1:1")]
    Square,
    /// 9:16, portrait story.
    #[serde(rename = "9:16")]
    Portrait,
    /// 16:9, landscape banner.
    #[serde(rename = "16:9")]
    Landscape,
    /// 4:3 landscape.
    #[serde(rename = "4:3")]
    Standard,
    /// 3:4 portrait.
    #[serde(rename = "3:4")]
    StandardPortrait,
}

impl AspectRatio {
    /// Returns the aspect ratio as a string (e.g., "16:9").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait => "9:16",
            Self::Landscape => "16:9",
            Self::Standard => "4:3",
            Self::StandardPortrait => "3:4",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The mutable sale/creative configuration, one instance per session.
///
/// Prices are free text on purpose: the values are rendered into the
/// creative verbatim, and nothing checks that the sale price actually
/// undercuts the regular one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdParameters {
    /// Brand name rendered on the creative.
    pub brand_name: String,
    /// Headline / slogan overlay.
    pub slogan: String,
    /// Regular price, shown de-emphasized.
    pub actual_price: String,
    /// Sale price, the dominant element.
    pub sale_price: String,
    /// Currency label, rendered next to both prices.
    pub currency: String,
    /// Requested output resolution class.
    pub resolution: ResolutionTier,
    /// Target aspect ratio.
    pub aspect_ratio: AspectRatio,
}

impl Default for AdParameters {
    fn default() -> Self {
        Self {
            brand_name: "swaggers".to_owned(),
            slogan: "STYLE THAT SPEAKS FOR ITSELF".to_owned(),
            actual_price: "5000".to_owned(),
            sale_price: "3500".to_owned(),
            currency: "Rupees".to_owned(),
            resolution: ResolutionTier::Standard,
            aspect_ratio: AspectRatio::Square,
        }
    }
}
