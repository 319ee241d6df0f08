//! Gemini backend: the single `generateContent` call and its wire types.

use crate::ad::{CreativeRequest, GeneratedCreative, RequestPart};
use crate::asset::ImageFormat;
use crate::error::{AdForgeError, Result};
use crate::gen::credential::API_KEY_ENV;
use crate::gen::provider::CreativeBackend;
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Builder for [`GeminiBackend`].
#[derive(Debug, Clone, Default)]
pub struct GeminiBackendBuilder {
    api_key: Option<String>,
}

impl GeminiBackendBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. Falls back to `GOOGLE_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builds the backend, resolving the API key.
    pub fn build(self) -> Result<GeminiBackend> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AdForgeError::InvalidCredential(format!(
                    "{API_KEY_ENV} not set and no API key provided"
                ))
            })?;

        Ok(GeminiBackend {
            client: reqwest::Client::new(),
            api_key,
        })
    }
}

/// The one real generation backend.
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiBackend {
    /// Creates a new [`GeminiBackendBuilder`].
    pub fn builder() -> GeminiBackendBuilder {
        GeminiBackendBuilder::new()
    }

    async fn generate_impl(&self, request: &CreativeRequest) -> Result<GeneratedCreative> {
        let url = format!("{API_BASE}/{}:generateContent", request.model.id);
        let body = WireRequest::from_request(request);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AdForgeError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let wire: WireResponse = response.json().await?;
        let inline = extract_inline_image(wire)?;

        let data = base64::engine::general_purpose::STANDARD
            .decode(&inline.data)
            .map_err(|e| AdForgeError::Decode(e.to_string()))?;
        let format = ImageFormat::from_mime(&inline.mime_type).unwrap_or(ImageFormat::Png);

        tracing::debug!(bytes = data.len(), mime = %inline.mime_type, "creative extracted");
        Ok(GeneratedCreative::new(
            data,
            format,
            request.prompt().to_owned(),
        ))
    }
}

#[async_trait]
impl CreativeBackend for GeminiBackend {
    async fn generate(&self, request: &CreativeRequest) -> Result<GeneratedCreative> {
        self.generate_impl(request).await
    }

    async fn health_check(&self) -> Result<()> {
        // Probe the baseline model resource; any tier shares the key.
        let url = format!("{API_BASE}/gemini-2.5-flash-image");
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await?;

        match response.status().as_u16() {
            200..=299 => Ok(()),
            401 | 403 => Err(AdForgeError::InvalidCredential(
                "API key rejected".to_owned(),
            )),
            status => Err(AdForgeError::Api {
                status,
                message: "health check failed".to_owned(),
            }),
        }
    }
}

/// First-match-wins scan over the first candidate's parts.
///
/// A response without candidates, or whose first candidate carries no
/// inline image, is an empty result rather than a transport failure.
fn extract_inline_image(response: WireResponse) -> Result<WireInlineData> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(AdForgeError::NoImageReturned)?;

    candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .find_map(|part| part.inline_data)
        .ok_or(AdForgeError::NoImageReturned)
}

// Request wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    contents: Vec<WireContent>,
    generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
struct WireContent {
    parts: Vec<WirePart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum WirePart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: WireInlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    response_modalities: Vec<&'static str>,
    image_config: WireImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireImageConfig {
    aspect_ratio: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_size: Option<&'static str>,
}

impl WireRequest {
    fn from_request(request: &CreativeRequest) -> Self {
        let parts = request
            .parts
            .iter()
            .map(|part| match part {
                RequestPart::Text(text) => WirePart::Text { text: text.clone() },
                RequestPart::Image { data, mime_type } => WirePart::InlineData {
                    inline_data: WireInlineData {
                        mime_type: (*mime_type).to_owned(),
                        data: base64::engine::general_purpose::STANDARD.encode(data),
                    },
                },
            })
            .collect();

        Self {
            contents: vec![WireContent { parts }],
            generation_config: WireGenerationConfig {
                response_modalities: vec!["IMAGE"],
                image_config: WireImageConfig {
                    aspect_ratio: request.aspect_ratio.as_str(),
                    image_size: request.resolution.map(|tier| tier.as_str()),
                },
            },
        }
    }
}

// Response wire types

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
struct WireCandidate {
    #[serde(default)]
    content: Option<WireResponseContent>,
}

#[derive(Debug, Deserialize)]
struct WireResponseContent {
    #[serde(default)]
    parts: Vec<WireResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponsePart {
    #[serde(default)]
    inline_data: Option<WireInlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireInlineData {
    mime_type: String,
    data: String,
}
