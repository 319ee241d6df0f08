//! Error types for the ad creative pipeline.

/// Message shown when submission is attempted without a product photo.
const MSG_MISSING_PRODUCT: &str = "Please upload your Product Picture first.";

/// Message shown when the service rejects the selected credential.
const MSG_INVALID_CREDENTIAL: &str = "API Key error. Please re-select your API key.";

/// Message shown when the call succeeds but carries no image.
const MSG_NO_IMAGE: &str = "No image was returned. Try adjusting your prompt or images.";

/// Fallback when a transport failure has no message of its own.
const MSG_CONNECTIVITY: &str =
    "Ad generation failed. Please check your internet connection and try again.";

/// Errors that can occur while assembling or running a generation attempt.
#[derive(Debug, thiserror::Error)]
pub enum AdForgeError {
    /// Submission was attempted without a product photo.
    #[error("product image is required")]
    MissingRequiredAsset,

    /// The service does not recognize the selected usage credential.
    #[error("credential not recognized: {0}")]
    InvalidCredential(String),

    /// The call completed but no inline image was found in the response.
    #[error("model returned no image")]
    NoImageReturned,

    /// The service returned an error response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status of the rejected call.
        status: u16,
        /// Body text of the rejected call, possibly empty.
        message: String,
    },

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode base64 data.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// I/O error (e.g., reading an asset or saving the creative).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The four user-facing failure classes the sink distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Blocked before any network activity: the product photo is missing.
    MissingRequiredAsset,
    /// The selected credential was rejected; reselection was triggered.
    InvalidCredential,
    /// The call succeeded but produced no image.
    NoImageReturned,
    /// Everything else: connectivity, service errors, decode failures.
    Transport,
}

impl AdForgeError {
    /// Classifies this error into one of the user-facing failure kinds.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MissingRequiredAsset => FailureKind::MissingRequiredAsset,
            Self::InvalidCredential(_) => FailureKind::InvalidCredential,
            Self::NoImageReturned => FailureKind::NoImageReturned,
            _ => FailureKind::Transport,
        }
    }

    /// The single user-visible message for this failure.
    ///
    /// Transport failures surface their underlying message when one
    /// exists, a generic connectivity message otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingRequiredAsset => MSG_MISSING_PRODUCT.to_owned(),
            Self::InvalidCredential(_) => MSG_INVALID_CREDENTIAL.to_owned(),
            Self::NoImageReturned => MSG_NO_IMAGE.to_owned(),
            Self::Api { message, .. } if message.trim().is_empty() => MSG_CONNECTIVITY.to_owned(),
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for ad creative operations.
pub type Result<T> = std::result::Result<T, AdForgeError>;
