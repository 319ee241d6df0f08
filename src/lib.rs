#![warn(missing_docs)]
//! AdForge - sale-ad creative generation over the Gemini image API.
//!
//! Collects marketing assets (a product photo, an optional style
//! reference, an optional logo) and sale parameters (brand, slogan, two
//! prices, currency, aspect ratio, resolution tier), assembles them into
//! one multimodal generation request, and maps the response - or a
//! classified failure - back into session state for display and
//! download.
//!
//! # Quick Start
//!
//! ```no_run
//! use adforge::{AdSession, AssetSlot, EnvCredentialGate, GeminiBackend};
//!
//! #[tokio::main]
//! async fn main() -> adforge::Result<()> {
//!     let backend = GeminiBackend::builder().build()?;
//!     let mut session = AdSession::new(backend, EnvCredentialGate);
//!
//!     session.params.brand_name = "Acme".to_owned();
//!     session.assets.load(AssetSlot::Product, "product.jpg").await?;
//!
//!     session.generate_ad().await;
//!     if let Some(creative) = session.sink().creative() {
//!         creative.save("ad.png")?;
//!     } else if let Some(message) = session.sink().error() {
//!         eprintln!("{message}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod ad;
pub mod asset;
mod error;
pub mod gen;
mod session;

pub use error::{AdForgeError, FailureKind, Result};

pub use ad::{
    compose, AdParameters, AspectRatio, CreativeRequest, GeneratedCreative, ModelSpec,
    RequestPart, ResolutionTier,
};
pub use asset::{AssetSlot, AssetStore, EncodedAsset, ImageFormat};
pub use gen::{
    CreativeBackend, CredentialGate, EnvCredentialGate, GeminiBackend, GeminiBackendBuilder,
    Generator, API_KEY_ENV,
};
pub use session::{AdSession, ResultSink};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{AdForgeError, FailureKind, Result};

    pub use crate::ad::{AdParameters, AspectRatio, GeneratedCreative, ResolutionTier};
    pub use crate::asset::{AssetSlot, AssetStore};
    pub use crate::gen::{CredentialGate, EnvCredentialGate, GeminiBackend};
    pub use crate::session::AdSession;
}
