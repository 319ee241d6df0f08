//! Backend trait for the generation call.

use crate::ad::{CreativeRequest, GeneratedCreative};
use crate::error::Result;
use async_trait::async_trait;

/// A service capable of turning a [`CreativeRequest`] into a creative.
///
/// One real implementation exists; the seam is here so orchestration can
/// be exercised without a network.
#[async_trait]
pub trait CreativeBackend: Send + Sync {
    /// Runs the assembled request through the service. Single attempt.
    async fn generate(&self, request: &CreativeRequest) -> Result<GeneratedCreative>;

    /// Checks that the service is reachable and the key is accepted.
    async fn health_check(&self) -> Result<()>;

    /// Name of this backend for display.
    fn name(&self) -> &str {
        "Gemini (Google)"
    }
}
