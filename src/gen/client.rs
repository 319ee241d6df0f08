//! Generation-call orchestration: capability pre-flight, the single
//! call, failure classification and credential recovery.

use crate::ad::{CreativeRequest, GeneratedCreative};
use crate::error::{AdForgeError, Result};
use crate::gen::credential::CredentialGate;
use crate::gen::provider::CreativeBackend;

/// Phrase the service returns when the selected credential is unknown.
const CREDENTIAL_NOT_FOUND: &str = "Requested entity was not found";

/// Drives one generation attempt against a backend, gated by the host's
/// credential selection.
pub struct Generator<B, G> {
    backend: B,
    gate: G,
}

impl<B: CreativeBackend, G: CredentialGate> Generator<B, G> {
    /// Pairs a backend with a credential gate.
    pub fn new(backend: B, gate: G) -> Self {
        Self { backend, gate }
    }

    /// Runs one generation attempt. No internal retry; after a failure
    /// the user resubmits.
    ///
    /// When the upgraded model is selected and no credential has been
    /// chosen yet, the host's selection flow is started first and the
    /// call proceeds without re-checking. A rejected credential is
    /// reported as [`AdForgeError::InvalidCredential`] and reopens the
    /// selection flow once as a recovery side effect.
    pub async fn generate(&self, request: &CreativeRequest) -> Result<GeneratedCreative> {
        if request.model.forwards_resolution && !self.gate.has_selected_key().await {
            tracing::info!(model = request.model.id, "no credential selected, opening selection");
            self.gate.open_select_key().await;
        }

        match self.backend.generate(request).await {
            Ok(creative) => Ok(creative),
            Err(err) => {
                let err = classify(err);
                if matches!(err, AdForgeError::InvalidCredential(_)) {
                    tracing::warn!("credential rejected, reopening selection");
                    self.gate.open_select_key().await;
                }
                Err(err)
            }
        }
    }

    /// Checks that the backend is reachable and authenticated.
    pub async fn health_check(&self) -> Result<()> {
        self.backend.health_check().await
    }
}

/// Promotes transport failures that are really credential problems.
fn classify(err: AdForgeError) -> AdForgeError {
    match err {
        AdForgeError::Api { status, message }
            if message.contains(CREDENTIAL_NOT_FOUND) || status == 401 || status == 403 =>
        {
            AdForgeError::InvalidCredential(message)
        }
        other => other,
    }
}
