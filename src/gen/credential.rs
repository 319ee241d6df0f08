//! Session-scoped usage-credential gating.

use async_trait::async_trait;

/// Environment variable holding the service API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Host-environment hooks for selecting a usage credential.
///
/// The upgraded model tier needs a billing-capable key; the host owns how
/// one gets chosen. `open_select_key` starts that flow and may return
/// before the user finishes it — callers continue optimistically rather
/// than racing the flow's own completion. A host that wants the stricter
/// contract can make `open_select_key` resolve only once a key is
/// actually in place.
#[async_trait]
pub trait CredentialGate: Send + Sync {
    /// Whether a usage credential has been selected for this session.
    async fn has_selected_key(&self) -> bool;

    /// Starts the host's credential selection flow.
    async fn open_select_key(&self);
}

/// Gate backed by the `GOOGLE_API_KEY` environment variable.
///
/// Non-interactive hosts cannot pop a selection dialog, so the selection
/// flow degrades to telling the operator what to set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialGate;

#[async_trait]
impl CredentialGate for EnvCredentialGate {
    async fn has_selected_key(&self) -> bool {
        std::env::var(API_KEY_ENV).map(|v| !v.is_empty()).unwrap_or(false)
    }

    async fn open_select_key(&self) {
        tracing::warn!("no usable credential selected; set {API_KEY_ENV} and resubmit");
    }
}
