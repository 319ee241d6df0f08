//! Generation-call orchestration and the Gemini backend.

mod client;
mod credential;
mod gemini;
mod provider;

pub use client::Generator;
pub use credential::{CredentialGate, EnvCredentialGate, API_KEY_ENV};
pub use gemini::{GeminiBackend, GeminiBackendBuilder};
pub use provider::CreativeBackend;
