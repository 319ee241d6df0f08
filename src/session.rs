//! Session state: parameters, assets, the result sink and the
//! submit-to-display orchestration.

use crate::ad::{compose, AdParameters, CreativeRequest, GeneratedCreative};
use crate::asset::AssetStore;
use crate::error::Result;
use crate::gen::{CreativeBackend, CredentialGate, Generator};

/// What the presentation layer reads for the current attempt.
///
/// Holds at most one creative and at most one error. Starting a new
/// attempt clears the error and raises the busy label; the previous
/// creative stays visible until the next success replaces it.
#[derive(Debug, Clone, Default)]
pub struct ResultSink {
    creative: Option<GeneratedCreative>,
    error: Option<String>,
    busy: Option<String>,
}

impl ResultSink {
    fn begin(&mut self, phase: impl Into<String>) {
        self.error = None;
        self.busy = Some(phase.into());
    }

    fn phase(&mut self, phase: impl Into<String>) {
        self.busy = Some(phase.into());
    }

    fn succeed(&mut self, creative: GeneratedCreative) {
        self.creative = Some(creative);
        self.error = None;
        self.busy = None;
    }

    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.busy = None;
    }

    /// The most recent successful creative, if any.
    pub fn creative(&self) -> Option<&GeneratedCreative> {
        self.creative.as_ref()
    }

    /// The user-visible message of the most recent failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The phase label of an attempt in progress, if any.
    pub fn busy_phase(&self) -> Option<&str> {
        self.busy.as_deref()
    }

    /// True while an attempt is in progress.
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }
}

/// One user session: the mutable configuration plus the generation
/// pipeline, independent of any rendering layer.
///
/// `generate_ad` takes `&mut self`, so at most one attempt can be in
/// flight; a second submission cannot start until the first completes.
pub struct AdSession<B, G> {
    /// Sale and creative configuration, edited freely between attempts.
    pub params: AdParameters,
    /// The up-to-three creative inputs.
    pub assets: AssetStore,
    generator: Generator<B, G>,
    sink: ResultSink,
}

impl<B: CreativeBackend, G: CredentialGate> AdSession<B, G> {
    /// Creates a session with default parameters and empty assets.
    pub fn new(backend: B, gate: G) -> Self {
        Self {
            params: AdParameters::default(),
            assets: AssetStore::new(),
            generator: Generator::new(backend, gate),
            sink: ResultSink::default(),
        }
    }

    /// Runs one submission: compose, build, call, record.
    ///
    /// Every failure is caught here and lands in the sink as a single
    /// user-visible message; nothing propagates further and the session
    /// is always left in an actionable state.
    pub async fn generate_ad(&mut self) {
        self.sink.begin("Crafting your ad creative...");

        match self.run_attempt().await {
            Ok(creative) => {
                tracing::info!(bytes = creative.size(), "creative ready");
                self.sink.succeed(creative);
            }
            Err(err) => {
                tracing::warn!(error = %err, "generation attempt failed");
                self.sink.fail(err.user_message());
            }
        }
    }

    async fn run_attempt(&mut self) -> Result<GeneratedCreative> {
        let prompt = compose(&self.params, &self.assets);
        let request = CreativeRequest::build(&self.params, &self.assets, prompt)?;

        self.sink.phase(format!(
            "Generating ad visuals with {}...",
            request.model.display_name
        ));
        tracing::info!(
            model = request.model.id,
            aspect_ratio = request.aspect_ratio.as_str(),
            parts = request.parts.len(),
            "issuing generation call"
        );
        self.generator.generate(&request).await
    }

    /// The current attempt outcome for display/download.
    pub fn sink(&self) -> &ResultSink {
        &self.sink
    }

    /// The file name offered when downloading the current creative.
    pub fn download_file_name(&self) -> String {
        format!("{}-Meta-Ad.png", self.params.brand_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetSlot, EncodedAsset};
    use crate::error::AdForgeError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Backend that replays a scripted sequence of outcomes.
    struct ScriptedBackend {
        script: Mutex<Vec<Option<&'static str>>>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedBackend {
        /// `None` entries succeed; `Some(message)` entries fail with a
        /// 500 carrying that message.
        fn new(script: Vec<Option<&'static str>>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    script: Mutex::new(script),
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl CreativeBackend for ScriptedBackend {
        async fn generate(&self, request: &CreativeRequest) -> Result<GeneratedCreative> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.script.lock().unwrap().pop();
            match next.flatten() {
                None => Ok(GeneratedCreative::new(
                    vec![9, 9, 9],
                    crate::asset::ImageFormat::Png,
                    request.prompt().to_owned(),
                )),
                Some(message) => Err(AdForgeError::Api {
                    status: 500,
                    message: message.to_owned(),
                }),
            }
        }

        async fn health_check(&self) -> Result<()> {
            Ok(())
        }
    }

    struct OpenGate;

    #[async_trait]
    impl CredentialGate for OpenGate {
        async fn has_selected_key(&self) -> bool {
            true
        }

        async fn open_select_key(&self) {}
    }

    fn session_with(
        script: Vec<Option<&'static str>>,
    ) -> (AdSession<ScriptedBackend, OpenGate>, Arc<AtomicUsize>) {
        let (backend, calls) = ScriptedBackend::new(script);
        (AdSession::new(backend, OpenGate), calls)
    }

    fn add_product(session: &mut AdSession<ScriptedBackend, OpenGate>) {
        session
            .assets
            .set(AssetSlot::Product, EncodedAsset::from_bytes(vec![0xFF]));
    }

    #[tokio::test]
    async fn test_missing_product_blocks_before_any_call() {
        let (mut session, calls) = session_with(vec![None]);
        session.generate_ad().await;

        assert_eq!(
            session.sink().error(),
            Some("Please upload your Product Picture first.")
        );
        assert!(session.sink().creative().is_none());
        assert!(!session.sink().is_busy());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_fills_sink_and_stamps_prompt() {
        let (mut session, calls) = session_with(vec![None]);
        session.params.brand_name = "Acme".to_owned();
        add_product(&mut session);

        session.generate_ad().await;

        let creative = session.sink().creative().expect("creative");
        assert!(creative.prompt.contains("Acme"));
        assert!(session.sink().error().is_none());
        assert!(!session.sink().is_busy());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_new_attempt_clears_error_and_failure_keeps_creative() {
        // Script is popped from the back: first attempt succeeds, second
        // fails.
        let (mut session, _) = session_with(vec![Some("service exploded"), None]);
        add_product(&mut session);

        session.generate_ad().await;
        assert!(session.sink().creative().is_some());

        session.generate_ad().await;
        assert_eq!(session.sink().error(), Some("service exploded"));
        // The earlier creative survives a failed refresh.
        assert!(session.sink().creative().is_some());
    }

    #[tokio::test]
    async fn test_success_after_failure_clears_error() {
        let (mut session, _) = session_with(vec![None, Some("blip")]);
        add_product(&mut session);

        session.generate_ad().await;
        assert!(session.sink().error().is_some());

        session.generate_ad().await;
        assert!(session.sink().error().is_none());
        assert!(session.sink().creative().is_some());
    }

    #[tokio::test]
    async fn test_replacement_is_wholesale() {
        let (mut session, _) = session_with(vec![None, None]);
        add_product(&mut session);

        session.generate_ad().await;
        let first_prompt = session.sink().creative().unwrap().prompt.clone();

        session.params.brand_name = "Other Brand".to_owned();
        session.generate_ad().await;
        let second_prompt = &session.sink().creative().unwrap().prompt;
        assert_ne!(&first_prompt, second_prompt);
        assert!(second_prompt.contains("Other Brand"));
    }

    #[test]
    fn test_download_file_name_uses_brand() {
        let (session, _) = session_with(vec![]);
        assert_eq!(session.download_file_name(), "swaggers-Meta-Ad.png");
    }
}
