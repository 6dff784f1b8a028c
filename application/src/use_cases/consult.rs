//! Consult use case
//!
//! Orchestrates the full consultation flow: tier selection, registry
//! lookup, panel dispatch and synthesis.

use crate::ports::backend_gateway::{BackendError, BackendGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::dispatch::PanelDispatcher;
use crate::use_cases::synthesize::{SynthesisEngine, SynthesisError};
use council_domain::{
    ComplexityClassifier, FinalAnswer, Question, RegistryError, Tier, TierRegistry,
};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Errors that can end a consultation without an answer
#[derive(Error, Debug)]
pub enum ConsultError {
    /// Configuration fault: the selected tier has no panel, or references
    /// dangle. Not retried.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Every panel role failed. Fatal for this question only; individual
    /// failures below this threshold are data, not errors.
    #[error("all {failed} panel roles failed")]
    PanelExhausted { failed: usize },

    #[error("synthesis backend failed: {0}")]
    SynthesisFailed(BackendError),
}

/// Input for one consultation
#[derive(Debug, Clone)]
pub struct ConsultInput {
    /// The question to answer (validated non-empty by construction)
    pub question: Question,
    /// Forced tier; `None` lets the classifier choose
    pub tier: Option<Tier>,
}

impl ConsultInput {
    pub fn new(question: impl Into<Question>) -> Self {
        Self {
            question: question.into(),
            tier: None,
        }
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }
}

/// Use case for answering one question through a tier-selected panel.
pub struct ConsultUseCase<G: BackendGateway + 'static> {
    gateway: Arc<G>,
    registry: TierRegistry,
    classifier: ComplexityClassifier,
    max_concurrency: usize,
}

impl<G: BackendGateway + 'static> ConsultUseCase<G> {
    pub fn new(gateway: Arc<G>, registry: TierRegistry) -> Self {
        Self {
            gateway,
            registry,
            classifier: ComplexityClassifier::default(),
            max_concurrency: crate::use_cases::dispatch::DEFAULT_MAX_CONCURRENCY,
        }
    }

    pub fn with_classifier(mut self, classifier: ComplexityClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit;
        self
    }

    /// Suggest a tier for a question without consulting anyone.
    pub fn suggest_tier(&self, question: &Question) -> council_domain::Classification {
        self.classifier.classify(question)
    }

    /// Execute with no progress reporting and no external cancellation
    pub async fn execute(&self, input: ConsultInput) -> Result<FinalAnswer, ConsultError> {
        self.execute_with_progress(input, &NoProgress, CancellationToken::new())
            .await
    }

    /// Execute the full flow: classify, resolve, dispatch, synthesize.
    ///
    /// Cancelling `cancel` cooperatively cancels in-flight panel calls;
    /// each becomes an isolated failed result, and the run ends with
    /// [`ConsultError::PanelExhausted`] only if nothing succeeded.
    pub async fn execute_with_progress(
        &self,
        input: ConsultInput,
        progress: &dyn ProgressNotifier,
        cancel: CancellationToken,
    ) -> Result<FinalAnswer, ConsultError> {
        let started = Instant::now();

        let (tier, reason) = match input.tier {
            Some(tier) => (tier, format!("{} tier forced by caller", tier.as_str())),
            None => {
                let classification = self.classifier.classify(&input.question);
                (classification.tier, classification.reason)
            }
        };
        info!(tier = tier.as_str(), %reason, "starting consultation");

        let panel = self.registry.resolve(tier)?;
        progress.on_panel_start(tier, panel.seats.len());

        let dispatcher =
            PanelDispatcher::new(Arc::clone(&self.gateway)).with_max_concurrency(self.max_concurrency);
        let results = dispatcher
            .dispatch(&input.question, &panel.seats, &cancel, progress)
            .await;
        progress.on_panel_complete(tier);

        let engine = SynthesisEngine::new(Arc::clone(&self.gateway));
        let text = engine
            .synthesize(&input.question, &panel.synthesis_backend, &results, progress)
            .await
            .map_err(|error| match error {
                SynthesisError::PanelExhausted(failed) => ConsultError::PanelExhausted { failed },
                SynthesisError::Backend(backend_error) => {
                    ConsultError::SynthesisFailed(backend_error)
                }
            })?;

        info!(
            tier = tier.as_str(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "consultation complete"
        );
        Ok(FinalAnswer::new(text, tier, reason, results, started.elapsed()))
    }
}
