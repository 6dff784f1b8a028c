//! Synthesis engine
//!
//! Merges ordered panel results into one synthesis request and issues the
//! single synthesis call. An all-failed panel fails fast: no synthesis call
//! is made for a panel with nothing to merge.

use crate::ports::backend_gateway::{BackendError, BackendGateway};
use crate::ports::progress::ProgressNotifier;
use council_domain::{Backend, PromptTemplate, Question, RoleResult};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors from the synthesis step
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// Every role in the panel failed; fatal for this question only.
    #[error("all {0} panel roles failed")]
    PanelExhausted(usize),

    #[error("synthesis backend failed: {0}")]
    Backend(#[from] BackendError),
}

/// Issues the single merging call that turns panel results into one answer.
pub struct SynthesisEngine<G: BackendGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: BackendGateway + 'static> SynthesisEngine<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Synthesize ordered panel results into the final answer text.
    ///
    /// The prompt lists every role in panel order; failed roles appear with
    /// an explicit unavailable placeholder. Exactly one backend call is
    /// issued, and none at all when the panel is exhausted.
    pub async fn synthesize(
        &self,
        question: &Question,
        backend: &Backend,
        results: &[RoleResult],
        progress: &dyn ProgressNotifier,
    ) -> Result<String, SynthesisError> {
        if results.iter().all(|r| !r.succeeded) {
            warn!(roles = results.len(), "panel exhausted, skipping synthesis");
            return Err(SynthesisError::PanelExhausted(results.len()));
        }

        info!(backend = %backend.id, "synthesizing panel results");
        progress.on_synthesis_start(backend);

        let prompt = PromptTemplate::synthesis_prompt(question.content(), results);
        let outcome = self
            .gateway
            .generate(backend, PromptTemplate::synthesis_system(), &prompt)
            .await;

        progress.on_synthesis_complete(outcome.is_ok());
        Ok(outcome?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::testing::FakeGateway;
    use council_domain::Role;
    use council_domain::prompt::template::UNAVAILABLE_PLACEHOLDER;

    fn role(index: usize) -> Role {
        Role::new(
            format!("role-{index}"),
            format!("Role {index}"),
            "panel-backend",
            "You are an advisor.",
        )
    }

    fn synthesis_backend() -> Backend {
        Backend::new("synthesis", "synth-model")
    }

    #[tokio::test]
    async fn test_partial_failures_still_synthesize() {
        let mut gateway = FakeGateway::new();
        gateway.reply("synthesis", "merged answer");
        let gateway = Arc::new(gateway);
        let engine = SynthesisEngine::new(Arc::clone(&gateway));

        let results = vec![
            RoleResult::success(role(0), "answer zero"),
            RoleResult::failure(role(1), "request timed out"),
            RoleResult::success(role(2), "answer two"),
            RoleResult::failure(role(3), "rate limited"),
            RoleResult::success(role(4), "answer four"),
        ];

        let text = engine
            .synthesize(&Question::new("Q?"), &synthesis_backend(), &results, &NoProgress)
            .await
            .unwrap();
        assert_eq!(text, "merged answer");

        // The one synthesis call lists the three answers and two placeholders.
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        let prompt = &calls[0].prompt;
        for expected in ["answer zero", "answer two", "answer four"] {
            assert!(prompt.contains(expected));
        }
        assert_eq!(prompt.matches(UNAVAILABLE_PLACEHOLDER).count(), 2);
        assert!(prompt.contains("2. Role 1"));
        assert!(prompt.contains("4. Role 3"));
    }

    #[tokio::test]
    async fn test_exhausted_panel_issues_no_call() {
        let gateway = Arc::new(FakeGateway::new());
        let engine = SynthesisEngine::new(Arc::clone(&gateway));

        let results: Vec<_> = (0..5)
            .map(|i| RoleResult::failure(role(i), "boom"))
            .collect();

        let error = engine
            .synthesize(&Question::new("Q?"), &synthesis_backend(), &results, &NoProgress)
            .await
            .unwrap_err();
        assert_eq!(error, SynthesisError::PanelExhausted(5));
        assert_eq!(gateway.calls().len(), 0);
    }

    #[tokio::test]
    async fn test_synthesis_backend_failure_propagates() {
        let mut gateway = FakeGateway::new();
        gateway.fail("synthesis", BackendError::Unauthorized("bad key".into()));
        let engine = SynthesisEngine::new(Arc::new(gateway));

        let results = vec![RoleResult::success(role(0), "fine")];
        let error = engine
            .synthesize(&Question::new("Q?"), &synthesis_backend(), &results, &NoProgress)
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            SynthesisError::Backend(BackendError::Unauthorized(_))
        ));
    }
}
