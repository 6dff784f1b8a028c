//! Scripted fake gateway for use-case tests

use crate::ports::backend_gateway::{BackendError, BackendGateway};
use async_trait::async_trait;
use council_domain::Backend;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Clone)]
enum Script {
    Reply(String),
    ReplyAfter(Duration, String),
    Fail(BackendError),
}

/// In-memory [`BackendGateway`] scripted per backend id.
///
/// Unscripted backends echo their prompt, so tests can inspect what the
/// engine actually sent. Every call is recorded in order.
pub struct FakeGateway {
    scripts: HashMap<String, Script>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub backend_id: String,
    pub directive: String,
    pub prompt: String,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(&mut self, backend_id: &str, text: impl Into<String>) {
        self.scripts
            .insert(backend_id.to_string(), Script::Reply(text.into()));
    }

    pub fn reply_after(&mut self, backend_id: &str, delay: Duration, text: impl Into<String>) {
        self.scripts
            .insert(backend_id.to_string(), Script::ReplyAfter(delay, text.into()));
    }

    pub fn fail(&mut self, backend_id: &str, error: BackendError) {
        self.scripts
            .insert(backend_id.to_string(), Script::Fail(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, backend_id: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.backend_id == backend_id)
            .count()
    }
}

#[async_trait]
impl BackendGateway for FakeGateway {
    async fn generate(
        &self,
        backend: &Backend,
        directive: &str,
        prompt: &str,
    ) -> Result<String, BackendError> {
        self.calls.lock().unwrap().push(RecordedCall {
            backend_id: backend.id.to_string(),
            directive: directive.to_string(),
            prompt: prompt.to_string(),
        });

        match self.scripts.get(backend.id.as_str()) {
            Some(Script::Reply(text)) => Ok(text.clone()),
            Some(Script::ReplyAfter(delay, text)) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
            Some(Script::Fail(error)) => Err(error.clone()),
            None => Ok(format!("echo: {prompt}")),
        }
    }
}
