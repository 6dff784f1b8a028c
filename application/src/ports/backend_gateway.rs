//! Backend gateway port
//!
//! Defines the interface for issuing one text-generation call against a
//! backend. Implementations (adapters) live in the infrastructure layer.
//! The engine treats each call as at-most-once: retries and provider-side
//! rate-limit handling are the adapter's business, not the dispatcher's.

use async_trait::async_trait;
use council_domain::Backend;
use thiserror::Error;

/// Failure of a single backend call.
///
/// These are caught per role at the dispatcher and turned into failed
/// [`council_domain::RoleResult`]s; they never propagate past it except for
/// the synthesis call, where the caller sees the error directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("cancelled")]
    Cancelled,
}

impl BackendError {
    /// Stable kind label, independent of the detail text
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::Timeout(_) => "timeout",
            BackendError::RateLimited(_) => "rate_limited",
            BackendError::InvalidResponse(_) => "invalid_response",
            BackendError::Unauthorized(_) => "unauthorized",
            BackendError::Cancelled => "cancelled",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, BackendError::Cancelled)
    }
}

/// Gateway for text generation.
///
/// One call: backend id plus generation parameters, a system directive, and
/// the prompt. The adapter owns per-call timeouts; a timeout surfaces as
/// [`BackendError::Timeout`], never as a fault.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    async fn generate(
        &self,
        backend: &Backend,
        directive: &str,
        prompt: &str,
    ) -> Result<String, BackendError>;
}
