//! Role and backend value objects

use serde::{Deserialize, Serialize};

/// Identifier of a text-generation backend (Value Object)
///
/// Backends are addressed by id throughout the registry; the id is opaque
/// to the engine and only has to be unique within one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendId(String);

impl BackendId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BackendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BackendId {
    fn from(s: &str) -> Self {
        BackendId::new(s)
    }
}

impl From<String> for BackendId {
    fn from(s: String) -> Self {
        BackendId::new(s)
    }
}

/// An addressable text-generation endpoint plus its generation parameters.
///
/// Shared and read-only: the same backend may serve several roles across
/// several tiers concurrently without synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backend {
    /// Registry-unique identifier
    pub id: BackendId,
    /// Provider-side model name (e.g. "llama-3.3-70b-versatile")
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output length cap in tokens
    pub max_tokens: u32,
}

impl Backend {
    pub fn new(id: impl Into<BackendId>, model: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A named advisory persona bound to one backend and one directive.
///
/// Roles are immutable and stateless; the same role record is reused for
/// every question that selects its tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Stable identifier, used in config and logs
    pub id: String,
    /// Name shown in output and synthesis prompts
    pub display_name: String,
    /// Backend that answers for this role
    pub backend_id: BackendId,
    /// System directive establishing the persona
    pub directive: String,
}

impl Role {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        backend_id: impl Into<BackendId>,
        directive: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            backend_id: backend_id.into(),
            directive: directive.into(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_builder_defaults() {
        let b = Backend::new("llama-8b", "llama-3.1-8b-instant");
        assert_eq!(b.temperature, 0.7);
        assert_eq!(b.max_tokens, 1024);
    }

    #[test]
    fn test_backend_builder_overrides() {
        let b = Backend::new("x", "m").with_temperature(0.2).with_max_tokens(256);
        assert_eq!(b.temperature, 0.2);
        assert_eq!(b.max_tokens, 256);
    }

    #[test]
    fn test_role_display_uses_display_name() {
        let r = Role::new("critic", "Critical Thinker", "gemma", "You are a critic.");
        assert_eq!(r.to_string(), "Critical Thinker");
    }
}
