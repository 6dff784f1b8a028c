//! Raw TOML configuration data types
//!
//! These structs mirror the structure of the TOML config file exactly. The
//! defaults reproduce the stock council: the Groq model line-up and the
//! four tier panels of the original deployment.

use council_domain::{
    Backend, KeywordLists, RegistryError, Role, Tier, TierPanel, TierRegistry,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("max_segment_len cannot be 0")]
    InvalidSegmentLength,

    #[error("backend '{0}' has an empty model name")]
    EmptyModelName(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Raw gateway configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: crate::providers::chat_completions::DEFAULT_BASE_URL.to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
        }
    }
}

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Cap on in-flight panel calls
    pub max_concurrency: usize,
    /// Timeout in seconds for each backend call
    pub timeout_seconds: u64,
    /// Maximum characters per delivered output segment
    pub max_segment_len: usize,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 8,
            timeout_seconds: 30,
            // Telegram caps messages at 4096; leave headroom like the
            // original bot did.
            max_segment_len: 4000,
        }
    }
}

/// Raw backend definition from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileBackendConfig {
    pub id: String,
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

/// Raw role definition from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRoleConfig {
    pub id: String,
    pub display_name: String,
    pub backend: String,
    pub directive: String,
}

/// Raw panel definition for one tier from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTierConfig {
    pub roles: Vec<FileRoleConfig>,
    pub synthesis_backend: String,
}

/// Panels per tier from TOML. A missing tier stays unconfigured and fails
/// lookup with `InvalidTier` at consultation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTiersConfig {
    pub quick: Option<FileTierConfig>,
    pub standard: Option<FileTierConfig>,
    pub deep: Option<FileTierConfig>,
    pub expert: Option<FileTierConfig>,
}

/// Complete raw configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gateway: FileGatewayConfig,
    pub behavior: FileBehaviorConfig,
    pub classifier: KeywordLists,
    #[serde(default = "default_backends")]
    pub backends: Vec<FileBackendConfig>,
    #[serde(default = "default_tiers")]
    pub tiers: FileTiersConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            gateway: FileGatewayConfig::default(),
            behavior: FileBehaviorConfig::default(),
            classifier: KeywordLists::default(),
            backends: default_backends(),
            tiers: default_tiers(),
        }
    }
}

impl FileConfig {
    /// Check the raw values before building domain types
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.behavior.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.behavior.max_segment_len == 0 {
            return Err(ConfigValidationError::InvalidSegmentLength);
        }
        for backend in &self.backends {
            if backend.model.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName(backend.id.clone()));
            }
        }
        Ok(())
    }

    /// Build the validated tier registry from this configuration
    pub fn build_registry(&self) -> Result<TierRegistry, ConfigValidationError> {
        self.validate()?;

        let backends = self
            .backends
            .iter()
            .map(|b| {
                Backend::new(b.id.as_str(), b.model.as_str())
                    .with_temperature(b.temperature)
                    .with_max_tokens(b.max_tokens)
            })
            .collect();

        let tier_entries = [
            (Tier::Quick, &self.tiers.quick),
            (Tier::Standard, &self.tiers.standard),
            (Tier::Deep, &self.tiers.deep),
            (Tier::Expert, &self.tiers.expert),
        ];

        let mut panels = Vec::new();
        for (tier, entry) in tier_entries {
            if let Some(config) = entry {
                let roles = config
                    .roles
                    .iter()
                    .map(|r| {
                        Role::new(
                            r.id.as_str(),
                            r.display_name.as_str(),
                            r.backend.as_str(),
                            r.directive.as_str(),
                        )
                    })
                    .collect();
                panels.push((
                    tier,
                    TierPanel {
                        roles,
                        synthesis_backend: config.synthesis_backend.as_str().into(),
                    },
                ));
            }
        }

        Ok(TierRegistry::new(backends, panels)?)
    }
}

fn default_backends() -> Vec<FileBackendConfig> {
    let backend = |id: &str, model: &str| FileBackendConfig {
        id: id.to_string(),
        model: model.to_string(),
        temperature: default_temperature(),
        max_tokens: default_max_tokens(),
    };
    vec![
        backend("llama-8b", "llama-3.1-8b-instant"),
        backend("llama-31-70b", "llama-3.1-70b-versatile"),
        backend("llama-33-70b", "llama-3.3-70b-versatile"),
        backend("mixtral", "mixtral-8x7b-32768"),
        backend("gemma", "gemma-7b-it"),
        backend("gemma2", "gemma2-9b-it"),
        backend("qwen", "qwen2-72b-instruct"),
    ]
}

fn default_tiers() -> FileTiersConfig {
    let role = |id: &str, display_name: &str, backend: &str, directive: &str| FileRoleConfig {
        id: id.to_string(),
        display_name: display_name.to_string(),
        backend: backend.to_string(),
        directive: directive.to_string(),
    };

    let technical_analyst = role(
        "technical-analyst",
        "Technical Analyst",
        "llama-8b",
        "You are a Technical Analyst. Provide detailed, precise technical analysis.",
    );
    let practical_expert = role(
        "practical-expert",
        "Practical Expert",
        "mixtral",
        "You are a Practical Expert. Give concrete, applicable examples and implementation advice.",
    );
    let critical_thinker = role(
        "critical-thinker",
        "Critical Thinker",
        "gemma",
        "You are a Critical Thinker. Challenge assumptions and offer alternative perspectives.",
    );
    let global_perspective = role(
        "global-perspective",
        "Global Perspective",
        "qwen",
        "You bring a Global Perspective. Consider the international and cross-cultural context.",
    );

    FileTiersConfig {
        quick: Some(FileTierConfig {
            roles: vec![role(
                "generalist",
                "Generalist",
                "llama-33-70b",
                "You are a versatile expert with broad knowledge. Answer completely, clearly and directly.",
            )],
            synthesis_backend: "llama-33-70b".to_string(),
        }),
        standard: Some(FileTierConfig {
            roles: vec![
                technical_analyst.clone(),
                practical_expert.clone(),
                critical_thinker.clone(),
            ],
            synthesis_backend: "llama-33-70b".to_string(),
        }),
        deep: Some(FileTierConfig {
            roles: vec![
                technical_analyst.clone(),
                role(
                    "strategist",
                    "Strategist",
                    "llama-31-70b",
                    "You are a Strategist. Focus on the long-term, big-picture view.",
                ),
                practical_expert.clone(),
                critical_thinker.clone(),
                global_perspective.clone(),
            ],
            synthesis_backend: "llama-33-70b".to_string(),
        }),
        expert: Some(FileTierConfig {
            roles: vec![
                technical_analyst,
                role(
                    "senior-strategist",
                    "Senior Strategist",
                    "llama-31-70b",
                    "You are a Senior Strategist. Provide long-term vision and strategic framing.",
                ),
                role(
                    "innovator",
                    "Innovator",
                    "llama-33-70b",
                    "You are an Innovator. Propose creative, unconventional solutions.",
                ),
                practical_expert,
                role(
                    "constructive-critic",
                    "Constructive Critic",
                    "gemma",
                    "You are a Constructive Critic. Identify risks, weaknesses and failure modes.",
                ),
                role(
                    "fact-checker",
                    "Fact Checker",
                    "gemma2",
                    "You are a Fact Checker. Verify claims and flag uncertainty explicitly.",
                ),
                global_perspective,
            ],
            synthesis_backend: "llama-33-70b".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_valid_registry() {
        let registry = FileConfig::default().build_registry().unwrap();
        for tier in Tier::ALL {
            let panel = registry.panel(tier).unwrap();
            assert!(
                tier.panel_size().contains(&panel.roles.len()),
                "{tier} panel has {} roles",
                panel.roles.len()
            );
        }
    }

    #[test]
    fn test_default_panels_follow_escalation() {
        let registry = FileConfig::default().build_registry().unwrap();
        assert_eq!(registry.panel(Tier::Quick).unwrap().roles.len(), 1);
        assert_eq!(registry.panel(Tier::Standard).unwrap().roles.len(), 3);
        assert_eq!(registry.panel(Tier::Deep).unwrap().roles.len(), 5);
        assert_eq!(registry.panel(Tier::Expert).unwrap().roles.len(), 7);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = FileConfig::default();
        config.behavior.timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_unknown_backend_reference_rejected() {
        let mut config = FileConfig::default();
        config
            .tiers
            .quick
            .as_mut()
            .unwrap()
            .roles[0]
            .backend = "nope".to_string();
        assert!(matches!(
            config.build_registry(),
            Err(ConfigValidationError::Registry(
                RegistryError::UnknownBackend { .. }
            ))
        ));
    }

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let toml_text = r#"
            [behavior]
            max_concurrency = 2

            [classifier]
            simple = ["cos'è"]
        "#;
        let config: FileConfig = toml::from_str(toml_text).unwrap();
        assert_eq!(config.behavior.max_concurrency, 2);
        assert_eq!(config.behavior.timeout_seconds, 30);
        assert_eq!(config.classifier.simple, vec!["cos'è".to_string()]);
        // Backends fall back to the stock line-up.
        assert_eq!(config.backends.len(), 7);
    }

    #[test]
    fn test_parse_explicit_tier_toml() {
        let toml_text = r#"
            [[backends]]
            id = "only"
            model = "some-model"

            [tiers.quick]
            synthesis_backend = "only"

            [[tiers.quick.roles]]
            id = "solo"
            display_name = "Solo"
            backend = "only"
            directive = "You are solo."
        "#;
        let config: FileConfig = toml::from_str(toml_text).unwrap();
        assert_eq!(config.backends.len(), 1);
        let quick = config.tiers.quick.unwrap();
        assert_eq!(quick.roles[0].display_name, "Solo");
        assert_eq!(quick.synthesis_backend, "only");
    }
}
