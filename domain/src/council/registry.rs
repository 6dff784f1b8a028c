//! Tier registry: tier → ordered panel + synthesis backend
//!
//! The registry is built once from external configuration and then only
//! read. Panel order is significant everywhere downstream: result slots,
//! user-facing numbering and the synthesis prompt all follow it.

use crate::council::role::{Backend, BackendId, Role};
use crate::tier::Tier;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Registry construction and lookup errors.
///
/// All of these are configuration or programming faults, never runtime
/// conditions; they propagate immediately instead of being retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no panel configured for tier {0}")]
    InvalidTier(Tier),

    #[error("tier {tier} references unknown backend '{backend}'")]
    UnknownBackend { tier: Tier, backend: BackendId },

    #[error("tier {tier} has {actual} roles, expected {expected}")]
    PanelSize {
        tier: Tier,
        expected: String,
        actual: usize,
    },

    #[error("duplicate backend id '{0}'")]
    DuplicateBackend(BackendId),
}

/// Panel definition for one tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierPanel {
    /// Roles in panel order
    pub roles: Vec<Role>,
    /// Backend that merges the panel outputs
    pub synthesis_backend: BackendId,
}

/// One seat on a resolved panel: the role plus its resolved backend
#[derive(Debug, Clone)]
pub struct PanelSeat {
    pub role: Role,
    pub backend: Backend,
}

/// A tier panel with every backend reference resolved
#[derive(Debug, Clone)]
pub struct ResolvedPanel {
    pub tier: Tier,
    pub seats: Vec<PanelSeat>,
    pub synthesis_backend: Backend,
}

impl ResolvedPanel {
    /// Roles in panel order
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.seats.iter().map(|s| &s.role)
    }
}

/// Static lookup from tier to panel definition and synthesis backend.
///
/// Construction validates the whole configuration up front: every tier's
/// panel size must fall in [`Tier::panel_size`] and every backend id must
/// resolve, so lookups after construction cannot hit dangling references.
#[derive(Debug, Clone)]
pub struct TierRegistry {
    backends: HashMap<BackendId, Backend>,
    panels: HashMap<Tier, TierPanel>,
}

impl TierRegistry {
    /// Build a registry, validating sizes and backend references.
    ///
    /// Tiers absent from `panels` are permitted here (a partial registry is
    /// a valid configuration); looking one up later fails with
    /// [`RegistryError::InvalidTier`].
    pub fn new(
        backends: Vec<Backend>,
        panels: Vec<(Tier, TierPanel)>,
    ) -> Result<Self, RegistryError> {
        let mut backend_map = HashMap::new();
        for backend in backends {
            if backend_map.contains_key(&backend.id) {
                return Err(RegistryError::DuplicateBackend(backend.id));
            }
            backend_map.insert(backend.id.clone(), backend);
        }

        let mut panel_map = HashMap::new();
        for (tier, panel) in panels {
            let expected = tier.panel_size();
            if !expected.contains(&panel.roles.len()) {
                return Err(RegistryError::PanelSize {
                    tier,
                    expected: format!("{}..={}", expected.start(), expected.end()),
                    actual: panel.roles.len(),
                });
            }
            for role in &panel.roles {
                if !backend_map.contains_key(&role.backend_id) {
                    return Err(RegistryError::UnknownBackend {
                        tier,
                        backend: role.backend_id.clone(),
                    });
                }
            }
            if !backend_map.contains_key(&panel.synthesis_backend) {
                return Err(RegistryError::UnknownBackend {
                    tier,
                    backend: panel.synthesis_backend.clone(),
                });
            }
            panel_map.insert(tier, panel);
        }

        Ok(Self {
            backends: backend_map,
            panels: panel_map,
        })
    }

    /// Look up the panel definition for a tier
    pub fn panel(&self, tier: Tier) -> Result<&TierPanel, RegistryError> {
        self.panels
            .get(&tier)
            .ok_or(RegistryError::InvalidTier(tier))
    }

    /// Look up a backend by id
    pub fn backend(&self, id: &BackendId) -> Option<&Backend> {
        self.backends.get(id)
    }

    fn backend_for(&self, tier: Tier, id: &BackendId) -> Result<&Backend, RegistryError> {
        self.backends.get(id).ok_or_else(|| RegistryError::UnknownBackend {
            tier,
            backend: id.clone(),
        })
    }

    /// Resolve a tier into role/backend seats plus the synthesis backend.
    ///
    /// Construction guarantees every reference resolves, so this only fails
    /// for tiers missing from the registry.
    pub fn resolve(&self, tier: Tier) -> Result<ResolvedPanel, RegistryError> {
        let panel = self.panel(tier)?;
        let mut seats = Vec::with_capacity(panel.roles.len());
        for role in &panel.roles {
            let backend = self.backend_for(tier, &role.backend_id)?.clone();
            seats.push(PanelSeat {
                role: role.clone(),
                backend,
            });
        }
        let synthesis_backend = self.backend_for(tier, &panel.synthesis_backend)?.clone();
        Ok(ResolvedPanel {
            tier,
            seats,
            synthesis_backend,
        })
    }

    /// Tiers with a configured panel
    pub fn configured_tiers(&self) -> Vec<Tier> {
        Tier::ALL
            .into_iter()
            .filter(|t| self.panels.contains_key(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(id: &str) -> Backend {
        Backend::new(id, format!("{id}-model"))
    }

    fn role(id: &str, backend: &str) -> Role {
        Role::new(id, id.to_uppercase(), backend, format!("You are {id}."))
    }

    fn registry() -> TierRegistry {
        TierRegistry::new(
            vec![backend("a"), backend("b"), backend("c")],
            vec![
                (
                    Tier::Quick,
                    TierPanel {
                        roles: vec![role("generalist", "a")],
                        synthesis_backend: "a".into(),
                    },
                ),
                (
                    Tier::Standard,
                    TierPanel {
                        roles: vec![role("one", "a"), role("two", "b"), role("three", "c")],
                        synthesis_backend: "a".into(),
                    },
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_configured_tier() {
        let reg = registry();
        assert_eq!(reg.panel(Tier::Quick).unwrap().roles.len(), 1);
        assert_eq!(reg.panel(Tier::Standard).unwrap().roles.len(), 3);
    }

    #[test]
    fn test_lookup_missing_tier_is_invalid() {
        let reg = registry();
        assert_eq!(
            reg.panel(Tier::Expert).unwrap_err(),
            RegistryError::InvalidTier(Tier::Expert)
        );
    }

    #[test]
    fn test_resolve_preserves_panel_order() {
        let reg = registry();
        let resolved = reg.resolve(Tier::Standard).unwrap();
        let ids: Vec<_> = resolved.roles().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["one", "two", "three"]);
        assert_eq!(resolved.synthesis_backend.id, "a".into());
    }

    #[test]
    fn test_wrong_panel_size_rejected() {
        let err = TierRegistry::new(
            vec![backend("a")],
            vec![(
                Tier::Standard,
                TierPanel {
                    roles: vec![role("only", "a")],
                    synthesis_backend: "a".into(),
                },
            )],
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::PanelSize { actual: 1, .. }));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let err = TierRegistry::new(
            vec![backend("a")],
            vec![(
                Tier::Quick,
                TierPanel {
                    roles: vec![role("generalist", "missing")],
                    synthesis_backend: "a".into(),
                },
            )],
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownBackend { .. }));
    }

    #[test]
    fn test_duplicate_backend_rejected() {
        let err = TierRegistry::new(vec![backend("a"), backend("a")], vec![]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateBackend("a".into()));
    }
}
