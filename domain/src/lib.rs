//! Domain layer for council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tiered consultation
//!
//! Every question is answered by a panel of advisory roles. The panel is
//! selected by [`Tier`]: Quick (1 role), Standard (3), Deep (5), Expert (7).
//! A [`ComplexityClassifier`] suggests a tier from the question text; the
//! caller may override it.
//!
//! ## Panel and synthesis
//!
//! [`TierRegistry`] maps each tier to an ordered panel of [`Role`]s plus the
//! backend that merges the panel outputs into one answer. Panel order is
//! significant: it drives user-facing numbering and the synthesis prompt.

pub mod chunker;
pub mod core;
pub mod council;
pub mod prompt;
pub mod tier;

// Re-export commonly used types
pub use chunker::{ChunkingError, chunk};
pub use council::{
    registry::{PanelSeat, RegistryError, ResolvedPanel, TierPanel, TierRegistry},
    result::{FinalAnswer, RoleResult},
    role::{Backend, BackendId, Role},
};
pub use crate::core::question::Question;
pub use prompt::PromptTemplate;
pub use tier::{
    Tier,
    classifier::{Classification, ComplexityClassifier, KeywordLists},
};
