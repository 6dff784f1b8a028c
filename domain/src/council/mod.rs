//! Advisory council: roles, backends, the tier registry and result types

pub mod registry;
pub mod result;
pub mod role;

pub use registry::{PanelSeat, RegistryError, ResolvedPanel, TierPanel, TierRegistry};
pub use result::{FinalAnswer, RoleResult};
pub use role::{Backend, BackendId, Role};
