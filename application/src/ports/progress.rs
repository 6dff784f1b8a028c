//! Progress notification port
//!
//! Optional callbacks for reporting consultation progress. Fully decoupled
//! from scheduling: notifications fire as results are collected, and a
//! notifier can neither delay nor reorder dispatch.

use council_domain::{Backend, Role, Tier};

/// Callback for progress updates during a consultation.
///
/// Implementations live in the presentation layer (console bars, chat
/// status messages, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the panel is dispatched
    fn on_panel_start(&self, tier: Tier, total_roles: usize);

    /// Called as each role's result is collected
    fn on_role_complete(&self, role: &Role, success: bool);

    /// Called once after every panel slot is filled
    fn on_panel_complete(&self, tier: Tier);

    /// Called before the synthesis call is issued
    fn on_synthesis_start(&self, _backend: &Backend) {}

    /// Called after the synthesis call returns
    fn on_synthesis_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_panel_start(&self, _tier: Tier, _total_roles: usize) {}
    fn on_role_complete(&self, _role: &Role, _success: bool) {}
    fn on_panel_complete(&self, _tier: Tier) {}
}
