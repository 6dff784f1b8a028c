//! Consultation result types - immutable outputs of a panel run.
//!
//! - [`RoleResult`] - one role's outcome, success or isolated failure
//! - [`FinalAnswer`] - the synthesized answer plus metadata

use crate::council::role::Role;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of one role's backend call.
///
/// Results are addressed by the role's position in the panel, never by
/// completion order; a dispatch always yields exactly one result per seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResult {
    /// The role this result belongs to
    pub role: Role,
    /// The role's answer; empty when the call failed
    pub output: String,
    /// Whether the backend call succeeded
    pub succeeded: bool,
    /// Normalized failure description if the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl RoleResult {
    /// Creates a successful result for a role.
    pub fn success(role: Role, output: impl Into<String>) -> Self {
        Self {
            role,
            output: output.into(),
            succeeded: true,
            error_detail: None,
        }
    }

    /// Creates a failed result. The failure stays isolated to this role.
    pub fn failure(role: Role, error_detail: impl Into<String>) -> Self {
        Self {
            role,
            output: String::new(),
            succeeded: false,
            error_detail: Some(error_detail.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.succeeded
    }
}

/// Final synthesized answer for one question.
///
/// Created once per consultation and handed to the caller; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalAnswer {
    /// Synthesized answer text
    pub text: String,
    /// Tier the consultation ran at
    pub tier: Tier,
    /// Why this tier was chosen (classifier reason or caller override)
    pub tier_reason: String,
    /// Display names of the panel roles, in panel order
    pub role_names: Vec<String>,
    /// Wall-clock duration of the whole consultation
    pub elapsed: Duration,
    /// Per-role breakdown, in panel order. Failed roles appear here with
    /// their error detail; they are never silently dropped.
    pub breakdown: Vec<RoleResult>,
}

impl FinalAnswer {
    pub fn new(
        text: impl Into<String>,
        tier: Tier,
        tier_reason: impl Into<String>,
        breakdown: Vec<RoleResult>,
        elapsed: Duration,
    ) -> Self {
        let role_names = breakdown
            .iter()
            .map(|r| r.role.display_name.clone())
            .collect();
        Self {
            text: text.into(),
            tier,
            tier_reason: tier_reason.into(),
            role_names,
            elapsed,
            breakdown,
        }
    }

    /// Results for roles that answered successfully, in panel order
    pub fn successful_results(&self) -> impl Iterator<Item = &RoleResult> {
        self.breakdown.iter().filter(|r| r.succeeded)
    }

    /// Results for roles that failed, in panel order
    pub fn failed_results(&self) -> impl Iterator<Item = &RoleResult> {
        self.breakdown.iter().filter(|r| !r.succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str) -> Role {
        Role::new(name, name, "b", "directive")
    }

    #[test]
    fn test_success_result() {
        let r = RoleResult::success(role("analyst"), "an answer");
        assert!(r.is_success());
        assert!(r.error_detail.is_none());
    }

    #[test]
    fn test_failure_result_keeps_detail() {
        let r = RoleResult::failure(role("analyst"), "request timed out");
        assert!(!r.is_success());
        assert_eq!(r.error_detail.as_deref(), Some("request timed out"));
        assert!(r.output.is_empty());
    }

    #[test]
    fn test_final_answer_role_names_follow_breakdown_order() {
        let breakdown = vec![
            RoleResult::success(role("first"), "a"),
            RoleResult::failure(role("second"), "boom"),
            RoleResult::success(role("third"), "c"),
        ];
        let answer = FinalAnswer::new(
            "answer",
            Tier::Standard,
            "standard question detected",
            breakdown,
            Duration::from_secs(12),
        );
        assert_eq!(answer.role_names, vec!["first", "second", "third"]);
        assert_eq!(answer.successful_results().count(), 2);
        assert_eq!(answer.failed_results().count(), 1);
    }
}
