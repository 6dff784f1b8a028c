//! Consultation tiers
//!
//! A [`Tier`] is the escalation level of a consultation. It determines how
//! many advisory roles sit on the panel and carries an advisory latency
//! budget. The budget is informational only; nothing in the engine enforces
//! it.

pub mod classifier;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Escalation level for a consultation — the single user-facing mode axis.
///
/// - **Quick**: one strong generalist, for simple factual questions
/// - **Standard**: three complementary perspectives, the default
/// - **Deep**: five perspectives, for genuinely complex analysis
/// - **Expert**: the full bench, for high-stakes decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Quick,
    #[default]
    Standard,
    Deep,
    Expert,
}

impl Tier {
    /// All tiers in escalation order
    pub const ALL: [Tier; 4] = [Tier::Quick, Tier::Standard, Tier::Deep, Tier::Expert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Quick => "quick",
            Tier::Standard => "standard",
            Tier::Deep => "deep",
            Tier::Expert => "expert",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Quick => "Quick",
            Tier::Standard => "Standard",
            Tier::Deep => "Deep",
            Tier::Expert => "Expert",
        }
    }

    /// Accepted panel sizes for this tier
    pub fn panel_size(&self) -> RangeInclusive<usize> {
        match self {
            Tier::Quick => 1..=1,
            Tier::Standard => 3..=3,
            Tier::Deep => 5..=5,
            Tier::Expert => 6..=7,
        }
    }

    /// Advisory latency budget, shown to the user before dispatch
    pub fn latency_budget(&self) -> &'static str {
        match self {
            Tier::Quick => "5-10s",
            Tier::Standard => "20-30s",
            Tier::Deep => "40-60s",
            Tier::Expert => "60-120s",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quick" => Ok(Tier::Quick),
            "standard" => Ok(Tier::Standard),
            "deep" => Ok(Tier::Deep),
            "expert" => Ok(Tier::Expert),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_sizes() {
        assert_eq!(Tier::Quick.panel_size(), 1..=1);
        assert_eq!(Tier::Standard.panel_size(), 3..=3);
        assert_eq!(Tier::Deep.panel_size(), 5..=5);
        assert!(Tier::Expert.panel_size().contains(&7));
        assert!(Tier::Expert.panel_size().contains(&6));
        assert!(!Tier::Expert.panel_size().contains(&5));
    }

    #[test]
    fn test_tier_parse_roundtrip() {
        for tier in Tier::ALL {
            let parsed: Tier = tier.as_str().parse().unwrap();
            assert_eq!(parsed, tier);
        }
        assert!("mega".parse::<Tier>().is_err());
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Tier::default(), Tier::Standard);
    }
}
