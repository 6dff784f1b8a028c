//! Question complexity classifier
//!
//! Scores a question from cheap textual signals and maps the score to a
//! [`Tier`]. The classifier is deterministic and side-effect free: same
//! question plus same keyword lists always gives the same suggestion.

use crate::core::question::Question;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// Keyword lists feeding the classifier score.
///
/// Matching is case-insensitive substring containment. The lists are
/// configuration, not logic: callers supply them (usually from the config
/// file) and may localize or extend them freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordLists {
    /// Hints that a short factual answer suffices (score −1)
    pub simple: Vec<String>,
    /// Hints that the question needs weighing of alternatives (score +2)
    pub complex: Vec<String>,
    /// Hints that the question carries real-world consequences (score +3)
    pub high_stakes: Vec<String>,
}

impl Default for KeywordLists {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            simple: owned(&[
                "what is", "what's", "when", "where", "who is", "define", "meaning of",
            ]),
            complex: owned(&[
                "should i",
                "strategy",
                "analyze",
                "compare",
                "evaluate",
                "pros and cons",
                "trade-off",
                "difference",
            ]),
            high_stakes: owned(&[
                "decision",
                "investment",
                "critical",
                "business",
                "contract",
                "legal",
                "acquisition",
            ]),
        }
    }
}

impl KeywordLists {
    fn any_match(list: &[String], haystack: &str) -> bool {
        list.iter()
            .any(|kw| !kw.is_empty() && haystack.contains(&kw.to_lowercase()))
    }
}

/// Outcome of classifying a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Suggested tier
    pub tier: Tier,
    /// Final additive score the tier was derived from
    pub score: i32,
    /// Human-readable explanation of the suggestion
    pub reason: String,
}

/// Suggests a [`Tier`] for a question.
///
/// The score is additive; every clause is evaluated:
/// - word count: <10 → 0, <30 → +1, <50 → +2, otherwise +3
/// - more than one `?` → +1
/// - any simple keyword → −1
/// - any complex keyword → +2
/// - any high-stakes keyword → +3
///
/// Mapping: ≤0 Quick, 1–2 Standard, 3–4 Deep, ≥5 Expert.
#[derive(Debug, Clone, Default)]
pub struct ComplexityClassifier {
    keywords: KeywordLists,
}

impl ComplexityClassifier {
    pub fn new(keywords: KeywordLists) -> Self {
        Self { keywords }
    }

    pub fn classify(&self, question: &Question) -> Classification {
        let lowered = question.content().to_lowercase();
        let words = question.word_count();

        let mut score = match words {
            0..10 => 0,
            10..30 => 1,
            30..50 => 2,
            _ => 3,
        };

        if question.question_marks() > 1 {
            score += 1;
        }
        if KeywordLists::any_match(&self.keywords.simple, &lowered) {
            score -= 1;
        }
        if KeywordLists::any_match(&self.keywords.complex, &lowered) {
            score += 2;
        }
        if KeywordLists::any_match(&self.keywords.high_stakes, &lowered) {
            score += 3;
        }

        let (tier, summary) = match score {
            i32::MIN..=0 => (Tier::Quick, "simple question detected"),
            1..=2 => (Tier::Standard, "standard question detected"),
            3..=4 => (Tier::Deep, "complex question detected"),
            _ => (Tier::Expert, "high-stakes question detected"),
        };

        Classification {
            tier,
            score,
            reason: format!("{summary} (score {score}, {words} words)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Classification {
        ComplexityClassifier::default().classify(&Question::new(text))
    }

    #[test]
    fn test_short_simple_question_is_quick() {
        // 2 words, contains a simple keyword: 0 - 1 = -1
        let c = classify("Define recursion");
        assert_eq!(c.score, -1);
        assert_eq!(c.tier, Tier::Quick);
    }

    #[test]
    fn test_medium_complex_question_is_deep() {
        // 35 words (+2) with a complex keyword (+2) = 4
        let filler = "word ".repeat(30);
        let text = format!("Please analyze the following situation {filler}");
        let c = classify(&text);
        assert_eq!(c.score, 4);
        assert_eq!(c.tier, Tier::Deep);
    }

    #[test]
    fn test_long_high_stakes_question_is_expert() {
        // 60 words (+3) with a high-stakes keyword (+3) = 6
        let filler = "word ".repeat(55);
        let text = format!("This investment matters a lot: {filler}");
        assert_eq!(text.split_whitespace().count(), 60);
        let c = classify(&text);
        assert_eq!(c.score, 6);
        assert_eq!(c.tier, Tier::Expert);
    }

    #[test]
    fn test_multiple_question_marks_add_one() {
        let single = classify("Is this fine or not");
        let double = classify("Is this fine? Or not?");
        assert_eq!(double.score, single.score + 1);
    }

    #[test]
    fn test_all_clauses_are_additive() {
        // Simple and complex keywords both present: -1 + 2 on top of bucket 0
        let c = classify("Define and compare monads");
        assert_eq!(c.score, 1);
        assert_eq!(c.tier, Tier::Standard);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let c = classify("DEFINE gravity");
        assert_eq!(c.score, -1);
    }

    #[test]
    fn test_word_count_buckets() {
        assert_eq!(classify(&"w ".repeat(9)).score, 0);
        assert_eq!(classify(&"w ".repeat(10)).score, 1);
        assert_eq!(classify(&"w ".repeat(29)).score, 1);
        assert_eq!(classify(&"w ".repeat(30)).score, 2);
        assert_eq!(classify(&"w ".repeat(49)).score, 2);
        assert_eq!(classify(&"w ".repeat(50)).score, 3);
    }

    #[test]
    fn test_custom_keyword_lists() {
        let keywords = KeywordLists {
            simple: vec!["cos'è".into()],
            complex: vec![],
            high_stakes: vec![],
        };
        let classifier = ComplexityClassifier::new(keywords);
        let c = classifier.classify(&Question::new("Cos'è Bitcoin?"));
        assert_eq!(c.tier, Tier::Quick);
    }
}
