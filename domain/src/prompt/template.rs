//! Prompt templates for the consultation flow
//!
//! The synthesis prompt is deterministic: built purely from the question and
//! the ordered role results, so the same inputs always produce the same
//! request text.

use crate::council::result::RoleResult;

/// Placeholder inserted for a role whose backend call failed.
///
/// Failed roles stay in the synthesis prompt at their panel position so the
/// synthesizing backend sees which perspectives are missing; they are never
/// silently omitted.
pub const UNAVAILABLE_PLACEHOLDER: &str = "(output unavailable)";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for a panel role: the role's directive, verbatim.
    pub fn role_system(directive: &str) -> &str {
        directive
    }

    /// User prompt for a panel role
    pub fn role_query(question: &str) -> String {
        format!(
            r#"Please answer the following question:

{}

Provide a clear, well-structured response from your assigned perspective."#,
            question
        )
    }

    /// System prompt for the synthesis call
    pub fn synthesis_system() -> &'static str {
        r#"You are a moderator synthesizing the advice of an expert panel into one answer.
Your task is to:
1. Identify areas of agreement among the advisors
2. Weigh disagreements and note which positions are better supported
3. Combine the strongest elements into one coherent, complete answer

Some advisors may be marked unavailable; work with the perspectives you have.
Be balanced and objective."#
    }

    /// User prompt for the synthesis call.
    ///
    /// Lists every role in panel order with its display name. Failed roles
    /// get [`UNAVAILABLE_PLACEHOLDER`] plus the error detail.
    pub fn synthesis_prompt(question: &str, results: &[RoleResult]) -> String {
        let mut prompt = format!(
            r#"Original question: {}

Advisor responses:
"#,
            question
        );

        for (index, result) in results.iter().enumerate() {
            prompt.push_str(&format!(
                "\n--- {}. {} ---\n",
                index + 1,
                result.role.display_name
            ));
            if result.succeeded {
                prompt.push_str(&result.output);
            } else {
                prompt.push_str(UNAVAILABLE_PLACEHOLDER);
                if let Some(detail) = &result.error_detail {
                    prompt.push_str(&format!(": {}", detail));
                }
            }
            prompt.push('\n');
        }

        prompt.push_str(
            r#"
Synthesize the perspectives above into one final answer. Lead with the
conclusion, then give the key supporting points."#,
        );

        prompt
    }
}
