//! Output formatter trait

use council_domain::FinalAnswer;

/// Trait for formatting consultation results
pub trait OutputFormatter {
    /// Format the complete result with the per-role breakdown
    fn format(&self, answer: &FinalAnswer) -> String;

    /// Format as JSON
    fn format_json(&self, answer: &FinalAnswer) -> String;

    /// Format the synthesized answer only (concise output)
    fn format_answer_only(&self, answer: &FinalAnswer) -> String;
}
