//! Console output formatter for consultation results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use council_domain::FinalAnswer;

/// Formats consultation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result, breakdown included
    pub fn format(answer: &FinalAnswer) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Council Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {} ({})\n",
            "Tier:".cyan().bold(),
            answer.tier,
            answer.tier_reason
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Panel:".cyan().bold(),
            answer.role_names.join(", ")
        ));

        output.push_str(&Self::section_header("Panel Responses"));
        for (index, result) in answer.breakdown.iter().enumerate() {
            let title = format!("── {}. {} ──", index + 1, result.role.display_name);
            if result.succeeded {
                output.push_str(&format!("\n{}\n{}\n", title.yellow().bold(), result.output));
            } else {
                output.push_str(&format!(
                    "\n{}\nError: {}\n",
                    title.red().bold(),
                    result.error_detail.as_deref().unwrap_or("Unknown")
                ));
            }
        }

        output.push_str(&Self::section_header("Synthesized Answer"));
        output.push_str(&format!("\n{}\n", answer.text));

        output.push_str(&format!(
            "\n{} {:.1}s, {} of {} roles answered\n",
            "Completed in".cyan().bold(),
            answer.elapsed.as_secs_f64(),
            answer.successful_results().count(),
            answer.breakdown.len()
        ));

        output
    }

    /// Format only the synthesized answer
    pub fn format_answer_only(answer: &FinalAnswer) -> String {
        format!(
            "{}\n\n{} {} tier, {:.1}s\n",
            answer.text,
            "--".dimmed(),
            answer.tier,
            answer.elapsed.as_secs_f64()
        )
    }

    /// Format as pretty-printed JSON
    pub fn format_json(answer: &FinalAnswer) -> String {
        serde_json::to_string_pretty(answer)
            .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{}\n{}\n", line, format!("  {title}").bold(), line)
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("## {title}").cyan().bold())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, answer: &FinalAnswer) -> String {
        ConsoleFormatter::format(answer)
    }

    fn format_json(&self, answer: &FinalAnswer) -> String {
        ConsoleFormatter::format_json(answer)
    }

    fn format_answer_only(&self, answer: &FinalAnswer) -> String {
        ConsoleFormatter::format_answer_only(answer)
    }
}
