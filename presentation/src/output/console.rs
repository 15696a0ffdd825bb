//! Console formatting for final tournament results

use chameleon_domain::SessionResults;
use colored::Colorize;

/// Formats session results for terminal output
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Per-model performance summary, one block per model
    pub fn format_summary(results: &SessionResults) -> String {
        let mut out = String::from("Model Performance Summary:\n");
        for (model, perf) in &results.model_performance {
            out.push_str(&format!("\n{}:\n", model.to_string().bold()));
            out.push_str(&format!("  Correct guesses: {}\n", perf.correct_guesses));
            out.push_str(&format!(
                "  Times guessed correctly: {}\n",
                perf.times_guessed_correctly
            ));
            out.push_str(&format!(
                "  Times fooled others: {}\n",
                perf.times_fooled_others
            ));
            out.push_str(&format!(
                "  Average rank of correct guess: {:.2}\n",
                perf.average_rank
            ));
        }
        out
    }

    /// The fooling leaderboard as a markdown table
    pub fn format_fooling_table(results: &SessionResults) -> String {
        let mut out = String::new();
        out.push_str(
            "| Model                    | Times Fooled Others | Times Got Fooled | Success Rate |\n",
        );
        out.push_str(
            "|--------------------------|--------------------:|-----------------:|-------------:|\n",
        );
        for (model, perf) in &results.model_performance {
            out.push_str(&format!(
                "| {:<24} | {:>19} | {:>16} | {:>11.1}% |\n",
                model.to_string(),
                perf.times_fooled_others,
                perf.times_got_fooled(),
                perf.success_rate() * 100.0
            ));
        }
        out
    }

    /// JSON output (same shape as the persisted results file)
    pub fn format_json(results: &SessionResults) -> String {
        serde_json::to_string_pretty(results)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chameleon_domain::Model;

    fn sample_results() -> SessionResults {
        let mut results = SessionResults::new(&[Model::Claude3Haiku, Model::Claude3Opus]);
        results.finalize_average_ranks();
        results
    }

    #[test]
    fn test_summary_lists_every_model() {
        let text = ConsoleFormatter::format_summary(&sample_results());
        assert!(text.contains("claude-3-haiku-20240307"));
        assert!(text.contains("claude-3-opus-20240229"));
        assert!(text.contains("Average rank of correct guess: 0.00"));
    }

    #[test]
    fn test_fooling_table_zero_rates() {
        let text = ConsoleFormatter::format_fooling_table(&sample_results());
        assert!(text.contains("| claude-3-haiku-20240307"));
        assert!(text.contains("0.0% |"));
    }

    #[test]
    fn test_json_shape() {
        let json = ConsoleFormatter::format_json(&sample_results());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["model_performance"].is_object());
    }
}
