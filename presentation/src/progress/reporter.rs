//! Progress reporting for tournament execution.
//!
//! [`ConsoleProgress`] owns every process-wide counter the session
//! needs for observability: total call count against the expected
//! total, per-model continuation/delimiter-miss counts, and interim
//! fooling tallies built up from guess outcomes. The orchestrator
//! passes it into rounds explicitly; the core keeps no globals.

use chameleon_application::ports::completion_gateway::CallKind;
use chameleon_application::ports::progress::TournamentProgress;
use chameleon_domain::{GuessOutcome, Model, StoryPrompt};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// How often (in calls) to print the interim status tables
const STATUS_EVERY: usize = 50;

#[derive(Default)]
struct CallCounters {
    total_calls: usize,
    continuation_calls: BTreeMap<Model, usize>,
    missing_delimiters: BTreeMap<Model, usize>,
    first_prompt_logged: bool,
}

#[derive(Default, Clone)]
struct InterimStats {
    fooled_others: usize,
    got_fooled: usize,
}

/// Console progress reporter with an overall call progress bar
pub struct ConsoleProgress {
    bar: ProgressBar,
    counters: Mutex<CallCounters>,
    interim: Mutex<BTreeMap<Model, InterimStats>>,
}

impl ConsoleProgress {
    /// Create a reporter for a session expected to make `expected_calls`
    pub fn new(expected_calls: usize) -> Self {
        let bar = ProgressBar::new(expected_calls as u64);
        bar.set_style(Self::bar_style());
        bar.set_prefix("Tournament");
        Self {
            bar,
            counters: Mutex::new(CallCounters::default()),
            interim: Mutex::new(BTreeMap::new()),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    /// Print the per-model delimiter-miss ratios
    fn print_delimiter_status(&self, counters: &CallCounters) {
        self.bar.println("Completion tag status:".bold().to_string());
        for (model, misses) in &counters.missing_delimiters {
            let cont_calls = counters.continuation_calls.get(model).copied().unwrap_or(0);
            let ratio = if cont_calls > 0 {
                *misses as f64 / cont_calls as f64
            } else {
                0.0
            };
            self.bar.println(format!(
                "  {}: {}/{} missing tags in continuations ({:.1}%)",
                model,
                misses,
                cont_calls,
                ratio * 100.0
            ));
        }
    }

    /// Print the interim fooling leaderboard as a markdown table
    fn print_fooling_table(&self) {
        let interim = match self.interim.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        if interim.is_empty() {
            return;
        }
        self.bar
            .println("Interim fooling results:".bold().to_string());
        self.bar.println(
            "| Model                    | Times Fooled Others | Times Got Fooled | Success Rate |",
        );
        self.bar.println(
            "|--------------------------|--------------------:|-----------------:|-------------:|",
        );
        for (model, stats) in interim.iter() {
            let rate = if stats.got_fooled > 0 {
                stats.fooled_others as f64 / stats.got_fooled as f64 * 100.0
            } else {
                0.0
            };
            self.bar.println(format!(
                "| {:<24} | {:>19} | {:>16} | {:>11.1}% |",
                model.to_string(),
                stats.fooled_others,
                stats.got_fooled,
                rate
            ));
        }
    }

    /// Finish the bar, leaving the terminal clean for the summary
    pub fn finish(&self) {
        self.bar
            .finish_with_message("all calls complete".green().to_string());
    }
}

impl TournamentProgress for ConsoleProgress {
    fn on_round_start(&self, prompt: &StoryPrompt) {
        let mut counters = match self.counters.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        // Log the full prompt text once so a session transcript shows
        // what the models were actually asked.
        if !counters.first_prompt_logged {
            counters.first_prompt_logged = true;
            self.bar
                .println(format!("First story writing prompt:\n{}\n", prompt.text));
        }
    }

    fn on_call_complete(&self, model: &Model, kind: CallKind, success: bool) {
        let mut counters = match self.counters.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        counters.total_calls += 1;
        if kind == CallKind::Continuation {
            *counters.continuation_calls.entry(model.clone()).or_default() += 1;
        }
        self.bar.inc(1);
        let status = if success {
            format!("{} {}", "v".green(), model)
        } else {
            format!("{} {}", "x".red(), model)
        };
        self.bar.set_message(status);

        if counters.total_calls % STATUS_EVERY == 0 {
            self.print_delimiter_status(&counters);
            drop(counters);
            self.print_fooling_table();
        }
    }

    fn on_missing_delimiter(&self, model: &Model) {
        if let Ok(mut counters) = self.counters.lock() {
            *counters.missing_delimiters.entry(model.clone()).or_default() += 1;
        }
    }

    fn on_guess(&self, judge: &Model, _original: &Model, outcome: &GuessOutcome) {
        let mut interim = match self.interim.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        match outcome {
            GuessOutcome::Correct { .. } => {
                interim.entry(judge.clone()).or_default();
            }
            GuessOutcome::Fooled { by, .. } => {
                interim.entry(by.clone()).or_default().fooled_others += 1;
                interim.entry(judge.clone()).or_default().got_fooled += 1;
            }
            GuessOutcome::OutOfRange { .. } => {}
        }
    }

    fn on_round_complete(&self, _prompt: &StoryPrompt) {
        self.bar.set_message("round complete".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interim_attribution_from_outcomes() {
        let progress = ConsoleProgress::new(10);
        let judge = Model::Claude3Haiku;
        let fooler = Model::Claude3Opus;

        progress.on_guess(
            &judge,
            &Model::Claude3Sonnet,
            &GuessOutcome::Fooled {
                by: fooler.clone(),
                rank: 2,
            },
        );
        progress.on_guess(&judge, &Model::Claude3Sonnet, &GuessOutcome::Correct { rank: 1 });

        let interim = progress.interim.lock().unwrap();
        assert_eq!(interim[&fooler].fooled_others, 1);
        assert_eq!(interim[&judge].got_fooled, 1);
        assert_eq!(interim[&judge].fooled_others, 0);
    }

    #[test]
    fn test_call_counters() {
        let progress = ConsoleProgress::new(10);
        let model = Model::Claude3Haiku;
        progress.on_call_complete(&model, CallKind::Original, true);
        progress.on_call_complete(&model, CallKind::Continuation, true);
        progress.on_missing_delimiter(&model);

        let counters = progress.counters.lock().unwrap();
        assert_eq!(counters.total_calls, 2);
        assert_eq!(counters.continuation_calls[&model], 1);
        assert_eq!(counters.missing_delimiters[&model], 1);
    }
}
