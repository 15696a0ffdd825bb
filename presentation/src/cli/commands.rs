//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for chameleon
#[derive(Parser, Debug)]
#[command(name = "chameleon")]
#[command(
    author,
    version,
    about = "Style-imitation tournament - which model best mimics its peers?"
)]
#[command(long_about = r#"
Chameleon runs a style-imitation tournament between LLMs.

For each sampled prompt, every model writes an original story. Every other
model then continues the first half of that story, trying to pass as the
original author, and every model acts as judge, ranking the shuffled
continuations by likelihood of being authentic. The harness scores who
fooled whom and produces a leaderboard.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./chameleon.toml    Project-level config
3. ~/.config/chameleon/config.toml   Global config

Example:
  chameleon -n 2
  chameleon -m claude-3-haiku-20240307 -m claude-3-opus-20240229 -n 5
  chameleon --capacity 3 -o results/run1.json
"#)]
pub struct Cli {
    /// Models competing in the tournament (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Number of prompts to sample (default: the whole corpus)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub num_prompts: Option<usize>,

    /// Maximum concurrently running tournament rounds
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,

    /// Path for the JSON results file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output and the final summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
