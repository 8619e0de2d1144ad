mod error;
mod index;
mod output;
mod rmq;
mod text;
mod tree;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use index::{Strategy, SuffixTree};
use output::{CountReport, LcpReport, OccurrencesReport, RepeatsReport};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sti")]
#[command(about = "In-memory suffix-tree text index for fast substring queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// File containing the text to index
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Literal text to index (alternative to --file)
    #[arg(short, long, global = true)]
    text: Option<String>,

    /// Construction strategy: naive or ukkonen
    #[arg(short, long, global = true, default_value = "ukkonen")]
    strategy: Strategy,

    /// Emit machine-readable JSON instead of colored output
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every position where the pattern occurs
    Occurrences {
        /// Pattern to look up
        pattern: String,
    },
    /// Count occurrences without enumerating them
    Count {
        /// Pattern to look up
        pattern: String,
    },
    /// Longest substring occurring at least N times
    Repeats {
        /// Minimum number of occurrences
        #[arg(short, long, default_value_t = 2)]
        min: usize,
    },
    /// Longest common prefix of the suffixes starting at I and J
    Lcp { i: usize, j: usize },
    /// Dump the tree structure (diagnostics)
    Dump,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let raw = load_text(&cli)?;
    let tree = SuffixTree::build(&raw, cli.strategy);
    let color = !cli.no_color;

    match cli.command {
        Commands::Occurrences { pattern } => {
            let mut positions = tree.occurrences(&pattern)?;
            positions.sort_unstable();
            let report = OccurrencesReport {
                count: positions.len(),
                pattern,
                positions,
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_occurrences(&report, color)?;
            }
        }
        Commands::Count { pattern } => {
            let count = tree.occurrences_count(&pattern)?;
            let report = CountReport { pattern, count };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_count(&report, color)?;
            }
        }
        Commands::Repeats { min } => {
            let mut positions = tree.longest_repeated_substring(min)?;
            positions.sort_unstable();
            let substring = shared_prefix(&raw, &positions);
            let report = RepeatsReport {
                min_repetitions: min,
                substring,
                positions,
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_repeats(&report, color)?;
            }
        }
        Commands::Lcp { i, j } => {
            let length = tree.longest_common_prefix(i, j)?;
            let prefix: String = raw.chars().skip(i).take(length).collect();
            let report = LcpReport { i, j, length, prefix };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_lcp(&report, color)?;
            }
        }
        Commands::Dump => {
            println!("{}", tree);
        }
    }

    Ok(())
}

fn load_text(cli: &Cli) -> Result<String> {
    match (&cli.text, &cli.file) {
        (Some(text), None) => Ok(text.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        (Some(_), Some(_)) => anyhow::bail!("--text and --file are mutually exclusive"),
        (None, None) => anyhow::bail!("provide the text to index via --file or --text"),
    }
}

/// Literal common prefix of the suffixes starting at `positions`.
///
/// The positions returned by a repeats query are exactly the leaves of
/// the deepest qualifying node, so their shared prefix is the repeated
/// substring itself.
fn shared_prefix(raw: &str, positions: &[usize]) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let Some(&first) = positions.first() else {
        return String::new();
    };
    let mut length = chars.len() - first;
    for &position in &positions[1..] {
        let mut common = 0;
        while first + common < chars.len()
            && position + common < chars.len()
            && chars[first + common] == chars[position + common]
        {
            common += 1;
        }
        length = length.min(common);
    }
    chars[first..first + length].iter().collect()
}
