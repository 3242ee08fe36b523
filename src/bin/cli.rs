use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use title_match::{
    calculate_confidence, extract_keywords, generate_sort_title, is_text_answer_correct,
    normalize_title, CanonicalRecord, ImportMatcher, ImportRequest, ImportRow, MatchConfig,
};

#[derive(Parser)]
#[command(name = "title-match")]
#[command(version = title_match::VERSION)]
#[command(about = "Catalogue title matching and quiz answer checking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file (thresholds, answer options)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a title for matching
    Normalize {
        title: String,
    },

    /// Print the sort title (leading article removed)
    SortTitle {
        title: String,
    },

    /// Generate search keywords for a record (JSON file, or stdin when omitted)
    Keywords {
        file: Option<PathBuf>,
    },

    /// Score an import row against one candidate
    Score {
        /// Title from the import row
        title: String,

        /// Candidate catalogue title
        candidate: String,

        /// Release year from the import row
        #[arg(short, long)]
        year: Option<String>,

        /// Candidate catalogue year
        #[arg(long)]
        candidate_year: Option<String>,
    },

    /// Check a quiz answer
    Answer {
        /// Submitted answer
        user: String,

        /// Correct answer
        correct: Option<String>,

        /// Acceptable alternative (repeatable)
        #[arg(short, long = "alt")]
        alternatives: Vec<String>,

        /// Disable partial matching
        #[arg(long)]
        exact: bool,

        /// Minimum match percentage for partial matches
        #[arg(short, long)]
        min_match: Option<f64>,
    },

    /// Match import rows against their candidates (JSON array of {row, candidates})
    Import {
        file: PathBuf,

        /// Catalogue id already in the collection (repeatable)
        #[arg(long = "owned")]
        owned: Vec<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "title_match=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    tracing::debug!("Config: {}", config);

    match cli.command {
        Commands::Normalize { title } => {
            println!("{}", normalize_title(&title));
        }

        Commands::SortTitle { title } => {
            println!("{}", generate_sort_title(&title));
        }

        Commands::Keywords { file } => {
            let input = read_input(file.as_deref())?;
            let record = CanonicalRecord::from_json(&input).context("parsing record")?;
            for keyword in extract_keywords(&record) {
                println!("{}", keyword);
            }
        }

        Commands::Score { title, candidate, year, candidate_year } => {
            let row = ImportRow { title, release_year: year };
            let record = CanonicalRecord {
                title: candidate,
                year: candidate_year,
                ..Default::default()
            };
            println!("{}", calculate_confidence(&row, &record));
        }

        Commands::Answer { user, correct, alternatives, exact, min_match } => {
            let mut options = config.answer.clone();
            if !alternatives.is_empty() {
                options.acceptable_alternatives = alternatives;
            }
            if exact {
                options.allow_partial_match = false;
            }
            if let Some(pct) = min_match {
                options.min_match_percentage = pct;
            }

            let correct_flag = is_text_answer_correct(&user, correct.as_deref(), &options);
            println!("{}", if correct_flag { "correct" } else { "incorrect" });
            if !correct_flag {
                std::process::exit(1);
            }
        }

        Commands::Import { file, owned, json } => {
            let input = read_input(Some(&file))?;
            let requests: Vec<ImportRequest> =
                serde_json::from_str(&input).context("parsing import requests")?;

            let matcher = ImportMatcher::new(config)?.with_owned_ids(owned);
            let matches = matcher.match_batch(&requests);

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                for m in &matches {
                    println!("{}", m.display());
                }

                let summary = ImportMatcher::summarize(&matches);
                println!(
                    "\n{} rows: {} auto-matched, {} to review, {} duplicates, {} not found",
                    summary.total,
                    summary.auto_matched,
                    summary.review,
                    summary.duplicates,
                    summary.not_found
                );
            }
        }
    }

    Ok(())
}
