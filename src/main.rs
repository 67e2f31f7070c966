use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use resume_score::config::Config;
use resume_score::grammar;
use resume_score::output::{json, terminal};

/// Score a resume against a job description.
///
/// Reads plain UTF-8 text files. Convert PDFs or Word documents to text
/// before scoring.
#[derive(Parser)]
#[command(name = "resume-score", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a resume against a job description
    Score {
        /// Plain-text resume
        resume: PathBuf,

        /// Plain-text job description
        job: PathBuf,

        /// Print the report as JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },

    /// List the most frequent keywords in a document
    Keywords {
        /// Plain-text document
        file: PathBuf,

        /// How many keywords to show (default: 30)
        #[arg(long, default_value = "30")]
        top: usize,
    },

    /// Check a resume for grammar and style issues only
    Lint {
        /// Plain-text resume
        file: PathBuf,

        /// Print the report as JSON instead of the terminal view
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resume_score=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Score {
            resume,
            job,
            json: as_json,
        } => {
            let resume_text = read_text(&resume)?;
            let job_text = read_text(&job)?;
            info!(resume = %resume.display(), job = %job.display(), "Scoring resume");

            let report = config.scorer().score(&resume_text, &job_text);

            if as_json {
                let resume_label = resume.display().to_string();
                let job_label = job.display().to_string();
                println!("{}", json::score_json(&resume_label, &job_label, &report)?);
            } else {
                terminal::display_report(&report, &resume_text);
            }
        }

        Commands::Keywords { file, top } => {
            let text = read_text(&file)?;
            let keywords = config.scorer().extractor.extract(&text, top);
            terminal::display_ranked_keywords(&keywords);
        }

        Commands::Lint {
            file,
            json: as_json,
        } => {
            let text = read_text(&file)?;
            let report = grammar::analyze(&text);

            if as_json {
                let label = file.display().to_string();
                println!("{}", json::lint_json(&label, &report)?);
            } else {
                terminal::display_grammar(&report);
            }
        }
    }

    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))
}
