use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::filters::YearSelection;
use crate::parsers::{extract_conversations, load_document, titles};
use crate::persona::MAX_PERSONA_CONVERSATIONS;
use crate::pipeline::{AnalysisOptions, analyze};
use crate::report::render_summary;
use crate::utils::read_export_file;

const DEFAULT_TITLE_LIMIT: usize = 50;

#[derive(Parser)]
#[command(name = "chat-wrapped")]
#[command(version = "0.1.0")]
#[command(about = "Yearly statistics from a chat history export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize chat habits for one year (JSON or ZIP export)
    Analyze {
        /// Path to the export file
        file: PathBuf,
        #[command(flatten)]
        year: YearArgs,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// List conversation titles in export order
    Titles {
        file: PathBuf,
        #[arg(long, default_value_t = DEFAULT_TITLE_LIMIT)]
        limit: usize,
    },
    /// Print the persona classifier payload as JSON
    PersonaPayload {
        file: PathBuf,
        #[command(flatten)]
        year: YearArgs,
        /// Conversations to include (capped at 20)
        #[arg(long, default_value_t = MAX_PERSONA_CONVERSATIONS)]
        limit: usize,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct YearArgs {
    /// Calendar year to analyse (UTC), defaults to the current year
    #[arg(long, conflicts_with = "all_years")]
    pub year: Option<i32>,
    /// Analyse every year in the export
    #[arg(long)]
    pub all_years: bool,
}

impl YearArgs {
    pub fn selection(self) -> YearSelection {
        match (self.year, self.all_years) {
            (_, true) => YearSelection::AllYears,
            (Some(year), false) => YearSelection::Year(year),
            (None, false) => YearSelection::Current,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Analyze { file, year, json }) => {
            show_analysis(file, year.selection(), *json)?;
        }
        Some(Commands::Titles { file, limit }) => {
            show_titles(file, *limit)?;
        }
        Some(Commands::PersonaPayload { file, year, limit }) => {
            show_persona_payload(file, year.selection(), *limit)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn show_analysis(file: &Path, year: YearSelection, json: bool) -> Result<()> {
    let bytes = read_export_file(file)?;
    let options = AnalysisOptions { year, ..AnalysisOptions::default() };
    let analysis = analyze(&bytes, &options)
        .with_context(|| format!("Failed to load export: {}", file.display()))?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&analysis).context("Failed to serialize analysis")?;
        println!("{}", rendered);
    } else {
        print!("{}", render_summary(&analysis));
    }

    Ok(())
}

fn show_titles(file: &Path, limit: usize) -> Result<()> {
    let bytes = read_export_file(file)?;
    let document = load_document(&bytes)
        .with_context(|| format!("Failed to load export: {}", file.display()))?;
    let conversations = extract_conversations(&document);

    let titles = titles(&conversations, limit);
    if titles.is_empty() {
        println!("No titles found; counts still computed from structure.");
    }
    for title in titles {
        println!("• {}", title);
    }

    Ok(())
}

fn show_persona_payload(file: &Path, year: YearSelection, limit: usize) -> Result<()> {
    let bytes = read_export_file(file)?;
    let options = AnalysisOptions { year, persona_limit: limit };
    let analysis = analyze(&bytes, &options)
        .with_context(|| format!("Failed to load export: {}", file.display()))?;

    let rendered = serde_json::to_string_pretty(&analysis.persona_request)
        .context("Failed to serialize persona payload")?;
    println!("{}", rendered);

    Ok(())
}
