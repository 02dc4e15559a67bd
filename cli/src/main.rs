use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use search_cli::{build_server, load_documents, render_pages, replay};
use search_core::{DocumentStatus, SearchConfig, SearchServer, MAX_RESULT_DOCUMENT_COUNT, REQUEST_WINDOW};
use tracing_subscriber::{fmt, EnvFilter};

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank documents against plus/minus word queries with TF-IDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IndexArgs {
    /// Input path (JSON/JSONL file or directory)
    #[arg(long)]
    input: PathBuf,
    /// Whitespace-separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
    /// Maximum number of ranked results
    #[arg(long, default_value_t = MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
}

impl IndexArgs {
    fn build(&self) -> Result<SearchServer> {
        let docs = load_documents(&self.input)?;
        build_server(&self.stop_words, SearchConfig::default().with_max_result_count(self.max_results), &docs)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top documents for a query
    Query {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(long)]
        query: String,
        /// Only documents with this status (active, irrelevant, banned, removed)
        #[arg(long, default_value = "active")]
        status: DocumentStatus,
        #[arg(long, default_value_t = 2)]
        page_size: usize,
        /// Print results as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show which query words a document matches
    Match {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(long)]
        query: String,
        #[arg(long)]
        id: i32,
    },
    /// Replay a query log (one query per line) and count empty results
    Replay {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(long)]
        queries: PathBuf,
        #[arg(long, default_value_t = REQUEST_WINDOW)]
        window: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { index, query, status, page_size, json } => {
            let server = index.build()?;
            let results = server.find_top_documents_by_status(&query, status)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", render_pages(&results, page_size));
            }
        }
        Commands::Match { index, query, id } => {
            let server = index.build()?;
            let (words, status) = server.match_document(&query, id)?;
            println!("{{ document_id = {id}, status = {status:?}, words = [{}] }}", words.join(", "));
        }
        Commands::Replay { index, queries, window } => {
            let server = index.build()?;
            let log = std::fs::read_to_string(&queries).with_context(|| format!("reading {}", queries.display()))?;
            let empty = replay(&server, log.lines(), window)?;
            println!("Total empty requests: {empty}");
        }
    }
    Ok(())
}
