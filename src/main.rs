//! Lexsight CLI
//!
//! Thin presentation shell over the library: read a PDF, run one request
//! through the assistant, print the Markdown report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexsight::{build_orchestrator, read_pdf_file, Settings};

#[derive(Parser)]
#[command(name = "lexsight", about = "Analyze a legislative PDF with an AI assistant")]
struct Cli {
    /// Path to the PDF document (a law, bill, or legislative report)
    pdf: PathBuf,

    /// What you want to know about it, e.g. "Summarize this law" or
    /// "What does the press say?"
    request: String,

    /// Character budget for the analyzed text (overrides LEXSIGHT_MAX_CHARS)
    #[arg(long)]
    max_chars: Option<usize>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        }
    };
    if let Some(max_chars) = cli.max_chars {
        settings.max_chars = max_chars;
    }

    // An unreadable document is a normal outcome, not an error state.
    let document_text = match read_pdf_file(&cli.pdf) {
        Ok(text) => text,
        Err(e) => {
            println!("Could not read the document: {}", e);
            return ExitCode::from(1);
        }
    };

    let total_chars = document_text.chars().count();
    if total_chars > settings.max_chars {
        println!(
            "Note: the document is long ({} characters); only the first {} will be analyzed.\n",
            total_chars, settings.max_chars
        );
    }

    let orchestrator = build_orchestrator(&settings);
    match orchestrator.run(&document_text, &cli.request).await {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Assistant failed: {}", e);
            ExitCode::from(2)
        }
    }
}
