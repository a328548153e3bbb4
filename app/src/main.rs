#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod command;

use command::{
    CleanInput, CleanStrategy, CommandStrategy, ExtractInput, ExtractStrategy, MergeInput,
    MergeStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "ukhan")]
#[command(about = "riddle corpus extraction toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remap legacy-font page text to Unicode
    Extract {
        /// Input text file, pages separated by form feed
        #[arg(short, long)]
        input: PathBuf,

        /// Output text file with page markers
        #[arg(short, long)]
        output: PathBuf,

        /// Glyph mapping table (JSON)
        #[arg(short = 'm', long)]
        font_map: PathBuf,

        /// Source font name in the mapping table
        #[arg(short, long, default_value = "Preeti")]
        font: String,
    },
    /// Clean extracted text into structured riddle records
    Clean {
        /// Input text file (from extraction)
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Merge record files, deduplicating by riddle text
    Merge {
        /// Input JSON files to merge
        #[arg(short, long, num_args = 1.., required = true)]
        inputs: Vec<PathBuf>,

        /// Output JSON file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            font_map,
            font,
        } => ExtractStrategy.execute(ExtractInput {
            input,
            output,
            font_map,
            font,
        }),
        Commands::Clean { input, output } => CleanStrategy.execute(CleanInput { input, output }),
        Commands::Merge { inputs, output } => MergeStrategy.execute(MergeInput { inputs, output }),
        Commands::Version => VersionStrategy.execute(()),
    }
}
