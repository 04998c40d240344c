//! # CLI Argument Definitions

use annc_kernel::document::DocumentKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "annc")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Checks and converts station announcement programmes and packs")]
pub struct Cli {
    /// Configuration file (defaults to `annc.*` in the working directory, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that documents conform to the programme or pack contract
    Check {
        /// Document kind: 'programmes' or 'packs'
        kind: DocumentKind,
        /// Files to check (.json, or .bin/.postcard for binary)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Convert a document between JSON and postcard, chosen by file extension
    Transcode {
        /// Document kind: 'programmes' or 'packs'
        kind: DocumentKind,
        input: PathBuf,
        output: PathBuf,
    },
    /// Print the serialized keys of a document kind in order
    Fields {
        /// Document kind: 'programmes' (default) or 'packs'
        #[arg(default_value = "programmes")]
        kind: DocumentKind,
    },
}
