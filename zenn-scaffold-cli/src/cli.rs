//! CLI definition for the zenn-scaffold command-line interface.
//!
//! This module is self-contained — it only depends on `clap` and `std` so
//! the argument surface can be read (and tested) without pulling in the
//! rest of the crate.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Validation rigor selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RigorArg {
    /// Slug and publication toggle only; slug merely has to be non-empty
    Permissive,
    /// Full questionnaire with pattern-checked slug
    Strict,
}

impl std::fmt::Display for RigorArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RigorArg::Permissive => write!(f, "permissive"),
            RigorArg::Strict => write!(f, "strict"),
        }
    }
}

/// zenn-scaffold - interactive scaffolding for new Zenn articles
#[derive(Parser, Debug)]
#[command(name = "zenn-scaffold")]
#[command(version)]
#[command(about = "Scaffold a new Zenn article from an interactive questionnaire")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new article file from the questionnaire
    New(NewArgs),
    /// Diagnose scaffold configuration and setup
    Doctor {
        /// Show detailed output including fix suggestions
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Arguments for the `new` subcommand.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Article slug (skips the slug prompt)
    #[arg(long)]
    pub slug: Option<String>,
    /// Article emoji (skips the emoji prompt)
    #[arg(long)]
    pub emoji: Option<String>,
    /// Article type (skips the type prompt)
    #[arg(long = "type")]
    pub article_type: Option<String>,
    /// Article title (skips the title prompt)
    #[arg(long)]
    pub title: Option<String>,
    /// Attach the article to the publication
    #[arg(long, conflicts_with = "no_publication")]
    pub publication: bool,
    /// Do not attach the article to the publication
    #[arg(long)]
    pub no_publication: bool,
    /// Validation rigor (overrides the configured one)
    #[arg(long, value_enum)]
    pub rigor: Option<RigorArg>,
    /// Accept every default without prompting
    #[arg(short = 'y', long)]
    pub defaults: bool,
    /// Resolve the questionnaire and print it as JSON without writing
    #[arg(long)]
    pub dry_run: bool,
    /// Directory to write the article into (overrides the configured one)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

impl NewArgs {
    /// The publication toggle override, when either flag was given.
    pub fn publication_override(&self) -> Option<bool> {
        if self.publication {
            Some(true)
        } else if self.no_publication {
            Some(false)
        } else {
            None
        }
    }
}
