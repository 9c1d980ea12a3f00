//! zenn-scaffold CLI - interactive scaffolding for new Zenn articles.
//!
//! The schema (fields, validators, defaults) lives in the `zenn-scaffold`
//! library crate; this crate is the runner around it:
//! - `zenn-scaffold new`: walk the questionnaire (interactively or from
//!   flags/defaults) and write the article file
//! - `zenn-scaffold doctor`: diagnose configuration and setup
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod new;
pub mod prompt;
pub mod render;

pub use cli::{Cli, Commands, NewArgs, RigorArg};
pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use prompt::PromptRunner;
pub use render::{render_article, write_article, ArticleFrontmatter};
