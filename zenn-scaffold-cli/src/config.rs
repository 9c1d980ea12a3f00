//! Scaffold configuration.
//!
//! Read from `zenn-scaffold.toml` in the working directory, then overlaid
//! with `ZENN_SCAFFOLD_*` environment variables. Every key has a default,
//! so a missing file is not an error.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zenn_scaffold::Rigor;

use crate::error::Result;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "zenn-scaffold.toml";

/// Prefix for environment variable overrides, e.g.
/// `ZENN_SCAFFOLD_ARTICLES_DIR`.
pub const ENV_PREFIX: &str = "ZENN_SCAFFOLD_";

/// Configuration for the scaffolding CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Directory new article files are written into.
    pub articles_dir: PathBuf,
    /// Publication slug recorded in the frontmatter when the user answers
    /// the publication toggle with yes.
    pub publication: Option<String>,
    /// Questionnaire rigor used when the command line does not choose one.
    pub rigor: Rigor,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            articles_dir: PathBuf::from("articles"),
            publication: None,
            rigor: Rigor::Strict,
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from `zenn-scaffold.toml` and the environment.
    pub fn load() -> Result<Self> {
        Self::from_file(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific TOML file and the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        debug!(
            articles_dir = %config.articles_dir.display(),
            rigor = %config.rigor,
            "configuration loaded"
        );
        Ok(config)
    }
}
