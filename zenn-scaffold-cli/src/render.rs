//! Article file rendering and writing.
//!
//! Turns a completed answer record into a markdown file with YAML
//! frontmatter between `---` fences and an empty body, written to the
//! configured articles directory. An existing file is never overwritten.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;
use zenn_scaffold::{AnswerRecord, DEFAULT_EMOJI, DEFAULT_TITLE};

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};

/// Frontmatter of a scaffolded article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleFrontmatter {
    pub title: String,
    pub emoji: String,
    #[serde(rename = "type")]
    pub article_type: String,
    pub topics: Vec<String>,
    /// New articles always start as unpublished drafts.
    pub published: bool,
    /// The configured publication slug, present only when the user chose
    /// to attach the article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_name: Option<String>,
}

impl ArticleFrontmatter {
    /// Build frontmatter from a completed questionnaire.
    ///
    /// The permissive questionnaire answers fewer fields; the missing ones
    /// fall back to the same defaults the strict questionnaire declares.
    pub fn from_answers(answers: &AnswerRecord, config: &ScaffoldConfig) -> Self {
        let attach = answers.toggle("publication_name").unwrap_or(false);
        Self {
            title: answers.text("title").unwrap_or(DEFAULT_TITLE).to_string(),
            emoji: answers.text("emoji").unwrap_or(DEFAULT_EMOJI).to_string(),
            article_type: answers.text("type").unwrap_or("tech").to_string(),
            topics: Vec::new(),
            published: false,
            publication_name: if attach { config.publication.clone() } else { None },
        }
    }
}

/// Render the article file content: fenced frontmatter, empty body.
pub fn render_article(frontmatter: &ArticleFrontmatter) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(frontmatter)?;
    Ok(format!("---\n{yaml}---\n\n"))
}

/// Write the article under `<articles_dir>/<slug>.md`.
///
/// Refuses to touch a path that already exists.
pub fn write_article(config: &ScaffoldConfig, slug: &str, content: &str) -> Result<PathBuf> {
    let path = config.articles_dir.join(format!("{slug}.md"));
    if path.exists() {
        return Err(ScaffoldError::ArticleExists { path });
    }
    fs::create_dir_all(&config.articles_dir)?;
    fs::write(&path, content)?;
    debug!(path = %path.display(), "article written");
    Ok(path)
}
