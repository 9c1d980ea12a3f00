//! Default values for prompt fields.
//!
//! Date-derived defaults take the calendar date as a parameter instead of
//! reading the clock themselves, so resolution is deterministic under test.
//! The runner supplies the current UTC date at prompt time.

use chrono::NaiveDate;

/// Default emoji for a new article.
pub const DEFAULT_EMOJI: &str = "📝";

/// Placeholder title for an article whose title is not yet decided.
pub const DEFAULT_TITLE: &str = "Untitled";

/// A text field's default: either a fixed string or a function of the
/// current calendar date, evaluated when the prompt is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Literal(&'static str),
    FromDate(fn(NaiveDate) -> String),
}

impl FieldDefault {
    /// Resolve the default against the given date.
    pub fn resolve(&self, today: NaiveDate) -> String {
        match self {
            FieldDefault::Literal(value) => (*value).to_string(),
            FieldDefault::FromDate(provider) => provider(today),
        }
    }
}

/// The date as `YYYYMMDD`: an ISO date with the hyphens stripped.
pub fn compact_date(today: NaiveDate) -> String {
    today.format("%Y%m%d").to_string()
}

/// `article-` followed by the ISO date, e.g. `article-2024-02-29`.
pub fn dated_article_slug(today: NaiveDate) -> String {
    format!("article-{}", today.format("%Y-%m-%d"))
}
