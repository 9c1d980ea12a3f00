//! The `new` command: resolve the questionnaire and write the article.

use serde_json::json;
use tracing::debug;
use zenn_scaffold::{Answer, AnswerRecord, Rigor, Schema};

use crate::cli::{NewArgs, RigorArg};
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::prompt::PromptRunner;
use crate::render::{render_article, write_article, ArticleFrontmatter};

impl From<RigorArg> for Rigor {
    fn from(arg: RigorArg) -> Self {
        match arg {
            RigorArg::Permissive => Rigor::Permissive,
            RigorArg::Strict => Rigor::Strict,
        }
    }
}

/// Run the new command.
pub fn run_new(args: NewArgs) -> Result<()> {
    let mut config = ScaffoldConfig::load()?;
    if let Some(dir) = &args.dir {
        config.articles_dir = dir.clone();
    }

    let rigor = args.rigor.map(Rigor::from).unwrap_or(config.rigor);
    let schema = Schema::article(rigor);
    schema.verify()?;
    debug!(%rigor, "questionnaire prepared");

    let provided = provided_answers(&args);
    let runner = PromptRunner::new(args.defaults);
    let answers = runner.resolve(&schema, &provided)?;

    let slug = answers
        .text("slug")
        .ok_or_else(|| ScaffoldError::MissingInput {
            field: "slug".into(),
        })?
        .to_string();

    let frontmatter = ArticleFrontmatter::from_answers(&answers, &config);
    let content = render_article(&frontmatter)?;
    let target = config.articles_dir.join(format!("{slug}.md"));

    if args.dry_run {
        let preview = json!({
            "path": target,
            "answers": answers,
        });
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    let path = write_article(&config, &slug, &content)?;

    println!("Created article '{}':\n", slug);
    println!("  {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Write the article body below the frontmatter");
    println!("  2. Fill in topics");
    println!("  3. Set published to true when it is ready to go out");

    Ok(())
}

/// Collect the values supplied as flags into a partial answer record.
fn provided_answers(args: &NewArgs) -> AnswerRecord {
    let mut provided = AnswerRecord::new();
    if let Some(slug) = &args.slug {
        provided.record("slug", Answer::Text(slug.clone()));
    }
    if let Some(emoji) = &args.emoji {
        provided.record("emoji", Answer::Text(emoji.clone()));
    }
    if let Some(article_type) = &args.article_type {
        provided.record("type", Answer::Text(article_type.clone()));
    }
    if let Some(title) = &args.title {
        provided.record("title", Answer::Text(title.clone()));
    }
    if let Some(attach) = args.publication_override() {
        provided.record("publication_name", Answer::Toggle(attach));
    }
    provided
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> NewArgs {
        NewArgs {
            slug: None,
            emoji: None,
            article_type: None,
            title: None,
            publication: false,
            no_publication: false,
            rigor: None,
            defaults: true,
            dry_run: false,
            dir: None,
        }
    }

    #[test]
    fn provided_answers_only_holds_given_flags() {
        let mut args = bare_args();
        args.slug = Some("my-article-2024".into());
        args.no_publication = true;

        let provided = provided_answers(&args);
        assert_eq!(provided.len(), 2);
        assert_eq!(provided.text("slug"), Some("my-article-2024"));
        assert_eq!(provided.toggle("publication_name"), Some(false));
        assert_eq!(provided.get("title"), None);
    }

    #[test]
    fn no_flags_means_an_empty_record() {
        assert!(provided_answers(&bare_args()).is_empty());
    }

    #[test]
    fn rigor_arg_maps_onto_the_schema_rigor() {
        assert_eq!(Rigor::from(RigorArg::Permissive), Rigor::Permissive);
        assert_eq!(Rigor::from(RigorArg::Strict), Rigor::Strict);
    }
}
