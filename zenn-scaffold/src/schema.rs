//! The article prompt schema.
//!
//! One parameterized builder produces both rigor variants of the scaffold
//! questionnaire. The schema owns no mutable state: it is an ordered list
//! of [`Field`] descriptors handed to a runner, which presents each field
//! strictly in declaration order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::defaults::{compact_date, dated_article_slug, FieldDefault, DEFAULT_EMOJI, DEFAULT_TITLE};
use crate::error::{Result, SchemaError};
use crate::field::{Field, FieldKind};
use crate::validate::{emoji_single, require_nonempty, require_title, slug_strict};

/// How rigorously the schema validates input.
///
/// Both variants share one builder; they differ in field set and in how
/// hard the slug check is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rigor {
    /// Slug and publication toggle only; the slug merely has to be
    /// non-empty.
    Permissive,
    /// The full five-field questionnaire with pattern-checked slug.
    Strict,
}

impl std::fmt::Display for Rigor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rigor::Permissive => write!(f, "permissive"),
            Rigor::Strict => write!(f, "strict"),
        }
    }
}

/// An ordered sequence of field descriptors for one questionnaire.
#[derive(Debug, Clone)]
pub struct Schema {
    rigor: Rigor,
    fields: Vec<Field>,
}

impl Schema {
    /// Build a schema from an explicit field list.
    pub fn new(rigor: Rigor, fields: Vec<Field>) -> Self {
        Self { rigor, fields }
    }

    /// Build the article questionnaire at the given rigor.
    pub fn article(rigor: Rigor) -> Self {
        let mut fields = Vec::new();

        match rigor {
            Rigor::Permissive => {
                fields.push(Field {
                    name: "slug".into(),
                    message: "Article slug (used as the URL)".into(),
                    kind: FieldKind::Input {
                        validator: Some(require_nonempty),
                        default: Some(FieldDefault::FromDate(compact_date)),
                    },
                });
            }
            Rigor::Strict => {
                fields.push(Field {
                    name: "slug".into(),
                    message: "Article slug (used as the URL)".into(),
                    kind: FieldKind::Input {
                        validator: Some(slug_strict),
                        default: Some(FieldDefault::FromDate(dated_article_slug)),
                    },
                });
                fields.push(Field {
                    name: "emoji".into(),
                    message: "Emoji shown on the article card".into(),
                    kind: FieldKind::Input {
                        validator: Some(emoji_single),
                        default: Some(FieldDefault::Literal(DEFAULT_EMOJI)),
                    },
                });
                fields.push(Field {
                    name: "type".into(),
                    message: "Article type".into(),
                    kind: FieldKind::Select {
                        choices: vec!["tech".into(), "idea".into()],
                        default: Some("tech".into()),
                    },
                });
                fields.push(Field {
                    name: "title".into(),
                    message: "Article title".into(),
                    kind: FieldKind::Input {
                        validator: Some(require_title),
                        default: Some(FieldDefault::Literal(DEFAULT_TITLE)),
                    },
                });
            }
        }

        // Both variants close with the publication toggle.
        fields.push(Field {
            name: "publication_name".into(),
            message: "Attach this article to the publication? (can be changed later)".into(),
            kind: FieldKind::Toggle { default: true },
        });

        Self { rigor, fields }
    }

    /// The rigor this schema was built at.
    pub fn rigor(&self) -> Rigor {
        self.rigor
    }

    /// All fields, in presentation order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// One-time startup check for schema configuration mistakes: duplicate
    /// field names, empty choice lists, and select defaults outside the
    /// choice set.
    pub fn verify(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateFieldName {
                    name: field.name.clone(),
                });
            }
            if let FieldKind::Select { choices, default } = &field.kind {
                if choices.is_empty() {
                    return Err(SchemaError::EmptyChoices {
                        field: field.name.clone(),
                    });
                }
                if let Some(default) = default {
                    if !choices.contains(default) {
                        return Err(SchemaError::DefaultNotInChoices {
                            field: field.name.clone(),
                            default: default.clone(),
                        });
                    }
                }
            }
        }
        debug!(rigor = %self.rigor, fields = self.fields.len(), "schema verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    #[test]
    fn permissive_schema_fields_in_order() {
        let schema = Schema::article(Rigor::Permissive);
        let names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["slug", "publication_name"]);
    }

    #[test]
    fn strict_schema_fields_in_order() {
        let schema = Schema::article(Rigor::Strict);
        let names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["slug", "emoji", "type", "title", "publication_name"]);
    }

    #[test]
    fn both_schemas_verify() {
        Schema::article(Rigor::Permissive).verify().unwrap();
        Schema::article(Rigor::Strict).verify().unwrap();
    }

    #[test]
    fn permissive_slug_default_is_compact_date() {
        let schema = Schema::article(Rigor::Permissive);
        let FieldKind::Input {
            default: Some(default),
            ..
        } = &schema.field("slug").unwrap().kind
        else {
            panic!("expected input field with a default");
        };
        assert_eq!(default.resolve(fixed_date()), "20240229");
    }

    #[test]
    fn strict_slug_default_is_dated_article_slug() {
        let schema = Schema::article(Rigor::Strict);
        let FieldKind::Input {
            default: Some(default),
            ..
        } = &schema.field("slug").unwrap().kind
        else {
            panic!("expected input field with a default");
        };
        assert_eq!(default.resolve(fixed_date()), "article-2024-02-29");
    }

    #[test]
    fn strict_slug_default_passes_its_own_validator() {
        let schema = Schema::article(Rigor::Strict);
        let slug = schema.field("slug").unwrap();
        let FieldKind::Input {
            default: Some(default),
            ..
        } = &slug.kind
        else {
            panic!("expected input field with a default");
        };
        assert!(slug.validate(&default.resolve(fixed_date())).is_accept());
    }

    #[test]
    fn type_field_is_a_closed_select_with_member_default() {
        let schema = Schema::article(Rigor::Strict);
        let FieldKind::Select { choices, default } = &schema.field("type").unwrap().kind else {
            panic!("expected select field");
        };
        assert_eq!(choices, &["tech".to_string(), "idea".to_string()]);
        assert!(choices.contains(default.as_ref().unwrap()));
    }

    #[test]
    fn publication_toggle_defaults_true_in_both_variants() {
        for rigor in [Rigor::Permissive, Rigor::Strict] {
            let schema = Schema::article(rigor);
            let field = schema.field("publication_name").unwrap();
            assert_eq!(field.kind, FieldKind::Toggle { default: true });
            // Declaration order is presentation order; the toggle closes it.
            assert_eq!(schema.fields().last().unwrap().name, "publication_name");
        }
    }

    #[test]
    fn verify_rejects_duplicate_names() {
        let mut schema = Schema::article(Rigor::Permissive);
        let dup = schema.fields[0].clone();
        schema.fields.push(dup);
        assert!(matches!(
            schema.verify(),
            Err(SchemaError::DuplicateFieldName { name }) if name == "slug"
        ));
    }

    #[test]
    fn verify_rejects_select_default_outside_choices() {
        let mut schema = Schema::article(Rigor::Strict);
        let field = schema.fields.iter_mut().find(|f| f.name == "type").unwrap();
        field.kind = FieldKind::Select {
            choices: vec!["tech".into(), "idea".into()],
            default: Some("essay".into()),
        };
        assert!(matches!(
            schema.verify(),
            Err(SchemaError::DefaultNotInChoices { field, default })
                if field == "type" && default == "essay"
        ));
    }

    #[test]
    fn verify_rejects_empty_choice_list() {
        let mut schema = Schema::article(Rigor::Strict);
        let field = schema.fields.iter_mut().find(|f| f.name == "type").unwrap();
        field.kind = FieldKind::Select {
            choices: vec![],
            default: None,
        };
        assert!(matches!(
            schema.verify(),
            Err(SchemaError::EmptyChoices { field }) if field == "type"
        ));
    }
}
