//! Interactive questionnaire runner.
//!
//! Walks a schema's fields strictly in declaration order. Values supplied
//! up front (CLI flags) are validated and recorded without prompting; in
//! non-interactive mode every remaining field resolves from its default.
//! Interactively, a rejected input re-displays the same field with the
//! rejection message until it passes or the retry budget runs out.

use std::io::{self, IsTerminal};

use chrono::{NaiveDate, Utc};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input};
use tracing::debug;
use zenn_scaffold::{Answer, AnswerRecord, Field, FieldKind, Schema, Validation};

use crate::error::{Result, ScaffoldError};

/// Default retry budget per field.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Resolves a schema into a completed [`AnswerRecord`].
pub struct PromptRunner {
    /// Whether to skip prompting (explicit request or non-TTY stdin).
    non_interactive: bool,
    /// Maximum prompt attempts per field before giving up.
    max_attempts: u32,
    /// Calendar date injected into date-derived defaults.
    today: NaiveDate,
}

impl PromptRunner {
    /// Create a runner. Prompting is disabled when requested or when stdin
    /// is not a terminal.
    pub fn new(non_interactive: bool) -> Self {
        Self {
            non_interactive: non_interactive || !io::stdin().is_terminal(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            today: Utc::now().date_naive(),
        }
    }

    /// Override the retry budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Pin the date used for date-derived defaults.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Resolve every field, in declaration order, into an answer record.
    ///
    /// `provided` holds values supplied ahead of time; they are validated
    /// exactly like typed input, but a rejection is an error rather than a
    /// re-prompt since there is nobody to ask again.
    pub fn resolve(&self, schema: &Schema, provided: &AnswerRecord) -> Result<AnswerRecord> {
        let mut answers = AnswerRecord::new();

        for field in schema.fields() {
            let answer = match provided.get(&field.name) {
                Some(value) => self.check_provided(field, value)?,
                None if self.non_interactive => self.resolve_default(field)?,
                None => self.prompt_field(field)?,
            };
            answers.record(field.name.clone(), answer);
        }

        debug!(fields = answers.len(), "questionnaire resolved");
        Ok(answers)
    }

    /// Validate a value supplied ahead of prompting.
    fn check_provided(&self, field: &Field, value: &Answer) -> Result<Answer> {
        match (&field.kind, value) {
            (FieldKind::Input { .. }, Answer::Text(text)) => match field.validate(text) {
                Validation::Accept => Ok(value.clone()),
                Validation::Reject { message } => Err(ScaffoldError::Rejected {
                    field: field.name.clone(),
                    message: message.unwrap_or_else(|| "invalid input".into()),
                }),
            },
            (FieldKind::Select { choices, .. }, Answer::Text(text)) => {
                // Membership comes from the choice list, the way the select
                // control itself would constrain it.
                if choices.iter().any(|choice| choice == text) {
                    Ok(value.clone())
                } else {
                    Err(ScaffoldError::InvalidChoice {
                        field: field.name.clone(),
                        value: text.clone(),
                        choices: choices.clone(),
                    })
                }
            }
            (FieldKind::Toggle { .. }, Answer::Toggle(_)) => Ok(value.clone()),
            (FieldKind::Toggle { .. }, Answer::Text(_)) => Err(ScaffoldError::TypeMismatch {
                field: field.name.clone(),
                expected: "a toggle",
                actual: "text",
            }),
            (_, Answer::Toggle(_)) => Err(ScaffoldError::TypeMismatch {
                field: field.name.clone(),
                expected: "text",
                actual: "a toggle",
            }),
        }
    }

    /// Resolve a field from its default without prompting.
    fn resolve_default(&self, field: &Field) -> Result<Answer> {
        match &field.kind {
            FieldKind::Input { default, .. } => {
                let default = default.as_ref().ok_or_else(|| ScaffoldError::MissingInput {
                    field: field.name.clone(),
                })?;
                let value = default.resolve(self.today);
                match field.validate(&value) {
                    Validation::Accept => Ok(Answer::Text(value)),
                    Validation::Reject { message } => Err(ScaffoldError::Rejected {
                        field: field.name.clone(),
                        message: message.unwrap_or_else(|| "invalid input".into()),
                    }),
                }
            }
            FieldKind::Toggle { default } => Ok(Answer::Toggle(*default)),
            FieldKind::Select { default, .. } => {
                let default = default.as_ref().ok_or_else(|| ScaffoldError::MissingInput {
                    field: field.name.clone(),
                })?;
                Ok(Answer::Text(default.clone()))
            }
        }
    }

    /// Present one field interactively.
    fn prompt_field(&self, field: &Field) -> Result<Answer> {
        match &field.kind {
            FieldKind::Input { default, .. } => {
                let default = default.as_ref().map(|d| d.resolve(self.today));
                self.prompt_input(field, default).map(Answer::Text)
            }
            FieldKind::Toggle { default } => self.prompt_toggle(field, *default).map(Answer::Toggle),
            FieldKind::Select { choices, default } => self
                .prompt_select(field, choices, default.as_deref())
                .map(Answer::Text),
        }
    }

    /// Prompt for text until the validator accepts or attempts run out.
    fn prompt_input(&self, field: &Field, default: Option<String>) -> Result<String> {
        let theme = ColorfulTheme::default();

        for attempt in 1..=self.max_attempts {
            let mut input = Input::<String>::with_theme(&theme).with_prompt(&field.message);
            input = match &default {
                Some(value) => input.default(value.clone()),
                // Let the validator be the one to reject empty input.
                None => input.allow_empty(true),
            };
            let raw = input.interact()?;

            match field.validate(&raw) {
                Validation::Accept => return Ok(raw),
                Validation::Reject { message } => {
                    if let Some(message) = &message {
                        println!("❌ {message}");
                    }
                    if attempt < self.max_attempts {
                        println!("Please try again ({}/{}):", attempt, self.max_attempts);
                    }
                }
            }
        }

        Err(ScaffoldError::MaxAttemptsExceeded {
            field: field.name.clone(),
            attempts: self.max_attempts,
        })
    }

    /// Prompt for a yes/no toggle. A toggle has no invalid state.
    fn prompt_toggle(&self, field: &Field, default: bool) -> Result<bool> {
        let theme = ColorfulTheme::default();
        Ok(Confirm::with_theme(&theme)
            .with_prompt(&field.message)
            .default(default)
            .interact()?)
    }

    /// Prompt for a single selection; the control itself guarantees the
    /// result is a member of the choice list.
    fn prompt_select(
        &self,
        field: &Field,
        choices: &[String],
        default: Option<&str>,
    ) -> Result<String> {
        let theme = ColorfulTheme::default();
        let mut select = FuzzySelect::with_theme(&theme)
            .with_prompt(&field.message)
            .items(choices);
        if let Some(default) = default {
            if let Some(index) = choices.iter().position(|choice| choice == default) {
                select = select.default(index);
            }
        }
        let selection = select.interact()?;
        Ok(choices[selection].clone())
    }
}
