//! Prompt schema for Zenn article scaffolding
//!
//! `zenn-scaffold` is a schema-only crate: it declares the ordered prompt
//! fields used to scaffold a new article (slug, emoji, article type, title,
//! publication toggle) together with their validators and default values.
//! It performs no I/O and owns no mutable state; a runner (the companion
//! CLI, or anything else) walks the fields in order, re-prompting each one
//! until its validator accepts, and collects the results into an
//! [`AnswerRecord`].
//!
//! # Architecture
//!
//! - **Declarative**: one [`Field`] per prompt; validators are named pure
//!   functions stored on the descriptor
//! - **Two rigors**: [`Schema::article`] builds either the permissive or
//!   the strict questionnaire from one parameterized definition
//! - **Injected time**: date-derived defaults take the calendar date as an
//!   argument, so resolution is deterministic under test
//! - **Verified once**: [`Schema::verify`] catches configuration mistakes
//!   (duplicate names, select defaults outside the choice list) at startup

pub mod answers;
pub mod defaults;
pub mod error;
pub mod field;
pub mod schema;
pub mod validate;

pub use answers::{Answer, AnswerRecord};
pub use defaults::{FieldDefault, DEFAULT_EMOJI, DEFAULT_TITLE};
pub use error::{Result, SchemaError};
pub use field::{Field, FieldKind};
pub use schema::{Rigor, Schema};
pub use validate::{Validation, Validator};
