//! Field descriptors for the prompt sequence.
//!
//! A [`Field`] is the declarative specification of one prompt: a stable
//! name used as the output key, the user-facing message, and a kind that
//! determines what shape the answer takes. Descriptors own no mutable
//! state; the runner walks them in declaration order.

use crate::defaults::FieldDefault;
use crate::validate::{Validation, Validator};

/// The kind of a field — determines the prompt control and the answer shape.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Free text entry. Input is checked by `validator` (when present)
    /// until it accepts; `default` is resolved at prompt time.
    Input {
        validator: Option<Validator>,
        default: Option<FieldDefault>,
    },
    /// A yes/no toggle. A toggle has no invalid state, so there is no
    /// validator slot.
    Toggle { default: bool },
    /// A single selection from a closed, ordered choice list. Membership
    /// is guaranteed by the select control itself, not by a validator.
    Select {
        choices: Vec<String>,
        default: Option<String>,
    },
}

impl FieldKind {
    /// Get the string representation of this field kind
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Input { .. } => "input",
            FieldKind::Toggle { .. } => "toggle",
            FieldKind::Select { .. } => "select",
        }
    }
}

/// A single prompt descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Stable identifier, unique within a schema; the output record key.
    pub name: String,
    /// Human-readable prompt text.
    pub message: String,
    /// What the prompt asks for.
    pub kind: FieldKind,
}

impl Field {
    /// Run this field's validator against a raw input.
    ///
    /// A field without a validator accepts any input unconditionally;
    /// toggles and selects have no validator slot at all.
    pub fn validate(&self, input: &str) -> Validation {
        match &self.kind {
            FieldKind::Input {
                validator: Some(validator),
                ..
            } => validator(input),
            _ => Validation::Accept,
        }
    }

    /// The choice list, for select fields.
    pub fn choices(&self) -> Option<&[String]> {
        match &self.kind {
            FieldKind::Select { choices, .. } => Some(choices),
            _ => None,
        }
    }
}
