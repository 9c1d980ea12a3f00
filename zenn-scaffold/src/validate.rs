//! Input validation for prompt fields
//!
//! Every validator is a plain `fn(&str) -> Validation`: total over all
//! string inputs, deterministic, and free of side effects. A rejection is
//! an instruction to the runner to re-display the field, never a fault.

use std::sync::LazyLock;

use regex::Regex;

/// Outcome of running a validator against one raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The input is accepted as the field's value.
    Accept,
    /// The input is rejected; the runner re-prompts the same field.
    /// `message` is shown to the user when present.
    Reject { message: Option<String> },
}

impl Validation {
    /// Reject without a message (the prompt is simply shown again).
    pub fn reject() -> Self {
        Validation::Reject { message: None }
    }

    /// Reject with an explanatory message.
    pub fn reject_with(message: impl Into<String>) -> Self {
        Validation::Reject {
            message: Some(message.into()),
        }
    }

    /// True when the input was accepted.
    pub fn is_accept(&self) -> bool {
        matches!(self, Validation::Accept)
    }

    /// The rejection message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Validation::Accept => None,
            Validation::Reject { message } => message.as_deref(),
        }
    }
}

/// A named, pure validation function stored alongside its field.
pub type Validator = fn(&str) -> Validation;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-z_-]{12,50}$").expect("slug pattern is valid"));

/// Accept any non-empty string; reject the empty string without a message.
pub fn require_nonempty(input: &str) -> Validation {
    if input.is_empty() {
        Validation::reject()
    } else {
        Validation::Accept
    }
}

/// Strict slug check: 12-50 characters of lowercase ascii letters, digits,
/// hyphens, and underscores.
pub fn slug_strict(input: &str) -> Validation {
    if input.is_empty() {
        Validation::reject_with("slug is required")
    } else if !SLUG_RE.is_match(input) {
        Validation::reject_with(
            "slug must be 12-50 characters of lowercase letters, digits, hyphens, and underscores",
        )
    } else {
        Validation::Accept
    }
}

/// Require exactly one emoji.
///
/// Length is counted in UTF-16 code units: a surrogate-pair glyph or a base
/// glyph plus variation selector is 2 units and passes; a ZWJ sequence is
/// longer and is rejected; two separate single-unit glyphs also total 2 and
/// pass. The unit choice is a known narrow assumption kept as-is.
pub fn emoji_single(input: &str) -> Validation {
    if input.is_empty() {
        Validation::reject_with("emoji is required")
    } else if input.encode_utf16().count() != 2 {
        Validation::reject_with("enter exactly one emoji")
    } else {
        Validation::Accept
    }
}

/// Require a non-empty title.
pub fn require_title(input: &str) -> Validation {
    if input.is_empty() {
        Validation::reject_with("title is required")
    } else {
        Validation::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonempty_accepts_any_nonempty_string() {
        assert!(require_nonempty("a").is_accept());
        assert!(require_nonempty("  ").is_accept());
        assert!(require_nonempty("UPPER AND spaces!").is_accept());
    }

    #[test]
    fn nonempty_rejects_empty_without_message() {
        let result = require_nonempty("");
        assert!(!result.is_accept());
        assert_eq!(result.message(), None);
    }

    #[test]
    fn slug_strict_accepts_pattern_matches() {
        assert!(slug_strict("my-article-2024").is_accept());
        assert!(slug_strict("abcdefghijkl").is_accept()); // exactly 12
        assert!(slug_strict(&"a".repeat(50)).is_accept()); // exactly 50
        assert!(slug_strict("snake_case_slug_01").is_accept());
    }

    #[test]
    fn slug_strict_rejects_empty_with_required_message() {
        let result = slug_strict("");
        assert_eq!(result.message(), Some("slug is required"));
    }

    #[test]
    fn slug_strict_rejects_nonmatching_with_explanation() {
        let too_long = "a".repeat(51);
        let cases = [
            "AB",
            "short",
            too_long.as_str(),
            "has space in it",
            "ÜmläutSlug123",
            "Mixed-Case-Slug",
        ];
        for bad in cases {
            let result = slug_strict(bad);
            assert!(!result.is_accept(), "{bad:?} should be rejected");
            let message = result.message().expect("rejection carries a message");
            assert!(message.contains("12-50"));
        }
    }

    #[test]
    fn emoji_rejects_empty_with_required_message() {
        assert_eq!(emoji_single("").message(), Some("emoji is required"));
    }

    #[test]
    fn emoji_accepts_two_code_unit_glyphs() {
        // Surrogate pair
        assert!(emoji_single("😀").is_accept());
        // Base glyph plus variation selector
        assert!(emoji_single("✏\u{fe0f}").is_accept());
        assert!(emoji_single("📝").is_accept());
    }

    #[test]
    fn emoji_rejects_other_lengths() {
        assert_eq!(emoji_single("a").message(), Some("enter exactly one emoji"));
        assert_eq!(
            emoji_single("😀😀").message(),
            Some("enter exactly one emoji")
        );
        // A ZWJ family is many code units, so the narrow check rejects it
        assert!(!emoji_single("👨\u{200d}👩\u{200d}👧").is_accept());
    }

    #[test]
    fn emoji_unit_count_is_utf16_not_bytes() {
        // Two plain BMP characters total 2 units and slip through; this
        // pins the unit the check counts.
        assert!(emoji_single("ab").is_accept());
    }

    #[test]
    fn title_requires_nonempty() {
        assert_eq!(require_title("").message(), Some("title is required"));
        assert!(require_title("Untitled").is_accept());
        assert!(require_title("読みやすいコードの書き方").is_accept());
    }

    #[test]
    fn validators_are_idempotent() {
        for input in ["", "my-article-2024", "AB", "😀"] {
            assert_eq!(slug_strict(input), slug_strict(input));
            assert_eq!(emoji_single(input), emoji_single(input));
            assert_eq!(require_nonempty(input), require_nonempty(input));
            assert_eq!(require_title(input), require_title(input));
        }
    }
}
