//! Character variety section - lowercase, uppercase, digit and special characters.

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;

use super::{SectionInput, SectionResult};
use crate::outcome::{Rule, RuleCheck};

/// Punctuation accepted by the `special` rule.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

static LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("valid regex"));
static UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid regex"));
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid regex"));
static SPECIAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{}]", regex::escape(SPECIAL_CHARACTERS))).expect("valid regex")
});

/// Reports one check per character class. ASCII classes only.
pub fn character_variety_section(input: &SectionInput<'_>) -> SectionResult {
    let pwd = input.password.expose_secret();

    vec![
        (Rule::Lowercase, RuleCheck::from_bool(LOWERCASE_REGEX.is_match(pwd))),
        (Rule::Uppercase, RuleCheck::from_bool(UPPERCASE_REGEX.is_match(pwd))),
        (Rule::Digit, RuleCheck::from_bool(DIGIT_REGEX.is_match(pwd))),
        (Rule::Special, RuleCheck::from_bool(SPECIAL_REGEX.is_match(pwd))),
    ]
}
