//! Length section - checks password minimum length.

use secrecy::ExposeSecret;

use super::{SectionInput, SectionResult};
use crate::outcome::{Rule, RuleCheck};

/// Checks the password against the configured minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(input: &SectionInput<'_>) -> SectionResult {
    let len = input.password.expose_secret().chars().count();
    vec![(
        Rule::MinLength,
        RuleCheck::from_bool(len >= input.config.min_length),
    )]
}
