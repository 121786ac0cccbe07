//! Confirmation section - compares the two password fields.

use secrecy::ExposeSecret;

use super::{SectionInput, SectionResult};
use crate::outcome::{Rule, RuleCheck};

/// Passes only when both fields are non-empty and exactly equal.
pub fn confirmation_section(input: &SectionInput<'_>) -> SectionResult {
    let pwd = input.password.expose_secret();
    let confirmation = input.confirmation.expose_secret();
    let matches = !pwd.is_empty() && !confirmation.is_empty() && pwd == confirmation;
    vec![(Rule::ConfirmationMatches, RuleCheck::from_bool(matches))]
}
