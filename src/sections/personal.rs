//! Personal information section - forbids name parts, username and phone number.

use secrecy::ExposeSecret;

use super::{SectionInput, SectionResult};
use crate::outcome::{Rule, RuleCheck};

/// Checks the password against the user's own details.
///
/// Each rule is `Inactive` while its context field is empty. Name and
/// username matching is case-insensitive; phone matching is exact.
pub fn personal_info_section(input: &SectionInput<'_>) -> SectionResult {
    let pwd = input.password.expose_secret();
    let lowered = pwd.to_lowercase();
    let ctx = input.context;

    let name_parts = ctx.name_parts();
    let no_name_part = if name_parts.is_empty() {
        RuleCheck::Inactive
    } else {
        RuleCheck::from_bool(
            !name_parts
                .iter()
                .any(|part| lowered.contains(&part.to_lowercase())),
        )
    };

    let no_username = match ctx.username() {
        Some(username) => RuleCheck::from_bool(!lowered.contains(&username.to_lowercase())),
        None => RuleCheck::Inactive,
    };

    let no_phone_number = match ctx.phone_variants(&input.config.dial_code) {
        Some(variants) => RuleCheck::from_bool(!variants.iter().any(|v| pwd.contains(v.as_str()))),
        None => RuleCheck::Inactive,
    };

    vec![
        (Rule::NoNamePart, no_name_part),
        (Rule::NoUsername, no_username),
        (Rule::NoPhoneNumber, no_phone_number),
    ]
}
