//! Password policy evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::config::PolicyConfig;
use crate::context::ValidationContext;
use crate::outcome::RuleOutcome;
use crate::sections::{
    SectionFn, SectionInput, character_variety_section, confirmation_section, length_section,
    personal_info_section,
};

/// Evaluates every policy rule and returns the full per-rule breakdown.
///
/// # Arguments
/// * `password` - The primary password field
/// * `confirmation` - The confirm-password field
/// * `context` - Name, username and phone number from sibling fields
/// * `config` - Thresholds and dialing code
///
/// # Returns
/// A `RuleOutcome` with an entry for all nine rules. No rule short-circuits
/// another, so a failing rule never hides the state of later ones.
pub fn evaluate_password_policy(
    password: &SecretString,
    confirmation: &SecretString,
    context: &ValidationContext,
    config: &PolicyConfig,
) -> RuleOutcome {
    let input = SectionInput {
        password,
        confirmation,
        context,
        config,
    };

    let sections: [(&str, SectionFn); 4] = [
        ("variety", character_variety_section),
        ("length", length_section),
        ("personal", personal_info_section),
        ("confirmation", confirmation_section),
    ];

    let mut outcome = RuleOutcome::default();
    for (_section_name, section_fn) in sections {
        for (rule, check) in section_fn(&input) {
            #[cfg(feature = "tracing")]
            tracing::trace!("section {}: {} -> {:?}", _section_name, rule, check);
            outcome.set(rule, check);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password policy evaluated: {} passed, {} failed",
        outcome.iter().filter(|(_, passed)| *passed).count(),
        outcome.failed_rules().len()
    );

    outcome
}

/// A policy bound to one config, for forms that evaluate on every keystroke.
#[derive(Debug, Clone, Default)]
pub struct PasswordPolicy {
    config: PolicyConfig,
}

impl PasswordPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn evaluate(
        &self,
        password: &SecretString,
        confirmation: &SecretString,
        context: &ValidationContext,
    ) -> RuleOutcome {
        evaluate_password_policy(password, confirmation, context, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{Rule, RuleCheck};

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    fn evaluate(pwd: &str, confirm: &str, ctx: &ValidationContext, config: &PolicyConfig) -> RuleOutcome {
        evaluate_password_policy(&secret(pwd), &secret(confirm), ctx, config)
    }

    fn passing(outcome: &RuleOutcome) -> Vec<Rule> {
        outcome
            .iter()
            .filter(|(_, passed)| *passed)
            .map(|(rule, _)| rule)
            .collect()
    }

    #[test]
    fn test_evaluate_strong_password() {
        let outcome = evaluate(
            "Password1!",
            "Password1!",
            &ValidationContext::new(),
            &PolicyConfig::default(),
        );

        for rule in [
            Rule::Lowercase,
            Rule::Uppercase,
            Rule::Digit,
            Rule::Special,
            Rule::MinLength,
            Rule::ConfirmationMatches,
        ] {
            assert!(outcome.passed(rule), "{rule} should pass");
        }
        assert!(outcome.is_satisfied());
        assert_eq!(outcome.failure_message(10), None);
    }

    #[test]
    fn test_evaluate_lowercase_only_password() {
        let outcome = evaluate("password", "", &ValidationContext::new(), &PolicyConfig::relaxed());
        assert_eq!(passing(&outcome), vec![Rule::Lowercase, Rule::MinLength]);

        let outcome = evaluate("password", "", &ValidationContext::new(), &PolicyConfig::default());
        assert_eq!(passing(&outcome), vec![Rule::Lowercase]);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let outcome = evaluate("", "", &ValidationContext::new(), &PolicyConfig::default());
        assert!(passing(&outcome).is_empty());
        assert!(!outcome.is_satisfied());
    }

    #[test]
    fn test_evaluate_empty_password_with_full_context() {
        let ctx = ValidationContext::new()
            .with_name("John Smith")
            .with_username("jsmith")
            .with_phone_number("1012345678");
        let outcome = evaluate("", "", &ctx, &PolicyConfig::default());

        assert_eq!(
            passing(&outcome),
            vec![Rule::NoNamePart, Rule::NoUsername, Rule::NoPhoneNumber]
        );
        assert!(!outcome.passed(Rule::ConfirmationMatches));
        assert!(!outcome.is_satisfied());
    }

    #[test]
    fn test_evaluate_lowercase_property() {
        let config = PolicyConfig::default();
        let ctx = ValidationContext::new();
        for pwd in ["", "ABC123!", "ÀÉÎ", "12345", "Zz", "x", "PASSWORDa"] {
            let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
            let outcome = evaluate(pwd, pwd, &ctx, &config);
            assert_eq!(outcome.passed(Rule::Lowercase), has_lower, "{pwd:?}");
        }
    }

    #[test]
    fn test_evaluate_confirmation_property() {
        let config = PolicyConfig::default();
        let ctx = ValidationContext::new();
        for (pwd, confirm, expected) in [
            ("abc", "abc", true),
            ("Password1!", "Password1!", true),
            ("", "", false),
            ("abc", "", false),
            ("", "abc", false),
            ("abc", "abd", false),
        ] {
            let outcome = evaluate(pwd, confirm, &ctx, &config);
            assert_eq!(outcome.passed(Rule::ConfirmationMatches), expected);
        }
    }

    #[test]
    fn test_evaluate_name_context() {
        let ctx = ValidationContext::new().with_name("John Smith");
        let config = PolicyConfig::default();

        let outcome = evaluate("ilovejohn123!", "", &ctx, &config);
        assert!(!outcome.passed(Rule::NoNamePart));
        assert!(outcome.is_active(Rule::NoNamePart));

        let outcome = evaluate("ilovemary123!", "", &ctx, &config);
        assert!(outcome.passed(Rule::NoNamePart));
    }

    #[test]
    fn test_evaluate_prefixed_phone_number() {
        let ctx = ValidationContext::new().with_phone_number("1012345678");
        let outcome = evaluate("Ab!201012345678", "", &ctx, &PolicyConfig::default());
        assert!(!outcome.passed(Rule::NoPhoneNumber));
        assert_eq!(
            outcome.failure_message(10),
            Some("Password must not contain your phone number".to_string())
        );
    }

    #[test]
    fn test_evaluate_inactive_context_rules_not_required() {
        let outcome = evaluate(
            "Password1!",
            "Password1!",
            &ValidationContext::new(),
            &PolicyConfig::default(),
        );
        for rule in [Rule::NoNamePart, Rule::NoUsername, Rule::NoPhoneNumber] {
            assert_eq!(outcome.check(rule), RuleCheck::Inactive);
            assert!(!outcome.passed(rule));
        }
        assert!(outcome.is_satisfied());
    }

    #[test]
    fn test_evaluate_no_short_circuit() {
        let ctx = ValidationContext::new()
            .with_name("Mona Lisa")
            .with_username("mona_l")
            .with_phone_number("1512345678");
        let outcome = evaluate("mona", "lisa", &ctx, &PolicyConfig::default());

        assert!(outcome.passed(Rule::Lowercase));
        assert!(outcome.passed(Rule::NoUsername));
        assert!(outcome.passed(Rule::NoPhoneNumber));
        assert_eq!(
            outcome.failed_rules(),
            vec![
                Rule::Uppercase,
                Rule::Digit,
                Rule::Special,
                Rule::MinLength,
                Rule::NoNamePart,
                Rule::ConfirmationMatches,
            ]
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let ctx = ValidationContext::new()
            .with_name("John Smith")
            .with_username("jsmith")
            .with_phone_number("1012345678");
        let policy = PasswordPolicy::new(PolicyConfig::default());
        let pwd = secret("Str0ng!Passw0rd");
        let confirm = secret("Str0ng!Passw0rd");

        let first = policy.evaluate(&pwd, &confirm, &ctx);
        let second = policy.evaluate(&pwd, &confirm, &ctx);
        assert_eq!(first, second);
        assert!(first.is_satisfied());
    }

    #[test]
    fn test_evaluate_non_ascii_input_is_total() {
        let ctx = ValidationContext::new().with_name("Zoë Ångström");
        let outcome = evaluate("ÅNGSTRÖM🔒pass", "ÅNGSTRÖM🔒pass", &ctx, &PolicyConfig::default());
        assert!(!outcome.passed(Rule::NoNamePart));
        assert!(outcome.passed(Rule::ConfirmationMatches));
    }

    #[test]
    fn test_policy_exposes_config() {
        let policy = PasswordPolicy::new(PolicyConfig::relaxed());
        assert_eq!(policy.config().min_length, 8);
        assert_eq!(PasswordPolicy::default().config().min_length, 10);
    }
}
