//! Rule identifiers and the per-rule outcome mapping.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single password policy rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Lowercase,
    Uppercase,
    Digit,
    Special,
    MinLength,
    NoNamePart,
    NoUsername,
    NoPhoneNumber,
    ConfirmationMatches,
}

impl Rule {
    /// All rules, in checklist display order.
    pub const ALL: [Rule; 9] = [
        Rule::Lowercase,
        Rule::Uppercase,
        Rule::Digit,
        Rule::Special,
        Rule::MinLength,
        Rule::NoNamePart,
        Rule::NoUsername,
        Rule::NoPhoneNumber,
        Rule::ConfirmationMatches,
    ];

    /// Stable identifier used by the UI layer.
    pub fn id(&self) -> &'static str {
        match self {
            Rule::Lowercase => "lowercase",
            Rule::Uppercase => "uppercase",
            Rule::Digit => "digit",
            Rule::Special => "special",
            Rule::MinLength => "minLength",
            Rule::NoNamePart => "noNamePart",
            Rule::NoUsername => "noUsername",
            Rule::NoPhoneNumber => "noPhoneNumber",
            Rule::ConfirmationMatches => "confirmationMatches",
        }
    }

    /// Checklist label shown next to the pass/fail indicator.
    pub fn requirement(&self) -> &'static str {
        match self {
            Rule::Lowercase => "A lowercase letter",
            Rule::Uppercase => "A capital (uppercase) letter",
            Rule::Digit => "A number",
            Rule::Special => "A special character",
            Rule::MinLength => "Minimum length",
            Rule::NoNamePart => "No part of your name",
            Rule::NoUsername => "Not your username",
            Rule::NoPhoneNumber => "Not your phone number",
            Rule::ConfirmationMatches => "Passwords match",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown password rule: {0}")]
pub struct UnknownRule(pub String);

impl FromStr for Rule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.id() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// What a section reports for one rule.
///
/// `Inactive` is used by contextual rules whose context field is still empty:
/// it reads as failing but is not required for acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleCheck {
    Pass,
    #[default]
    Fail,
    Inactive,
}

impl RuleCheck {
    pub fn from_bool(passed: bool) -> Self {
        if passed { RuleCheck::Pass } else { RuleCheck::Fail }
    }
}

/// Full pass/fail breakdown, one entry per [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleOutcome {
    checks: [RuleCheck; 9],
}

impl RuleOutcome {
    pub(crate) fn set(&mut self, rule: Rule, check: RuleCheck) {
        self.checks[rule.index()] = check;
    }

    /// Raw check reported for `rule`.
    pub fn check(&self, rule: Rule) -> RuleCheck {
        self.checks[rule.index()]
    }

    /// Whether `rule` passed. Inactive rules read as `false`.
    pub fn passed(&self, rule: Rule) -> bool {
        self.check(rule) == RuleCheck::Pass
    }

    pub fn is_active(&self, rule: Rule) -> bool {
        self.check(rule) != RuleCheck::Inactive
    }

    /// Iterates `(rule, passed)` for every rule in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::ALL.into_iter().map(|rule| (rule, self.passed(rule)))
    }

    /// Active rules that did not pass.
    pub fn failed_rules(&self) -> Vec<Rule> {
        Rule::ALL
            .into_iter()
            .filter(|&rule| self.check(rule) == RuleCheck::Fail)
            .collect()
    }

    /// True when every required (active) rule passed.
    pub fn is_satisfied(&self) -> bool {
        self.checks.iter().all(|c| *c != RuleCheck::Fail)
    }

    /// Builds the "Password must ..." helper text for failed content rules.
    ///
    /// Returns `None` when every content rule is satisfied. Confirmation is
    /// reported by [`RuleOutcome::confirmation_message`].
    pub fn failure_message(&self, min_length: usize) -> Option<String> {
        let parts: Vec<String> = self
            .failed_rules()
            .into_iter()
            .filter_map(|rule| match rule {
                Rule::Lowercase => Some("contain at least one lowercase letter".to_string()),
                Rule::Uppercase => Some("contain at least one uppercase letter".to_string()),
                Rule::Digit => Some("contain at least one number".to_string()),
                Rule::Special => Some("contain at least one special character".to_string()),
                Rule::MinLength => Some(format!("be at least {} characters long", min_length)),
                Rule::NoNamePart => Some("not contain any part of your name".to_string()),
                Rule::NoUsername => Some("not contain your username".to_string()),
                Rule::NoPhoneNumber => Some("not contain your phone number".to_string()),
                Rule::ConfirmationMatches => None,
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(format!("Password must {}", parts.join(", ")))
        }
    }

    pub fn confirmation_message(&self) -> Option<&'static str> {
        if self.passed(Rule::ConfirmationMatches) {
            None
        } else {
            Some("Passwords don't match")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_passing() -> RuleOutcome {
        let mut outcome = RuleOutcome::default();
        for rule in Rule::ALL {
            outcome.set(rule, RuleCheck::Pass);
        }
        outcome
    }

    #[test]
    fn test_rule_ids_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(rule.id().parse::<Rule>(), Ok(rule));
            assert_eq!(rule.to_string(), rule.id());
        }
    }

    #[test]
    fn test_unknown_rule_id() {
        let err = "hasLength".parse::<Rule>().unwrap_err();
        assert_eq!(err, UnknownRule("hasLength".to_string()));
        assert_eq!(err.to_string(), "Unknown password rule: hasLength");
    }

    #[test]
    fn test_default_outcome_fails_everything() {
        let outcome = RuleOutcome::default();
        assert!(outcome.iter().all(|(_, passed)| !passed));
        assert_eq!(outcome.failed_rules().len(), 9);
        assert!(!outcome.is_satisfied());
    }

    #[test]
    fn test_inactive_reads_false_but_not_required() {
        let mut outcome = all_passing();
        outcome.set(Rule::NoUsername, RuleCheck::Inactive);

        assert!(!outcome.passed(Rule::NoUsername));
        assert!(!outcome.is_active(Rule::NoUsername));
        assert!(outcome.failed_rules().is_empty());
        assert!(outcome.is_satisfied());
    }

    #[test]
    fn test_failure_message_lists_failed_content_rules() {
        let mut outcome = all_passing();
        outcome.set(Rule::Uppercase, RuleCheck::Fail);
        outcome.set(Rule::MinLength, RuleCheck::Fail);
        outcome.set(Rule::ConfirmationMatches, RuleCheck::Fail);

        assert_eq!(
            outcome.failure_message(10),
            Some(
                "Password must contain at least one uppercase letter, be at least 10 characters long"
                    .to_string()
            )
        );
        assert_eq!(outcome.confirmation_message(), Some("Passwords don't match"));
    }

    #[test]
    fn test_failure_message_none_when_content_passes() {
        let outcome = all_passing();
        assert_eq!(outcome.failure_message(10), None);
        assert_eq!(outcome.confirmation_message(), None);
    }
}
