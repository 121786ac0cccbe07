//! Form field validation for the login, sign-up, forgot-password and
//! set-new-password screens.
//!
//! Messages are the ones shown as helper text under each field.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::PolicyConfig;
use crate::context::ValidationContext;
use crate::evaluator::evaluate_password_policy;
use crate::outcome::RuleOutcome;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("valid regex"));
static USERNAME_FORBIDDEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").expect("valid regex"));
static USERNAME_START_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{3}[a-zA-Z0-9_\s]*$").expect("valid regex"));
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(10|11|12|15)[0-9]{8}$").expect("valid regex"));

const NAME_MIN: usize = 8;
const NAME_MAX: usize = 50;
const USERNAME_MIN: usize = 6;
const USERNAME_MAX: usize = 50;
const EMAIL_MIN: usize = 16;
const EMAIL_MAX: usize = 40;
const AGE_MIN: u32 = 12;
const AGE_MAX: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Username,
    Email,
    Age,
    Role,
    PhoneNumber,
    Identifier,
    Password,
    ConfirmPassword,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Name",
            Field::Username => "UserName",
            Field::Email => "Email",
            Field::Age => "Age",
            Field::Role => "Role",
            Field::PhoneNumber => "Phone number",
            Field::Identifier => "Username or Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("{field} must be at least {min} characters long")]
    TooShort { field: Field, min: usize },
    #[error("{field} must not exceed {max} characters")]
    TooLong { field: Field, max: usize },
    #[error("Name must contain characters only")]
    NameCharacters,
    #[error("UserName must contain letters, numbers, and underscore only")]
    UsernameCharacters,
    #[error("UserName must start with at least 3 letters")]
    UsernameStart,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Age must be a number")]
    AgeNotNumber,
    #[error("Age must be at least {0}")]
    AgeTooLow(u32),
    #[error("Age must not exceed {0}")]
    AgeTooHigh(u32),
    #[error("Role must be Student or Instructor")]
    InvalidRole,
    #[error("Please provide a valid phone number")]
    InvalidPhoneNumber,
    #[error("{0}")]
    PasswordPolicy(String),
    #[error("Passwords don't match")]
    PasswordMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Instructor,
}

impl FromStr for Role {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(FieldError::Required(Field::Role)),
            "Student" => Ok(Role::Student),
            "Instructor" => Ok(Role::Instructor),
            _ => Err(FieldError::InvalidRole),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Student => "Student",
            Role::Instructor => "Instructor",
        })
    }
}

fn required(value: &str, field: Field) -> Result<&str, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldError::Required(field))
    } else {
        Ok(trimmed)
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let name = required(name, Field::Name)?;
    if !NAME_REGEX.is_match(name) {
        return Err(FieldError::NameCharacters);
    }
    let len = name.chars().count();
    if len < NAME_MIN {
        return Err(FieldError::TooShort { field: Field::Name, min: NAME_MIN });
    }
    if len > NAME_MAX {
        return Err(FieldError::TooLong { field: Field::Name, max: NAME_MAX });
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), FieldError> {
    let username = required(username, Field::Username)?;
    if USERNAME_FORBIDDEN_REGEX.is_match(username) {
        return Err(FieldError::UsernameCharacters);
    }
    if !USERNAME_START_REGEX.is_match(username) {
        return Err(FieldError::UsernameStart);
    }
    // Only ASCII survives the checks above, so bytes == chars.
    if username.len() < USERNAME_MIN {
        return Err(FieldError::TooShort { field: Field::Username, min: USERNAME_MIN });
    }
    if username.len() > USERNAME_MAX {
        return Err(FieldError::TooLong { field: Field::Username, max: USERNAME_MAX });
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = required(email, Field::Email)?;
    let len = email.chars().count();
    if !(EMAIL_MIN..=EMAIL_MAX).contains(&len) || !EMAIL_REGEX.is_match(email) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_age(age: &str) -> Result<u32, FieldError> {
    let age = required(age, Field::Age)?
        .parse::<u32>()
        .map_err(|_| FieldError::AgeNotNumber)?;
    if age < AGE_MIN {
        return Err(FieldError::AgeTooLow(AGE_MIN));
    }
    if age > AGE_MAX {
        return Err(FieldError::AgeTooHigh(AGE_MAX));
    }
    Ok(age)
}

pub fn validate_role(role: &str) -> Result<Role, FieldError> {
    role.parse()
}

/// Local phone number without the dialing code, e.g. `1012345678`.
pub fn validate_phone_number(phone_number: &str) -> Result<(), FieldError> {
    if PHONE_REGEX.is_match(phone_number.trim()) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhoneNumber)
    }
}

pub fn validate_password_length(password: &SecretString, config: &PolicyConfig) -> Result<(), FieldError> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Err(FieldError::Required(Field::Password));
    }
    if pwd.chars().count() > config.max_length {
        return Err(FieldError::TooLong { field: Field::Password, max: config.max_length });
    }
    Ok(())
}

/// The phone number as submitted to the backend: `+<dial code><number>`.
pub fn international_phone_number(raw: &str, dial_code: &str) -> String {
    format!("+{}{}", dial_code, raw.trim())
}

/// Field errors plus the password checklist for one form snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub field_errors: Vec<(Field, FieldError)>,
    pub password: Option<RuleOutcome>,
}

impl FormReport {
    fn new() -> Self {
        Self {
            field_errors: Vec::new(),
            password: None,
        }
    }

    fn record<T>(&mut self, field: Field, result: Result<T, FieldError>) {
        if let Err(e) = result {
            self.field_errors.push((field, e));
        }
    }

    /// First error reported for `field`, if any.
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.field_errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e)
    }

    /// Submission gate: no field errors and every required password rule passes.
    pub fn can_submit(&self) -> bool {
        self.field_errors.is_empty()
            && self.password.as_ref().is_none_or(RuleOutcome::is_satisfied)
    }

    fn check_passwords(
        &mut self,
        password: &SecretString,
        confirmation: &SecretString,
        context: &ValidationContext,
        config: &PolicyConfig,
    ) {
        let outcome = evaluate_password_policy(password, confirmation, context, config);

        match validate_password_length(password, config) {
            Err(e) => self.field_errors.push((Field::Password, e)),
            Ok(()) => {
                if let Some(message) = outcome.failure_message(config.min_length) {
                    self.field_errors
                        .push((Field::Password, FieldError::PasswordPolicy(message)));
                }
            }
        }

        if confirmation.expose_secret().is_empty() {
            self.field_errors
                .push((Field::ConfirmPassword, FieldError::Required(Field::ConfirmPassword)));
        } else if confirmation.expose_secret() != password.expose_secret() {
            self.field_errors
                .push((Field::ConfirmPassword, FieldError::PasswordMismatch));
        }

        self.password = Some(outcome);
    }
}

#[derive(Debug)]
pub struct SignUpForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub age: String,
    pub role: String,
    pub phone_number: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl SignUpForm {
    /// Context used to forbid the user's own details in the password.
    pub fn context(&self) -> ValidationContext {
        ValidationContext::new()
            .with_name(self.name.as_str())
            .with_username(self.username.as_str())
            .with_phone_number(self.phone_number.as_str())
    }

    pub fn validate(&self, config: &PolicyConfig) -> FormReport {
        let mut report = FormReport::new();
        report.record(Field::Name, validate_name(&self.name));
        report.record(Field::Username, validate_username(&self.username));
        report.record(Field::Email, validate_email(&self.email));
        report.record(Field::Age, validate_age(&self.age));
        report.record(Field::Role, validate_role(&self.role));
        report.record(Field::PhoneNumber, validate_phone_number(&self.phone_number));
        report.check_passwords(&self.password, &self.confirm_password, &self.context(), config);

        #[cfg(feature = "tracing")]
        tracing::debug!("Sign-up form validated: {} field errors", report.field_errors.len());

        report
    }

    /// Phone number in the form the backend expects.
    pub fn submitted_phone_number(&self, config: &PolicyConfig) -> String {
        international_phone_number(&self.phone_number, &config.dial_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> FormReport {
        let mut report = FormReport::new();
        report.record(Field::Email, validate_email(&self.email));
        report
    }
}

#[derive(Debug)]
pub struct SetNewPasswordForm {
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl SetNewPasswordForm {
    /// No sibling fields on this screen, so only the content rules apply.
    pub fn validate(&self, config: &PolicyConfig) -> FormReport {
        let mut report = FormReport::new();
        report.check_passwords(
            &self.password,
            &self.confirm_password,
            &ValidationContext::new(),
            config,
        );
        report
    }
}

/// Login popup: the backend checks the credentials, so only presence is
/// validated here.
#[derive(Debug)]
pub struct LoginForm {
    /// Username or email.
    pub identifier: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn validate(&self) -> FormReport {
        let mut report = FormReport::new();
        report.record(Field::Identifier, required(&self.identifier, Field::Identifier));
        if self.password.expose_secret().is_empty() {
            report
                .field_errors
                .push((Field::Password, FieldError::Required(Field::Password)));
        }
        report
    }
}
