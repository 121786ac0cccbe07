//! Password policy validation library
//!
//! Evaluates a password against a fixed rule set and reports every rule
//! separately, so a form can render live per-rule checkmarks. Also carries
//! the field validators of the login, sign-up, forgot-password and
//! set-new-password screens.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_MIN_LENGTH`: Minimum password length (default: `10`)
//! - `PWD_POLICY_MAX_LENGTH`: Maximum password length (default: `50`)
//! - `PWD_POLICY_DIAL_CODE`: Dialing code used for phone checks (default: `20`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate_password_policy, PolicyConfig, Rule, ValidationContext};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("ilovejohn123!".to_string().into());
//! let confirmation = SecretString::new("ilovejohn123!".to_string().into());
//! let context = ValidationContext::new().with_name("John Smith");
//!
//! let outcome = evaluate_password_policy(
//!     &password,
//!     &confirmation,
//!     &context,
//!     &PolicyConfig::default(),
//! );
//!
//! for (rule, passed) in outcome.iter() {
//!     println!("{} {}", if passed { "✔" } else { "✖" }, rule.requirement());
//! }
//! assert!(!outcome.passed(Rule::NoNamePart));
//! assert!(!outcome.is_satisfied());
//! ```

// Internal modules
mod config;
mod context;
mod evaluator;
mod fields;
mod outcome;
mod sections;

// Public API
pub use config::{ConfigError, PolicyConfig};
pub use context::ValidationContext;
pub use evaluator::{PasswordPolicy, evaluate_password_policy};
pub use fields::{
    Field, FieldError, ForgotPasswordForm, FormReport, LoginForm, Role, SetNewPasswordForm, SignUpForm,
    international_phone_number, validate_age, validate_email, validate_name,
    validate_password_length, validate_phone_number, validate_role, validate_username,
};
pub use outcome::{Rule, RuleCheck, RuleOutcome, UnknownRule};
