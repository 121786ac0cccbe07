//! Password policy sections
//!
//! Each section evaluates an independent group of rules.

mod confirmation;
mod length;
mod personal;
mod variety;

pub use confirmation::confirmation_section;
pub use length::length_section;
pub use personal::personal_info_section;
pub use variety::character_variety_section;

use secrecy::SecretString;

use crate::config::PolicyConfig;
use crate::context::ValidationContext;
use crate::outcome::{Rule, RuleCheck};

/// Snapshot of the form fields a section reads.
pub struct SectionInput<'a> {
    pub password: &'a SecretString,
    pub confirmation: &'a SecretString,
    pub context: &'a ValidationContext,
    pub config: &'a PolicyConfig,
}

/// Result type for section evaluation functions: one check per rule the
/// section owns. Sections never fail.
pub type SectionResult = Vec<(Rule, RuleCheck)>;

pub type SectionFn = fn(&SectionInput<'_>) -> SectionResult;
