//! Contextual signals from sibling form fields.

/// Name, username and phone number used to forbid trivial passwords.
///
/// Empty or whitespace-only fields disable the matching rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    name: String,
    username: String,
    phone_number: String,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Whitespace-delimited tokens of the declared name.
    pub fn name_parts(&self) -> Vec<&str> {
        self.name.split_whitespace().collect()
    }

    pub fn username(&self) -> Option<&str> {
        non_empty(&self.username)
    }

    pub fn phone_number(&self) -> Option<&str> {
        non_empty(&self.phone_number)
    }

    /// The phone number as typed, with the dialing code, and with a leading zero.
    pub fn phone_variants(&self, dial_code: &str) -> Option<[String; 3]> {
        self.phone_number().map(|raw| {
            [
                raw.to_string(),
                format!("{}{}", dial_code, raw),
                format!("0{}", raw),
            ]
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
