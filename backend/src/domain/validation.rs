//! Aggregated validation for user creation input.
//!
//! Validation never stops at the first failure: every field is checked and
//! the union of violations is returned so callers can report them all at
//! once. Limits and the email syntax pattern are supplied by configuration,
//! not hardcoded.

use std::fmt;

use regex::Regex;
use serde::Serialize;

/// Default maximum name length when no override is configured.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;
/// Default maximum email length when no override is configured.
pub const DEFAULT_MAX_EMAIL_LENGTH: usize = 100;
/// Default email syntax pattern when no override is configured.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$";

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Name of the offending request field.
    pub field: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Ordered, non-empty collection of field violations.
///
/// Order follows field-check order (`name` before `email`) and is stable so
/// tests and clients can rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Violations in field-check order.
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    /// Number of violations; always at least one, so there is no empty
    /// state to ask about.
    pub fn count(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Externally supplied validation limits and email syntax pattern.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    /// Maximum accepted name length, in characters.
    pub max_name_length: usize,
    /// Maximum accepted email length, in characters.
    pub max_email_length: usize,
    /// Regular expression an email must match.
    pub email_pattern: String,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_email_length: DEFAULT_MAX_EMAIL_LENGTH,
            email_pattern: DEFAULT_EMAIL_PATTERN.to_owned(),
        }
    }
}

/// Validator compiled from a [`ValidationPolicy`].
///
/// Immutable after construction; safe to share across concurrent requests.
/// A policy with an invalid pattern is rejected at construction so requests
/// never observe a broken validator.
#[derive(Debug, Clone)]
pub struct Validator {
    max_name_length: usize,
    max_email_length: usize,
    email_regex: Regex,
}

impl Validator {
    /// Compile a validator from the given policy.
    pub fn new(policy: &ValidationPolicy) -> Result<Self, regex::Error> {
        Ok(Self {
            max_name_length: policy.max_name_length,
            max_email_length: policy.max_email_length,
            email_regex: Regex::new(&policy.email_pattern)?,
        })
    }

    /// Check a name: present and within the configured length.
    pub fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::new("name", "is required"));
        }
        if name.chars().count() > self.max_name_length {
            return Err(ValidationError::new(
                "name",
                format!("must be at most {} characters", self.max_name_length),
            ));
        }
        Ok(())
    }

    /// Check an email: present, within the configured length, and matching
    /// the configured syntax pattern.
    ///
    /// Length is checked before the pattern, so an oversized value reports
    /// only the length violation; each field yields at most one error.
    pub fn validate_email(&self, email: &str) -> Result<(), ValidationError> {
        if email.is_empty() {
            return Err(ValidationError::new("email", "is required"));
        }
        if email.chars().count() > self.max_email_length {
            return Err(ValidationError::new(
                "email",
                format!("must be at most {} characters", self.max_email_length),
            ));
        }
        if !self.email_regex.is_match(email) {
            return Err(ValidationError::new("email", "invalid email format"));
        }
        Ok(())
    }

    /// Check a full creation request, aggregating violations from both
    /// fields in `name`-then-`email` order.
    pub fn validate_create_user_request(
        &self,
        name: &str,
        email: &str,
    ) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if let Err(error) = self.validate_name(name) {
            errors.push(error);
        }
        if let Err(error) = self.validate_email(email) {
            errors.push(error);
        }

        match ValidationErrors::from_vec(errors) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }
}
