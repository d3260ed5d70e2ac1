//! # Form Field Validation
//!
//! Each field kind has a validator that can check a value and format it for display.
//! Validators are selected by [`FieldKind`], never by inspecting field ids.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static POSTAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ABCEGHJ-NPRSTVXY]\d[ABCEGHJ-NPRSTV-Z]\d[ABCEGHJ-NPRSTV-Z]\d$")
        .expect("postal code pattern is valid")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Why a value was rejected. The messages are shown to the person filling the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("This field is required.")]
    Empty,
    #[error("A Social Insurance Number has exactly 9 digits.")]
    SinLength,
    #[error("This Social Insurance Number is not valid. Please check the digits.")]
    SinChecksum,
    #[error("Postal codes look like A1A 1A1.")]
    PostalCode,
    #[error("Phone numbers need 10 digits, including the area code.")]
    Phone,
    #[error("Please enter an email address like name@example.com.")]
    Email,
}

/// The kinds of field that have dedicated validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Sin,
    PostalCode,
    Phone,
    Email,
    Text,
}

impl FieldKind {
    pub fn validator(self) -> &'static dyn FieldValidator {
        match self {
            FieldKind::Sin => &SinValidator,
            FieldKind::PostalCode => &PostalCodeValidator,
            FieldKind::Phone => &PhoneValidator,
            FieldKind::Email => &EmailValidator,
            FieldKind::Text => &TextValidator,
        }
    }
}

/// Validation and display formatting for one field kind.
pub trait FieldValidator: Send + Sync {
    fn validate(&self, value: &str) -> Result<(), ValidationIssue>;

    /// Formats a value for display. Invalid values are returned trimmed but otherwise as-is.
    fn format(&self, value: &str) -> String;
}

/// The outcome of validating one value, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub valid: bool,
    pub formatted: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Validates and formats `value` with the validator for `kind`.
pub fn check_field(kind: FieldKind, value: &str) -> FieldCheck {
    let validator = kind.validator();
    match validator.validate(value) {
        Ok(()) => FieldCheck {
            valid: true,
            formatted: validator.format(value),
            message: None,
        },
        Err(issue) => FieldCheck {
            valid: false,
            formatted: value.trim().to_string(),
            message: Some(issue.to_string()),
        },
    }
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn only_chars(value: &str, allowed: impl Fn(char) -> bool) -> bool {
    value.chars().all(|c| c.is_ascii_digit() || allowed(c))
}

fn require(value: &str) -> Result<&str, ValidationIssue> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationIssue::Empty)
    } else {
        Ok(value)
    }
}

pub struct SinValidator;

impl SinValidator {
    fn luhn_valid(digits: &str) -> bool {
        let sum: u32 = digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .enumerate()
            .map(|(i, d)| {
                if i % 2 == 1 {
                    let doubled = d * 2;
                    if doubled > 9 {
                        doubled - 9
                    } else {
                        doubled
                    }
                } else {
                    d
                }
            })
            .sum();
        sum % 10 == 0
    }
}

impl FieldValidator for SinValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationIssue> {
        let value = require(value)?;
        if !only_chars(value, |c| c == ' ' || c == '-') {
            return Err(ValidationIssue::SinLength);
        }
        let digits = digits(value);
        if digits.len() != 9 {
            return Err(ValidationIssue::SinLength);
        }
        if !Self::luhn_valid(&digits) {
            return Err(ValidationIssue::SinChecksum);
        }
        Ok(())
    }

    fn format(&self, value: &str) -> String {
        let digits = digits(value);
        if digits.len() != 9 {
            return value.trim().to_string();
        }
        format!("{} {} {}", &digits[0..3], &digits[3..6], &digits[6..9])
    }
}

pub struct PostalCodeValidator;

impl PostalCodeValidator {
    fn compact(value: &str) -> String {
        value
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase()
    }
}

impl FieldValidator for PostalCodeValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationIssue> {
        let value = require(value)?;
        if POSTAL_CODE_RE.is_match(&Self::compact(value)) {
            Ok(())
        } else {
            Err(ValidationIssue::PostalCode)
        }
    }

    fn format(&self, value: &str) -> String {
        let compact = Self::compact(value);
        if compact.len() != 6 || !compact.is_ascii() {
            return value.trim().to_string();
        }
        format!("{} {}", &compact[0..3], &compact[3..6])
    }
}

pub struct PhoneValidator;

impl PhoneValidator {
    /// The 10 significant digits, dropping a leading country code of 1.
    fn national_digits(value: &str) -> Option<String> {
        let digits = digits(value);
        match digits.len() {
            10 => Some(digits),
            11 if digits.starts_with('1') => Some(digits[1..].to_string()),
            _ => None,
        }
    }
}

impl FieldValidator for PhoneValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationIssue> {
        let value = require(value)?;
        if !only_chars(value, |c| matches!(c, ' ' | '-' | '(' | ')' | '+' | '.')) {
            return Err(ValidationIssue::Phone);
        }
        Self::national_digits(value)
            .map(|_| ())
            .ok_or(ValidationIssue::Phone)
    }

    fn format(&self, value: &str) -> String {
        match Self::national_digits(value) {
            Some(d) => format!("({}) {}-{}", &d[0..3], &d[3..6], &d[6..10]),
            None => value.trim().to_string(),
        }
    }
}

pub struct EmailValidator;

impl FieldValidator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationIssue> {
        let value = require(value)?;
        if EMAIL_RE.is_match(value) {
            Ok(())
        } else {
            Err(ValidationIssue::Email)
        }
    }

    fn format(&self, value: &str) -> String {
        value.trim().to_lowercase()
    }
}

/// Free text: anything goes, surrounding whitespace is dropped.
pub struct TextValidator;

impl FieldValidator for TextValidator {
    fn validate(&self, _value: &str) -> Result<(), ValidationIssue> {
        Ok(())
    }

    fn format(&self, value: &str) -> String {
        value.trim().to_string()
    }
}
