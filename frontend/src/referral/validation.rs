use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::request::{ReferralField, ReferralRequest};
use crate::content;

const MIN_NAME_CHARS: usize = 2;

// ASCII classes only: case-insensitive Unicode folding would let `ſ` and the
// Kelvin sign through. Dots are checked separately; the regex crate has no lookaround.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please select a course")]
    MissingCourse,
    #[error("Please select a valid course")]
    UnknownCourse,
}

/// Every failing field of a request, reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ReferralField, ValidationError>);

impl FieldErrors {
    pub fn get(&self, field: ReferralField) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: ReferralField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ReferralField> + '_ {
        self.0.keys().copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Stores the outcome of a single-field check, dropping a stale error on success.
    pub fn record(&mut self, field: ReferralField, outcome: Result<(), ValidationError>) {
        match outcome {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(err) => {
                self.0.insert(field, err);
            }
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

pub fn validate_field(field: ReferralField, value: &str) -> Result<(), ValidationError> {
    match field {
        ReferralField::ReferrerName | ReferralField::FriendName => {
            if value.chars().count() < MIN_NAME_CHARS {
                return Err(ValidationError::NameTooShort);
            }
        }
        ReferralField::ReferrerEmail | ReferralField::FriendEmail => {
            if !is_valid_email(value) {
                return Err(ValidationError::InvalidEmail);
            }
        }
        ReferralField::Course => {
            if value.is_empty() {
                return Err(ValidationError::MissingCourse);
            }
            if content::find_course(value).is_none() {
                return Err(ValidationError::UnknownCourse);
            }
        }
        ReferralField::Message => {}
    }
    Ok(())
}

/// Checks all fields; never stops at the first failure.
pub fn validate(request: &ReferralRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in ReferralField::ALL {
        errors.record(field, validate_field(field, request.get(field)));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
