use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::constants::{
    EMAIL_REQUIRED_ERROR, INVALID_EMAIL_ERROR, INVALID_PHONE_ERROR, NAME_REQUIRED_ERROR,
    PHONE_REQUIRED_ERROR,
};
use crate::locale::RegistrationErrors;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{8,15}$").unwrap());

/// Field name to localized message. Empty means the form is valid.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name_required"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("email_required"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Err(ValidationError::new("phone_required"));
    }
    if !PHONE_RE.is_match(phone) {
        return Err(ValidationError::new("invalid_phone_format"));
    }
    Ok(())
}

// === Registration form ===

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Email,
    Phone,
}

impl RegistrationField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RegistrationForm {
    pub fn set(&mut self, field: RegistrationField, value: String) {
        match field {
            RegistrationField::Name => self.name = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Phone => self.phone = value,
        }
    }

    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Phone => &self.phone,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Checks every field of a registration form. Pure; the returned map is empty
/// when the form is valid.
pub fn validate_registration(form: &RegistrationForm, messages: &RegistrationErrors) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Err(e) = validate_name(&form.name) {
        errors.insert(RegistrationField::Name.key(), registration_message(&e, messages));
    }
    if let Err(e) = validate_email(&form.email) {
        errors.insert(RegistrationField::Email.key(), registration_message(&e, messages));
    }
    if let Err(e) = validate_phone(&form.phone) {
        errors.insert(RegistrationField::Phone.key(), registration_message(&e, messages));
    }

    errors
}

fn registration_message(error: &ValidationError, messages: &RegistrationErrors) -> String {
    let (localized, fallback) = match error.code.as_ref() {
        "name_required" => (&messages.name_required, NAME_REQUIRED_ERROR),
        "email_required" => (&messages.email_required, EMAIL_REQUIRED_ERROR),
        "invalid_email_format" => (&messages.email_invalid, INVALID_EMAIL_ERROR),
        "phone_required" => (&messages.phone_required, PHONE_REQUIRED_ERROR),
        _ => (&messages.phone_invalid, INVALID_PHONE_ERROR),
    };
    localized.clone().unwrap_or_else(|| fallback.to_string())
}
