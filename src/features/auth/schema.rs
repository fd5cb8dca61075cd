//! Validation schemas, one static schema per auth mode. Whole-form validation
//! turns the draft `FormValues` into typed `Credentials`, so a submitter only
//! ever sees the field combination its mode allows.

use super::mode::{AuthMode, Field};
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Minimum characters for a password in login and signup.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Minimum characters for the display name in signup.
pub const MIN_NAME_LENGTH: usize = 2;

const INVALID_EMAIL: &str = "Invalid email address.";
const SHORT_PASSWORD: &str = "Password must be at least 6 characters.";
const SHORT_NAME: &str = "Name must be at least 2 characters.";

/// Format constraint applied on top of presence and length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
}

/// Constraints for one field of a schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub required: bool,
    pub format: Option<Format>,
    pub min_length: usize,
    /// Message shown when any constraint of the rule fails.
    pub message: &'static str,
}

/// Field set and rules for one mode.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    mode: AuthMode,
    rules: &'static [FieldRule],
}

const NAME_RULE: FieldRule = FieldRule {
    field: Field::Name,
    required: true,
    format: None,
    min_length: MIN_NAME_LENGTH,
    message: SHORT_NAME,
};

const EMAIL_RULE: FieldRule = FieldRule {
    field: Field::Email,
    required: true,
    format: Some(Format::Email),
    min_length: 0,
    message: INVALID_EMAIL,
};

const PASSWORD_RULE: FieldRule = FieldRule {
    field: Field::Password,
    required: true,
    format: None,
    min_length: MIN_PASSWORD_LENGTH,
    message: SHORT_PASSWORD,
};

static LOGIN_SCHEMA: Schema = Schema {
    mode: AuthMode::Login,
    rules: &[EMAIL_RULE, PASSWORD_RULE],
};

static SIGN_UP_SCHEMA: Schema = Schema {
    mode: AuthMode::SignUp,
    rules: &[NAME_RULE, EMAIL_RULE, PASSWORD_RULE],
};

static FORGOT_PASSWORD_SCHEMA: Schema = Schema {
    mode: AuthMode::ForgotPassword,
    rules: &[EMAIL_RULE],
};

/// Returns the schema for `mode`. Always the same static instance per mode.
pub fn select_schema(mode: AuthMode) -> &'static Schema {
    match mode {
        AuthMode::Login => &LOGIN_SCHEMA,
        AuthMode::SignUp => &SIGN_UP_SCHEMA,
        AuthMode::ForgotPassword => &FORGOT_PASSWORD_SCHEMA,
    }
}

/// Draft input as typed by the user. Fields a mode does not use stay empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

/// Validated submission payload, one variant per mode.
/// Carries the password, so it must never be logged.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Credentials {
    Login {
        email: String,
        password: String,
    },
    SignUp {
        name: String,
        email: String,
        password: String,
    },
    ForgotPassword {
        email: String,
    },
}

impl Credentials {
    pub fn mode(&self) -> AuthMode {
        match self {
            Credentials::Login { .. } => AuthMode::Login,
            Credentials::SignUp { .. } => AuthMode::SignUp,
            Credentials::ForgotPassword { .. } => AuthMode::ForgotPassword,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}

/// A single field-level validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.field.as_str(), self.message)
    }
}

/// Errors keyed by field, in schema order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<ValidationError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn set(&mut self, field: Field, result: Result<(), ValidationError>) {
        self.0.retain(|error| error.field != field);
        if let Err(error) = result {
            self.0.push(error);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Schema {
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Fields validated by this schema, in render order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.rules.iter().map(|rule| rule.field)
    }

    pub fn rule(&self, field: Field) -> Option<&'static FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Validates one field. Fields outside the schema always pass.
    ///
    /// # Errors
    ///
    /// Returns the rule message when the value is missing, too short, or
    /// malformed.
    pub fn validate_field(&self, field: Field, value: &str) -> Result<(), ValidationError> {
        let Some(rule) = self.rule(field) else {
            return Ok(());
        };
        let fail = || {
            Err(ValidationError {
                field,
                message: rule.message,
            })
        };

        if value.is_empty() {
            return if rule.required { fail() } else { Ok(()) };
        }
        if value.chars().count() < rule.min_length {
            return fail();
        }
        match rule.format {
            Some(Format::Email) if !valid_email(value) => fail(),
            _ => Ok(()),
        }
    }

    /// Validates every field of the schema and builds typed credentials.
    ///
    /// # Errors
    ///
    /// Returns all field errors when any field fails.
    pub fn validate(&self, values: &FormValues) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in self.fields() {
            errors.set(field, self.validate_field(field, values.get(field)));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let values = values.clone();
        Ok(match self.mode {
            AuthMode::Login => Credentials::Login {
                email: values.email,
                password: values.password,
            },
            AuthMode::SignUp => Credentials::SignUp {
                name: values.name,
                email: values.email,
                password: values.password,
            },
            AuthMode::ForgotPassword => Credentials::ForgotPassword {
                email: values.email,
            },
        })
    }
}

/// Email shape check matching what browser form libraries accept: no leading
/// dot and no consecutive dots in the local part, and an alphabetic TLD.
pub fn valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    if local.starts_with('.') || local.contains("..") {
        return false;
    }
    Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .is_ok_and(|re| re.is_match(email))
}
