//! Input validation
//!
//! Each write operation takes a raw input struct and validates it into a
//! draft. The outcome is a tagged [`Validated`] value: either the normalized
//! draft or the collected [`FieldErrors`]. Validation itself never errors.
//!
//! Text is trimmed before length checks; lengths are counted in characters.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{ValidateEmail, ValidateUrl};

use crate::error::AppError;
use crate::models::{
    GameDraft, GameInput, GameListDraft, GameListInput, NewUser, ProfileInput, ProfileUpdate,
    SignUpInput,
};
use crate::tags;

// ── Limits ──────────────────────────────────────────────────────────

pub const MAX_LIST_NAME_LEN: usize = 40;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_GAME_NAME_LEN: usize = 100;
pub const MAX_SITE_NAME_LEN: usize = 50;
pub const MAX_TAG_LEN: usize = 50;
pub const MAX_TAGS: usize = 10;
pub const MIN_PASSWORD_LEN: usize = 8;
/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Field errors ────────────────────────────────────────────────────

/// Validation messages keyed by field name, in field-name order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All messages for a field
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message for a field, the one a form shows next to the input
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    /// Field names with errors
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Every message joined with `" | "`, in field order
    pub fn joined_message(&self) -> String {
        let messages: Vec<&str> = self.0.values().flatten().map(String::as_str).collect();
        if messages.is_empty() {
            return "Invalid input".to_string();
        }
        messages.join(" | ")
    }

    /// Rebuild field errors from the `details` of a validation error body
    pub fn from_details(details: &HashMap<String, Value>) -> Self {
        let mut errors = Self::new();
        for (field, value) in details {
            match value {
                Value::String(msg) => errors.add(field, msg.clone()),
                Value::Array(items) => {
                    for msg in items.iter().filter_map(Value::as_str) {
                        errors.add(field, msg);
                    }
                }
                _ => {}
            }
        }
        errors
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        let mut err = AppError::validation(errors.joined_message());
        for (field, messages) in errors.0 {
            err = err.with_detail(field, messages);
        }
        err
    }
}

/// Tagged validation outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T> {
    Valid(T),
    Invalid(FieldErrors),
}

impl<T> Validated<T> {
    fn from_parts(value: T, errors: FieldErrors) -> Self {
        if errors.is_empty() {
            Validated::Valid(value)
        } else {
            Validated::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    pub fn into_result(self) -> Result<T, FieldErrors> {
        match self {
            Validated::Valid(v) => Ok(v),
            Validated::Invalid(e) => Err(e),
        }
    }
}

// ── Field checks ────────────────────────────────────────────────────

/// Trim, then require 1..=max characters.
fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    max_len: usize,
    label: &str,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("{label} is required"));
    } else if trimmed.chars().count() > max_len {
        errors.add(
            field,
            format!("{label} must be less than {max_len} characters"),
        );
    }
    trimmed.to_owned()
}

fn tag_list(errors: &mut FieldErrors, raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        errors.add("tags", "At least one tag is required");
        return Vec::new();
    }
    let parsed = tags::parse_tags(raw);
    if parsed.is_empty() {
        errors.add("tags", "At least one valid tag is required");
    }
    if parsed.iter().any(|t| t.chars().count() > MAX_TAG_LEN) {
        errors.add(
            "tags",
            format!("Each tag must be less than {MAX_TAG_LEN} characters"),
        );
    }
    if parsed.len() > MAX_TAGS {
        errors.add("tags", format!("Maximum {MAX_TAGS} tags allowed"));
    }
    parsed
}

fn email_domain(email: &str) -> Option<&str> {
    email.split('@').nth(1)
}

fn domain_list_message(allowed: &[String]) -> String {
    match allowed {
        [] => String::new(),
        [only] => format!("Email domain must be {only}"),
        [first, second] => format!("Email domain must be one of {first} or {second}"),
        [init @ .., last] => format!("Email domain must be one of {}, or {last}", init.join(", ")),
    }
}

// ── Operation inputs ────────────────────────────────────────────────

impl GameListInput {
    pub fn validate(&self) -> Validated<GameListDraft> {
        let mut errors = FieldErrors::new();
        let name = required_text(&mut errors, "name", &self.name, MAX_LIST_NAME_LEN, "List name");
        let description = required_text(
            &mut errors,
            "description",
            &self.description,
            MAX_DESCRIPTION_LEN,
            "Description",
        );
        let tags = tag_list(&mut errors, &self.tags);
        Validated::from_parts(
            GameListDraft {
                name,
                description,
                tags,
            },
            errors,
        )
    }
}

impl GameInput {
    pub fn validate(&self) -> Validated<GameDraft> {
        let mut errors = FieldErrors::new();
        let name = required_text(&mut errors, "name", &self.name, MAX_GAME_NAME_LEN, "Game name");
        let url = self.url.trim().to_owned();
        if !url.validate_url() {
            errors.add("url", "A valid URL is required");
        }
        let site_name = required_text(
            &mut errors,
            "site_name",
            &self.site_name,
            MAX_SITE_NAME_LEN,
            "Site name",
        );
        let tags = tag_list(&mut errors, &self.tags);
        Validated::from_parts(
            GameDraft {
                name,
                url,
                site_name,
                tags,
            },
            errors,
        )
    }
}

impl SignUpInput {
    pub fn validate(&self) -> Validated<NewUser> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            errors.add("name", "Name is required");
        }
        let email = self.email.trim().to_lowercase();
        if !email.validate_email() {
            errors.add("email", "Please enter a valid email address");
        }
        let password_len = self.password.chars().count();
        if password_len < MIN_PASSWORD_LEN {
            errors.add(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LEN} characters long"),
            );
        } else if password_len > MAX_PASSWORD_LEN {
            errors.add(
                "password",
                format!("Password must be at most {MAX_PASSWORD_LEN} characters"),
            );
        }
        Validated::from_parts(
            NewUser {
                name,
                email,
                password: self.password.clone(),
            },
            errors,
        )
    }
}

impl ProfileInput {
    /// `allowed_domains` empty means any domain is accepted.
    pub fn validate(&self, allowed_domains: &[String]) -> Validated<ProfileUpdate> {
        let mut errors = FieldErrors::new();
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            errors.add("name", "Name is required");
        }
        let email = self.email.trim().to_lowercase();
        if !email.validate_email() {
            errors.add("email", "Invalid email format");
        } else if !allowed_domains.is_empty()
            && !email_domain(&email)
                .is_some_and(|d| allowed_domains.iter().any(|a| a.eq_ignore_ascii_case(d)))
        {
            errors.add("email", domain_list_message(allowed_domains));
        }
        let image = self
            .image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        if let Some(url) = &image
            && !url.validate_url()
        {
            errors.add("image", "Must be a valid image URL");
        }
        Validated::from_parts(ProfileUpdate { name, email, image }, errors)
    }
}
