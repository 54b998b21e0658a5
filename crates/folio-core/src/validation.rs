//! Contact-form field validation.
//!
//! [`validate`] maps one named field's raw text to a [`ValidationResult`].
//! Rules run on the trimmed value in a fixed order and the first match wins.
//! Trimming and lengths follow browser string semantics: the whitespace set
//! includes U+FEFF but not U+0085, and length counts UTF-16 code units.
//!
//!
//! 1. empty → `"<Field> is required."` (any field name)
//! 2. `email` that is not `local@domain.tld` → invalid email
//! 3. `name` shorter than 2 characters
//! 4. `message` shorter than 10 characters
//!
//! Anything else is valid. Failures are data, never errors.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Message for an email that does not look like `local@domain.tld`
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
/// Message for a name shorter than [`MIN_NAME_LEN`]
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long.";
/// Message for a message shorter than [`MIN_MESSAGE_LEN`]
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long.";

/// Minimum trimmed length of the `name` field, in UTF-16 code units
pub const MIN_NAME_LEN: usize = 2;
/// Minimum trimmed length of the `message` field, in UTF-16 code units
pub const MIN_MESSAGE_LEN: usize = 10;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // A run without form whitespace or '@'
        const PART: &str = r"[^[\s--\x{85}]\x{FEFF}@]+";
        Regex::new(&format!(r"^{PART}@{PART}\.{PART}$")).expect("email pattern is a valid regex")
    })
}

/// Identity of a form field (its `name` attribute).
///
/// The shell keys its per-field error displays by this value instead of
/// building element ids out of strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldId(pub String);

impl FieldId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// One named input of the contact form with its raw, untrimmed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: FieldId::new(name),
            value: value.into(),
        }
    }

    /// Validate this field on its own
    pub fn validate(&self) -> ValidationResult {
        validate(self.id.as_str(), &self.value)
    }
}

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// User-facing message, empty when valid
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Whitespace as a browser's `String.prototype.trim` sees it
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Length in UTF-16 code units
fn form_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate a named field's raw text.
///
/// Pure; the caller decides how to render the verdict (see [`FieldFeedback`]).
pub fn validate(field_name: &str, raw_value: &str) -> ValidationResult {
    let value = raw_value.trim_matches(is_form_whitespace);

    if value.is_empty() {
        return ValidationResult::invalid(format!("{} is required.", capitalize(field_name)));
    }

    match field_name {
        "email" if !email_pattern().is_match(value) => ValidationResult::invalid(INVALID_EMAIL),
        "name" if form_len(value) < MIN_NAME_LEN => {
            ValidationResult::invalid(NAME_TOO_SHORT)
        }
        "message" if form_len(value) < MIN_MESSAGE_LEN => {
            ValidationResult::invalid(MESSAGE_TOO_SHORT)
        }
        _ => ValidationResult::ok(),
    }
}

/// Upper-case the first character, leave the rest alone
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Per-field validation outcomes for one submission attempt, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    entries: Vec<(Field, ValidationResult)>,
}

impl FormState {
    /// Validate every field. Does not stop at the first failure, so the UI
    /// can surface all errors at once.
    pub fn validate_all(fields: &[Field]) -> Self {
        let entries = fields
            .iter()
            .map(|field| (field.clone(), field.validate()))
            .collect();
        Self { entries }
    }

    /// True iff every field is valid
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, result)| result.valid)
    }

    /// First invalid field in document order
    pub fn first_invalid(&self) -> Option<&Field> {
        self.entries
            .iter()
            .find(|(_, result)| !result.valid)
            .map(|(field, _)| field)
    }

    pub fn result_for(&self, id: &FieldId) -> Option<&ValidationResult> {
        self.entries
            .iter()
            .find(|(field, _)| &field.id == id)
            .map(|(_, result)| result)
    }

    /// Invalid fields with their messages
    pub fn errors(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.entries
            .iter()
            .filter(|(_, result)| !result.valid)
            .map(|(field, result)| (&field.id, result.message.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, ValidationResult)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Visual state of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Decoration {
    #[default]
    Neutral,
    Error,
    Valid,
}

impl Decoration {
    /// CSS class toggled on the input
    pub fn class(&self) -> &'static str {
        match self {
            Decoration::Neutral => "",
            Decoration::Error => "error",
            Decoration::Valid => "valid",
        }
    }
}

/// Announcement policy of a field's error region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AriaLive {
    #[default]
    Off,
    Polite,
}

impl AriaLive {
    pub fn as_str(&self) -> &'static str {
        match self {
            AriaLive::Off => "off",
            AriaLive::Polite => "polite",
        }
    }
}

/// What the shell renders for one field: decoration, message, live policy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldFeedback {
    pub decoration: Decoration,
    pub message: String,
    pub live: AriaLive,
}

impl FieldFeedback {
    /// Feedback after a blur or submit-time validation.
    ///
    /// Invalid results are announced politely; valid results silence the
    /// region.
    pub fn from_result(result: &ValidationResult) -> Self {
        if result.valid {
            Self {
                decoration: Decoration::Valid,
                message: String::new(),
                live: AriaLive::Off,
            }
        } else {
            Self {
                decoration: Decoration::Error,
                message: result.message.clone(),
                live: AriaLive::Polite,
            }
        }
    }

    /// Feedback while the user is typing: drops an error, keeps a valid mark.
    pub fn on_input(&self) -> Self {
        let decoration = match self.decoration {
            Decoration::Error => Decoration::Neutral,
            other => other,
        };
        Self {
            decoration,
            message: String::new(),
            live: AriaLive::Off,
        }
    }

    pub fn is_error(&self) -> bool {
        self.decoration == Decoration::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_required_for_any_field() {
        assert_eq!(
            validate("name", "   ").message,
            "Name is required."
        );
        assert_eq!(validate("email", "").message, "Email is required.");
        assert_eq!(validate("company", "\t\n").message, "Company is required.");
    }

    #[test]
    fn required_takes_priority_over_type_rules() {
        let result = validate("email", "  ");
        assert!(!result.valid);
        assert_eq!(result.message, "Email is required.");
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("phoneNumber"), "PhoneNumber");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn email_rules() {
        assert!(validate("email", "a@b.com").valid);
        assert!(validate("email", "  first.last@sub.example.org ").valid);

        let bad = validate("email", "not-an-email");
        assert!(!bad.valid);
        assert_eq!(bad.message, INVALID_EMAIL);

        assert!(!validate("email", "a@b").valid);
        assert!(!validate("email", "a b@c.com").valid);
        assert!(!validate("email", "a@@b.com").valid);
    }

    #[test]
    fn name_length() {
        let short = validate("name", "A");
        assert!(!short.valid);
        assert_eq!(short.message, NAME_TOO_SHORT);
        assert!(validate("name", "Al").valid);
        assert!(!validate("name", " A ").valid);
    }

    #[test]
    fn message_length() {
        let short = validate("message", "short");
        assert!(!short.valid);
        assert_eq!(short.message, MESSAGE_TOO_SHORT);
        assert!(validate("message", "0123456789").valid);
    }

    #[test]
    fn unknown_fields_only_need_content() {
        assert!(validate("subject", "x").valid);
        assert!(validate("Email", "nope").valid);
    }

    #[test]
    fn form_state_collects_every_error() {
        let fields = vec![
            Field::new("name", "A"),
            Field::new("email", "nope"),
            Field::new("message", "this one is long enough"),
        ];
        let state = FormState::validate_all(&fields);

        assert!(!state.is_valid());
        assert_eq!(state.len(), 3);
        assert_eq!(state.errors().count(), 2);
        assert_eq!(state.first_invalid().unwrap().id, FieldId::from("name"));
        assert!(state.result_for(&FieldId::from("message")).unwrap().valid);
    }

    #[test]
    fn feedback_from_results() {
        let bad = FieldFeedback::from_result(&validate("name", ""));
        assert_eq!(bad.decoration, Decoration::Error);
        assert_eq!(bad.live, AriaLive::Polite);
        assert_eq!(bad.message, "Name is required.");

        let good = FieldFeedback::from_result(&validate("name", "Ada"));
        assert_eq!(good.decoration, Decoration::Valid);
        assert_eq!(good.live, AriaLive::Off);
        assert!(good.message.is_empty());
    }

    #[test]
    fn typing_clears_error_but_keeps_valid() {
        let bad = FieldFeedback::from_result(&validate("name", ""));
        let typed = bad.on_input();
        assert_eq!(typed.decoration, Decoration::Neutral);
        assert!(typed.message.is_empty());
        assert_eq!(typed.live, AriaLive::Off);

        let good = FieldFeedback::from_result(&validate("name", "Ada"));
        assert_eq!(good.on_input().decoration, Decoration::Valid);
    }

    #[test]
    fn decoration_classes() {
        assert_eq!(Decoration::Neutral.class(), "");
        assert_eq!(Decoration::Error.class(), "error");
        assert_eq!(Decoration::Valid.class(), "valid");
        assert_eq!(AriaLive::Polite.as_str(), "polite");
    }
}
