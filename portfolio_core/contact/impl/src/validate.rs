use std::sync::LazyLock;

use portfolio_models::{
    contact::{
        ContactMessage, ContactName, ContactSubmission, ContactSubmissionInput, FieldInput,
        ValidationError, ValidationErrorKind,
    },
    email_address::EmailAddress,
};
use regex::Regex;

pub const NAME_RULE: ValidationError = ValidationError {
    field: "name",
    kind: ValidationErrorKind::RequiredField,
    message: "お名前を入力してください",
};

pub const EMAIL_RULE: ValidationError = ValidationError {
    field: "email",
    kind: ValidationErrorKind::InvalidFormat,
    message: "有効なメールアドレスを入力してください",
};

pub const MESSAGE_RULE: ValidationError = ValidationError {
    field: "message",
    kind: ValidationErrorKind::TooShort,
    message: "お問い合わせ内容は10文字以上で入力してください",
};

/// Dot-atom local part and a domain of hostname labels ending in an
/// alphabetic top-level domain of at least two letters.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

const INVALID_TYPE_MESSAGE: &str = "文字列で入力してください";

/// Validate every field of the submission and collect all failures.
///
/// Required fields that are not strings fail the same way as missing ones.
/// Optional fields that are empty strings are treated as absent.
pub fn validate(input: ContactSubmissionInput) -> Result<ContactSubmission, Vec<ValidationError>> {
    let ContactSubmissionInput {
        name,
        email,
        company,
        message,
        deadline,
        budget,
    } = input;

    let mut errors = Vec::new();

    let name = required(&mut errors, NAME_RULE, name, |name| {
        ContactName::try_new(name).ok()
    });
    let email = required(&mut errors, EMAIL_RULE, email, parse_email);
    let company = optional(&mut errors, "company", company);
    let message = required(&mut errors, MESSAGE_RULE, message, |message| {
        ContactMessage::try_new(message).ok()
    });
    let deadline = optional(&mut errors, "deadline", deadline);
    let budget = optional(&mut errors, "budget", budget);

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(ContactSubmission {
            name,
            email,
            company,
            message,
            deadline,
            budget,
        }),
        _ => Err(errors),
    }
}

fn parse_email(email: String) -> Option<EmailAddress> {
    if email.starts_with('.') || email.contains("..") || !EMAIL_REGEX.is_match(&email) {
        return None;
    }
    email.parse().ok()
}

fn required<T>(
    errors: &mut Vec<ValidationError>,
    rule: ValidationError,
    input: FieldInput,
    parse: impl FnOnce(String) -> Option<T>,
) -> Option<T> {
    let value = input.into_text().and_then(parse);
    if value.is_none() {
        errors.push(rule);
    }
    value
}

fn optional(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    input: FieldInput,
) -> Option<String> {
    match input {
        FieldInput::Absent => None,
        FieldInput::Text(text) => Some(text).filter(|text| !text.is_empty()),
        FieldInput::NotText => {
            errors.push(ValidationError {
                field,
                kind: ValidationErrorKind::InvalidType,
                message: INVALID_TYPE_MESSAGE,
            });
            None
        }
    }
}
