use portfolio_models::contact::{
    ContactSubmissionInput, FieldInput, ValidationError, ValidationErrorKind,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Reported when the body is valid JSON but not an object.
pub const NOT_AN_OBJECT_ERROR: ValidationError = ValidationError {
    field: "",
    kind: ValidationErrorKind::InvalidType,
    message: "オブジェクト形式で送信してください",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactBodyError {
    /// The body is not JSON at all.
    Malformed,
    NotAnObject,
}

/// Parse a request body into an unvalidated submission.
///
/// Unknown members are ignored.
pub fn parse_contact_submission(body: &[u8]) -> Result<ContactSubmissionInput, ContactBodyError> {
    let value = serde_json::from_slice::<Value>(body).map_err(|_| ContactBodyError::Malformed)?;
    let Value::Object(mut object) = value else {
        return Err(ContactBodyError::NotAnObject);
    };

    let mut field = |key| field_input(&mut object, key);

    Ok(ContactSubmissionInput {
        name: field("name"),
        email: field("email"),
        company: field("company"),
        message: field("message"),
        deadline: field("deadline"),
        budget: field("budget"),
    })
}

fn field_input(object: &mut Map<String, Value>, key: &str) -> FieldInput {
    match object.remove(key) {
        None | Some(Value::Null) => FieldInput::Absent,
        Some(Value::String(text)) => FieldInput::Text(text),
        Some(_) => FieldInput::NotText,
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactResponse {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<ApiValidationError>>,
}

#[derive(Debug, Serialize)]
pub struct ApiValidationError {
    field: &'static str,
    message: &'static str,
}

impl ApiContactResponse {
    pub fn success(message: &'static str, id: String) -> Self {
        Self {
            success: true,
            message,
            id: Some(id),
            errors: None,
        }
    }

    pub fn invalid(message: &'static str, errors: Vec<ValidationError>) -> Self {
        Self {
            success: false,
            message,
            id: None,
            errors: Some(errors.into_iter().map(Into::into).collect()),
        }
    }

    pub fn failure(message: &'static str) -> Self {
        Self {
            success: false,
            message,
            id: None,
            errors: None,
        }
    }
}

impl From<ValidationError> for ApiValidationError {
    fn from(value: ValidationError) -> Self {
        Self {
            field: value.field,
            message: value.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_object() {
        let input = parse_contact_submission(
            r#"{"name":"山田太郎","email":"test@example.com","company":"","budget":100000}"#
                .as_bytes(),
        );

        assert_eq!(
            input,
            Ok(ContactSubmissionInput {
                name: "山田太郎".into(),
                email: "test@example.com".into(),
                company: "".into(),
                budget: FieldInput::NotText,
                ..Default::default()
            })
        );
    }

    #[test]
    fn parse_malformed() {
        for body in ["", "{\"name\":", "name=x", "{'name': '山田'}"] {
            assert_eq!(
                parse_contact_submission(body.as_bytes()),
                Err(ContactBodyError::Malformed),
                "{body}"
            );
        }
    }

    #[test]
    fn parse_not_an_object() {
        for body in ["[1,2,3]", "null", "42", "\"hi\"", "true"] {
            assert_eq!(
                parse_contact_submission(body.as_bytes()),
                Err(ContactBodyError::NotAnObject),
                "{body}"
            );
        }
    }
}
