use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Registration payload.
///
/// Presence-only contract: all three fields must be present and be
/// strings, which deserialization already enforces. No format or length
/// rules beyond that.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    #[schema(example = "password123")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_payload_passes_validation() {
        let req = CreateUserRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn presence_is_the_only_requirement() {
        // Fields only have to exist; content is not constrained.
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name": "", "email": "", "password": ""}"#)
                .expect("Empty strings are still present");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn missing_field_fails_deserialization() {
        // Absent required fields are rejected at deserialization time,
        // before validation runs.
        let result: Result<CreateUserRequest, _> = serde_json::from_str(
            r#"{"name": "Bob Smith", "email": "bob@example.com"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn non_string_field_fails_deserialization() {
        let result: Result<CreateUserRequest, _> = serde_json::from_str(
            r#"{"name": "Bob Smith", "email": "bob@example.com", "password": 123}"#,
        );
        assert!(result.is_err());
    }
}
