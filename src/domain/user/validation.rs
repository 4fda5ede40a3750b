//! Field-level validation rules for user input

use serde::Serialize;
use validator::ValidateEmail;

const MIN_NAME_LENGTH: usize = 1;
const MAX_NAME_LENGTH: usize = 30;
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 20;

/// A single failed field rule, reported back to the client in the
/// `errors` list of a failed envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate the input for creating a user.
///
/// Rules:
/// - name: non-empty, 1 to 30 characters
/// - email: must match email syntax
/// - password: non-empty, 8 to 20 characters
pub fn validate_new_user(name: &str, email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(FieldError::new("name", "Name is empty"));
    }
    // Bounds are in characters, not bytes
    let name_length = name.chars().count();
    if name_length < MIN_NAME_LENGTH || name_length > MAX_NAME_LENGTH {
        errors.push(FieldError::new(
            "name",
            "The length of name is between 1 ~ 30",
        ));
    }

    if !email.validate_email() {
        errors.push(FieldError::new("email", "Invalid email format"));
    }

    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is empty"));
    }
    let password_length = password.chars().count();
    if password_length < MIN_PASSWORD_LENGTH || password_length > MAX_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            "The length of password is between 8 ~ 20",
        ));
    }

    errors
}

/// Validate the input for changing a password.
///
/// Rules:
/// - currentPassword: non-empty, 8 to 20 characters
/// - newPassword: non-empty, 8 to 20 characters
/// - newPassword must differ from currentPassword
pub fn validate_password_change(current_password: &str, new_password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if current_password.is_empty() {
        errors.push(FieldError::new(
            "currentPassword",
            "Current password is empty",
        ));
    }
    let current_length = current_password.chars().count();
    if current_length < MIN_PASSWORD_LENGTH || current_length > MAX_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "currentPassword",
            "The length of current password is between 8 ~ 20",
        ));
    }

    if new_password.is_empty() {
        errors.push(FieldError::new("newPassword", "New password is empty"));
    }
    let new_length = new_password.chars().count();
    if new_length < MIN_PASSWORD_LENGTH || new_length > MAX_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "newPassword",
            "The length of new password is between 8 ~ 20",
        ));
    }

    if new_password == current_password {
        errors.push(FieldError::new(
            "newPassword",
            "The new password is the same as the current password",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_new_user() {
        let errors = validate_new_user("Test User", "test@example.com", "secret123");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_name() {
        let errors = validate_new_user("", "test@example.com", "secret123");
        assert!(errors.iter().any(|e| e.message == "Name is empty"));
        assert!(errors
            .iter()
            .any(|e| e.message == "The length of name is between 1 ~ 30"));
    }

    #[test]
    fn test_name_too_long() {
        let name = "a".repeat(31);
        let errors = validate_new_user(&name, "test@example.com", "secret123");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_invalid_email() {
        let errors = validate_new_user("Test", "not-an-email", "secret123");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Invalid email format");
    }

    #[test]
    fn test_password_bounds() {
        // 7 chars: too short
        assert!(!validate_new_user("Test", "t@example.com", "1234567").is_empty());
        // 8 and 20 chars: accepted
        assert!(validate_new_user("Test", "t@example.com", "12345678").is_empty());
        assert!(validate_new_user("Test", "t@example.com", &"a".repeat(20)).is_empty());
        // 21 chars: too long
        assert!(!validate_new_user("Test", "t@example.com", &"a".repeat(21)).is_empty());
    }

    #[test]
    fn test_multibyte_name_counted_in_characters() {
        // 12 characters, 36 bytes; must pass the 30-character bound
        let errors = validate_new_user("東京都千代田区丸の内一丁", "t@example.com", "secret123");
        assert!(errors.is_empty());

        // 31 characters is still too long
        let name = "あ".repeat(31);
        let errors = validate_new_user(&name, "t@example.com", "secret123");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_multibyte_password_counted_in_characters() {
        // 8 characters, 24 bytes; must pass the 8-character minimum
        let password = "ぱ".repeat(8);
        assert!(validate_new_user("Test", "t@example.com", &password).is_empty());
        assert!(validate_password_change(&password, "secret123").is_empty());

        // 21 characters is too long regardless of encoding
        let password = "ぱ".repeat(21);
        assert!(!validate_new_user("Test", "t@example.com", &password).is_empty());
    }

    #[test]
    fn test_password_change_same_password() {
        let errors = validate_password_change("secret123", "secret123");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "The new password is the same as the current password"
        );
    }

    #[test]
    fn test_password_change_valid() {
        let errors = validate_password_change("secret123", "secret456");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_password_change_empty_fields() {
        let errors = validate_password_change("", "");
        assert!(errors
            .iter()
            .any(|e| e.message == "Current password is empty"));
        assert!(errors.iter().any(|e| e.message == "New password is empty"));
        // Empty new == empty current also trips the must-differ rule
        assert!(errors
            .iter()
            .any(|e| e.message == "The new password is the same as the current password"));
    }
}
