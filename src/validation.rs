//! Form validation for the Login, Sign Up and password reset forms.
//!
//! Validators only read the form snapshot; they never touch screen state.
//! Checks run in a fixed order and the first failure wins.

use crate::constants::{
    MSG_ALL_FIELDS_REQUIRED, MSG_LOGIN_REQUIRED, MSG_PASSWORD_MISMATCH,
    MSG_RESET_EMAIL_REQUIRED, MSG_TERMS_REQUIRED,
};
use crate::models::ApiMessage;

/// Reasons a form submission is rejected before any call is made
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    LoginFieldsRequired,
    AllFieldsRequired,
    PasswordMismatch,
    TermsNotAccepted,
    ResetEmailRequired,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::LoginFieldsRequired => MSG_LOGIN_REQUIRED,
            ValidationError::AllFieldsRequired => MSG_ALL_FIELDS_REQUIRED,
            ValidationError::PasswordMismatch => MSG_PASSWORD_MISMATCH,
            ValidationError::TermsNotAccepted => MSG_TERMS_REQUIRED,
            ValidationError::ResetEmailRequired => MSG_RESET_EMAIL_REQUIRED,
        }
    }

    pub fn to_message(self) -> ApiMessage {
        ApiMessage::error(self.message())
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if is_blank(email) || is_blank(password) {
        return Err(ValidationError::LoginFieldsRequired);
    }
    Ok(())
}

/// Sign Up checks: emptiness, then password match, then terms.
pub fn validate_sign_up(
    full_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    agreed_to_terms: bool,
) -> Result<(), ValidationError> {
    if [full_name, email, password, confirm_password]
        .iter()
        .any(|field| is_blank(field))
    {
        return Err(ValidationError::AllFieldsRequired);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !agreed_to_terms {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(())
}

/// Only an empty address is rejected; whitespace goes through to the gateway.
pub fn validate_reset_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::ResetEmailRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(validate_login("", "secret"), Err(ValidationError::LoginFieldsRequired));
        assert_eq!(validate_login("a@b.c", "   "), Err(ValidationError::LoginFieldsRequired));
        assert_eq!(validate_login(" \t", "\n"), Err(ValidationError::LoginFieldsRequired));
        assert_eq!(validate_login("a@b.c", "secret"), Ok(()));
    }

    #[test]
    fn test_login_message_text() {
        let err = validate_login("", "").unwrap_err();
        assert_eq!(err.message(), "Email and password are required.");
    }

    #[test]
    fn test_sign_up_empty_field_checked_first() {
        let err = validate_sign_up("Ada", "", "one", "two", false).unwrap_err();
        assert_eq!(err, ValidationError::AllFieldsRequired);
        assert_eq!(err.message(), "All fields are required.");
    }

    #[test]
    fn test_sign_up_mismatch_wins_over_terms() {
        let err = validate_sign_up("Ada", "ada@example.com", "one", "two", false).unwrap_err();
        assert_eq!(err.message(), "Passwords do not match.");
    }

    #[test]
    fn test_sign_up_terms_required() {
        let err = validate_sign_up("Ada", "ada@example.com", "pw", "pw", false).unwrap_err();
        assert_eq!(err.message(), "You must agree to the Terms & Conditions.");
        assert_eq!(validate_sign_up("Ada", "ada@example.com", "pw", "pw", true), Ok(()));
    }

    #[test]
    fn test_sign_up_passwords_compared_untrimmed() {
        let err = validate_sign_up("Ada", "ada@example.com", "pw ", "pw", true).unwrap_err();
        assert_eq!(err, ValidationError::PasswordMismatch);
    }

    #[test]
    fn test_reset_email_required() {
        assert_eq!(validate_reset_email(""), Err(ValidationError::ResetEmailRequired));
        assert_eq!(validate_reset_email("ada@example.com"), Ok(()));
    }

    #[test]
    fn test_reset_email_whitespace_is_not_empty() {
        assert_eq!(validate_reset_email("  "), Ok(()));
    }
}
