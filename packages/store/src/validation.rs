//! Client-side form checks. These run before any request is sent; the
//! services validate again.

use thiserror::Error;

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A form value the client refuses to submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid weight")]
    InvalidWeight,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("Full name is required")]
    MissingName,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Parse a weight input. Accepts surrounding whitespace; rejects empty,
/// non-numeric, non-finite and non-positive values.
pub fn parse_weight(input: &str) -> Result<f64, ValidationError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidWeight)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidWeight);
    }
    Ok(value)
}

/// Check the login form.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(())
}

/// Registration form contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Check the registration form: name, email, matching passwords, then
/// password length.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    if form.full_name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    let email = form.email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight(" 181.5 "), Ok(181.5));
        assert_eq!(parse_weight("150"), Ok(150.0));
        assert_eq!(parse_weight(""), Err(ValidationError::InvalidWeight));
        assert_eq!(parse_weight("abc"), Err(ValidationError::InvalidWeight));
        assert_eq!(parse_weight("0"), Err(ValidationError::InvalidWeight));
        assert_eq!(parse_weight("-3"), Err(ValidationError::InvalidWeight));
        assert_eq!(parse_weight("NaN"), Err(ValidationError::InvalidWeight));
        assert_eq!(parse_weight("inf"), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(validate_login("  ", "pw"), Err(ValidationError::MissingEmail));
        assert_eq!(
            validate_login("a@b.c", ""),
            Err(ValidationError::MissingPassword)
        );
        assert!(validate_login("a@b.c", "pw").is_ok());
    }

    #[test]
    fn test_mismatch_reported_before_length() {
        assert_eq!(
            validate_registration(&form("abc", "abd")),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_registration(&form("abc", "abc")),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_registration(&form("abcdef", "abcdef")).is_ok());
    }

    #[test]
    fn test_registration_messages() {
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_registration_requires_name_and_email() {
        let mut f = form("abcdef", "abcdef");
        f.full_name = " ".to_string();
        assert_eq!(validate_registration(&f), Err(ValidationError::MissingName));

        let mut f = form("abcdef", "abcdef");
        f.email = "not-an-email".to_string();
        assert_eq!(validate_registration(&f), Err(ValidationError::InvalidEmail));
    }
}
