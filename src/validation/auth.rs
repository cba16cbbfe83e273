use crate::error::{AppError, Result};

/// The minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validates that both login credential fields are present.
///
/// # Arguments
///
/// * `email` - The submitted email address.
/// * `password` - The submitted password.
///
/// # Returns
///
/// A `Result<()>` indicating whether both fields are present.
pub fn validate_credentials_present(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "E-mail e senha são obrigatórios".to_string(),
        ));
    }

    Ok(())
}

/// Validates an email address.
///
/// # Arguments
///
/// * `email` - The email address to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the email is plausible.
pub fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() {
        return Err(AppError::Validation("E-mail é obrigatório".to_string()));
    }

    if email.len() > 255 {
        return Err(AppError::Validation(
            "E-mail must be at most 255 characters".to_string(),
        ));
    }

    if !email.contains('@') {
        return Err(AppError::Validation("E-mail inválido".to_string()));
    }

    Ok(())
}

/// Validates a password.
///
/// # Arguments
///
/// * `password` - The password to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the password is valid.
pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }

    if password.len() > 128 {
        return Err(AppError::Validation(
            "Password must be at most 128 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_rejected() {
        assert!(validate_credentials_present("", "secret").is_err());
        assert!(validate_credentials_present("user@example.com", "").is_err());
        assert!(validate_credentials_present("   ", "secret").is_err());
        assert!(validate_credentials_present("user@example.com", "secret").is_ok());
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn implausible_emails_are_rejected() {
        assert!(validate_email("user.example.com").is_err());
        assert!(validate_email("user@example.com").is_ok());
    }
}
