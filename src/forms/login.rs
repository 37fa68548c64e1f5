use serde::Deserialize;
use validator::Validate;

use crate::domain::auth::Credentials;
use crate::domain::types::Email;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Admin sign-in form.
pub struct LoginForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl TryFrom<LoginForm> for Credentials {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            email: Email::new(form.email)?,
            password: form.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_becomes_credentials() {
        let credentials = Credentials::try_from(LoginForm {
            email: "Admin@Shop.com".to_string(),
            password: "secret".to_string(),
        })
        .unwrap();
        assert_eq!(credentials.email.as_str(), "admin@shop.com");
    }

    #[test]
    fn empty_password_is_rejected() {
        let err = Credentials::try_from(LoginForm {
            email: "admin@shop.com".to_string(),
            password: String::new(),
        })
        .unwrap_err();
        assert_eq!(err.user_message(), "Password is required");
    }
}
