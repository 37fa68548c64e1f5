use crate::domain::auth::{AdminSession, Credentials};
use crate::forms::login::LoginForm;
use crate::gateway::AuthGateway;
use crate::gateway::errors::GatewayError;
use crate::services::{ServiceError, ServiceResult};

/// Validates the login form, signs in against the backend and accepts only
/// admin accounts.
pub async fn login<G>(gateway: &G, form: LoginForm) -> ServiceResult<AdminSession>
where
    G: AuthGateway + ?Sized,
{
    let credentials = Credentials::try_from(form)?;

    let session = gateway.login(&credentials).await.map_err(|err| {
        log::warn!("Login failed for {}: {err}", credentials.email);
        match err {
            GatewayError::Unauthorized => {
                ServiceError::Form("Invalid email or password".to_string())
            }
            other => ServiceError::Form(other.user_message("Login failed")),
        }
    })?;

    if !session.is_admin() {
        log::warn!("Rejected non-admin login for {}", credentials.email);
        return Err(ServiceError::Form("Access denied: admin only".to_string()));
    }

    log::info!("Admin {} signed in", session.user.email);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::MockGateway;
    use crate::services::test_support::session;

    fn form(password: &str) -> LoginForm {
        LoginForm {
            email: "admin@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn admin_login_returns_session() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_login()
            .withf(|credentials| credentials.email.as_str() == "admin@example.com")
            .returning(|_| Ok(session("ADMIN")));

        let session = login(&gateway, form("secret")).await.unwrap();
        assert_eq!(session.token, "token");
    }

    #[actix_web::test]
    async fn non_admin_is_rejected() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_login()
            .returning(|_| Ok(session("CUSTOMER")));

        let err = login(&gateway, form("secret")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Form(message) if message.contains("admin")));
    }

    #[actix_web::test]
    async fn backend_message_is_shown() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_login()
            .returning(|_| Err(GatewayError::Rejected("Wrong password".to_string())));

        let err = login(&gateway, form("secret")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Form(message) if message == "Wrong password"));
    }

    #[actix_web::test]
    async fn invalid_form_never_reaches_backend() {
        let mut gateway = MockGateway::new();
        gateway.expect_login().never();

        assert!(matches!(
            login(&gateway, form("")).await,
            Err(ServiceError::Form(_))
        ));
    }
}
