use async_trait::async_trait;

use crate::domain::auth::{AdminSession, Credentials};
use crate::gateway::AuthGateway;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::http::HttpGateway;
use crate::models::auth::LoginResponse;

#[async_trait]
impl AuthGateway for HttpGateway {
    async fn login(&self, credentials: &Credentials) -> GatewayResult<AdminSession> {
        let response: LoginResponse = self.post_json("auth/admin-login", credentials).await?;
        AdminSession::try_from(response)
            .map_err(|e| GatewayError::InvalidResponse(format!("login response: {e}")))
    }
}
