//! reqwest client bound to the backend base URL and, per request, to the
//! admin's bearer token.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::auth::AdminSession;
use crate::domain::upload::ImageUpload;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::models::config::ServerConfig;

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpGateway {
    pub fn new(config: &ServerConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Copy of this gateway that sends `session`'s token.
    pub fn authorized(&self, session: &AdminSession) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(session.token.clone()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::handle_response(response).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> GatewayResult<T> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::handle_response(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::handle_response(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<()> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::handle_empty(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> GatewayResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::handle_empty(response).await
    }

    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: MultipartBody,
    ) -> GatewayResult<T> {
        let response = self
            .request(method, path)
            .multipart(body.into_form()?)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub(crate) async fn send_multipart_empty(
        &self,
        method: Method,
        path: &str,
        body: MultipartBody,
    ) -> GatewayResult<()> {
        let response = self
            .request(method, path)
            .multipart(body.into_form()?)
            .send()
            .await?;
        Self::handle_empty(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> GatewayResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(status_error(status, &text));
        }

        let text = response.text().await?;
        // Some endpoints answer 200 with an empty body.
        let text = if text.trim().is_empty() { "null" } else { &text };
        serde_json::from_str(text).map_err(Into::into)
    }

    async fn handle_empty(response: reqwest::Response) -> GatewayResult<()> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(status_error(status, &text));
        }

        Ok(())
    }
}

/// Pulls `message` (or `msg`) out of a JSON error body, else the raw text.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "msg", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
        return String::new();
    }
    body.trim().to_string()
}

pub(crate) fn status_error(status: StatusCode, body: &str) -> GatewayError {
    let message = error_message(body);
    match status {
        StatusCode::UNAUTHORIZED => GatewayError::Unauthorized,
        StatusCode::FORBIDDEN => GatewayError::Forbidden(message),
        StatusCode::NOT_FOUND => GatewayError::NotFound,
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            GatewayError::Rejected(message)
        }
        _ => GatewayError::Backend(message),
    }
}

/// Text fields and image parts of a multipart request, kept inspectable
/// until sent.
#[derive(Debug, Default)]
pub struct MultipartBody {
    fields: Vec<(&'static str, String)>,
    images: Vec<(&'static str, ImageUpload)>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn json<V: Serialize + ?Sized>(self, name: &'static str, value: &V) -> GatewayResult<Self> {
        let encoded = serde_json::to_string(value)?;
        Ok(self.text(name, encoded))
    }

    pub fn image(mut self, name: &'static str, image: ImageUpload) -> Self {
        self.images.push((name, image));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn image_count(&self, name: &str) -> usize {
        self.images.iter().filter(|(key, _)| *key == name).count()
    }

    fn into_form(self) -> GatewayResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for (name, image) in self.images {
            let file_name = image.file_name().to_string();
            let content_type = image.content_type().to_string();
            let part = Part::bytes(image.into_bytes())
                .file_name(file_name)
                .mime_str(&content_type)?;
            form = form.part(name, part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_message_then_msg() {
        assert_eq!(error_message(r#"{"message": "Invalid"}"#), "Invalid");
        assert_eq!(error_message(r#"{"msg": "Wrong password"}"#), "Wrong password");
        assert_eq!(error_message(r#"{"ok": false}"#), "");
        assert_eq!(error_message(" Bad Gateway "), "Bad Gateway");
    }

    #[test]
    fn statuses_map_to_error_kinds() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, ""),
            GatewayError::Unauthorized
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, ""),
            GatewayError::NotFound
        ));
        match status_error(StatusCode::BAD_REQUEST, r#"{"message": "Title taken"}"#) {
            GatewayError::Rejected(message) => assert_eq!(message, "Title taken"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            GatewayError::Backend(_)
        ));
    }

    #[test]
    fn multipart_body_keeps_fields_and_images() {
        let image = ImageUpload::new("a.png", "image/png", vec![1, 2]).unwrap();
        let body = MultipartBody::new()
            .text("title", "Shirt")
            .json("existingImages", &["a.jpg"])
            .unwrap()
            .image("images", image.clone())
            .image("images", image);
        assert_eq!(body.field("title"), Some("Shirt"));
        assert_eq!(body.field("existingImages"), Some(r#"["a.jpg"]"#));
        assert_eq!(body.image_count("images"), 2);
        assert!(body.into_form().is_ok());
    }

    #[test]
    fn authorized_copies_token() {
        let config = ServerConfig {
            domain: "localhost".to_string(),
            address: "127.0.0.1".to_string(),
            port: 8080,
            templates_dir: "templates/**/*".to_string(),
            secret: "x".repeat(64),
            api_base_url: "http://localhost:5000/api/".to_string(),
            api_timeout_secs: 5,
            cache_capacity: 8,
        };
        let gateway = HttpGateway::new(&config).unwrap();
        assert!(gateway.token().is_none());
        assert_eq!(gateway.url("/products/"), "http://localhost:5000/api/products/");

        let session: AdminSession = serde_json::from_str(
            r#"{"token": "abc", "user": {"id": 1, "name": "A",
                "email": "a@example.com", "role": "ADMIN"}}"#,
        )
        .unwrap();
        assert_eq!(gateway.authorized(&session).token(), Some("abc"));
    }
}
