//! Session extraction and the redirect to the sign-in page.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::body::MessageBody;
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::middleware::Next;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, error};

use crate::domain::auth::AdminSession;

/// Where unauthenticated requests are sent.
pub const LOGIN_PATH: &str = "/login";

/// Reads the admin session stored in the identity cookie.
///
/// A missing or unreadable session rejects the request with `401`, which
/// [`redirect_unauthorized`] turns into a redirect to the sign-in page.
impl FromRequest for AdminSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(session_from_request(req))
    }
}

fn session_from_request(req: &HttpRequest) -> Result<AdminSession, Error> {
    let identity = req
        .get_identity()
        .map_err(|_| error::ErrorUnauthorized("not signed in"))?;
    let id = identity.id().map_err(|err| {
        log::warn!("Unreadable identity: {err}");
        error::ErrorUnauthorized("not signed in")
    })?;
    let session: AdminSession = serde_json::from_str(&id).map_err(|err| {
        log::warn!("Stored session is not valid JSON: {err}");
        error::ErrorUnauthorized("not signed in")
    })?;
    if !session.is_admin() {
        return Err(error::ErrorUnauthorized("admin only"));
    }
    Ok(session)
}

/// Replaces `401` responses with a `303` to [`LOGIN_PATH`].
pub async fn redirect_unauthorized(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let response = next.call(req).await?;

    if response.status() != StatusCode::UNAUTHORIZED {
        return Ok(response.map_into_left_body());
    }

    let (request, _) = response.into_parts();
    let redirect = HttpResponse::SeeOther()
        .insert_header((header::LOCATION, LOGIN_PATH))
        .finish();
    Ok(ServiceResponse::new(request, redirect).map_into_right_body())
}
