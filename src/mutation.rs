//! Create/update/delete requests followed by cache invalidation.

use std::future::Future;

use serde::Serialize;

use crate::cache::{Collection, QueryCache};
use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::variant::Variant;
use crate::gateway::errors::GatewayResult;

/// Values a successful mutation may hand back.
pub trait MutationResponse {
    /// Identifier assigned or echoed by the backend, if any.
    fn server_id(&self) -> Option<String> {
        None
    }
}

impl MutationResponse for () {}

impl MutationResponse for i32 {
    fn server_id(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl MutationResponse for Category {
    fn server_id(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}

impl MutationResponse for Product {
    fn server_id(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}

impl MutationResponse for Variant {
    fn server_id(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}

impl<T: MutationResponse> MutationResponse for Option<T> {
    fn server_id(&self) -> Option<String> {
        self.as_ref().and_then(MutationResponse::server_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MutationOutcome {
    Succeeded { id: Option<String> },
    Failed { message: String },
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MutationOutcome::Succeeded { .. })
    }
}

/// Wraps one mutation request and invalidates the collections it touches.
pub struct MutationBridge<'a> {
    cache: &'a QueryCache,
    invalidates: &'a [Collection],
    failure_message: &'a str,
}

impl<'a> MutationBridge<'a> {
    /// `failure_message` is shown when the backend gives no message of its own.
    pub fn new(
        cache: &'a QueryCache,
        invalidates: &'a [Collection],
        failure_message: &'a str,
    ) -> Self {
        Self {
            cache,
            invalidates,
            failure_message,
        }
    }

    /// Awaits `request` once. On success every associated collection is
    /// marked stale; on failure the cache is left alone.
    pub async fn submit<T, Fut>(&self, request: Fut) -> MutationOutcome
    where
        T: MutationResponse,
        Fut: Future<Output = GatewayResult<T>>,
    {
        match request.await {
            Ok(response) => {
                for collection in self.invalidates {
                    let marked = self.cache.invalidate(*collection);
                    log::debug!("invalidated {marked} {} entries", collection.as_str());
                }
                MutationOutcome::Succeeded {
                    id: response.server_id(),
                }
            }
            Err(err) => {
                log::warn!("mutation failed: {err}");
                MutationOutcome::Failed {
                    message: err.user_message(self.failure_message),
                }
            }
        }
    }
}
