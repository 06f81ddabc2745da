//! Actor extraction.
//!
//! Every `/api` operation acts on behalf of an explicit user carried in the
//! `x-user-id` header. There is no ambient session: handlers receive the
//! actor as an argument and pass it down, so ownership checks always know
//! who is asking.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::api_error::ApiError;

pub const ACTOR_HEADER: &str = "x-user-id";

/// The authenticated user an operation runs as.
#[derive(Debug, Clone)]
pub struct Actor(pub String);

impl Actor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        match value {
            Some(user_id) => Ok(Self(user_id.to_owned())),
            None => Err(ApiError::Unauthorized(format!("missing {ACTOR_HEADER} header"))),
        }
    }
}
