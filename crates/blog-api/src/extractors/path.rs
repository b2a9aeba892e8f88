//! Path parameter extractors
//!
//! A segment that is not a UUID cannot name an existing resource, so it is
//! answered with 404 instead of 400.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::response::ApiError;

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::not_found(format!("no resource with id '{raw}'")))
}

/// Single UUID path parameter
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::not_found(e.to_string()))?;

        Ok(Self(parse_id(&raw)?))
    }
}

/// Two UUID path parameters, in route order
#[derive(Debug, Clone, Copy)]
pub struct IdPairPath(pub Uuid, pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for IdPairPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((first, second)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::not_found(e.to_string()))?;

        Ok(Self(parse_id(&first)?, parse_id(&second)?))
    }
}
