//! Validating extractors.
//!
//! Each one rejects with [`ApiError`] so every malformed request gets the same
//! `422` JSON body, whichever part of the request was wrong.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header, request::Parts, HeaderMap},
};
use serde::de::DeserializeOwned;

use itemdesk_core::{Item, ItemId};

use crate::app::errors::{ApiError, Location};

/// The `{item_id}` path segment, parsed as an integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ItemIdPath(pub ItemId);

#[async_trait]
impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::path(e.body_text()))?;
        let id = raw
            .parse::<ItemId>()
            .map_err(|e| ApiError::from_domain(Location::Path, e))?;
        Ok(Self(id))
    }
}

/// Query string decoded into `T`.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri).map_err(|e| ApiError::query(e.body_text()))?;
        Ok(Self(value))
    }
}

/// A JSON request body decoded and validated as an [`Item`].
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBody(pub Item);

#[async_trait]
impl<S> FromRequest<S> for ItemBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !accepts_json_body(req.headers()) {
            return Err(ApiError::body("expected request with `Content-Type: application/json`"));
        }
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::body(e.body_text()))?;
        let item = Item::from_json(&bytes).map_err(|e| ApiError::from_domain(Location::Body, e))?;
        Ok(Self(item))
    }
}

/// No `Content-Type` at all, `application/json`, or any `application/*+json`
/// (parameters ignored). A missing header still means the body is parsed as JSON.
fn accepts_json_body(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn accepts_json_content_types() {
        assert!(accepts_json_body(&headers_with("application/json")));
        assert!(accepts_json_body(&headers_with("application/json; charset=utf-8")));
        assert!(accepts_json_body(&headers_with("Application/JSON")));
        assert!(accepts_json_body(&headers_with("application/merge-patch+json")));
    }

    #[test]
    fn missing_content_type_is_parsed_as_json() {
        assert!(accepts_json_body(&HeaderMap::new()));
    }

    #[test]
    fn rejects_other_content_types() {
        assert!(!accepts_json_body(&headers_with("text/plain")));
        assert!(!accepts_json_body(&headers_with("text/json")));
        assert!(!accepts_json_body(&headers_with("application/x-www-form-urlencoded")));
    }
}
