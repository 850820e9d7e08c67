use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;

use crate::app::errors::ApiError;
use crate::app::routes;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "Hello": "World" }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Fallback for unrouted paths.
///
/// If toggling the trailing slash lands on a route, answer `307` there (query
/// string preserved, any method); otherwise a JSON 404.
pub async fn not_found(uri: Uri) -> Response {
    match slash_redirect_target(&uri) {
        Some(target) => Redirect::temporary(&target).into_response(),
        None => ApiError::NotFound(uri.path().to_string()).into_response(),
    }
}

fn slash_redirect_target(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path == "/" {
        return None;
    }
    let toggled = match path.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => format!("{path}/"),
    };
    if !routes::is_routed(&toggled) {
        return None;
    }
    Some(match uri.query() {
        Some(query) => format!("{toggled}?{query}"),
        None => toggled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(raw: &str) -> Option<String> {
        slash_redirect_target(&raw.parse::<Uri>().unwrap())
    }

    #[test]
    fn adds_missing_slash_before_query() {
        assert_eq!(target("/search?q=foo").as_deref(), Some("/search/?q=foo"));
        assert_eq!(target("/items").as_deref(), Some("/items/"));
    }

    #[test]
    fn drops_extra_slash() {
        assert_eq!(target("/items/42/").as_deref(), Some("/items/42"));
        assert_eq!(target("/health/").as_deref(), Some("/health"));
    }

    #[test]
    fn no_redirect_when_neither_form_is_routed() {
        assert_eq!(target("/nope"), None);
        assert_eq!(target("/nope/"), None);
        assert_eq!(target("/items/42/extra"), None);
    }
}
