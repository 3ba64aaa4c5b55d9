//! Authentication middleware and extractor for axum.
//!
//! The middleware validates Bearer tokens through the `SessionValidator`
//! port, keeping it implementation-agnostic. It is layered only over the
//! routes that require a session; open endpoints never inspect the header,
//! so a stale token attached by the client cannot break them. A request
//! with no Authorization header passes through untouched and is rejected
//! with 401 by the [`RequireAuth`] extractor. A present header that is not
//! a valid bearer token (wrong scheme, bad signature, expired) is rejected
//! here with 403, before any handler runs.
//!
//! ```text
//! Request -> auth_middleware -> injects Identity into extensions
//!                                      |
//!                              Handler -> RequireAuth reads extensions
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, Identity};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Validates a Bearer token when one is presented.
///
/// Expects the token in the `Authorization` header with `Bearer` prefix.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    match header {
        Some(header) => {
            let verified = match header.strip_prefix("Bearer ") {
                Some(token) => validator.validate(token).await,
                // A present header with another scheme can never verify.
                None => Err(AuthError::InvalidAuth),
            };
            match verified {
                Ok(identity) => {
                    request.extensions_mut().insert(identity);
                    next.run(request).await
                }
                Err(_) => (
                    StatusCode::FORBIDDEN,
                    Json(serde_json::json!({ "message": "Forbidden" })),
                )
                    .into_response(),
            }
        }
        None => {
            // No header at all - continue without a session.
            // Handlers use RequireAuth to enforce authentication.
            next.run(request).await
        }
    }
}

/// Extractor that requires a verified identity.
///
/// Returns 401 when the auth middleware injected no identity (no bearer
/// header was presented).
#[derive(Debug, Clone)]
pub struct RequireAuth(pub Identity);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<Identity>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No bearer token was presented.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let AuthRejection::Unauthenticated = self;
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "message": "unAuthorized" })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::JwtTokenService;
    use chrono::Duration;
    use secrecy::SecretString;

    fn validator() -> Arc<JwtTokenService> {
        Arc::new(JwtTokenService::new(
            SecretString::new("middleware-test-secret".to_string()),
            Duration::days(1),
        ))
    }

    #[tokio::test]
    async fn validator_returns_identity_for_valid_token() {
        use crate::ports::{SessionValidator, TokenIssuer};

        let service = validator();
        let token = service.issue_token("test@example.com").unwrap();

        let identity = service.validate(&token).await.unwrap();
        assert_eq!(identity.email, "test@example.com");
    }

    #[tokio::test]
    async fn require_auth_extracts_identity_from_extensions() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let mut request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        request
            .extensions_mut()
            .insert(Identity::new("test@example.com"));

        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAuth, AuthRejection> =
            RequireAuth::from_request_parts(&mut parts, &()).await;

        assert!(result.is_ok());
        let RequireAuth(identity) = result.unwrap();
        assert_eq!(identity.email, "test@example.com");
    }

    #[tokio::test]
    async fn require_auth_fails_without_identity() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAuth, AuthRejection> =
            RequireAuth::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }

    #[test]
    fn auth_rejection_returns_401() {
        let response = AuthRejection::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bearer_token_extraction() {
        let header_value = "Bearer my-secret-token";
        assert_eq!(
            header_value.strip_prefix("Bearer "),
            Some("my-secret-token")
        );

        let header_value = "Basic dXNlcjpwYXNz";
        assert_eq!(header_value.strip_prefix("Bearer "), None);
    }
}
