//! API error type mapping domain failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode};

/// Error returned by HTTP handlers.
///
/// Unexpected store or provider failures become a generic server-error
/// response: the request aborts, the process does not.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::BookingNotFound | ErrorCode::UserNotFound | ErrorCode::DoctorNotFound => {
                StatusCode::NOT_FOUND
            }
            ErrorCode::DatabaseError
            | ErrorCode::ExternalServiceError
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let code = match err {
            AuthError::MissingAuth => ErrorCode::Unauthorized,
            AuthError::InvalidAuth => ErrorCode::Forbidden,
            AuthError::Signing(_) => ErrorCode::InternalError,
        };
        Self(DomainError::new(code, err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(code = %self.0.code, message = %self.0.message(), "request failed");
            // Do not leak internal failure detail to clients.
            return (
                status,
                Json(serde_json::json!({ "message": "Internal server error" })),
            )
                .into_response();
        }

        (
            status,
            Json(serde_json::json!({ "message": self.0.message() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_maps_to_403() {
        let err: ApiError = DomainError::forbidden("Forbidden access").into();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_auth_maps_to_401() {
        let err: ApiError = AuthError::MissingAuth.into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_auth_maps_to_403() {
        let err: ApiError = AuthError::InvalidAuth.into();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err: ApiError = DomainError::database("boom").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn server_error_body_is_generic() {
        let err: ApiError = DomainError::database("connection string leaked").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
