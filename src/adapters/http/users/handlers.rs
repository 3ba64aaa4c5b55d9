//! HTTP handlers for users and token issuance.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::user::{
    CheckAdminHandler, CheckAdminQuery, IssueTokenHandler, IssueTokenQuery, ListUsersHandler,
    PromoteToAdminCommand, PromoteToAdminHandler, RegisterUserCommand, RegisterUserHandler,
};
use crate::domain::foundation::UserId;

use super::dto::{
    AdminCheckResponse, CreateUserRequest, PromotionResponse, TokenParams, TokenResponse,
    UserResponse,
};

/// `GET /jwt?email=...` - issue a token for a known user.
pub async fn issue_token(
    State(state): State<AppState>,
    Query(params): Query<TokenParams>,
) -> Result<Json<TokenResponse>, ApiError> {
    let handler = IssueTokenHandler::new(state.users.clone(), state.token_issuer.clone());
    let token = handler
        .handle(IssueTokenQuery {
            email: params.email,
        })
        .await?;

    Ok(Json(TokenResponse {
        access_token: token.unwrap_or_default(),
    }))
}

/// `GET /users` - every registered user.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let handler = ListUsersHandler::new(state.users.clone());
    let users = handler.handle().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// `POST /users` - store a newly signed-up user.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let handler = RegisterUserHandler::new(state.users.clone());
    let user = handler
        .handle(RegisterUserCommand {
            candidate: request.into(),
        })
        .await?;

    Ok(Json(user.into()))
}

/// `GET /users/admin/:email` - whether the email belongs to an admin.
pub async fn check_admin(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AdminCheckResponse>, ApiError> {
    let handler = CheckAdminHandler::new(state.users.clone());
    let is_admin = handler.handle(CheckAdminQuery { email }).await?;

    Ok(Json(AdminCheckResponse { is_admin }))
}

/// `PUT /users/admin/:id` - promote a user to admin.
///
/// Requires a session whose user record carries the admin role; any other
/// caller gets 403 and the role write never runs.
pub async fn promote_to_admin(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    Path(id): Path<UserId>,
) -> Result<Json<PromotionResponse>, ApiError> {
    let handler = PromoteToAdminHandler::new(state.users.clone());
    handler
        .handle(&identity, PromoteToAdminCommand { target: id })
        .await?;

    Ok(Json(PromotionResponse { acknowledged: true }))
}
