//! HTTP DTOs for the user and token endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::user::{NewUser, Role, User};

/// Query parameters for token issuance.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenParams {
    pub email: String,
}

/// Token issuance response. An unknown email yields the empty-token
/// sentinel rather than an error.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Request body for user registration.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
        }
    }
}

/// A user as rendered to clients.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Response for the admin check projection.
#[derive(Debug, Clone, Serialize)]
pub struct AdminCheckResponse {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Response for the admin promotion.
#[derive(Debug, Clone, Serialize)]
pub struct PromotionResponse {
    pub acknowledged: bool,
}
