//! IssueTokenHandler - token issuance for known users.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{TokenIssuer, UserRepository};

#[derive(Debug, Clone)]
pub struct IssueTokenQuery {
    pub email: String,
}

/// Issues a signed bearer token when the email belongs to a registered
/// user. An unknown email is not an error; the caller gets `None` and the
/// endpoint renders the empty-token sentinel.
pub struct IssueTokenHandler {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenIssuer>,
}

impl IssueTokenHandler {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { users, tokens }
    }

    pub async fn handle(&self, query: IssueTokenQuery) -> Result<Option<String>, DomainError> {
        match self.users.find_by_email(&query.email).await? {
            Some(user) => {
                let token = self
                    .tokens
                    .issue_token(&user.email)
                    .map_err(|err| DomainError::new(ErrorCode::InternalError, err.to_string()))?;
                Ok(Some(token))
            }
            None => Ok(None),
        }
    }
}
