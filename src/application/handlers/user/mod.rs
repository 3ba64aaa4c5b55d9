//! User identity commands and queries.

mod check_admin;
mod issue_token;
mod list_users;
mod promote_to_admin;
mod register_user;

pub use check_admin::{CheckAdminHandler, CheckAdminQuery};
pub use issue_token::{IssueTokenHandler, IssueTokenQuery};
pub use list_users::ListUsersHandler;
pub use promote_to_admin::{PromoteToAdminCommand, PromoteToAdminHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
