use crate::client::{ClientConfig, ListOf, Request, Single};
use crate::error::{TestRailError, TestRailResult};
use crate::models::User;
use crate::resources::{get, require_positive};
use std::sync::Arc;

/// Factories for `users`
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    config: &'a Arc<ClientConfig>,
}

impl<'a> Users<'a> {
    pub(crate) fn new(config: &'a Arc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn get(&self, user_id: u64) -> TestRailResult<Request<Single<User>>> {
        let user_id = require_positive("user_id", user_id)?;
        get(self.config, "get_user/{}", &[user_id])
    }

    /// Look a user up by login email (surrounding whitespace is ignored)
    pub fn get_by_email(&self, email: &str) -> TestRailResult<Request<Single<User>>> {
        let email = email.trim();
        if email.is_empty() {
            return Err(TestRailError::invalid_argument("email cannot be empty"));
        }
        Ok(get(self.config, "get_user_by_email", &[])?.param("email", email))
    }

    pub fn list(&self) -> TestRailResult<Request<ListOf<User>>> {
        get(self.config, "get_users", &[])
    }
}
