//! Resident directory listing.
//!
//! Backs the residents screen and the "Morador" picker on the notice
//! creation screen.

use std::sync::Arc;

use vilarica_core::AppResult;
use vilarica_database::repositories::account::AccountRepository;
use vilarica_entity::account::Account;

use crate::context::RequestContext;

/// Lists registered accounts for authenticated callers.
pub struct DirectoryService {
    account_repo: Arc<AccountRepository>,
}

impl DirectoryService {
    /// Creates a new directory service.
    pub fn new(account_repo: Arc<AccountRepository>) -> Self {
        Self { account_repo }
    }

    /// All accounts, ordered by name. Password hashes never serialize.
    pub async fn list(&self, _ctx: &RequestContext) -> AppResult<Vec<Account>> {
        self.account_repo.find_all().await
    }
}
