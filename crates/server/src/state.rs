use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::account::{repo::seaorm::SeaOrmAccountRepository, AccountRepository, AccountService};

/// Per-request state injected into handlers through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService<dyn AccountRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { accounts: Arc::new(AccountService::new(repo)) }
    }

    /// State backed by the SeaORM repository.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmAccountRepository::new(db)))
    }
}
