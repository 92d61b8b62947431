use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use super::domain::{Account, AccountInput};
use super::repository::AccountRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "Account";

/// Account business service independent of web framework.
pub struct AccountService<R: AccountRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: AccountRepository + ?Sized> AccountService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create an account; `date_joined` defaults to today (UTC).
    ///
    /// # Examples
    /// ```
    /// use service::account::{AccountInput, AccountService, repository::mock::InMemoryAccountRepository};
    /// use std::sync::Arc;
    /// let svc = AccountService::new(Arc::new(InMemoryAccountRepository::default()));
    /// let input = AccountInput { name: "Alice".into(), email: "a@x.com".into(), address: "1 Main St".into(), ..Default::default() };
    /// let account = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(account.id, 1);
    /// assert_eq!(account.name, "Alice");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: AccountInput) -> Result<Account, ServiceError> {
        let fields = input.into_new_fields(Utc::now().date_naive());
        models::account::validate(&fields)?;
        let account = self.repo.create(fields).await?;
        info!(account_id = account.id, "account_created");
        Ok(account)
    }

    pub async fn list(&self) -> Result<Vec<Account>, ServiceError> {
        self.repo.find_all().await
    }

    /// Fetch one account, failing with `NotFound` for an unknown id.
    pub async fn get(&self, id: i32) -> Result<Account, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: AccountInput) -> Result<Account, ServiceError> {
        let account = self
            .repo
            .update(id, input)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(account_id = account.id, "account_updated");
        Ok(account)
    }

    /// Delete is idempotent: an unknown id is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            info!(account_id = id, "account_deleted");
        }
        Ok(())
    }
}
