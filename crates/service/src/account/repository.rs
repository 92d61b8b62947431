use async_trait::async_trait;
use models::account::Fields;

use super::domain::{Account, AccountInput};
use crate::errors::ServiceError;

/// Repository abstraction for account persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, fields: Fields) -> Result<Account, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Account>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Account>, ServiceError>;
    /// Replace an account in one unit of work; `None` when `id` is unknown.
    async fn update(&self, id: i32, input: AccountInput) -> Result<Option<Account>, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Table {
        next_id: i32,
        rows: BTreeMap<i32, Account>,
    }

    #[derive(Default)]
    pub struct InMemoryAccountRepository {
        table: Mutex<Table>,
    }

    #[async_trait]
    impl AccountRepository for InMemoryAccountRepository {
        async fn create(&self, fields: Fields) -> Result<Account, ServiceError> {
            models::account::validate(&fields)?;
            let mut table = self.table.lock().await;
            table.next_id += 1;
            let account = Account {
                id: table.next_id,
                name: fields.name,
                email: fields.email,
                address: fields.address,
                phone_number: fields.phone_number,
                date_joined: fields.date_joined,
            };
            table.rows.insert(account.id, account.clone());
            Ok(account)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Account>, ServiceError> {
            Ok(self.table.lock().await.rows.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Account>, ServiceError> {
            Ok(self.table.lock().await.rows.values().cloned().collect())
        }

        async fn update(&self, id: i32, input: AccountInput) -> Result<Option<Account>, ServiceError> {
            let mut table = self.table.lock().await;
            let Some(existing) = table.rows.get_mut(&id) else { return Ok(None) };
            let fields = input.merge_onto(existing);
            models::account::validate(&fields)?;
            existing.name = fields.name;
            existing.email = fields.email;
            existing.address = fields.address;
            existing.phone_number = fields.phone_number;
            existing.date_joined = fields.date_joined;
            Ok(Some(existing.clone()))
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.table.lock().await.rows.remove(&id).is_some())
        }
    }
}
