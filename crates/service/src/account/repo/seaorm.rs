use sea_orm::{DatabaseConnection, TransactionTrait};

use models::account::{self, Fields};

use crate::account::domain::{Account, AccountInput};
use crate::account::repository::AccountRepository;
use crate::errors::ServiceError;

pub struct SeaOrmAccountRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn create(&self, fields: Fields) -> Result<Account, ServiceError> {
        Ok(account::create(&self.db, fields).await?.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Account>, ServiceError> {
        Ok(account::find(&self.db, id).await?.map(Account::from))
    }

    async fn find_all(&self) -> Result<Vec<Account>, ServiceError> {
        Ok(account::all(&self.db).await?.into_iter().map(Account::from).collect())
    }

    async fn update(&self, id: i32, input: AccountInput) -> Result<Option<Account>, ServiceError> {
        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = account::find(&txn, id).await? else {
            txn.rollback().await.map_err(|e| ServiceError::Db(e.to_string()))?;
            return Ok(None);
        };
        let fields = input.merge_onto(&Account::from(existing.clone()));
        let updated = account::update(&txn, existing, fields).await?;
        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(account::delete(&self.db, id).await?)
    }
}
