//! [Account] records and the service that validates and persists them.
mod entity;
pub mod error;
mod repo;

use sqlx::SqlitePool;
use tracing::instrument;

use crate::primitives::{AccountId, AccountType};

pub use entity::*;
use error::*;
use repo::*;

/// Service for working with `Account` entities.
#[derive(Clone)]
pub struct Accounts {
    repo: AccountRepo,
}

impl Accounts {
    pub(crate) fn new(pool: &SqlitePool) -> Self {
        Self {
            repo: AccountRepo::new(pool),
        }
    }

    #[instrument(name = "banq.accounts.create", skip(self))]
    pub async fn create(&self, new_account: NewAccount) -> Result<Account, AccountError> {
        let account = self.repo.create(new_account).await?;
        tracing::info!(id = %account.id, "account created");
        Ok(account)
    }

    #[instrument(name = "banq.accounts.find_by_id", skip(self))]
    pub async fn find_by_id(&self, id: AccountId) -> Result<Account, AccountError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id))
    }

    #[instrument(name = "banq.accounts.find_all", skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Account>, AccountError> {
        self.repo.find_all().await
    }

    /// Replaces the mutable fields of the account at `id`. The id itself is
    /// authoritative and never rewritten; a missing record fails with
    /// `NotFound` before anything is written.
    #[instrument(name = "banq.accounts.update", skip(self))]
    pub async fn update(
        &self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, AccountError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AccountError::NotFound(id));
        }
        let account = self
            .repo
            .update(id, update)
            .await?
            .ok_or(AccountError::NotFound(id))?;
        tracing::info!(id = %account.id, "account updated");
        Ok(account)
    }

    #[instrument(name = "banq.accounts.delete_by_id", skip(self))]
    pub async fn delete_by_id(&self, id: AccountId) -> Result<(), AccountError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(AccountError::NotFound(id));
        }
        if !self.repo.delete_by_id(id).await? {
            return Err(AccountError::NotFound(id));
        }
        tracing::info!(id = %id, "account deleted");
        Ok(())
    }

    #[instrument(name = "banq.accounts.exists_by_id", skip(self))]
    pub async fn exists_by_id(&self, id: AccountId) -> Result<bool, AccountError> {
        self.repo.exists_by_id(id).await
    }

    #[instrument(name = "banq.accounts.count_all", skip(self))]
    pub async fn count_all(&self) -> Result<i64, AccountError> {
        self.repo.count_all().await
    }

    #[instrument(name = "banq.accounts.find_by_type", skip(self))]
    pub async fn find_by_type(
        &self,
        account_type: AccountType,
    ) -> Result<Vec<Account>, AccountError> {
        self.repo.find_by_type(account_type).await
    }

    /// Parses the type token case-insensitively before querying. An unknown
    /// token fails with `InvalidAccountType` rather than an empty result.
    #[instrument(name = "banq.accounts.find_by_type_str", skip(self))]
    pub async fn find_by_type_str(&self, account_type: &str) -> Result<Vec<Account>, AccountError> {
        let account_type: AccountType = account_type.parse()?;
        self.find_by_type(account_type).await
    }

    #[instrument(name = "banq.accounts.find_by_balance_greater_than", skip(self))]
    pub async fn find_by_balance_greater_than(
        &self,
        threshold: f64,
    ) -> Result<Vec<Account>, AccountError> {
        self.repo.find_by_balance_greater_than(threshold).await
    }

    /// Total and per-type counts. Issues one query per figure, so the totals
    /// are not a transactional snapshot under concurrent writes.
    #[instrument(name = "banq.accounts.statistics", skip(self))]
    pub async fn statistics(&self) -> Result<AccountStatistics, AccountError> {
        let total = self.repo.count_all().await?;
        let current = self.repo.find_by_type(AccountType::Current).await?.len() as i64;
        let savings = self.repo.find_by_type(AccountType::Savings).await?.len() as i64;
        Ok(AccountStatistics {
            total,
            current,
            savings,
        })
    }
}
