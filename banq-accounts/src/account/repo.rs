use sqlx::SqlitePool;

use crate::primitives::{AccountId, AccountType};

use super::{entity::*, error::AccountError};

#[derive(Debug, Clone)]
pub(super) struct AccountRepo {
    pool: SqlitePool,
}

impl AccountRepo {
    pub fn new(pool: &SqlitePool) -> Self {
        Self { pool: pool.clone() }
    }

    pub async fn create(&self, new_account: NewAccount) -> Result<Account, AccountError> {
        let account = sqlx::query_as::<_, Account>(
            r#"INSERT INTO accounts (balance, creation_date, account_type)
            VALUES (?, ?, ?)
            RETURNING id, balance, creation_date, account_type"#,
        )
        .bind(new_account.balance)
        .bind(new_account.creation_date)
        .bind(new_account.account_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(account)
    }

    pub async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountError> {
        let account = sqlx::query_as::<_, Account>(
            r#"SELECT id, balance, creation_date, account_type
            FROM accounts
            WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    pub async fn find_all(&self) -> Result<Vec<Account>, AccountError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"SELECT id, balance, creation_date, account_type
            FROM accounts"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(accounts)
    }

    pub async fn update(
        &self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Option<Account>, AccountError> {
        let account = sqlx::query_as::<_, Account>(
            r#"UPDATE accounts
            SET balance = ?, creation_date = ?, account_type = ?
            WHERE id = ?
            RETURNING id, balance, creation_date, account_type"#,
        )
        .bind(update.balance)
        .bind(update.creation_date)
        .bind(update.account_type)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    pub async fn delete_by_id(&self, id: AccountId) -> Result<bool, AccountError> {
        let result = sqlx::query(r#"DELETE FROM accounts WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists_by_id(&self, id: AccountId) -> Result<bool, AccountError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM accounts WHERE id = ?)"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    pub async fn count_all(&self) -> Result<i64, AccountError> {
        let count = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM accounts"#)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn find_by_type(
        &self,
        account_type: AccountType,
    ) -> Result<Vec<Account>, AccountError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"SELECT id, balance, creation_date, account_type
            FROM accounts
            WHERE account_type = ?"#,
        )
        .bind(account_type)
        .fetch_all(&self.pool)
        .await?;
        Ok(accounts)
    }

    // Strict inequality: a balance equal to the threshold is excluded.
    pub async fn find_by_balance_greater_than(
        &self,
        threshold: f64,
    ) -> Result<Vec<Account>, AccountError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"SELECT id, balance, creation_date, account_type
            FROM accounts
            WHERE balance > ?"#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;
        Ok(accounts)
    }
}
