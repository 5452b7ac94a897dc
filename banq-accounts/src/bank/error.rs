use thiserror::Error;

use crate::account::error::AccountError;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("BankError - Sqlx: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("BankError - Migrate: {0}")]
    SqlxMigrate(#[from] sqlx::migrate::MigrateError),
    #[error("BankError - Config: {0}")]
    ConfigError(String),
    #[error("BankError - AccountError: {0}")]
    AccountError(#[from] AccountError),
}
