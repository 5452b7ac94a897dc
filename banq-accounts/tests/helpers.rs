#![allow(dead_code)]
use chrono::NaiveDate;

use banq_accounts::{account::NewAccount, AccountType, Bank, BankConfig};

pub async fn init_pool() -> anyhow::Result<sqlx::SqlitePool> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

pub async fn init_bank() -> anyhow::Result<Bank> {
    let pool = init_pool().await?;
    let config = BankConfig::builder()
        .pool(pool)
        .exec_migrations(true)
        .build()?;
    Ok(Bank::init(config).await?)
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

pub fn test_account(balance: f64, account_type: AccountType) -> NewAccount {
    NewAccount::builder()
        .balance(balance)
        .creation_date(test_date())
        .account_type(account_type)
        .build()
        .unwrap()
}
