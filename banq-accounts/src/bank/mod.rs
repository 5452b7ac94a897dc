pub mod config;
pub mod error;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

pub use config::*;
use error::*;

use crate::account::Accounts;

/// Owns the connection pool and hands out the account service.
#[derive(Clone)]
pub struct Bank {
    accounts: Accounts,
}

impl Bank {
    pub async fn init(config: BankConfig) -> Result<Self, BankError> {
        let pool = match (config.pool, config.db_url) {
            (Some(pool), None) => pool,
            (None, Some(db_url)) => {
                let connect_opts =
                    SqliteConnectOptions::from_str(&db_url)?.create_if_missing(true);
                let mut pool_opts = SqlitePoolOptions::new();
                if let Some(max_connections) = config.max_connections {
                    pool_opts = pool_opts.max_connections(max_connections);
                }
                pool_opts.connect_with(connect_opts).await?
            }
            _ => {
                return Err(BankError::ConfigError(
                    "One of db_url or pool must be set".to_string(),
                ))
            }
        };
        if config.exec_migrations {
            sqlx::migrate!().run(&pool).await?;
        }

        let accounts = Accounts::new(&pool);
        Ok(Self { accounts })
    }

    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }
}
