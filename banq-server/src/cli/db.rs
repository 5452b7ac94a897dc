use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use std::str::FromStr;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DbConfig {
    #[serde(default = "default_db_url")]
    pub db_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            db_url: default_db_url(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_db_url() -> String {
    "sqlite://banq.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

pub(super) async fn init_pool(config: &DbConfig) -> anyhow::Result<sqlx::SqlitePool> {
    let connect_opts = SqliteConnectOptions::from_str(&config.db_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_opts)
        .await?;
    Ok(pool)
}
