pub mod config;
mod db;

use clap::Parser;
use std::path::PathBuf;

use banq_accounts::{Bank, BankConfig};

use self::config::{Config, EnvOverride};

#[derive(Parser)]
#[clap(long_about = None)]
struct Cli {
    #[clap(short, long, env = "BANQ_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
    #[clap(long, env = "BANQ_DB_URL", value_name = "URL")]
    db_url: Option<String>,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_config(
        cli.config,
        EnvOverride {
            db_url: cli.db_url,
        },
    )?;

    run_cmd(config).await
}

async fn run_cmd(config: Config) -> anyhow::Result<()> {
    crate::telemetry::init_tracer(&config.tracing)?;
    let pool = db::init_pool(&config.db).await?;
    let bank_config = BankConfig::builder()
        .pool(pool)
        .exec_migrations(true)
        .build()?;
    let bank = Bank::init(bank_config).await?;
    let app = crate::app::BanqApp::run(bank, config.app).await?;
    crate::server::run(config.server, app).await?;
    Ok(())
}
