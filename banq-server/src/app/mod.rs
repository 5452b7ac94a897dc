mod config;
pub mod error;

use chrono::Utc;
use tracing::instrument;

use banq_accounts::{
    account::{Accounts, NewAccount},
    AccountType, Bank,
};

pub use config::*;
use error::*;

#[derive(Clone)]
pub struct BanqApp {
    bank: Bank,
}

impl BanqApp {
    pub async fn run(bank: Bank, config: AppConfig) -> Result<Self, ApplicationError> {
        let app = Self { bank };
        if config.seed_demo_data {
            app.seed_demo_accounts().await?;
        }
        Ok(app)
    }

    pub fn accounts(&self) -> &Accounts {
        self.bank.accounts()
    }

    /// Seeds the demo data set as a batch of ordinary create calls.
    /// Skipped when the store already holds accounts.
    #[instrument(name = "banq.app.seed_demo_accounts", skip(self))]
    async fn seed_demo_accounts(&self) -> Result<(), ApplicationError> {
        let accounts = self.bank.accounts();
        if accounts.count_all().await? > 0 {
            tracing::info!("store is not empty, skipping demo seed");
            return Ok(());
        }

        let today = Utc::now().date_naive();
        let seeds = [
            (7600.0, AccountType::Savings),
            (1200.0, AccountType::Current),
            (18500.0, AccountType::Savings),
            (450.0, AccountType::Current),
            (9200.0, AccountType::Savings),
        ];
        for (balance, account_type) in seeds {
            let new_account = NewAccount::builder()
                .balance(balance)
                .creation_date(today)
                .account_type(account_type)
                .build()
                .expect("all demo account fields are set");
            let account = accounts.create(new_account).await?;
            tracing::info!(id = %account.id, balance, %account_type, "seeded demo account");
        }
        Ok(())
    }
}
