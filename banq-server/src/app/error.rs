use thiserror::Error;

use banq_accounts::account::error::AccountError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("ApplicationError - AccountError: {0}")]
    Account(#[from] AccountError),
}
