use thiserror::Error;

use crate::primitives::{AccountId, ParseAccountTypeError};

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("AccountError - Sqlx: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("AccountError - NotFound: no account with id {0}")]
    NotFound(AccountId),
    #[error("AccountError - InvalidAccountType: {0}")]
    InvalidAccountType(#[from] ParseAccountTypeError),
}
