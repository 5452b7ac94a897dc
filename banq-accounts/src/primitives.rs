use serde::{Deserialize, Serialize};

/// Store-assigned account identifier. Never supplied by callers.
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct AccountId(i64);

impl AccountId {
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of account types. Stored and serialized by enumerant name.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Current,
    Savings,
}

impl AccountType {
    pub const ALL: [AccountType; 2] = [AccountType::Current, AccountType::Savings];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Current => "CURRENT",
            AccountType::Savings => "SAVINGS",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid account type '{0}'; valid types: CURRENT, SAVINGS")]
pub struct ParseAccountTypeError(String);

impl std::str::FromStr for AccountType {
    type Err = ParseAccountTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CURRENT" => Ok(AccountType::Current),
            "SAVINGS" => Ok(AccountType::Savings),
            _ => Err(ParseAccountTypeError(s.to_string())),
        }
    }
}
