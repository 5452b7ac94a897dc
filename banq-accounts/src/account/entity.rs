use chrono::NaiveDate;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::primitives::{AccountId, AccountType};

/// A persisted bank account. Serializes directly as the wire shape
/// (camelCase fields, calendar date without a time component).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub balance: f64,
    pub creation_date: NaiveDate,
    pub account_type: AccountType,
}

/// A not-yet-persisted account. Carries no id at all; the store assigns one
/// on insert, so caller-supplied ids are unrepresentable here.
#[derive(Builder, Debug, Clone)]
pub struct NewAccount {
    pub(super) balance: f64,
    pub(super) creation_date: NaiveDate,
    pub(super) account_type: AccountType,
}

impl NewAccount {
    pub fn builder() -> NewAccountBuilder {
        NewAccountBuilder::default()
    }
}

/// The mutable fields of an account. The id of the targeted record comes
/// from the caller separately and is never rewritten.
#[derive(Debug, Clone)]
pub struct AccountUpdate {
    pub balance: f64,
    pub creation_date: NaiveDate,
    pub account_type: AccountType,
}

/// Aggregate view over the store. Not a transactional snapshot: the counts
/// come from independent queries and may disagree under concurrent writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatistics {
    pub total: i64,
    pub current: i64,
    pub savings: i64,
}
