mod config;
mod error;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use banq_accounts::{
    account::{Account, AccountStatistics, AccountUpdate, NewAccount},
    AccountId, AccountType,
};

use crate::app::BanqApp;

pub use config::*;
pub use error::ApiError;

pub async fn run(config: ServerConfig, app: BanqApp) -> anyhow::Result<()> {
    let router = router(app);

    println!("Starting accounts server on port {}", config.port);
    let listener =
        tokio::net::TcpListener::bind(&std::net::SocketAddr::from(([0, 0, 0, 0], config.port)))
            .await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

pub fn router(app: BanqApp) -> Router {
    Router::new()
        .route("/accounts/health", get(health))
        .route("/accounts", get(list_accounts).post(create_account))
        .route("/accounts/statistics", get(statistics))
        .route("/accounts/type/:account_type", get(accounts_by_type))
        .route("/accounts/balance-min/:threshold", get(accounts_by_min_balance))
        .route(
            "/accounts/:id",
            get(get_account).put(update_account).delete(delete_account),
        )
        .route("/accounts/:id/exists", get(account_exists))
        .with_state(app)
}

/// Incoming account payload. Any caller-supplied `id` is discarded: the
/// field is not modeled here, so unknown fields (including `id`) are
/// dropped during decoding and the store assigns the identity.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountBody {
    balance: f64,
    creation_date: NaiveDate,
    account_type: AccountType,
}

impl AccountBody {
    fn into_new_account(self) -> Result<NewAccount, ApiError> {
        NewAccount::builder()
            .balance(self.balance)
            .creation_date(self.creation_date)
            .account_type(self.account_type)
            .build()
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    fn into_update(self) -> AccountUpdate {
        AccountUpdate {
            balance: self.balance,
            creation_date: self.creation_date,
            account_type: self.account_type,
        }
    }
}

#[derive(Serialize)]
struct ExistsResponse {
    id: AccountId,
    exists: bool,
}

fn decode_body(
    payload: Result<Json<AccountBody>, JsonRejection>,
) -> Result<AccountBody, ApiError> {
    let Json(body) = payload
        .map_err(|e| ApiError::InvalidBody(format!("account payload missing or malformed: {e}")))?;
    Ok(body)
}

async fn health(State(app): State<BanqApp>) -> Result<String, ApiError> {
    let count = app.accounts().count_all().await?;
    Ok(format!(
        "banq accounts API is running! Total accounts: {count}"
    ))
}

async fn list_accounts(State(app): State<BanqApp>) -> Result<Json<Vec<Account>>, ApiError> {
    Ok(Json(app.accounts().find_all().await?))
}

async fn get_account(
    State(app): State<BanqApp>,
    Path(id): Path<AccountId>,
) -> Result<Json<Account>, ApiError> {
    Ok(Json(app.accounts().find_by_id(id).await?))
}

async fn create_account(
    State(app): State<BanqApp>,
    payload: Result<Json<AccountBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let body = decode_body(payload)?;
    let account = app.accounts().create(body.into_new_account()?).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

async fn update_account(
    State(app): State<BanqApp>,
    Path(id): Path<AccountId>,
    payload: Result<Json<AccountBody>, JsonRejection>,
) -> Result<Json<Account>, ApiError> {
    let body = decode_body(payload)?;
    let account = app.accounts().update(id, body.into_update()).await?;
    Ok(Json(account))
}

async fn delete_account(
    State(app): State<BanqApp>,
    Path(id): Path<AccountId>,
) -> Result<StatusCode, ApiError> {
    app.accounts().delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn accounts_by_type(
    State(app): State<BanqApp>,
    Path(account_type): Path<String>,
) -> Result<Json<Vec<Account>>, ApiError> {
    Ok(Json(app.accounts().find_by_type_str(&account_type).await?))
}

async fn accounts_by_min_balance(
    State(app): State<BanqApp>,
    Path(threshold): Path<f64>,
) -> Result<Json<Vec<Account>>, ApiError> {
    Ok(Json(
        app.accounts().find_by_balance_greater_than(threshold).await?,
    ))
}

async fn statistics(State(app): State<BanqApp>) -> Result<Json<AccountStatistics>, ApiError> {
    Ok(Json(app.accounts().statistics().await?))
}

async fn account_exists(
    State(app): State<BanqApp>,
    Path(id): Path<AccountId>,
) -> Result<Json<ExistsResponse>, ApiError> {
    let exists = app.accounts().exists_by_id(id).await?;
    Ok(Json(ExistsResponse { id, exists }))
}
