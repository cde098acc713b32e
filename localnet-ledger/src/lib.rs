//! # localnet-ledger
//!
//! Mock balance ledger for LocalNet.
//!
//! Keeps per-DID balances and a flat transaction history in memory. The
//! faucet credits a fixed amount on demand so test identities can fund
//! themselves; transfers check balances but never verify signatures (the
//! `signature` field is accepted and ignored, this is a mock).
//!
//! A transfer debits one account and credits another, so the whole ledger
//! sits behind a single lock; every mutation is one critical section.

#![warn(missing_docs)]
#![warn(clippy::all)]

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use localnet_types::{Did, LogRing};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// What one faucet call credits: 1000 tokens at 10^6 base units each.
pub const FAUCET_AMOUNT: u64 = 1000 * 1_000_000;

/// A recorded transfer.
#[derive(Debug, Clone, Serialize)]
pub struct TxRecord {
    /// Ledger-assigned identifier, `tx-<n>`.
    pub id: String,
    /// Debited account.
    pub sender: Did,
    /// Credited account.
    pub recipient: Did,
    /// Amount in base units.
    pub amount: u64,
    /// Always `"confirmed"`; the mock has no settlement pipeline.
    pub status: &'static str,
}

#[derive(Debug, Default)]
struct LedgerState {
    balances: HashMap<Did, u64>,
    transactions: Vec<TxRecord>,
}

/// The ledger service state.
#[derive(Debug, Default)]
pub struct LedgerService {
    state: Mutex<LedgerState>,
    logs: LogRing,
}

/// Ledger operation errors.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The sender's balance cannot cover the transfer.
    #[error("Insufficient funds")]
    InsufficientFunds,
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        match self {
            LedgerError::InsufficientFunds => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "Insufficient funds" })),
            )
                .into_response(),
        }
    }
}

impl LedgerService {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance of a DID; unknown DIDs read as zero.
    pub async fn balance(&self, did: &Did) -> u64 {
        let state = self.state.lock().await;
        state.balances.get(did).copied().unwrap_or(0)
    }

    /// Credit the fixed faucet amount and return the new balance.
    pub async fn fund(&self, did: &Did) -> u64 {
        let new_balance = {
            let mut state = self.state.lock().await;
            let balance = state.balances.entry(did.clone()).or_insert(0);
            *balance += FAUCET_AMOUNT;
            *balance
        };
        self.logs
            .append(format!("Faucet funded {did} with 1000 OAP"))
            .await;
        new_balance
    }

    /// Move `amount` between two DIDs, recording the transaction.
    ///
    /// Debit and credit happen under one lock; a failed transfer leaves
    /// every balance untouched.
    pub async fn transfer(
        &self,
        sender: &Did,
        recipient: &Did,
        amount: u64,
    ) -> Result<TxRecord, LedgerError> {
        let tx = {
            let mut state = self.state.lock().await;

            let sender_balance = state.balances.get(sender).copied().unwrap_or(0);
            if sender_balance < amount {
                return Err(LedgerError::InsufficientFunds);
            }

            state.balances.insert(sender.clone(), sender_balance - amount);
            let recipient_balance = state.balances.entry(recipient.clone()).or_insert(0);
            *recipient_balance += amount;

            let tx = TxRecord {
                id: format!("tx-{}", state.transactions.len() + 1),
                sender: sender.clone(),
                recipient: recipient.clone(),
                amount,
                status: "confirmed",
            };
            state.transactions.push(tx.clone());
            tx
        };
        self.logs
            .append(format!("Transfer {amount} from {sender} to {recipient}"))
            .await;
        Ok(tx)
    }
}

/// Body of `POST /transfer`.
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    /// Debited account.
    pub sender_did: Did,
    /// Credited account.
    pub recipient_did: Did,
    /// Amount in base units.
    pub amount: u64,
    /// Accepted but never verified.
    pub signature: String,
}

/// Build the HTTP router for the ledger service.
pub fn build_router(service: Arc<LedgerService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/system/logs", get(logs_handler))
        .route("/balance/:did", get(balance_handler))
        .route("/faucet/:did", get(faucet_handler))
        .route("/transfer", post(transfer_handler))
        .layer(Extension(service))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn logs_handler(Extension(service): Extension<Arc<LedgerService>>) -> Json<Vec<String>> {
    Json(service.logs.snapshot().await)
}

async fn balance_handler(
    Extension(service): Extension<Arc<LedgerService>>,
    Path(did): Path<String>,
) -> Json<serde_json::Value> {
    let did = Did::new(did);
    let balance = service.balance(&did).await;
    Json(json!({ "did": did, "balance": balance }))
}

async fn faucet_handler(
    Extension(service): Extension<Arc<LedgerService>>,
    Path(did): Path<String>,
) -> Json<serde_json::Value> {
    let did = Did::new(did);
    let new_balance = service.fund(&did).await;
    Json(json!({ "status": "funded", "did": did, "new_balance": new_balance }))
}

async fn transfer_handler(
    Extension(service): Extension<Arc<LedgerService>>,
    Json(req): Json<TransferRequest>,
) -> Result<Json<TxRecord>, LedgerError> {
    let tx = service
        .transfer(&req.sender_did, &req.recipient_did, req.amount)
        .await?;
    Ok(Json(tx))
}
