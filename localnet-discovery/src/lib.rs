//! # localnet-discovery
//!
//! Mock PSI discovery service for LocalNet.
//!
//! Clients submit a batch of identifiers (phone numbers, emails) and learn
//! which of them are registered, plus the DID behind each match. The "PSI"
//! here is a plain set lookup with no cryptographic privacy; LocalNet only
//! needs the interface shape, not the guarantees.
//!
//! State is a concurrent identifier→DID table plus the usual bounded
//! operational log, all process-scoped.

#![warn(missing_docs)]
#![warn(clippy::all)]

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use dashmap::DashMap;
use localnet_types::{Did, LogRing};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The discovery service state.
#[derive(Debug, Default)]
pub struct DiscoveryService {
    /// Registered identifier → DID links.
    contacts: DashMap<String, Did>,
    /// Operational log served under `/system/logs`.
    logs: LogRing,
}

impl DiscoveryService {
    /// Create an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Link an identifier to a DID (last write wins).
    pub async fn add_contact(&self, identifier: String, did: Did) {
        self.logs
            .append(format!("Linked {identifier} -> {did}"))
            .await;
        self.contacts.insert(identifier, did);
    }

    /// Which of the submitted identifiers are registered, and their DIDs.
    pub async fn intersect(&self, identifiers: &[String]) -> BTreeMap<String, Did> {
        let matches: BTreeMap<String, Did> = identifiers
            .iter()
            .filter_map(|id| {
                self.contacts
                    .get(id)
                    .map(|entry| (id.clone(), entry.value().clone()))
            })
            .collect();

        self.logs
            .append(format!(
                "PSI request for {} ids, found {} matches",
                identifiers.len(),
                matches.len()
            ))
            .await;
        matches
    }

    /// Snapshot of the whole contact table.
    pub fn list_contacts(&self) -> BTreeMap<String, Did> {
        self.contacts
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

/// Validation failure on a discovery request.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// A required field was empty.
    #[error("validation error: {0}")]
    Validation(String),
}

impl IntoResponse for DiscoveryError {
    fn into_response(self) -> Response {
        match self {
            DiscoveryError::Validation(detail) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail }))).into_response()
            }
        }
    }
}

/// Body of `POST /psi/intersect`.
#[derive(Debug, Deserialize)]
pub struct PsiRequest {
    /// Identifiers to test for membership.
    pub identifiers: Vec<String>,
}

/// Response of `POST /psi/intersect`.
#[derive(Debug, Serialize)]
pub struct PsiResponse {
    /// Registered identifiers mapped to their DIDs.
    pub matches: BTreeMap<String, Did>,
}

/// Body of `POST /admin/add-contact`.
#[derive(Debug, Deserialize)]
pub struct AddContactRequest {
    /// The identifier to register.
    pub identifier: String,
    /// The DID it resolves to.
    pub did: Did,
}

/// Build the HTTP router for the discovery service.
pub fn build_router(service: Arc<DiscoveryService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/system/logs", get(logs_handler))
        .route("/psi/intersect", post(intersect_handler))
        .route("/admin/add-contact", post(add_contact_handler))
        .route("/admin/list", get(list_handler))
        .layer(Extension(service))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn logs_handler(Extension(service): Extension<Arc<DiscoveryService>>) -> Json<Vec<String>> {
    Json(service.logs.snapshot().await)
}

async fn intersect_handler(
    Extension(service): Extension<Arc<DiscoveryService>>,
    Json(req): Json<PsiRequest>,
) -> Json<PsiResponse> {
    let matches = service.intersect(&req.identifiers).await;
    Json(PsiResponse { matches })
}

async fn add_contact_handler(
    Extension(service): Extension<Arc<DiscoveryService>>,
    Json(req): Json<AddContactRequest>,
) -> Result<Json<serde_json::Value>, DiscoveryError> {
    if req.identifier.is_empty() {
        return Err(DiscoveryError::Validation("identifier is empty".into()));
    }
    if req.did.is_empty() {
        return Err(DiscoveryError::Validation("did is empty".into()));
    }

    service
        .add_contact(req.identifier.clone(), req.did.clone())
        .await;
    Ok(Json(json!({
        "status": "added",
        "identifier": req.identifier,
        "did": req.did,
    })))
}

async fn list_handler(
    Extension(service): Extension<Arc<DiscoveryService>>,
) -> Json<BTreeMap<String, Did>> {
    Json(service.list_contacts())
}
