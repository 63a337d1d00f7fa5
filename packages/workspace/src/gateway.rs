//! # Persistence gateway
//!
//! The interface the core consumes to load and save page records. The core
//! never performs network I/O itself: a gateway implementation (HTTP in the
//! real application, in-memory in tests) is awaited by the surrounding UI
//! layer, which feeds the result back into the session's store. Failures
//! are surfaced as values for the UI to report; the core does not retry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagecraft_document::PageData;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("page not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed page record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Row in the dashboard's page list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page_id: String,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

/// Where a save should land. The server assigns an id on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    New,
    Existing(String),
}

/// A persisted record together with its server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPage {
    pub page_id: String,
    pub data: PageData,
}

#[async_trait]
pub trait PageGateway: Send + Sync {
    async fn fetch_page(&self, id: &str) -> Result<PageData, GatewayError>;

    async fn save_page(
        &self,
        target: SaveTarget,
        data: &PageData,
    ) -> Result<SavedPage, GatewayError>;

    async fn list_pages(&self) -> Result<Vec<PageSummary>, GatewayError>;

    async fn delete_page(&self, id: &str) -> Result<(), GatewayError>;
}
