//! In-memory gateway used by tests and local tooling.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagecraft_document::PageData;
use tokio::sync::RwLock;
use tracing::debug;

use crate::gateway::{GatewayError, PageGateway, PageSummary, SavedPage, SaveTarget};

#[derive(Debug, Clone)]
struct StoredPage {
    data: PageData,
    updated_at: DateTime<Utc>,
}

/// `PageGateway` backed by a process-local map. Ids are assigned
/// sequentially on create, the way the real backend does.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    pages: RwLock<HashMap<String, StoredPage>>,
    next_id: AtomicU64,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }
}

#[async_trait]
impl PageGateway for MemoryGateway {
    async fn fetch_page(&self, id: &str) -> Result<PageData, GatewayError> {
        let pages = self.pages.read().await;
        pages
            .get(id)
            .map(|stored| stored.data.clone())
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    async fn save_page(
        &self,
        target: SaveTarget,
        data: &PageData,
    ) -> Result<SavedPage, GatewayError> {
        let mut pages = self.pages.write().await;
        let page_id = match target {
            SaveTarget::New => {
                let n = self.next_id.fetch_add(1, Ordering::SeqCst);
                format!("page-{n}")
            }
            SaveTarget::Existing(id) => {
                if !pages.contains_key(&id) {
                    return Err(GatewayError::NotFound(id));
                }
                id
            }
        };

        debug!(%page_id, "storing page record");
        pages.insert(
            page_id.clone(),
            StoredPage {
                data: data.clone(),
                updated_at: Utc::now(),
            },
        );

        Ok(SavedPage {
            page_id,
            data: data.clone(),
        })
    }

    async fn list_pages(&self) -> Result<Vec<PageSummary>, GatewayError> {
        let pages = self.pages.read().await;
        let mut summaries: Vec<PageSummary> = pages
            .iter()
            .map(|(id, stored)| PageSummary {
                page_id: id.clone(),
                title: stored.data.title.clone(),
                updated_at: stored.updated_at,
            })
            .collect();
        // Most recently touched first, the order the dashboard shows.
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    async fn delete_page(&self, id: &str) -> Result<(), GatewayError> {
        let mut pages = self.pages.write().await;
        pages
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_new_assigns_sequential_ids() {
        let gateway = MemoryGateway::new();
        let page = PageData::template();

        let first = gateway.save_page(SaveTarget::New, &page).await.unwrap();
        let second = gateway.save_page(SaveTarget::New, &page).await.unwrap();
        assert_ne!(first.page_id, second.page_id);
        assert_eq!(gateway.len().await, 2);
    }

    #[tokio::test]
    async fn fetch_round_trips_the_record() {
        let gateway = MemoryGateway::new();
        let mut page = PageData::template();
        page.title = "Stored".to_string();

        let saved = gateway.save_page(SaveTarget::New, &page).await.unwrap();
        let fetched = gateway.fetch_page(&saved.page_id).await.unwrap();
        assert_eq!(fetched, page);
    }

    #[tokio::test]
    async fn missing_page_is_not_found() {
        let gateway = MemoryGateway::new();
        let err = gateway.fetch_page("page-404").await.unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));

        let err = gateway
            .save_page(SaveTarget::Existing("page-404".to_string()), &PageData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let gateway = MemoryGateway::new();
        let saved = gateway
            .save_page(SaveTarget::New, &PageData::default())
            .await
            .unwrap();

        gateway.delete_page(&saved.page_id).await.unwrap();
        assert!(gateway.is_empty().await);
        assert!(gateway.delete_page(&saved.page_id).await.is_err());
    }

    #[tokio::test]
    async fn list_returns_summaries() {
        let gateway = MemoryGateway::new();
        let mut page = PageData::default();
        page.title = "Listing".to_string();
        gateway.save_page(SaveTarget::New, &page).await.unwrap();

        let summaries = gateway.list_pages().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].title, "Listing");
    }
}
