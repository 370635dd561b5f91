use crate::core::catalog::Catalog;
use crate::core::resolver;
use crate::domain::model::{Entry, EntryCandidate, SummaryResult};
use crate::utils::error::{AdmissionError, ResolutionError};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to one catalog.
///
/// Admission holds the write lock for the whole check-then-insert, summaries
/// share the read lock. Clones point at the same catalog.
#[derive(Debug, Clone, Default)]
pub struct Cookbook {
    catalog: Arc<RwLock<Catalog>>,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn admit(&self, candidate: EntryCandidate) -> Result<(), AdmissionError> {
        let mut catalog = self.catalog.write().await;
        match catalog.admit(candidate) {
            Ok(()) => {
                tracing::info!("📥 Entry admitted ({} entries total)", catalog.len());
                Ok(())
            }
            Err(e) => {
                tracing::warn!("❌ Entry rejected: {}", e);
                Err(e)
            }
        }
    }

    pub async fn summarize(&self, name: &str) -> Result<SummaryResult, ResolutionError> {
        let catalog = self.catalog.read().await;
        let result = resolver::summarize(&*catalog, name);

        match &result {
            Ok(summary) => tracing::info!(
                "🧾 Summary for '{}': cost {}, {} ingredients",
                summary.recipe_name,
                summary.total_cost,
                summary.flattened_ingredients.len()
            ),
            Err(e) => tracing::warn!("❌ Summary for '{}' failed: {}", name, e),
        }

        result
    }

    pub async fn entry(&self, name: &str) -> Option<Entry> {
        self.catalog.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.catalog.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.catalog.read().await.is_empty()
    }
}
