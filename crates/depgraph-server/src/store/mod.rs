use async_trait::async_trait;
use depgraph_common::{EcosystemView, Edge};
use thiserror::Error;

pub mod postgres;

pub use postgres::PgEdgeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read access to the per-ecosystem dependency views.
#[async_trait]
pub trait EdgeStore: Send + Sync {
    /// All edges of `view` whose endpoints both have more than `min_count`
    /// dependents.
    async fn edges_above(&self, view: EcosystemView, min_count: i64)
        -> Result<Vec<Edge>, StoreError>;
}
