use async_trait::async_trait;
use depgraph_common::config::DatabaseConfig;
use depgraph_common::{EcosystemView, Edge};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use super::{EdgeStore, StoreError};

pub struct PgEdgeStore {
    pool: PgPool,
}

impl PgEdgeStore {
    /// Connections are opened lazily on first use; only a malformed URL
    /// fails here.
    pub fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy(&config.url)?;
        Ok(Self { pool })
    }
}

fn select_sql(view: EcosystemView) -> String {
    // view_name() is a fixed set of identifiers, never request input
    format!(
        "SELECT frompackage, topackage, fromdepends, todepends FROM {} \
         WHERE fromdepends > $1 AND todepends > $1",
        view.view_name()
    )
}

#[async_trait]
impl EdgeStore for PgEdgeStore {
    async fn edges_above(
        &self,
        view: EcosystemView,
        min_count: i64,
    ) -> Result<Vec<Edge>, StoreError> {
        let edges = sqlx::query(&select_sql(view))
            .bind(min_count)
            .try_map(|row: PgRow| {
                Ok(Edge {
                    from_package: row.try_get("frompackage")?,
                    to_package: row.try_get("topackage")?,
                    from_depends: row.try_get("fromdepends")?,
                    to_depends: row.try_get("todepends")?,
                })
            })
            .fetch_all(&self.pool)
            .await?;

        Ok(edges)
    }
}
