use anyhow::Result;
use sqlx::{Pool, Sqlite};

/// Pool handle shared by the handlers. Per-table queries live in the
/// sibling modules as inherent methods.
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Connects to `url` and brings the schema up to date.
    pub async fn open(url: &str, max_connections: u32) -> Result<Self> {
        let url = super::prepare_sqlite_url(url);
        tracing::info!(db_url = %url, "Opening database");
        let pool = super::connect_db(&url, max_connections).await?;
        super::migrate(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}
