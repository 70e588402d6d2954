use crate::db::{connect_db, migrate, Database};

pub async fn init_test_db() -> Database {
    let pool = connect_db("sqlite::memory:", 1)
        .await
        .expect("failed to create in-memory database");
    migrate(&pool).await.expect("failed to run migrations");
    Database::new(pool)
}
