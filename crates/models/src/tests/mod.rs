/// Schema and foreign key behaviour checks against in-memory SQLite
pub mod schema_tests;


use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, migrate, DatabaseConfig};

/// Fresh, migrated in-memory database for one test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), min_connections: 1, ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}
