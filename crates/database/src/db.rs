use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a database connection
///
/// In-memory SQLite is pinned to a single pooled connection, otherwise each
/// connection would open its own empty database.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);

    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}

#[cfg(test)]
pub(crate) async fn test_connection() -> DatabaseConnection {
    use migration::{Migrator, MigratorTrait};

    let db = create_connection("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}
