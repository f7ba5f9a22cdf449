pub mod products;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::Settings;

/// Create a SeaORM database connection pool from the configured `DATABASE_URL`.
pub async fn create_pool(settings: &Settings) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(settings.database_url.clone());
    options
        .max_connections(settings.db_max_connections)
        .sqlx_logging(false);

    Database::connect(options).await
}
