use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

use super::entity::post;

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

/// Owned connection to the posts database.
///
/// Created by [`DatabaseConnections::init`] and released with
/// [`DatabaseConnections::close`].
pub struct DatabaseConnections {
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Connect and make sure the posts table exists.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Self::prepare(main).await
    }

    /// Take ownership of an open connection and ensure the posts table.
    ///
    /// The connection is closed again if the table cannot be created.
    pub(crate) async fn prepare(main: DbConn) -> Result<Self, DbErr> {
        let connections = Self { main };

        if let Err(e) = connections.ensure_schema().await {
            tracing::error!("Failed to prepare posts table: {}", e);
            if let Err(close_err) = connections.close().await {
                tracing::warn!("Failed to close database connection: {}", close_err);
            }
            return Err(e);
        }

        Ok(connections)
    }

    async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.main.get_database_backend();
        let mut create = Schema::new(backend).create_table_from_entity(post::Entity);
        create.if_not_exists();

        self.main.execute(backend.build(&create)).await?;
        tracing::debug!("Posts table ready");
        Ok(())
    }

    /// Close the connection pool.
    pub async fn close(self) -> Result<(), DbErr> {
        self.main.close().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}
