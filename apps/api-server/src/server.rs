//! Server lifecycle - connect, bind, and symmetric shutdown.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing_actix_web::TracingLogger;

use blog_core::ports::PostRepository;
use blog_infra::database::{DatabaseConnections, DbErr, PostgresPostRepository};

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("HTTP listener error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Join(String),
}

/// Entry points for starting the HTTP server.
pub struct BlogServer;

impl BlogServer {
    /// Connect to the database, then bind the HTTP listener.
    ///
    /// A failed connection never binds; a failed bind closes the connection.
    pub async fn start(config: &AppConfig) -> Result<RunningServer, ServerError> {
        let db = DatabaseConnections::init(&config.database)
            .await
            .inspect_err(|e| tracing::error!("Failed to connect to database: {}", e))?;

        let posts = Arc::new(PostgresPostRepository::new(db.main.clone()));
        Self::serve(posts, Some(db), &config.host, config.port).await
    }

    /// Bind the HTTP listener over an already constructed repository.
    ///
    /// `db`, when given, is owned by the returned handle and closed on stop
    /// or when binding fails.
    pub async fn serve(
        posts: Arc<dyn PostRepository>,
        db: Option<DatabaseConnections>,
        host: &str,
        port: u16,
    ) -> Result<RunningServer, ServerError> {
        let (server, local_addr) = match bind(posts, host, port) {
            Ok(bound) => bound,
            Err(e) => {
                tracing::error!("Failed to bind {}:{}: {}", host, port, e);
                close_database(db).await?;
                return Err(e.into());
            }
        };

        let handle = server.handle();
        let task = tokio::spawn(server);
        tracing::info!("Your app is listening on {}", local_addr);

        Ok(RunningServer {
            local_addr,
            handle,
            task,
            db,
        })
    }
}

fn bind(
    posts: Arc<dyn PostRepository>,
    host: &str,
    port: u16,
) -> std::io::Result<(actix_web::dev::Server, SocketAddr)> {
    let listener = TcpListener::bind((host, port))?;
    let local_addr = listener.local_addr()?;
    let state = web::Data::new(AppState::new(posts));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(handlers::configure_routes)
    })
    .disable_signals()
    .listen(listener)?
    .run();

    Ok((server, local_addr))
}

async fn close_database(db: Option<DatabaseConnections>) -> Result<(), ServerError> {
    if let Some(db) = db {
        db.close().await?;
    }
    Ok(())
}

/// Handle to a started server, consumed by [`RunningServer::stop`].
pub struct RunningServer {
    local_addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
    db: Option<DatabaseConnections>,
}

impl RunningServer {
    /// The address the listener is actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Close the database connection, then stop the HTTP listener.
    ///
    /// Both steps always run; the first failure is returned.
    pub async fn stop(self) -> Result<(), ServerError> {
        tracing::info!("Closing server");

        let db_result = close_database(self.db).await;

        self.handle.stop(true).await;
        let joined = self.task.await;

        shutdown_result(db_result, joined)
    }
}

/// Combine both shutdown steps, reporting the database step first.
fn shutdown_result(
    db_result: Result<(), ServerError>,
    joined: Result<std::io::Result<()>, JoinError>,
) -> Result<(), ServerError> {
    db_result?;
    joined.map_err(|e| ServerError::Join(e.to_string()))??;
    Ok(())
}
