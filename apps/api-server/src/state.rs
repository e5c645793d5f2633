//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::database::{DatabaseConnections, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let posts = Arc::new(PostgresPostRepository::new(conn.main.clone()));
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            posts,
                            db: Some(conn),
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("No database URL set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        let _ = db_config;

        Self::in_memory()
    }

    /// State around an explicitly provided repository, with no database
    /// connection attached.
    pub fn with_posts(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// State backed entirely by the in-memory repository. Used by tests and
    /// as the no-database fallback.
    pub fn in_memory() -> Self {
        Self::with_posts(Arc::new(InMemoryPostRepository::new()))
    }
}
