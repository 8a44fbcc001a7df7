use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DislikedName, LikedName, Match, NameId, QueuedName, Role, Stats};

/// Errors that can occur when reading or writing judgments
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Unknown name: {0}")]
    UnknownName(NameId),
}

impl RepositoryError {
    /// Whether the failure is transient and the call may be retried
    ///
    /// Connection, pool and IO failures qualify, as do serialization failures
    /// and deadlocks reported by PostgreSQL. Nothing was committed when this
    /// returns true.
    pub fn is_retryable(&self) -> bool {
        match self {
            RepositoryError::SqlxError(err) => match err {
                sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed => true,
                sqlx::Error::Database(db) => {
                    matches!(db.code().as_deref(), Some("40001") | Some("40P01"))
                }
                _ => false,
            },
            RepositoryError::MigrateError(_) => false,
            RepositoryError::UnknownName(_) => false,
        }
    }
}

/// Data access contract used by the matching engine and the HTTP layer
///
/// Every mutating operation is atomic: either all of its effects are visible
/// or none are. Absence (no next name, no pending superlike, no unseen match)
/// is `None`, never an error.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Insert names not yet in the catalog, returning how many were new
    async fn import_names(&self, names: &[String]) -> Result<usize, RepositoryError>;

    async fn like(&self, role: Role, name: &str) -> Result<(), RepositoryError>;

    /// Like with the superlike flag, also clearing the partner's dislike
    async fn superlike(&self, role: Role, name: &str) -> Result<(), RepositoryError>;

    async fn undo_like(&self, role: Role, name: &str) -> Result<(), RepositoryError>;

    /// Dislike a name, returning how many times the role has now disliked it
    async fn dislike(&self, role: Role, name: &str) -> Result<u32, RepositoryError>;

    async fn undo_dislike(&self, role: Role, name: &str) -> Result<(), RepositoryError>;

    /// A name the partner superliked that `role` has not judged yet
    async fn pending_superlike_for(&self, role: Role) -> Result<Option<String>, RepositoryError>;

    /// The first unacknowledged match by name, acknowledged in the process
    async fn next_unseen_match(&self, role: Role) -> Result<Option<String>, RepositoryError>;

    /// A random name still in the role's queue
    async fn next_queued_name(&self, role: Role) -> Result<Option<QueuedName>, RepositoryError>;

    async fn liked_names(&self, role: Role) -> Result<Vec<LikedName>, RepositoryError>;

    async fn disliked_names(&self, role: Role) -> Result<Vec<DislikedName>, RepositoryError>;

    async fn matches(&self, role: Role) -> Result<Vec<Match>, RepositoryError>;

    async fn stats(&self, role: Role) -> Result<Stats, RepositoryError>;

    async fn health_check(&self) -> Result<bool, RepositoryError>;
}
