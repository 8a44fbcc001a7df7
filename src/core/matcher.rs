use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::{Role, Stats};
use crate::services::{Repository, RepositoryError};

/// What a role should be shown next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Presentation {
    /// A match the role had not been shown yet (now acknowledged)
    Match { name: String },
    /// A name the partner superliked and the role has not judged
    Superlike { from: Role, name: String },
    /// The next name from the role's queue
    Name {
        name: String,
        #[serde(rename = "dislikeCount")]
        dislike_count: u32,
        progress: u8,
    },
    /// Nothing left to judge
    Empty,
}

/// Main decision orchestrator - picks what a role sees next
///
/// # Priority
/// 1. Unseen match (consumed by presenting it)
/// 2. Pending superlike from the partner
/// 3. Random queued name
/// 4. Empty
///
/// Only the first step changes state.
#[derive(Clone)]
pub struct Matcher {
    repo: Arc<dyn Repository>,
}

impl Matcher {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<dyn Repository> {
        &self.repo
    }

    /// Decide what `role` is shown next
    pub async fn next_for(&self, role: Role) -> Result<Presentation, RepositoryError> {
        if let Some(name) = self.repo.next_unseen_match(role).await? {
            tracing::info!("Presenting new match '{}' to {}", name, role);
            return Ok(Presentation::Match { name });
        }

        if let Some(name) = self.repo.pending_superlike_for(role).await? {
            tracing::debug!("Presenting superlike of '{}' by {} to {}", name, role.inverse(), role);
            return Ok(Presentation::Superlike {
                from: role.inverse(),
                name,
            });
        }

        if let Some(queued) = self.repo.next_queued_name(role).await? {
            let stats = self.repo.stats(role).await?;
            return Ok(Presentation::Name {
                name: queued.name,
                dislike_count: queued.dislike_count,
                progress: stats.progress_percentage(),
            });
        }

        tracing::debug!("Queue is empty for {}", role);
        Ok(Presentation::Empty)
    }

    pub async fn stats(&self, role: Role) -> Result<Stats, RepositoryError> {
        self.repo.stats(role).await
    }
}
