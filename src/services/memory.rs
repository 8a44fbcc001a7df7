use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::seq::IteratorRandom;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::core::catalog::normalize_batch;
use crate::core::judgment::{is_match, is_pending_superlike, is_queued, tally};
use crate::models::{
    DislikedName, Judgment, LikedName, Match, MatchRole, NameId, QueuedName, Role, Stats,
};
use crate::services::repository::{Repository, RepositoryError};

#[derive(Debug, Default)]
struct State {
    /// Catalog, keyed and iterated by id
    names: BTreeMap<NameId, String>,
    judgments: HashMap<(Role, NameId), Judgment>,
    acknowledged: HashMap<(Role, NameId), DateTime<Utc>>,
}

impl State {
    fn judgment(&self, role: Role, id: &NameId) -> Option<&Judgment> {
        self.judgments.get(&(role, id.clone()))
    }

    fn require_name(&self, id: &NameId) -> Result<(), RepositoryError> {
        if self.names.contains_key(id) {
            Ok(())
        } else {
            Err(RepositoryError::UnknownName(id.clone()))
        }
    }

    /// Display texts of the catalog, ordered bytewise like `COLLATE "C"`
    fn names_by_text(&self) -> Vec<(&NameId, &String)> {
        let mut names: Vec<_> = self.names.iter().collect();
        names.sort_by(|a, b| a.1.cmp(b.1));
        names
    }

    fn like(&mut self, role: Role, id: &NameId, superlike: bool) -> Result<(), RepositoryError> {
        self.require_name(id)?;
        let next = Judgment::after_like(self.judgment(role, id), Utc::now(), superlike);
        self.judgments.insert((role, id.clone()), next);

        if superlike {
            let key = (role.inverse(), id.clone());
            if self.judgments.get(&key).is_some_and(Judgment::is_dislike) {
                self.judgments.remove(&key);
            }
        }
        Ok(())
    }

    fn remove_if(&mut self, role: Role, id: &NameId, pred: fn(&Judgment) -> bool) {
        let key = (role, id.clone());
        if self.judgments.get(&key).is_some_and(pred) {
            self.judgments.remove(&key);
        }
    }
}

/// Repository keeping all state in process memory
///
/// All state sits behind one lock, so every operation is serialized against
/// conflicting writers. Used by tests, benchmarks and the `memory` backend.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: RwLock<State>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn import_names(&self, names: &[String]) -> Result<usize, RepositoryError> {
        let batch = normalize_batch(names);
        let mut state = self.state.write().await;

        let mut inserted = 0;
        for name in batch {
            if !state.names.contains_key(&name.id) {
                state.names.insert(name.id, name.text);
                inserted += 1;
            }
        }

        tracing::debug!("Imported {} new names", inserted);
        Ok(inserted)
    }

    async fn like(&self, role: Role, name: &str) -> Result<(), RepositoryError> {
        let id = NameId::from_text(name);
        self.state.write().await.like(role, &id, false)
    }

    async fn superlike(&self, role: Role, name: &str) -> Result<(), RepositoryError> {
        let id = NameId::from_text(name);
        self.state.write().await.like(role, &id, true)
    }

    async fn undo_like(&self, role: Role, name: &str) -> Result<(), RepositoryError> {
        let id = NameId::from_text(name);
        self.state.write().await.remove_if(role, &id, Judgment::is_like);
        Ok(())
    }

    async fn dislike(&self, role: Role, name: &str) -> Result<u32, RepositoryError> {
        let id = NameId::from_text(name);
        let mut state = self.state.write().await;
        state.require_name(&id)?;

        let next = Judgment::after_dislike(state.judgment(role, &id), Utc::now());
        let count = next.dislike_count();
        state.judgments.insert((role, id), next);
        Ok(count)
    }

    async fn undo_dislike(&self, role: Role, name: &str) -> Result<(), RepositoryError> {
        let id = NameId::from_text(name);
        self.state.write().await.remove_if(role, &id, Judgment::is_dislike);
        Ok(())
    }

    async fn pending_superlike_for(&self, role: Role) -> Result<Option<String>, RepositoryError> {
        let state = self.state.read().await;
        let pending = state
            .names
            .iter()
            .find(|(id, _)| {
                is_pending_superlike(state.judgment(role, id), state.judgment(role.inverse(), id))
            })
            .map(|(_, text)| text.clone());
        Ok(pending)
    }

    async fn next_unseen_match(&self, role: Role) -> Result<Option<String>, RepositoryError> {
        let mut state = self.state.write().await;

        let next = state
            .names_by_text()
            .into_iter()
            .find(|(id, _)| {
                is_match(state.judgment(role, id), state.judgment(role.inverse(), id))
                    && !state.acknowledged.contains_key(&(role, (*id).clone()))
            })
            .map(|(id, text)| (id.clone(), text.clone()));

        if let Some((id, _)) = &next {
            state.acknowledged.insert((role, id.clone()), Utc::now());
        }
        Ok(next.map(|(_, text)| text))
    }

    async fn next_queued_name(&self, role: Role) -> Result<Option<QueuedName>, RepositoryError> {
        let state = self.state.read().await;
        let mut rng = rand::thread_rng();

        let picked = state
            .names
            .iter()
            .filter(|(id, _)| is_queued(state.judgment(role, id)))
            .choose(&mut rng)
            .map(|(id, text)| QueuedName {
                name: text.clone(),
                dislike_count: state.judgment(role, id).map_or(0, Judgment::dislike_count),
            });
        Ok(picked)
    }

    async fn liked_names(&self, role: Role) -> Result<Vec<LikedName>, RepositoryError> {
        let state = self.state.read().await;
        let liked = state
            .names_by_text()
            .into_iter()
            .filter_map(|(id, text)| match state.judgment(role, id) {
                Some(Judgment::Like { liked_at, superliked }) => Some(LikedName {
                    name: text.clone(),
                    superliked: *superliked,
                    liked_at: *liked_at,
                }),
                _ => None,
            })
            .collect();
        Ok(liked)
    }

    async fn disliked_names(&self, role: Role) -> Result<Vec<DislikedName>, RepositoryError> {
        let state = self.state.read().await;
        let disliked = state
            .names_by_text()
            .into_iter()
            .filter_map(|(id, text)| match state.judgment(role, id) {
                Some(Judgment::Dislike {
                    first_disliked_at,
                    last_disliked_at,
                    count,
                }) => Some(DislikedName {
                    name: text.clone(),
                    count: *count,
                    first_dislike: *first_disliked_at,
                    last_dislike: *last_disliked_at,
                }),
                _ => None,
            })
            .collect();
        Ok(disliked)
    }

    async fn matches(&self, _role: Role) -> Result<Vec<Match>, RepositoryError> {
        let state = self.state.read().await;
        let matches = state
            .names_by_text()
            .into_iter()
            .filter_map(|(id, text)| {
                match (state.judgment(Role::Mom, id), state.judgment(Role::Dad, id)) {
                    (
                        Some(Judgment::Like { liked_at: mom_at, superliked: mom_super }),
                        Some(Judgment::Like { liked_at: dad_at, superliked: dad_super }),
                    ) => Some(Match {
                        name: text.clone(),
                        mom: MatchRole { liked_at: *mom_at, superliked: *mom_super },
                        dad: MatchRole { liked_at: *dad_at, superliked: *dad_super },
                    }),
                    _ => None,
                }
            })
            .collect();
        Ok(matches)
    }

    async fn stats(&self, role: Role) -> Result<Stats, RepositoryError> {
        let state = self.state.read().await;
        let stats = tally(
            state
                .names
                .keys()
                .map(|id| (state.judgment(role, id), state.judgment(role.inverse(), id))),
        );
        Ok(stats)
    }

    async fn health_check(&self) -> Result<bool, RepositoryError> {
        Ok(true)
    }
}
