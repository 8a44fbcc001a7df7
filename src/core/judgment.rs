//! Judgment state transitions and the predicates the matching engine is
//! built from.
//!
//! Every transition takes the current state of one (role, name) pair and
//! returns the next one. Storage backends either apply these functions
//! directly (in-memory) or express the same rules as SQL upserts.

use chrono::{DateTime, Utc};

use crate::models::{Judgment, Stats, DISLIKES_BEFORE_REMOVED};

impl Judgment {
    /// State after a like or superlike
    ///
    /// An existing like is left exactly as it is, so neither a repeated like
    /// nor a later superlike changes `liked_at` or the superliked flag.
    pub fn after_like(current: Option<&Judgment>, now: DateTime<Utc>, superlike: bool) -> Judgment {
        match current {
            Some(like @ Judgment::Like { .. }) => *like,
            _ => Judgment::Like {
                liked_at: now,
                superliked: superlike,
            },
        }
    }

    /// State after a dislike
    pub fn after_dislike(current: Option<&Judgment>, now: DateTime<Utc>) -> Judgment {
        match current {
            Some(Judgment::Dislike {
                first_disliked_at,
                count,
                ..
            }) => Judgment::Dislike {
                first_disliked_at: *first_disliked_at,
                last_disliked_at: now,
                count: count.saturating_add(1),
            },
            _ => Judgment::Dislike {
                first_disliked_at: now,
                last_disliked_at: now,
                count: 1,
            },
        }
    }

    pub fn is_like(&self) -> bool {
        matches!(self, Judgment::Like { .. })
    }

    pub fn is_superlike(&self) -> bool {
        matches!(self, Judgment::Like { superliked: true, .. })
    }

    pub fn is_dislike(&self) -> bool {
        matches!(self, Judgment::Dislike { .. })
    }

    pub fn dislike_count(&self) -> u32 {
        match self {
            Judgment::Dislike { count, .. } => *count,
            Judgment::Like { .. } => 0,
        }
    }
}

/// Whether a name is still offered to a role holding `own`
pub fn is_queued(own: Option<&Judgment>) -> bool {
    match own {
        None => true,
        Some(Judgment::Like { .. }) => false,
        Some(Judgment::Dislike { count, .. }) => *count < DISLIKES_BEFORE_REMOVED,
    }
}

/// Whether both roles like the name
pub fn is_match(own: Option<&Judgment>, other: Option<&Judgment>) -> bool {
    own.is_some_and(Judgment::is_like) && other.is_some_and(Judgment::is_like)
}

/// Whether the partner's superlike still awaits a reaction from this role
pub fn is_pending_superlike(own: Option<&Judgment>, other: Option<&Judgment>) -> bool {
    own.is_none() && other.is_some_and(Judgment::is_superlike)
}

/// Aggregate stats from `(own, other)` judgment pairs, one per catalog name
pub fn tally<'a, I>(pairs: I) -> Stats
where
    I: IntoIterator<Item = (Option<&'a Judgment>, Option<&'a Judgment>)>,
{
    let mut stats = Stats::default();
    for (own, other) in pairs {
        stats.total += 1;
        match own {
            Some(Judgment::Like { .. }) => stats.liked += 1,
            Some(Judgment::Dislike { .. }) => stats.disliked += 1,
            None => {}
        }
        if is_queued(own) {
            stats.queued += 1;
        }
        if is_match(own, other) {
            stats.matched += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_like_is_idempotent() {
        let first = Judgment::after_like(None, at(0), false);
        let again = Judgment::after_like(Some(&first), at(10), false);
        assert_eq!(first, again);
    }

    #[test]
    fn test_like_replaces_dislike() {
        let disliked = Judgment::after_dislike(None, at(0));
        let liked = Judgment::after_like(Some(&disliked), at(5), false);
        assert_eq!(liked, Judgment::Like { liked_at: at(5), superliked: false });
    }

    #[test]
    fn test_existing_like_is_never_upgraded_or_downgraded() {
        let liked = Judgment::after_like(None, at(0), false);
        let after_superlike = Judgment::after_like(Some(&liked), at(1), true);
        assert_eq!(after_superlike, Judgment::Like { liked_at: at(0), superliked: false });

        let superliked = Judgment::after_like(None, at(0), true);

        let still_super = Judgment::after_like(Some(&superliked), at(2), false);
        assert!(still_super.is_superlike());
    }

    #[test]
    fn test_dislike_counts_up() {
        let mut state = None;
        for i in 0..3 {
            state = Some(Judgment::after_dislike(state.as_ref(), at(i)));
        }
        assert_eq!(
            state,
            Some(Judgment::Dislike {
                first_disliked_at: at(0),
                last_disliked_at: at(2),
                count: 3,
            })
        );
    }

    #[test]
    fn test_dislike_after_like_restarts_count() {
        let liked = Judgment::after_like(None, at(0), true);
        let disliked = Judgment::after_dislike(Some(&liked), at(0) + Duration::seconds(3));
        assert_eq!(disliked.dislike_count(), 1);
        assert!(!disliked.is_like());
    }

    #[test]
    fn test_queue_threshold() {
        let once = Judgment::after_dislike(None, at(0));
        let twice = Judgment::after_dislike(Some(&once), at(1));
        let liked = Judgment::after_like(None, at(0), false);

        assert!(is_queued(None));
        assert!(is_queued(Some(&once)));
        assert!(!is_queued(Some(&twice)));
        assert!(!is_queued(Some(&liked)));
    }

    #[test]
    fn test_pending_superlike_needs_untouched_name() {
        let superliked = Judgment::after_like(None, at(0), true);
        let plain = Judgment::after_like(None, at(0), false);
        let disliked = Judgment::after_dislike(None, at(0));

        assert!(is_pending_superlike(None, Some(&superliked)));
        assert!(!is_pending_superlike(None, Some(&plain)));
        assert!(!is_pending_superlike(Some(&disliked), Some(&superliked)));
        assert!(!is_pending_superlike(Some(&plain), Some(&superliked)));
    }

    #[test]
    fn test_tally_categories_overlap() {
        let liked = Judgment::after_like(None, at(0), false);
        let once = Judgment::after_dislike(None, at(0));
        let twice = Judgment::after_dislike(Some(&once), at(1));

        let stats = tally([
            (Some(&liked), Some(&liked)),
            (Some(&liked), None),
            (Some(&once), None),
            (Some(&twice), Some(&liked)),
            (None, Some(&liked)),
        ]);

        assert_eq!(
            stats,
            Stats { total: 5, liked: 2, disliked: 2, queued: 2, matched: 1 }
        );
    }
}
