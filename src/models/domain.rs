use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of dislikes after which a name is no longer offered to a role
pub const DISLIKES_BEFORE_REMOVED: u32 = 2;

/// One of the two participants judging the shared catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mom,
    Dad,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Mom, Role::Dad];

    /// The partner role (mom turns into dad, and vice versa)
    pub fn inverse(self) -> Role {
        match self {
            Role::Mom => Role::Dad,
            Role::Dad => Role::Mom,
        }
    }

    /// Stable numeric id used in storage
    pub fn id(self) -> i16 {
        match self {
            Role::Mom => 0,
            Role::Dad => 1,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Mom => f.write_str("mom"),
            Role::Dad => f.write_str("dad"),
        }
    }
}

/// Normalized identity of a name
///
/// Derived from the display text: trimmed, lowercased, and with every run of
/// whitespace replaced by a single hyphen. Normalizing an id yields the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameId(String);

impl NameId {
    pub fn from_text(text: &str) -> Self {
        let id = text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate name in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub id: NameId,
    pub text: String,
}

impl Name {
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        Self {
            id: NameId::from_text(&text),
            text,
        }
    }
}

/// Decision a role holds on a name
///
/// A role with no judgment on a name still has it queued; that state is the
/// absence of a `Judgment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Judgment {
    Like {
        liked_at: DateTime<Utc>,
        superliked: bool,
    },
    Dislike {
        first_disliked_at: DateTime<Utc>,
        last_disliked_at: DateTime<Utc>,
        count: u32,
    },
}

/// A name that has been liked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedName {
    pub name: String,
    pub superliked: bool,
    #[serde(rename = "likedAt")]
    pub liked_at: DateTime<Utc>,
}

/// A name that has been disliked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DislikedName {
    pub name: String,
    pub count: u32,
    #[serde(rename = "firstDislike")]
    pub first_dislike: DateTime<Utc>,
    #[serde(rename = "lastDislike")]
    pub last_dislike: DateTime<Utc>,
}

/// When and how one role took part in a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchRole {
    #[serde(rename = "likedAt")]
    pub liked_at: DateTime<Utc>,
    pub superliked: bool,
}

/// A name liked by both roles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub name: String,
    pub mom: MatchRole,
    pub dad: MatchRole,
}

impl Match {
    pub fn role(&self, role: Role) -> &MatchRole {
        match role {
            Role::Mom => &self.mom,
            Role::Dad => &self.dad,
        }
    }
}

/// Next name in a role's queue, with how often the role already disliked it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedName {
    pub name: String,
    #[serde(rename = "dislikeCount")]
    pub dislike_count: u32,
}

/// Progress of a role through the catalog
///
/// The categories overlap: a name disliked fewer than
/// [`DISLIKES_BEFORE_REMOVED`] times counts as both disliked and queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: u64,
    pub liked: u64,
    pub disliked: u64,
    pub queued: u64,
    pub matched: u64,
}

impl Stats {
    /// Percentage of the catalog no longer in the queue
    pub fn progress_percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let done = self.total.saturating_sub(self.queued);
        (done * 100 / self.total) as u8
    }
}
