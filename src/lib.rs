//! Babyname Match - two-party name judging and matching service
//!
//! Two fixed roles judge a shared catalog of names. Names both roles like
//! become matches; the matcher decides what each role is shown next.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, Presentation};
pub use models::{DislikedName, Judgment, LikedName, Match, NameId, QueuedName, Role, Stats};
pub use services::{MemoryRepository, PostgresRepository, Repository, RepositoryError};
