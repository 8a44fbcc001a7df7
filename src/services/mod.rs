// Service exports
pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::MemoryRepository;
pub use postgres::{JudgmentKind, PostgresRepository};
pub use repository::{Repository, RepositoryError};
