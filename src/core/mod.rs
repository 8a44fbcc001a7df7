// Core algorithm exports
pub mod catalog;
pub mod judgment;
pub mod matcher;

pub use catalog::{normalize_batch, parse_import_text};
pub use judgment::{is_match, is_pending_superlike, is_queued, tally};
pub use matcher::{Matcher, Presentation};
