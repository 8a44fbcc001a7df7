// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DislikedName, Judgment, LikedName, Match, MatchRole, Name, NameId, QueuedName, Role, Stats,
    DISLIKES_BEFORE_REMOVED,
};
pub use requests::{ImportRequest, NameRequest};
pub use responses::{
    DislikeResponse, DislikedResponse, ErrorResponse, HealthResponse, ImportResponse,
    LikedResponse, MatchesResponse, NextResponse, OkResponse,
};
