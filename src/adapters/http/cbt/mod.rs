//! HTTP adapter for CBT endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalyzeThoughtRequest, DistortionListResponse, RecordThoughtRequest, RecordThoughtResponse,
};
pub use handlers::CbtHandlers;
pub use routes::cbt_routes;
