//! HTTP handlers for CBT endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{storage_failure, validation_failure};
use crate::application::handlers::cbt::{
    AnalyzeThoughtHandler, CbtError, GetCbtProgressHandler, RecordThoughtCommand,
    RecordThoughtHandler,
};
use crate::domain::cbt::DistortionCatalog;

use super::dto::{
    AnalyzeThoughtRequest, DistortionListResponse, RecordThoughtRequest, RecordThoughtResponse,
};

#[derive(Clone)]
pub struct CbtHandlers {
    analyze_handler: Arc<AnalyzeThoughtHandler>,
    record_handler: Arc<RecordThoughtHandler>,
    progress_handler: Arc<GetCbtProgressHandler>,
}

impl CbtHandlers {
    pub fn new(
        analyze_handler: Arc<AnalyzeThoughtHandler>,
        record_handler: Arc<RecordThoughtHandler>,
        progress_handler: Arc<GetCbtProgressHandler>,
    ) -> Self {
        Self {
            analyze_handler,
            record_handler,
            progress_handler,
        }
    }
}

/// POST /api/cbt/analyze - Check a thought for distortions
pub async fn analyze_thought(
    State(handlers): State<CbtHandlers>,
    Json(req): Json<AnalyzeThoughtRequest>,
) -> Response {
    match handlers.analyze_handler.handle(&req.thought) {
        Ok(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
        Err(e) => handle_cbt_error(e),
    }
}

/// POST /api/cbt/thought-records - Save a thought record with an insight
pub async fn record_thought(
    State(handlers): State<CbtHandlers>,
    Json(req): Json<RecordThoughtRequest>,
) -> Response {
    let cmd = match RecordThoughtCommand::try_from(req) {
        Ok(cmd) => cmd,
        Err(e) => return validation_failure(e),
    };

    match handlers.record_handler.handle(cmd).await {
        Ok(result) => {
            let response: RecordThoughtResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_cbt_error(e),
    }
}

/// GET /api/cbt/progress - Summary of saved thought records
pub async fn get_progress(State(handlers): State<CbtHandlers>) -> Response {
    match handlers.progress_handler.handle().await {
        Ok(progress) => (StatusCode::OK, Json(progress)).into_response(),
        Err(e) => handle_cbt_error(e),
    }
}

/// GET /api/cbt/distortions - Distortion reference list
pub async fn list_distortions() -> Response {
    let response = DistortionListResponse {
        distortions: DistortionCatalog::standard().entries(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn handle_cbt_error(error: CbtError) -> Response {
    match error {
        CbtError::Validation(e) => validation_failure(e),
        CbtError::Storage(e) => storage_failure(e),
    }
}
