//! Liveness endpoint reporting screen and provider status.

use std::sync::Arc;

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde::Serialize;

use crate::domain::cbt::DistortionScreen;
use crate::domain::safety::RiskScreen;
use crate::ports::ProviderInfo;

#[derive(Clone)]
pub struct HealthState {
    risk_screen: Arc<RiskScreen>,
    distortion_screen: Arc<DistortionScreen>,
    provider: ProviderInfo,
}

impl HealthState {
    pub fn new(
        risk_screen: Arc<RiskScreen>,
        distortion_screen: Arc<DistortionScreen>,
        provider: ProviderInfo,
    ) -> Self {
        Self {
            risk_screen,
            distortion_screen,
            provider,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// "ok", or "degraded" when a screen fell back to its safe default.
    pub status: &'static str,
    pub risk_screen: &'static str,
    pub distortion_screen: &'static str,
    pub provider: String,
    pub model: String,
}

fn screen_status(degraded: bool) -> &'static str {
    if degraded {
        "degraded"
    } else {
        "ready"
    }
}

/// GET /api/health
pub async fn health(State(state): State<HealthState>) -> impl IntoResponse {
    let risk_degraded = state.risk_screen.is_degraded();
    let distortion_degraded = state.distortion_screen.is_degraded();
    let response = HealthResponse {
        status: if risk_degraded || distortion_degraded {
            "degraded"
        } else {
            "ok"
        },
        risk_screen: screen_status(risk_degraded),
        distortion_screen: screen_status(distortion_degraded),
        provider: state.provider.name,
        model: state.provider.model,
    };
    (StatusCode::OK, Json(response))
}

pub fn health_routes(state: HealthState) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}
