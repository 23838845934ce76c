use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::AppState;
use shotchart::models::HealthResponse;
use shotchart::stats::ShotSource;

/// Health check endpoint
pub async fn health_check<S: ShotSource + 'static>(
    state: web::Data<Arc<AppState<S>>>,
) -> impl Responder {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        registry_size: state.pipeline.registry().len(),
    };

    HttpResponse::Ok().json(response)
}
