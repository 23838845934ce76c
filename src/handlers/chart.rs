use actix_web::{web, HttpResponse};
use std::sync::Arc;

use super::run_query;
use crate::AppState;
use shotchart::chart::render_svg;
use shotchart::error::AppError;
use shotchart::models::{ChartQuery, ChartResponse};
use shotchart::stats::ShotSource;

/// Chart as JSON: outcome, title, series and the Plotly figure
///
/// Bad input still answers 200 with an error title; the chart always renders.
pub async fn chart_json<S: ShotSource + 'static>(
    state: web::Data<Arc<AppState<S>>>,
    query: web::Query<ChartQuery>,
) -> Result<HttpResponse, AppError> {
    let (result, figure) = run_query(&state, &query).await?;
    Ok(HttpResponse::Ok().json(ChartResponse::new(&result, figure)))
}

/// Chart as a standalone SVG image
pub async fn chart_svg<S: ShotSource + 'static>(
    state: web::Data<Arc<AppState<S>>>,
    query: web::Query<ChartQuery>,
) -> Result<HttpResponse, AppError> {
    let (_, figure) = run_query(&state, &query).await?;
    Ok(HttpResponse::Ok()
        .content_type("image/svg+xml")
        .body(render_svg(&figure)))
}
