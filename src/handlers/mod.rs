pub mod chart;
pub mod health;
pub mod page;

use shotchart::chart::Figure;
use shotchart::error::{validate_query_field, AppError};
use shotchart::models::ChartQuery;
use shotchart::pipeline::QueryResult;
use shotchart::stats::ShotSource;

use crate::AppState;

/// Validate a query, resolve it and build the figure
pub(crate) async fn run_query<S: ShotSource>(
    state: &AppState<S>,
    query: &ChartQuery,
) -> Result<(QueryResult, Figure), AppError> {
    validate_query_field("player", query.player())?;
    validate_query_field("season", query.season())?;

    let result = state.pipeline.resolve(query.player(), query.season()).await;
    let figure = Figure::build(&result, &state.options);
    Ok((result, figure))
}
