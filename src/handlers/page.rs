//! Form page: player name + season inputs above the rendered chart

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use super::run_query;
use crate::AppState;
use shotchart::chart::{escape_xml, render_svg, Figure};
use shotchart::error::AppError;
use shotchart::models::ChartQuery;
use shotchart::stats::ShotSource;

const DEFAULT_PLAYER: &str = "Brook Lopez";
const DEFAULT_SEASON: &str = "2018-19";
const BLANK_TITLE: &str = "Enter a player and season";

/// Index page. Without a query it shows the bare court.
pub async fn index<S: ShotSource + 'static>(
    state: web::Data<Arc<AppState<S>>>,
    query: web::Query<ChartQuery>,
) -> Result<HttpResponse, AppError> {
    let (figure, player, season) = if query.is_blank() {
        (
            Figure::empty_court(BLANK_TITLE, &state.options),
            DEFAULT_PLAYER,
            DEFAULT_SEASON,
        )
    } else {
        let (_, figure) = run_query(&state, &query).await?;
        (figure, query.player(), query.season())
    };

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(&render_svg(&figure), player, season)))
}

fn render_page(svg: &str, player: &str, season: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Shot Chart</title>
  <style>
    body {{ font-family: sans-serif; }}
    main {{ margin: auto; width: 1000px; }}
    form {{ display: flex; gap: 8px; justify-content: center; }}
  </style>
</head>
<body>
<main>
  <div class="chart">
{svg}  </div>
  <form method="get" action="/">
    <input type="text" name="player" value="{player}" aria-label="Player name">
    <input type="text" name="season" value="{season}" aria-label="Season">
    <button type="submit">Submit</button>
  </form>
</main>
</body>
</html>
"#,
        svg = svg,
        player = escape_xml(player),
        season = escape_xml(season),
    )
}
