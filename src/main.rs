use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod handlers;

use handlers::{chart, health, page};
use shotchart::chart::ChartOptions;
use shotchart::pipeline::ShotQueryPipeline;
use shotchart::stats::{StatsClient, StatsConfig};

/// Application state shared across handlers
pub struct AppState<S> {
    pub pipeline: ShotQueryPipeline<S>,
    pub options: ChartOptions,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{}:{}", host, port);

    let config = StatsConfig::default();
    info!("Using stats API at {}", config.base_url);
    let client = StatsClient::new(config).map_err(std::io::Error::other)?;

    let pipeline = ShotQueryPipeline::new(client);
    info!(
        "Player registry: {} players, seasons {}-{}",
        pipeline.registry().len(),
        pipeline.rules().floor_start_year,
        pipeline.rules().current_year
    );

    let app_state = Arc::new(AppState {
        pipeline,
        options: ChartOptions::default(),
    });

    info!("Starting shot chart server at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .route("/", web::get().to(page::index::<StatsClient>))
            .route("/health", web::get().to(health::health_check::<StatsClient>))
            .route("/api/chart", web::get().to(chart::chart_json::<StatsClient>))
            .route("/chart.svg", web::get().to(chart::chart_svg::<StatsClient>))
    })
    .bind(&addr)?
    .run()
    .await
}
