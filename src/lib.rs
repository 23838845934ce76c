//! Shotchart - NBA shot location charts
//!
//! This library provides:
//! - A static half-court diagram used as the backdrop of every chart
//! - Season parsing and validation ("2018-19" or a bare start year)
//! - Player name resolution against a built-in registry
//! - A stats API client for field-goal attempts
//! - The query pipeline that turns (player, season) into made/missed series
//! - Plotly-compatible figures and standalone SVG rendering
//!
//! # Example
//!
//! ```no_run
//! use shotchart::chart::{render_svg, ChartOptions, Figure};
//! use shotchart::pipeline::ShotQueryPipeline;
//! use shotchart::stats::{StatsClient, StatsConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let pipeline = ShotQueryPipeline::new(StatsClient::new(StatsConfig::default())?);
//!     let result = pipeline.resolve("Brook Lopez", "2018-19").await;
//!
//!     let figure = Figure::build(&result, &ChartOptions::default());
//!     println!("{}", render_svg(&figure));
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod court;
pub mod models;
pub mod pipeline;
pub mod players;
pub mod season;
pub mod stats;

// API-specific modules (only available with api feature)
#[cfg(feature = "api")]
pub mod error;

// Re-export commonly used types
pub use chart::{render_svg, ChartOptions, Figure};
pub use court::{court_shapes, CourtShape};
pub use pipeline::{QueryFailure, QueryResult, ShotChartData, ShotQueryPipeline, ShotRecord};
pub use players::{Player, PlayerId, PlayerRegistry};
pub use season::{SeasonId, SeasonInput, SeasonRules};
pub use stats::{ShotSource, StatsClient, StatsConfig, StatsError};
