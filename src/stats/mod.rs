//! Client for the NBA stats API shot chart endpoint
//!
//! # Example
//!
//! ```no_run
//! use shotchart::players::PlayerId;
//! use shotchart::season::SeasonId;
//! use shotchart::stats::{ShotSource, StatsClient, StatsConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let client = StatsClient::new(StatsConfig::default())?;
//!     let shots = client
//!         .fetch_shots(PlayerId(201572), SeasonId::from_start_year(2018))
//!         .await?;
//!     println!("Fetched {} attempts", shots.len());
//!     Ok(())
//! }
//! ```

mod client;
mod shotchart;

pub use client::{StatsClient, StatsConfig, StatsError, DEFAULT_BASE_URL};
pub use shotchart::parse_shot_chart;

use crate::players::PlayerId;
use crate::season::SeasonId;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One field-goal attempt as reported upstream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawShot {
    pub loc_x: f64,
    pub loc_y: f64,
    pub made: bool,
}

/// Anything that can produce a player's field-goal attempts for a season
pub trait ShotSource {
    fn fetch_shots(
        &self,
        player: PlayerId,
        season: SeasonId,
    ) -> impl Future<Output = Result<Vec<RawShot>, StatsError>>;
}

/// In-memory source returning the same attempts for every query
///
/// Counts fetches so callers can check how often the upstream was hit.
#[derive(Debug, Default)]
pub struct FixedShots {
    shots: Vec<RawShot>,
    fail: bool,
    calls: AtomicUsize,
}

impl FixedShots {
    pub fn new(shots: Vec<RawShot>) -> Self {
        Self {
            shots,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Source whose every fetch fails like an unreachable upstream
    pub fn unavailable() -> Self {
        Self {
            shots: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ShotSource for FixedShots {
    async fn fetch_shots(
        &self,
        _player: PlayerId,
        _season: SeasonId,
    ) -> Result<Vec<RawShot>, StatsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StatsError::Status(503));
        }
        Ok(self.shots.clone())
    }
}
