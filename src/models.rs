use serde::{Deserialize, Serialize};

use crate::chart::Figure;
use crate::pipeline::{QueryResult, ShotRecord, ShotSummary};

/// Chart query from the form or the JSON API
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ChartQuery {
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
}

impl ChartQuery {
    /// True when the form has not been submitted yet
    pub fn is_blank(&self) -> bool {
        self.player.is_none() && self.season.is_none()
    }

    pub fn player(&self) -> &str {
        self.player.as_deref().unwrap_or_default()
    }

    pub fn season(&self) -> &str {
        self.season.as_deref().unwrap_or_default()
    }
}

/// Chart API response
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    /// "success" or the failure class ("bad_player", "bad_season", ...)
    pub outcome: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ShotSummary>,
    pub made: Vec<ShotRecord>,
    pub missed: Vec<ShotRecord>,
    pub figure: Figure,
}

impl ChartResponse {
    pub fn new(result: &QueryResult, figure: Figure) -> Self {
        let outcome = result
            .failure()
            .map_or("success", |reason| reason.code())
            .to_string();

        let summary = match result {
            QueryResult::Success(data) => Some(data.summary()),
            QueryResult::Failure(_) => None,
        };

        Self {
            outcome,
            title: result.title(),
            summary,
            made: result.made().to_vec(),
            missed: result.missed().to_vec(),
            figure,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub registry_size: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
