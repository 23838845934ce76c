//! HTTP client for stats.nba.com

use super::{parse_shot_chart, RawShot, ShotSource};
use crate::players::PlayerId;
use crate::season::SeasonId;
use std::time::Duration;
use thiserror::Error;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://stats.nba.com/stats";

/// Shot chart endpoint, relative to the API root
const SHOT_CHART_PATH: &str = "shotchartdetail";

/// Stats API errors
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Stats API returned status {0}")]
    Status(u16),

    #[error("Failed to parse shot chart: {0}")]
    ParseError(String),

    #[error("Shot chart is missing column {0}")]
    MissingColumn(&'static str),
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// API root, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
    /// "Regular Season", "Playoffs", ...
    pub season_type: String,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            season_type: "Regular Season".to_string(),
        }
    }
}

/// Shot chart client. One request per fetch, no retries.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: reqwest::Client,
    config: StatsConfig,
}

impl StatsClient {
    /// Create a new client with the given configuration
    pub fn new(config: StatsConfig) -> Result<Self, StatsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Full endpoint URL
    fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            SHOT_CHART_PATH
        )
    }

    /// Query parameters for all field-goal attempts across all teams
    ///
    /// The endpoint rejects requests that omit any filter, so the unused
    /// ones are sent blank or zeroed.
    fn query_params(&self, player: PlayerId, season: SeasonId) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("TeamID", "0".to_string()),
            ("PlayerID", player.to_string()),
            ("Season", season.to_string()),
            ("SeasonType", self.config.season_type.clone()),
            ("ContextMeasure", "FGA".to_string()),
            ("LeagueID", "00".to_string()),
        ];

        for zeroed in ["LastNGames", "Month", "OpponentTeamID", "Period"] {
            params.push((zeroed, "0".to_string()));
        }

        for blank in [
            "AheadBehind",
            "ClutchTime",
            "ContextFilter",
            "DateFrom",
            "DateTo",
            "EndPeriod",
            "EndRange",
            "GameID",
            "GameSegment",
            "Location",
            "Outcome",
            "PlayerPosition",
            "PointDiff",
            "Position",
            "RangeType",
            "RookieYear",
            "SeasonSegment",
            "StartPeriod",
            "StartRange",
            "VsConference",
            "VsDivision",
        ] {
            params.push((blank, String::new()));
        }

        params
    }

    /// Fetch every field-goal attempt for a player's season
    pub async fn fetch_shot_chart(
        &self,
        player: PlayerId,
        season: SeasonId,
    ) -> Result<Vec<RawShot>, StatsError> {
        let url = self.endpoint();
        tracing::info!("Fetching shot chart: {} player={} season={}", url, player, season);

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(player, season))
            .header("Accept", "application/json, text/plain, */*")
            .header("Referer", "https://www.nba.com/")
            .header("Origin", "https://www.nba.com")
            .header("x-nba-stats-origin", "stats")
            .header("x-nba-stats-token", "true")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Shot chart request failed with status {}", status);
            return Err(StatsError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let shots = parse_shot_chart(&body)?;
        tracing::debug!("Parsed {} attempts", shots.len());
        Ok(shots)
    }
}

impl ShotSource for StatsClient {
    async fn fetch_shots(
        &self,
        player: PlayerId,
        season: SeasonId,
    ) -> Result<Vec<RawShot>, StatsError> {
        self.fetch_shot_chart(player, season).await
    }
}
