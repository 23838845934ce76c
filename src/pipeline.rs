//! Shot query pipeline: (player name, season) -> chart-ready result
//!
//! Both inputs are validated before anything is fetched. Bad input and an
//! unreachable upstream come back as [`QueryFailure`] values, never as errors.

use serde::Serialize;
use tracing::{info, warn};

use crate::players::{PlayerId, PlayerRegistry};
use crate::season::{SeasonInput, SeasonRules};
use crate::stats::{RawShot, ShotSource};

/// One attempt in display orientation (x mirrored from the upstream feed)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShotRecord {
    pub x: f64,
    pub y: f64,
    pub made: bool,
}

impl From<RawShot> for ShotRecord {
    fn from(raw: RawShot) -> Self {
        Self {
            x: -raw.loc_x,
            y: raw.loc_y,
            made: raw.made,
        }
    }
}

/// Why a query produced no chart data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryFailure {
    BadPlayer,
    BadSeason,
    BadBoth,
    UpstreamUnavailable,
}

impl QueryFailure {
    /// Stable machine-readable name
    pub fn code(&self) -> &'static str {
        match self {
            QueryFailure::BadPlayer => "bad_player",
            QueryFailure::BadSeason => "bad_season",
            QueryFailure::BadBoth => "bad_both",
            QueryFailure::UpstreamUnavailable => "upstream_unavailable",
        }
    }

    /// Chart title shown in place of data
    pub fn title(&self) -> &'static str {
        match self {
            QueryFailure::BadPlayer => "Error: Invalid input for player name",
            QueryFailure::BadSeason => "Error: Invalid input for season year",
            QueryFailure::BadBoth => "Error: Invalid input for both player name and season year",
            QueryFailure::UpstreamUnavailable => "Error: Shot data service is unavailable",
        }
    }
}

/// A player's attempts for one season, split by outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotChartData {
    /// Name as entered
    pub player_label: String,
    /// Canonical "YYYY-YY"
    pub season_label: String,
    pub player_id: PlayerId,
    pub made: Vec<ShotRecord>,
    pub missed: Vec<ShotRecord>,
}

impl ShotChartData {
    pub fn title(&self) -> String {
        format!(
            "Shots by {} in the {} season",
            self.player_label, self.season_label
        )
    }

    pub fn summary(&self) -> ShotSummary {
        let made = self.made.len();
        let missed = self.missed.len();
        let attempts = made + missed;
        let fg_pct = if attempts == 0 {
            0.0
        } else {
            made as f64 / attempts as f64
        };

        ShotSummary {
            attempts,
            made,
            missed,
            fg_pct,
        }
    }
}

/// Make/miss totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShotSummary {
    pub attempts: usize,
    pub made: usize,
    pub missed: usize,
    /// Field-goal percentage in [0, 1]
    pub fg_pct: f64,
}

/// Outcome of one query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Success(ShotChartData),
    Failure(QueryFailure),
}

impl QueryResult {
    pub fn title(&self) -> String {
        match self {
            QueryResult::Success(data) => data.title(),
            QueryResult::Failure(reason) => reason.title().to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::Success(_))
    }

    pub fn failure(&self) -> Option<QueryFailure> {
        match self {
            QueryResult::Success(_) => None,
            QueryResult::Failure(reason) => Some(*reason),
        }
    }

    /// Made shots, empty on failure
    pub fn made(&self) -> &[ShotRecord] {
        match self {
            QueryResult::Success(data) => &data.made,
            QueryResult::Failure(_) => &[],
        }
    }

    /// Missed shots, empty on failure
    pub fn missed(&self) -> &[ShotRecord] {
        match self {
            QueryResult::Success(data) => &data.missed,
            QueryResult::Failure(_) => &[],
        }
    }
}

/// Resolves shot chart queries against a registry and a shot source
pub struct ShotQueryPipeline<S> {
    source: S,
    registry: PlayerRegistry,
    rules: SeasonRules,
}

impl<S: ShotSource> ShotQueryPipeline<S> {
    /// Pipeline with the built-in registry and the current season range
    pub fn new(source: S) -> Self {
        Self::with_parts(source, PlayerRegistry::builtin(), SeasonRules::default())
    }

    pub fn with_parts(source: S, registry: PlayerRegistry, rules: SeasonRules) -> Self {
        Self {
            source,
            registry,
            rules,
        }
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn rules(&self) -> &SeasonRules {
        &self.rules
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve a query. At most one upstream fetch, only when both inputs are valid.
    pub async fn resolve(&self, name: &str, season_input: impl Into<SeasonInput>) -> QueryResult {
        let season_input = season_input.into();
        info!("Resolving shot chart: player={:?} season={:?}", name, season_input);

        let season = self.rules.validate(&season_input);
        if let Err(e) = &season {
            info!("Rejected season: {}", e);
        }

        let player = self.registry.find_by_full_name(name);
        if player.is_none() {
            info!("No registry match for {:?}", name);
        }

        let (player, season) = match (player, season) {
            (Some(player), Ok(season)) => (player, season),
            (None, Ok(_)) => return QueryResult::Failure(QueryFailure::BadPlayer),
            (Some(_), Err(_)) => return QueryResult::Failure(QueryFailure::BadSeason),
            (None, Err(_)) => return QueryResult::Failure(QueryFailure::BadBoth),
        };

        let raw = match self.source.fetch_shots(player.id, season).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Shot chart fetch failed for {} {}: {}", player.full_name, season, e);
                return QueryResult::Failure(QueryFailure::UpstreamUnavailable);
            }
        };

        // No attempts is indistinguishable from a season the player never played.
        if raw.is_empty() {
            info!("No attempts for {} in {}", player.full_name, season);
            return QueryResult::Failure(QueryFailure::BadSeason);
        }

        let (made, missed): (Vec<ShotRecord>, Vec<ShotRecord>) = raw
            .into_iter()
            .map(ShotRecord::from)
            .partition(|shot| shot.made);

        info!(
            "Resolved {} attempts for {} in {} ({} made)",
            made.len() + missed.len(),
            player.full_name,
            season,
            made.len()
        );

        QueryResult::Success(ShotChartData {
            player_label: name.trim().to_string(),
            season_label: season.to_string(),
            player_id: player.id,
            made,
            missed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::FixedShots;

    fn shot(loc_x: f64, loc_y: f64, made: bool) -> RawShot {
        RawShot { loc_x, loc_y, made }
    }

    fn sample() -> Vec<RawShot> {
        vec![
            shot(-12.0, 240.0, true),
            shot(230.0, 15.0, false),
            shot(0.0, 5.0, true),
            shot(-150.0, 180.0, false),
            shot(88.0, 60.0, true),
        ]
    }

    fn pipeline(source: FixedShots) -> ShotQueryPipeline<FixedShots> {
        ShotQueryPipeline::with_parts(source, PlayerRegistry::builtin(), SeasonRules::for_year(2026))
    }

    #[tokio::test]
    async fn test_success_partitions_and_flips() {
        let raw = sample();
        let pipeline = pipeline(FixedShots::new(raw.clone()));

        let data = match pipeline.resolve("Brook Lopez", "2018-19").await {
            QueryResult::Success(data) => data,
            other => panic!("expected success, got {:?}", other),
        };

        assert_eq!(data.made.len() + data.missed.len(), raw.len());
        assert!(data.made.iter().all(|s| s.made));
        assert!(data.missed.iter().all(|s| !s.made));

        let made_x: Vec<f64> = data.made.iter().map(|s| s.x).collect();
        let missed_x: Vec<f64> = data.missed.iter().map(|s| s.x).collect();
        assert_eq!(made_x, vec![12.0, -0.0, -88.0]);
        assert_eq!(missed_x, vec![-230.0, 150.0]);
        assert_eq!(data.made[0].y, 240.0);
    }

    #[tokio::test]
    async fn test_success_title() {
        let pipeline = pipeline(FixedShots::new(sample()));
        let result = pipeline.resolve("LeBron James", 2018).await;
        assert_eq!(result.title(), "Shots by LeBron James in the 2018-19 season");
        assert_eq!(pipeline.source().calls(), 1);
    }

    #[tokio::test]
    async fn test_bare_year_and_text_agree() {
        let pipeline = pipeline(FixedShots::new(sample()));
        let from_year = pipeline.resolve("LeBron James", 2018).await;
        let from_text = pipeline.resolve("LeBron James", "2018-19").await;
        assert_eq!(from_year, from_text);
    }

    #[tokio::test]
    async fn test_unknown_player() {
        let pipeline = pipeline(FixedShots::new(sample()));
        let result = pipeline.resolve("Zzzznotaplayer", "2018-19").await;
        assert_eq!(result, QueryResult::Failure(QueryFailure::BadPlayer));
        assert_eq!(result.title(), "Error: Invalid input for player name");
        assert_eq!(pipeline.source().calls(), 0);
    }

    #[tokio::test]
    async fn test_season_below_floor() {
        let pipeline = pipeline(FixedShots::new(sample()));
        let result = pipeline.resolve("LeBron James", "1999-00").await;
        assert_eq!(result, QueryResult::Failure(QueryFailure::BadSeason));
        assert_eq!(result.title(), "Error: Invalid input for season year");
        assert_eq!(pipeline.source().calls(), 0);
    }

    #[tokio::test]
    async fn test_season_boundaries() {
        let pipeline = pipeline(FixedShots::new(sample()));
        assert!(pipeline.resolve("LeBron James", "2012-13").await.is_success());
        assert_eq!(
            pipeline.resolve("LeBron James", "2011-12").await.failure(),
            Some(QueryFailure::BadSeason)
        );
        assert_eq!(
            pipeline.resolve("LeBron James", "2026-27").await.failure(),
            Some(QueryFailure::BadSeason)
        );
    }

    #[tokio::test]
    async fn test_out_of_range_bare_years() {
        let pipeline = pipeline(FixedShots::new(sample()));
        for year in [i32::MAX, i32::MIN, -1, 0] {
            assert_eq!(
                pipeline.resolve("LeBron James", year).await.failure(),
                Some(QueryFailure::BadSeason),
                "{year}"
            );
        }
        assert_eq!(pipeline.source().calls(), 0);
    }

    #[tokio::test]
    async fn test_partial_name_resolves_to_first_match() {
        let pipeline = pipeline(FixedShots::new(sample()));
        let data = match pipeline.resolve("lopez", "2018-19").await {
            QueryResult::Success(data) => data,
            other => panic!("expected success, got {:?}", other),
        };
        assert_eq!(data.player_id, PlayerId(201572));
        assert_eq!(data.title(), "Shots by lopez in the 2018-19 season");
        assert_eq!(pipeline.source().calls(), 1);
    }

    #[tokio::test]
    async fn test_both_bad() {
        let pipeline = pipeline(FixedShots::new(sample()));
        let result = pipeline.resolve("Zzzznotaplayer", "19-2000").await;
        assert_eq!(result, QueryResult::Failure(QueryFailure::BadBoth));
        assert_eq!(
            result.title(),
            "Error: Invalid input for both player name and season year"
        );
        assert_eq!(pipeline.source().calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_fetch_is_bad_season() {
        let pipeline = pipeline(FixedShots::new(Vec::new()));
        let result = pipeline.resolve("Victor Wembanyama", "2015-16").await;
        assert_eq!(result, QueryResult::Failure(QueryFailure::BadSeason));
        assert_eq!(pipeline.source().calls(), 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_not_bad_input() {
        let pipeline = pipeline(FixedShots::unavailable());
        let result = pipeline.resolve("Brook Lopez", "2018-19").await;
        assert_eq!(result, QueryResult::Failure(QueryFailure::UpstreamUnavailable));
        assert!(result.made().is_empty());
        assert!(result.missed().is_empty());
    }

    #[test]
    fn test_summary() {
        let data = ShotChartData {
            player_label: "Brook Lopez".to_string(),
            season_label: "2018-19".to_string(),
            player_id: PlayerId(201572),
            made: sample().into_iter().filter(|s| s.made).map(ShotRecord::from).collect(),
            missed: sample().into_iter().filter(|s| !s.made).map(ShotRecord::from).collect(),
        };
        let summary = data.summary();
        assert_eq!(summary.attempts, 5);
        assert_eq!(summary.made, 3);
        assert_eq!(summary.missed, 2);
        assert!((summary.fg_pct - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_failure_code_matches_serialized_name() {
        for reason in [
            QueryFailure::BadPlayer,
            QueryFailure::BadSeason,
            QueryFailure::BadBoth,
            QueryFailure::UpstreamUnavailable,
        ] {
            assert_eq!(serde_json::to_value(reason).unwrap(), reason.code());
        }
    }
}
