//! Parser for the `shotchartdetail` response
//!
//! The payload is a list of tabular result sets:
//! `{"resultSets": [{"name": ..., "headers": [...], "rowSet": [[...], ...]}]}`.
//! Only the `Shot_Chart_Detail` set is read; `LeagueAverages` is ignored.

use super::{RawShot, StatsError};
use serde::Deserialize;
use serde_json::Value;

const SHOT_SET: &str = "Shot_Chart_Detail";

#[derive(Debug, Deserialize)]
struct ShotChartResponse {
    #[serde(rename = "resultSets")]
    result_sets: Vec<ResultSet>,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
    name: String,
    headers: Vec<String>,
    #[serde(rename = "rowSet")]
    row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    fn column(&self, name: &'static str) -> Result<usize, StatsError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or(StatsError::MissingColumn(name))
    }
}

/// Parse shot attempts from a response body, preserving row order
pub fn parse_shot_chart(body: &str) -> Result<Vec<RawShot>, StatsError> {
    let response: ShotChartResponse =
        serde_json::from_str(body).map_err(|e| StatsError::ParseError(e.to_string()))?;

    let set = response
        .result_sets
        .into_iter()
        .find(|s| s.name == SHOT_SET)
        .ok_or_else(|| StatsError::ParseError(format!("no {} result set", SHOT_SET)))?;

    let x_col = set.column("LOC_X")?;
    let y_col = set.column("LOC_Y")?;
    let made_col = set.column("SHOT_MADE_FLAG")?;

    set.row_set
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let number = |col: usize, name: &str| {
                row.get(col).and_then(Value::as_f64).ok_or_else(|| {
                    StatsError::ParseError(format!("row {}: {} is not a number", i, name))
                })
            };

            let made = match number(made_col, "SHOT_MADE_FLAG")? as i64 {
                0 => false,
                1 => true,
                other => {
                    return Err(StatsError::ParseError(format!(
                        "row {}: unexpected SHOT_MADE_FLAG {}",
                        i, other
                    )))
                }
            };

            Ok(RawShot {
                loc_x: number(x_col, "LOC_X")?,
                loc_y: number(y_col, "LOC_Y")?,
                made,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "resource": "shotchartdetail",
        "resultSets": [
            {
                "name": "Shot_Chart_Detail",
                "headers": ["GRID_TYPE", "GAME_ID", "PLAYER_ID", "EVENT_TYPE", "LOC_X", "LOC_Y", "SHOT_ATTEMPTED_FLAG", "SHOT_MADE_FLAG"],
                "rowSet": [
                    ["Shot Chart Detail", "0021800001", 201572, "Made Shot", -12, 240, 1, 1],
                    ["Shot Chart Detail", "0021800001", 201572, "Missed Shot", 230, 15, 1, 0],
                    ["Shot Chart Detail", "0021800002", 201572, "Missed Shot", 0, 0, 1, 0]
                ]
            },
            {
                "name": "LeagueAverages",
                "headers": ["GRID_TYPE", "FGA"],
                "rowSet": [["League Averages", 100]]
            }
        ]
    }"#;

    #[test]
    fn test_parse_rows_in_order() {
        let shots = parse_shot_chart(BODY).unwrap();
        assert_eq!(shots.len(), 3);
        assert_eq!(
            shots[0],
            RawShot {
                loc_x: -12.0,
                loc_y: 240.0,
                made: true
            }
        );
        assert_eq!(shots[1].loc_x, 230.0);
        assert!(!shots[1].made);
        assert!(!shots[2].made);
    }

    #[test]
    fn test_parse_empty_row_set() {
        let body = r#"{"resultSets": [{"name": "Shot_Chart_Detail", "headers": ["LOC_X", "LOC_Y", "SHOT_MADE_FLAG"], "rowSet": []}]}"#;
        assert!(parse_shot_chart(body).unwrap().is_empty());
    }

    #[test]
    fn test_missing_column() {
        let body = r#"{"resultSets": [{"name": "Shot_Chart_Detail", "headers": ["LOC_X", "LOC_Y"], "rowSet": []}]}"#;
        assert!(matches!(
            parse_shot_chart(body),
            Err(StatsError::MissingColumn("SHOT_MADE_FLAG"))
        ));
    }

    #[test]
    fn test_missing_result_set() {
        let body = r#"{"resultSets": [{"name": "LeagueAverages", "headers": [], "rowSet": []}]}"#;
        assert!(matches!(parse_shot_chart(body), Err(StatsError::ParseError(_))));
    }

    #[test]
    fn test_bad_flag_and_bad_number() {
        let flag = r#"{"resultSets": [{"name": "Shot_Chart_Detail", "headers": ["LOC_X", "LOC_Y", "SHOT_MADE_FLAG"], "rowSet": [[1, 2, 3]]}]}"#;
        assert!(matches!(parse_shot_chart(flag), Err(StatsError::ParseError(_))));

        let number = r#"{"resultSets": [{"name": "Shot_Chart_Detail", "headers": ["LOC_X", "LOC_Y", "SHOT_MADE_FLAG"], "rowSet": [["x", 2, 1]]}]}"#;
        assert!(matches!(parse_shot_chart(number), Err(StatsError::ParseError(_))));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            parse_shot_chart("<html>Access Denied</html>"),
            Err(StatsError::ParseError(_))
        ));
    }
}
