//! Season identifiers ("2018-19") and the range of seasons with shot data

use chrono::Datelike;
use std::fmt;
use thiserror::Error;

/// First season with tracked shot locations
pub const FLOOR_START_YEAR: i32 = 2012;

/// Why a season was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeasonError {
    #[error("season must look like YYYY-YY, got {0:?}")]
    Malformed(String),

    #[error("season {start}-{suffix:02} does not end the year after it starts")]
    SuffixMismatch { start: i32, suffix: u32 },

    #[error("season {0} is before the first supported season")]
    BeforeFloor(SeasonId),

    #[error("season {0} ends after the current year")]
    AfterCurrent(SeasonId),
}

/// Raw season input from a form, CLI flag or API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeasonInput {
    /// Bare start year, e.g. 2018
    Year(i32),
    /// Canonical text, taken as-is
    Text(String),
}

impl From<i32> for SeasonInput {
    fn from(year: i32) -> Self {
        SeasonInput::Year(year)
    }
}

/// Text fields holding only a 4-digit number are read as a bare start year.
impl From<&str> for SeasonInput {
    fn from(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(year) = trimmed.parse() {
                return SeasonInput::Year(year);
            }
        }
        SeasonInput::Text(trimmed.to_string())
    }
}

impl From<String> for SeasonInput {
    fn from(text: String) -> Self {
        SeasonInput::from(text.as_str())
    }
}

/// A season spanning `start_year` and the following year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeasonId {
    start_year: i32,
}

impl SeasonId {
    pub fn from_start_year(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Normalize any accepted input into a season
    pub fn parse(input: &SeasonInput) -> Result<Self, SeasonError> {
        match input {
            SeasonInput::Year(year) => Ok(Self::from_start_year(*year)),
            SeasonInput::Text(text) => Self::parse_canonical(text),
        }
    }

    /// Parse "YYYY-YY"
    fn parse_canonical(text: &str) -> Result<Self, SeasonError> {
        let malformed = || SeasonError::Malformed(text.to_string());

        let (start, suffix) = text.split_once('-').ok_or_else(malformed)?;
        if start.len() != 4 || suffix.len() != 2 {
            return Err(malformed());
        }
        if !start.bytes().chain(suffix.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let start: i32 = start.parse().map_err(|_| malformed())?;
        let suffix: u32 = suffix.parse().map_err(|_| malformed())?;

        let season = Self::from_start_year(start);
        if season.suffix() != suffix {
            return Err(SeasonError::SuffixMismatch { start, suffix });
        }
        Ok(season)
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Year the season ends, `None` past `i32::MAX`
    pub fn end_year(&self) -> Option<i32> {
        self.start_year.checked_add(1)
    }

    /// Two-digit end year
    pub fn suffix(&self) -> u32 {
        (i64::from(self.start_year) + 1).rem_euclid(100) as u32
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.start_year, self.suffix())
    }
}

/// Range of seasons the stats API has shot data for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRules {
    pub floor_start_year: i32,
    pub current_year: i32,
}

impl Default for SeasonRules {
    fn default() -> Self {
        Self {
            floor_start_year: FLOOR_START_YEAR,
            current_year: chrono::Local::now().year(),
        }
    }
}

impl SeasonRules {
    /// Rules pinned to a given calendar year
    pub fn for_year(current_year: i32) -> Self {
        Self {
            floor_start_year: FLOOR_START_YEAR,
            current_year,
        }
    }

    pub fn check(&self, season: SeasonId) -> Result<SeasonId, SeasonError> {
        if season.start_year() < self.floor_start_year {
            return Err(SeasonError::BeforeFloor(season));
        }
        if season.start_year() >= self.current_year {
            return Err(SeasonError::AfterCurrent(season));
        }
        Ok(season)
    }

    /// Normalize and check in one step
    pub fn validate(&self, input: &SeasonInput) -> Result<SeasonId, SeasonError> {
        SeasonId::parse(input).and_then(|season| self.check(season))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> SeasonRules {
        SeasonRules::for_year(2026)
    }

    fn text(s: &str) -> SeasonInput {
        SeasonInput::Text(s.to_string())
    }

    #[test]
    fn test_bare_year_formats_canonically() {
        assert_eq!(SeasonId::from_start_year(2018).to_string(), "2018-19");
        assert_eq!(SeasonId::from_start_year(1999).to_string(), "1999-00");
        assert_eq!(SeasonId::from_start_year(2009).to_string(), "2009-10");
    }

    #[test]
    fn test_year_and_text_agree() {
        let from_year = rules().validate(&SeasonInput::Year(2018));
        let from_text = rules().validate(&text("2018-19"));
        assert_eq!(from_year, from_text);
        assert!(from_year.is_ok());
    }

    #[test]
    fn test_floor_boundary() {
        assert!(rules().validate(&text("2012-13")).is_ok());
        assert_eq!(
            rules().validate(&text("2011-12")),
            Err(SeasonError::BeforeFloor(SeasonId::from_start_year(2011)))
        );
        assert!(rules().validate(&text("1999-00")).is_err());
    }

    #[test]
    fn test_current_year_boundary() {
        assert!(rules().validate(&text("2025-26")).is_ok());
        assert_eq!(
            rules().validate(&text("2026-27")),
            Err(SeasonError::AfterCurrent(SeasonId::from_start_year(2026)))
        );
        assert!(rules().validate(&SeasonInput::Year(2030)).is_err());
    }

    #[test]
    fn test_suffix_mismatch() {
        assert_eq!(
            rules().validate(&text("2018-20")),
            Err(SeasonError::SuffixMismatch {
                start: 2018,
                suffix: 20
            })
        );
    }

    #[test]
    fn test_malformed_text() {
        for bad in ["", "2018", "2018-2019", "18-19", "abcd-ef", "2018_19", "-2018-19", "2018-+9"] {
            assert!(
                matches!(SeasonId::parse(&text(bad)), Err(SeasonError::Malformed(_))),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_extreme_years_do_not_overflow() {
        let last = SeasonId::from_start_year(i32::MAX);
        assert_eq!(last.end_year(), None);
        assert_eq!(last.to_string(), "2147483647-48");
        assert_eq!(
            rules().validate(&SeasonInput::Year(i32::MAX)),
            Err(SeasonError::AfterCurrent(last))
        );
        assert_eq!(SeasonId::from_start_year(i32::MIN).to_string(), "-2147483648-53");
        assert!(rules().validate(&SeasonInput::Year(i32::MIN)).is_err());
    }

    #[test]
    fn test_negative_year_is_rejected() {
        assert!(rules().validate(&SeasonInput::Year(-5)).is_err());
    }

    #[test]
    fn test_input_from_form_text() {
        assert_eq!(SeasonInput::from(" 2018 "), SeasonInput::Year(2018));
        assert_eq!(
            SeasonInput::from("2018-19"),
            SeasonInput::Text("2018-19".to_string())
        );
        assert_eq!(
            SeasonInput::from("201"),
            SeasonInput::Text("201".to_string())
        );
    }
}
