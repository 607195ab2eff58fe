use crate::boxscore::{parse_box_score, PlayerGameStat};
use crate::document::{count, text};
use crate::ident::TeamId;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AwayHome<T> {
    pub away: T,
    pub home: T,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Scheduled,
    Completed,
}

impl GameStatus {
    /// Exactly "final" or "completed", in any case, finish a game; anything else, or nothing, is
    /// scheduled.
    pub fn parse(raw: Option<&str>) -> GameStatus {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("final") | Some("completed") => GameStatus::Completed,
            _ => GameStatus::Scheduled,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: String,
    pub team_ids: AwayHome<Option<TeamId>>,
    pub scores: AwayHome<Option<u32>>,
    pub status: GameStatus,
    pub game_date: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub box_scores: AwayHome<Option<Vec<PlayerGameStat>>>,
}

impl GameRecord {
    /// Parses a raw game document. Only a missing id rejects the record; every other malformed
    /// field falls back to "absent".
    pub fn from_document(doc: &Value) -> Option<GameRecord> {
        Some(GameRecord {
            id: doc.get("id").and_then(text)?,
            team_ids: AwayHome {
                away: doc.get("awayTeamId").and_then(TeamId::from_value),
                home: doc.get("homeTeamId").and_then(TeamId::from_value),
            },
            scores: AwayHome {
                away: doc.get("awayScore").and_then(count),
                home: doc.get("homeScore").and_then(count),
            },
            status: GameStatus::parse(doc.get("status").and_then(Value::as_str)),
            game_date: doc
                .get("gameDate")
                .or_else(|| doc.get("date"))
                .and_then(parse_date),
            box_scores: AwayHome {
                away: parse_box_score(doc.get("awayBoxScore")),
                home: parse_box_score(doc.get("homeBoxScore")),
            },
        })
    }

    pub fn is_completed(&self) -> bool {
        self.status == GameStatus::Completed
    }

    pub fn is_home(&self, team: &TeamId) -> bool {
        self.team_ids.home.as_ref().map_or(false, |id| id.matches(team))
    }

    pub fn is_away(&self, team: &TeamId) -> bool {
        self.team_ids.away.as_ref().map_or(false, |id| id.matches(team))
    }

    pub fn involves(&self, team: &TeamId) -> bool {
        self.is_home(team) || self.is_away(team)
    }

    /// The home box score if `team` is the home side, otherwise the away box score.
    pub fn box_score_for(&self, team: &TeamId) -> Option<&[PlayerGameStat]> {
        if self.is_home(team) {
            self.box_scores.home.as_deref()
        } else {
            self.box_scores.away.as_deref()
        }
    }

    /// The game date, or `now` for games without a usable one.
    pub fn effective_date(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.game_date.unwrap_or(now)
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        !self.is_completed() && self.game_date.map_or(true, |date| date >= now)
    }

    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.is_completed() || self.game_date.map_or(false, |date| date < now)
    }
}

fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            Utc.timestamp_opt(seconds, u32::try_from(nanos).ok()?)
                .single()
        }
        Value::String(s) => parse_date_str(s.trim()),
        Value::Number(n) => Utc.timestamp_millis_opt(n.as_i64()?).single(),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    let midnight = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

/// Games split for schedule pages: upcoming soonest first, past most recent first.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub upcoming: Vec<GameRecord>,
    pub past: Vec<GameRecord>,
}

impl Schedule {
    pub fn split(games: impl IntoIterator<Item = GameRecord>, now: DateTime<Utc>) -> Schedule {
        let (mut upcoming, mut past): (Vec<_>, Vec<_>) =
            games.into_iter().partition(|game| game.is_upcoming(now));
        upcoming.sort_by_key(|game| game.effective_date(now));
        past.sort_by(|a, b| b.effective_date(now).cmp(&a.effective_date(now)));
        Schedule { upcoming, past }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }
}
