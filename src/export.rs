use crate::game::{GameRecord, Schedule};
use crate::ident::TeamId;
use crate::leaders::Leader;
use crate::league::{LeaguePlayer, TeamStanding};
use crate::stats::{BattingStats, PlayerAccumulator};
use csv::Writer;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::io::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

pub struct Export<T: Exportable>(pub T);

impl<T: Exportable> Serialize for Export<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // csv has no `serialize_map` support, so rows are flattened into an anonymous struct.
        // serde_json ignores the name and csv ignores both name and length.
        let mut s = serializer.serialize_struct("", 1)?;
        self.0.export(&mut s)?;
        s.end()
    }
}

pub trait Exportable {
    fn export<S>(&self, serializer: &mut S) -> Result<(), S::Error>
    where
        S: SerializeStruct;
}

impl<T: Exportable + ?Sized> Exportable for &T {
    fn export<S>(&self, s: &mut S) -> Result<(), S::Error>
    where
        S: SerializeStruct,
    {
        (**self).export(s)
    }
}

macro_rules! fields {
    ($s:ident, $source:expr, $( $field:ident ),* $(,)?) => {
        $( $s.serialize_field(stringify!($field), &$source.$field)?; )*
    };
}

macro_rules! rates {
    ($s:ident, $source:expr, $( $name:ident = $func:ident ),* $(,)?) => {
        $( $s.serialize_field(stringify!($name), &$source.$func())?; )*
    };
}

impl Exportable for BattingStats {
    fn export<S>(&self, s: &mut S) -> Result<(), S::Error>
    where
        S: SerializeStruct,
    {
        fields!(
            s,
            self,
            at_bats,
            hits,
            doubles,
            triples,
            home_runs,
            runs,
            runs_batted_in,
            walks,
            hit_by_pitch,
            sacrifice_flies,
            strike_outs,
            stolen_bases,
        );
        rates!(
            s,
            self,
            total_bases = total_bases,
            avg = batting_average,
            obp = on_base_percentage,
            slg = slugging_percentage,
            ops = on_base_plus_slugging,
        );
        Ok(())
    }
}

impl Exportable for PlayerAccumulator {
    fn export<S>(&self, s: &mut S) -> Result<(), S::Error>
    where
        S: SerializeStruct,
    {
        s.serialize_field("player_id", &self.player.id)?;
        s.serialize_field("player_name", &self.player.player_name)?;
        s.serialize_field("player_number", &self.player.player_number)?;
        s.serialize_field("player_position", &self.player.player_position)?;
        s.serialize_field("games_played", &self.games_played)?;
        self.stats.export(s)
    }
}

impl Exportable for LeaguePlayer {
    fn export<S>(&self, s: &mut S) -> Result<(), S::Error>
    where
        S: SerializeStruct,
    {
        s.serialize_field("team_id", &self.team_id)?;
        s.serialize_field("team_name", &self.team_name)?;
        self.line.export(s)
    }
}

impl Exportable for TeamStanding {
    fn export<S>(&self, s: &mut S) -> Result<(), S::Error>
    where
        S: SerializeStruct,
    {
        s.serialize_field("team_id", &self.record.team_id)?;
        s.serialize_field("team_name", &self.team_name)?;
        fields!(s, self.record, wins, losses, ties, games_played);
        s.serialize_field("pct", &self.record.pct())?;
        self.batting.export(s)
    }
}

impl Exportable for Leader {
    fn export<S>(&self, s: &mut S) -> Result<(), S::Error>
    where
        S: SerializeStruct,
    {
        s.serialize_field("stat", &self.stat.to_string())?;
        fields!(s, self, name, value, player_id);
        Ok(())
    }
}

impl Exportable for GameRecord {
    fn export<S>(&self, s: &mut S) -> Result<(), S::Error>
    where
        S: SerializeStruct,
    {
        s.serialize_field("game_id", &self.id)?;
        s.serialize_field("game_date", &self.game_date)?;
        s.serialize_field("status", &self.status)?;
        s.serialize_field("away_team_id", &self.team_ids.away)?;
        s.serialize_field("home_team_id", &self.team_ids.home)?;
        s.serialize_field("away_score", &self.scores.away)?;
        s.serialize_field("home_score", &self.scores.home)
    }
}

/// A game from one team's point of view.
pub struct ScheduleRow<'a> {
    pub upcoming: bool,
    pub team: &'a TeamId,
    pub game: &'a GameRecord,
}

impl<'a> ScheduleRow<'a> {
    pub fn from_schedule(schedule: &'a Schedule, team: &'a TeamId) -> Vec<ScheduleRow<'a>> {
        let upcoming = schedule.upcoming.iter().map(|game| (true, game));
        let past = schedule.past.iter().map(|game| (false, game));
        upcoming
            .chain(past)
            .map(|(upcoming, game)| ScheduleRow {
                upcoming,
                team,
                game,
            })
            .collect()
    }
}

impl Exportable for ScheduleRow<'_> {
    fn export<S>(&self, s: &mut S) -> Result<(), S::Error>
    where
        S: SerializeStruct,
    {
        let home = self.game.is_home(self.team);
        let (opponent, ours, theirs) = if home {
            (&self.game.team_ids.away, self.game.scores.home, self.game.scores.away)
        } else {
            (&self.game.team_ids.home, self.game.scores.away, self.game.scores.home)
        };

        s.serialize_field("section", if self.upcoming { "upcoming" } else { "past" })?;
        s.serialize_field("game_id", &self.game.id)?;
        s.serialize_field("game_date", &self.game.game_date)?;
        s.serialize_field("status", &self.game.status)?;
        s.serialize_field("home", &home)?;
        s.serialize_field("opponent_id", opponent)?;
        s.serialize_field("score", &ours)?;
        s.serialize_field("opponent_score", &theirs)
    }
}

/// Renders `rows` as a CSV table with a header row, or as a pretty-printed JSON array.
pub fn render<T: Exportable>(
    format: Format,
    rows: impl IntoIterator<Item = T>,
) -> anyhow::Result<String> {
    let rows: Vec<Export<T>> = rows.into_iter().map(Export).collect();
    match format {
        Format::Csv => write_csv(rows),
        Format::Json => Ok(serde_json::to_string_pretty(&rows)?),
    }
}

fn write_csv<T: Serialize>(rows: Vec<T>) -> anyhow::Result<String> {
    let mut writer = Writer::from_writer(Cursor::new(Vec::new()));
    for row in rows {
        writer.serialize(row)?;
    }
    let buf = writer.into_inner()?.into_inner();
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaders::{leaders, Category};
    use crate::roster::RosterEntry;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn line() -> PlayerAccumulator {
        let mut player = RosterEntry::new("p1", "Ana");
        player.player_number = Some("12".to_owned());
        let mut acc = PlayerAccumulator::new(player);
        acc.record_game(&BattingStats {
            at_bats: 10,
            hits: 3,
            walks: 1,
            doubles: 1,
            home_runs: 1,
            ..BattingStats::default()
        });
        acc
    }

    #[test]
    fn player_csv() {
        let csv = render(Format::Csv, [line()]).unwrap();
        let mut lines = csv.lines();
        let header: Vec<&str> = lines.next().unwrap().split(',').collect();
        let row: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(lines.next(), None);
        assert_eq!(header.len(), row.len());

        let field = |name: &str| row[header.iter().position(|h| *h == name).unwrap()];
        assert_eq!(field("player_name"), "Ana");
        assert_eq!(field("player_number"), "12");
        assert_eq!(field("player_position"), "");
        assert_eq!(field("games_played"), "1");
        assert_eq!(field("total_bases"), "7");
        assert_eq!(field("avg"), ".300");
        assert_eq!(field("ops"), "1.064");
    }

    #[test]
    fn player_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render(Format::Json, [&line()]).unwrap()).unwrap();
        assert_eq!(json[0]["player_id"], "p1");
        assert_eq!(json[0]["hits"], 3);
        assert_eq!(json[0]["obp"], ".364");
        assert_eq!(json[0]["player_position"], serde_json::Value::Null);
    }

    #[test]
    fn empty_table() {
        let none: Vec<PlayerAccumulator> = Vec::new();
        assert_eq!(render(Format::Csv, &none).unwrap(), "");
        assert_eq!(render(Format::Json, &none).unwrap(), "[]");
    }

    #[test]
    fn leaders_table() {
        let players = [line()];
        let csv = render(Format::Csv, leaders(&Category::LEAGUE, &players)).unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows[0], "stat,name,value,player_id");
        assert_eq!(rows[1], "AVG,Ana,.300,p1");
        assert_eq!(rows[4], "OPS,Ana,1.064,p1");
    }

    #[test]
    fn schedule_from_both_sides() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let games: Vec<GameRecord> = [
            json!({"id": "g1", "homeTeamId": "A", "awayTeamId": "B", "status": "final",
                   "homeScore": 5, "awayScore": 3, "gameDate": "2024-05-01"}),
            json!({"id": "g2", "homeTeamId": "B", "awayTeamId": "A", "gameDate": "2024-07-01"}),
        ]
        .iter()
        .filter_map(GameRecord::from_document)
        .collect();
        let schedule = Schedule::split(games, now);

        let team = TeamId::new("B");
        let csv = render(Format::Csv, ScheduleRow::from_schedule(&schedule, &team)).unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(
            rows[0],
            "section,game_id,game_date,status,home,opponent_id,score,opponent_score"
        );
        assert_eq!(rows[1], "upcoming,g2,2024-07-01T00:00:00Z,scheduled,true,A,,");
        assert_eq!(rows[2], "past,g1,2024-05-01T00:00:00Z,completed,false,A,3,5");

        let csv = render(Format::Csv, &schedule.past).unwrap();
        assert_eq!(
            csv.lines().nth(1),
            Some("g1,2024-05-01T00:00:00Z,completed,B,A,3,5")
        );
    }
}
