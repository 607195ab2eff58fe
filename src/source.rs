use crate::document::text;
use crate::game::GameRecord;
use crate::ident::TeamId;
use crate::roster::{parse_roster, RosterEntry};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A team's membership in a competition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionTeam {
    pub competition_id: String,
    pub team_id: TeamId,
    #[serde(default)]
    pub team_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Competition {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Everything the aggregation needs from storage. [`Snapshot`] implements it over a JSON export
/// held in memory.
pub trait GameSource {
    /// Games stored under the team itself.
    fn team_games(&self, team: &TeamId) -> Result<Vec<GameRecord>>;

    /// Reverse lookup from a team to the competition it plays in.
    fn competition_for_team(&self, team: &TeamId) -> Result<Option<String>>;

    /// Every game of a competition, whichever teams played it.
    fn competition_games(&self, competition_id: &str) -> Result<Vec<GameRecord>>;

    fn roster(&self, team: &TeamId) -> Result<Vec<RosterEntry>>;

    fn competition(&self, competition_id: &str) -> Result<Option<Competition>>;

    fn competition_teams(&self, competition_id: &str) -> Result<Vec<CompetitionTeam>>;
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamDocuments {
    #[serde(default)]
    pub roster: Vec<Value>,
    #[serde(default)]
    pub games: Vec<Value>,
}

/// A point-in-time export of the league database.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub teams: IndexMap<String, TeamDocuments>,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub competition_teams: Vec<Value>,
    #[serde(default)]
    pub competition_games: Vec<Value>,
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Snapshot> {
        let raw = std::fs::read(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))
    }

    fn team(&self, team: &TeamId) -> Option<&TeamDocuments> {
        self.teams.get(team.as_str()).or_else(|| {
            self.teams
                .iter()
                .find(|(key, _)| TeamId::new(key).matches(team))
                .map(|(_, docs)| docs)
        })
    }

    fn memberships(&self) -> impl Iterator<Item = CompetitionTeam> + '_ {
        self.competition_teams.iter().filter_map(|doc| {
            match serde_json::from_value::<CompetitionTeam>(doc.clone()) {
                Ok(membership) => Some(membership),
                Err(err) => {
                    log::debug!("skipping malformed competition team: {}", err);
                    None
                }
            }
        })
    }
}

fn parse_games(docs: &[Value]) -> Vec<GameRecord> {
    docs.iter()
        .filter_map(|doc| {
            let game = GameRecord::from_document(doc);
            if game.is_none() {
                log::debug!("skipping game document without an id");
            }
            game
        })
        .collect()
}

impl GameSource for Snapshot {
    fn team_games(&self, team: &TeamId) -> Result<Vec<GameRecord>> {
        Ok(self
            .team(team)
            .map(|docs| parse_games(&docs.games))
            .unwrap_or_default())
    }

    fn competition_for_team(&self, team: &TeamId) -> Result<Option<String>> {
        // exact match first, then the numeric form older records use
        let memberships: Vec<CompetitionTeam> = self.memberships().collect();
        Ok(memberships
            .iter()
            .find(|m| m.team_id == *team)
            .or_else(|| memberships.iter().find(|m| m.team_id.matches(team)))
            .map(|m| m.competition_id.clone()))
    }

    fn competition_games(&self, competition_id: &str) -> Result<Vec<GameRecord>> {
        let docs: Vec<Value> = self
            .competition_games
            .iter()
            .filter(|doc| {
                doc.get("competitionId").and_then(text).as_deref() == Some(competition_id)
            })
            .cloned()
            .collect();
        Ok(parse_games(&docs))
    }

    fn roster(&self, team: &TeamId) -> Result<Vec<RosterEntry>> {
        Ok(self
            .team(team)
            .map(|docs| parse_roster(&docs.roster))
            .unwrap_or_default())
    }

    fn competition(&self, competition_id: &str) -> Result<Option<Competition>> {
        Ok(self
            .competitions
            .iter()
            .find(|c| c.id == competition_id)
            .cloned())
    }

    fn competition_teams(&self, competition_id: &str) -> Result<Vec<CompetitionTeam>> {
        Ok(self
            .memberships()
            .filter(|m| m.competition_id == competition_id)
            .collect())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn snapshot() -> Snapshot {
        serde_json::from_value(json!({
            "teams": {
                "7": {
                    "roster": [
                        {"id": "p1", "playerName": "Ana"},
                        {"id": "p2", "name": "Bo", "number": 4},
                        {"playerName": "no id"}
                    ],
                    "games": [
                        {"id": "g1", "homeTeamId": "7", "awayTeamId": "9", "status": "final",
                         "homeScore": 5, "awayScore": 3,
                         "homeBoxScore": [{"id": "p1", "game_ab": 4, "game_hits": 2}]},
                        {"homeTeamId": "7"}
                    ]
                },
                "9": {"roster": [{"id": "q1", "playerName": "Cy"}]}
            },
            "competitions": [{"id": "c1", "name": "Summer League"}],
            "competition_teams": [
                {"competitionId": "c1", "teamId": 7, "teamName": "Sevens"},
                {"competitionId": "c1", "teamId": "9", "teamName": "Nines"},
                {"competitionId": "c1"}
            ],
            "competition_games": [
                {"id": "g1", "competitionId": "c1", "homeTeamId": 7, "awayTeamId": 9,
                 "status": "final", "homeScore": 5, "awayScore": 3,
                 "homeBoxScore": [{"id": "p1", "game_ab": 4, "game_hits": 2}]},
                {"id": "g2", "competitionId": "c1", "homeTeamId": 9, "awayTeamId": 7,
                 "status": "scheduled"},
                {"id": "g3", "competitionId": "c2", "homeTeamId": 7, "awayTeamId": 1}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn team_documents() {
        let snapshot = snapshot();
        let team = TeamId::new("7");
        let games = snapshot.team_games(&team).unwrap();
        assert_eq!(games.len(), 1);
        let roster = snapshot.roster(&team).unwrap();
        assert_eq!(
            roster.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            ["p1", "p2"]
        );
        assert!(snapshot.roster(&TeamId::new("404")).unwrap().is_empty());
        assert!(snapshot.team_games(&TeamId::new("07")).unwrap().len() == 1);
    }

    #[test]
    fn reverse_lookup_tolerates_numeric_ids() {
        let snapshot = snapshot();
        assert_eq!(
            snapshot.competition_for_team(&TeamId::new("7")).unwrap(),
            Some("c1".to_owned())
        );
        assert_eq!(
            snapshot.competition_for_team(&TeamId::new("9")).unwrap(),
            Some("c1".to_owned())
        );
        assert_eq!(snapshot.competition_for_team(&TeamId::new("1")).unwrap(), None);
    }

    #[test]
    fn competition_queries() {
        let snapshot = snapshot();
        let games = snapshot.competition_games("c1").unwrap();
        assert_eq!(
            games.iter().map(|g| g.id.as_str()).collect::<Vec<_>>(),
            ["g1", "g2"]
        );
        assert_eq!(snapshot.competition_teams("c1").unwrap().len(), 2);
        assert_eq!(
            snapshot.competition("c1").unwrap().map(|c| c.name),
            Some("Summer League".to_owned())
        );
        assert_eq!(snapshot.competition("c9").unwrap(), None);
    }

    #[test]
    fn load_reports_path() {
        let err = Snapshot::load(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/snapshot.json"));
    }
}
