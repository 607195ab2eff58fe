use crate::game::GameRecord;
use crate::ident::TeamId;
use crate::percentage::Pct;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub team_id: TeamId,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub games_played: u32,
}

impl TeamRecord {
    pub fn new(team_id: TeamId) -> TeamRecord {
        TeamRecord {
            team_id,
            wins: 0,
            losses: 0,
            ties: 0,
            games_played: 0,
        }
    }

    /// Wins over games played; ".000" before the first game.
    pub fn pct(&self) -> Pct<3> {
        Pct::new(self.wins.into(), self.games_played.into())
    }

    /// Counts a completed game with both scores that this team played in; ignores anything else.
    pub fn record(&mut self, game: &GameRecord) {
        if !game.is_completed() {
            return;
        }
        let (home, away) = match (game.scores.home, game.scores.away) {
            (Some(home), Some(away)) => (home, away),
            _ => return,
        };
        let (ours, theirs) = if game.is_home(&self.team_id) {
            (home, away)
        } else if game.is_away(&self.team_id) {
            (away, home)
        } else {
            return;
        };

        self.games_played += 1;
        match ours.cmp(&theirs) {
            Ordering::Greater => self.wins += 1,
            Ordering::Less => self.losses += 1,
            Ordering::Equal => self.ties += 1,
        }
    }
}

pub fn team_record<'a>(games: impl IntoIterator<Item = &'a GameRecord>, team: &TeamId) -> TeamRecord {
    let mut record = TeamRecord::new(team.clone());
    for game in games {
        record.record(game);
    }
    record
}

/// One record per team, best win percentage first. Equal percentages keep the order of `teams`.
pub fn standings(games: &[GameRecord], teams: &[TeamId]) -> Vec<TeamRecord> {
    let mut records: Vec<TeamRecord> = teams.iter().map(|team| team_record(games, team)).collect();
    rank(&mut records, TeamRecord::pct);
    records
}

/// Stable sort, highest `pct` first.
pub(crate) fn rank<T>(items: &mut [T], pct: impl Fn(&T) -> Pct<3>) {
    items.sort_by(|a, b| pct(b).cmp(&pct(a)));
}
