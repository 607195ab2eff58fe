use crate::game::GameRecord;
use crate::ident::TeamId;
use crate::leaders::{self, Category, Leader};
use crate::roster::RosterEntry;
use crate::source::{Competition, GameSource};
use crate::standings::{self, TeamRecord};
use crate::stats::{BattingStats, PlayerAccumulator};
use crate::team::compute_stats;
use crate::ResultExt;
use anyhow::Context;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueTeam {
    pub team_id: TeamId,
    pub team_name: String,
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    pub team_name: String,
    pub record: TeamRecord,
    pub batting: BattingStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaguePlayer {
    pub team_id: TeamId,
    pub team_name: String,
    pub line: PlayerAccumulator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueSnapshot {
    pub competition: Competition,
    /// Best win percentage first.
    pub standings: Vec<TeamStanding>,
    /// Every rostered player, most hits first.
    pub players: Vec<LeaguePlayer>,
    pub leaders: Vec<Leader>,
    pub top_batters: Vec<LeaguePlayer>,
    /// Soonest first; undated games sort as `now`.
    pub games: Vec<GameRecord>,
}

/// Aggregates a whole competition. Each team's players are credited only from the side of the box
/// score that team played on.
pub fn compute_league(
    competition: Competition,
    teams: &[LeagueTeam],
    games: &[GameRecord],
    now: DateTime<Utc>,
) -> LeagueSnapshot {
    let mut standings = Vec::with_capacity(teams.len());
    let mut players = Vec::new();

    for team in teams {
        let team_games: Vec<GameRecord> = games
            .iter()
            .filter(|game| game.involves(&team.team_id))
            .cloned()
            .collect();
        let stats = compute_stats(&team.roster, &team_games, &team.team_id);
        standings.push(TeamStanding {
            team_name: team.team_name.clone(),
            record: standings::team_record(&team_games, &team.team_id),
            batting: stats.totals(),
        });
        players.extend(stats.accumulators.into_values().map(|line| LeaguePlayer {
            team_id: team.team_id.clone(),
            team_name: team.team_name.clone(),
            line,
        }));
    }

    standings::rank(&mut standings, |s| s.record.pct());
    players.sort_by(|a, b| b.line.stats.hits.cmp(&a.line.stats.hits));

    let leaders = leaders::leaders(&Category::LEAGUE, players.iter().map(|p| &p.line));
    let top_batters = leaders::top_batters(&players, |p| &p.line)
        .into_iter()
        .cloned()
        .collect();

    let mut games = games.to_vec();
    games.sort_by_key(|game| game.effective_date(now));

    LeagueSnapshot {
        competition,
        standings,
        players,
        leaders,
        top_batters,
        games,
    }
}

/// Loads a competition through `source` and aggregates it. `None` when the competition does not
/// exist; any other failed read is logged and treated as empty.
pub fn load_league<S>(
    source: &S,
    competition_id: &str,
    now: DateTime<Utc>,
) -> Option<LeagueSnapshot>
where
    S: GameSource + ?Sized,
{
    let competition = source
        .competition(competition_id)
        .with_context(|| format!("failed to load competition {}", competition_id))
        .log_err()
        .flatten()?;

    let teams: Vec<LeagueTeam> = source
        .competition_teams(competition_id)
        .with_context(|| format!("failed to load teams for competition {}", competition_id))
        .log_err()
        .unwrap_or_default()
        .into_iter()
        .map(|membership| LeagueTeam {
            roster: source
                .roster(&membership.team_id)
                .with_context(|| format!("failed to load roster for team {}", membership.team_id))
                .log_err()
                .unwrap_or_default(),
            team_id: membership.team_id,
            team_name: membership.team_name,
        })
        .collect();

    let games = source
        .competition_games(competition_id)
        .with_context(|| format!("failed to load games for competition {}", competition_id))
        .log_err()
        .unwrap_or_default();

    Some(compute_league(competition, &teams, &games, now))
}
