use crate::game::GameRecord;
use crate::ident::TeamId;
use crate::source::GameSource;
use crate::ResultExt;
use anyhow::Context;
use indexmap::IndexMap;

/// Every game relevant to `team`: its own games plus its competition's games that it played in,
/// deduplicated by game id.
///
/// Each source is read independently. A failing source is logged and contributes nothing; a team
/// without a competition simply has no competition games.
pub fn collect_team_games<S>(source: &S, team: &TeamId) -> Vec<GameRecord>
where
    S: GameSource + ?Sized,
{
    // a game stored in both places keeps its first position and the last copy read
    let mut games: IndexMap<String, GameRecord> = IndexMap::new();

    let local = source
        .team_games(team)
        .with_context(|| format!("failed to load games for team {}", team))
        .log_err()
        .unwrap_or_default();
    for game in local {
        games.insert(game.id.clone(), game);
    }

    let competition = source
        .competition_for_team(team)
        .with_context(|| format!("failed to look up competition for team {}", team))
        .log_err()
        .flatten();
    match competition {
        Some(competition_id) => {
            let league = source
                .competition_games(&competition_id)
                .with_context(|| format!("failed to load games for competition {}", competition_id))
                .log_err()
                .unwrap_or_default();
            for game in league.into_iter().filter(|game| game.involves(team)) {
                games.insert(game.id.clone(), game);
            }
        }
        None => log::debug!("team {} has no competition mapping", team),
    }

    games.into_values().collect()
}
