use crate::boxscore::PlayerGameStat;
use crate::game::GameRecord;
use crate::ident::TeamId;
use crate::roster::RosterEntry;
use crate::stats::PlayerAccumulator;
use indexmap::IndexMap;

/// Accumulators keyed by player id, in roster order.
pub type Accumulators = IndexMap<String, PlayerAccumulator>;

/// One zeroed accumulator per rostered player. A repeated id keeps its first entry.
pub fn seed(roster: &[RosterEntry]) -> Accumulators {
    let mut accumulators = Accumulators::with_capacity(roster.len());
    for player in roster {
        accumulators
            .entry(player.id.clone())
            .or_insert_with(|| PlayerAccumulator::new(player.clone()));
    }
    accumulators
}

/// Folds the box score of every completed game into `accumulators`, reading the side `team`
/// played on. Addition commutes, so the order of `games` does not matter.
pub fn fold_games<'a>(
    team: &TeamId,
    games: impl IntoIterator<Item = &'a GameRecord>,
    accumulators: &mut Accumulators,
) {
    for game in games.into_iter().filter(|game| game.is_completed()) {
        if let Some(box_score) = game.box_score_for(team) {
            fold_box_score(box_score, accumulators);
        }
    }
}

/// Players missing from `accumulators` are skipped; they are never created here.
pub fn fold_box_score(box_score: &[PlayerGameStat], accumulators: &mut Accumulators) {
    for line in box_score {
        match accumulators.get_mut(&line.player_id) {
            Some(accumulator) => accumulator.record_game(&line.stats),
            None => log::debug!("box score names unknown player {}", line.player_id),
        }
    }
}
