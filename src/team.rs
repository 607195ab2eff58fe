use crate::game::GameRecord;
use crate::ident::TeamId;
use crate::reducer::{self, Accumulators};
use crate::roster::RosterEntry;
use crate::stats::{BattingStats, DerivedStats, PlayerAccumulator};
use indexmap::IndexMap;

/// Season stats for one team's roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStats {
    pub accumulators: Accumulators,
    pub derived: IndexMap<String, DerivedStats>,
}

/// Turns a roster and the team's games into per-player totals and rates.
///
/// Pure: every call builds its own accumulators, so calls for the same or different teams never
/// see each other's state. Re-run it whenever the roster or the games change.
pub fn compute_stats(roster: &[RosterEntry], games: &[GameRecord], team: &TeamId) -> TeamStats {
    let mut accumulators = reducer::seed(roster);
    reducer::fold_games(team, games, &mut accumulators);
    let derived = accumulators
        .iter()
        .map(|(id, accumulator)| (id.clone(), accumulator.derived()))
        .collect();
    TeamStats {
        accumulators,
        derived,
    }
}

impl TeamStats {
    pub fn is_empty(&self) -> bool {
        self.accumulators.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = (&PlayerAccumulator, &DerivedStats)> {
        self.accumulators
            .values()
            .zip(self.derived.values())
    }

    /// Team batting totals.
    pub fn totals(&self) -> BattingStats {
        self.accumulators
            .values()
            .fold(BattingStats::default(), |total, acc| total + acc.stats)
    }
}
