use crate::boxscore::Stat;
use crate::percentage::Pct;
use crate::roster::RosterEntry;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Batting counting stats, for one game or summed over many.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BattingStats {
    pub at_bats: u32,
    pub hits: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
    pub sacrifice_flies: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub runs: u32,
    pub runs_batted_in: u32,
    pub strike_outs: u32,
    pub stolen_bases: u32,
}

impl BattingStats {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::AtBats => self.at_bats,
            Stat::Hits => self.hits,
            Stat::Walks => self.walks,
            Stat::HitByPitch => self.hit_by_pitch,
            Stat::SacrificeFlies => self.sacrifice_flies,
            Stat::Doubles => self.doubles,
            Stat::Triples => self.triples,
            Stat::HomeRuns => self.home_runs,
            Stat::Runs => self.runs,
            Stat::RunsBattedIn => self.runs_batted_in,
            Stat::StrikeOuts => self.strike_outs,
            Stat::StolenBases => self.stolen_bases,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::AtBats => &mut self.at_bats,
            Stat::Hits => &mut self.hits,
            Stat::Walks => &mut self.walks,
            Stat::HitByPitch => &mut self.hit_by_pitch,
            Stat::SacrificeFlies => &mut self.sacrifice_flies,
            Stat::Doubles => &mut self.doubles,
            Stat::Triples => &mut self.triples,
            Stat::HomeRuns => &mut self.home_runs,
            Stat::Runs => &mut self.runs,
            Stat::RunsBattedIn => &mut self.runs_batted_in,
            Stat::StrikeOuts => &mut self.strike_outs,
            Stat::StolenBases => &mut self.stolen_bases,
        }
    }

    pub fn singles(&self) -> u64 {
        u64::from(self.hits).saturating_sub(
            u64::from(self.doubles) + u64::from(self.triples) + u64::from(self.home_runs),
        )
    }

    // H + 2B + 2*3B + 3*HR, the same as 1B + 2*2B + 3*3B + 4*HR when the hit breakdown is consistent
    pub fn total_bases(&self) -> u64 {
        u64::from(self.hits)
            + u64::from(self.doubles)
            + 2 * u64::from(self.triples)
            + 3 * u64::from(self.home_runs)
    }

    pub fn times_on_base(&self) -> u64 {
        u64::from(self.hits) + u64::from(self.walks) + u64::from(self.hit_by_pitch)
    }

    pub fn on_base_opportunities(&self) -> u64 {
        u64::from(self.at_bats)
            + u64::from(self.walks)
            + u64::from(self.hit_by_pitch)
            + u64::from(self.sacrifice_flies)
    }

    /// Has at least one at-bat; the qualification rule for rate leaderboards.
    pub fn is_batting(&self) -> bool {
        self.at_bats > 0
    }

    pub fn batting_average(&self) -> Pct<3> {
        Pct::new(self.hits.into(), self.at_bats.into())
    }

    pub fn on_base_percentage(&self) -> Pct<3> {
        Pct::new(self.times_on_base(), self.on_base_opportunities())
    }

    pub fn slugging_percentage(&self) -> Pct<3> {
        Pct::new(self.total_bases(), self.at_bats.into())
    }

    /// Sum of the displayed (rounded) OBP and SLG, so the three columns agree with each other.
    pub fn on_base_plus_slugging(&self) -> Pct<3> {
        self.on_base_percentage().rounded() + self.slugging_percentage().rounded()
    }
}

/// Totals stop at `u32::MAX` instead of wrapping.
impl AddAssign for BattingStats {
    fn add_assign(&mut self, other: BattingStats) {
        for stat in Stat::ALL {
            let total = self.get_mut(stat);
            *total = total.saturating_add(other.get(stat));
        }
    }
}

impl Add for BattingStats {
    type Output = BattingStats;

    fn add(mut self, other: BattingStats) -> BattingStats {
        self += other;
        self
    }
}

/// Season totals for one rostered player, owned by a single aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAccumulator {
    pub player: RosterEntry,
    pub games_played: u32,
    pub stats: BattingStats,
}

impl PlayerAccumulator {
    pub fn new(player: RosterEntry) -> PlayerAccumulator {
        PlayerAccumulator {
            player,
            games_played: 0,
            stats: BattingStats::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.player.id
    }

    /// Adds one game's line. Totals only ever grow.
    pub fn record_game(&mut self, game: &BattingStats) {
        self.games_played = self.games_played.saturating_add(1);
        self.stats += *game;
    }

    pub fn derived(&self) -> DerivedStats {
        DerivedStats::new(self.id(), &self.stats)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedStats {
    pub player_id: String,
    pub avg: Pct<3>,
    pub obp: Pct<3>,
    pub slg: Pct<3>,
    pub ops: Pct<3>,
}

impl DerivedStats {
    pub fn new(player_id: impl Into<String>, stats: &BattingStats) -> DerivedStats {
        DerivedStats {
            player_id: player_id.into(),
            avg: stats.batting_average(),
            obp: stats.on_base_percentage(),
            slg: stats.slugging_percentage(),
            ops: stats.on_base_plus_slugging(),
        }
    }
}
