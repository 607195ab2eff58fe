use crate::document::{first_count, first_text};
use crate::stats::BattingStats;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    AtBats,
    Hits,
    Walks,
    HitByPitch,
    SacrificeFlies,
    Doubles,
    Triples,
    HomeRuns,
    Runs,
    RunsBattedIn,
    StrikeOuts,
    StolenBases,
}

impl Stat {
    pub const ALL: [Stat; 12] = [
        Stat::AtBats,
        Stat::Hits,
        Stat::Walks,
        Stat::HitByPitch,
        Stat::SacrificeFlies,
        Stat::Doubles,
        Stat::Triples,
        Stat::HomeRuns,
        Stat::Runs,
        Stat::RunsBattedIn,
        Stat::StrikeOuts,
        Stat::StolenBases,
    ];

    /// Source field names for this stat, most preferred first. The first one holding a non-zero
    /// count is used.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Stat::AtBats => &["game_ab"],
            Stat::Hits => &["game_hits", "game_h"],
            Stat::Walks => &["game_bb", "game_walks"],
            Stat::HitByPitch => &["game_hbp"],
            Stat::SacrificeFlies => &["game_sf"],
            Stat::Doubles => &["game_doubles", "game_2b"],
            Stat::Triples => &["game_triples", "game_3b"],
            Stat::HomeRuns => &["game_hr", "game_homeruns"],
            Stat::Runs => &["game_runs", "game_r"],
            Stat::RunsBattedIn => &["game_rbi"],
            Stat::StrikeOuts => &["game_so", "game_k"],
            Stat::StolenBases => &["game_sb"],
        }
    }
}

/// One player's line from a game's home or away box score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerGameStat {
    pub player_id: String,
    pub stats: BattingStats,
}

impl PlayerGameStat {
    /// `None` when the entry names no player.
    pub fn from_document(doc: &Value) -> Option<PlayerGameStat> {
        let player_id = first_text(doc, &["id", "playerId"])?;
        let mut stats = BattingStats::default();
        for stat in Stat::ALL {
            *stats.get_mut(stat) = first_count(doc, stat.aliases());
        }
        Some(PlayerGameStat { player_id, stats })
    }
}

/// `None` for a missing or non-array box score. Entries without a player id are dropped.
pub fn parse_box_score(value: Option<&Value>) -> Option<Vec<PlayerGameStat>> {
    let entries = value?.as_array()?;
    Some(
        entries
            .iter()
            .filter_map(|entry| {
                let line = PlayerGameStat::from_document(entry);
                if line.is_none() {
                    log::debug!("skipping box score entry without a player id");
                }
                line
            })
            .collect(),
    )
}
