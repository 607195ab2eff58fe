use crate::percentage::Pct;
use crate::standings::rank;
use crate::stats::{BattingStats, PlayerAccumulator};
use derive_more::Display;
use itertools::Itertools;
use serde::Serialize;

pub const TOP_BATTERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Category {
    #[display(fmt = "AVG")]
    BattingAverage,
    #[display(fmt = "H")]
    Hits,
    #[display(fmt = "HR")]
    HomeRuns,
    #[display(fmt = "OPS")]
    OnBasePlusSlugging,
}

impl Category {
    pub const LEAGUE: [Category; 4] = [
        Category::BattingAverage,
        Category::Hits,
        Category::HomeRuns,
        Category::OnBasePlusSlugging,
    ];

    fn value(self, stats: &BattingStats) -> LeaderValue {
        match self {
            Category::BattingAverage => LeaderValue::Rate(stats.batting_average()),
            Category::OnBasePlusSlugging => LeaderValue::Rate(stats.on_base_plus_slugging()),
            Category::Hits => LeaderValue::Count(stats.hits),
            Category::HomeRuns => LeaderValue::Count(stats.home_runs),
        }
    }

    fn empty_value(self) -> LeaderValue {
        match self {
            Category::BattingAverage | Category::OnBasePlusSlugging => {
                LeaderValue::Rate(Pct::default())
            }
            Category::Hits | Category::HomeRuns => LeaderValue::Count(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display)]
#[serde(untagged)]
pub enum LeaderValue {
    Rate(Pct<3>),
    Count(u32),
}

impl LeaderValue {
    fn is_zero_count(self) -> bool {
        self == LeaderValue::Count(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leader {
    pub stat: Category,
    /// Every player tied for the lead, comma separated; "N/A" when nobody leads.
    pub name: String,
    pub value: LeaderValue,
    pub player_id: Option<String>,
}

impl Leader {
    fn none(stat: Category, value: LeaderValue) -> Leader {
        Leader {
            stat,
            name: "N/A".to_owned(),
            value,
            player_id: None,
        }
    }
}

pub fn leader(stat: Category, players: &[&PlayerAccumulator]) -> Leader {
    let max = match players.iter().map(|p| stat.value(&p.stats)).max() {
        Some(max) => max,
        None => return Leader::none(stat, stat.empty_value()),
    };
    if max.is_zero_count() {
        return Leader::none(stat, max);
    }

    let tied: Vec<&PlayerAccumulator> = players
        .iter()
        .copied()
        .filter(|p| stat.value(&p.stats) == max)
        .collect();
    Leader {
        stat,
        name: tied.iter().map(|p| &p.player.player_name).join(", "),
        value: max,
        player_id: tied.first().map(|p| p.id().to_owned()),
    }
}

/// Leaders among players with at least one at-bat.
pub fn leaders<'a>(
    categories: &[Category],
    players: impl IntoIterator<Item = &'a PlayerAccumulator>,
) -> Vec<Leader> {
    let qualified: Vec<&PlayerAccumulator> = players
        .into_iter()
        .filter(|p| p.stats.is_batting())
        .collect();
    categories
        .iter()
        .map(|stat| leader(*stat, &qualified))
        .collect()
}

/// The best `TOP_BATTERS` qualified batting averages; ties keep input order.
pub fn top_batters<'a, T: 'a>(
    players: impl IntoIterator<Item = &'a T>,
    line: impl Fn(&T) -> &PlayerAccumulator,
) -> Vec<&'a T> {
    let mut qualified: Vec<&T> = players
        .into_iter()
        .filter(|p| line(*p).stats.is_batting())
        .collect();
    rank(&mut qualified, |p| line(*p).stats.batting_average());
    qualified.truncate(TOP_BATTERS);
    qualified
}
