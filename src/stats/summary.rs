//! Summary Statistics Module
//! Card values per player or team and per-kind spread across the table.

use crate::data::{DatasetTable, PlayerLine, StatKind};
use statrs::statistics::Statistics;

/// Values shown on a single card.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCard {
    pub name: String,
    pub team: String,
    pub champion: String,
    pub side: String,
    pub win: bool,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub kda: f64,
    pub cs: f64,
    pub gold: f64,
    pub damage: f64,
    pub vision: f64,
}

impl PlayerCard {
    pub fn from_line(line: &PlayerLine) -> Self {
        Self {
            name: line.player.clone(),
            team: line.team.clone(),
            champion: line.champion.clone(),
            side: line.side.clone(),
            win: line.win,
            kills: line.kills,
            deaths: line.deaths,
            assists: line.assists,
            kda: kda(line.kills, line.deaths, line.assists),
            cs: line.stat(StatKind::Cs),
            gold: line.stat(StatKind::Gold),
            damage: line.stat(StatKind::Damage),
            vision: line.stat(StatKind::Vision),
        }
    }
}

/// Spread of one statistic kind across all categories.
#[derive(Debug, Clone, PartialEq)]
pub struct KindSummary {
    pub kind: String,
    pub label: String,
    pub mean: f64,
    pub std_dev: f64,
    pub max: f64,
    /// Category holding the maximum
    pub leader: Option<String>,
}

/// (kills + assists) / deaths, zero when there are no deaths.
pub fn kda(kills: f64, deaths: f64, assists: f64) -> f64 {
    if deaths > 0.0 {
        (kills + assists) / deaths
    } else {
        0.0
    }
}

/// Builds card and summary values.
pub struct StatsCalculator;

impl StatsCalculator {
    pub fn cards(lines: &[PlayerLine]) -> Vec<PlayerCard> {
        lines.iter().map(PlayerCard::from_line).collect()
    }

    /// Summaries for every kind in the table, in the table's kind order.
    pub fn summarize(table: &DatasetTable) -> Vec<KindSummary> {
        table
            .kinds()
            .into_iter()
            .filter_map(|kind| {
                let dataset = table.get(&kind)?;
                let values = &dataset.values;
                if values.is_empty() {
                    return None;
                }

                let leader = values
                    .iter()
                    .enumerate()
                    .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
                    .and_then(|(idx, _)| table.labels().get(idx).cloned());

                let std_dev = if values.len() > 1 {
                    Statistics::std_dev(values.iter())
                } else {
                    0.0
                };

                Some(KindSummary {
                    label: dataset.label.clone(),
                    mean: Statistics::mean(values.iter()),
                    std_dev,
                    max: Statistics::max(values.iter()),
                    leader,
                    kind,
                })
            })
            .collect()
    }
}
