//! Data Processor Module
//! Turns a per-player match export into player lines and dataset tables.

use crate::data::{Dataset, DatasetTable, StatKind, TableError};
use polars::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

/// Columns that must be present in a match export.
pub const NAME_COLUMN: &str = "player";
pub const TEAM_COLUMN: &str = "team";
pub const NUMERIC_COLUMNS: [&str; 8] = [
    "kills",
    "deaths",
    "assists",
    "minion_kills",
    "monster_kills",
    "total_gold",
    "damage_to_champions",
    "vision_score",
];

/// How rows are grouped into chart categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// One category per player
    #[default]
    Player,
    /// One category per team, statistics summed
    Team,
}

/// One player's line in a match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerLine {
    pub player: String,
    pub team: String,
    pub side: String,
    pub champion: String,
    pub win: bool,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub minion_kills: f64,
    pub monster_kills: f64,
    pub total_gold: f64,
    pub damage_to_champions: f64,
    pub vision_score: f64,
}

impl PlayerLine {
    /// Value of a statistic kind. CS counts minions and monsters.
    pub fn stat(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Kills => self.kills,
            StatKind::Deaths => self.deaths,
            StatKind::Assists => self.assists,
            StatKind::Gold => self.total_gold,
            StatKind::Damage => self.damage_to_champions,
            StatKind::Vision => self.vision_score,
            StatKind::Cs => self.minion_kills + self.monster_kills,
        }
    }

    fn absorb(&mut self, other: &PlayerLine) {
        self.win |= other.win;
        self.kills += other.kills;
        self.deaths += other.deaths;
        self.assists += other.assists;
        self.minion_kills += other.minion_kills;
        self.monster_kills += other.monster_kills;
        self.total_gold += other.total_gold;
        self.damage_to_champions += other.damage_to_champions;
        self.vision_score += other.vision_score;
    }
}

/// Handles match export parsing and aggregation.
pub struct DataProcessor;

impl DataProcessor {
    /// Read player lines from a match export.
    ///
    /// Empty numeric cells count as zero.
    pub fn player_lines(df: &DataFrame) -> Result<Vec<PlayerLine>, ProcessorError> {
        let name_col = Self::required(df, NAME_COLUMN)?;
        let team_col = Self::required(df, TEAM_COLUMN)?;
        let side_col = df.column("side").ok();
        let champion_col = df.column("champion").ok();
        let result_col = df.column("result").ok();

        let mut numeric: Vec<Float64Chunked> = Vec::with_capacity(NUMERIC_COLUMNS.len());
        for name in NUMERIC_COLUMNS {
            let casted = Self::required(df, name)?.cast(&DataType::Float64)?;
            numeric.push(casted.f64()?.clone());
        }

        let number = |col: usize, row: usize| -> f64 {
            numeric[col].get(row).filter(|v| !v.is_nan()).unwrap_or(0.0)
        };

        let mut lines = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let player = Self::text_at(name_col, i);
            if player.is_empty() {
                continue;
            }

            lines.push(PlayerLine {
                player,
                team: Self::text_at(team_col, i),
                side: side_col.map(|c| Self::text_at(c, i)).unwrap_or_default(),
                champion: champion_col.map(|c| Self::text_at(c, i)).unwrap_or_default(),
                win: result_col
                    .map(|c| Self::is_win(&Self::text_at(c, i)))
                    .unwrap_or(false),
                kills: number(0, i),
                deaths: number(1, i),
                assists: number(2, i),
                minion_kills: number(3, i),
                monster_kills: number(4, i),
                total_gold: number(5, i),
                damage_to_champions: number(6, i),
                vision_score: number(7, i),
            });
        }

        Ok(lines)
    }

    /// Merge lines per player or per team, keeping first-appearance order.
    pub fn aggregate(lines: &[PlayerLine], grouping: Grouping) -> Vec<PlayerLine> {
        let mut merged: Vec<PlayerLine> = Vec::new();

        for line in lines {
            let key = match grouping {
                Grouping::Player => &line.player,
                Grouping::Team => &line.team,
            };

            if let Some(existing) = merged.iter_mut().find(|m| &m.player == key) {
                existing.absorb(line);
                continue;
            }

            let mut first = line.clone();
            if grouping == Grouping::Team {
                first.player = line.team.clone();
                first.champion.clear();
            }
            merged.push(first);
        }

        merged
    }

    /// Build the dataset table with one dataset per statistic kind.
    pub fn build_table(
        lines: &[PlayerLine],
        grouping: Grouping,
    ) -> Result<DatasetTable, ProcessorError> {
        let rows = Self::aggregate(lines, grouping);
        let labels: Vec<String> = rows.iter().map(|r| r.player.clone()).collect();

        let datasets: Vec<(StatKind, Dataset)> = StatKind::ALL
            .par_iter()
            .map(|&kind| {
                let values = rows.iter().map(|r| r.stat(kind)).collect();
                (kind, Dataset::new(kind.label(), values))
            })
            .collect();

        let mut table = DatasetTable::new(labels);
        for (kind, dataset) in datasets {
            table.insert(kind.key(), dataset)?;
        }
        Ok(table)
    }

    fn required<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, ProcessorError> {
        df.column(name)
            .map_err(|_| ProcessorError::MissingColumn(name.to_string()))
    }

    fn text_at(col: &Column, row: usize) -> String {
        match col.get(row) {
            Ok(AnyValue::Null) | Err(_) => String::new(),
            Ok(AnyValue::String(s)) => s.trim().to_string(),
            Ok(AnyValue::StringOwned(s)) => s.trim().to_string(),
            Ok(other) => other.to_string().trim_matches('"').trim().to_string(),
        }
    }

    fn is_win(value: &str) -> bool {
        matches!(
            value.to_ascii_lowercase().as_str(),
            "true" | "1" | "win" | "w" | "victory"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(player: &str, team: &str, kills: f64, gold: f64) -> PlayerLine {
        PlayerLine {
            player: player.to_string(),
            team: team.to_string(),
            kills,
            total_gold: gold,
            minion_kills: 100.0,
            monster_kills: 20.0,
            ..Default::default()
        }
    }

    fn sample_frame() -> DataFrame {
        df!(
            "player" => ["Caps", "Hans Sama", "Elyoya"],
            "team" => ["G2", "G2", "MKOI"],
            "side" => ["Blue", "Blue", "Red"],
            "champion" => ["Ahri", "Jinx", "Vi"],
            "result" => [true, true, false],
            "kills" => [Some(5i64), Some(7), None],
            "deaths" => [1i64, 2, 4],
            "assists" => [8i64, 3, 6],
            "minion_kills" => [250i64, 300, 40],
            "monster_kills" => [10i64, 5, 180],
            "total_gold" => [14000i64, 15500, 9800],
            "damage_to_champions" => [22000i64, 26000, 9000],
            "vision_score" => [30i64, 25, 60]
        )
        .unwrap()
    }

    #[test]
    fn reads_player_lines_with_missing_values_as_zero() {
        let lines = DataProcessor::player_lines(&sample_frame()).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].player, "Caps");
        assert_eq!(lines[0].champion, "Ahri");
        assert!(lines[0].win);
        assert!(!lines[2].win);
        assert_eq!(lines[2].kills, 0.0);
        assert_eq!(lines[2].stat(StatKind::Cs), 220.0);
    }

    #[test]
    fn missing_numeric_column_is_reported() {
        let df = sample_frame().drop("vision_score").unwrap();
        match DataProcessor::player_lines(&df) {
            Err(ProcessorError::MissingColumn(name)) => assert_eq!(name, "vision_score"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn team_grouping_sums_in_first_appearance_order() {
        let lines = vec![
            line("Elyoya", "MKOI", 1.0, 9000.0),
            line("Caps", "G2", 5.0, 14000.0),
            line("Myrwn", "MKOI", 2.0, 10000.0),
        ];
        let table = DataProcessor::build_table(&lines, Grouping::Team).unwrap();
        assert_eq!(table.labels(), ["MKOI".to_string(), "G2".to_string()]);
        assert_eq!(table.get("kills").unwrap().values, vec![3.0, 5.0]);
        assert_eq!(table.get("gold").unwrap().values, vec![19000.0, 14000.0]);
        assert_eq!(table.get("cs").unwrap().values, vec![240.0, 120.0]);
    }

    #[test]
    fn player_grouping_builds_every_kind() {
        let lines = vec![line("Caps", "G2", 5.0, 14000.0), line("Hans", "G2", 7.0, 15500.0)];
        let table = DataProcessor::build_table(&lines, Grouping::Player).unwrap();
        assert_eq!(table.kinds().len(), StatKind::ALL.len());
        let gold = table.get("gold").unwrap();
        assert_eq!(gold.label, "Gold");
        assert_eq!(gold.values, vec![14000.0, 15500.0]);
    }
}
