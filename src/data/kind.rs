//! Statistic kinds charted per player or team.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A statistic kind that can be selected in the chart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Kills,
    Deaths,
    Assists,
    Gold,
    Damage,
    Vision,
    Cs,
}

impl StatKind {
    /// All kinds, in display order.
    pub const ALL: [StatKind; 7] = [
        StatKind::Kills,
        StatKind::Deaths,
        StatKind::Assists,
        StatKind::Gold,
        StatKind::Damage,
        StatKind::Vision,
        StatKind::Cs,
    ];

    /// Key used in the dataset table.
    pub fn key(self) -> &'static str {
        match self {
            StatKind::Kills => "kills",
            StatKind::Deaths => "deaths",
            StatKind::Assists => "assists",
            StatKind::Gold => "gold",
            StatKind::Damage => "damage",
            StatKind::Vision => "vision",
            StatKind::Cs => "cs",
        }
    }

    /// Human readable dataset label, also used as the value axis title.
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Kills => "Kills",
            StatKind::Deaths => "Deaths",
            StatKind::Assists => "Assists",
            StatKind::Gold => "Gold",
            StatKind::Damage => "Damage",
            StatKind::Vision => "Vision Score",
            StatKind::Cs => "CS",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown statistic kind '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!("gold".parse::<StatKind>(), Ok(StatKind::Gold));
        assert_eq!(" CS ".parse::<StatKind>(), Ok(StatKind::Cs));
        assert!("wards".parse::<StatKind>().is_err());
    }
}
