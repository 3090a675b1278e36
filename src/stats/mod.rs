//! Stats module - Card values and per-kind summaries

mod summary;

pub use summary::{kda, KindSummary, PlayerCard, StatsCalculator};
