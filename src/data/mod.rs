//! Data module - match export loading, aggregation and dataset tables

mod kind;
mod loader;
mod processor;
mod table;

pub use kind::StatKind;
pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, Grouping, PlayerLine, ProcessorError};
pub use table::{Dataset, DatasetTable, TableError};
