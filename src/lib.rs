//! Match Charts - per-match player statistics in card and chart views.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod stats;
pub mod view;
