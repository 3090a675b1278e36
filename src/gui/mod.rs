//! GUI module - User interface components

mod app;
mod cards_view;
mod control_panel;

pub use app::MatchChartsApp;
pub use cards_view::CardsView;
pub use control_panel::{ControlPanel, ControlPanelAction, UserSettings};
