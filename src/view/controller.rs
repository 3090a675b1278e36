//! View Controller
//! Switches between the card and chart views and owns the single live chart.

use crate::charts::{ChartBackend, ChartError, ChartHandle, ChartSpec, ChartStyle};
use crate::data::DatasetTable;
use crate::view::Container;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Kind rendered the first time the chart view is shown.
pub const DEFAULT_KIND: &str = "gold";

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Unknown statistic kind '{0}'")]
    UnknownKind(String),
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),
}

/// The two mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Cards,
    Chart,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Cards => f.write_str("cards"),
            View::Chart => f.write_str("chart"),
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cards" | "tarjetas" => Ok(View::Cards),
            "chart" | "grafico" => Ok(View::Chart),
            other => Err(format!("unknown view '{}'", other)),
        }
    }
}

/// Owns both view containers, the render target and at most one chart.
///
/// The chart is rendered lazily the first time the chart view is shown and
/// is only replaced by explicit [`ViewController::render_chart`] calls. A
/// replacement always destroys the previous chart before the next one is
/// created.
pub struct ViewController<C: Container, B: ChartBackend> {
    cards: C,
    chart_panel: C,
    backend: B,
    target: B::Target,
    table: DatasetTable,
    style: ChartStyle,
    default_kind: String,

    view: Option<View>,
    chart: Option<B::Handle>,
    chart_loaded: bool,
    current_kind: Option<String>,
}

impl<C: Container, B: ChartBackend> ViewController<C, B> {
    pub fn new(cards: C, chart_panel: C, backend: B, target: B::Target, table: DatasetTable) -> Self {
        Self {
            cards,
            chart_panel,
            backend,
            target,
            table,
            style: ChartStyle::default(),
            default_kind: DEFAULT_KIND.to_string(),
            view: None,
            chart: None,
            chart_loaded: false,
            current_kind: None,
        }
    }

    pub fn with_default_kind(mut self, kind: impl Into<String>) -> Self {
        self.default_kind = kind.into();
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Show one view and hide the other. The first switch to the chart view
    /// renders the default kind. With no table loaded the render waits for
    /// [`set_table`](Self::set_table).
    pub fn show_view(&mut self, view: View) -> Result<(), ViewError> {
        self.cards.set_visible(view == View::Cards);
        self.chart_panel.set_visible(view == View::Chart);
        self.view = Some(view);
        debug!(%view, "view switched");

        if view == View::Chart && !self.chart_loaded {
            if self.table.is_empty() {
                debug!("no table loaded, chart render deferred");
                return Ok(());
            }
            let kind = self.default_kind.clone();
            self.render_chart(&kind)?;
            self.chart_loaded = true;
        }
        Ok(())
    }

    /// Replace the live chart with a bar chart of `kind`.
    ///
    /// An unknown kind is rejected before anything is released.
    pub fn render_chart(&mut self, kind: &str) -> Result<(), ViewError> {
        let dataset = self
            .table
            .get(kind)
            .ok_or_else(|| ViewError::UnknownKind(kind.to_string()))?;
        let spec = ChartSpec::horizontal_bar(self.table.labels(), dataset, &self.style);

        self.release_chart();

        let handle = self.backend.create_chart(&self.target, spec)?;
        self.chart = Some(handle);
        self.current_kind = Some(kind.to_string());
        info!(kind, "chart rendered");
        Ok(())
    }

    /// Install a new table. The live chart belongs to the old data, so it is
    /// released and the lazy first render is armed again.
    pub fn set_table(&mut self, table: DatasetTable) -> Result<(), ViewError> {
        self.release_chart();
        self.chart_loaded = false;
        self.table = table;

        match self.view {
            Some(view) => self.show_view(view),
            None => Ok(()),
        }
    }

    fn release_chart(&mut self) {
        if let Some(previous) = self.chart.take() {
            previous.destroy();
        }
        self.current_kind = None;
    }

    pub fn view(&self) -> Option<View> {
        self.view
    }

    pub fn is_chart_loaded(&self) -> bool {
        self.chart_loaded
    }

    pub fn chart(&self) -> Option<&B::Handle> {
        self.chart.as_ref()
    }

    pub fn current_kind(&self) -> Option<&str> {
        self.current_kind.as_deref()
    }

    pub fn default_kind(&self) -> &str {
        &self.default_kind
    }

    pub fn table(&self) -> &DatasetTable {
        &self.table
    }

    pub fn cards(&self) -> &C {
        &self.cards
    }

    pub fn chart_panel(&self) -> &C {
        &self.chart_panel
    }
}
