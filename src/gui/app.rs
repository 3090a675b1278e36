//! Match Charts Main Application
//! Main window with control panel and the card / chart views.

use crate::charts::{ChartBackend, ChartCanvas, ChartSpec, ChartStyle, PlotBackend, StaticChartRenderer};
use crate::config::AppConfig;
use crate::data::{DataLoader, DataProcessor, DatasetTable, PlayerLine};
use crate::gui::{CardsView, ControlPanel, ControlPanelAction};
use crate::stats::{PlayerCard, StatsCalculator};
use crate::view::{Container, Panel, View, ViewController};
use anyhow::Context;
use egui::{RichText, SidePanel};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{info, warn};

/// Loading result from background thread
enum LoadResult {
    Progress(f32, String),
    Lines {
        rows: usize,
        lines: Vec<PlayerLine>,
    },
    Table(DatasetTable),
    Error(String),
}

/// Main application window.
pub struct MatchChartsApp {
    config: AppConfig,
    row_count: usize,
    lines: Vec<PlayerLine>,
    control_panel: ControlPanel,
    cards_view: CardsView,
    controller: ViewController<Panel, PlotBackend>,

    // Async loading
    load_rx: Option<Receiver<LoadResult>>,
}

impl MatchChartsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, style: ChartStyle) -> Self {
        let controller = ViewController::new(
            Panel::new("cards"),
            Panel::new("chart"),
            PlotBackend::new(),
            ChartCanvas::new("stats_chart"),
            DatasetTable::default(),
        )
        .with_default_kind(config.default_kind.clone())
        .with_style(style);

        let mut app = Self {
            control_panel: ControlPanel::new(config.grouping, &config.default_kind),
            config,
            row_count: 0,
            lines: Vec::new(),
            cards_view: CardsView::new(),
            controller,
            load_rx: None,
        };
        app.handle_show_view(View::Cards);
        app
    }

    /// Pick a match CSV and parse it in the background
    fn handle_browse_csv(&mut self) {
        if self.control_panel.loading {
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        self.control_panel.settings.source_path = Some(path.clone());
        self.start_loading("Loading match export...");

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress(20.0, "Reading CSV file...".to_string()));

            let result = DataLoader::read_csv(&path)
                .map_err(anyhow::Error::from)
                .and_then(|df| {
                    let _ = tx.send(LoadResult::Progress(60.0, "Reading player lines...".to_string()));
                    let lines = DataProcessor::player_lines(&df)?;
                    Ok((df.height(), lines))
                });

            let message = match result {
                Ok((rows, lines)) => LoadResult::Lines { rows, lines },
                Err(e) => LoadResult::Error(format!("{:#}", e)),
            };
            let _ = tx.send(message);
        });
    }

    /// Pick a precomputed dataset table and load it in the background
    fn handle_browse_table(&mut self) {
        if self.control_panel.loading {
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("Dataset Table", &["json"])
            .pick_file()
        else {
            return;
        };

        self.control_panel.settings.source_path = Some(path.clone());
        self.start_loading("Loading dataset table...");

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let message = match DataLoader::load_table_json(&path) {
                Ok(table) => LoadResult::Table(table),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(message);
        });
    }

    fn start_loading(&mut self, status: &str) {
        self.control_panel.loading = true;
        self.control_panel.set_progress(5.0, status);
    }

    /// Check for loading results
    fn check_load_results(&mut self) {
        // Take the receiver temporarily to avoid borrow issues
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(progress, status) => {
                        self.control_panel.set_progress(progress, &status);
                    }
                    LoadResult::Lines { rows, lines } => {
                        self.row_count = rows;
                        self.lines = lines;
                        self.control_panel.loading = false;
                        should_keep_receiver = false;
                        self.rebuild_table();
                    }
                    LoadResult::Table(table) => {
                        self.lines.clear();
                        self.control_panel.loading = false;
                        should_keep_receiver = false;
                        let categories = table.labels().len();
                        self.apply_table(table, Vec::new());
                        self.control_panel.set_progress(
                            100.0,
                            &format!("Loaded table with {} categories", categories),
                        );
                    }
                    LoadResult::Error(error) => {
                        warn!(%error, "load failed");
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {}", error));
                        self.control_panel.loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            // Put receiver back if still needed
            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Rebuild table and cards from the loaded lines with the current grouping
    fn rebuild_table(&mut self) {
        if self.lines.is_empty() {
            return;
        }

        let grouping = self.control_panel.settings.grouping;
        match DataProcessor::build_table(&self.lines, grouping) {
            Ok(table) => {
                let rows = DataProcessor::aggregate(&self.lines, grouping);
                let cards = StatsCalculator::cards(&rows);
                let count = cards.len();
                self.apply_table(table, cards);
                self.control_panel.set_progress(
                    100.0,
                    &format!(
                        "Loaded {} rows, {} categories",
                        self.row_count,
                        count
                    ),
                );
            }
            Err(e) => {
                self.control_panel
                    .set_progress(0.0, &format!("Error: {}", e));
            }
        }
    }

    fn apply_table(&mut self, table: DatasetTable, cards: Vec<PlayerCard>) {
        let summaries = StatsCalculator::summarize(&table);
        let kinds = table
            .kinds()
            .into_iter()
            .map(|kind| {
                let label = table
                    .get(&kind)
                    .map(|d| d.label.clone())
                    .unwrap_or_else(|| kind.clone());
                (kind, label)
            })
            .collect();

        self.control_panel.update_kinds(kinds);
        self.cards_view.set_data(cards, summaries);

        if let Err(e) = self.controller.set_table(table) {
            self.control_panel
                .set_progress(0.0, &format!("Error: {}", e));
        }
        self.sync_kind();
    }

    fn handle_show_view(&mut self, view: View) {
        if view == View::Chart && self.controller.table().is_empty() {
            self.control_panel
                .set_progress(0.0, "No data loaded: open a match CSV or dataset table");
        }
        if let Err(e) = self.controller.show_view(view) {
            warn!(%view, error = %e, "view switch could not render chart");
            self.control_panel
                .set_progress(0.0, &format!("Error: {}", e));
        }
        self.sync_kind();
    }

    fn handle_select_kind(&mut self, kind: &str) {
        if let Err(e) = self.controller.render_chart(kind) {
            self.control_panel
                .set_progress(0.0, &format!("Error: {}", e));
        }
        self.sync_kind();
    }

    fn sync_kind(&mut self) {
        if let Some(kind) = self.controller.current_kind() {
            self.control_panel.settings.kind = kind.to_string();
        }
    }

    /// Render the live chart's spec to a PNG chosen by the user
    fn handle_export_png(&mut self) {
        let Some(spec) = self.controller.chart().map(|c| c.spec().clone()) else {
            self.control_panel.set_progress(0.0, "No chart to export");
            return;
        };

        let file_name = format!(
            "{}.png",
            self.controller.current_kind().unwrap_or("chart")
        );
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(file_name)
            .save_file()
        else {
            return; // User cancelled
        };

        match Self::export_png(spec, &path, self.config.export_size) {
            Ok(path) => {
                info!(path = %path.display(), "chart exported");
                self.control_panel
                    .set_progress(100.0, &format!("Exported {}", path.display()));
                if let Err(e) = open::that(&path) {
                    warn!(error = %e, "could not open exported chart");
                }
            }
            Err(e) => {
                self.control_panel
                    .set_progress(0.0, &format!("Error: {:#}", e));
            }
        }
    }

    fn export_png(spec: ChartSpec, path: &Path, size: [u32; 2]) -> anyhow::Result<PathBuf> {
        let mut renderer = StaticChartRenderer::new(size[0], size[1]);
        let chart = renderer
            .create_chart(&path.to_path_buf(), spec)
            .with_context(|| format!("rendering {}", path.display()))?;
        Ok(chart.keep())
    }

    fn show_chart_view(&self, ui: &mut egui::Ui) {
        match self.controller.chart() {
            Some(chart) => {
                if let Some(title) = &chart.spec().value_axis.title {
                    ui.label(RichText::new(title).size(18.0).strong());
                    ui.add_space(6.0);
                }
                chart.show(ui);
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Chart").size(20.0));
                });
            }
        }
    }
}

impl eframe::App for MatchChartsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.control_panel.loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(
                        ui,
                        self.controller.view(),
                        self.controller.chart().is_some(),
                    );

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::BrowseTable => self.handle_browse_table(),
                        ControlPanelAction::GroupingChanged => self.rebuild_table(),
                        ControlPanelAction::ShowView(view) => self.handle_show_view(view),
                        ControlPanelAction::SelectKind(kind) => self.handle_select_kind(&kind),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - whichever view is visible
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.controller.cards().is_visible() {
                self.cards_view.show(ui);
            } else if self.controller.chart_panel().is_visible() {
                self.show_chart_view(ui);
            }
        });
    }
}
