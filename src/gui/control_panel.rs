//! Control Panel Widget
//! Left side panel with data source, view toggle, kind selection and export.

use crate::data::Grouping;
use crate::view::View;
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// User selections in the panel
#[derive(Default, Clone)]
pub struct UserSettings {
    pub source_path: Option<PathBuf>,
    pub grouping: Grouping,
    pub kind: String,
}

/// Left side control panel with file selection and view controls.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub kinds: Vec<String>,
    /// Label per kind key, for the selector
    pub kind_labels: Vec<String>,
    pub progress: f32,
    pub status: String,
    pub loading: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            kinds: Vec::new(),
            kind_labels: Vec::new(),
            progress: 0.0,
            status: "Ready".to_string(),
            loading: false,
        }
    }
}

impl ControlPanel {
    pub fn new(grouping: Grouping, kind: &str) -> Self {
        let mut panel = Self::default();
        panel.settings.grouping = grouping;
        panel.settings.kind = kind.to_string();
        panel
    }

    /// Update available kinds after a table is loaded
    pub fn update_kinds(&mut self, kinds: Vec<(String, String)>) {
        let (keys, labels) = kinds.into_iter().unzip();
        self.kinds = keys;
        self.kind_labels = labels;
    }

    fn kind_label(&self, kind: &str) -> String {
        self.kinds
            .iter()
            .position(|k| k == kind)
            .and_then(|i| self.kind_labels.get(i).cloned())
            .unwrap_or_else(|| kind.to_string())
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, view: Option<View>, has_chart: bool) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Match Charts")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Player statistics")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let path_text = self
                    .settings
                    .source_path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "No file selected".to_string());

                ui.label(RichText::new(&path_text).size(12.0).color(
                    if self.settings.source_path.is_some() {
                        Color32::WHITE
                    } else {
                        Color32::GRAY
                    },
                ));

                ui.add_enabled_ui(!self.loading, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("📂 Match CSV").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                        if ui.button("📂 Table JSON").clicked() {
                            action = ControlPanelAction::BrowseTable;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Grouping Section =====
        ui.label(RichText::new("⚙️ Grouping").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            let before = self.settings.grouping;
            ui.radio_value(&mut self.settings.grouping, Grouping::Player, "Per Player");
            ui.radio_value(&mut self.settings.grouping, Grouping::Team, "Per Team");
            if self.settings.grouping != before {
                action = ControlPanelAction::GroupingChanged;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== View Section =====
        ui.label(RichText::new("🔀 View").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            if ui
                .selectable_label(view == Some(View::Cards), "🗂 Cards")
                .clicked()
            {
                action = ControlPanelAction::ShowView(View::Cards);
            }
            if ui
                .selectable_label(view == Some(View::Chart), "📊 Chart")
                .clicked()
            {
                action = ControlPanelAction::ShowView(View::Chart);
            }
        });

        ui.add_space(8.0);

        ui.add_enabled_ui(view == Some(View::Chart) && !self.kinds.is_empty(), |ui| {
            ui.horizontal(|ui| {
                ui.add_sized([80.0, 20.0], egui::Label::new("Statistic:"));
                ComboBox::from_id_salt("stat_kind")
                    .width(150.0)
                    .selected_text(self.kind_label(&self.settings.kind))
                    .show_ui(ui, |ui| {
                        for (kind, label) in self.kinds.iter().zip(self.kind_labels.iter()) {
                            if ui
                                .selectable_label(self.settings.kind == *kind, label)
                                .clicked()
                            {
                                self.settings.kind = kind.clone();
                                action = ControlPanelAction::SelectKind(kind.clone());
                            }
                        }
                    });
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(has_chart, |ui| {
                let button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.label(RichText::new("📊 Progress").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.loading),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    BrowseTable,
    GroupingChanged,
    ShowView(View),
    SelectKind(String),
    ExportPng,
}
