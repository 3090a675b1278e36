//! Cards View Widget
//! Scrollable grid of player (or team) cards with a per-kind summary strip.
//! Supports responsive multi-column layout based on available width.

use crate::stats::{KindSummary, PlayerCard};
use egui::{Color32, RichText, ScrollArea};

/// Card layout configuration
const CARD_SPACING: f32 = 12.0;
const CARD_HEIGHT: f32 = 150.0;
const CARD_WIDTH: f32 = 260.0;

const WIN_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
const LOSS_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Grid of cards, one per chart category.
#[derive(Default)]
pub struct CardsView {
    pub cards: Vec<PlayerCard>,
    pub summaries: Vec<KindSummary>,
}

impl CardsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, cards: Vec<PlayerCard>, summaries: Vec<KindSummary>) {
        self.cards = cards;
        self.summaries = summaries;
    }

    /// Draw the summary strip and the card grid
    pub fn show(&self, ui: &mut egui::Ui) {
        if self.cards.is_empty() && self.summaries.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        if !self.summaries.is_empty() {
            Self::draw_summaries(ui, &self.summaries);
            ui.add_space(CARD_SPACING);
        }

        if self.cards.is_empty() {
            return;
        }

        let avail_width = ui.available_width();
        let num_columns = ((avail_width / (CARD_WIDTH + CARD_SPACING)).floor() as usize).max(1);
        let total_rows = self.cards.len().div_ceil(num_columns);
        let row_height = CARD_HEIGHT + CARD_SPACING;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, total_rows, |ui, row_range| {
                for row in row_range {
                    ui.horizontal(|ui| {
                        for card in self.cards.iter().skip(row * num_columns).take(num_columns) {
                            Self::draw_card(ui, card);
                            ui.add_space(CARD_SPACING);
                        }
                    });
                    ui.add_space(CARD_SPACING);
                }
            });
    }

    fn draw_card(ui: &mut egui::Ui, card: &PlayerCard) {
        let border_color = if card.win { WIN_COLOR } else { LOSS_COLOR };

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, border_color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH - 20.0);
                ui.set_height(CARD_HEIGHT - 20.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(&card.name).size(16.0).strong().color(border_color));

                    let subtitle = [card.team.as_str(), card.champion.as_str(), card.side.as_str()]
                        .iter()
                        .filter(|s| !s.is_empty())
                        .copied()
                        .collect::<Vec<_>>()
                        .join(" · ");
                    if !subtitle.is_empty() {
                        ui.label(RichText::new(subtitle).size(11.0).color(Color32::GRAY));
                    }

                    ui.add_space(6.0);

                    egui::Grid::new(ui.make_persistent_id(format!("card_{}", card.name)))
                        .num_columns(4)
                        .spacing([10.0, 3.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("K/D/A").strong().size(11.0));
                            ui.label(
                                RichText::new(format!(
                                    "{}/{}/{}",
                                    card.kills, card.deaths, card.assists
                                ))
                                .size(11.0),
                            );
                            ui.label(RichText::new("KDA").strong().size(11.0));
                            ui.label(RichText::new(format!("{:.2}", card.kda)).size(11.0));
                            ui.end_row();

                            ui.label(RichText::new("CS").strong().size(11.0));
                            ui.label(RichText::new(format!("{}", card.cs)).size(11.0));
                            ui.label(RichText::new("Gold").strong().size(11.0));
                            ui.label(RichText::new(format!("{}", card.gold)).size(11.0));
                            ui.end_row();

                            ui.label(RichText::new("Damage").strong().size(11.0));
                            ui.label(RichText::new(format!("{}", card.damage)).size(11.0));
                            ui.label(RichText::new("Vision").strong().size(11.0));
                            ui.label(RichText::new(format!("{}", card.vision)).size(11.0));
                            ui.end_row();
                        });
                });
            });
    }

    fn draw_summaries(ui: &mut egui::Ui, summaries: &[KindSummary]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("kind_summaries")
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Statistic").strong().size(11.0));
                        ui.label(RichText::new("Mean").strong().size(11.0));
                        ui.label(RichText::new("Std").strong().size(11.0));
                        ui.label(RichText::new("Max").strong().size(11.0));
                        ui.label(RichText::new("Leader").strong().size(11.0));
                        ui.end_row();

                        for summary in summaries {
                            ui.label(RichText::new(&summary.label).size(11.0));
                            ui.label(RichText::new(format!("{:.1}", summary.mean)).size(11.0));
                            ui.label(RichText::new(format!("{:.1}", summary.std_dev)).size(11.0));
                            ui.label(RichText::new(format!("{}", summary.max)).size(11.0));
                            ui.label(
                                RichText::new(summary.leader.as_deref().unwrap_or("-")).size(11.0),
                            );
                            ui.end_row();
                        }
                    });
            });
    }
}
