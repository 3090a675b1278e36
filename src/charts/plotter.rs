//! Chart Plotter Module
//! Live, interactive bar charts drawn with egui_plot.

use crate::charts::{ChartBackend, ChartError, ChartHandle, ChartSpec, Rgb};
use egui::Color32;
use egui_plot::{Bar, BarChart, GridInput, GridMark, Legend, Plot};
use std::ops::RangeInclusive;
use tracing::debug;

/// Bar thickness relative to the category slot
const BAR_WIDTH: f64 = 0.6;
/// Plot height when the aspect ratio is kept
const FIXED_ASPECT: f32 = 2.0;

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// The area the live chart is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartCanvas {
    id: String,
}

impl ChartCanvas {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Creates [`LiveChart`]s. Each chart gets a fresh plot id so zoom and pan
/// state never leaks from a destroyed chart into its replacement.
#[derive(Debug, Default)]
pub struct PlotBackend {
    generation: u64,
}

impl PlotBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of charts created so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl ChartBackend for PlotBackend {
    type Target = ChartCanvas;
    type Handle = LiveChart;

    fn create_chart(
        &mut self,
        target: &ChartCanvas,
        spec: ChartSpec,
    ) -> Result<LiveChart, ChartError> {
        if spec.labels.is_empty() {
            return Err(ChartError::Empty);
        }

        self.generation += 1;
        let plot_id = format!("{}_{}", target.id(), self.generation);
        debug!(plot = %plot_id, categories = spec.labels.len(), "created live chart");
        Ok(LiveChart { plot_id, spec })
    }
}

/// A chart drawn every frame from its spec.
#[derive(Debug)]
pub struct LiveChart {
    plot_id: String,
    spec: ChartSpec,
}

impl ChartHandle for LiveChart {
    fn destroy(self) {
        debug!(plot = %self.plot_id, "released live chart");
    }
}

impl LiveChart {
    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn plot_id(&self) -> &str {
        &self.plot_id
    }

    /// Draw the chart into the available space.
    pub fn show(&self, ui: &mut egui::Ui) {
        let spec = &self.spec;
        let color = to_color32(spec.bar_color);
        let count = spec.labels.len();

        let mut plot = Plot::new(self.plot_id.as_str()).allow_scroll(false);

        plot = if spec.maintain_aspect_ratio {
            plot.view_aspect(FIXED_ASPECT)
        } else {
            plot.height(ui.available_height())
        };

        if spec.legend {
            plot = plot.legend(Legend::default());
        }

        let labels = spec.labels.clone();
        let category_formatter = move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        };
        let category_spacer = move |_input: GridInput| {
            (0..count)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect::<Vec<_>>()
        };

        let value_title = spec.value_axis.title.clone().unwrap_or_default();
        let category_min = -0.5;
        let category_max = count as f64 - 0.5;

        plot = plot
            .y_axis_formatter(category_formatter)
            .y_grid_spacer(category_spacer)
            .include_y(category_min)
            .include_y(category_max)
            .x_axis_label(value_title);
        if spec.value_axis.begin_at_zero {
            plot = plot.include_x(0.0);
        }

        plot.show(ui, |plot_ui| {
            for dataset in &spec.datasets {
                let bars: Vec<Bar> = dataset
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| {
                        let name = spec.labels.get(i).cloned().unwrap_or_default();
                        Bar::new(i as f64, v).name(name).width(BAR_WIDTH).fill(color)
                    })
                    .collect();

                let mut chart = BarChart::new(bars)
                    .name(&dataset.label)
                    .color(color)
                    .horizontal();
                chart = if spec.tooltip {
                    chart.element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
                        format!("{}: {}", bar.name, bar.value)
                    }))
                } else {
                    chart.element_formatter(Box::new(|_: &Bar, _: &BarChart| String::new()))
                };

                plot_ui.bar_chart(chart);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartStyle;
    use crate::data::Dataset;

    fn spec(labels: &[&str]) -> ChartSpec {
        let labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        let values = vec![1.0; labels.len()];
        ChartSpec::horizontal_bar(&labels, &Dataset::new("Kills", values), &ChartStyle::default())
    }

    #[test]
    fn each_chart_gets_a_fresh_plot_id() {
        let canvas = ChartCanvas::new("stats_chart");
        let mut backend = PlotBackend::new();

        let first = backend.create_chart(&canvas, spec(&["A"])).unwrap();
        let second = backend.create_chart(&canvas, spec(&["A"])).unwrap();

        assert_eq!(first.plot_id(), "stats_chart_1");
        assert_eq!(second.plot_id(), "stats_chart_2");
        assert_eq!(backend.generation(), 2);
        first.destroy();
        second.destroy();
    }

    #[test]
    fn refuses_chart_without_categories() {
        let mut backend = PlotBackend::new();
        let result = backend.create_chart(&ChartCanvas::new("c"), spec(&[]));
        assert!(matches!(result, Err(ChartError::Empty)));
        assert_eq!(backend.generation(), 0);
    }
}
