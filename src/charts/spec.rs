//! Chart Spec Module
//! Backend independent description of a chart: type, orientation, axes and payload.

use crate::data::Dataset;
use serde::{Deserialize, Serialize};

/// Plain RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn parse_hex(text: &str) -> Option<Self> {
        let hex = text.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartType {
    Bar,
}

/// Which axis carries the categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Categories on the y axis
    Horizontal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub begin_at_zero: bool,
    pub title: Option<String>,
    pub tick_color: Option<Rgb>,
}

/// Colours applied to every chart the controller builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub bar_color: Rgb,
    pub tick_color: Rgb,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_color: Rgb(54, 162, 235),
            tick_color: Rgb::WHITE,
        }
    }
}

/// Everything a backend needs to build one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub chart_type: ChartType,
    pub orientation: Orientation,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend: bool,
    pub tooltip: bool,
    pub value_axis: AxisOptions,
    pub category_axis: AxisOptions,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub bar_color: Rgb,
}

impl ChartSpec {
    /// Horizontal bar chart of a single dataset over the given categories.
    ///
    /// Legend and tooltips on, value axis starts at zero and is titled with
    /// the dataset label.
    pub fn horizontal_bar(labels: &[String], dataset: &Dataset, style: &ChartStyle) -> Self {
        Self {
            chart_type: ChartType::Bar,
            orientation: Orientation::Horizontal,
            responsive: true,
            maintain_aspect_ratio: false,
            legend: true,
            tooltip: true,
            value_axis: AxisOptions {
                begin_at_zero: true,
                title: Some(dataset.label.clone()),
                tick_color: None,
            },
            category_axis: AxisOptions {
                begin_at_zero: false,
                title: None,
                tick_color: Some(style.tick_color),
            },
            labels: labels.to_vec(),
            datasets: vec![dataset.clone()],
            bar_color: style.bar_color,
        }
    }

    /// Value axis bounds covering every dataset, with headroom past the
    /// largest magnitude.
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.datasets.iter().flat_map(|d| d.values.iter()) {
            if v.is_finite() {
                min = min.min(*v);
                max = max.max(*v);
            }
        }
        if min.is_infinite() {
            return (0.0, 1.0);
        }

        if self.value_axis.begin_at_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }

        let span = max - min;
        if span <= f64::EPSILON {
            return (min, min + 1.0);
        }

        let pad = span * 0.1;
        let lo = if self.value_axis.begin_at_zero && min >= 0.0 {
            min
        } else {
            min - pad
        };
        let hi = if self.value_axis.begin_at_zero && max <= 0.0 {
            max
        } else {
            max + pad
        };
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold_spec(values: Vec<f64>) -> ChartSpec {
        let labels: Vec<String> = (0..values.len()).map(|i| format!("P{}", i)).collect();
        ChartSpec::horizontal_bar(
            &labels,
            &Dataset::new("Gold", values),
            &ChartStyle::default(),
        )
    }

    #[test]
    fn parses_hex_colours() {
        assert_eq!(Rgb::parse_hex("#fff000"), Some(Rgb(255, 240, 0)));
        assert_eq!(Rgb::parse_hex("36a2eb"), Some(Rgb(54, 162, 235)));
        assert_eq!(Rgb::parse_hex("#fff"), None);
        assert_eq!(Rgb::parse_hex("#gggggg"), None);
    }

    #[test]
    fn horizontal_bar_carries_axis_options() {
        let spec = gold_spec(vec![1.0, 2.0, 3.0]);
        assert_eq!(spec.orientation, Orientation::Horizontal);
        assert!(spec.legend && spec.tooltip);
        assert!(spec.value_axis.begin_at_zero);
        assert_eq!(spec.value_axis.title.as_deref(), Some("Gold"));
        assert_eq!(spec.category_axis.tick_color, Some(Rgb::WHITE));
    }

    #[test]
    fn value_range_starts_at_zero() {
        let (lo, hi) = gold_spec(vec![10.0, 20.0]).value_range();
        assert_eq!(lo, 0.0);
        assert!((hi - 22.0).abs() < 1e-9);
    }

    #[test]
    fn value_range_handles_flat_and_empty_series() {
        assert_eq!(gold_spec(vec![0.0, 0.0]).value_range(), (0.0, 1.0));
        assert_eq!(gold_spec(Vec::new()).value_range(), (0.0, 1.0));
    }
}
