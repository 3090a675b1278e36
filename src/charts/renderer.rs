//! Static Chart Renderer
//! Renders a chart spec to a PNG with plotters.
//!
//! Layout follows the app's dark theme:
//! 1. Category axis with one tick per label, in the chart's tick colour
//! 2. Value axis titled with the dataset label
//! 3. One bar series per dataset, legend in the upper right corner

use crate::charts::{ChartBackend, ChartError, ChartHandle, ChartSpec, Orientation, Rgb};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// Colors
const BACKGROUND: RGBColor = RGBColor(27, 27, 27);
const FOREGROUND: RGBColor = RGBColor(220, 220, 220);

const FONT: &str = "sans-serif";
const LABEL_AREA: u32 = 140;
const BAR_MARGIN: u32 = 6;

type DrawResult = Result<(), Box<dyn Error>>;

fn to_rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Writes charts to PNG files; the file is the chart's resource.
#[derive(Debug, Clone, Copy)]
pub struct StaticChartRenderer {
    width: u32,
    height: u32,
}

impl StaticChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render a spec to in-memory PNG bytes.
    pub fn render_png_bytes(spec: &ChartSpec, width: u32, height: u32) -> Result<Vec<u8>, ChartError> {
        if spec.labels.is_empty() {
            return Err(ChartError::Empty);
        }

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw(&root, spec).map_err(|e| ChartError::Render(e.to_string()))?;
            root.present()
                .map_err(|e| ChartError::Render(e.to_string()))?;
        }

        let image = RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| ChartError::Render("pixel buffer size mismatch".to_string()))?;

        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    fn draw(root: &DrawingArea<BitMapBackend<'_>, Shift>, spec: &ChartSpec) -> DrawResult {
        root.fill(&BACKGROUND)?;
        match spec.orientation {
            Orientation::Horizontal => Self::draw_horizontal(root, spec),
        }
    }

    fn draw_horizontal(root: &DrawingArea<BitMapBackend<'_>, Shift>, spec: &ChartSpec) -> DrawResult {
        let (lo, hi) = spec.value_range();
        let count = spec.labels.len();
        let tick = to_rgb(spec.category_axis.tick_color.unwrap_or(Rgb(220, 220, 220)));
        let labels = &spec.labels;

        let mut chart = ChartBuilder::on(root)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(LABEL_AREA)
            .build_cartesian_2d(lo..hi, (0..count).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(count)
            .y_label_formatter(&|v: &SegmentValue<usize>| match v {
                SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .y_label_style((FONT, 14).into_font().color(&tick))
            .x_label_style((FONT, 13).into_font().color(&FOREGROUND))
            .x_desc(spec.value_axis.title.clone().unwrap_or_default())
            .axis_desc_style((FONT, 15).into_font().color(&FOREGROUND))
            .draw()?;

        let color = to_rgb(spec.bar_color);
        for dataset in &spec.datasets {
            chart
                .draw_series(
                    Histogram::horizontal(&chart)
                        .style(color.filled())
                        .margin(BAR_MARGIN)
                        .baseline(lo.max(0.0))
                        .data(dataset.values.iter().enumerate().map(|(i, v)| (i, *v))),
                )?
                .label(dataset.label.clone())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
        }

        if spec.legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&BACKGROUND.mix(0.8))
                .border_style(&FOREGROUND)
                .label_font((FONT, 14).into_font().color(&FOREGROUND))
                .draw()?;
        }
        Ok(())
    }
}

impl ChartBackend for StaticChartRenderer {
    type Target = PathBuf;
    type Handle = RenderedChart;

    fn create_chart(&mut self, target: &PathBuf, spec: ChartSpec) -> Result<RenderedChart, ChartError> {
        let bytes = Self::render_png_bytes(&spec, self.width, self.height)?;
        fs::write(target, bytes)?;
        info!(path = %target.display(), "rendered chart image");
        Ok(RenderedChart {
            path: target.clone(),
        })
    }
}

/// A chart image on disk. Destroying it deletes the file.
#[derive(Debug)]
pub struct RenderedChart {
    path: PathBuf,
}

impl RenderedChart {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detach the file from the handle so it outlives it.
    pub fn keep(self) -> PathBuf {
        self.path
    }
}

impl ChartHandle for RenderedChart {
    fn destroy(self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed chart image"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "could not remove chart image"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartStyle;
    use crate::data::Dataset;

    fn empty_spec() -> ChartSpec {
        ChartSpec::horizontal_bar(&[], &Dataset::new("Gold", Vec::new()), &ChartStyle::default())
    }

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn two_player_spec() -> ChartSpec {
        let labels = vec!["Caps".to_string(), "Canna".to_string()];
        ChartSpec::horizontal_bar(
            &labels,
            &Dataset::new("Gold", vec![14800.0, 10400.0]),
            &ChartStyle::default(),
        )
    }

    #[test]
    fn renders_png_bytes() {
        let bytes = StaticChartRenderer::render_png_bytes(&two_player_spec(), 640, 400).unwrap();
        assert!(bytes.starts_with(&PNG_SIGNATURE));

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (640, 400));
    }

    #[test]
    fn create_chart_writes_png_that_keep_preserves() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("gold.png");
        let mut renderer = StaticChartRenderer::new(640, 400);

        let chart = renderer.create_chart(&target, two_player_spec()).unwrap();
        assert_eq!(chart.path(), target.as_path());
        assert!(fs::read(&target).unwrap().starts_with(&PNG_SIGNATURE));

        let kept = chart.keep();
        assert_eq!(kept, target);
        assert!(target.exists());
    }

    #[test]
    fn refuses_to_render_without_categories() {
        assert!(matches!(
            StaticChartRenderer::render_png_bytes(&empty_spec(), 320, 200),
            Err(ChartError::Empty)
        ));
    }

    #[test]
    fn failed_render_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("chart.png");
        let mut renderer = StaticChartRenderer::new(320, 200);
        assert!(renderer.create_chart(&target, empty_spec()).is_err());
        assert!(!target.exists());
    }

    #[test]
    fn destroy_removes_file_unless_kept() {
        let dir = tempfile::tempdir().unwrap();
        let owned = dir.path().join("owned.png");
        let kept = dir.path().join("kept.png");
        fs::write(&owned, b"png").unwrap();
        fs::write(&kept, b"png").unwrap();

        RenderedChart {
            path: owned.clone(),
        }
        .destroy();
        let path = RenderedChart { path: kept.clone() }.keep();

        assert!(!owned.exists());
        assert_eq!(path, kept);
        assert!(kept.exists());
    }
}
