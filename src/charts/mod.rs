//! Charts module - Chart specs and rendering backends

mod backend;
mod plotter;
mod renderer;
mod spec;

pub use backend::{ChartBackend, ChartError, ChartHandle};
pub use plotter::{to_color32, ChartCanvas, LiveChart, PlotBackend};
pub use renderer::{RenderedChart, StaticChartRenderer};
pub use spec::{AxisOptions, ChartSpec, ChartStyle, ChartType, Orientation, Rgb};
