//! Chart backend seam: create a chart from a spec, destroy it explicitly.

use crate::charts::ChartSpec;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart has no categories to draw")]
    Empty,
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A live chart owned by whoever created it.
pub trait ChartHandle {
    /// Release the chart's resources. Consumes the handle.
    fn destroy(self);
}

/// Builds charts on a render target.
pub trait ChartBackend {
    type Target;
    type Handle: ChartHandle;

    fn create_chart(
        &mut self,
        target: &Self::Target,
        spec: ChartSpec,
    ) -> Result<Self::Handle, ChartError>;
}
