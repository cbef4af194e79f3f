//! Polar phasor diagrams.
//!
//! Rendering is split into three pure stages: [`PhasorDiagram::layout`]
//! normalizes the phasors into arrows, [`PhasorDiagram::to_svg`] draws them,
//! and [`raster::rasterize`] produces PNG bytes. Nothing here writes to a
//! file or display; callers decide where the bytes go.

use tracing::debug;

use crate::phasor_set::LabeledPhasorSet;

/// Figure settings.
pub mod config;
/// Arrow geometry and normalization.
pub mod layout;
/// Arrow colors.
pub mod colors;
/// PNG output.
pub mod raster;
/// SVG document builder.
pub mod svg;

pub use config::RenderConfig;
pub use layout::{Arrow, PhasorDiagram};
pub use colors::TAB10;

/// Errors raised while rendering a diagram. No partial image is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The set is empty or every phasor has zero magnitude.
    #[error("phasor set is empty or every phasor has zero magnitude")]
    EmptyOrZeroInput,
    /// An entry has a NaN or infinite component.
    #[error("phasor `{label}` is not finite")]
    NonFinitePhasor {
        /// Label of the offending entry.
        label: String,
    },
    /// The render configuration cannot produce an image.
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),
    /// The generated SVG was rejected by the parser.
    #[error("svg error: {0}")]
    Svg(String),
    /// Pixmap allocation or PNG encoding failed.
    #[error("png encoding error: {0}")]
    Encode(String),
}

/// Renders `phasors` as a PNG polar diagram with the default figure settings
/// (8 in at 300 DPI).
pub fn render(phasors: &LabeledPhasorSet, title: &str) -> Result<Vec<u8>, RenderError> {
    render_with(phasors, title, &RenderConfig::default())
}

/// Renders `phasors` as a PNG polar diagram using `config`.
pub fn render_with(
    phasors: &LabeledPhasorSet,
    title: &str,
    config: &RenderConfig,
) -> Result<Vec<u8>, RenderError> {
    let svg = render_svg(phasors, title, config)?;
    let png = raster::rasterize(&svg, config.dpi)?;
    debug!(title, bytes = png.len(), dpi = config.dpi, "rendered phasor diagram");
    Ok(png)
}

/// Produces the SVG document only, skipping rasterization.
pub fn render_svg(
    phasors: &LabeledPhasorSet,
    title: &str,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    config.validate()?;
    let diagram = PhasorDiagram::layout(phasors, title, config)?;
    debug!(
        title,
        arrows = diagram.arrows().len(),
        max_magnitude = diagram.max_magnitude(),
        "laid out phasor diagram"
    );
    Ok(diagram.to_svg(config))
}
