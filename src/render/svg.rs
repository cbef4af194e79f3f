//! SVG serialization of a laid-out phasor diagram.
//!
//! The canvas is a square of `RenderConfig::pixel_size()` pixels. The polar
//! plot sits left of center so the legend fits in the right margin without
//! covering any arrow. Angles run counter-clockwise from the positive real
//! axis, as on a matplotlib polar axis.

use std::fmt;

use crate::math::Scalar;

use super::colors::css_hex;
use super::config::RenderConfig;
use super::layout::{Arrow, PhasorDiagram};

const CENTER_X: Scalar = 0.36;
const CENTER_Y: Scalar = 0.54;
const RADIUS: Scalar = 0.28;
const LEGEND_X: Scalar = 0.71;
const LEGEND_Y: Scalar = 0.08;
const SPOKE_STEP_DEG: u32 = 45;

const GRID_COLOR: &str = "#b0b0b0";
const AXIS_COLOR: &str = "#000000";
const TEXT_COLOR: &str = "#000000";
const BACKGROUND: &str = "#ffffff";
const LEGEND_EDGE: &str = "#cccccc";

/// Shaft width as a fraction of the plot radius.
const SHAFT_WIDTH: Scalar = 0.015;
const HEAD_WIDTH: Scalar = 3.0 * SHAFT_WIDTH;
const HEAD_LENGTH: Scalar = 1.5 * HEAD_WIDTH;

/// Pixel frame derived from the canvas size.
struct Frame {
    size: Scalar,
    cx: Scalar,
    cy: Scalar,
    /// Pixels per plot unit.
    scale: Scalar,
    /// Plot radius in pixels.
    radius: Scalar,
}

impl Frame {
    fn new(size: Scalar, radial_max: Scalar) -> Self {
        let radius = RADIUS * size;
        Self {
            size,
            cx: CENTER_X * size,
            cy: CENTER_Y * size,
            scale: radius / radial_max,
            radius,
        }
    }

    /// Maps plot coordinates (y up) to canvas pixels (y down).
    fn to_px(&self, x: Scalar, y: Scalar) -> (Scalar, Scalar) {
        (self.cx + x * self.scale, self.cy - y * self.scale)
    }
}

impl PhasorDiagram {
    /// Serializes the diagram as a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self, config: &RenderConfig) -> String {
        SvgDocument {
            diagram: self,
            config,
        }
        .to_string()
    }
}

/// A diagram paired with the figure settings it is drawn with.
struct SvgDocument<'a> {
    diagram: &'a PhasorDiagram,
    config: &'a RenderConfig,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { diagram, config } = *self;
        let size = Scalar::from(config.pixel_size());
        let frame = Frame::new(size, diagram.radial_max());
        let font = escape(&config.font_family);

        write!(
            f,
            "<svg xmlns='http://www.w3.org/2000/svg' width='{size}' height='{size}' \
             viewBox='0 0 {size} {size}'>"
        )?;
        write!(
            f,
            "<rect x='0' y='0' width='{size}' height='{size}' fill='{BACKGROUND}'/>"
        )?;

        write_title(f, diagram.title(), &frame, config, &font)?;
        write_grid(f, diagram.radial_max(), &frame, config, &font)?;
        for arrow in diagram.arrows() {
            write_arrow(f, arrow, &frame, config)?;
        }
        for arrow in diagram.arrows() {
            write_arrow_label(f, arrow, &frame, config, &font)?;
        }
        write_legend(f, diagram.arrows(), &frame, config, &font)?;

        f.write_str("</svg>")
    }
}

fn write_title(
    out: &mut impl fmt::Write,
    title: &str,
    frame: &Frame,
    config: &RenderConfig,
    font: &str,
) -> fmt::Result {
    let y = frame.cy - frame.radius - config.pt(40.0);
    write!(
        out,
        "<text x='{:.1}' y='{y:.1}' text-anchor='middle' font-size='{:.1}' \
         fill='{TEXT_COLOR}' font-family='{font}'>{}</text>",
        frame.cx,
        config.pt(14.0),
        escape(title)
    )
}

fn write_grid(
    out: &mut impl fmt::Write,
    radial_max: Scalar,
    frame: &Frame,
    config: &RenderConfig,
    font: &str,
) -> fmt::Result {
    let thin = config.pt(0.8);
    let tick_font = config.pt(9.0);

    // Rings with radial tick labels along the 22.5° direction.
    let label_dir = 22.5_f64.to_radians();
    for k in 1..=config.grid_rings {
        let value = radial_max * k as Scalar / config.grid_rings as Scalar;
        let r = value * frame.scale;
        let (stroke, width) = if k == config.grid_rings {
            (AXIS_COLOR, config.pt(1.0))
        } else {
            (GRID_COLOR, thin)
        };
        write!(
            out,
            "<circle cx='{:.1}' cy='{:.1}' r='{r:.1}' fill='none' stroke='{stroke}' \
             stroke-width='{width:.2}'/>",
            frame.cx, frame.cy
        )?;
        let (x, y) = frame.to_px(value * label_dir.cos(), value * label_dir.sin());
        write!(
            out,
            "<text x='{x:.1}' y='{y:.1}' font-size='{tick_font:.1}' fill='{TEXT_COLOR}' \
             font-family='{font}'>{value:.1}</text>"
        )?;
    }

    // Spokes with degree labels just outside the outer ring.
    for deg in (0..360).step_by(SPOKE_STEP_DEG as usize) {
        let theta = Scalar::from(deg).to_radians();
        let (x2, y2) = frame.to_px(radial_max * theta.cos(), radial_max * theta.sin());
        write!(
            out,
            "<line x1='{:.1}' y1='{:.1}' x2='{x2:.1}' y2='{y2:.1}' stroke='{GRID_COLOR}' \
             stroke-width='{thin:.2}'/>",
            frame.cx, frame.cy
        )?;
        let offset = frame.radius + config.pt(14.0);
        let lx = frame.cx + offset * theta.cos();
        let ly = frame.cy - offset * theta.sin() + tick_font / 3.0;
        write!(
            out,
            "<text x='{lx:.1}' y='{ly:.1}' text-anchor='middle' font-size='{tick_font:.1}' \
             fill='{TEXT_COLOR}' font-family='{font}'>{deg}°</text>"
        )?;
    }
    Ok(())
}

/// Arrow outline in local coordinates (shaft along +u), rotated to `angle`.
fn arrow_outline(length: Scalar, angle: Scalar, radial_max: Scalar) -> Vec<(Scalar, Scalar)> {
    let w = SHAFT_WIDTH * radial_max / 2.0;
    let hw = HEAD_WIDTH * radial_max / 2.0;
    let hl = (HEAD_LENGTH * radial_max).min(length);
    let neck = length - hl;
    let (sin, cos) = angle.sin_cos();
    [
        (0.0, -w),
        (neck, -w),
        (neck, -hw),
        (length, 0.0),
        (neck, hw),
        (neck, w),
        (0.0, w),
    ]
    .into_iter()
    .map(|(u, v)| (u * cos - v * sin, u * sin + v * cos))
    .collect()
}

fn write_arrow(
    out: &mut impl fmt::Write,
    arrow: &Arrow,
    frame: &Frame,
    config: &RenderConfig,
) -> fmt::Result {
    if arrow.length <= 0.0 {
        return Ok(());
    }
    let radial_max = frame.radius / frame.scale;
    let points = arrow_outline(arrow.length, arrow.angle, radial_max)
        .into_iter()
        .map(|(x, y)| {
            let (px, py) = frame.to_px(x, y);
            format!("{px:.1},{py:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    write!(
        out,
        "<polygon points='{points}' fill='{}' stroke='{AXIS_COLOR}' stroke-width='{:.2}' \
         stroke-linejoin='round' opacity='0.7'/>",
        css_hex(arrow.color),
        config.pt(2.0)
    )
}

fn write_arrow_label(
    out: &mut impl fmt::Write,
    arrow: &Arrow,
    frame: &Frame,
    config: &RenderConfig,
    font: &str,
) -> fmt::Result {
    let (ax, ay) = arrow.label_anchor();
    let (x, y) = frame.to_px(ax, ay);
    write!(
        out,
        "<text x='{x:.1}' y='{:.1}' text-anchor='middle' font-size='{:.1}' \
         fill='{TEXT_COLOR}' font-family='{font}'>{}</text>",
        y - config.pt(2.0),
        config.pt(10.0),
        escape(&arrow.label)
    )
}

fn write_legend(
    out: &mut impl fmt::Write,
    arrows: &[Arrow],
    frame: &Frame,
    config: &RenderConfig,
    font: &str,
) -> fmt::Result {
    let font_size = config.pt(9.0);
    let row = font_size * 1.6;
    let swatch = font_size * 1.4;
    let pad = font_size * 0.6;
    let x0 = LEGEND_X * frame.size;
    let y0 = LEGEND_Y * frame.size;

    // Rough advance width for proportional sans fonts.
    let longest = arrows
        .iter()
        .map(|a| a.legend.chars().count())
        .max()
        .unwrap_or(0) as Scalar;
    let width = (2.0 * pad + swatch + pad + longest * font_size * 0.58)
        .min(frame.size - x0 - pad);
    let height = 2.0 * pad + row * arrows.len() as Scalar;

    write!(
        out,
        "<g transform='translate({x0:.1},{y0:.1})'>\
         <rect x='0' y='0' width='{width:.1}' height='{height:.1}' rx='{:.1}' \
         fill='{BACKGROUND}' fill-opacity='0.8' stroke='{LEGEND_EDGE}' stroke-width='{:.2}'/>",
        pad / 2.0,
        config.pt(0.8)
    )?;
    for (i, arrow) in arrows.iter().enumerate() {
        let top = pad + row * i as Scalar + (row - swatch * 0.5) / 2.0;
        write!(
            out,
            "<rect x='{pad:.1}' y='{top:.1}' width='{swatch:.1}' height='{:.1}' fill='{}' \
             stroke='{AXIS_COLOR}' stroke-width='{:.2}' opacity='0.7'/>",
            swatch * 0.5,
            css_hex(arrow.color),
            config.pt(1.0)
        )?;
        write!(
            out,
            "<text x='{:.1}' y='{:.1}' font-size='{font_size:.1}' fill='{TEXT_COLOR}' \
             font-family='{font}'>{}</text>",
            2.0 * pad + swatch,
            pad + row * i as Scalar + row * 0.7,
            escape(&arrow.legend)
        )?;
    }
    out.write_str("</g>")
}

/// Escapes text for use in XML character data and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::CScalar;
    use crate::phasor_set::LabeledPhasorSet;

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn arrow_outline_tip_matches_length_and_angle() {
        let outline = arrow_outline(0.8, std::f64::consts::FRAC_PI_2, 1.0);
        let (x, y) = outline[3];
        assert_relative_eq!(x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn document_contains_title_legend_and_one_polygon_per_arrow() {
        let set = LabeledPhasorSet::new()
            .with("V_ref", CScalar::new(10.0, 0.0))
            .with("V<L>", CScalar::new(0.0, 5.0));
        let config = RenderConfig::default();
        let diagram = PhasorDiagram::layout(&set, "Voltages", &config).unwrap();
        let svg = diagram.to_svg(&config);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">Voltages</text>"));
        assert!(svg.contains("V_ref (10.00 ∠ 0.00°)"));
        assert!(svg.contains("V&lt;L&gt; (5.00 ∠ 90.00°)"));
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert_eq!(svg.matches("<circle").count(), config.grid_rings);
        assert!(svg.contains("fill='#1f77b4'"));
        assert!(svg.contains("fill='#ff7f0e'"));
    }
}
