use std::io::Write;

use anyhow::{anyhow, Context, Result};
use geo::{Coord, CoordsIter, LineString, MultiPolygon};

use crate::style::FeatureStyle;
use crate::viewer::Viewer;

/// Projection function: lon/lat -> SVG coords (x,y)
type Projection = dyn Fn(&Coord<f64>) -> (f64, f64);

/// Render the loaded county as an SVG choropleth: one path per block group,
/// filled and stroked per the currently resolved styles.
///
/// `width` is the output width in pixels; height follows from the county's
/// aspect ratio. Errors if no county is loaded.
pub fn render_svg(viewer: &Viewer, out: &mut impl Write, width: u32, margin: u32) -> Result<()> {
    let layer = viewer.boundaries()
        .ok_or_else(|| anyhow!("[render_svg] No county loaded; nothing to draw."))?;
    let bounds = layer.bounds()
        .ok_or_else(|| anyhow!("[render_svg] Could not determine bounds; nothing to draw."))?;

    let margin = margin as f64;
    let width = width as f64;
    let scale = (width - 2.0 * margin) / bounds.width();
    let height = bounds.height() * scale + 2.0 * margin;

    // --- Map lon/lat -> SVG coords (preserve aspect, Y down) ---
    let (min, max) = (bounds.min(), bounds.max());
    let project = move |coord: &Coord<f64>| -> (f64, f64) {
        let x = margin + (coord.x - min.x) * scale;
        let y = margin + (max.y - coord.y) * scale; // invert vertically
        (x, y)
    };

    write_header(out, width, height)?;
    for feature in layer.features() {
        let style = viewer.style_for(&feature.geoid);
        draw_feature(out, &feature.geometry, &style, &project)
            .with_context(|| format!("[render_svg] Failed to draw {}", feature.geoid))?;
    }
    write_footer(out)?;
    out.flush()?;

    Ok(())
}

/// Write the SVG header, including the XML declaration and opening <svg> tag.
fn write_header(out: &mut impl Write, width: f64, height: f64) -> Result<()> {
    writeln!(out, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(out, r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"##)?;
    writeln!(out, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
fn write_footer(out: &mut impl Write) -> Result<()> {
    writeln!(out, "</svg>")?;
    Ok(())
}

fn draw_feature(
    out: &mut impl Write,
    shape: &MultiPolygon<f64>,
    style: &FeatureStyle,
    project: &Projection,
) -> Result<()> {
    writeln!(
        out,
        r#"<path d="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}"/>"#,
        multipolygon_to_path(shape, project),
        style.fill_color,
        style.fill_opacity,
        style.stroke_color,
        style.stroke_weight,
        style.stroke_opacity,
    )?;
    Ok(())
}

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
fn multipolygon_to_path(shape: &MultiPolygon<f64>, project: &Projection) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        out.push_str(&ring_to_path(polygon.exterior(), project));
        for interior in polygon.interiors() {
            out.push_str(&ring_to_path(interior, project));
        }
    }

    out
}

/// Build a compact SVG path string for a LineString (ring).
fn ring_to_path(ring: &LineString<f64>, project: &Projection) -> String {
    let mut out = String::new();

    let mut coords = ring.coords_iter()
        .map(|coord| project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }

    out
}
