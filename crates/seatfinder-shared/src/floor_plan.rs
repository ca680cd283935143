//! Seating map annotation.
//!
//! The floor plan is decoded once, downscaled if it is wider than the display
//! limit, and kept as a read-only base image. Each lookup draws its marker on
//! a fresh copy.

use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tracing::{debug, info};

use crate::constants::{MARKER_COLOR, MARKER_STROKE_WIDTH};
use crate::coords::TableCoordinates;
use crate::error::MapError;
use crate::types::Point;

/// Ratio applied to original-resolution coordinates once the image has been
/// shrunk to `max_width`.
pub fn scale_factor(original_width: u32, max_width: u32) -> f64 {
    if original_width == 0 || original_width <= max_width {
        1.0
    } else {
        f64::from(max_width) / f64::from(original_width)
    }
}

/// A circle in display-resolution pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub x: i64,
    pub y: i64,
    pub radius: u32,
}

impl Marker {
    pub fn scaled(point: Point, radius: u32, scale: f64) -> Self {
        Self {
            x: (f64::from(point.x) * scale).round() as i64,
            y: (f64::from(point.y) * scale).round() as i64,
            radius: (f64::from(radius) * scale).round() as u32,
        }
    }
}

/// Outcome of annotating the plan for one table.
#[derive(Debug)]
pub enum MapRender<'a> {
    /// A marked copy of the base image.
    Marked { image: RgbImage, marker: Marker },
    /// The table has no configured position; the caller shows the base
    /// image unmarked with a warning.
    CoordinatesMissing { table: String, base: &'a RgbImage },
}

impl MapRender<'_> {
    pub fn image(&self) -> &RgbImage {
        match self {
            MapRender::Marked { image, .. } => image,
            MapRender::CoordinatesMissing { base, .. } => base,
        }
    }

    pub fn is_marked(&self) -> bool {
        matches!(self, MapRender::Marked { .. })
    }
}

#[derive(Debug, Clone)]
pub struct FloorPlan {
    base: RgbImage,
    scale: f64,
}

impl FloorPlan {
    pub fn load(path: &Path, max_width: u32) -> Result<Self, MapError> {
        if !path.exists() {
            return Err(MapError::NotFound(path.display().to_string()));
        }

        let img = image::open(path)?;
        let plan = Self::from_image(img, max_width)?;

        info!(
            path = %path.display(),
            width = plan.base.width(),
            height = plan.base.height(),
            scale = plan.scale,
            "Floor plan loaded"
        );
        Ok(plan)
    }

    /// Convert to RGB and shrink to `max_width` (aspect ratio preserved).
    pub fn from_image(img: DynamicImage, max_width: u32) -> Result<Self, MapError> {
        let rgb = img.into_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }

        let scale = scale_factor(width, max_width);
        let base = if scale < 1.0 {
            let new_w = max_width;
            let new_h = ((f64::from(height) * scale).round() as u32).max(1);
            debug!(width, height, new_w, new_h, "Downscaling floor plan");
            image::imageops::resize(&rgb, new_w, new_h, FilterType::Lanczos3)
        } else {
            rgb
        };

        Ok(Self { base, scale })
    }

    pub fn base(&self) -> &RgbImage {
        &self.base
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Mark `table_id` on a copy of the plan. Never touches the base image.
    pub fn annotate(&self, table_id: &str, coords: &TableCoordinates) -> MapRender<'_> {
        let table = table_id.trim().to_uppercase();

        let Some(point) = coords.get(&table) else {
            debug!(table = %table, "No coordinates configured for table");
            return MapRender::CoordinatesMissing {
                table,
                base: &self.base,
            };
        };

        let marker = Marker::scaled(point, coords.radius(), self.scale);
        let mut image = self.base.clone();
        draw_ring(&mut image, marker, MARKER_STROKE_WIDTH, Rgb(MARKER_COLOR));

        debug!(table = %table, ?marker, "Table marked on floor plan");
        MapRender::Marked { image, marker }
    }
}

/// Draw an unfilled circle whose outline extends `stroke` pixels inward from
/// `marker.radius`. Pixels outside the image are clipped.
fn draw_ring(image: &mut RgbImage, marker: Marker, stroke: u32, color: Rgb<u8>) {
    let outer = i64::from(marker.radius);
    let inner = (outer - i64::from(stroke)).max(0);
    // Squared distances of a u32-sized radius exceed i64.
    let square = |v: i64| i128::from(v) * i128::from(v);
    let (outer_sq, inner_sq) = (square(outer), square(inner));

    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    let x_range = (marker.x - outer).max(0)..=(marker.x + outer).min(width - 1);
    let y_range = (marker.y - outer).max(0)..=(marker.y + outer).min(height - 1);

    for py in y_range {
        for px in x_range.clone() {
            let (dx, dy) = (px - marker.x, py - marker.y);
            let dist_sq = square(dx) + square(dy);
            let on_ring = dist_sq <= outer_sq && (inner == 0 || dist_sq > inner_sq);
            if on_ring {
                image.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, MapError> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}
