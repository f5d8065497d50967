use crate::dot_gen::{dot_bounding_box, Canvas, CANVAS_SIZE, DOT_DIAMETER};
use crate::palette::DotColor;
use anyhow::{Context, Result};
use image::Rgba;
use std::path::Path;

/// What a decoded dot image looks like
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotReport {
    pub width: u32,
    pub height: u32,
    /// Pixel at (width / 2, height / 2)
    pub center: Rgba<u8>,
    /// Every pixel outside the dot bounding box has alpha 0
    pub transparent_outside: bool,
    /// Number of fully opaque pixels
    pub opaque_pixels: usize,
}

impl DotReport {
    /// True if the image is a correctly sized, correctly colored dot
    pub fn matches(&self, color: DotColor) -> bool {
        self.width == CANVAS_SIZE
            && self.height == CANVAS_SIZE
            && self.center == color.to_rgba()
            && self.transparent_outside
    }
}

/// Decode a PNG from disk and inspect it
pub fn inspect(path: &Path) -> Result<DotReport> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode image: {}", path.display()))?;

    Ok(inspect_canvas(&img.to_rgba8()))
}

pub fn inspect_canvas(canvas: &Canvas) -> DotReport {
    let width = canvas.width();
    let height = canvas.height();

    let center = if width == 0 || height == 0 {
        Rgba([0, 0, 0, 0])
    } else {
        *canvas.get_pixel(width / 2, height / 2)
    };

    let bbox = dot_bounding_box(width, DOT_DIAMETER);
    let transparent_outside = canvas
        .enumerate_pixels()
        .filter(|(x, y, _)| !bbox.contains(*x, *y))
        .all(|(_, _, pixel)| pixel[3] == 0);

    let opaque_pixels = canvas.pixels().filter(|pixel| pixel[3] == 255).count();

    DotReport {
        width,
        height,
        center,
        transparent_outside,
        opaque_pixels,
    }
}
