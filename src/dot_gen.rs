use crate::error::{DotError, DotResult};
use crate::manifest;
use crate::palette::{DotColor, Palette};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, ImageError, Rgba, RgbaImage,
};
use log::{debug, info};
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tempfile::{Builder, NamedTempFile};

/// Side length of every generated emoji canvas (chat platforms expect 128x128)
pub const CANVAS_SIZE: u32 = 128;

/// Diameter of the dot drawn in the middle of the canvas
pub const DOT_DIAMETER: u32 = 28;

/// Fully transparent white
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// In-memory image before it is encoded
pub type Canvas = RgbaImage;

/// Inclusive pixel rectangle the dot is inscribed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Options for a full generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub manifest: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            manifest: false,
        }
    }
}

/// Box of a `diameter` wide dot centered on a `canvas_size` square canvas.
///
/// Uses floor division on both halves, so for 128/28 the box is 50..=78.
pub fn dot_bounding_box(canvas_size: u32, diameter: u32) -> BoundingBox {
    let center = canvas_size / 2;
    let offset = diameter / 2;

    BoundingBox {
        min_x: center.saturating_sub(offset),
        min_y: center.saturating_sub(offset),
        max_x: center + offset,
        max_y: center + offset,
    }
}

/// Draw a single status dot on a fresh transparent canvas
pub fn generate(color: DotColor) -> Canvas {
    let bbox = dot_bounding_box(CANVAS_SIZE, DOT_DIAMETER);
    debug!("Drawing {} dot inside {:?}", color.hex(), bbox);

    let mut canvas = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND);
    fill_ellipse(&mut canvas, bbox, color.to_rgba());
    canvas
}

/// Fill the ellipse inscribed in `bbox`, testing each pixel center.
/// No anti-aliasing; pixels outside `bbox` are never touched.
fn fill_ellipse(canvas: &mut Canvas, bbox: BoundingBox, fill: Rgba<u8>) {
    if canvas.width() == 0 || canvas.height() == 0 {
        return;
    }

    let center_x = (bbox.min_x + bbox.max_x) as f32 / 2.0;
    let center_y = (bbox.min_y + bbox.max_y) as f32 / 2.0;
    // A zero-sized box still gets its single pixel
    let radius_x = ((bbox.max_x - bbox.min_x) as f32 / 2.0).max(0.5);
    let radius_y = ((bbox.max_y - bbox.min_y) as f32 / 2.0).max(0.5);

    let max_x = bbox.max_x.min(canvas.width() - 1);
    let max_y = bbox.max_y.min(canvas.height() - 1);

    for y in bbox.min_y..=max_y {
        for x in bbox.min_x..=max_x {
            let dx = (x as f32 - center_x) / radius_x;
            let dy = (y as f32 - center_y) / radius_y;

            if dx * dx + dy * dy <= 1.0 {
                canvas.put_pixel(x, y, fill);
            }
        }
    }
}

/// Encode `canvas` as PNG at `path`, replacing any existing file.
///
/// The bytes go to a temporary file in the same directory which is renamed
/// over `path` only once fully written; on failure it is removed again.
pub fn save(canvas: &Canvas, path: &Path) -> DotResult<()> {
    write_atomically(path, |w| {
        write_png(canvas.as_raw(), w, canvas.width(), canvas.height())
    })
}

/// Write through a sibling temp file and rename it into place
pub(crate) fn write_atomically<F>(path: &Path, write: F) -> DotResult<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = new_temp_file(dir).map_err(|err| DotError::io(path, err))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer).map_err(|err| DotError::io(path, err))?;
        writer.flush().map_err(|err| DotError::io(path, err))?;
    }

    // A replaced file keeps its mode
    if let Ok(existing) = fs::metadata(path) {
        if existing.is_file() {
            info!("Overwriting existing file {}", path.display());
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|err| DotError::io(path, err))?;
        }
    }

    tmp.persist(path)
        .map_err(|err| DotError::io(path, err.error))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Temp file created with the mode a plain `File::create` would get (0666 minus umask)
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

// Encode RGBA data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> io::Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image_data, width, height, ColorType::Rgba8)
        .map_err(|err| match err {
            ImageError::IoError(err) => err,
            other => io::Error::new(io::ErrorKind::Other, other),
        })
}

/// Generate and save every dot in `palette`, in order.
///
/// Stops at the first failure; files written before it are left in place.
/// Returns the paths of the PNGs that were written.
pub fn generate_dots(palette: &Palette, options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    info!(
        "Generating {} status dots into {}",
        palette.len(),
        options.output_dir.display()
    );

    let mut written = Vec::with_capacity(palette.len());

    for entry in palette.entries() {
        let canvas = generate(entry.color);

        let file_name = entry.file_name();
        let output_path = options.output_dir.join(&file_name);
        save(&canvas, &output_path).with_context(|| {
            format!(
                "Failed to create {} dot at {}",
                entry.name,
                output_path.display()
            )
        })?;

        println!("Created: {file_name}");
        written.push(output_path);
    }

    if options.manifest {
        let manifest_path = manifest::write_manifest(&options.output_dir, palette)
            .context("Failed to write emoji manifest")?;
        if let Some(name) = manifest_path.file_name() {
            println!("Created: {}", name.to_string_lossy());
        }
    }

    println!("\nEmoji files generated successfully!");
    println!("Upload these to your Discord server to get emoji IDs.");

    info!("Generated {} status dots", written.len());
    Ok(written)
}
