use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, RgbImage};

use crate::domain::{AppError, IMAGE_EXTENSIONS, image_stem};

/// Brightness and detail statistics over an RGB image, matching the
/// audit thresholds: per-channel mean and standard deviation, averaged
/// across the three channels.
#[derive(Debug, Clone, Copy)]
pub struct ImageStats {
    pub mean_brightness: f64,
    pub std_dev: f64,
}

/// Decode an image file and compute its statistics.
pub fn image_stats(path: &Path) -> Result<ImageStats, AppError> {
    let img = image::open(path)?.to_rgb8();
    Ok(stats_of(&img))
}

fn stats_of(img: &RgbImage) -> ImageStats {
    let pixel_count = (u64::from(img.width()) * u64::from(img.height())) as f64;
    let mut sums = [0f64; 3];
    let mut squares = [0f64; 3];
    for pixel in img.pixels() {
        for channel in 0..3 {
            let value = f64::from(pixel[channel]);
            sums[channel] += value;
            squares[channel] += value * value;
        }
    }

    let mut mean_total = 0.0;
    let mut std_total = 0.0;
    for channel in 0..3 {
        let mean = sums[channel] / pixel_count;
        let variance = (squares[channel] / pixel_count - mean * mean).max(0.0);
        mean_total += mean;
        std_total += variance.sqrt();
    }

    ImageStats { mean_brightness: mean_total / 3.0, std_dev: std_total / 3.0 }
}

/// Convert a source image to WebP, capped to `max_px` wide (and twice
/// that tall), writing `dest` and creating parent directories as needed.
pub fn convert_to_webp(src: &Path, dest: &Path, max_px: u32) -> Result<(), AppError> {
    let img = image::open(src)?.to_rgb8();
    let img = fit_within(img, max_px);
    write_webp(&img, dest)
}

// Width cap max_px, height cap 2*max_px; never upscales.
fn fit_within(img: RgbImage, max_px: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    let (max_w, max_h) = (max_px, max_px.saturating_mul(2));
    if width <= max_w && height <= max_h {
        return img;
    }
    let ratio = f64::min(f64::from(max_w) / f64::from(width), f64::from(max_h) / f64::from(height));
    let new_w = ((f64::from(width) * ratio).round() as u32).max(1);
    let new_h = ((f64::from(height) * ratio).round() as u32).max(1);
    image::imageops::resize(&img, new_w, new_h, FilterType::Lanczos3)
}

/// Encode an RGB image as lossless WebP.
pub fn write_webp(img: &RgbImage, dest: &Path) -> Result<(), AppError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(dest)?);
    let encoder = WebPEncoder::new_lossless(writer);
    encoder.encode(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)?;
    Ok(())
}

/// Find the downloaded original for image position `n` in an era folder,
/// trying the extensions the fetch pipeline produces.
pub fn find_source(folder: &Path, n: u32) -> Option<PathBuf> {
    let stem = image_stem(n);
    for ext in ["jpg", "jpeg", "png"] {
        let candidate = folder.join(format!("{}.{}", stem, ext));
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

/// Number of image files already saved in a directory. Used as the
/// sequential-filename offset so downloads never collide.
pub fn count_images(dir: &Path) -> Result<usize, AppError> {
    if !dir.exists() {
        return Ok(0);
    }
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            count += 1;
        }
    }
    Ok(count)
}
