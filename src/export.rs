//! Artifact export: PNG at canvas resolution, ICO via Lanczos3 downscale.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use log::info;

/// ICO edge length in pixels.
pub const ICO_SIZE: u32 = 128;

pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write png {}", path.display()))?;
    info!("wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}

/// Downscales the rendered canvas and encodes a single-image ICO.
pub fn write_ico(img: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let small = imageops::resize(img, ICO_SIZE, ICO_SIZE, FilterType::Lanczos3);
    small
        .save_with_format(path, ImageFormat::Ico)
        .with_context(|| format!("write ico {}", path.display()))?;
    info!("wrote {} ({}x{})", path.display(), ICO_SIZE, ICO_SIZE);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn png_roundtrips_at_full_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badge.png");
        let img = RgbaImage::from_pixel(256, 256, Rgba([26, 26, 26, 255]));
        write_png(&img, &path).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (256, 256));
    }

    #[test]
    fn ico_is_downscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badge.ico");
        let img = RgbaImage::from_pixel(256, 256, Rgba([255, 215, 0, 255]));
        write_ico(&img, &path).unwrap();
        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (ICO_SIZE, ICO_SIZE));
    }

    #[test]
    fn missing_parent_dirs_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/badge.png");
        let img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        write_png(&img, &path).unwrap();
        assert!(path.exists());
    }
}
