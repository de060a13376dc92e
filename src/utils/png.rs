use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::icon::IconError;

/// What was found at a path expected to hold a PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PngProbe {
    Missing,
    NotPng,
    Unreadable(String),
    Decoded { width: u32, height: u32 },
}

/// Encode `image` as PNG at `path`, replacing any existing file.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<(), IconError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Sniff and fully decode the file at `path`.
///
/// The format comes from the file's bytes, never its extension. Read
/// failures are reported as `Unreadable` so one bad entry cannot abort a
/// whole verification pass.
pub fn probe_png(path: &Path) -> PngProbe {
    if !path.exists() {
        return PngProbe::Missing;
    }

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => return PngProbe::Unreadable(e.to_string()),
    };

    if !matches!(image::guess_format(&data), Ok(ImageFormat::Png)) {
        return PngProbe::NotPng;
    }

    match image::load_from_memory_with_format(&data, ImageFormat::Png) {
        Ok(image) => PngProbe::Decoded {
            width: image.width(),
            height: image.height(),
        },
        Err(e) => PngProbe::Unreadable(e.to_string()),
    }
}
