//! Scalable icon variants.
//!
//! Each size gets an SVG with a gradient disc and a bold glyph, for
//! converting to raster with external tools.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::icon::IconSet;
use crate::icon::constants::{GLYPH, GLYPH_COLOR, THEME_COLOR, THEME_SHADE, hex_color, svg_filename};

const SVG_TEMPLATE: &str = r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="disc" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{from};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{to};stop-opacity:1" />
    </linearGradient>
  </defs>
  <circle cx="{center}" cy="{center}" r="{radius}" fill="url(#disc)" />
  <text x="{center}" y="{baseline}" text-anchor="middle" font-family="Arial, sans-serif" font-size="{font_size}" font-weight="bold" fill="{fill}">{glyph}</text>
</svg>
"#;

/// Markup for the scalable icon of `size` pixels.
pub fn render_svg(size: u32) -> String {
    let size_f = size as f32;
    let radius = (size_f / 2.0 - 2.0).max(0.0);

    SVG_TEMPLATE
        .replace("{size}", &size.to_string())
        .replace("{from}", &hex_color(THEME_COLOR))
        .replace("{to}", &hex_color(THEME_SHADE))
        .replace("{center}", &(size_f / 2.0).to_string())
        .replace("{radius}", &radius.to_string())
        .replace("{baseline}", &(size_f / 2.0 + size_f / 8.0).to_string())
        .replace("{font_size}", &(size_f / 2.0).to_string())
        .replace("{fill}", &hex_color(GLYPH_COLOR))
        .replace("{glyph}", GLYPH)
}

/// Write `icon-SxS.svg` for each size into `output_dir`.
pub fn run(output_dir: &Path, sizes: &[u32]) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let set = IconSet::new(sizes);
    let mut written = Vec::with_capacity(set.sizes.len());
    for &size in &set.sizes {
        if size == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "icon size must be greater than zero",
            ));
        }
        let path = output_dir.join(svg_filename(size));
        fs::write(&path, render_svg(size))?;
        written.push(path);
    }

    Ok(written)
}
