use image::{DynamicImage, Rgba, RgbaImage};
use resvg::tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use super::error::{GlyphError, IconError};
use super::glyph::GlyphRenderer;
use super::style::{Disc, IconStyle};

/// How the centre of the icon was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphOutcome {
    Drawn,
    Fallback(GlyphError),
}

/// A finished icon, ready to be encoded.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub image: DynamicImage,
    pub glyph: GlyphOutcome,
}

/// Render a square icon of `size` pixels.
///
/// Draws the background, the style's disc and the glyph. When the glyph
/// cannot be drawn the style's fallback disc takes its place.
pub fn render_icon(
    size: u32,
    style: IconStyle,
    glyphs: &GlyphRenderer,
) -> Result<RenderedIcon, IconError> {
    let mut canvas = Pixmap::new(size, size).ok_or(IconError::InvalidSize(size))?;

    let [r, g, b] = style.background();
    canvas.fill(Color::from_rgba8(r, g, b, 255));
    fill_disc(&mut canvas, style.disc(size));

    let glyph = match glyphs.draw(&mut canvas, style.glyph_size(size), style.glyph_raise(size)) {
        Ok(()) => GlyphOutcome::Drawn,
        Err(e) => {
            fill_disc(&mut canvas, style.fallback(size));
            GlyphOutcome::Fallback(e)
        }
    };

    let rgba = to_rgba_image(&canvas);
    let image = if style.has_alpha() {
        DynamicImage::ImageRgba8(rgba)
    } else {
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8())
    };

    Ok(RenderedIcon { image, glyph })
}

fn fill_disc(canvas: &mut Pixmap, disc: Disc) {
    // Zero-radius discs on tiny canvases have no path
    let Some(path) = PathBuilder::from_circle(disc.cx, disc.cy, disc.radius) else {
        return;
    };

    let mut paint = Paint::default();
    let [r, g, b] = disc.color;
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;

    canvas.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

/// Copy a premultiplied pixmap into a straight-alpha image buffer.
fn to_rgba_image(canvas: &Pixmap) -> RgbaImage {
    let width = canvas.width();
    let pixels = canvas.pixels();
    RgbaImage::from_fn(width, canvas.height(), |x, y| {
        let c = pixels[(y * width + x) as usize].demultiply();
        Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    })
}
