//! Glyph rasterisation.
//!
//! The glyph is laid out as a single SVG `<text>` element and rendered
//! with resvg into a transparent layer, which is then composited onto the
//! icon canvas. Text shaping and font lookup are left to usvg.

use std::path::PathBuf;
use std::sync::Arc;

use resvg::tiny_skia::{Pixmap, PixmapPaint, Transform};
use resvg::usvg::{self, fontdb};

use super::constants::{GLYPH, GLYPH_COLOR, hex_color};
use super::error::GlyphError;

const GLYPH_TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
  <text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="central" font-family="sans-serif" font-weight="bold" font-size="{font_size}" fill="{fill}">{glyph}</text>
</svg>
"#;

/// Where glyph fonts are looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FontSource {
    /// Fonts installed on the system
    #[default]
    System,
    /// A single font file
    File(PathBuf),
    /// No fonts at all; every glyph falls back
    None,
}

/// Renders the icon glyph from a font database built once per run.
pub struct GlyphRenderer {
    fontdb: Arc<fontdb::Database>,
    load_error: Option<GlyphError>,
}

impl GlyphRenderer {
    pub fn new(source: &FontSource) -> Self {
        let mut db = fontdb::Database::new();
        let mut load_error = None;

        match source {
            FontSource::System => db.load_system_fonts(),
            FontSource::File(path) => {
                if let Err(e) = db.load_font_file(path) {
                    load_error = Some(GlyphError::FontLoad {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
            FontSource::None => {}
        }

        resolve_sans_serif(&mut db);

        GlyphRenderer {
            fontdb: Arc::new(db),
            load_error,
        }
    }

    /// Number of font faces available to the renderer.
    pub fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Draw the glyph centred on `canvas`, `raise` pixels above the middle.
    ///
    /// The canvas is left untouched on error.
    pub fn draw(&self, canvas: &mut Pixmap, font_size: f32, raise: f32) -> Result<(), GlyphError> {
        if let Some(e) = &self.load_error {
            return Err(e.clone());
        }
        if self.fontdb.len() == 0 {
            return Err(GlyphError::NoFonts);
        }

        let (width, height) = (canvas.width(), canvas.height());
        let svg = GLYPH_TEMPLATE
            .replace("{width}", &width.to_string())
            .replace("{height}", &height.to_string())
            .replace("{x}", &(width as f32 / 2.0).to_string())
            .replace("{y}", &(height as f32 / 2.0 - raise).to_string())
            .replace("{font_size}", &font_size.to_string())
            .replace("{fill}", &hex_color(GLYPH_COLOR))
            .replace("{glyph}", GLYPH);

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);
        let tree =
            usvg::Tree::from_str(&svg, &options).map_err(|e| GlyphError::Markup(e.to_string()))?;

        let mut layer = Pixmap::new(width, height).ok_or(GlyphError::NothingDrawn)?;
        resvg::render(&tree, Transform::identity(), &mut layer.as_mut());

        // Text with no matching face is dropped silently by usvg
        if layer.pixels().iter().all(|p| p.alpha() == 0) {
            return Err(GlyphError::NothingDrawn);
        }

        canvas.draw_pixmap(
            0,
            0,
            layer.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        Ok(())
    }
}

/// Point the generic sans-serif family at a face that exists, so a lone
/// font file or an unusual system setup still resolves.
fn resolve_sans_serif(db: &mut fontdb::Database) {
    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    if db.query(&query).is_some() {
        return;
    }

    let family = db
        .faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
    if let Some(family) = family {
        db.set_sans_serif_family(family);
    }
}
