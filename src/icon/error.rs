use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for icon generation.
#[derive(Debug)]
pub enum IconError {
    /// Requested size cannot produce an image
    InvalidSize(u32),
    /// Failed to create the output directory
    OutputDir { path: PathBuf, source: io::Error },
    /// Failed to encode or write a PNG
    Write { path: PathBuf, source: image::ImageError },
    /// Failed to copy a derived icon from its source
    Copy { from: PathBuf, to: PathBuf, source: io::Error },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::InvalidSize(size) => {
                write!(f, "invalid icon size {}: must be greater than zero", size)
            }
            IconError::OutputDir { path, source } => {
                write!(
                    f,
                    "failed to create output directory {}: {}",
                    path.display(),
                    source
                )
            }
            IconError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            IconError::Copy { from, to, source } => {
                write!(
                    f,
                    "failed to copy {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::OutputDir { source, .. } => Some(source),
            IconError::Write { source, .. } => Some(source),
            IconError::Copy { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reasons the glyph could not be drawn. Each one is recovered by
/// drawing the fallback disc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    /// Font database has no faces
    NoFonts,
    /// Font file could not be loaded
    FontLoad { path: PathBuf, reason: String },
    /// Generated glyph markup was rejected
    Markup(String),
    /// Rendering finished without touching a pixel
    NothingDrawn,
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::NoFonts => write!(f, "no fonts available"),
            GlyphError::FontLoad { path, reason } => {
                write!(f, "failed to load font {}: {}", path.display(), reason)
            }
            GlyphError::Markup(reason) => write!(f, "glyph markup rejected: {}", reason),
            GlyphError::NothingDrawn => write!(f, "no font could render the glyph"),
        }
    }
}

impl std::error::Error for GlyphError {}
