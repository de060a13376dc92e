pub mod constants;
pub mod error;
pub mod glyph;
pub mod render;
pub mod set;
pub mod style;

pub use error::{GlyphError, IconError};
pub use glyph::{FontSource, GlyphRenderer};
pub use render::{GlyphOutcome, RenderedIcon, render_icon};
pub use set::{DeriveMode, DerivedIcon, IconSet};
pub use style::IconStyle;
