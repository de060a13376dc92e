/// Sizes written by a default run, smallest first
pub const ICON_SIZES: &[u32] = &[72, 96, 128, 144, 152, 192, 384, 512];

/// Derived icons as (file name, size of the icon they are taken from)
pub const DERIVED_ICONS: &[(&str, u32)] = &[
    ("shortcut-reservation.png", 96),
    ("shortcut-admin.png", 96),
    ("shortcut-products.png", 96),
    ("action-view.png", 72),
    ("action-dismiss.png", 96),
];

/// Letter drawn in the middle of every icon
pub const GLYPH: &str = "V";

/// Theme colour (#8bc34a)
pub const THEME_COLOR: [u8; 3] = [139, 195, 74];
/// Darker theme shade (#7cb342)
pub const THEME_SHADE: [u8; 3] = [124, 179, 66];
/// Glyph and fallback colour
pub const GLYPH_COLOR: [u8; 3] = [255, 255, 255];

/// Default path prefix for manifest `src` entries
pub const MANIFEST_PREFIX: &str = "/icons/";
/// MIME type for every generated raster icon
pub const PNG_MIME: &str = "image/png";

/// File name of the standard icon for `size`.
pub fn icon_filename(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

/// File name of the scalable variant for `size`.
pub fn svg_filename(size: u32) -> String {
    format!("icon-{}x{}.svg", size, size)
}

/// CSS hex notation for an RGB triple, as used in SVG markup.
pub fn hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}
