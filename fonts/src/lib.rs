//! Font embedded at build time for rasterizing schematic text.

/// Raw TrueType bytes. Empty when the build could not obtain a font.
pub static FONT_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/DejaVuSans.ttf"));

pub fn has_font() -> bool {
    !FONT_BYTES.is_empty()
}
