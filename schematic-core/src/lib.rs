use std::sync::Arc;

use offset_core::constants::{CENTER, DIM_TICK_HALF, DIM_Y, VIEW_H, VIEW_W};
use offset_core::{DisplayState, LabelKey, Locale, ResultTone};
use png::{BitDepth, ColorType, Encoder};

/// Height of the caption block below the drawing (user units).
pub const CAPTION_H: f64 = 64.0;
/// Concrete accent color; the page uses a CSS variable instead.
pub const ACCENT_HEX: &str = "#2563eb";
pub const BUSH_STROKE: &str = "#64748b";
pub const BIT_FILL: &str = "#cbd5e1";

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn tone_color(tone: ResultTone) -> &'static str {
    match tone {
        ResultTone::Accent => ACCENT_HEX,
        ResultTone::Error => tone.css_color(),
    }
}

/// Build a standalone SVG of the schematic with a caption of the results.
///
/// Drawing coordinates match the page's 240x200 viewport. `px_per_unit`
/// only scales the output size. Returns `(svg, width_px, height_px)`.
pub fn build_schematic_svg(
    d: &DisplayState,
    locale: Locale,
    px_per_unit: f64,
) -> (String, u32, u32) {
    let px_per_unit = if px_per_unit.is_finite() && px_per_unit > 0.0 {
        px_per_unit
    } else {
        1.0
    };
    let total_h = VIEW_H + CAPTION_H;
    let w_px = (VIEW_W * px_per_unit).ceil() as u32;
    let h_px = (total_h * px_per_unit).ceil() as u32;
    let sc = &d.schematic;
    let (cx, cy) = CENTER;

    let mut s = String::new();
    s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    s.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" font-family=\"sans-serif\">\n",
        w_px, h_px, VIEW_W, total_h
    ));
    s.push_str("<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");
    s.push_str(&format!(
        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
        cx, cy, sc.bush_radius, BUSH_STROKE
    ));
    s.push_str(&format!(
        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"#334155\" stroke-width=\"1.5\"/>\n",
        cx, cy, sc.bit_radius, BIT_FILL
    ));

    if sc.annotation_visible {
        let color = tone_color(d.result_tone);
        s.push_str(&format!("<g stroke=\"{}\" stroke-width=\"1.2\">\n", color));
        s.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
            sc.dim_start_x, DIM_Y, sc.dim_end_x, DIM_Y
        ));
        for x in [sc.dim_start_x, sc.dim_end_x] {
            s.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>\n",
                x,
                DIM_Y - DIM_TICK_HALF,
                x,
                DIM_Y + DIM_TICK_HALF
            ));
        }
        s.push_str("</g>\n");
        s.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"10\">{}</text>\n",
            sc.dim_mid_x,
            DIM_Y - DIM_TICK_HALF - 3.0,
            color,
            svg_escape(&sc.dim_label)
        ));
    }

    // Caption
    let color = tone_color(d.result_tone);
    let line_y = |i: usize| VIEW_H + 16.0 + 16.0 * i as f64;
    let mut lines: Vec<(String, &str)> = Vec::new();
    if d.is_error() {
        lines.push((format!("{}: {}", d.result, d.formula), color));
    } else {
        lines.push((
            format!("{}: {}  ({})", locale.label(LabelKey::Offset), d.result, d.formula),
            color,
        ));
        lines.push((
            format!(
                "{}: {}",
                locale.label(LabelKey::TemplateSize),
                d.template_result
            ),
            "#333",
        ));
        lines.push((d.template_formula.clone(), "#666"));
    }
    for (i, (txt, fill)) in lines.iter().enumerate() {
        s.push_str(&format!(
            "<text x=\"8\" y=\"{:.2}\" fill=\"{}\" font-size=\"11\">{}</text>\n",
            line_y(i),
            fill,
            svg_escape(txt)
        ));
    }
    s.push_str("</svg>\n");
    (s, w_px, h_px)
}

/// Font database with the given font mapped to the generic sans-serif family.
/// Empty bytes give an empty database; the caller decides on a fallback.
pub fn font_database(font_bytes: &[u8]) -> usvg::fontdb::Database {
    let mut fontdb = usvg::fontdb::Database::new();
    if font_bytes.is_empty() {
        return fontdb;
    }
    fontdb.load_font_data(font_bytes.to_vec());
    let family_name = {
        let mut it = fontdb.faces();
        if let Some(face) = it.next() {
            face.families.first().map(|(n, _)| n.clone())
        } else {
            None
        }
    };
    if let Some(name) = family_name {
        fontdb.set_sans_serif_family(name);
    }
    fontdb
}

/// Rasterize an SVG document and encode it as PNG.
pub fn render_png(
    svg: &str,
    w_px: u32,
    h_px: u32,
    fontdb: usvg::fontdb::Database,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut opt = usvg::Options::default();
    opt.fontdb = Arc::new(fontdb);
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| format!("SVG parse error: {e:?}"))?;
    let mut pixmap = tiny_skia::Pixmap::new(w_px, h_px).ok_or("pixmap alloc failed")?;
    let mut pm = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pm);
    Ok(encode_rgba_to_png_bytes(
        pixmap.width(),
        pixmap.height(),
        pixmap.data(),
    )?)
}

// RGBA -> PNG bytes (deterministic for same input)
pub fn encode_rgba_to_png_bytes(
    width: u32,
    height: u32,
    rgba: &[u8],
) -> Result<Vec<u8>, png::EncodingError> {
    let mut buf = Vec::new();
    {
        let mut enc = Encoder::new(&mut buf, width, height);
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        let mut writer = enc.write_header()?;
        writer.write_image_data(rgba)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use offset_core::{AppState, render_fields};

    fn display(locale: Locale, bit: &str, bush: &str, target: &str) -> DisplayState {
        render_fields(&AppState { locale }, bit, bush, target)
    }

    #[test]
    fn svg_contains_both_circles_and_dimension() {
        let d = display(Locale::En, "8", "16", "20");
        let (svg, w, h) = build_schematic_svg(&d, Locale::En, 2.0);
        assert_eq!((w, h), (480, 528));
        assert!(svg.contains("r=\"28.00\""));
        assert!(svg.contains("r=\"14.00\""));
        assert!(svg.contains("x1=\"134.00\""));
        assert!(svg.contains(">4.0</text>"));
        assert!(svg.contains("OFFSET: 4.00 mm  ((16 - 8) / 2 = 4)"));
        assert!(svg.contains("TEMPLATE SIZE (HOLE SIZE): 28.00 mm"));
        assert!(svg.contains("20 + (16 - 8) = 28"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn error_state_has_no_dimension_and_escapes_text() {
        let d = display(Locale::En, "10", "8", "20");
        let (svg, _, _) = build_schematic_svg(&d, Locale::En, 1.0);
        assert!(!svg.contains("<line"));
        assert!(svg.contains("ERROR: Bit &gt; Bushing"));
        assert!(svg.contains("#ef4444"));
        assert!(!svg.contains("TEMPLATE SIZE"));
    }

    #[test]
    fn caption_follows_locale() {
        let d = display(Locale::De, "8", "16", "20");
        let (svg, _, _) = build_schematic_svg(&d, Locale::De, 1.0);
        assert!(svg.contains("VERSATZ: 4.00 mm"));
        assert!(svg.contains("SCHABLONENMASS (LOCHGRÖSSE): 28.00 mm"));
    }

    #[test]
    fn bad_scale_falls_back_to_unit_scale() {
        let d = display(Locale::En, "8", "16", "20");
        let (_, w, h) = build_schematic_svg(&d, Locale::En, 0.0);
        assert_eq!((w, h), (240, 264));
    }

    #[test]
    fn png_encoding_is_deterministic() {
        let rgba = vec![255u8; 4 * 3 * 2];
        let a = encode_rgba_to_png_bytes(3, 2, &rgba).unwrap();
        let b = encode_rgba_to_png_bytes(3, 2, &rgba).unwrap();
        assert_eq!(a, b);
        assert_eq!(&a[1..4], b"PNG");
    }

    #[test]
    fn renders_png_without_fonts() {
        let d = display(Locale::En, "8", "16", "20");
        let (svg, w, h) = build_schematic_svg(&d, Locale::En, 1.0);
        let bytes = render_png(&svg, w, h, font_database(&[])).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
