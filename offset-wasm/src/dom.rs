use offset_core::{DisplayState, LabelKey, Locale};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, SvgElement};

use crate::constants::*;

fn html(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = html(doc, id) {
        el.set_inner_text(text);
    }
}

fn set_attrs(doc: &Document, id: &str, attrs: &[(&str, f64)]) -> Result<(), JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        for (name, v) in attrs {
            el.set_attribute(name, &v.to_string())?;
        }
    }
    Ok(())
}

/// Write every derived output to the page.
pub fn apply_display(doc: &Document, d: &DisplayState) -> Result<(), JsValue> {
    if let Some(el) = html(doc, RESULT) {
        el.set_inner_text(&d.result);
        el.style().set_property("color", d.result_tone.css_color())?;
    }
    set_text(doc, FORMULA, &d.formula);
    set_text(doc, TEMPLATE_RESULT, &d.template_result);
    set_text(doc, TEMPLATE_FORMULA, &d.template_formula);

    let sc = &d.schematic;
    set_attrs(doc, SVG_BUSH, &[("r", sc.bush_radius)])?;
    set_attrs(doc, SVG_BIT, &[("r", sc.bit_radius)])?;
    set_attrs(doc, DIM_LINE, &[("x1", sc.dim_start_x), ("x2", sc.dim_end_x)])?;
    set_attrs(doc, DIM_TICK_1, &[("x1", sc.dim_start_x), ("x2", sc.dim_start_x)])?;
    set_attrs(doc, DIM_TICK_2, &[("x1", sc.dim_end_x), ("x2", sc.dim_end_x)])?;
    if let Some(el) = doc.get_element_by_id(DIM_TEXT) {
        el.set_attribute("x", &sc.dim_mid_x.to_string())?;
        el.set_text_content(Some(&sc.dim_label));
    }
    if let Some(el) = doc.get_element_by_id(DIM_GROUP)
        && let Ok(g) = el.dyn_into::<SvgElement>()
    {
        g.style().set_property("opacity", sc.annotation_opacity())?;
    }
    Ok(())
}

/// Replace the text of every `data-i18n` element, then the toggle caption.
/// Elements naming an unknown label keep their text.
pub fn apply_labels(doc: &Document, toggle: Option<&HtmlElement>, locale: Locale) -> Result<(), JsValue> {
    let nodes = doc.query_selector_all(&format!("[{}]", I18N_ATTR))?;
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(el) = node.dyn_into::<Element>() else { continue };
        let Some(text) = el
            .get_attribute(I18N_ATTR)
            .and_then(|id| locale.lookup(&id))
        else {
            continue;
        };
        if let Ok(h) = el.dyn_into::<HtmlElement>() {
            h.set_inner_text(text);
        }
    }
    if let Some(btn) = toggle {
        btn.set_inner_text(locale.label(LabelKey::Toggle));
    }
    Ok(())
}
