use std::cell::RefCell;
use std::rc::Rc;

use offset_core::{AppState, Locale, render_fields};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, Document, HtmlElement, HtmlInputElement, Url};

mod constants;
mod dom;
mod state;
mod utils;

use constants::*;
use state::{STATE, State};
use utils::{get_query_param, log};

/// Recompute everything from the current field values and write it out.
fn calculate(state: &State) {
    let (bit, bush, target) = state.field_values();
    let display = render_fields(&state.app, &bit, &bush, &target);
    if let Err(err) = dom::apply_display(&state.document, &display) {
        log(&format!("render failed: {:?}", err));
    }
}

/// Apply the active labels, then recompute so dynamic text follows.
fn update_language(state: &State) {
    if let Err(err) = dom::apply_labels(&state.document, state.toggle.as_ref(), state.app.locale) {
        log(&format!("label update failed: {:?}", err));
    }
    calculate(state);
}

fn input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("input #{} not found", id)))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an input", id)))
}

fn save_bytes_as_file(document: &Document, filename: &str, bytes: &[u8]) -> Result<(), JsValue> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&array)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let a = document.create_element("a")?.dyn_into::<HtmlElement>()?;
    a.set_attribute("href", &url)?;
    a.set_attribute("download", filename)?;
    a.click();
    Url::revoke_object_url(&url)?;
    Ok(())
}

fn export_png_schematic(state: &State) -> Result<(), JsValue> {
    let (bit, bush, target) = state.field_values();
    let display = render_fields(&state.app, &bit, &bush, &target);
    let (svg, w_px, h_px) =
        schematic_core::build_schematic_svg(&display, state.app.locale, EXPORT_SCALE);
    if !fonts::has_font() {
        log("no embedded font; exported text will be missing");
    }
    let fontdb = schematic_core::font_database(fonts::FONT_BYTES);
    let bytes = schematic_core::render_png(&svg, w_px, h_px, fontdb)
        .map_err(|e| JsValue::from_str(&format!("export: {e}")))?;
    save_bytes_as_file(&state.document, EXPORT_FILENAME, &bytes)
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let (doc, inputs) = {
        let s = state.borrow();
        (
            s.document.clone(),
            [s.bit.clone(), s.bush.clone(), s.target.clone()],
        )
    };

    for input in inputs {
        let st = state.clone();
        let oninput = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            calculate(&st.borrow());
        }));
        input.set_oninput(Some(oninput.as_ref().unchecked_ref()));
        oninput.forget();
    }

    let toggle = state.borrow().toggle.clone();
    if let Some(btn) = toggle {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.app.toggle_locale();
            log(&format!("language: {}", s.app.locale.code()));
            update_language(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    if let Some(btn) = doc.get_element_by_id(EXPORT_PNG)
        && let Ok(btn) = btn.dyn_into::<HtmlElement>()
    {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            if let Err(err) = export_png_schematic(&st.borrow()) {
                log(&format!("PNG export failed: {:?}", err));
            }
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }
    Ok(())
}

/// Display state for the given field texts as JSON, for script hosts that
/// render on their own.
#[wasm_bindgen]
pub fn display_state_json(bit: &str, bush: &str, target: &str, lang: &str) -> String {
    let app = AppState {
        locale: Locale::from_code(lang).unwrap_or_default(),
    };
    let display = render_fields(&app, bit, bush, target);
    serde_json::to_string(&display).unwrap_or_else(|_| "{}".to_string())
}

/// Recompute after the host changed field values from script, which fires no
/// `input` event.
#[wasm_bindgen]
pub fn recalculate() {
    STATE.with(|st| {
        if let Some(state) = st.borrow().as_ref() {
            calculate(&state.borrow());
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let bit = input_by_id(&document, BIT_INPUT)?;
    let bush = input_by_id(&document, BUSH_INPUT)?;
    let target = input_by_id(&document, TARGET_INPUT)?;
    let toggle = document
        .get_element_by_id(LANG_TOGGLE)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if toggle.is_none() {
        log("language toggle #lang-toggle not found");
    }

    // ?lang=en overrides the default language
    let mut app = AppState::default();
    if let Ok(search) = window.location().search()
        && let Some(code) = get_query_param(&search, "lang")
    {
        match Locale::from_code(&code) {
            Some(locale) => app.locale = locale,
            None => log(&format!("unsupported lang '{}', keeping {}", code, app.locale.code())),
        }
    }

    let state = Rc::new(RefCell::new(State {
        document,
        bit,
        bush,
        target,
        toggle,
        app,
    }));
    STATE.with(|st| st.replace(Some(state.clone())));
    attach_ui(state.clone())?;

    let s = state.borrow();
    if s.app.locale == Locale::default() {
        calculate(&s);
    } else {
        update_language(&s);
    }
    log(&format!("offset calculator ready ({})", s.app.locale.code()));
    Ok(())
}
