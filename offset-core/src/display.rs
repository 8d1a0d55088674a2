use serde::{Deserialize, Serialize};

use crate::calc::{Inputs, Outcome, calculate};
use crate::constants::{ACCENT_COLOR, ERROR_COLOR, UNIT_SUFFIX};
use crate::format::{js_number, to_fixed};
use crate::geometry::Schematic;
use crate::i18n::{LabelKey, Locale};

/// Application state that influences rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub locale: Locale,
}

impl AppState {
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultTone {
    #[default]
    Accent,
    Error,
}

impl ResultTone {
    pub fn css_color(self) -> &'static str {
        match self {
            ResultTone::Accent => ACCENT_COLOR,
            ResultTone::Error => ERROR_COLOR,
        }
    }
}

/// Everything the page shows, derived from the current fields and language.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub result: String,
    pub result_tone: ResultTone,
    pub formula: String,
    pub template_result: String,
    pub template_formula: String,
    pub schematic: Schematic,
}

impl DisplayState {
    pub fn is_error(&self) -> bool {
        self.result_tone == ResultTone::Error
    }
}

fn mm(v: f64) -> String {
    format!("{}{}", to_fixed(v, 2), UNIT_SUFFIX)
}

/// Compute the full display for one set of inputs.
pub fn render(app: &AppState, inputs: &Inputs) -> DisplayState {
    let Inputs { bit, bush, target } = *inputs;
    match calculate(inputs) {
        Outcome::BitTooLarge => DisplayState {
            result: app.locale.label(LabelKey::Error).to_string(),
            result_tone: ResultTone::Error,
            formula: app.locale.label(LabelKey::ErrorMsg).to_string(),
            template_result: String::new(),
            template_formula: String::new(),
            schematic: Schematic::new(bit, bush, None),
        },
        Outcome::Valid(r) => DisplayState {
            result: mm(r.offset),
            result_tone: ResultTone::Accent,
            formula: format!(
                "({} - {}) / 2 = {}",
                js_number(bush),
                js_number(bit),
                js_number(r.offset)
            ),
            template_result: mm(r.template_size),
            template_formula: format!(
                "{} + ({} - {}) = {}",
                js_number(target),
                js_number(bush),
                js_number(bit),
                js_number(r.template_size)
            ),
            schematic: Schematic::new(bit, bush, Some(r.offset)),
        },
    }
}

/// Parse the raw field texts and render them.
pub fn render_fields(app: &AppState, bit: &str, bush: &str, target: &str) -> DisplayState {
    render(app, &Inputs::parse(bit, bush, target))
}
