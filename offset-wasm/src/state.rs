use std::cell::RefCell;
use std::rc::Rc;

use offset_core::AppState;
use web_sys::{Document, HtmlElement, HtmlInputElement};

/// Runtime state shared across the event callbacks.
#[derive(Clone)]
pub struct State {
    pub document: Document,
    pub bit: HtmlInputElement,
    pub bush: HtmlInputElement,
    pub target: HtmlInputElement,
    pub toggle: Option<HtmlElement>,
    pub app: AppState,
}

impl State {
    pub fn field_values(&self) -> (String, String, String) {
        (self.bit.value(), self.bush.value(), self.target.value())
    }
}

thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
