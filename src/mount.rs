//! One-call browser wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `install` is the page entry point: it validates the page contract,
//! applies the startup theme, and registers the click listener. The listener
//! closure is leaked via `forget`, matching the page lifetime of the control
//! it is attached to.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::controller::ThemeController;
use crate::dom::{self, HookError};
use crate::store::LocalStore;
use crate::theme::Theme;

/// Hook the page, apply the startup theme, and wire the toggle control.
/// Returns the theme applied at startup.
///
/// # Errors
/// [`HookError`] when the window, document, or a required element is absent.
pub fn install() -> Result<Theme, HookError> {
    let window = web_sys::window().ok_or(HookError::NoWindow)?;
    let document = window.document().ok_or(HookError::NoDocument)?;

    let hooked = dom::hook(&document)?;
    let store = LocalStore::from_window(&window);
    let controller = Rc::new(ThemeController::new(hooked.root, hooked.indicator, store));

    let applied = controller.initialize(dom::prefers_dark(&window));

    let handler = Rc::clone(&controller);
    let on_click = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        handler.toggle();
    }) as Box<dyn FnMut(web_sys::Event)>);
    let _ = hooked
        .toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    Ok(applied)
}
