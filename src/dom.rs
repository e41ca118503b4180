//! web-sys implementations of the document collaborators.
//!
//! TRADE-OFFS
//! ==========
//! Element lookup fails fast at hook time so a page missing its control or
//! indicator surfaces a named error instead of a deferred null dereference
//! inside a click handler. After hooking, DOM writes absorb their errors: a
//! rejected classList or textContent write has no recovery path worth
//! taking.

use web_sys::{Document, Element, Window};

use crate::controller::{DocumentRoot, Indicator};

/// Id of the click target that flips the theme.
pub const TOGGLE_ID: &str = "theme-toggle";
/// Id of the element displaying the next-action glyph.
pub const INDICATOR_ID: &str = "theme-toggle-icon";
/// Class present on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// A required page handle could not be obtained at hook time.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// Not running in a browsing context.
    #[error("no window in this environment")]
    NoWindow,
    /// The window carries no document.
    #[error("window has no document")]
    NoDocument,
    /// The document has no root element to carry the dark flag.
    #[error("document has no root element")]
    MissingRoot,
    /// The toggle control is absent from the page.
    #[error("toggle control #theme-toggle not found")]
    MissingToggle,
    /// The indicator element is absent from the page.
    #[error("indicator element #theme-toggle-icon not found")]
    MissingIndicator,
}

/// Document root handle: the dark flag is the `dark` class on `<html>`.
pub struct DomRoot {
    element: Element,
}

impl DocumentRoot for DomRoot {
    fn set_dark_flag(&self, on: bool) {
        let classes = self.element.class_list();
        if on {
            let _ = classes.add_1(DARK_CLASS);
        } else {
            let _ = classes.remove_1(DARK_CLASS);
        }
    }

    fn dark_flag(&self) -> bool {
        self.element.class_list().contains(DARK_CLASS)
    }
}

/// Indicator handle: the glyph is the element's text content.
pub struct DomIndicator {
    element: Element,
}

impl Indicator for DomIndicator {
    fn set_glyph(&self, glyph: &str) {
        self.element.set_text_content(Some(glyph));
    }
}

/// The validated page handles a controller is built from.
pub struct Hooked {
    pub root: DomRoot,
    pub indicator: DomIndicator,
    pub toggle: Element,
}

/// Locate the required page elements, failing on the first one missing.
///
/// # Errors
/// A [`HookError`] naming the absent element.
pub fn hook(document: &Document) -> Result<Hooked, HookError> {
    let root = document
        .document_element()
        .ok_or(HookError::MissingRoot)?;
    let toggle = document
        .get_element_by_id(TOGGLE_ID)
        .ok_or(HookError::MissingToggle)?;
    let indicator = document
        .get_element_by_id(INDICATOR_ID)
        .ok_or(HookError::MissingIndicator)?;
    Ok(Hooked {
        root: DomRoot { element: root },
        indicator: DomIndicator { element: indicator },
        toggle,
    })
}

/// One-shot system color-scheme query; `false` when unavailable.
#[must_use]
pub fn prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches())
}
