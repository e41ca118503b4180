//! The theme state-transition core.
//!
//! DESIGN
//! ======
//! Collaborators are injected rather than captured from ambient globals, so
//! the transition contract tests natively while browser glue stays in `dom`
//! and `mount`. The document root's dark flag is the single source of truth
//! for the current theme; the glyph and the persisted value are derived from
//! the theme on every transition, never mutated independently.

use log::debug;

use crate::store::PreferenceStore;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Handle on the document root's boolean dark-mode marker.
pub trait DocumentRoot {
    fn set_dark_flag(&self, on: bool);
    fn dark_flag(&self) -> bool;
}

/// Handle on the element displaying the toggle control's glyph.
pub trait Indicator {
    fn set_glyph(&self, glyph: &str);
}

/// Owns the theme lifecycle: resolve once at startup, flip on toggle.
pub struct ThemeController<R, I, S> {
    root: R,
    indicator: I,
    store: S,
}

impl<R: DocumentRoot, I: Indicator, S: PreferenceStore> ThemeController<R, I, S> {
    /// Construct with the injected collaborators. Handle validity is the
    /// caller's concern; in the browser, `dom::hook` fails fast before this
    /// point.
    pub fn new(root: R, indicator: I, store: S) -> Self {
        Self {
            root,
            indicator,
            store,
        }
    }

    /// Apply `theme` to every surface in one step: root flag, glyph, store.
    /// Idempotent; no failure modes.
    pub fn apply(&self, theme: Theme) {
        self.root.set_dark_flag(theme.is_dark());
        self.indicator.set_glyph(theme.glyph());
        self.store.write(theme.as_str());
    }

    /// Resolve and apply the startup theme: a recognized persisted value
    /// wins, otherwise the system preference decides. Returns what was
    /// applied. Runs once; after this, [`Self::toggle`] is the only
    /// mutation path.
    ///
    /// An unrecognized persisted value counts as absent. `apply` then
    /// overwrites the store, so a corrupted entry heals on first load.
    pub fn initialize(&self, system_prefers_dark: bool) -> Theme {
        let stored = self.store.read();
        let theme = match stored.as_deref().and_then(Theme::parse) {
            Some(saved) => {
                debug!("theme: initializing from stored preference {saved:?}");
                saved
            }
            None => {
                let fallback = if system_prefers_dark {
                    Theme::Dark
                } else {
                    Theme::Light
                };
                debug!(
                    "theme: no usable stored preference (raw {stored:?}), system fallback {fallback:?}"
                );
                fallback
            }
        };
        self.apply(theme);
        theme
    }

    /// Current theme, derived from the document root flag.
    #[must_use]
    pub fn current(&self) -> Theme {
        if self.root.dark_flag() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Flip to the opposite theme and return it.
    pub fn toggle(&self) -> Theme {
        let next = self.current().flipped();
        debug!("theme: toggled to {next:?}");
        self.apply(next);
        next
    }
}
