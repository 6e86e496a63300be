use std::fmt;

use crate::utils::dom::DomError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The toggle shows where a click takes you: a sun while dark, a moon while light.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }

    pub fn toggle_title(self) -> &'static str {
        match self {
            Theme::Dark => "Cambiar a modo claro",
            Theme::Light => "Cambiar a modo oscuro",
        }
    }

    pub fn toggle_label(self, compact: bool) -> &'static str {
        match (self, compact) {
            (Theme::Dark, false) => "Modo Claro",
            (Theme::Light, false) => "Modo Oscuro",
            (Theme::Dark, true) => "Claro",
            (Theme::Light, true) => "Oscuro",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the theme preference lives and where it gets painted.
///
/// The browser implementation is `utils::dom::BrowserThemeHost`; tests use
/// an in-memory host.
pub trait ThemeHost {
    fn stored_preference(&self) -> Result<Option<String>, DomError>;
    fn store_preference(&self, theme: Theme) -> Result<(), DomError>;
    fn prefers_dark(&self) -> bool;
    fn mark_document(&self, theme: Theme) -> Result<(), DomError>;
}

/// Stored preference wins; any stored value other than "dark" means light.
/// Without a stored value the system color scheme decides.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored {
        Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

pub fn apply<H: ThemeHost>(host: &H, theme: Theme) {
    if let Err(e) = host.mark_document(theme) {
        log::warn!("Failed to mark document with {} theme: {}", theme, e);
    }
    if let Err(e) = host.store_preference(theme) {
        log::warn!("Failed to persist {} theme: {}", theme, e);
    }
}

/// Resolve the theme for a fresh page load and apply it.
pub fn load<H: ThemeHost>(host: &H) -> Theme {
    let stored = host.stored_preference().unwrap_or_else(|e| {
        log::warn!("Theme preference unreadable, falling back to system: {}", e);
        None
    });
    let theme = resolve_initial(stored.as_deref(), host.prefers_dark());
    log::debug!("Initial theme: {} (stored: {:?})", theme, stored);
    apply(host, theme);
    theme
}

pub fn toggle<H: ThemeHost>(host: &H, current: Theme) -> Theme {
    let next = current.toggled();
    apply(host, next);
    log::debug!("Theme toggled to {}", next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryThemeHost {
        stored: RefCell<Option<String>>,
        prefers_dark: bool,
        marked: Cell<Option<Theme>>,
        storage_broken: bool,
    }

    impl ThemeHost for MemoryThemeHost {
        fn stored_preference(&self) -> Result<Option<String>, DomError> {
            if self.storage_broken {
                return Err(DomError::StorageUnavailable);
            }
            Ok(self.stored.borrow().clone())
        }

        fn store_preference(&self, theme: Theme) -> Result<(), DomError> {
            if self.storage_broken {
                return Err(DomError::StorageUnavailable);
            }
            *self.stored.borrow_mut() = Some(theme.as_str().to_string());
            Ok(())
        }

        fn prefers_dark(&self) -> bool {
            self.prefers_dark
        }

        fn mark_document(&self, theme: Theme) -> Result<(), DomError> {
            self.marked.set(Some(theme));
            Ok(())
        }
    }

    #[test]
    fn stored_preference_beats_system_signal() {
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_means_light() {
        assert_eq!(resolve_initial(Some("sepia"), true), Theme::Light);
    }

    #[test]
    fn system_signal_used_without_stored_value() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
    }

    #[test]
    fn load_without_preference_follows_dark_system_and_persists_it() {
        let host = MemoryThemeHost {
            prefers_dark: true,
            ..Default::default()
        };

        assert_eq!(load(&host), Theme::Dark);
        assert_eq!(host.stored.borrow().as_deref(), Some("dark"));
        assert_eq!(host.marked.get(), Some(Theme::Dark));
    }

    #[test]
    fn double_toggle_restores_mode_and_stored_value() {
        let host = MemoryThemeHost::default();
        *host.stored.borrow_mut() = Some("light".to_string());
        let start = load(&host);

        let once = toggle(&host, start);
        assert_eq!(once, Theme::Dark);
        assert_eq!(host.stored.borrow().as_deref(), Some("dark"));

        let twice = toggle(&host, once);
        assert_eq!(twice, start);
        assert_eq!(host.stored.borrow().as_deref(), Some("light"));
        assert_eq!(host.marked.get(), Some(Theme::Light));
    }

    #[test]
    fn broken_storage_still_toggles() {
        let host = MemoryThemeHost {
            prefers_dark: true,
            storage_broken: true,
            ..Default::default()
        };

        let theme = load(&host);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(toggle(&host, theme), Theme::Light);
        assert_eq!(host.marked.get(), Some(Theme::Light));
    }

    #[test]
    fn toggle_control_shows_the_other_mode() {
        assert_eq!(Theme::Dark.toggle_icon(), "fas fa-sun");
        assert_eq!(Theme::Light.toggle_icon(), "fas fa-moon");
        assert_eq!(Theme::Dark.toggle_label(true), "Claro");
        assert_eq!(Theme::Light.toggle_label(false), "Modo Oscuro");
    }
}
