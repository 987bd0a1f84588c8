use std::fmt;

/// Class placed on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Initial theme: a stored value wins, then the system preference,
    /// then light. Any stored value other than `"dark"` means light.
    pub fn resolve(stored: Option<&str>, prefers_dark: Option<bool>) -> Self {
        match (stored.map(str::trim).filter(|s| !s.is_empty()), prefers_dark) {
            (Some(value), _) => Self::from_stored(value),
            (None, Some(true)) => Self::Dark,
            (None, _) => Self::Light,
        }
    }

    fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for the button that switches away from this theme.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    pub fn apply(&self, classes: &mut impl ClassList) {
        if self.is_dark() {
            classes.add(DARK_CLASS);
        } else {
            classes.remove(DARK_CLASS);
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the theme preference is persisted between visits.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// The class list of the element that carries the theme marker.
pub trait ClassList {
    fn add(&mut self, class: &str);
    fn remove(&mut self, class: &str);
}

impl ClassList for web_sys::DomTokenList {
    fn add(&mut self, class: &str) {
        if let Err(e) = self.add_1(class) {
            log::warn!("couldn't add class {class}: {e:?}");
        }
    }

    fn remove(&mut self, class: &str) {
        if let Err(e) = self.remove_1(class) {
            log::warn!("couldn't remove class {class}: {e:?}");
        }
    }
}

pub struct ThemeState<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    pub fn new(store: S, prefers_dark: Option<bool>) -> Self {
        let theme = Theme::resolve(store.load().as_deref(), prefers_dark);
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme, persists it and updates the root marker.
    pub fn toggle(&mut self, classes: &mut impl ClassList) -> Theme {
        self.theme = self.theme.toggled();
        self.theme.apply(classes);
        self.store.save(self.theme.as_str());
        self.theme
    }
}

/// Toggles the state in `slot`, building it with `init` first when nothing
/// has resolved the initial theme yet.
pub fn toggle_slot<S: PreferenceStore>(
    slot: &mut Option<ThemeState<S>>,
    init: impl FnOnce() -> ThemeState<S>,
    classes: &mut impl ClassList,
) -> Theme {
    slot.get_or_insert_with(init).toggle(classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct MemoryStore(Option<String>);

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.clone()
        }

        fn save(&mut self, value: &str) {
            self.0 = Some(value.to_string());
        }
    }

    #[derive(Default)]
    struct Classes(BTreeSet<String>);

    impl ClassList for Classes {
        fn add(&mut self, class: &str) {
            self.0.insert(class.to_string());
        }

        fn remove(&mut self, class: &str) {
            self.0.remove(class);
        }
    }

    #[test]
    fn test_resolution_priority() {
        assert_eq!(Theme::resolve(Some("dark"), Some(false)), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(None, Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Light);
        assert_eq!(Theme::resolve(None, None), Theme::Light);
    }

    #[test]
    fn test_blank_or_unknown_stored_value() {
        assert_eq!(Theme::resolve(Some(""), Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(Some("solarized"), Some(true)), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_and_marks_root() {
        let mut classes = Classes::default();
        let mut state = ThemeState::new(MemoryStore::default(), None);
        assert_eq!(state.theme(), Theme::Light);

        assert_eq!(state.toggle(&mut classes), Theme::Dark);
        assert_eq!(state.store.0.as_deref(), Some("dark"));
        assert!(classes.0.contains(DARK_CLASS));

        assert_eq!(state.toggle(&mut classes), Theme::Light);
        assert_eq!(state.store.0.as_deref(), Some("light"));
        assert!(!classes.0.contains(DARK_CLASS));
    }

    #[test]
    fn test_stored_value_seeds_state() {
        let state = ThemeState::new(MemoryStore(Some("dark".to_string())), Some(false));
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.theme().toggle_label(), "Switch to light mode");
    }

    #[test]
    fn test_toggle_before_initialisation() {
        let mut classes = Classes::default();
        let mut slot = None;

        let next = toggle_slot(
            &mut slot,
            || ThemeState::new(MemoryStore(Some("dark".to_string())), Some(true)),
            &mut classes,
        );

        assert_eq!(next, Theme::Light);
        let state = slot.as_ref().unwrap();
        assert_eq!(state.store.0.as_deref(), Some("light"));
        assert!(!classes.0.contains(DARK_CLASS));

        // an existing state is reused, not rebuilt
        let next = toggle_slot(&mut slot, || unreachable!(), &mut classes);
        assert_eq!(next, Theme::Dark);
        assert!(classes.0.contains(DARK_CLASS));
    }
}
