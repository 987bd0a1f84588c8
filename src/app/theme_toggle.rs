use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::config::THEME_STORAGE_KEY;
use crate::theme::{toggle_slot, PreferenceStore, Theme, ThemeState};

/// Local storage as seen through leptos-use; an empty string means unset.
struct LocalStore {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<String> {
        Some(self.stored.get_untracked()).filter(|s| !s.is_empty())
    }

    fn save(&mut self, value: &str) {
        self.set_stored.set(value.to_string());
    }
}

fn apply_to_root(theme: Theme) {
    if let Some(root) = document().document_element() {
        theme.apply(&mut root.class_list());
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    let prefers_dark = use_preferred_dark();
    let (theme, set_theme) = signal(Theme::default());
    let state = StoredValue::new(None::<ThemeState<LocalStore>>);

    // storage and media queries only exist in the browser; reruns when the
    // system preference changes, which a stored choice still overrides
    Effect::new(move |_| {
        let initial = ThemeState::new(
            LocalStore { stored, set_stored },
            Some(prefers_dark.get()),
        );
        set_theme.set(initial.theme());
        apply_to_root(initial.theme());
        state.set_value(Some(initial));
    });

    let toggle = move |_| {
        let Some(root) = document().document_element() else {
            return;
        };
        let next = state.try_update_value(|slot| {
            toggle_slot(
                slot,
                || {
                    log::debug!("theme toggled before initialisation");
                    ThemeState::new(
                        LocalStore { stored, set_stored },
                        Some(prefers_dark.get_untracked()),
                    )
                },
                &mut root.class_list(),
            )
        });
        if let Some(next) = next {
            log::debug!("theme switched to {next}");
            set_theme.set(next);
        }
    };

    view! {
        <button
            type="button"
            on:click=toggle
            aria-label=move || theme.get().toggle_label()
            class="fixed z-50 rounded-full transition-all duration-200 focus:outline-none p-3 sm:p-2 bottom-4 right-4 sm:top-5 sm:right-5 sm:bottom-auto bg-white/85 dark:bg-slate-800/85 backdrop-blur-sm shadow-md hover:scale-105"
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
