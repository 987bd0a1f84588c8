use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{Profile, NAV_ITEMS};
use crate::scroll::NavScrollState;

#[component]
pub fn Navbar(#[prop(optional)] profile: Profile) -> impl IntoView {
    let first_name = profile
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    let (_, scroll_y) = use_window_scroll();
    let scroll = RwSignal::new(NavScrollState::default());
    let (menu_open, set_menu_open) = signal(false);

    Effect::new(move |_| {
        let y = scroll_y.get();
        scroll.update(|s| s.observe(y));
    });

    let nav_class = move || {
        let s = scroll.get();
        format!(
            "fixed top-0 w-full z-40 transition-all duration-300 {} {}",
            if s.scrolled {
                "bg-background/80 backdrop-blur-md shadow-xs py-3"
            } else {
                "py-5"
            },
            if s.hidden {
                "-translate-y-full opacity-0"
            } else {
                "translate-y-0 opacity-100"
            },
        )
    };

    view! {
        <nav class=nav_class>
            <div class="container flex items-center justify-between">
                <a href="#hero" class="text-xl font-bold text-primary flex items-center">
                    <span class="relative z-10">
                        <span class="text-glow text-foreground">{first_name}</span>
                        " Portfolio"
                    </span>
                </a>
                <div class="hidden md:flex space-x-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="text-foreground/80 hover:text-primary transition-colors duration-300"
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    type="button"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    class="md:hidden p-2 text-foreground z-50"
                    aria-label=move || if menu_open.get() { "Close Menu" } else { "Open Menu" }
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <div class=move || {
                format!(
                    "absolute right-4 top-16 w-48 rounded-xl border border-border bg-background/95 backdrop-blur-md shadow-lg md:hidden transition-all duration-300 {}",
                    if menu_open.get() {
                        "opacity-100 pointer-events-auto scale-100"
                    } else {
                        "opacity-0 pointer-events-none scale-95"
                    },
                )
            }>
                <ul class="flex flex-col py-3">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a
                                        href=item.href
                                        on:click=move |_| set_menu_open.set(false)
                                        class="block px-5 py-2 text-sm font-medium text-foreground/90 hover:text-primary hover:bg-primary/10 rounded-md transition-colors"
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
