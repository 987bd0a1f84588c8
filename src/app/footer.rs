use leptos::prelude::*;

use crate::config;
use crate::content::Profile;

#[component]
pub fn Footer(#[prop(optional)] profile: Profile) -> impl IntoView {
    let year = config::copyright_year();

    view! {
        <footer class="py-12 px-4 bg-card relative border-t border-border mt-12 pt-8 flex flex-wrap justify-between items-center">
            <p class="text-sm text-muted-foreground">
                {format!("© {year} {}. All rights reserved.", profile.name)}
            </p>
            <a
                href="#hero"
                aria-label="Back to top"
                class="p-2 rounded-full bg-primary/10 hover:bg-primary/20 text-primary transition-colors"
            >
                "↑"
            </a>
        </footer>
    }
}
