use leptos::prelude::*;

use crate::content::{default_skills, filter_skills, CategoryFilter, SkillEntry};

#[component]
fn SkillCard(skill: SkillEntry) -> impl IntoView {
    let slug = skill.slug();
    let level = skill.level();

    view! {
        <article
            class="bg-card p-5 rounded-lg shadow-xs card-hover"
            aria-labelledby=slug.clone()
            data-category=skill.category.as_str()
        >
            <header class="flex items-center justify-between mb-3 gap-4">
                <div class="flex items-center gap-3">
                    <span class="inline-block w-3 h-3 rounded-full bg-primary/80"></span>
                    <h3 id=slug.clone() class="font-semibold text-sm text-foreground">
                        {skill.name.clone()}
                    </h3>
                </div>
                <div class="text-sm text-muted-foreground tabular-nums">{format!("{level}%")}</div>
            </header>
            <div
                class="w-full bg-secondary/30 rounded-full h-2 overflow-hidden"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=level.to_string()
                aria-label=format!("{} proficiency {level} percent", skill.name)
            >
                <div
                    class="h-2 rounded-full bg-primary transition-all duration-700 ease-out"
                    style=format!("width: {level}%")
                ></div>
            </div>
            {(!skill.description.is_empty())
                .then(|| {
                    view! {
                        <p class="mt-3 text-xs text-muted-foreground leading-snug">
                            {skill.description.clone()}
                        </p>
                    }
                })}
        </article>
    }
}

#[component]
pub fn SkillsSection(#[prop(optional)] skills: Option<Vec<SkillEntry>>) -> impl IntoView {
    let skills = StoredValue::new(skills.unwrap_or_else(default_skills));
    let (active, set_active) = signal(CategoryFilter::All);
    let (query, set_query) = signal(String::new());

    let visible = move || {
        let filter = active.get();
        let query = query.get();
        skills.with_value(|all| {
            filter_skills(all, filter, &query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section id="skills" class="py-24 px-4 bg-background">
            <div class="container mx-auto max-w-5xl">
                <h2 class="text-3xl md:text-4xl font-bold mb-6 text-center">
                    "My " <span class="text-primary">"Skills"</span>
                </h2>
                <p class="text-center max-w-2xl mx-auto text-muted-foreground mb-8">
                    "Core skills I use day-to-day, focused on the MERN stack, Django for Python backends, and product design using Figma."
                </p>
                <div class="flex flex-wrap justify-center items-center gap-3 mb-8">
                    {CategoryFilter::chips()
                        .into_iter()
                        .map(|chip| {
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| set_active.set(chip)
                                    aria-pressed=move || (active.get() == chip).to_string()
                                    class=move || {
                                        format!(
                                            "px-4 py-2 rounded-full text-sm font-medium transition-colors duration-200 {}",
                                            if active.get() == chip {
                                                "bg-primary text-primary-foreground shadow-sm"
                                            } else {
                                                "bg-card text-foreground/90 hover:bg-primary/10"
                                            },
                                        )
                                    }
                                >
                                    {chip.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <label for="skill-search" class="sr-only">
                        "Search skills"
                    </label>
                    <input
                        id="skill-search"
                        type="search"
                        placeholder="Filter skills..."
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        class="px-4 py-2 rounded-full border border-input bg-background text-sm focus:ring-2 focus:ring-primary"
                    />
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|skill| view! { <SkillCard skill=skill /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
