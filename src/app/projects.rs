use leptos::prelude::*;

use crate::content::{
    default_projects, filter_projects, github_profile_url, tag_chips, ProjectEntry, GITHUB_USERNAME,
};

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let has_demo = project.demo_url != "#";

    view! {
        <article class="group bg-card rounded-lg overflow-hidden shadow-xs card-hover flex flex-col">
            <div class="h-48 overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
            </div>
            <div class="p-6 flex flex-col flex-1">
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 text-xs font-medium border rounded-full bg-secondary text-secondary-foreground">
                                    {tag.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <h3 class="text-xl font-semibold mb-1">{project.title.clone()}</h3>
                <p class="text-muted-foreground text-sm mb-4 flex-1">
                    {project.description.clone()}
                </p>
                <div class="flex items-center gap-4 text-sm">
                    {has_demo
                        .then(|| {
                            view! {
                                <a
                                    href=project.demo_url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-foreground/80 hover:text-primary transition-colors duration-300"
                                >
                                    "Live demo"
                                </a>
                            }
                        })}
                    <a
                        href=project.repo_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-foreground/80 hover:text-primary transition-colors duration-300"
                    >
                        "Source"
                    </a>
                    <a href="/#contact" class="ml-auto text-primary underline">
                        "Hire me"
                    </a>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectsSection(#[prop(optional)] projects: Option<Vec<ProjectEntry>>) -> impl IntoView {
    let projects = StoredValue::new(projects.unwrap_or_else(default_projects));
    let chips = projects.with_value(|all| tag_chips(all));
    let (query, set_query) = signal(String::new());

    let visible = move || {
        let query = query.get();
        projects.with_value(|all| {
            filter_projects(all, &query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section id="projects" class="py-24 px-4 relative">
            <div class="container mx-auto max-w-5xl">
                <h2 class="text-3xl md:text-4xl font-bold mb-4 text-center">
                    "Featured " <span class="text-primary">"Projects"</span>
                </h2>
                <p class="text-center text-muted-foreground mb-8 max-w-2xl mx-auto">
                    "A few things I've built recently. Each one links to its source; ask me about the rest."
                </p>
                <div class="flex flex-wrap justify-center gap-2 mb-4">
                    {chips
                        .into_iter()
                        .map(|chip| {
                            // "All" clears the search, any other tag becomes the query
                            let term = if chip == "All" { String::new() } else { chip.clone() };
                            let pressed_term = term.clone();
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| set_query.set(term.clone())
                                    aria-pressed=move || {
                                        (query.get().trim().eq_ignore_ascii_case(&pressed_term))
                                            .to_string()
                                    }
                                    class="px-3 py-1 rounded-full text-xs font-medium bg-card hover:bg-primary/10 aria-pressed:bg-primary aria-pressed:text-primary-foreground"
                                >
                                    {chip}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex justify-center mb-10">
                    <label for="project-search" class="sr-only">
                        "Search projects"
                    </label>
                    <input
                        id="project-search"
                        type="search"
                        placeholder="Search by title, description or tag..."
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        class="w-full max-w-md px-4 py-2 rounded-full border border-input bg-background text-sm focus:ring-2 focus:ring-primary"
                    />
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        let matches = visible();
                        if matches.is_empty() {
                            view! {
                                <p class="col-span-full text-center text-muted-foreground">
                                    "No projects match that search."
                                </p>
                            }
                                .into_any()
                        } else {
                            matches
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
                <div class="text-center mt-12">
                    <a
                        href=github_profile_url(GITHUB_USERNAME)
                        target="_blank"
                        rel="noopener noreferrer"
                        class="cosmic-button w-fit flex items-center mx-auto gap-2"
                    >
                        "Check my GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}
