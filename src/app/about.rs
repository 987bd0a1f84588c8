use leptos::prelude::*;

use crate::content::Profile;

const STATS: [(&str, &str, Option<&str>); 4] = [
    ("10+", "Apps shipped", None),
    ("0.9s", "avg LCP", Some("(client builds)")),
    ("WCAG AA", "Accessibility", None),
    ("Mentor", "Juniors mentored", None),
];

const FOCUS_AREAS: [(&str, &str); 3] = [
    ("Frontend", "React, performance, accessibility"),
    ("Backend & APIs", "Node (Express), Django, GraphQL/REST"),
    ("Infra & Data", "MongoDB, Postgres, Docker, CI/CD"),
];

#[component]
fn StatCard(value: &'static str, label: &'static str, sub: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="rounded-lg gradient-border p-3 text-center bg-card">
            <div class="text-lg font-bold text-foreground">{value}</div>
            <div class="text-xs text-muted-foreground">{label}</div>
            {sub.map(|s| view! { <div class="text-[10px] text-muted-foreground mt-1">{s}</div> })}
        </div>
    }
}

#[component]
pub fn AboutSection(#[prop(optional)] profile: Profile) -> impl IntoView {
    let initials = profile.initials();

    view! {
        <section id="about" class="py-20 px-4 bg-background">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold">
                        "About " <span class="text-primary">"Me"</span>
                    </h2>
                    <p class="mt-3 text-sm sm:text-base text-muted-foreground max-w-2xl mx-auto">
                        "Full-stack engineer with MERN & Django experience, plus product design (Figma). I build robust, maintainable systems from UI to infra."
                    </p>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-10 items-start">
                    <div class="lg:col-span-2 order-2 lg:order-1">
                        <div class="mb-6">
                            <h3 class="text-2xl font-semibold">{profile.name.clone()}</h3>
                            <div class="mt-2 text-sm text-muted-foreground">
                                <strong class="text-foreground">{profile.role.clone()}</strong>
                                {format!(
                                    " • {} • {}+ years",
                                    profile.location,
                                    profile.experience_years,
                                )}
                            </div>
                        </div>
                        <p class="text-base text-muted-foreground max-w-3xl leading-relaxed">
                            "I design and deliver end-to-end products: performant frontends (React), scalable backends (Node / Django), and production-ready infrastructure. I collaborate with product and design (Figma) to ship measurable outcomes."
                        </p>
                        <div class="mt-6 grid grid-cols-2 sm:grid-cols-4 gap-3">
                            {STATS
                                .into_iter()
                                .map(|(value, label, sub)| view! { <StatCard value=value label=label sub=sub /> })
                                .collect_view()}
                        </div>
                        <div class="mt-6 flex flex-col sm:flex-row gap-3">
                            <a
                                href="#projects"
                                class="cosmic-button inline-flex items-center gap-2 px-5 py-3 text-sm sm:text-base"
                            >
                                "View Projects"
                            </a>
                            <a
                                href=profile.resume_url.clone()
                                download=""
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 px-4 py-3 rounded-md text-sm sm:text-base border border-border/60"
                            >
                                "Download CV"
                            </a>
                        </div>
                        <div class="mt-8">
                            <h4 class="text-sm font-medium mb-3 text-muted-foreground">
                                "Core tools & technologies"
                            </h4>
                            <div class="flex flex-wrap gap-3">
                                {profile
                                    .stack
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <div
                                                class="inline-flex items-center gap-2 text-xs font-medium rounded-full px-3 py-2 bg-card border border-border/50"
                                                title=tech.clone()
                                            >
                                                <span class="w-2 h-2 rounded-full bg-primary inline-block"></span>
                                                <span class="text-foreground">{tech.clone()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <aside class="order-1 lg:order-2">
                        <div class="w-full max-w-xs md:max-w-sm lg:max-w-md rounded-2xl gradient-border p-5 bg-card shadow-lg">
                            <div class="flex items-center gap-4">
                                <div class="w-16 h-16 md:w-20 md:h-20 rounded-full bg-primary/10 flex items-center justify-center text-primary font-semibold text-lg">
                                    {initials}
                                </div>
                                <div>
                                    <div class="font-semibold text-base text-foreground">
                                        {profile.name.clone()}
                                    </div>
                                    <div class="text-sm text-muted-foreground">
                                        {profile.role.clone()}
                                    </div>
                                </div>
                            </div>
                            <div class="mt-4 text-sm text-muted-foreground">
                                <strong class="text-foreground">"What I do"</strong>
                                <ul class="mt-3 space-y-3">
                                    {FOCUS_AREAS
                                        .into_iter()
                                        .map(|(title, detail)| {
                                            view! {
                                                <li>
                                                    <div class="text-sm font-medium">{title}</div>
                                                    <div class="text-xs text-muted-foreground">{detail}</div>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                            <div class="mt-5 flex gap-3">
                                <a
                                    href="#contact"
                                    class="inline-block w-full text-center px-4 py-2 rounded-md bg-primary text-primary-foreground font-medium"
                                >
                                    "Let's talk"
                                </a>
                            </div>
                        </div>
                    </aside>
                </div>
            </div>
        </section>
    }
}
