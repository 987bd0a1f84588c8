use leptos::prelude::*;

use crate::content::Profile;

const HIGHLIGHTS: [&str; 4] = [
    "10+ production apps",
    "Performance wins",
    "WCAG AA",
    "Mentored juniors",
];

#[component]
pub fn HeroSection(
    #[prop(optional)] profile: Profile,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let initials = profile.initials();
    let stack_line = profile.stack_line();
    // falls back to initials when there is no avatar or it fails to load
    let (avatar_failed, set_avatar_failed) = signal(profile.avatar_url.is_none());
    let section_class = format!(
        "relative {} flex items-center justify-center px-4 bg-background dark:bg-slate-900 transition-colors duration-200",
        if compact { "py-12" } else { "min-h-screen py-24" },
    );

    view! {
        <section id="hero" aria-label=format!("Intro, {}", profile.name) class=section_class>
            <div class="container max-w-6xl mx-auto text-left z-10">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10 items-center">
                    <div class="md:col-span-2 order-2 md:order-1 text-center md:text-left">
                        <div class="mb-3 text-sm text-muted-foreground">
                            <span>{profile.location.clone()}</span>
                            <span class="mx-3 hidden sm:inline">"•"</span>
                            <span class="hidden sm:inline">{stack_line}</span>
                        </div>
                        <h1 class="font-extrabold tracking-tight text-foreground leading-tight">
                            <span class="block text-2xl md:text-4xl">"I design and build"</span>
                            <span class="block mt-1 text-xl md:text-3xl font-bold text-primary">
                                "dependable, high-performance web products."
                            </span>
                        </h1>
                        <p class="mt-5 max-w-2xl text-base sm:text-lg text-muted-foreground">
                            "I'm " <strong>{profile.name.clone()}</strong> ", a "
                            <strong>{profile.role.clone()}</strong>
                            ". I build accessible, maintainable frontends and robust backends (React, Node, Django) with strong emphasis on performance, developer experience and measurable outcomes."
                        </p>
                        <div class="mt-7 flex flex-col sm:flex-row sm:items-center gap-3 sm:gap-4 justify-center md:justify-start">
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
                                "Resume"
                            </a>
                        </div>
                        <div class="mt-6 text-xs sm:text-sm text-muted-foreground">
                            {profile.availability.clone()}
                        </div>
                    </div>
                    <div class="order-1 md:order-2 flex justify-center md:justify-end">
                        <div class="w-full max-w-xs md:max-w-md rounded-2xl gradient-border p-5 bg-card shadow-lg">
                            <div class="flex items-center gap-4">
                                {profile
                                    .avatar_url
                                    .clone()
                                    .map(|src| {
                                        view! {
                                            <img
                                                src=src
                                                alt=format!("{} profile", profile.name)
                                                class="w-20 h-20 md:w-24 md:h-24 rounded-full object-cover"
                                                class:hidden=move || avatar_failed.get()
                                                on:error=move |_| set_avatar_failed.set(true)
                                            />
                                        }
                                    })}
                                <div
                                    class="w-20 h-20 md:w-24 md:h-24 rounded-full bg-primary/10 flex items-center justify-center text-primary font-semibold text-lg"
                                    class:hidden=move || !avatar_failed.get()
                                >
                                    {initials}
                                </div>
                                <div>
                                    <div class="font-semibold text-base md:text-lg text-foreground">
                                        {profile.name.clone()}
                                    </div>
                                    <div class="text-sm text-muted-foreground">
                                        {profile.role.clone()}
                                    </div>
                                </div>
                            </div>
                            <div class="mt-4 text-sm text-muted-foreground">
                                <strong class="text-foreground">"Selected highlights"</strong>
                                <ul class="mt-3 grid grid-cols-2 gap-3 text-xs md:text-sm">
                                    {HIGHLIGHTS
                                        .iter()
                                        .map(|h| {
                                            view! {
                                                <li class="rounded-md bg-background/50 px-3 py-2">
                                                    {*h}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                            <div class="mt-4 flex gap-4">
                                <a href="#contact" class="text-sm text-primary underline">
                                    "Hire me"
                                </a>
                                <a href="#projects" class="text-sm text-muted-foreground underline">
                                    "See work"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="mt-10 flex justify-center">
                    <a href="#about" class="flex flex-col items-center text-muted-foreground">
                        <span class="text-xs mb-2">"Scroll"</span>
                        <span class="text-primary">"↓"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
