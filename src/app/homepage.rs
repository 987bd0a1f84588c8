use leptos::prelude::*;
use leptos_meta::Title;

use super::about::AboutSection;
use super::contact::ContactSection;
use super::footer::Footer;
use super::hero::HeroSection;
use super::navbar::Navbar;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;
use super::theme_toggle::ThemeToggle;
use super::toast::provide_notifications;

/// The whole site: every section mounted in a fixed order.
#[component]
pub fn HomePage() -> impl IntoView {
    provide_notifications();

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background text-foreground overflow-x-hidden">
            <ThemeToggle />
            <Navbar />
            <main>
                <HeroSection />
                <AboutSection />
                <SkillsSection />
                <ProjectsSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
