#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub experience_years: u32,
    pub location: String,
    pub stack: Vec<String>,
    pub headline_stack: Vec<String>,
    pub resume_url: String,
    pub avatar_url: Option<String>,
    pub availability: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Kelvin Machaka".to_string(),
            role: "Full-stack Engineer".to_string(),
            experience_years: 2,
            location: "Harare, Zimbabwe".to_string(),
            stack: to_strings(&[
                "MongoDB",
                "Express",
                "React",
                "Node.js",
                "Django",
                "Figma",
                "TypeScript",
            ]),
            headline_stack: to_strings(&["React", "TypeScript", "Django", "Node.js"]),
            resume_url: "/resume.pdf".to_string(),
            avatar_url: Some("/projects/profile.png".to_string()),
            availability: "Open to full-time & freelance · Available immediately".to_string(),
        }
    }
}

impl Profile {
    /// Up to two upper-cased initials taken from the first words of the name.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// The hero meta row uses the shorter headline stack.
    pub fn stack_line(&self) -> String {
        self.headline_stack.join(" • ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub fn all() -> [SkillCategory; 3] {
        [Self::Frontend, Self::Backend, Self::Tools]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl CategoryFilter {
    /// Chip order: `All` first, then every category.
    pub fn chips() -> Vec<CategoryFilter> {
        std::iter::once(Self::All)
            .chain(SkillCategory::all().into_iter().map(Self::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(cat) => cat.label(),
        }
    }

    pub fn admits(&self, category: SkillCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(cat) => *cat == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    level: u8,
    pub category: SkillCategory,
    pub description: String,
}

impl SkillEntry {
    /// Proficiency above 100 is clamped.
    pub fn new(name: &str, level: u8, category: SkillCategory, description: &str) -> Self {
        Self {
            name: name.to_string(),
            level: level.min(100),
            category,
            description: description.to_string(),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Element id used to label the skill card.
    pub fn slug(&self) -> String {
        let joined = self.name.split_whitespace().collect::<Vec<_>>().join("-");
        format!("skill-{}", joined.to_lowercase())
    }

    fn matches(&self, query: &str) -> bool {
        [self.name.as_str(), &self.description, self.category.label()]
            .iter()
            .any(|field| field.to_lowercase().contains(query))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub demo_url: String,
    pub repo_url: String,
}

impl ProjectEntry {
    fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.tags.join(" ").to_lowercase().contains(query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
    pub twitch: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub calendly: String,
    pub pricing: String,
    pub social: SocialLinks,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            email: "machakakelvin903@gmail.com".to_string(),
            phone: "+263781255971".to_string(),
            location: "Zimre Park, Harare, Zimbabwe".to_string(),
            calendly: "https://calendly.com/your-calendly".to_string(),
            pricing: "/pricing".to_string(),
            social: SocialLinks {
                linkedin: "#".to_string(),
                twitter: "#".to_string(),
                instagram: "#".to_string(),
                twitch: "#".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", href: "#hero" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Skills", href: "#skills" },
    NavItem { label: "Projects", href: "#projects" },
    NavItem { label: "Contact", href: "#contact" },
];

pub const GITHUB_USERNAME: &str = "tadikev";

pub fn github_profile_url(username: &str) -> String {
    format!("https://github.com/{username}")
}

pub fn default_skills() -> Vec<SkillEntry> {
    use SkillCategory::*;
    vec![
        SkillEntry::new("HTML/CSS", 96, Frontend, "Semantic, responsive CSS, modern layouts"),
        SkillEntry::new("JavaScript (ES6+)", 93, Frontend, "Modern patterns, async, DOM"),
        SkillEntry::new("React", 92, Frontend, "Hooks, context, perf, testing"),
        SkillEntry::new("Next.js", 82, Frontend, "SSR / SSG, routing, image optimization"),
        SkillEntry::new("TypeScript", 86, Frontend, "Types-first frontends and safer refactors"),
        SkillEntry::new("Tailwind CSS", 90, Frontend, "Utility-first, rapid UI creation"),
        SkillEntry::new("Node.js", 85, Backend, "Event-driven servers and tooling"),
        SkillEntry::new("Express", 80, Backend, "REST APIs, middleware patterns"),
        SkillEntry::new("MongoDB", 80, Backend, "Schema design, Mongoose, replica sets"),
        SkillEntry::new("Mongoose", 78, Backend, "ODM patterns and validation"),
        SkillEntry::new("PostgreSQL", 72, Backend, "Relational modeling, indexes, queries"),
        SkillEntry::new("Django", 82, Backend, "DRF, ORM, admin, rapid APIs"),
        SkillEntry::new("GraphQL", 68, Backend, "Apollo / schema design"),
        SkillEntry::new("Docker", 78, Tools, "Containerizing apps and CI builds"),
        SkillEntry::new("Git / GitHub", 94, Tools, "Branching, PRs, code reviews"),
        SkillEntry::new("CI/CD (GitHub Actions)", 75, Tools, "Automated builds & deployments"),
        SkillEntry::new("AWS / GCP (basics)", 70, Tools, "Cloud deployments and storage"),
        SkillEntry::new("VS Code", 96, Tools, "Daily driver, extensions & debugging"),
        SkillEntry::new("Figma", 85, Tools, "Design handoff, prototypes, components"),
    ]
}

pub fn default_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            id: "ecommerce-mern-2".to_string(),
            title: "E-Commerce (MERN)".to_string(),
            description: "Full-stack e-commerce demo built with the MERN stack: product catalog, cart, auth and checkout flows.".to_string(),
            image: "/projects/e-commerce-mern-stack-2.png".to_string(),
            tags: to_strings(&["MERN", "React", "Node.js", "MongoDB", "Stripe"]),
            demo_url: "#".to_string(),
            repo_url: "https://github.com/tadikev/e-commerce-mern-stack-2".to_string(),
        },
        ProjectEntry {
            id: "ecommerce-js".to_string(),
            title: "Ecommerce (JS)".to_string(),
            description: "A focused e-commerce frontend & lightweight backend demo showcasing product pages, cart UX, and payment integration.".to_string(),
            image: "/projects/ecommerce.png".to_string(),
            tags: to_strings(&["JavaScript", "Node", "Express", "Payments"]),
            demo_url: "#".to_string(),
            repo_url: "https://github.com/tadikev/Ecommerce".to_string(),
        },
        ProjectEntry {
            id: "talent-verify".to_string(),
            title: "talent-verify".to_string(),
            description: "An online talent verification service covering backend work, data modelling, and integration logic.".to_string(),
            image: "/projects/talent-verify.png".to_string(),
            tags: to_strings(&["Python", "Django", "APIs"]),
            demo_url: "#".to_string(),
            repo_url: "https://github.com/tadikev/talent-verify".to_string(),
        },
    ]
}

/// Case-insensitive substring search over title, description and tags.
/// A blank query keeps every project.
pub fn filter_projects<'a>(projects: &'a [ProjectEntry], query: &str) -> Vec<&'a ProjectEntry> {
    let query = query.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| query.is_empty() || p.matches(&query))
        .collect()
}

pub fn filter_skills<'a>(
    skills: &'a [SkillEntry],
    filter: CategoryFilter,
    query: &str,
) -> Vec<&'a SkillEntry> {
    let query = query.trim().to_lowercase();
    skills
        .iter()
        .filter(|s| filter.admits(s.category))
        .filter(|s| query.is_empty() || s.matches(&query))
        .collect()
}

/// `All` followed by every distinct tag in first-seen order.
pub fn tag_chips(projects: &[ProjectEntry]) -> Vec<String> {
    let mut chips = vec!["All".to_string()];
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if !chips.contains(tag) {
            chips.push(tag.clone());
        }
    }
    chips
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, description: &str, tags: &[&str]) -> ProjectEntry {
        ProjectEntry {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: description.to_string(),
            image: String::new(),
            tags: to_strings(tags),
            demo_url: "#".to_string(),
            repo_url: "#".to_string(),
        }
    }

    #[test]
    fn test_project_query_matches_any_field() {
        let projects = vec![
            project("Storefront", "Built with React hooks", &["Node"]),
            project("Dashboard", "Charts and tables", &["REACT", "Vite"]),
            project("Reactor Sim", "Physics toy", &["Rust"]),
            project("Blog", "Static site", &["Hugo"]),
        ];

        let titles = filter_projects(&projects, "react")
            .into_iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Storefront", "Dashboard", "Reactor Sim"]);

        assert_eq!(filter_projects(&projects, "").len(), 4);
        assert_eq!(filter_projects(&projects, "   ").len(), 4);
        assert!(filter_projects(&projects, "elixir").is_empty());
    }

    #[test]
    fn test_project_query_is_trimmed_and_case_insensitive() {
        let projects = default_projects();
        let hits = filter_projects(&projects, "  STRIPE ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "ecommerce-mern-2");
    }

    #[test]
    fn test_skill_category_filter() {
        let skills = default_skills();
        let tools = filter_skills(&skills, CategoryFilter::Only(SkillCategory::Tools), "");
        assert!(!tools.is_empty());
        assert!(tools.iter().all(|s| s.category == SkillCategory::Tools));
        assert_eq!(filter_skills(&skills, CategoryFilter::All, "").len(), skills.len());
    }

    #[test]
    fn test_skill_query_within_category() {
        let skills = default_skills();
        let hits = filter_skills(&skills, CategoryFilter::Only(SkillCategory::Backend), "mongo");
        let names = hits.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["MongoDB", "Mongoose"]);

        let none = filter_skills(&skills, CategoryFilter::Only(SkillCategory::Frontend), "mongo");
        assert!(none.is_empty());
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(default_skills().iter().all(|s| s.level() <= 100));
        let clamped = SkillEntry::new("Overconfidence", 250, SkillCategory::Tools, "");
        assert_eq!(clamped.level(), 100);
    }

    #[test]
    fn test_skill_slug() {
        let skill = SkillEntry::new("CI/CD (GitHub  Actions)", 75, SkillCategory::Tools, "");
        assert_eq!(skill.slug(), "skill-ci/cd-(github-actions)");
    }

    #[test]
    fn test_category_chips() {
        let labels = CategoryFilter::chips()
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["All", "Frontend", "Backend", "Tools"]);
    }

    #[test]
    fn test_tag_chips_dedup_in_order() {
        let projects = vec![
            project("A", "", &["React", "Node"]),
            project("B", "", &["Node", "Django"]),
        ];
        assert_eq!(tag_chips(&projects), vec!["All", "React", "Node", "Django"]);
    }

    #[test]
    fn test_profile_initials() {
        let mut profile = Profile::default();
        assert_eq!(profile.initials(), "KM");

        profile.name = "ada lovelace byron".to_string();
        assert_eq!(profile.initials(), "AL");

        profile.name = "Prince".to_string();
        assert_eq!(profile.initials(), "P");
    }

    #[test]
    fn test_stack_line() {
        let profile = Profile {
            headline_stack: to_strings(&["Rust", "Leptos"]),
            ..Profile::default()
        };
        assert_eq!(profile.stack_line(), "Rust • Leptos");
    }

    #[test]
    fn test_nav_items_are_anchors() {
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
        assert_eq!(NAV_ITEMS[0].href, "#hero");
        assert_eq!(NAV_ITEMS[4].href, "#contact");
    }
}
