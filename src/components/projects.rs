use yew::prelude::*;

use crate::navigation::{open_external, scroll_to, Section};
use crate::reveal::{reveal_style, stagger_delay, use_reveal, RevealConfig, Trigger};
use crate::viewport::use_viewport;

const PROJECTS_REVEAL: RevealConfig = RevealConfig {
    desktop: Trigger {
        threshold: 0.1,
        root_margin: "50px",
    },
    mobile: Trigger {
        threshold: 0.05,
        root_margin: "100px",
    },
    mobile_fallback_ms: 1_000,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Web,
    Fintech,
    Defi,
    Web3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Only(Category),
}

impl Filter {
    pub const ALL: [Filter; 5] = [
        Filter::All,
        Filter::Only(Category::Web),
        Filter::Only(Category::Fintech),
        Filter::Only(Category::Defi),
        Filter::Only(Category::Web3),
    ];

    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(Category::Web) => "web",
            Filter::Only(Category::Fintech) => "fintech",
            Filter::Only(Category::Defi) => "defi",
            Filter::Only(Category::Web3) => "web3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All Projects",
            Filter::Only(Category::Web) => "Web Apps",
            Filter::Only(Category::Fintech) => "FinTech",
            Filter::Only(Category::Defi) => "DeFi",
            Filter::Only(Category::Web3) => "Web3 Gaming",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => project.category == category,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub url: &'static str,
    pub image: &'static str,
    pub metrics: &'static [(&'static str, &'static str)],
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "GameX",
        category: Category::Web3,
        description: "Revolutionary gaming platform with advanced features, real-time gameplay, and immersive user experiences for the next generation of gamers.",
        technologies: &["React", "Node.js", "Web3.js"],
        url: "https://gamexto.com/",
        image: "/images/projects/gamex.png",
        metrics: &[("users", "10K+"), ("rating", "4.9/5"), ("uptime", "99.9%")],
    },
    Project {
        id: 2,
        title: "Fengshui Modern",
        category: Category::Web,
        description: "Modern interpretation of ancient Fengshui principles with contemporary design and user-friendly interface for space optimization.",
        technologies: &["Next.js", "TypeScript", "MongoDB"],
        url: "https://nikhil-sigma.vercel.app/",
        image: "/images/projects/fengshui.png",
        metrics: &[("clients", "500+"), ("rating", "4.8/5"), ("projects", "1K+")],
    },
    Project {
        id: 3,
        title: "Mooner Money",
        category: Category::Fintech,
        description: "Advanced financial management platform with cryptocurrency tracking, portfolio management, and comprehensive investment analytics.",
        technologies: &["React", "Node.js", "PostgreSQL"],
        url: "https://mooner.money/",
        image: "/images/projects/mooner.png",
        metrics: &[("transactions", "100K+"), ("security", "Bank-grade"), ("speed", "< 2s")],
    },
    Project {
        id: 4,
        title: "WGMI Exchange",
        category: Category::Defi,
        description: "Decentralized exchange platform enabling seamless cryptocurrency trading with advanced features and optimal user experience.",
        technologies: &["Vue.js", "Solidity", "Web3.js"],
        url: "https://v1.wgmi.exchange/",
        image: "/images/projects/wgmi.png",
        metrics: &[("volume", "$5M+"), ("fees", "0.3%"), ("pairs", "200+")],
    },
];

/// Projects shown for `filter`, in source order.
pub fn filter_projects(projects: &[Project], filter: Filter) -> Vec<&Project> {
    projects.iter().filter(|project| filter.matches(project)).collect()
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let viewport = use_viewport();
    let (section_ref, visible) = use_reveal(PROJECTS_REVEAL, "projects");
    let active_filter = use_state(|| Filter::All);

    let shown = filter_projects(&PROJECTS, *active_filter);

    html! {
        <section id="projects" ref={section_ref} class={classes!("projects-section", viewport.is_mobile().then(|| "mobile-padding"))}>
            <style>
                {r#"
                    .projects-section {
                        padding: 6rem 2rem;
                    }
                    .projects-section.mobile-padding {
                        padding: 4rem 1rem;
                    }
                    .projects-container {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .projects-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .projects-header h2 {
                        font-size: clamp(2rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .projects-header p {
                        color: #cbd5e1;
                        max-width: 700px;
                        margin: 0 auto;
                    }
                    .filter-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 3rem;
                    }
                    .filter-button {
                        padding: 0.6rem 1.4rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        color: #e2e8f0;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .filter-button:hover {
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .filter-button.active {
                        background: linear-gradient(135deg, #6366f1, #8b5cf6);
                        color: #ffffff;
                        border-color: transparent;
                    }
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .project-card {
                        cursor: pointer;
                        overflow: hidden;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .project-card:hover {
                        border-color: rgba(139, 92, 246, 0.4);
                    }
                    .project-image {
                        width: 100%;
                        height: 200px;
                        object-fit: cover;
                        display: block;
                    }
                    .project-body {
                        padding: 1.5rem;
                    }
                    .project-body h3 {
                        color: #ffffff;
                        font-size: 1.4rem;
                        margin-bottom: 0.75rem;
                    }
                    .project-body p {
                        color: #cbd5e1;
                        line-height: 1.6;
                        margin-bottom: 1rem;
                    }
                    .tech-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .tech-tag {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.8rem;
                        background: rgba(139, 92, 246, 0.2);
                        color: #c4b5fd;
                    }
                    .project-metrics {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding-top: 1rem;
                    }
                    .metric {
                        text-align: center;
                    }
                    .metric-label {
                        font-size: 0.75rem;
                        color: #9ca3af;
                        text-transform: capitalize;
                    }
                    .metric-value {
                        font-weight: 700;
                        color: #a78bfa;
                    }
                    .projects-cta {
                        text-align: center;
                        margin-top: 4rem;
                    }
                    .projects-cta p {
                        color: #cbd5e1;
                        font-size: 1.2rem;
                        margin-bottom: 1.5rem;
                    }
                "#}
            </style>
            <div class="projects-container">
                <div class="projects-header" style={reveal_style(visible, 0)}>
                    <h2 class="gradient-text">{"Our Projects"}</h2>
                    <p>{"Explore our innovative software projects that showcase creativity, technical excellence, and user-centric design."}</p>
                </div>

                <div class="filter-bar" style={reveal_style(visible, 200)}>
                    { for Filter::ALL.iter().map(|filter| {
                        let filter = *filter;
                        let onclick = {
                            let active_filter = active_filter.clone();
                            Callback::from(move |_: MouseEvent| active_filter.set(filter))
                        };
                        html! {
                            <button
                                key={filter.key()}
                                class={classes!("filter-button", (*active_filter == filter).then(|| "active"))}
                                {onclick}
                            >
                                {filter.label()}
                            </button>
                        }
                    }) }
                </div>

                <div class="projects-grid">
                    { for shown.iter().enumerate().map(|(index, project)| {
                        let url = project.url;
                        let onclick = Callback::from(move |_: MouseEvent| open_external(url));
                        html! {
                            <div
                                key={project.id}
                                class="project-card"
                                style={reveal_style(visible, stagger_delay(300, 100, index))}
                                {onclick}
                            >
                                <img class="project-image" src={project.image} alt={project.title} />
                                <div class="project-body">
                                    <h3>{project.title}</h3>
                                    <p>{project.description}</p>
                                    <div class="tech-tags">
                                        { for project.technologies.iter().map(|tech| html! {
                                            <span key={*tech} class="tech-tag">{*tech}</span>
                                        }) }
                                    </div>
                                    <div class="project-metrics">
                                        { for project.metrics.iter().map(|(label, value)| html! {
                                            <div key={*label} class="metric">
                                                <div class="metric-label">{*label}</div>
                                                <div class="metric-value">{*value}</div>
                                            </div>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="projects-cta" style={reveal_style(visible, 600)}>
                    <p>{"Ready to bring your software project to life?"}</p>
                    <button
                        class="btn-primary pulse-glow"
                        onclick={Callback::from(|_: MouseEvent| scroll_to(Section::Contact))}
                    >
                        {"Start a Project"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|project| project.title).collect()
    }

    #[test]
    fn all_returns_everything_in_source_order() {
        let shown = filter_projects(&PROJECTS, Filter::All);
        assert_eq!(
            titles(&shown),
            ["GameX", "Fengshui Modern", "Mooner Money", "WGMI Exchange"]
        );
    }

    #[test]
    fn fintech_returns_exact_category_subset() {
        let shown = filter_projects(&PROJECTS, Filter::Only(Category::Fintech));
        let expected: Vec<_> = PROJECTS
            .iter()
            .filter(|project| project.category == Category::Fintech)
            .collect();
        assert_eq!(shown, expected);
        assert_eq!(titles(&shown), ["Mooner Money"]);
    }

    #[test]
    fn every_category_filter_is_exact() {
        for filter in Filter::ALL {
            let shown = filter_projects(&PROJECTS, filter);
            assert!(shown.iter().all(|project| filter.matches(project)));
            let hidden = PROJECTS.iter().filter(|project| !filter.matches(project)).count();
            assert_eq!(shown.len() + hidden, PROJECTS.len());
        }
    }

    #[test]
    fn filter_keys_match_wire_categories() {
        let keys: Vec<_> = Filter::ALL.iter().map(|filter| filter.key()).collect();
        assert_eq!(keys, ["all", "web", "fintech", "defi", "web3"]);
    }

    #[test]
    fn empty_list_stays_empty() {
        assert!(filter_projects(&[], Filter::All).is_empty());
    }
}
