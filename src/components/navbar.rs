use yew::prelude::*;

use crate::navigation::{scroll_to, Section};
use crate::viewport::use_viewport;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let viewport = use_viewport();
    let menu_open = use_state(|| false);
    let compact = viewport.is_compact_nav();

    // Growing back to the desktop layout closes the mobile menu
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |compact| {
                if !*compact {
                    menu_open.set(false);
                }
                || ()
            },
            compact,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_button = |section: Section, class: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to(section);
            menu_open.set(false);
        });
        html! {
            <button key={section.anchor()} {class} {onclick}>
                {section.label()}
            </button>
        }
    };

    html! {
        <nav class={classes!("top-nav", viewport.scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(15, 15, 35, 0.9);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 800;
                        background: linear-gradient(135deg, #8b5cf6, #3b82f6);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .nav-link,
                    .mobile-nav-link {
                        background: none;
                        border: none;
                        color: #e2e8f0;
                        font-size: 0.95rem;
                        cursor: pointer;
                        padding: 0.5rem 0.75rem;
                        border-radius: 8px;
                        transition: all 0.2s ease;
                    }
                    .nav-link:hover,
                    .mobile-nav-link:hover {
                        color: #ffffff;
                        background: rgba(139, 92, 246, 0.2);
                    }
                    .burger-menu {
                        background: none;
                        border: none;
                        color: #e2e8f0;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu svg {
                        display: block;
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                        white-space: nowrap;
                    }
                    .mobile-menu {
                        max-height: 0;
                        overflow: hidden;
                        background: rgba(15, 15, 35, 0.95);
                        backdrop-filter: blur(10px);
                        transition: max-height 0.3s ease;
                    }
                    .mobile-menu.open {
                        max-height: 400px;
                    }
                    .mobile-menu .mobile-nav-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        padding: 0.75rem 1.5rem;
                    }
                "#}
            </style>
            <div class="nav-content">
                <h1 class="nav-logo">{"CodeX"}</h1>
                if compact {
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span class="sr-only">{"Open main menu"}</span>
                        if *menu_open {
                            <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                            </svg>
                        } else {
                            <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        }
                    </button>
                } else {
                    <div class="nav-links">
                        { for Section::ALL.into_iter().map(|section| nav_button(section, "nav-link")) }
                    </div>
                }
            </div>
            if compact {
                <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                    { for Section::ALL.into_iter().map(|section| nav_button(section, "mobile-nav-link")) }
                </div>
            }
        </nav>
    }
}
