use yew::prelude::*;

use crate::navigation::{scroll_to, Section};
use crate::reveal::{reveal_style, stagger_delay};
use crate::viewport::use_viewport;

const OFFERINGS: [(&str, &str, &str, &str); 4] = [
    ("🌐", "Web3", "Blockchain & DApps", "#6366f1"),
    ("💲", "FinTech", "Digital Payment Solutions", "#8b5cf6"),
    ("💻", "Software", "Custom Applications", "#a855f7"),
    ("🚀", "Startup", "MVP Development", "#c084fc"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let viewport = use_viewport();
    let visible = use_state(|| false);

    // Above the fold, so reveal as soon as it mounts
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(true);
                || ()
            },
            (),
        );
    }

    let mobile = viewport.is_mobile();

    html! {
        <section id="home" class={classes!("hero", mobile.then(|| "mobile"))}>
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        position: relative;
                        padding: 6rem 2rem 4rem;
                        overflow: hidden;
                    }
                    .hero.mobile {
                        padding: 5rem 0.5rem 3rem;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 10vw, 6rem);
                        font-weight: 900;
                        margin-bottom: 1.5rem;
                        text-shadow: 0 0 30px rgba(139, 92, 246, 0.3);
                    }
                    .hero-subtitle {
                        font-size: clamp(1rem, 2.5vw, 1.35rem);
                        color: #cbd5e1;
                        max-width: 800px;
                        margin: 0 auto 2.5rem;
                        line-height: 1.7;
                    }
                    .hero-buttons {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        margin-bottom: 4rem;
                    }
                    .hero.mobile .hero-buttons {
                        flex-direction: column;
                        align-items: stretch;
                        padding: 0 1rem;
                    }
                    .offerings {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        max-width: 1000px;
                        margin: 0 auto;
                    }
                    .hero.mobile .offerings {
                        grid-template-columns: repeat(2, 1fr);
                        gap: 0.75rem;
                    }
                    .offering {
                        padding: 1.5rem;
                    }
                    .hero.mobile .offering {
                        padding: 1rem;
                    }
                    .offering-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .hero.mobile .offering-icon {
                        font-size: 2rem;
                    }
                    .offering h3 {
                        font-size: 1.2rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .offering p {
                        color: #cbd5e1;
                        font-size: 0.9rem;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 24px;
                        height: 40px;
                        border: 2px solid rgba(255, 255, 255, 0.4);
                        border-radius: 12px;
                    }
                    .scroll-indicator::after {
                        content: '';
                        position: absolute;
                        top: 8px;
                        left: 50%;
                        width: 4px;
                        height: 8px;
                        margin-left: -2px;
                        border-radius: 2px;
                        background: #a78bfa;
                        animation: scrollDot 2s infinite;
                    }
                    @keyframes scrollDot {
                        0% { opacity: 1; transform: translateY(0); }
                        100% { opacity: 0; transform: translateY(14px); }
                    }
                "#}
            </style>
            <div style={reveal_style(*visible, 0)}>
                <h1 class="gradient-animation">{"CodeX"}</h1>
                <p class="hero-subtitle">
                    {"Innovating Tomorrow"}
                    <br />
                    {"Building cutting-edge Web3, FinTech, and software solutions that power the future of digital innovation. From blockchain applications to financial platforms, we engineer excellence in every line of code."}
                </p>
                <div class="hero-buttons">
                    <button
                        class="btn-primary pulse-glow"
                        onclick={Callback::from(|_: MouseEvent| scroll_to(Section::Projects))}
                    >
                        {"View Our Projects"}
                    </button>
                    <button
                        class="btn-secondary"
                        onclick={Callback::from(|_: MouseEvent| scroll_to(Section::Contact))}
                    >
                        {"Get In Touch"}
                    </button>
                </div>
                <div class="offerings">
                    { for OFFERINGS.iter().enumerate().map(|(index, (icon, title, tagline, accent))| html! {
                        <div
                            key={*title}
                            class="card float-animation offering"
                            style={format!("{} animation-delay: {}ms;", reveal_style(*visible, stagger_delay(200, 100, index)), index * 200)}
                        >
                            <div class="offering-icon">{*icon}</div>
                            <h3 style={format!("color: {};", accent)}>{*title}</h3>
                            <p>{*tagline}</p>
                        </div>
                    }) }
                </div>
            </div>
            if !mobile {
                <div class="scroll-indicator"></div>
            }
        </section>
    }
}
