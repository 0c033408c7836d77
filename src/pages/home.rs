use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, hero::Hero, navbar::Navbar, projects::Projects,
    testimonials::Testimonials,
};

/// The whole site: every section stacked in scroll order.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        scroll-behavior: smooth;
                    }
                    .landing-page {
                        min-height: 100vh;
                        background: linear-gradient(135deg, #0f0f23 0%, #1e1b4b 50%, #312e81 100%);
                        color: #e2e8f0;
                        overflow-x: hidden;
                    }
                    .card {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        backdrop-filter: blur(10px);
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .card:hover {
                        border-color: rgba(139, 92, 246, 0.3);
                    }
                    .gradient-text {
                        background: linear-gradient(135deg, #ffffff, #a78bfa, #60a5fa);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .gradient-animation {
                        background: linear-gradient(270deg, #8b5cf6, #3b82f6, #a855f7, #8b5cf6);
                        background-size: 300% 300%;
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        animation: gradientShift 6s ease infinite;
                    }
                    @keyframes gradientShift {
                        0% { background-position: 0% 50%; }
                        50% { background-position: 100% 50%; }
                        100% { background-position: 0% 50%; }
                    }
                    .btn-primary,
                    .btn-secondary {
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .btn-primary {
                        border: none;
                        color: #ffffff;
                        background: linear-gradient(135deg, #8b5cf6, #3b82f6);
                    }
                    .btn-secondary {
                        color: #e2e8f0;
                        background: transparent;
                        border: 2px solid rgba(139, 92, 246, 0.6);
                    }
                    .btn-primary:hover,
                    .btn-secondary:hover {
                        transform: translateY(-2px);
                    }
                    .pulse-glow {
                        animation: pulseGlow 2.5s ease-in-out infinite;
                    }
                    @keyframes pulseGlow {
                        0%, 100% { box-shadow: 0 0 15px rgba(139, 92, 246, 0.4); }
                        50% { box-shadow: 0 0 30px rgba(139, 92, 246, 0.7); }
                    }
                    .float-animation {
                        animation: floatY 4s ease-in-out infinite;
                    }
                    @keyframes floatY {
                        0%, 100% { translate: 0 0; }
                        50% { translate: 0 -10px; }
                    }
                "#}
            </style>
            <Navbar />
            <Hero />
            <About />
            <Projects />
            <Testimonials />
            <Contact />
        </div>
    }
}
