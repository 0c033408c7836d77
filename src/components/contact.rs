use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::contact_form::{
    deliver, Banner, ContactFields, Field, SubmissionPhase, PROJECT_TYPES,
};
use crate::reveal::{reveal_style, stagger_delay, use_reveal, RevealConfig};
use crate::viewport::use_viewport;

const CONTACT_REVEAL: RevealConfig = RevealConfig::uniform(0.2, 1_000);

const CONTACT_INFO: [(&str, &str, &str, &str); 4] = [
    ("📧", "Email", "swarnabhawork@gmail.com", "Send us your project details"),
    ("📞", "Phone", "+91 7003017293", "Available 24/7 for urgent inquiries"),
    ("📍", "Location", "Kolkata, West Bengal", "Global headquarters & R&D center"),
    ("⏰", "Response Time", "< 4 hours", "Typical response for new inquiries"),
];

const WHY_CHOOSE: [&str; 4] = [
    "2+ years of industry expertise",
    "12+ successful projects delivered",
    "24/7 technical support",
    "IP protection guaranteed",
];

const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("LinkedIn", "💼", "#"),
    ("Twitter", "🐦", "#"),
    ("GitHub", "💻", "#"),
    ("YouTube", "📹", "#"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let viewport = use_viewport();
    let (section_ref, visible) = use_reveal(CONTACT_REVEAL, "contact");
    let fields = use_state(ContactFields::default);
    let phase = use_state(SubmissionPhase::default);
    let banner_timer = use_mut_ref(|| None::<Timeout>);
    let is_mounted = use_is_mounted();

    // Drop a pending banner timer with the component
    {
        let banner_timer = banner_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    banner_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_field = |field: Field| {
        let fields = fields.clone();
        Callback::from(move |value: String| fields.set(fields.with(field, value)))
    };
    let on_text = |field: Field| {
        on_field(field).reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())
    };
    let on_message = on_field(Field::Message)
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value());
    let on_project = on_field(Field::Project)
        .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());

    let onsubmit = {
        let fields = fields.clone();
        let phase = phase.clone();
        let banner_timer = banner_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submitting = match SubmissionPhase::begin(&fields) {
                Ok(next) => next,
                Err(missing) => {
                    warn!("Contact form is missing {:?}", missing);
                    return;
                }
            };
            banner_timer.borrow_mut().take();
            phase.set(submitting);

            let payload = (*fields).clone();
            let fields = fields.clone();
            let phase = phase.clone();
            let banner_timer = banner_timer.clone();
            let is_mounted = is_mounted.clone();
            info!("Sending contact request");
            spawn_local(async move {
                let outcome = deliver(&payload).await;
                if !is_mounted() {
                    return;
                }
                match &outcome {
                    Ok(()) => info!("Contact request delivered"),
                    Err(err) => gloo_console::error!(format!("Contact request failed: {}", err)),
                }

                let settled = submitting.settle(&outcome);
                if settled.clears_form() {
                    fields.set(ContactFields::default());
                }
                phase.set(settled);

                if let Some((delay, next)) = settled.revert_schedule() {
                    let revert = phase.clone();
                    *banner_timer.borrow_mut() = Some(Timeout::new(delay, move || revert.set(next)));
                }
            });
        })
    };

    let submitting = phase.is_submitting();
    let form_columns = if viewport.is_wide() { "1fr 1fr" } else { "1fr" };
    let pair_columns = if viewport.is_mobile() { "1fr" } else { "1fr 1fr" };

    html! {
        <section id="contact" ref={section_ref} class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        padding: 6rem 2rem 2rem;
                        position: relative;
                        overflow: hidden;
                    }
                    .contact-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        position: relative;
                        z-index: 1;
                    }
                    .contact-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .contact-header h2 {
                        font-size: clamp(2rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .contact-header p {
                        color: #cbd5e1;
                        max-width: 700px;
                        margin: 0 auto;
                    }
                    .contact-layout {
                        display: grid;
                        gap: 2rem;
                    }
                    .form-card {
                        padding: 2rem;
                        border-radius: 20px;
                        background: rgba(255, 255, 255, 0.06);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .form-card h3,
                    .contact-info h3 {
                        color: #ffffff;
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .field-row {
                        display: grid;
                        gap: 1rem;
                    }
                    .contact-form label {
                        display: block;
                        color: #e2e8f0;
                        font-size: 0.9rem;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.08);
                        color: #ffffff;
                        font-size: 1rem;
                        outline: none;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }
                    .contact-form input:focus,
                    .contact-form select:focus,
                    .contact-form textarea:focus {
                        border-color: #8b5cf6;
                        box-shadow: 0 0 0 2px rgba(139, 92, 246, 0.2);
                    }
                    .contact-form option {
                        background: #1e293b;
                        color: #ffffff;
                    }
                    .contact-form textarea {
                        resize: vertical;
                    }
                    .submit-button {
                        padding: 1rem;
                        border: none;
                        border-radius: 10px;
                        font-size: 1.05rem;
                        font-weight: 600;
                        color: #ffffff;
                        cursor: pointer;
                        background: linear-gradient(135deg, #8b5cf6, #3b82f6);
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .submit-button:hover:not(:disabled) {
                        transform: scale(1.02);
                        box-shadow: 0 10px 25px rgba(139, 92, 246, 0.3);
                    }
                    .submit-button:disabled {
                        cursor: not-allowed;
                        background: linear-gradient(135deg, #6b7280, #4b5563);
                    }
                    .loading-spinner {
                        display: inline-block;
                        width: 18px;
                        height: 18px;
                        margin-right: 0.5rem;
                        vertical-align: middle;
                        border: 3px solid rgba(255,255,255,.3);
                        border-radius: 50%;
                        border-top-color: #fff;
                        animation: spin 1s ease-in-out infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .status-banner {
                        padding: 1rem;
                        border-radius: 10px;
                        text-align: center;
                    }
                    .status-banner.success {
                        background: rgba(34, 197, 94, 0.15);
                        border: 1px solid rgba(34, 197, 94, 0.4);
                        color: #86efac;
                    }
                    .status-banner.error {
                        background: rgba(239, 68, 68, 0.15);
                        border: 1px solid rgba(239, 68, 68, 0.4);
                        color: #fca5a5;
                    }
                    .contact-info {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .info-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .info-card {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        padding: 1.25rem;
                        border-radius: 14px;
                        background: rgba(255, 255, 255, 0.08);
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.2);
                        transition: all 0.3s ease;
                    }
                    .info-card:hover {
                        background: rgba(255, 255, 255, 0.12);
                        transform: translateY(-3px);
                    }
                    .info-icon {
                        font-size: 1.75rem;
                    }
                    .info-card h4 {
                        color: #ffffff;
                        margin-bottom: 0.25rem;
                    }
                    .info-value {
                        color: #a78bfa;
                        font-weight: 600;
                    }
                    .info-description {
                        color: #9ca3af;
                        font-size: 0.85rem;
                    }
                    .why-choose {
                        padding: 1.5rem;
                        border-radius: 14px;
                        background: linear-gradient(135deg, rgba(139, 92, 246, 0.15), rgba(59, 130, 246, 0.15));
                    }
                    .why-choose h4,
                    .social h4 {
                        color: #ffffff;
                        margin-bottom: 1rem;
                    }
                    .why-item {
                        display: flex;
                        gap: 0.75rem;
                        color: #e2e8f0;
                        margin-bottom: 0.75rem;
                    }
                    .why-item .check {
                        color: #22c55e;
                        font-weight: 700;
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .social-link {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 12px;
                        font-size: 1.5rem;
                        text-decoration: none;
                        background: rgba(255, 255, 255, 0.12);
                        transition: all 0.3s ease;
                    }
                    .social-link:hover {
                        background: rgba(139, 92, 246, 0.3);
                        transform: scale(1.1) translateY(-2px);
                    }
                    .site-footer {
                        text-align: center;
                        margin-top: 4rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        color: #9ca3af;
                    }
                    .site-footer span {
                        color: #a855f7;
                    }
                "#}
            </style>
            <div class="contact-container">
                <div class="contact-header" style={reveal_style(visible, 0)}>
                    <h2 class="gradient-text">{"Get In Touch"}</h2>
                    <p>{"Ready to bring your software vision to life? Let's discuss your project and explore how we can innovate together."}</p>
                </div>

                <div class="contact-layout" style={format!("grid-template-columns: {};", form_columns)}>
                    <div class="form-card" style={reveal_style(visible, 200)}>
                        <h3>{"Start Your Project"}</h3>
                        <form class="contact-form" {onsubmit}>
                            <div class="field-row" style={format!("grid-template-columns: {};", pair_columns)}>
                                <div>
                                    <label for="name">{"Full Name *"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        placeholder="John Doe"
                                        required={Field::Name.is_required()}
                                        value={fields.name.clone()}
                                        oninput={on_text(Field::Name)}
                                    />
                                </div>
                                <div>
                                    <label for="email">{"Email Address *"}</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        placeholder="john@company.com"
                                        required={Field::Email.is_required()}
                                        value={fields.email.clone()}
                                        oninput={on_text(Field::Email)}
                                    />
                                </div>
                            </div>
                            <div class="field-row" style={format!("grid-template-columns: {};", pair_columns)}>
                                <div>
                                    <label for="company">{"Company"}</label>
                                    <input
                                        type="text"
                                        id="company"
                                        name="company"
                                        placeholder="Your Company"
                                        value={fields.company.clone()}
                                        oninput={on_text(Field::Company)}
                                    />
                                </div>
                                <div>
                                    <label for="project">{"Project Type"}</label>
                                    <select id="project" name="project" onchange={on_project}>
                                        <option value="" selected={fields.project.is_empty()}>{"Select a project type"}</option>
                                        { for PROJECT_TYPES.iter().map(|kind| html! {
                                            <option key={*kind} value={*kind} selected={fields.project == *kind}>{*kind}</option>
                                        }) }
                                    </select>
                                </div>
                            </div>
                            <div>
                                <label for="message">{"Project Details *"}</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="6"
                                    placeholder="Tell us about your project requirements, timeline, and goals..."
                                    required={Field::Message.is_required()}
                                    value={fields.message.clone()}
                                    oninput={on_message}
                                />
                            </div>
                            <button type="submit" class="submit-button" disabled={submitting}>
                                if submitting {
                                    <>
                                        <span class="loading-spinner"></span>
                                        {"Sending..."}
                                    </>
                                } else {
                                    {"Send Message"}
                                }
                            </button>
                            {
                                match phase.banner() {
                                    Some(Banner::Success) => html! {
                                        <div class="status-banner success">
                                            {"✅ Message sent successfully! We'll get back to you within 4 hours."}
                                        </div>
                                    },
                                    Some(Banner::Error) => html! {
                                        <div class="status-banner error">
                                            {"❌ Something went wrong. Please try again or contact us directly."}
                                        </div>
                                    },
                                    None => html! {},
                                }
                            }
                        </form>
                    </div>

                    <div class="contact-info">
                        <div>
                            <h3>{"Contact Information"}</h3>
                            <div class="info-list">
                                { for CONTACT_INFO.iter().enumerate().map(|(index, (icon, title, value, description))| html! {
                                    <div key={*title} class="info-card" style={reveal_style(visible, stagger_delay(300, 100, index))}>
                                        <div class="info-icon">{*icon}</div>
                                        <div>
                                            <h4>{*title}</h4>
                                            <p class="info-value">{*value}</p>
                                            <p class="info-description">{*description}</p>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="why-choose" style={reveal_style(visible, 700)}>
                            <h4>{"Why Choose CodeX?"}</h4>
                            { for WHY_CHOOSE.iter().map(|item| html! {
                                <div key={*item} class="why-item">
                                    <span class="check">{"✓"}</span>
                                    <span>{*item}</span>
                                </div>
                            }) }
                        </div>

                        <div class="social" style={reveal_style(visible, 800)}>
                            <h4>{"Follow Us"}</h4>
                            <div class="social-links">
                                { for SOCIAL_LINKS.iter().map(|(name, icon, link)| html! {
                                    <a key={*name} class="social-link" href={*link} title={*name}>{*icon}</a>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>

                <footer class="site-footer">
                    <p>
                        {"© 2024 CodeX. All rights reserved. | "}
                        <span>{"Innovating Tomorrow's Technology Today"}</span>
                    </p>
                </footer>
            </div>
        </section>
    }
}
