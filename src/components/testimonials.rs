use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::reveal::{reveal_style, use_reveal, RevealConfig};

/// Time between automatic advances of the carousel.
pub const ROTATE_MS: u32 = 5_000;

const TESTIMONIALS_REVEAL: RevealConfig = RevealConfig::uniform(0.2, 1_000);

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
    /// Seconds of entrance delay.
    pub delay: f32,
    pub metrics: &'static [(&'static str, &'static str)],
}

pub static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        id: 1,
        name: "Leon Lee",
        position: "Founder & CEO",
        company: "Fengshui",
        content: "CodeX transformed our vision into a beautiful, functional platform. Their expertise in modern web technologies and attention to user experience is exceptional.",
        rating: 5,
        avatar: "/images/clients/leonlee.png",
        delay: 0.0,
        metrics: &[("User Growth", "+180%"), ("Performance", "+95%"), ("Engagement", "+220%")],
    },
    Testimonial {
        id: 2,
        name: "Alex Chen",
        position: "CTO & Co-Founder",
        company: "Mooner Money",
        content: "The financial platform developed by CodeX exceeded all our expectations. Their blockchain integration and security implementation is world-class.",
        rating: 5,
        avatar: "/images/clients/alexchen.png",
        delay: 0.2,
        metrics: &[("Transactions", "+300%"), ("Security", "99.9%"), ("Speed", "< 1s")],
    },
    Testimonial {
        id: 3,
        name: "Sarah Kim",
        position: "Product Director",
        company: "WGMI NFT Marketplace",
        content: "Working with CodeX on our Web3 marketplace was transformative. Their deep understanding of blockchain technology enabled breakthrough user experiences.",
        rating: 5,
        avatar: "/images/clients/sarahkim.png",
        delay: 0.4,
        metrics: &[("Volume", "$5M+"), ("Users", "+400%"), ("Gas Fees", "-40%")],
    },
    Testimonial {
        id: 4,
        name: "Marcus Rodriguez",
        position: "VP of Engineering",
        company: "DeFi Capital",
        content: "CodeX's DeFi solutions have revolutionized our trading platform. Their smart contract development and frontend integration is absolutely outstanding.",
        rating: 5,
        avatar: "/images/clients/marcus.png",
        delay: 0.6,
        metrics: &[("TVL", "$12M+"), ("Uptime", "99.98%"), ("APY", "+85%")],
    },
    Testimonial {
        id: 5,
        name: "Emily Zhang",
        position: "Chief Technology Officer",
        company: "MetaVerse Studios",
        content: "The Web3 gaming platform from CodeX has enabled us to achieve unprecedented player engagement. Truly next-generation blockchain gaming technology.",
        rating: 5,
        avatar: "/images/clients/img.png",
        delay: 0.8,
        metrics: &[("Players", "+500%"), ("Revenue", "+280%"), ("Retention", "+150%")],
    },
];

const TRUST_INDICATORS: [(&str, &str); 4] = [
    ("98%", "Client Satisfaction"),
    ("12+", "Projects Delivered"),
    ("8+", "Global Partners"),
    ("24/7", "Support Available"),
];

/// Index into the testimonial list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }
}

pub enum CarouselAction {
    Advance,
    /// Dot click. Does not reset the rotation timer.
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let index = match action {
            CarouselAction::Advance if self.len == 0 => return self,
            CarouselAction::Advance => (self.index + 1) % self.len,
            CarouselAction::Select(index) if index < self.len => index,
            CarouselAction::Select(_) => return self,
        };
        Rc::new(Self { index, ..*self })
    }
}

/// Five star slots, `rating` of them filled.
pub fn stars(rating: u8) -> [bool; 5] {
    std::array::from_fn(|slot| slot < rating as usize)
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let (section_ref, visible) = use_reveal(TESTIMONIALS_REVEAL, "testimonials");
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(ROTATE_MS, move || {
                    dispatcher.dispatch(CarouselAction::Advance);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let current = &TESTIMONIALS[carousel.index];

    html! {
        <section id="testimonials" ref={section_ref} class="testimonials-section">
            <style>
                {r#"
                    .testimonials-section {
                        padding: 6rem 2rem;
                        position: relative;
                    }
                    .testimonials-container {
                        max-width: 1000px;
                        margin: 0 auto;
                    }
                    .testimonials-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .testimonials-header h2 {
                        font-size: clamp(2rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .testimonials-header p {
                        color: #cbd5e1;
                    }
                    .testimonial-card {
                        position: relative;
                        padding: 2.5rem;
                        border-radius: 24px;
                        background: rgba(255, 255, 255, 0.06);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(10px);
                    }
                    .quote-mark {
                        font-size: 2.5rem;
                        color: #a855f7;
                        text-align: center;
                    }
                    .quote {
                        font-size: 1.15rem;
                        font-style: italic;
                        color: #e2e8f0;
                        line-height: 1.7;
                        text-align: center;
                        margin-bottom: 1.5rem;
                    }
                    .stars {
                        display: flex;
                        justify-content: center;
                        gap: 0.25rem;
                        margin-bottom: 1.5rem;
                        font-size: 1.25rem;
                    }
                    .star.filled {
                        color: #fbbf24;
                    }
                    .star {
                        color: rgba(251, 191, 36, 0.3);
                    }
                    .client {
                        text-align: center;
                        margin-bottom: 1.5rem;
                    }
                    .client img {
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        object-fit: cover;
                        margin-bottom: 0.75rem;
                    }
                    .client h4 {
                        color: #ffffff;
                        font-size: 1.1rem;
                    }
                    .client .position {
                        color: #a78bfa;
                        font-size: 0.9rem;
                    }
                    .client .company {
                        color: #9ca3af;
                        font-size: 0.85rem;
                    }
                    .testimonial-metrics {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                    }
                    .testimonial-metrics .metric {
                        text-align: center;
                    }
                    .carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        margin: 2rem 0;
                    }
                    .dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.3);
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .dot.active {
                        background: #8b5cf6;
                        transform: scale(1.3);
                    }
                    .trust-indicators {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .trust-indicator {
                        text-align: center;
                    }
                    .trust-value {
                        font-size: 2rem;
                        font-weight: 800;
                        color: #a78bfa;
                    }
                    .trust-label {
                        color: #9ca3af;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <div class="testimonials-container">
                <div class="testimonials-header" style={reveal_style(visible, 0)}>
                    <h2 class="gradient-text">{"Client Testimonials"}</h2>
                    <p>{"Hear from industry leaders who have partnered with us to achieve breakthrough innovations."}</p>
                </div>

                <div class="testimonial-card" style={reveal_style(visible, (current.delay * 1000.0) as u32)}>
                    <div class="quote-mark">{"\u{201C}"}</div>
                    <p class="quote">{current.content}</p>
                    <div class="stars">
                        { for stars(current.rating).into_iter().map(|filled| html! {
                            <span class={classes!("star", filled.then(|| "filled"))}>{"★"}</span>
                        }) }
                    </div>
                    <div class="client">
                        <img src={current.avatar} alt={current.name} />
                        <h4>{current.name}</h4>
                        <p class="position">{current.position}</p>
                        <p class="company">{current.company}</p>
                    </div>
                    <div class="testimonial-metrics">
                        { for current.metrics.iter().map(|(label, value)| html! {
                            <div key={*label} class="metric">
                                <div class="metric-label">{*label}</div>
                                <div class="metric-value">{*value}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="carousel-dots">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Select(index)))
                        };
                        html! {
                            <button
                                key={testimonial.id}
                                class={classes!("dot", (index == carousel.index).then(|| "active"))}
                                aria-label={format!("Show testimonial from {}", testimonial.name)}
                                {onclick}
                            />
                        }
                    }) }
                </div>

                <div class="trust-indicators" style={reveal_style(visible, 400)}>
                    { for TRUST_INDICATORS.iter().map(|(value, label)| html! {
                        <div key={*label} class="trust-indicator">
                            <div class="trust-value">{*value}</div>
                            <div class="trust-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(carousel: Carousel, actions: impl IntoIterator<Item = CarouselAction>) -> Carousel {
        let mut state = Rc::new(carousel);
        for action in actions {
            state = state.reduce(action);
        }
        *state
    }

    #[test]
    fn starts_at_first_testimonial() {
        assert_eq!(Carousel::new(TESTIMONIALS.len()).index, 0);
    }

    #[test]
    fn five_advances_wrap_modulo_length() {
        let len = TESTIMONIALS.len();
        let carousel = apply(Carousel::new(len), (0..5).map(|_| CarouselAction::Advance));
        assert_eq!(carousel.index, 5 % len);

        let short = apply(Carousel::new(3), (0..5).map(|_| CarouselAction::Advance));
        assert_eq!(short.index, 2);
    }

    #[test]
    fn select_jumps_immediately() {
        let carousel = apply(
            Carousel::new(5),
            [CarouselAction::Advance, CarouselAction::Select(3)],
        );
        assert_eq!(carousel.index, 3);
        assert_eq!(TESTIMONIALS[carousel.index].name, "Marcus Rodriguez");
    }

    #[test]
    fn rotation_continues_from_manual_selection() {
        let carousel = apply(
            Carousel::new(5),
            [CarouselAction::Select(4), CarouselAction::Advance],
        );
        assert_eq!(carousel.index, 0);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let carousel = apply(Carousel::new(5), [CarouselAction::Select(9)]);
        assert_eq!(carousel.index, 0);
    }

    #[test]
    fn empty_carousel_does_not_panic() {
        let carousel = apply(Carousel::new(0), [CarouselAction::Advance]);
        assert_eq!(carousel.index, 0);
    }

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(stars(5), [true; 5]);
        assert_eq!(stars(3), [true, true, true, false, false]);
        assert_eq!(stars(0), [false; 5]);
    }

    #[test]
    fn ratings_are_within_five() {
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= 5));
    }
}
