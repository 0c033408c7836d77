use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::info;
use yew::prelude::*;

use crate::reveal::{reveal_style, stagger_delay, use_reveal, RevealConfig, Trigger};
use crate::viewport::use_viewport;

pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_TICK_MS: u32 = 50;
pub const COUNTER_STEPS: u32 = COUNTER_DURATION_MS / COUNTER_TICK_MS;

const ABOUT_REVEAL: RevealConfig = RevealConfig {
    desktop: Trigger {
        threshold: 0.1,
        root_margin: "50px",
    },
    mobile: Trigger {
        threshold: 0.05,
        root_margin: "100px",
    },
    mobile_fallback_ms: 500,
};

/// Linear count from zero to `target` over [`COUNTER_STEPS`] ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    target: u32,
    step: u32,
}

impl Counter {
    pub const fn new(target: u32) -> Self {
        Self { target, step: 0 }
    }

    pub fn value(&self) -> u32 {
        if self.is_done() {
            self.target
        } else {
            self.target * self.step / COUNTER_STEPS
        }
    }

    pub fn is_done(&self) -> bool {
        self.step >= COUNTER_STEPS
    }

    fn tick(self) -> Self {
        Self {
            step: (self.step + 1).min(COUNTER_STEPS),
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counters {
    pub years: Counter,
    pub projects: Counter,
    pub clients: Counter,
}

impl Default for Counters {
    fn default() -> Self {
        Self {
            years: Counter::new(2),
            projects: Counter::new(12),
            clients: Counter::new(8),
        }
    }
}

impl Counters {
    pub fn is_done(&self) -> bool {
        self.years.is_done() && self.projects.is_done() && self.clients.is_done()
    }
}

pub enum CounterAction {
    Tick,
}

impl Reducible for Counters {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CounterAction::Tick if self.is_done() => self,
            CounterAction::Tick => Rc::new(Counters {
                years: self.years.tick(),
                projects: self.projects.tick(),
                clients: self.clients.tick(),
            }),
        }
    }
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🖥️",
        title: "Full-Stack Development",
        description: "Building comprehensive web and mobile applications with modern technologies and best practices.",
    },
    Feature {
        icon: "⚡",
        title: "High Performance",
        description: "Delivering fast, scalable, and efficient software solutions that exceed client expectations.",
    },
    Feature {
        icon: "🛡️",
        title: "Quality Assurance",
        description: "Rigorous testing and code review processes ensuring the highest reliability and performance standards.",
    },
    Feature {
        icon: "🌐",
        title: "Global Impact",
        description: "Empowering businesses worldwide with innovative software solutions that drive digital transformation.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    let viewport = use_viewport();
    let (section_ref, visible) = use_reveal(ABOUT_REVEAL, "about");
    let counters = use_reducer(Counters::default);
    let ticker = use_mut_ref(|| None::<Interval>);

    // Start counting the first time the section shows up
    {
        let ticker = ticker.clone();
        let dispatcher = counters.dispatcher();
        let done = counters.is_done();
        use_effect_with_deps(
            move |visible| {
                if *visible && !done && ticker.borrow().is_none() {
                    info!("Starting about counters");
                    *ticker.borrow_mut() = Some(Interval::new(COUNTER_TICK_MS, move || {
                        dispatcher.dispatch(CounterAction::Tick);
                    }));
                }
                || ()
            },
            visible,
        );
    }

    {
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |done| {
                if *done {
                    ticker.borrow_mut().take();
                }
                || ()
            },
            counters.is_done(),
        );
    }

    // Clear the interval on unmount
    {
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    ticker.borrow_mut().take();
                }
            },
            (),
        );
    }

    let stats = [
        ("Years Experience", counters.years.value()),
        ("Projects Delivered", counters.projects.value()),
        ("Happy Clients", counters.clients.value()),
    ];

    html! {
        <section id="about" ref={section_ref} class={classes!("about-section", viewport.is_mobile().then(|| "mobile-padding"))}>
            <style>
                {r#"
                    .about-section {
                        padding: 6rem 2rem;
                        position: relative;
                    }
                    .about-section.mobile-padding {
                        padding: 4rem 1rem;
                    }
                    .about-container {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .about-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .about-header h2 {
                        font-size: clamp(2rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .about-header p {
                        color: #cbd5e1;
                        max-width: 700px;
                        margin: 0 auto;
                        line-height: 1.6;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .stats-grid.mobile-grid {
                        grid-template-columns: 1fr;
                        gap: 1rem;
                    }
                    .stat-card {
                        text-align: center;
                        padding: 2rem;
                    }
                    .stat-value {
                        font-size: 3rem;
                        font-weight: 800;
                        color: #a78bfa;
                        margin-bottom: 0.5rem;
                    }
                    .mission {
                        text-align: center;
                        max-width: 800px;
                        margin: 0 auto 4rem;
                    }
                    .mission h3 {
                        font-size: 1.8rem;
                        color: #ffffff;
                        margin-bottom: 1rem;
                    }
                    .mission p {
                        color: #cbd5e1;
                        line-height: 1.7;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                        gap: 1.5rem;
                    }
                    .feature-card {
                        padding: 2rem;
                        text-align: center;
                    }
                    .feature-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .feature-card h4 {
                        color: #ffffff;
                        font-size: 1.2rem;
                        margin-bottom: 0.75rem;
                    }
                    .feature-card p {
                        color: #cbd5e1;
                        line-height: 1.5;
                    }
                "#}
            </style>
            <div class="about-container">
                <div class="about-header" style={reveal_style(visible, 0)}>
                    <h2 class="gradient-text">{"About Our Firm"}</h2>
                    <p>
                        {"We are a passionate software development firm, crafting innovative solutions that bridge the gap between ideas and reality in the digital world."}
                    </p>
                </div>

                <div class={classes!("stats-grid", viewport.is_mobile().then(|| "mobile-grid"))}>
                    { for stats.iter().enumerate().map(|(index, (label, value))| html! {
                        <div key={*label} class="card stat-card" style={reveal_style(visible, stagger_delay(200, 100, index))}>
                            <div class="stat-value">{format!("{}+", value)}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }) }
                </div>

                <div class="mission" style={reveal_style(visible, 400)}>
                    <h3>{"Our Mission"}</h3>
                    <p>
                        {"To revolutionize businesses through innovative software solutions that are scalable, reliable, and user-centric. We believe in transforming ideas into powerful digital experiences that drive growth and success for our clients."}
                    </p>
                </div>

                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div key={feature.title} class="card feature-card" style={reveal_style(visible, stagger_delay(600, 100, index))}>
                            <div class="feature-icon">{feature.icon}</div>
                            <h4>{feature.title}</h4>
                            <p>{feature.description}</p>
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

    fn run_to_completion() -> Vec<Counters> {
        let mut state = Rc::new(Counters::default());
        let mut history = vec![*state];
        for _ in 0..COUNTER_STEPS + 5 {
            state = state.reduce(CounterAction::Tick);
            history.push(*state);
        }
        history
    }

    #[test]
    fn forty_steps_over_two_seconds() {
        assert_eq!(COUNTER_STEPS, 40);
    }

    #[test]
    fn counters_start_at_zero() {
        let counters = Counters::default();
        assert_eq!(counters.years.value(), 0);
        assert_eq!(counters.projects.value(), 0);
        assert_eq!(counters.clients.value(), 0);
        assert!(!counters.is_done());
    }

    #[test]
    fn counters_never_decrease_or_overshoot() {
        let history = run_to_completion();
        for pair in history.windows(2) {
            let (before, after) = (pair[0], pair[1]);
            assert!(after.years.value() >= before.years.value());
            assert!(after.projects.value() >= before.projects.value());
            assert!(after.clients.value() >= before.clients.value());
        }
        for counters in &history {
            assert!(counters.years.value() <= 2);
            assert!(counters.projects.value() <= 12);
            assert!(counters.clients.value() <= 8);
        }
    }

    #[test]
    fn counters_land_exactly_on_target() {
        let mut state = Rc::new(Counters::default());
        for _ in 0..COUNTER_STEPS {
            state = state.reduce(CounterAction::Tick);
        }
        assert!(state.is_done());
        assert_eq!(state.years.value(), 2);
        assert_eq!(state.projects.value(), 12);
        assert_eq!(state.clients.value(), 8);
    }

    #[test]
    fn not_done_one_tick_early() {
        let mut state = Rc::new(Counters::default());
        for _ in 0..COUNTER_STEPS - 1 {
            state = state.reduce(CounterAction::Tick);
        }
        assert!(!state.is_done());
        assert_eq!(state.projects.value(), 11);
    }

    #[test]
    fn finished_counters_ignore_further_ticks() {
        let history = run_to_completion();
        let last = history[COUNTER_STEPS as usize];
        assert!(history[COUNTER_STEPS as usize..].iter().all(|c| *c == last));
    }
}
