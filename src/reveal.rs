//! Reveal-on-scroll shared by every section.
//!
//! A section asks [`use_reveal`] for a node ref and a visibility flag. The
//! flag starts false, flips to true the first time the node intersects the
//! viewport (or when the small-viewport fallback timer fires) and never goes
//! back. Children key their opacity/translate transitions off that single
//! flag with [`reveal_style`].

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::viewport::use_viewport;

/// Observer parameters for one device class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trigger {
    pub threshold: f64,
    pub root_margin: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub desktop: Trigger,
    pub mobile: Trigger,
    /// Forces the reveal on small viewports where intersection timing is unreliable.
    pub mobile_fallback_ms: u32,
}

impl RevealConfig {
    pub const fn uniform(threshold: f64, mobile_fallback_ms: u32) -> Self {
        let trigger = Trigger {
            threshold,
            root_margin: "0px",
        };
        Self {
            desktop: trigger,
            mobile: trigger,
            mobile_fallback_ms,
        }
    }

    pub fn trigger_for(&self, is_mobile: bool) -> Trigger {
        if is_mobile {
            self.mobile
        } else {
            self.desktop
        }
    }

    /// Delay of the forced reveal to arm, if any. Nothing is armed on wide
    /// viewports or once the section has already been revealed.
    pub fn fallback_plan(&self, is_mobile: bool, already_fired: bool) -> Option<u32> {
        (is_mobile && !already_fired).then_some(self.mobile_fallback_ms)
    }
}

/// One-way switch behind the visibility flag.
#[derive(Debug, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    /// Returns true only for the call that flips the latch.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }
}

/// Delay for the `index`-th element of a staggered group.
pub fn stagger_delay(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    base_ms + step_ms * index as u32
}

/// Inline transition style for an element gated on a reveal flag.
pub fn reveal_style(visible: bool, delay_ms: u32) -> String {
    let (opacity, offset) = if visible { (1, 0) } else { (0, 30) };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity 0.8s ease-out {delay_ms}ms, transform 0.8s ease-out {delay_ms}ms;"
    )
}

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(node: &NodeRef, trigger: Trigger, on_visible: Rc<dyn Fn()>) -> Option<Observation> {
    let Some(element) = node.cast::<Element>() else {
        warn!("Reveal target is not mounted, skipping observer");
        return None;
    };

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if intersecting {
                on_visible();
                observer.disconnect();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(trigger.threshold));
    init.set_root_margin(trigger.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some(Observation {
                observer,
                _callback: callback,
            })
        }
        Err(_) => {
            warn!("IntersectionObserver unavailable, relying on fallback");
            None
        }
    }
}

/// Visibility flag for the section rendered at the returned node ref.
#[hook]
pub fn use_reveal(config: RevealConfig, section: &'static str) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let latch = use_mut_ref(RevealLatch::default);
    let is_mobile = use_viewport().is_mobile();

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |is_mobile| {
                let is_mobile = *is_mobile;
                let already_fired = latch.borrow().is_fired();

                let reveal: Rc<dyn Fn()> = Rc::new(move || {
                    if latch.borrow_mut().fire() {
                        info!("Revealing {} section", section);
                        visible.set(true);
                    }
                });

                let observation = if already_fired {
                    None
                } else {
                    observe(&node, config.trigger_for(is_mobile), reveal.clone())
                };

                let fallback = config.fallback_plan(is_mobile, already_fired).map(|delay| {
                    let reveal = reveal.clone();
                    Timeout::new(delay, move || reveal())
                });

                move || {
                    drop(observation);
                    drop(fallback);
                }
            },
            is_mobile,
        );
    }

    (node, *visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPLIT: RevealConfig = RevealConfig {
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

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_fired());
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
        assert!(latch.is_fired());
    }

    #[test]
    fn fallback_only_on_small_viewports() {
        assert_eq!(SPLIT.fallback_plan(true, false), Some(500));
        assert_eq!(SPLIT.fallback_plan(false, false), None);
    }

    #[test]
    fn fallback_not_rearmed_after_reveal() {
        let mut latch = RevealLatch::default();
        assert!(SPLIT.fallback_plan(true, latch.is_fired()).is_some());

        latch.fire();
        assert_eq!(SPLIT.fallback_plan(true, latch.is_fired()), None);
    }

    #[test]
    fn fallback_delays_stay_within_window() {
        for config in [SPLIT, RevealConfig::uniform(0.2, 1_000)] {
            let delay = config.fallback_plan(true, false).unwrap();
            assert!((500..=1_000).contains(&delay));
        }
    }

    #[test]
    fn trigger_follows_device_class() {
        assert_eq!(SPLIT.trigger_for(true).threshold, 0.05);
        assert_eq!(SPLIT.trigger_for(true).root_margin, "100px");
        assert_eq!(SPLIT.trigger_for(false).threshold, 0.1);
        assert_eq!(SPLIT.trigger_for(false).root_margin, "50px");
    }

    #[test]
    fn uniform_uses_same_trigger_everywhere() {
        let config = RevealConfig::uniform(0.2, 1000);
        assert_eq!(config.trigger_for(true), config.trigger_for(false));
        assert_eq!(config.trigger_for(true).root_margin, "0px");
    }

    #[test]
    fn stagger_grows_by_step() {
        assert_eq!(stagger_delay(200, 100, 0), 200);
        assert_eq!(stagger_delay(200, 100, 3), 500);
    }

    #[test]
    fn reveal_style_switches_on_flag() {
        let hidden = reveal_style(false, 300);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateY(30px)"));
        assert!(hidden.contains("300ms"));

        let shown = reveal_style(true, 300);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translateY(0px)"));
    }
}
