use yew::prelude::*;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Widths at or below this use the small-viewport layout.
pub const MOBILE_BREAKPOINT: i32 = 768;
/// Widths at or above this get the two-column contact layout.
pub const WIDE_BREAKPOINT: i32 = 1024;
/// Scroll offset past which the navbar switches to its solid background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

const LISTENED_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Viewport metrics shared by every section through one context.
///
/// Only the classes the sections care about are stored, so scrolling inside
/// the same class does not re-render consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub scrolled: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: WIDE_BREAKPOINT,
            scrolled: false,
        }
    }
}

impl Viewport {
    pub fn from_metrics(width: f64, scroll_y: f64) -> Self {
        Self {
            width: width as i32,
            scrolled: scroll_y > SCROLLED_THRESHOLD,
        }
    }

    pub fn measure() -> Option<Self> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        Some(Self::from_metrics(width, scroll_y))
    }

    pub fn is_mobile(&self) -> bool {
        self.width <= MOBILE_BREAKPOINT
    }

    /// The navbar collapses strictly below the breakpoint.
    pub fn is_compact_nav(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    pub fn is_wide(&self) -> bool {
        self.width >= WIDE_BREAKPOINT
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ViewportProviderProps) -> Html {
    let viewport = use_state_eq(|| Viewport::measure().unwrap_or_default());

    {
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let viewport = viewport.clone();
                        move || {
                            if let Some(current) = Viewport::measure() {
                                viewport.set(current);
                            }
                        }
                    });
                    for event in LISTENED_EVENTS {
                        if window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("Could not listen for {} events", event);
                        }
                    }
                    // Initial check
                    if let Some(current) = Viewport::measure() {
                        info!("Viewport width {}px", current.width);
                        viewport.set(current);
                    }
                    Box::new(move || {
                        for event in LISTENED_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    warn!("No window available, viewport metrics stay at defaults");
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<Viewport> context={*viewport}>
            { for props.children.iter() }
        </ContextProvider<Viewport>>
    }
}

/// Current viewport metrics, or the desktop defaults outside a provider.
#[hook]
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_includes_the_breakpoint_but_compact_nav_does_not() {
        let at_breakpoint = Viewport::from_metrics(768.0, 0.0);
        assert!(at_breakpoint.is_mobile());
        assert!(!at_breakpoint.is_compact_nav());

        let narrow = Viewport::from_metrics(767.0, 0.0);
        assert!(narrow.is_mobile());
        assert!(narrow.is_compact_nav());

        let desktop = Viewport::from_metrics(769.0, 0.0);
        assert!(!desktop.is_mobile());
    }

    #[test]
    fn wide_starts_at_1024() {
        assert!(!Viewport::from_metrics(1023.0, 0.0).is_wide());
        assert!(Viewport::from_metrics(1024.0, 0.0).is_wide());
    }

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!Viewport::from_metrics(1200.0, 50.0).scrolled);
        assert!(Viewport::from_metrics(1200.0, 50.5).scrolled);
    }

    #[test]
    fn default_is_desktop_at_top() {
        let viewport = Viewport::default();
        assert!(!viewport.is_mobile());
        assert!(viewport.is_wide());
        assert!(!viewport.scrolled);
    }
}
