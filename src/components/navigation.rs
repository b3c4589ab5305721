use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::lifecycle::Liveness;
use crate::config::SCROLL_THRESHOLD;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled(offset) => NavState {
                scrolled: offset > SCROLL_THRESHOLD,
                ..(*self).clone()
            },
            NavAction::ToggleMenu => NavState {
                menu_open: !self.menu_open,
                ..(*self).clone()
            },
            NavAction::CloseMenu => NavState {
                menu_open: false,
                ..(*self).clone()
            },
        };
        // Same Rc means no re-render for scroll events that don't cross the threshold
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Builds the window scroll callback: sample the offset, dispatch, and go quiet
/// once the navigation has unmounted.
pub fn scroll_handler(
    alive: Liveness,
    offset: impl Fn() -> Option<f64>,
    dispatch: impl Fn(NavAction),
) -> impl FnMut() {
    move || {
        alive.guard(|| {
            if let Some(offset) = offset() {
                dispatch(NavAction::Scrolled(offset));
            }
        });
    }
}

const LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#savings", "Savings"),
    ("#testimonials", "Reviews"),
];

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    #[prop_or_default]
    pub on_get_started: Callback<()>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let nav = use_reducer(NavState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let alive = Liveness::new();
                let window = web_sys::window();
                let listener = window.as_ref().and_then(|window| {
                    let reader = window.clone();
                    let handler = scroll_handler(
                        alive.clone(),
                        move || reader.scroll_y().ok(),
                        move |action| dispatcher.dispatch(action),
                    );
                    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
                    match window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => Some(callback),
                        Err(err) => {
                            warn!("could not attach scroll listener: {:?}", err);
                            None
                        }
                    }
                });

                move || {
                    alive.end();
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let close_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::CloseMenu))
    };

    let get_started = {
        let nav = nav.clone();
        let on_get_started = props.on_get_started.clone();
        Callback::from(move |_: MouseEvent| {
            nav.dispatch(NavAction::CloseMenu);
            on_get_started.emit(());
        })
    };

    let burger_path = if nav.menu_open {
        "M6 18L18 6M6 6l12 12"
    } else {
        "M4 6h16M4 12h16M4 18h16"
    };

    html! {
        <nav class={classes!("top-nav", nav.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">
                    <span class="logo-badge">{"CG"}</span>
                    <span class="logo-text">{"CloseGuard"}</span>
                </a>

                <div class="nav-links">
                    { for LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                    <button class="nav-cta" onclick={get_started.clone()}>{"Get Started Free"}</button>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <svg fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={burger_path} />
                    </svg>
                </button>
            </div>

            if nav.menu_open {
                <div class="mobile-menu">
                    { for LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="mobile-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <button class="nav-cta" onclick={get_started}>{"Get Started Free"}</button>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }

                .logo-badge {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #3B82F6, #9333EA);
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .logo-text {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                }

                .top-nav.scrolled .logo-text,
                .top-nav.scrolled .burger-menu {
                    color: #111827;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: rgba(255, 255, 255, 0.9);
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .top-nav.scrolled .nav-link {
                    color: #374151;
                }

                .nav-link:hover,
                .top-nav.scrolled .nav-link:hover {
                    color: #2563EB;
                }

                .nav-cta {
                    padding: 0.625rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #3B82F6, #9333EA);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }

                .nav-cta:hover {
                    transform: scale(1.05);
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                }

                .burger-menu svg {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin: 0 1.5rem;
                    padding: 1rem 0;
                    border-top: 1px solid #E5E7EB;
                    background: rgba(255, 255, 255, 0.97);
                }

                .mobile-link {
                    color: #374151;
                    font-weight: 500;
                    text-decoration: none;
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn apply(state: NavState, action: NavAction) -> NavState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn defaults_to_top_of_page_with_menu_closed() {
        assert_eq!(NavState::default(), NavState { scrolled: false, menu_open: false });
    }

    #[test]
    fn scrolled_only_past_threshold() {
        let at_top = apply(NavState::default(), NavAction::Scrolled(0.0));
        assert!(!at_top.scrolled);

        let on_threshold = apply(NavState::default(), NavAction::Scrolled(20.0));
        assert!(!on_threshold.scrolled);

        let below_fold = apply(NavState::default(), NavAction::Scrolled(25.0));
        assert!(below_fold.scrolled);

        let back_up = apply(below_fold, NavAction::Scrolled(3.0));
        assert!(!back_up.scrolled);
    }

    #[test]
    fn unchanged_state_keeps_same_rc() {
        let state = Rc::new(NavState::default());
        let next = Rc::clone(&state).reduce(NavAction::Scrolled(5.0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let opened = apply(NavState::default(), NavAction::ToggleMenu);
        assert!(opened.menu_open);

        let closed = apply(opened.clone(), NavAction::ToggleMenu);
        assert!(!closed.menu_open);

        let closed_by_link = apply(opened, NavAction::CloseMenu);
        assert!(!closed_by_link.menu_open);
    }

    #[test]
    fn menu_and_scroll_are_independent() {
        let opened = apply(NavState::default(), NavAction::ToggleMenu);
        let scrolled = apply(opened, NavAction::Scrolled(400.0));
        assert!(scrolled.menu_open);
        assert!(scrolled.scrolled);
    }

    #[test]
    fn scroll_handler_goes_quiet_after_unmount() {
        let offsets = Rc::new(RefCell::new(vec![25.0, 0.0]));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let alive = Liveness::new();

        let mut handler = {
            let offsets = Rc::clone(&offsets);
            let seen = Rc::clone(&seen);
            scroll_handler(
                alive.clone(),
                move || offsets.borrow_mut().pop(),
                move |action| {
                    if let NavAction::Scrolled(offset) = action {
                        seen.borrow_mut().push(offset);
                    }
                },
            )
        };

        handler();
        assert_eq!(*seen.borrow(), vec![0.0]);

        alive.end();
        handler();
        assert_eq!(*seen.borrow(), vec![0.0], "no dispatch after unmount");
        assert_eq!(offsets.borrow().len(), 1, "offset not even sampled");
    }
}
