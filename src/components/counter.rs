use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_STEPS, VISIBILITY_THRESHOLD};

// Browsers report ratios like 0.4999 for an element sitting exactly on the threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Where a counter is in its one-shot visibility watch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchState {
    Unobserved,
    Observing,
    Triggered,
    Disposed,
}

impl WatchState {
    pub fn observe(&mut self) {
        if *self == WatchState::Unobserved {
            *self = WatchState::Observing;
        }
    }

    /// Feeds one visibility report. Returns `true` exactly once: on the first
    /// report that crosses the threshold while observing.
    pub fn report(&mut self, intersecting: bool, ratio: f64) -> bool {
        if *self == WatchState::Observing
            && intersecting
            && ratio + RATIO_TOLERANCE >= VISIBILITY_THRESHOLD
        {
            *self = WatchState::Triggered;
            true
        } else {
            false
        }
    }

    pub fn dispose(&mut self) {
        *self = WatchState::Disposed;
    }
}

/// Fixed-step count from 0 up to `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    end: f64,
    step: f64,
    accumulated: f64,
    ticks: u32,
    settled: bool,
    disposed: bool,
}

impl CounterAnimation {
    pub fn new(end: f64) -> Self {
        let end = if end.is_finite() { end } else { 0.0 };
        Self {
            end,
            step: end / f64::from(COUNTER_STEPS),
            accumulated: 0.0,
            ticks: 0,
            settled: false,
            disposed: false,
        }
    }

    /// Advances one step and returns the value to display, or `None` once the
    /// animation has settled or been disposed.
    pub fn tick(&mut self) -> Option<f64> {
        if self.settled || self.disposed {
            return None;
        }
        if self.end <= 0.0 {
            self.settled = true;
            return Some(self.end.max(0.0));
        }

        self.ticks += 1;
        self.accumulated += self.step;
        if self.ticks >= COUNTER_STEPS || self.accumulated >= self.end {
            self.settled = true;
            Some(self.end)
        } else {
            Some(self.accumulated.floor())
        }
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }
}

pub fn tick_interval_ms(duration_ms: u32) -> u32 {
    (duration_ms / COUNTER_STEPS).max(1)
}

/// Renders `value` the way en-US `toLocaleString` does: grouped integer part,
/// up to three fraction digits, no trailing zeros.
pub fn format_count(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let whole = format!("{:.0}", rounded.trunc());
    let fraction = ((rounded - rounded.trunc()) * 1000.0).round() as u64;

    let mut out = String::new();
    if value < 0.0 && (whole != "0" || fraction > 0) {
        out.push('-');
    }
    out.push_str(&group_thousands(&whole));
    if fraction > 0 {
        let digits = format!("{:03}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Browser resources owned by one mounted counter.
struct CounterRun {
    watch: WatchState,
    animation: CounterAnimation,
    observer: Option<IntersectionObserver>,
    on_intersect: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
    interval: Option<Interval>,
}

impl CounterRun {
    fn new(end: f64) -> Self {
        Self {
            watch: WatchState::Unobserved,
            animation: CounterAnimation::new(end),
            observer: None,
            on_intersect: None,
            interval: None,
        }
    }

    fn dispose(&mut self) {
        self.watch.dispose();
        self.animation.dispose();
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        // Dropping the interval clears it.
        self.interval.take();
        self.on_intersect.take();
    }
}

fn begin_ticking(run: &Rc<RefCell<CounterRun>>, count: UseStateHandle<f64>, duration_ms: u32) {
    let interval = {
        let run = Rc::clone(run);
        Interval::new(tick_interval_ms(duration_ms), move || {
            let (value, settled) = {
                let mut state = run.borrow_mut();
                let value = state.animation.tick();
                (value, state.animation.is_settled())
            };
            if let Some(value) = value {
                count.set(value);
            }
            if settled {
                if let Some(finished) = run.borrow_mut().interval.take() {
                    // Released outside of its own callback.
                    yew::platform::spawn_local(async move { drop(finished) });
                }
            }
        })
    };
    run.borrow_mut().interval = Some(interval);
}

fn start_watch(
    run: &Rc<RefCell<CounterRun>>,
    target: &Element,
    count: UseStateHandle<f64>,
    duration_ms: u32,
) -> Result<(), JsValue> {
    let on_intersect = {
        let run = Rc::clone(run);
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let mut triggered = false;
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        let mut state = run.borrow_mut();
                        if state.watch.report(entry.is_intersecting(), entry.intersection_ratio()) {
                            triggered = true;
                            break;
                        }
                    }
                }
                if triggered {
                    observer.disconnect();
                    run.borrow_mut().observer = None;
                    begin_ticking(&run, count.clone(), duration_ms);
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);

    let mut state = run.borrow_mut();
    state.watch.observe();
    state.observer = Some(observer);
    state.on_intersect = Some(on_intersect);
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: f64,
    #[prop_or(COUNTER_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let count = use_state(|| 0.0_f64);
    let node = use_node_ref();

    {
        let count = count.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |&(end, duration_ms)| {
                let run = Rc::new(RefCell::new(CounterRun::new(end)));
                match node.cast::<Element>() {
                    Some(target) => {
                        if let Err(err) = start_watch(&run, &target, count.clone(), duration_ms) {
                            warn!("visibility observer unavailable, showing final value: {:?}", err);
                            count.set(end);
                        }
                    }
                    None => {
                        debug!("counter element missing, showing final value");
                        count.set(end);
                    }
                }

                move || run.borrow_mut().dispose()
            },
            (props.end, props.duration_ms),
        );
    }

    html! {
        <span ref={node} class="animated-counter">
            {format!("{}{}{}", props.prefix, format_count(*count), props.suffix)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(end: f64) -> Vec<f64> {
        let mut animation = CounterAnimation::new(end);
        let mut shown = Vec::new();
        while let Some(value) = animation.tick() {
            shown.push(value);
            assert!(shown.len() <= COUNTER_STEPS as usize, "animation never settled");
        }
        shown
    }

    #[test]
    fn counts_up_without_overshoot() {
        for end in [2078.0, 73.0, 60.0, 2500.0, 6.2, 4.9, 1.0, 1_000_000.0] {
            let shown = run_to_end(end);
            assert!(shown.windows(2).all(|w| w[0] <= w[1]), "{end}: {shown:?}");
            assert!(shown.iter().all(|v| *v <= end), "{end} overshot");
            assert_eq!(shown.last().copied(), Some(end));
        }
    }

    #[test]
    fn settles_in_configured_number_of_steps() {
        let shown = run_to_end(2500.0);
        assert_eq!(shown.len(), COUNTER_STEPS as usize);
        assert_eq!(shown[0], (2500.0_f64 / 60.0).floor());
    }

    #[test]
    fn holds_at_target_after_settling() {
        let mut animation = CounterAnimation::new(98.0);
        while animation.tick().is_some() {}
        assert!(animation.is_settled());
        assert_eq!(animation.tick(), None);
    }

    #[test]
    fn non_positive_target_settles_immediately() {
        assert_eq!(run_to_end(0.0), vec![0.0]);
        assert_eq!(run_to_end(-5.0), vec![0.0]);
        assert_eq!(run_to_end(f64::NAN), vec![0.0]);
    }

    #[test]
    fn disposed_animation_stops_writing() {
        let mut animation = CounterAnimation::new(2500.0);
        assert!(animation.tick().is_some());
        animation.dispose();
        assert_eq!(animation.tick(), None);
    }

    #[test]
    fn watch_triggers_once_past_threshold() {
        let mut watch = WatchState::Unobserved;
        assert!(!watch.report(true, 1.0), "reports before observing are ignored");

        watch.observe();
        assert!(!watch.report(false, 0.0));
        assert!(!watch.report(true, 0.3));
        assert!(watch.report(true, 0.5));
        assert_eq!(watch, WatchState::Triggered);
        assert!(!watch.report(true, 1.0));
    }

    #[test]
    fn watch_accepts_ratio_rounded_below_threshold() {
        let mut watch = WatchState::Unobserved;
        watch.observe();
        assert!(watch.report(true, 0.4999));
        assert_eq!(watch, WatchState::Triggered);

        let mut far_off = WatchState::Unobserved;
        far_off.observe();
        assert!(!far_off.report(true, 0.49));
    }

    #[test]
    fn unmount_mid_animation_releases_the_run() {
        let mut run = CounterRun::new(2500.0);
        run.watch.observe();
        assert!(run.watch.report(true, 1.0));
        assert!(run.animation.tick().is_some());

        run.dispose();
        assert_eq!(run.animation.tick(), None);
        assert_eq!(run.watch, WatchState::Disposed);
        assert!(run.observer.is_none());
        assert!(run.interval.is_none());
        assert!(run.on_intersect.is_none());
    }

    #[test]
    fn unmount_before_visible_ignores_late_reports() {
        let mut run = CounterRun::new(73.0);
        run.watch.observe();
        run.dispose();
        assert!(!run.watch.report(true, 1.0));
        assert_eq!(run.animation.tick(), None);
    }

    #[test]
    fn disposed_watch_ignores_reports() {
        let mut watch = WatchState::Unobserved;
        watch.observe();
        watch.dispose();
        assert!(!watch.report(true, 1.0));

        watch.observe();
        assert_eq!(watch, WatchState::Disposed);
    }

    #[test]
    fn tick_interval_spreads_duration() {
        assert_eq!(tick_interval_ms(2000), 33);
        assert_eq!(tick_interval_ms(0), 1);
    }

    #[test]
    fn formats_like_en_us_locale() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(73.0), "73");
        assert_eq!(format_count(2078.0), "2,078");
        assert_eq!(format_count(1_234_567.0), "1,234,567");
        assert_eq!(format_count(6.2), "6.2");
        assert_eq!(format_count(4.9), "4.9");
        assert_eq!(format_count(1234.5678), "1,234.568");
        assert_eq!(format_count(-1500.0), "-1,500");
        assert_eq!(format_count(f64::INFINITY), "0");
        assert_eq!(format_count(2e19), "20,000,000,000,000,000,000");
        assert_eq!(format_count(-0.0001), "0");
    }
}
