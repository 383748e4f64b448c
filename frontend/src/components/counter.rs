use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::observer::{use_first_visible, ObserverOptions};

pub const DURATION_MS: f64 = 2_000.0;
const FRAME_MS: u32 = 16;
const TRIGGER: ObserverOptions = ObserverOptions::threshold(0.3);

/// Cubic ease-out over `progress` in `[0, 1]`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub decimals: usize,
}

impl CounterSpec {
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = (elapsed_ms / DURATION_MS).clamp(0.0, 1.0);
        self.target * ease_out_cubic(progress)
    }

    pub fn format(&self, value: f64) -> String {
        if self.decimals > 0 {
            format!("{:.*}", self.decimals, value)
        } else {
            group_thousands(value.round() as i64)
        }
    }

    pub fn text_at(&self, elapsed_ms: f64) -> String {
        self.format(self.value_at(elapsed_ms))
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= DURATION_MS
    }
}

/// Guards a counter against playing more than once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayedFlag(bool);

impl PlayedFlag {
    /// `true` if the animation may start now; later calls return `false`.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: f64,
    #[prop_or_default]
    pub decimals: usize,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let spec = CounterSpec {
        target: props.target,
        decimals: props.decimals,
    };
    let node = use_node_ref();
    let visible = use_first_visible(node.clone(), TRIGGER);
    let text = use_state_eq(|| spec.text_at(0.0));
    let played = use_mut_ref(PlayedFlag::default);
    let frames = use_mut_ref(|| None::<Interval>);

    {
        let text = text.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                if *visible && played.borrow_mut().start() {
                    let started = Date::now();
                    let ticker = frames.clone();
                    let interval = Interval::new(FRAME_MS, move || {
                        let elapsed = Date::now() - started;
                        text.set(spec.text_at(elapsed));
                        if spec.is_finished(elapsed) {
                            // The interval can't drop itself from inside its own tick.
                            let ticker = ticker.clone();
                            spawn_local(async move {
                                ticker.borrow_mut().take();
                            });
                        }
                    });
                    frames.borrow_mut().replace(interval);
                }
                move || {
                    frames.borrow_mut().take();
                }
            },
            visible,
        );
    }

    html! {
        <span ref={node} class="counter" data-target={props.target.to_string()} data-decimals={props.decimals.to_string()}>
            {(*text).clone()}{props.suffix.clone()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn integer_counter_ends_grouped() {
        let spec = CounterSpec { target: 1234.0, decimals: 0 };
        assert_eq!(spec.text_at(0.0), "0");
        assert_eq!(spec.text_at(DURATION_MS), "1,234");
        assert_eq!(spec.text_at(DURATION_MS * 3.0), "1,234");
    }

    #[test]
    fn decimal_counter_ends_fixed() {
        let spec = CounterSpec { target: 12.5, decimals: 1 };
        assert_eq!(spec.text_at(0.0), "0.0");
        assert_eq!(spec.text_at(DURATION_MS), "12.5");
    }

    #[test]
    fn elapsed_is_clamped() {
        let spec = CounterSpec { target: 100.0, decimals: 0 };
        assert_eq!(spec.value_at(-50.0), 0.0);
        assert_eq!(spec.value_at(10_000.0), 100.0);
        assert!(!spec.is_finished(1_999.0));
        assert!(spec.is_finished(2_000.0));
    }

    #[test]
    fn value_is_monotonic() {
        let spec = CounterSpec { target: 500.0, decimals: 0 };
        let mut last = 0.0;
        for step in 0..=40 {
            let value = spec.value_at(step as f64 * 50.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45210), "-45,210");
    }

    #[test]
    fn counter_plays_once() {
        let mut played = PlayedFlag::default();
        assert!(played.start());
        assert!(!played.start());
        assert!(!played.start());
    }
}
