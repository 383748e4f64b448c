use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const WIDE_BREAKPOINT: f64 = 1024.0;
pub const MEDIUM_BREAKPOINT: f64 = 640.0;
/// Delay before the first measurement so the track has been laid out.
const INITIAL_MEASURE_MS: u32 = 100;

pub fn cards_per_view(viewport_width: f64) -> usize {
    if viewport_width >= WIDE_BREAKPOINT {
        3
    } else if viewport_width >= MEDIUM_BREAKPOINT {
        2
    } else {
        1
    }
}

/// `"24px"` -> `Some(24.0)`; `"normal"` and other keywords are `None`.
/// Two-value gaps (`"24px 16px"`) read the first value.
pub fn parse_px(value: &str) -> Option<f64> {
    value.split_whitespace().next()?.trim_end_matches("px").parse().ok()
}

pub fn track_offset(card_width: f64, gap: f64, index: usize) -> f64 {
    (card_width + gap) * index as f64
}

/// Anything that changes card widths: position, breakpoint, or the viewport
/// itself (cards shrink within a breakpoint too).
fn measure_deps(state: &CarouselState, viewport_width: f64) -> (usize, usize, u64) {
    (state.current_index(), state.cards_per_view(), viewport_width.to_bits())
}

pub enum CarouselAction {
    Advance,
    Retreat,
    JumpTo(usize),
    Resize(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    total_cards: usize,
    cards_per_view: usize,
}

impl CarouselState {
    pub fn new(total_cards: usize, viewport_width: f64) -> Self {
        Self {
            current_index: 0,
            total_cards,
            cards_per_view: cards_per_view(viewport_width),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn cards_per_view(&self) -> usize {
        self.cards_per_view
    }

    pub fn max_index(&self) -> usize {
        self.total_cards.saturating_sub(self.cards_per_view)
    }

    pub fn advance(&mut self) {
        if self.current_index < self.max_index() {
            self.current_index += 1;
        }
    }

    pub fn retreat(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        self.current_index = index.min(self.max_index());
    }

    pub fn resize(&mut self, viewport_width: f64) {
        self.cards_per_view = cards_per_view(viewport_width);
        self.current_index = self.current_index.min(self.max_index());
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_index == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current_index == self.max_index()
    }

    /// One dot per reachable page.
    pub fn dot_count(&self) -> usize {
        self.max_index() + 1
    }

    pub fn is_dot_active(&self, dot: usize) -> bool {
        dot == self.current_index
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Advance => next.advance(),
            CarouselAction::Retreat => next.retreat(),
            CarouselAction::JumpTo(index) => next.jump_to(index),
            CarouselAction::Resize(width) => next.resize(width),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct TrackMetrics {
    card_width: f64,
    gap: f64,
}

fn measure_track(track: &NodeRef) -> Option<TrackMetrics> {
    let track = track.cast::<HtmlElement>()?;
    let card_width = track
        .first_element_child()
        .and_then(|card| card.dyn_into::<HtmlElement>().ok())
        .map(|card| card.offset_width() as f64)?;
    let gap = web_sys::window()
        .and_then(|window| window.get_computed_style(&track).ok().flatten())
        .and_then(|style| style.get_property_value("gap").ok())
        .and_then(|gap| parse_px(&gap))
        .unwrap_or(0.0);
    Some(TrackMetrics { card_width, gap })
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    /// Prefix for element ids, e.g. `comparison` -> `comparison-track`.
    pub name: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Renders nothing when there are no cards.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    if props.children.is_empty() {
        log::debug!("Carousel {} has no cards, skipping", props.name);
        return html! {};
    }

    html! {
        <CarouselTrack name={props.name.clone()} label={props.label.clone()}>
            { for props.children.iter() }
        </CarouselTrack>
    }
}

#[function_component(CarouselTrack)]
fn carousel_track(props: &CarouselProps) -> Html {
    let total_cards = props.children.len();
    let (viewport_width, _) = use_window_size();
    let state = use_reducer(|| CarouselState::new(total_cards, viewport_width));
    let track = use_node_ref();
    let metrics = use_state_eq(TrackMetrics::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |width: &f64| {
                dispatcher.dispatch(CarouselAction::Resize(*width));
                || ()
            },
            viewport_width,
        );
    }

    {
        let track = track.clone();
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(INITIAL_MEASURE_MS, move || {
                    if let Some(measured) = measure_track(&track) {
                        metrics.set(measured);
                    }
                });
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let track = track.clone();
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(measured) = measure_track(&track) {
                    metrics.set(measured);
                }
                || ()
            },
            measure_deps(&state, viewport_width),
        );
    }

    let offset = track_offset(metrics.card_width, metrics.gap, state.current_index());
    let prev = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Retreat))
    };
    let next = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Advance))
    };

    html! {
        <div class="carousel" data-testid={format!("carousel-{}", props.name)} aria-label={props.label.clone()}>
            <div class="carousel-viewport">
                <div
                    id={format!("{}-track", props.name)}
                    class="carousel-track"
                    ref={track}
                    style={format!("transform: translateX(-{}px);", offset)}
                >
                    { for props.children.iter().enumerate().map(|(index, card)| html! {
                        <div class="carousel-card" data-index={index.to_string()}>{card}</div>
                    }) }
                </div>
            </div>
            <div class="carousel-controls">
                <button
                    id={format!("{}-prev", props.name)}
                    type="button"
                    class="carousel-prev"
                    aria-label="Previous"
                    disabled={state.prev_disabled()}
                    onclick={prev}
                >{"‹"}</button>
                <div id={format!("{}-dots", props.name)} class="carousel-dots">
                    { for (0..state.dot_count()).map(|dot| {
                        let active = state.is_dot_active(dot);
                        let dispatcher = state.dispatcher();
                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "carousel-dot",
                                    if active { "active bg-emerald-500" } else { "bg-slate-300" }
                                )}
                                data-index={dot.to_string()}
                                aria-label={format!("Go to slide {}", dot + 1)}
                                aria-current={active.then_some("true")}
                                onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::JumpTo(dot)))}
                            />
                        }
                    }) }
                </div>
                <button
                    id={format!("{}-next", props.name)}
                    type="button"
                    class="carousel-next"
                    aria-label="Next"
                    disabled={state.next_disabled()}
                    onclick={next}
                >{"›"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: [f64; 7] = [320.0, 639.0, 640.0, 800.0, 1023.0, 1024.0, 1920.0];

    fn assert_invariant(state: &CarouselState, total: usize) {
        let max = total.saturating_sub(state.cards_per_view());
        assert!((1..=3).contains(&state.cards_per_view()));
        assert!(state.current_index() <= max, "{:?}", state);
        assert_eq!(state.max_index(), max);
    }

    #[test]
    fn breakpoints() {
        assert_eq!(cards_per_view(320.0), 1);
        assert_eq!(cards_per_view(639.9), 1);
        assert_eq!(cards_per_view(640.0), 2);
        assert_eq!(cards_per_view(1023.0), 2);
        assert_eq!(cards_per_view(1024.0), 3);
        assert_eq!(cards_per_view(2560.0), 3);
    }

    #[test]
    fn advance_stops_at_max_index() {
        let mut state = CarouselState::new(5, 1280.0);
        for _ in 0..10 {
            state.advance();
        }
        assert_eq!(state.current_index(), 2);
        assert!(state.next_disabled());
        assert!(!state.prev_disabled());
    }

    #[test]
    fn retreat_stops_at_zero() {
        let mut state = CarouselState::new(5, 500.0);
        state.advance();
        state.retreat();
        state.retreat();
        assert_eq!(state.current_index(), 0);
        assert!(state.prev_disabled());
    }

    #[test]
    fn jump_clamps_to_max_index() {
        let mut state = CarouselState::new(6, 800.0);
        state.jump_to(3);
        assert_eq!(state.current_index(), 3);
        state.jump_to(42);
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn resize_clamps_index_down() {
        let mut state = CarouselState::new(6, 320.0);
        state.jump_to(5);
        assert_eq!(state.current_index(), 5);
        state.resize(1440.0);
        assert_eq!(state.cards_per_view(), 3);
        assert_eq!(state.current_index(), 3);
        state.resize(320.0);
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn fewer_cards_than_view_pins_to_zero() {
        let mut state = CarouselState::new(2, 1440.0);
        assert_eq!(state.max_index(), 0);
        state.advance();
        state.jump_to(1);
        assert_eq!(state.current_index(), 0);
        assert!(state.prev_disabled());
        assert!(state.next_disabled());
        assert_eq!(state.dot_count(), 1);
    }

    #[test]
    fn invariant_holds_across_operation_sequences() {
        for total in 0..8 {
            for &start in &WIDTHS {
                let mut state = CarouselState::new(total, start);
                assert_invariant(&state, total);
                for (step, &width) in WIDTHS.iter().cycle().take(40).enumerate() {
                    match step % 5 {
                        0 => state.advance(),
                        1 => state.jump_to(step),
                        2 => state.resize(width),
                        3 => state.retreat(),
                        _ => state.advance(),
                    }
                    assert_invariant(&state, total);
                }
            }
        }
    }

    #[test]
    fn only_current_dot_is_active() {
        let mut state = CarouselState::new(7, 700.0);
        state.jump_to(2);
        let active: Vec<usize> = (0..state.dot_count()).filter(|&dot| state.is_dot_active(dot)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn reducer_returns_same_state_on_noop() {
        let state = Rc::new(CarouselState::new(3, 1440.0));
        let after = state.clone().reduce(CarouselAction::Advance);
        assert!(Rc::ptr_eq(&state, &after));

        let state = Rc::new(CarouselState::new(5, 1440.0));
        let after = state.reduce(CarouselAction::Advance);
        assert_eq!(after.current_index(), 1);
    }

    #[test]
    fn offset_and_gap_parsing() {
        assert_eq!(track_offset(300.0, 24.0, 0), 0.0);
        assert_eq!(track_offset(300.0, 24.0, 2), 648.0);
        assert_eq!(parse_px("24px"), Some(24.0));
        assert_eq!(parse_px(" 1.5px "), Some(1.5));
        assert_eq!(parse_px("24px 24px"), Some(24.0));
        assert_eq!(parse_px("normal"), None);
        assert_eq!(parse_px(""), None);
    }

    #[test]
    fn resize_within_breakpoint_remeasures_offset() {
        let state = Rc::new(CarouselState::new(6, 1300.0)).reduce(CarouselAction::JumpTo(2));
        let resized = state.clone().reduce(CarouselAction::Resize(1100.0));
        assert!(Rc::ptr_eq(&state, &resized));
        assert_ne!(measure_deps(&state, 1300.0), measure_deps(&resized, 1100.0));

        let wide = track_offset(400.0, 24.0, resized.current_index());
        let narrow = track_offset(334.0, 24.0, resized.current_index());
        assert_eq!(wide, 848.0);
        assert_eq!(narrow, 716.0);
    }
}
