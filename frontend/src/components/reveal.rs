//! Scroll-triggered reveals: the generic fade-in wrapper and the staged
//! roadmap animation.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::observer::{use_first_visible, ObserverOptions};

const REVEAL_AT: ObserverOptions = ObserverOptions::threshold(0.1);

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_first_visible(node.clone(), REVEAL_AT);

    html! {
        <div ref={node} class={classes!("fade-in", visible.then_some("visible"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Milestone {
    pub period: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub dot_delay_ms: u32,
    pub card_delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoadmapPart {
    Dot,
    Card,
}

/// One pending reveal: `part` of milestone `index` after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub index: usize,
    pub part: RoadmapPart,
    pub delay_ms: u32,
}

/// Every dot and card reveal, in firing order.
pub fn reveal_schedule(milestones: &[Milestone]) -> Vec<RevealStep> {
    let mut steps: Vec<RevealStep> = milestones
        .iter()
        .enumerate()
        .flat_map(|(index, milestone)| {
            [
                RevealStep { index, part: RoadmapPart::Dot, delay_ms: milestone.dot_delay_ms },
                RevealStep { index, part: RoadmapPart::Card, delay_ms: milestone.card_delay_ms },
            ]
        })
        .collect();
    steps.sort_by_key(|step| step.delay_ms);
    steps
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoadmapState {
    dots: Vec<bool>,
    cards: Vec<bool>,
}

impl RoadmapState {
    pub fn new(len: usize) -> Self {
        Self {
            dots: vec![false; len],
            cards: vec![false; len],
        }
    }

    pub fn is_animated(&self, index: usize, part: RoadmapPart) -> bool {
        let flags = match part {
            RoadmapPart::Dot => &self.dots,
            RoadmapPart::Card => &self.cards,
        };
        flags.get(index).copied().unwrap_or(false)
    }
}

impl Reducible for RoadmapState {
    type Action = RevealStep;

    fn reduce(self: Rc<Self>, step: Self::Action) -> Rc<Self> {
        if self.is_animated(step.index, step.part) {
            return self;
        }
        let mut next = (*self).clone();
        let flags = match step.part {
            RoadmapPart::Dot => &mut next.dots,
            RoadmapPart::Card => &mut next.cards,
        };
        match flags.get_mut(step.index) {
            Some(flag) => *flag = true,
            None => return self,
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct RoadmapProps {
    pub milestones: Vec<Milestone>,
}

#[function_component(Roadmap)]
pub fn roadmap(props: &RoadmapProps) -> Html {
    let container = use_node_ref();
    let visible = use_first_visible(container.clone(), REVEAL_AT);
    let state = {
        let len = props.milestones.len();
        use_reducer(move || RoadmapState::new(len))
    };
    let pending = use_mut_ref(Vec::<Timeout>::new);

    {
        let dispatcher = state.dispatcher();
        let schedule = reveal_schedule(&props.milestones);
        use_effect_with_deps(
            move |visible: &bool| {
                if *visible {
                    let timers = schedule.into_iter().map(|step| {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(step.delay_ms, move || dispatcher.dispatch(step))
                    });
                    pending.borrow_mut().extend(timers);
                }
                move || pending.borrow_mut().clear()
            },
            visible,
        );
    }

    html! {
        <div id="roadmap-container" class="roadmap" ref={container}>
            { for props.milestones.iter().enumerate().map(|(index, milestone)| html! {
                <div class="roadmap-step">
                    <span
                        class={classes!("roadmap-dot", state.is_animated(index, RoadmapPart::Dot).then_some("animate"))}
                        data-delay={milestone.dot_delay_ms.to_string()}
                    ></span>
                    <div
                        class={classes!("roadmap-card", state.is_animated(index, RoadmapPart::Card).then_some("animate"))}
                        data-delay={milestone.card_delay_ms.to_string()}
                    >
                        <p class="roadmap-period">{milestone.period}</p>
                        <h4>{milestone.title}</h4>
                        <p>{milestone.body}</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(dot_delay_ms: u32, card_delay_ms: u32) -> Milestone {
        Milestone {
            period: "Q1",
            title: "Baseline",
            body: "Measure",
            dot_delay_ms,
            card_delay_ms,
        }
    }

    #[test]
    fn schedule_is_ordered_by_delay() {
        let steps = reveal_schedule(&[milestone(300, 450), milestone(0, 150)]);
        let delays: Vec<u32> = steps.iter().map(|step| step.delay_ms).collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
        assert_eq!(steps[0], RevealStep { index: 1, part: RoadmapPart::Dot, delay_ms: 0 });
    }

    #[test]
    fn reveal_marks_only_the_targeted_part() {
        let state = Rc::new(RoadmapState::new(2));
        let state = state.reduce(RevealStep { index: 1, part: RoadmapPart::Card, delay_ms: 0 });
        assert!(state.is_animated(1, RoadmapPart::Card));
        assert!(!state.is_animated(1, RoadmapPart::Dot));
        assert!(!state.is_animated(0, RoadmapPart::Card));
    }

    #[test]
    fn repeated_or_out_of_range_reveals_are_noops() {
        let step = RevealStep { index: 0, part: RoadmapPart::Dot, delay_ms: 0 };
        let state = Rc::new(RoadmapState::new(1)).reduce(step);
        let again = state.clone().reduce(step);
        assert!(Rc::ptr_eq(&state, &again));

        let outside = state.clone().reduce(RevealStep { index: 9, ..step });
        assert!(Rc::ptr_eq(&state, &outside));
        assert!(!state.is_animated(9, RoadmapPart::Dot));
    }
}
