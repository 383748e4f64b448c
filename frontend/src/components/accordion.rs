use yew::prelude::*;

/// Which panel of the group is open, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// Closes every panel, then opens `index` unless it was the open one.
    pub fn toggle(self, index: usize) -> Self {
        let was_open = self.open == Some(index);
        Self {
            open: (!was_open).then_some(index),
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    #[cfg(test)]
    pub fn open_count(&self, panels: usize) -> usize {
        (0..panels).filter(|&index| self.is_open(index)).count()
    }
}

#[derive(Clone, PartialEq)]
pub struct AccordionItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub items: Vec<AccordionItem>,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let state = use_state(AccordionState::default);

    html! {
        <div class="accordion">
            { for props.items.iter().enumerate().map(|(index, item)| {
                let is_open = state.is_open(index);
                let onclick = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        state.set((*state).toggle(index));
                    })
                };
                let panel_id = format!("accordion-panel-{}", index);
                html! {
                    <div class="accordion-item">
                        <button
                            type="button"
                            class={classes!("accordion-trigger", is_open.then_some("open"))}
                            aria-expanded={if is_open { "true" } else { "false" }}
                            aria-controls={panel_id.clone()}
                            {onclick}
                        >
                            <span>{item.question}</span>
                            <span class="accordion-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        <div id={panel_id} class={classes!("accordion-content", is_open.then_some("open"))}>
                            <p>{item.answer}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_closed_trigger_opens_it() {
        let state = AccordionState::default().toggle(2);
        assert!(state.is_open(2));
        assert!(!state.is_open(0));
    }

    #[test]
    fn clicking_open_trigger_closes_everything() {
        let state = AccordionState::default().toggle(1).toggle(1);
        assert_eq!(state.open_count(5), 0);
    }

    #[test]
    fn opening_another_closes_the_previous() {
        let state = AccordionState::default().toggle(0).toggle(3);
        assert!(!state.is_open(0));
        assert!(state.is_open(3));
    }

    #[test]
    fn at_most_one_panel_open_for_any_click_sequence() {
        let clicks = [0, 1, 1, 4, 2, 2, 2, 0, 3, 3, 4, 1];
        let mut state = AccordionState::default();
        for click in clicks {
            state = state.toggle(click);
            assert!(state.open_count(5) <= 1);
        }
    }
}
