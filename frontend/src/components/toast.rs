use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn border_color(self) -> &'static str {
        match self {
            ToastKind::Success => "#22c55e",
            ToastKind::Error => "#ef4444",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn new(title: impl Into<String>, description: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
        }
    }
}

pub enum ToastAction {
    Show { message: ToastMessage, generation: u64 },
    /// Hides the toast only if nothing newer was shown since.
    Dismiss { generation: u64 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub message: Option<ToastMessage>,
    pub visible: bool,
    pub generation: u64,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show { message, generation } => Rc::new(ToastState {
                message: Some(message),
                visible: true,
                generation,
            }),
            ToastAction::Dismiss { generation } if generation == self.generation && self.visible => {
                Rc::new(ToastState {
                    message: self.message.clone(),
                    visible: false,
                    generation,
                })
            }
            ToastAction::Dismiss { .. } => self,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub state: Rc<ToastState>,
    pub show: Callback<ToastMessage>,
}

/// Page-level toast. Each `show` replaces the pending dismiss timer.
#[hook]
pub fn use_toast() -> ToastHandle {
    let state = use_reducer(ToastState::default);
    let generation = use_mut_ref(|| 0u64);
    let pending = use_mut_ref(|| None::<Timeout>);

    let show = {
        let dispatcher = state.dispatcher();
        Callback::from(move |message: ToastMessage| {
            let next = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            log::debug!("Showing toast {:?} (generation {})", message.title, next);
            dispatcher.dispatch(ToastAction::Show { message, generation: next });

            let dispatcher = dispatcher.clone();
            let timeout = Timeout::new(DISMISS_AFTER_MS, move || {
                dispatcher.dispatch(ToastAction::Dismiss { generation: next });
            });
            // Dropping the previous handle cancels it.
            pending.borrow_mut().replace(timeout);
        })
    };

    ToastHandle {
        state: Rc::new((*state).clone()),
        show,
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub state: Rc<ToastState>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let state = &props.state;
    let placement = if state.visible {
        classes!("translate-x-0", "opacity-100")
    } else {
        classes!("translate-x-[120%]", "opacity-0")
    };
    let (title, description, border) = match &state.message {
        Some(message) => (
            message.title.clone(),
            message.description.clone(),
            format!("border-color: {};", message.kind.border_color()),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    html! {
        <div id="toast" role="status" aria-live="polite" class={classes!("toast", placement)} style={border}>
            <p id="toast-title" class="toast-title">{title}</p>
            <p id="toast-desc" class="toast-desc">{description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ToastState, action: ToastAction) -> ToastState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn error(title: &str) -> ToastMessage {
        ToastMessage::new(title, "details", ToastKind::Error)
    }

    #[test]
    fn border_color_follows_kind() {
        assert_eq!(ToastKind::Success.border_color(), "#22c55e");
        assert_eq!(ToastKind::Error.border_color(), "#ef4444");
    }

    #[test]
    fn show_then_dismiss_hides() {
        let shown = reduce(ToastState::default(), ToastAction::Show { message: error("a"), generation: 1 });
        assert!(shown.visible);
        let hidden = reduce(shown, ToastAction::Dismiss { generation: 1 });
        assert!(!hidden.visible);
        assert_eq!(hidden.message.map(|m| m.title), Some("a".to_string()));
    }

    #[test]
    fn stale_dismiss_keeps_newer_toast_visible() {
        let first = reduce(ToastState::default(), ToastAction::Show { message: error("first"), generation: 1 });
        let second = reduce(first, ToastAction::Show { message: error("second"), generation: 2 });
        let after_stale = reduce(second, ToastAction::Dismiss { generation: 1 });
        assert!(after_stale.visible);
        assert_eq!(after_stale.message.as_ref().map(|m| m.title.as_str()), Some("second"));

        let after_current = reduce(after_stale, ToastAction::Dismiss { generation: 2 });
        assert!(!after_current.visible);
    }

    #[test]
    fn dismiss_on_hidden_toast_is_noop() {
        let state = ToastState::default();
        let after = reduce(state.clone(), ToastAction::Dismiss { generation: 0 });
        assert_eq!(after, state);
    }
}
