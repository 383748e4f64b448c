use std::collections::BTreeSet;
use std::rc::Rc;

use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

pub enum ModalAction {
    Open(String),
    Close(String),
    /// Escape: every open dialog closes.
    CloseAll,
}

/// Open dialogs and the page scroll lock derived from them. Only ids
/// registered with [`ModalState::with_dialogs`] can open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    dialogs: BTreeSet<String>,
    open: BTreeSet<String>,
}

impl ModalState {
    pub fn with_dialogs(ids: &[&str]) -> Self {
        Self {
            dialogs: ids.iter().map(|id| id.to_string()).collect(),
            open: BTreeSet::new(),
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Held while any dialog is open, so closing one of two nested dialogs
    /// leaves the page locked.
    pub fn scroll_locked(&self) -> bool {
        !self.open.is_empty()
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ModalAction::Open(id) if next.dialogs.contains(&id) => next.open.insert(id),
            ModalAction::Open(id) => {
                log::debug!("No dialog registered as {}", id);
                false
            }
            ModalAction::Close(id) => next.open.remove(&id),
            ModalAction::CloseAll => {
                let had_open = !next.open.is_empty();
                next.open.clear();
                had_open
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn set_body_overflow(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        log::debug!("Could not update body overflow: {:?}", err);
    }
}

/// Page-level dialog controller: Escape handling and scroll locking for the
/// dialogs in `dialogs`.
#[hook]
pub fn use_modal_controller(dialogs: &'static [&'static str]) -> UseReducerHandle<ModalState> {
    let modals = use_reducer(move || ModalState::with_dialogs(dialogs));

    {
        let dispatcher = modals.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatcher.dispatch(ModalAction::CloseAll);
            }
        });
    }

    use_effect_with_deps(
        move |locked: &bool| {
            set_body_overflow(*locked);
            || ()
        },
        modals.scroll_locked(),
    );

    modals
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub open: bool,
    pub on_action: Callback<ModalAction>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = {
        let id = props.id.clone();
        props.on_action.reform(move |_: MouseEvent| ModalAction::Close(id.to_string()))
    };
    let title_id = format!("{}-title", props.id);

    html! {
        <div
            id={props.id.clone()}
            role="dialog"
            aria-modal="true"
            aria-labelledby={title_id.clone()}
            aria-hidden={if props.open { "false" } else { "true" }}
            class={classes!("modal", (!props.open).then_some("hidden"))}
        >
            <div class="modal-backdrop" data-modal-backdrop="true" onclick={close.clone()}></div>
            <div class="modal-panel">
                <div class="modal-header">
                    <h3 id={title_id}>{props.title.clone()}</h3>
                    <button type="button" class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: ModalState, action: ModalAction) -> ModalState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn dialogs() -> ModalState {
        ModalState::with_dialogs(&["x", "outer", "inner"])
    }

    #[test]
    fn open_locks_and_escape_unlocks() {
        let state = apply(dialogs(), ModalAction::Open("x".into()));
        assert!(state.is_open("x"));
        assert!(state.scroll_locked());

        let state = apply(state, ModalAction::CloseAll);
        assert!(!state.is_open("x"));
        assert!(!state.scroll_locked());
    }

    #[test]
    fn close_releases_lock_only_when_last_dialog_closes() {
        let state = apply(dialogs(), ModalAction::Open("outer".into()));
        let state = apply(state, ModalAction::Open("inner".into()));
        let state = apply(state, ModalAction::Close("inner".into()));
        assert!(state.is_open("outer"));
        assert!(state.scroll_locked());

        let state = apply(state, ModalAction::Close("outer".into()));
        assert!(!state.scroll_locked());
    }

    #[test]
    fn unknown_ids_are_noops() {
        let state = Rc::new(dialogs());
        let after = state.clone().reduce(ModalAction::Close("missing".into()));
        assert!(Rc::ptr_eq(&state, &after));

        let after = state.clone().reduce(ModalAction::Open("missing".into()));
        assert!(Rc::ptr_eq(&state, &after));
        assert!(!after.is_open("missing"));
        assert!(!after.scroll_locked());

        let after = state.clone().reduce(ModalAction::CloseAll);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn reopening_an_open_dialog_keeps_state() {
        let state = Rc::new(apply(dialogs(), ModalAction::Open("x".into())));
        let after = state.clone().reduce(ModalAction::Open("x".into()));
        assert!(Rc::ptr_eq(&state, &after));
    }
}
