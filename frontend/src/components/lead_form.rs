use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::{ToastKind, ToastMessage};
use crate::config;

pub const SUBMIT_LABEL: &str = "Get Your Free Assessment";
pub const BUSY_LABEL: &str = "Submitting...";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub full_name: String,
    pub organization: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("could not encode lead: {0}")]
    Encode(#[source] gloo_net::Error),
    #[error("network error: {0}")]
    Network(#[source] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("response was not JSON: {0}")]
    Decode(#[source] gloo_net::Error),
}

/// Where submitted leads go.
#[allow(async_fn_in_trait)]
pub trait LeadSink {
    async fn deliver(&self, lead: &LeadPayload) -> Result<(), LeadError>;
}

/// POSTs leads as JSON to the backend's lead endpoint.
pub struct HttpLeadSink {
    url: String,
}

impl Default for HttpLeadSink {
    fn default() -> Self {
        Self {
            url: config::leads_url(),
        }
    }
}

impl LeadSink for HttpLeadSink {
    async fn deliver(&self, lead: &LeadPayload) -> Result<(), LeadError> {
        let response = Request::post(&self.url)
            .json(lead)
            .map_err(LeadError::Encode)?
            .send()
            .await
            .map_err(LeadError::Network)?;

        check_status(response.ok(), response.status())?;

        // The body is unused, but it has to be JSON.
        response
            .json::<serde_json::Value>()
            .await
            .map_err(LeadError::Decode)?;
        Ok(())
    }
}

fn check_status(ok: bool, status: u16) -> Result<(), LeadError> {
    if ok {
        Ok(())
    } else {
        Err(LeadError::Status(status))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitButton {
    Idle,
    Busy,
}

impl SubmitButton {
    pub fn label(self) -> &'static str {
        match self {
            SubmitButton::Idle => SUBMIT_LABEL,
            SubmitButton::Busy => BUSY_LABEL,
        }
    }

    pub fn disabled(self) -> bool {
        self == SubmitButton::Busy
    }
}

pub fn success_toast() -> ToastMessage {
    ToastMessage::new(
        "Assessment Request Submitted",
        "Thank you! Our team will be in touch within 24 hours.",
        ToastKind::Success,
    )
}

pub fn failure_toast() -> ToastMessage {
    ToastMessage::new(
        "Submission Failed",
        "Please try again or contact us directly.",
        ToastKind::Error,
    )
}

/// UI hooks a submission reports back through.
#[derive(Clone)]
pub struct SubmitHandles {
    pub button: Callback<SubmitButton>,
    pub toast: Callback<ToastMessage>,
    pub clear_fields: Callback<()>,
}

/// Sends one lead. Exactly one toast is emitted and the button always ends idle.
pub async fn submit_lead<S: LeadSink>(sink: &S, lead: LeadPayload, handles: &SubmitHandles) {
    handles.button.emit(SubmitButton::Busy);

    match sink.deliver(&lead).await {
        Ok(()) => {
            log::info!("Lead submitted for {}", lead.organization);
            handles.toast.emit(success_toast());
            handles.clear_fields.emit(());
        }
        Err(err) => {
            log::warn!("Lead submission failed: {}", err);
            handles.toast.emit(failure_toast());
        }
    }

    handles.button.emit(SubmitButton::Idle);
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub on_toast: Callback<ToastMessage>,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let fields = use_state(LeadPayload::default);
    let button = use_state_eq(|| SubmitButton::Idle);

    let onsubmit = {
        let fields = fields.clone();
        let button = button.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if button.disabled() {
                return;
            }
            let lead = (*fields).clone();
            let handles = SubmitHandles {
                button: {
                    let button = button.clone();
                    Callback::from(move |state: SubmitButton| button.set(state))
                },
                toast: on_toast.clone(),
                clear_fields: {
                    let fields = fields.clone();
                    Callback::from(move |_: ()| fields.set(LeadPayload::default()))
                },
            };
            spawn_local(async move {
                submit_lead(&HttpLeadSink::default(), lead, &handles).await;
            });
        })
    };

    let on_field = |update: fn(&mut LeadPayload, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let value = match e.target_dyn_into::<HtmlInputElement>() {
                Some(input) => input.value(),
                None => e
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };
            let mut next = (*fields).clone();
            update(&mut next, value);
            fields.set(next);
        })
    };

    html! {
        <form id="lead-form" class="lead-form" {onsubmit}>
            <label for="fullName">{"Full name"}</label>
            <input
                id="fullName"
                name="fullName"
                type="text"
                required={true}
                value={fields.full_name.clone()}
                oninput={on_field(|lead, value| lead.full_name = value)}
            />
            <label for="organization">{"Organization"}</label>
            <input
                id="organization"
                name="organization"
                type="text"
                required={true}
                value={fields.organization.clone()}
                oninput={on_field(|lead, value| lead.organization = value)}
            />
            <label for="email">{"Work email"}</label>
            <input
                id="email"
                name="email"
                type="email"
                required={true}
                value={fields.email.clone()}
                oninput={on_field(|lead, value| lead.email = value)}
            />
            <label for="message">{"How can we help?"}</label>
            <textarea
                id="message"
                name="message"
                rows="4"
                value={fields.message.clone()}
                oninput={on_field(|lead, value| lead.message = value)}
            />
            <button id="submit-btn" type="submit" class="hero-cta" disabled={button.disabled()}>
                {button.label()}
            </button>
        </form>
    }
}
