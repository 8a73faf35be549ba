use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::use_toast;
use crate::content::COURSES;
use crate::referral::request::ReferralField;
use crate::referral::submission::{FormAction, ReferralSubmission, Severity};
use crate::referral::transport::{ConfiguredTransport, ReferralTransport};

#[derive(Properties, PartialEq)]
pub struct ReferralFormProps {
    /// Fired after the referral was accepted and the form was cleared.
    #[prop_or_default]
    pub on_success: Callback<()>,
    /// Shows a Cancel button when set.
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component(ReferralForm)]
pub fn referral_form(props: &ReferralFormProps) -> Html {
    let form = use_reducer(ReferralSubmission::new);
    let toast = use_toast();

    // One request per ticket; the reducer only hands out a new ticket from Idle.
    {
        let ticket = form.ticket();
        let form = form.clone();
        use_effect_with_deps(
            move |ticket| {
                let ticket = *ticket;
                if let Some(request) = form.in_flight().cloned() {
                    let dispatcher = form.dispatcher();
                    spawn_local(async move {
                        let transport = ConfiguredTransport::from_config();
                        let result = transport.submit(&request).await;
                        dispatcher.dispatch(FormAction::Completed { ticket, result });
                    });
                }
                || ()
            },
            ticket,
        );
    }

    {
        let notice = form.notice().map(|(_, notification)| notification.clone());
        let on_success = props.on_success.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(notification) = notice {
                    toast.show(&notification);
                    if notification.severity == Severity::Success {
                        on_success.emit(());
                    }
                }
                || ()
            },
            form.notice().map(|(seq, _)| *seq),
        );
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(FormAction::Submit);
        })
    };

    let submitting = form.is_submitting();

    html! {
        <form class="referral-form" onsubmit={onsubmit} novalidate=true>
            <style>
            {r#".referral-form .field {
                margin-bottom: 1rem;
            }
            .referral-form label {
                display: block;
                font-size: 0.875rem;
                font-weight: 500;
                margin-bottom: 0.25rem;
            }
            .referral-form .input-field {
                width: 100%;
                padding: 0.5rem 1rem;
                border: 1px solid #d1d5db;
                border-radius: 8px;
                font: inherit;
            }
            .referral-form .input-field:focus {
                outline: none;
                box-shadow: 0 0 0 2px rgba(124, 58, 237, 0.5);
            }
            .referral-form textarea.input-field {
                min-height: 100px;
            }
            .referral-form .field-error {
                margin-top: 0.25rem;
                font-size: 0.875rem;
                color: #ef4444;
            }
            .referral-form fieldset {
                border: none;
                padding: 0;
                margin: 0;
            }
            .referral-form .form-actions {
                display: flex;
                justify-content: flex-end;
                gap: 1rem;
                margin-top: 1.5rem;
            }
            .referral-form .cancel-button {
                background: none;
                border: none;
                color: #4b5563;
                font-size: 0.875rem;
                font-weight: 500;
                cursor: pointer;
            }
            .referral-form button[disabled] {
                opacity: 0.6;
                cursor: not-allowed;
            }"#}
            </style>
            <fieldset disabled={submitting}>
                { text_field(&form, ReferralField::ReferrerName, "text", "Enter your name") }
                { text_field(&form, ReferralField::ReferrerEmail, "email", "Enter your email") }
                { text_field(&form, ReferralField::FriendName, "text", "Enter friend's name") }
                { text_field(&form, ReferralField::FriendEmail, "email", "Enter friend's email") }
                { course_field(&form) }
                { message_field(&form) }
            </fieldset>
            <div class="form-actions">
                {
                    if let Some(on_cancel) = props.on_cancel.clone() {
                        html! {
                            <button
                                type="button"
                                class="cancel-button"
                                onclick={Callback::from(move |_: MouseEvent| on_cancel.emit(()))}
                            >
                                {"Cancel"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="btn-primary" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Send Referral" } }
                </button>
            </div>
        </form>
    }
}

fn field_error(form: &UseReducerHandle<ReferralSubmission>, field: ReferralField) -> Html {
    match form.errors().get(field) {
        Some(err) => html! { <p class="field-error">{ err.to_string() }</p> },
        None => html! {},
    }
}

fn on_blur(form: &UseReducerHandle<ReferralSubmission>, field: ReferralField) -> Callback<FocusEvent> {
    let form = form.clone();
    Callback::from(move |_: FocusEvent| form.dispatch(FormAction::Blur(field)))
}

fn text_field(
    form: &UseReducerHandle<ReferralSubmission>,
    field: ReferralField,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    html! {
        <div class="field">
            <label>{ field.label() }</label>
            <input
                type={input_type}
                class="input-field"
                placeholder={placeholder}
                value={form.request().get(field).to_string()}
                oninput={oninput}
                onblur={on_blur(form, field)}
            />
            { field_error(form, field) }
        </div>
    }
}

fn course_field(form: &UseReducerHandle<ReferralSubmission>) -> Html {
    let field = ReferralField::Course;
    let onchange = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(field, select.value()));
        })
    };
    let selected = form.request().course.clone();

    html! {
        <div class="field">
            <label>{ field.label() }</label>
            <select class="input-field" onchange={onchange} onblur={on_blur(form, field)}>
                <option value="" selected={selected.is_empty()}>{"Select a course"}</option>
                {
                    COURSES.iter().map(|course| html! {
                        <option value={course.id} selected={selected == course.id}>
                            { course.label }
                        </option>
                    }).collect::<Html>()
                }
            </select>
            { field_error(form, field) }
        </div>
    }
}

fn message_field(form: &UseReducerHandle<ReferralSubmission>) -> Html {
    let field = ReferralField::Message;
    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(field, textarea.value()));
        })
    };

    html! {
        <div class="field">
            <label>{ field.label() }</label>
            <textarea
                class="input-field"
                placeholder="Add a personal message to your friend..."
                value={form.request().message.clone()}
                oninput={oninput}
            />
        </div>
    }
}
