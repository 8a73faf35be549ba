use yew::prelude::*;

use crate::components::referral_form::ReferralForm;

#[derive(Properties, PartialEq)]
pub struct ReferralDialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
}

/// Modal around the referral form. The form stays mounted while the dialog is
/// hidden, so a failed or cancelled referral keeps what the user typed.
#[function_component(ReferralDialog)]
pub fn referral_dialog(props: &ReferralDialogProps) -> Html {
    let close = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |_: ()| on_open_change.emit(false))
    };

    let overlay_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <div class={classes!("modal-overlay", (!props.open).then(|| "closed"))} onclick={overlay_click}>
            <style>
            {r#".modal-overlay {
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.6);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 60;
                padding: 1rem;
            }
            .modal-overlay.closed {
                display: none;
            }
            .modal-content {
                background: #fff;
                border-radius: 16px;
                padding: 2rem;
                width: 100%;
                max-width: 32rem;
                max-height: 90vh;
                overflow-y: auto;
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
            }
            .modal-content h2 {
                font-size: 1.5rem;
                font-weight: 700;
                margin: 0;
            }
            .modal-content .modal-description {
                color: #4b5563;
                margin: 0.5rem 0 1.5rem;
            }"#}
            </style>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <h2>{"Refer a Friend"}</h2>
                <p class="modal-description">{"Fill in the details below to refer your friend"}</p>
                <ReferralForm on_success={close.clone()} on_cancel={Some(close)} />
            </div>
        </div>
    }
}
