use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    /// Plan awaiting confirmation; the modal is open while this is set.
    pub plan_id: Option<String>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let open = props.plan_id.is_some();

    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    // clicks inside the dialog must not reach the overlay
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div id="modalOverlay" class={classes!("modal-overlay", open.then(|| "show"))} onclick={cancel.clone()}>
            <div class="modal" role="dialog" aria-modal="true" onclick={keep_open}>
                <button id="modalClose" class="modal-close" onclick={cancel.clone()}>{"×"}</button>
                <h2>{"Confirm your plan"}</h2>
                <p>
                    {"You've selected the "}
                    <strong id="selectedPlan">{props.plan_id.clone().unwrap_or_default()}</strong>
                    {" plan."}
                </p>
                <div class="modal-actions">
                    <button id="modalCancel" class="modal-cancel" onclick={cancel}>{"Cancel"}</button>
                    <button id="modalConfirm" class="modal-confirm" onclick={confirm}>{"Confirm"}</button>
                </div>
            </div>
        </div>
    }
}
