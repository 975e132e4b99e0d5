use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingControlsProps {
    pub confirm_label: String,
    pub cancel_label: String,
    pub can_confirm: bool,
    pub can_cancel: bool,
    pub on_confirm: Callback<MouseEvent>,
    pub on_cancel: Callback<MouseEvent>,
}

#[function_component(BookingControls)]
pub fn booking_controls(props: &BookingControlsProps) -> Html {
    html! {
        <div class="button__controls">
            <button
                type="button"
                class={classes!("button", (!props.can_confirm).then(|| "button--disabled"))}
                disabled={!props.can_confirm}
                onclick={props.on_confirm.clone()}
            >
                {&props.confirm_label}
            </button>
            <button
                type="button"
                class={classes!("button", (!props.can_cancel).then(|| "button--disabled"))}
                disabled={!props.can_cancel}
                onclick={props.on_cancel.clone()}
            >
                {&props.cancel_label}
            </button>
        </div>
    }
}
