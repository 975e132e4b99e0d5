use shared::{unique_keys, DisplaySlot, SelectionState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvailableSlotsProps {
    pub slots: Vec<DisplaySlot>,
    pub selection: SelectionState,
    pub on_select_time: Callback<String>,
    pub heading: String,
    pub session_info: String,
}

/// Time cards for the selected day; renders nothing until a day with slots is picked
#[function_component(AvailableSlots)]
pub fn available_slots(props: &AvailableSlotsProps) -> Html {
    if props.slots.is_empty() {
        return html! {};
    }

    let keys = unique_keys(props.slots.iter().map(|slot| slot.display_time.as_str()));

    html! {
        <div class="available-slot">
            <div class="available-slot__heading">{&props.heading}</div>
            <div class="available-slot__info">{&props.session_info}</div>
            <div class="available-slot__card-list">
                {for props.slots.iter().zip(keys).map(|(slot, key)| {
                    let is_selected = props.selection.is_time_selected(&slot.display_time);
                    let onclick = {
                        let on_select_time = props.on_select_time.clone();
                        let time = slot.display_time.clone();
                        Callback::from(move |_: MouseEvent| on_select_time.emit(time.clone()))
                    };

                    html! {
                        <div
                            key={key}
                            class={classes!("available-slot__card", is_selected.then(|| "available-slot__card--selected"))}
                            onclick={onclick}
                        >
                            {&slot.display_time}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
