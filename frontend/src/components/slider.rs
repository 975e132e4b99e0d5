use std::rc::Rc;

use shared::{DayLabel, SelectionState};
use yew::prelude::*;

use crate::hooks::use_viewport_tracker::use_viewport_tracker;

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub cards: Rc<Vec<DayLabel>>,
    pub selection: SelectionState,
    pub on_select_day: Callback<String>,
    pub heading: String,
    #[prop_or_default]
    pub enable_logging: bool,
}

#[function_component(Slider)]
pub fn slider(props: &SliderProps) -> Html {
    let tracker = use_viewport_tracker(&props.cards, props.enable_logging);

    html! {
        <div>
            <div class="heading">{&props.heading}</div>
            <div class="slider">
                <div
                    class={classes!("navigation-btn", tracker.prev_disabled.then(|| "navigation-btn--disabled"))}
                    onclick={tracker.actions.scroll_prev.clone()}
                >
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path d="M20 11H7.83l5.59-5.59L12 4l-8 8 8 8 1.41-1.41L7.83 13H20v-2z" fill="currentColor"/>
                    </svg>
                </div>

                <div class="slide-container" ref={tracker.container_ref.clone()}>
                    {for props.cards.iter().zip(tracker.card_keys.iter()).enumerate().map(|(index, (card, key))| {
                        let is_selected = props.selection.is_day_selected(&card.date);
                        let card_ref = tracker.card_refs.get(index).cloned().unwrap_or_default();
                        let onclick = {
                            let on_select_day = props.on_select_day.clone();
                            let date = card.date.clone();
                            Callback::from(move |_: MouseEvent| on_select_day.emit(date.clone()))
                        };

                        html! {
                            <div
                                key={key.clone()}
                                class={classes!("slide-item", is_selected.then(|| "slide-item--selected"))}
                                ref={card_ref}
                                onclick={onclick}
                            >
                                <div class={classes!(is_selected.then(|| "slide-item__date"))}>{&card.day}</div>
                                <div class="slide-item__day">{&card.weekday}</div>
                            </div>
                        }
                    })}
                </div>

                <div
                    class={classes!("navigation-btn", tracker.next_disabled.then(|| "navigation-btn--disabled"))}
                    onclick={tracker.actions.scroll_next.clone()}
                >
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path d="M12 4l-1.41 1.41L16.17 11H4v2h12.17l-5.58 5.59L12 20l8-8-8-8z" fill="currentColor"/>
                    </svg>
                </div>
            </div>
        </div>
    }
}
