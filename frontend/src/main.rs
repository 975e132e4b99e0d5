use std::rc::Rc;

use shared::{group_slots, label_days, load_intervals, slots_for_day, BookedSlot, DayLabel, SlotsByDay, WidgetConfig};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::available_slots::AvailableSlots;
use components::booking_controls::BookingControls;
use components::slider::Slider;
use hooks::use_selection::use_selection;
use services::logging::Logger;

const MOCK_SLOTS: &str = include_str!("../mocks/slots.json");
const WIDGET_CONFIG: &str = include_str!("../config/widget.json");

fn load_config() -> WidgetConfig {
    WidgetConfig::from_json(WIDGET_CONFIG).unwrap_or_else(|e| {
        Logger::warn_with_component("app", &format!("using default widget config: {}", e));
        WidgetConfig::default()
    })
}

/// Slots grouped by day plus the day cards built from their keys
fn load_slots() -> (SlotsByDay, Rc<Vec<DayLabel>>) {
    let slots = match load_intervals(MOCK_SLOTS) {
        Ok(intervals) => group_slots(&intervals),
        Err(e) => {
            Logger::error_with_component("app", &format!("failed to load slots: {}", e));
            SlotsByDay::new()
        }
    };
    let keys: Vec<String> = slots.keys().cloned().collect();
    let labels = Rc::new(label_days(&keys));
    (slots, labels)
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let loaded = use_memo((), |_| load_slots());
    let (slots, day_labels) = &*loaded;

    // Hand-off point for a real booking integration
    let on_book = Callback::from(|booked: BookedSlot| {
        Logger::info_with_component("app", &format!("slot selected {}", booked));
    });

    let selection = use_selection(on_book, config.enable_logging);
    let day_slots = slots_for_day(slots, selection.state.selected_day()).to_vec();

    html! {
        <div class="container">
            <Slider
                cards={day_labels.clone()}
                selection={selection.state.clone()}
                on_select_day={selection.actions.select_day.clone()}
                heading={config.heading.clone()}
                enable_logging={config.enable_logging}
            />
            <AvailableSlots
                slots={day_slots}
                selection={selection.state.clone()}
                on_select_time={selection.actions.select_time.clone()}
                heading={config.slots_heading.clone()}
                session_info={config.session_info()}
            />
            <BookingControls
                confirm_label={config.confirm_label.clone()}
                cancel_label={config.cancel_label.clone()}
                can_confirm={selection.state.can_confirm()}
                can_cancel={selection.state.can_cancel()}
                on_confirm={selection.actions.confirm.clone()}
                on_cancel={selection.actions.cancel.clone()}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
