use shared::{BookedSlot, SelectionState};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "selection";

pub struct UseSelectionResult {
    pub state: SelectionState,
    pub actions: UseSelectionActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSelectionActions {
    pub select_day: Callback<String>,
    pub select_time: Callback<String>,
    pub cancel: Callback<MouseEvent>,
    pub confirm: Callback<MouseEvent>,
}

/// Day/time selection with confirm and cancel.
///
/// Callbacks are rebuilt every render so each one acts on the current
/// selection. `on_book` receives the pair before the selection resets.
#[hook]
pub fn use_selection(on_book: Callback<BookedSlot>, enable_logging: bool) -> UseSelectionResult {
    let selection = use_state_eq(SelectionState::new);

    let select_day = {
        let selection = selection.clone();
        Callback::from(move |day: String| {
            let mut next = (*selection).clone();
            next.select_day(day);
            if enable_logging {
                Logger::debug_with_component(COMPONENT, &format!("day {}", next.selected_day()));
            }
            selection.set(next);
        })
    };

    let select_time = {
        let selection = selection.clone();
        Callback::from(move |time: String| {
            let mut next = (*selection).clone();
            next.select_time(time);
            selection.set(next);
        })
    };

    let cancel = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            if !selection.can_cancel() {
                return;
            }
            selection.set(SelectionState::new());
        })
    };

    let confirm = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*selection).clone();
            match next.confirm() {
                Some(booked) => {
                    on_book.emit(booked);
                    selection.set(next);
                }
                None => {
                    Logger::warn_with_component(COMPONENT, "confirm ignored: no time selected");
                }
            }
        })
    };

    UseSelectionResult {
        state: (*selection).clone(),
        actions: UseSelectionActions {
            select_day,
            select_time,
            cancel,
            confirm,
        },
    }
}
