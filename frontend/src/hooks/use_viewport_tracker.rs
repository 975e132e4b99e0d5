use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use shared::viewport::{CarouselViewportState, ViewportTracker};
use shared::{unique_keys, DayLabel, ScrollDirection};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::services::dom_layout::{DomLayout, DomObserver};
use crate::services::logging::Logger;

const COMPONENT: &str = "viewport-tracker";

type SharedTracker = Rc<RefCell<ViewportTracker<Element>>>;

pub struct UseViewportTrackerResult {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub container_ref: NodeRef,
    /// List key per card, unique even when day keys repeat
    pub card_keys: Rc<Vec<String>>,
    /// One ref per card, in card order
    pub card_refs: Rc<Vec<NodeRef>>,
    pub actions: UseViewportTrackerActions,
}

#[derive(Clone, PartialEq)]
pub struct UseViewportTrackerActions {
    pub scroll_prev: Callback<MouseEvent>,
    pub scroll_next: Callback<MouseEvent>,
}

fn refresh(
    tracker: &SharedTracker,
    container_ref: &NodeRef,
    state: &UseStateHandle<CarouselViewportState>,
) {
    let layout = DomLayout::new(container_ref.cast::<Element>());
    let next = tracker.borrow_mut().recompute(&layout);
    state.set(next);
}

fn scroll(
    tracker: &SharedTracker,
    container_ref: &NodeRef,
    direction: ScrollDirection,
    enable_logging: bool,
) {
    let layout = DomLayout::new(container_ref.cast::<Element>());
    let target = tracker.borrow().scroll_by(direction, &layout);

    if enable_logging {
        match target {
            Some(target) => {
                Logger::debug_with_component(COMPONENT, &format!("scroll {} to {}", direction, target))
            }
            None => Logger::debug_with_component(COMPONENT, &format!("scroll {} ignored", direction)),
        }
    }
}

/// Tracks which day cards are visible and whether the carousel can scroll.
///
/// Scroll, resize and visibility changes all run the same recomputation over
/// live DOM geometry. Observation is rebuilt whenever the card list changes
/// and torn down on unmount.
#[hook]
pub fn use_viewport_tracker(cards: &[DayLabel], enable_logging: bool) -> UseViewportTrackerResult {
    let container_ref = use_node_ref();
    let tracker: SharedTracker = use_mut_ref(ViewportTracker::new);
    let state = use_state_eq(CarouselViewportState::default);

    let keys = unique_keys(cards.iter().map(|card| card.date.as_str()));
    let card_keys = use_memo(keys.clone(), |keys| keys.clone());
    let card_refs = use_memo(keys.clone(), |keys| {
        keys.iter().map(|_| NodeRef::default()).collect::<Vec<_>>()
    });

    {
        let tracker = tracker.clone();
        let container_ref = container_ref.clone();
        let card_refs = card_refs.clone();
        let state = state.clone();

        use_effect_with(keys, move |keys| {
            let on_visibility_change = {
                let tracker = tracker.clone();
                let container_ref = container_ref.clone();
                let state = state.clone();
                move || refresh(&tracker, &container_ref, &state)
            };
            let observer = Rc::new(DomObserver::new(on_visibility_change).unwrap_or_else(|e| {
                Logger::error_with_component(COMPONENT, &format!("visibility tracking disabled: {}", e));
                DomObserver::detached()
            }));

            {
                let mut tracker = tracker.borrow_mut();
                tracker.set_cards(keys, observer.as_ref());
                for (index, (card_ref, key)) in card_refs.iter().zip(keys.iter()).enumerate() {
                    if let Some(card) = card_ref.cast::<Element>() {
                        tracker.mount_card(index, key, card, observer.as_ref());
                    }
                }

                if enable_logging {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!(
                            "observing {} of {} cards (observer attached: {})",
                            tracker.mounted_count(),
                            tracker.card_count(),
                            observer.is_attached()
                        ),
                    );
                }
            }

            // Initial mount
            refresh(&tracker, &container_ref, &state);

            let scroll_listener = container_ref.cast::<Element>().map(|container| {
                let tracker = tracker.clone();
                let container_ref = container_ref.clone();
                let state = state.clone();
                EventListener::new(&container, "scroll", move |_| {
                    refresh(&tracker, &container_ref, &state)
                })
            });
            if scroll_listener.is_none() {
                Logger::warn_with_component(COMPONENT, "carousel container not mounted; scroll tracking off");
            }

            let resize_listener = web_sys::window().map(|window| {
                let tracker = tracker.clone();
                let observer = observer.clone();
                let container_ref = container_ref.clone();
                let state = state.clone();
                EventListener::new(&window, "resize", move |_| {
                    let layout = DomLayout::new(container_ref.cast::<Element>());
                    let next = tracker.borrow_mut().on_resize(&layout, observer.as_ref());
                    state.set(next);
                })
            });

            move || {
                drop(scroll_listener);
                drop(resize_listener);
                tracker.borrow_mut().teardown(observer.as_ref());
            }
        });
    }

    let scroll_prev = {
        let tracker = tracker.clone();
        let container_ref = container_ref.clone();
        use_callback(enable_logging, move |_: MouseEvent, enable_logging| {
            scroll(&tracker, &container_ref, ScrollDirection::Prev, *enable_logging)
        })
    };

    let scroll_next = {
        let tracker = tracker.clone();
        let container_ref = container_ref.clone();
        use_callback(enable_logging, move |_: MouseEvent, enable_logging| {
            scroll(&tracker, &container_ref, ScrollDirection::Next, *enable_logging)
        })
    };

    let current = *state;

    UseViewportTrackerResult {
        prev_disabled: current.is_prev_disabled(),
        next_disabled: current.is_next_disabled(cards.len()),
        container_ref,
        card_keys,
        card_refs,
        actions: UseViewportTrackerActions {
            scroll_prev,
            scroll_next,
        },
    }
}
