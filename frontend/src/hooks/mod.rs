pub mod use_selection;
pub mod use_viewport_tracker;
