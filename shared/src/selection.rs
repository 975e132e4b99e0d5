//! Day/time selection for the booking widget.

use serde::{Deserialize, Serialize};

use crate::BookedSlot;

/// Phase of the selection, derived from which fields are set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    DaySelected,
    TimeSelected,
}

/// Currently selected day and time. An empty string means "none".
///
/// Changing the day always clears the time in the same step, so a time from a
/// previously selected day can never stay selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_day: String,
    selected_time: String,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_day(&self) -> &str {
        &self.selected_day
    }

    pub fn selected_time(&self) -> &str {
        &self.selected_time
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.selected_day.is_empty() {
            SelectionPhase::Idle
        } else if self.selected_time.is_empty() {
            SelectionPhase::DaySelected
        } else {
            SelectionPhase::TimeSelected
        }
    }

    /// Select a day from any phase. The time is cleared unconditionally,
    /// including when the same day is selected again.
    pub fn select_day(&mut self, day: impl Into<String>) {
        self.selected_day = day.into();
        self.selected_time.clear();
    }

    /// Select a time for the current day. Ignored while no day is selected.
    pub fn select_time(&mut self, time: impl Into<String>) {
        if self.selected_day.is_empty() {
            return;
        }
        self.selected_time = time.into();
    }

    pub fn reset(&mut self) {
        self.selected_day.clear();
        self.selected_time.clear();
    }

    /// Hand out the selected pair and reset.
    ///
    /// Only acts from `TimeSelected`; anywhere else it returns `None` and
    /// leaves the state untouched.
    pub fn confirm(&mut self) -> Option<BookedSlot> {
        if self.phase() != SelectionPhase::TimeSelected {
            return None;
        }
        let booked = BookedSlot {
            day: std::mem::take(&mut self.selected_day),
            time: std::mem::take(&mut self.selected_time),
        };
        self.reset();
        Some(booked)
    }

    /// Confirm control guard
    pub fn can_confirm(&self) -> bool {
        !self.selected_time.is_empty()
    }

    /// Cancel control guard
    pub fn can_cancel(&self) -> bool {
        !self.selected_day.is_empty()
    }

    pub fn is_day_selected(&self, day: &str) -> bool {
        !day.is_empty() && self.selected_day == day
    }

    pub fn is_time_selected(&self, time: &str) -> bool {
        !time.is_empty() && self.selected_time == time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_selected(day: &str, time: &str) -> SelectionState {
        let mut state = SelectionState::new();
        state.select_day(day);
        state.select_time(time);
        state
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = SelectionState::new();
        assert_eq!(state.phase(), SelectionPhase::Idle);
        assert_eq!(state.selected_day(), "");
        assert_eq!(state.selected_time(), "");
        assert!(!state.can_confirm());
        assert!(!state.can_cancel());
    }

    #[test]
    fn test_select_day_always_clears_time() {
        let priors = vec![
            SelectionState::new(),
            time_selected("2023-10-01", "09:00"),
            time_selected("2023-10-02", "10:00"),
        ];

        for mut state in priors {
            state.select_day("2023-10-02");
            assert_eq!(state.selected_day(), "2023-10-02");
            assert_eq!(state.selected_time(), "");
            assert_eq!(state.phase(), SelectionPhase::DaySelected);
        }
    }

    #[test]
    fn test_select_time_requires_day() {
        let mut state = SelectionState::new();
        state.select_time("09:00");
        assert_eq!(state, SelectionState::new());

        state.select_day("2023-10-01");
        state.select_time("09:00");
        assert_eq!(state.phase(), SelectionPhase::TimeSelected);
        assert!(state.can_confirm());
        assert!(state.can_cancel());

        state.select_time("10:00");
        assert_eq!(state.selected_time(), "10:00");
        assert_eq!(state.selected_day(), "2023-10-01");
    }

    #[test]
    fn test_confirm_returns_pair_and_resets() {
        let mut state = time_selected("2023-10-01", "09:00");

        let booked = state.confirm();

        assert_eq!(
            booked,
            Some(BookedSlot {
                day: "2023-10-01".to_string(),
                time: "09:00".to_string(),
            })
        );
        assert_eq!(state, SelectionState::new());
        assert!(!state.can_confirm());
    }

    #[test]
    fn test_confirm_without_time_is_noop() {
        let mut idle = SelectionState::new();
        assert_eq!(idle.confirm(), None);
        assert_eq!(idle, SelectionState::new());

        let mut day_only = SelectionState::new();
        day_only.select_day("2023-10-01");
        assert_eq!(day_only.confirm(), None);
        assert_eq!(day_only.selected_day(), "2023-10-01");
    }

    #[test]
    fn test_reset_from_any_phase() {
        let mut state = time_selected("2023-10-01", "09:00");
        state.reset();
        assert_eq!(state.phase(), SelectionPhase::Idle);

        state.select_day("2023-10-01");
        state.reset();
        assert_eq!(state, SelectionState::new());
    }

    #[test]
    fn test_highlight_helpers() {
        let state = time_selected("2023-10-01", "09:00");
        assert!(state.is_day_selected("2023-10-01"));
        assert!(!state.is_day_selected("2023-10-02"));
        assert!(state.is_time_selected("09:00"));
        assert!(!SelectionState::new().is_day_selected(""));
    }

    #[test]
    fn test_empty_values_never_highlight() {
        let idle = SelectionState::new();
        assert!(!idle.is_day_selected(""));
        assert!(!idle.is_time_selected(""));

        let mut day_only = SelectionState::new();
        day_only.select_day("2023-10-01");
        assert!(day_only.is_day_selected("2023-10-01"));
        assert!(!day_only.is_time_selected(""));

        day_only.reset();
        assert!(!day_only.is_day_selected("2023-10-01"));
    }
}
