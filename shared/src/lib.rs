use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub mod config;
pub mod error;
pub mod selection;
pub mod slots;
pub mod viewport;
pub mod weekday;

pub use config::WidgetConfig;
pub use error::{ConfigError, SlotSourceError};
pub use selection::{SelectionPhase, SelectionState};
pub use slots::{group_slots, load_intervals, slots_for_day, SlotsByDay};
pub use viewport::{
    CarouselViewportState, HorizontalBounds, CarouselLayout, ScrollMetrics, ViewportTracker,
    VisibilityObserver,
};
pub use weekday::label_days;

/// A bookable time interval as delivered by the slot source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    /// Day key the interval belongs to (e.g. "2023-10-01")
    pub display_date: String,
    /// Display-ready start time (e.g. "09:00")
    pub display_time: String,
    /// Display-ready end time
    pub display_time_end: String,
    /// Start instant, epoch seconds
    pub start_time_utc: i64,
    /// End instant, epoch seconds
    pub end_time_utc: i64,
}

/// A single time card rendered for a selected day
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySlot {
    pub display_time: String,
}

/// Display fields for one card of the day carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLabel {
    /// Zero-padded day of month ("01".."31")
    pub day: String,
    /// Short weekday name ("Mon", "Tue", ...)
    pub weekday: String,
    /// Original day key; joins back into `SlotsByDay`
    pub date: String,
}

/// The `(day, time)` pair handed to the booking integration on confirm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSlot {
    pub day: String,
    pub time: String,
}

impl fmt::Display for BookedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

/// Direction of a one-card carousel scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Prev,
    Next,
}

impl ScrollDirection {
    /// Sign applied to the card width when scrolling
    pub fn sign(self) -> f64 {
        match self {
            ScrollDirection::Prev => -1.0,
            ScrollDirection::Next => 1.0,
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollDirection::Prev => write!(f, "prev"),
            ScrollDirection::Next => write!(f, "next"),
        }
    }
}

/// Stable list keys built from each item's own identity string.
///
/// Neither grouping nor labeling deduplicates, so the n-th repeat of a value
/// gets a `#n` suffix to keep keys unique within one list.
pub fn unique_keys<'a, I>(identities: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashMap<&'a str, usize> = HashMap::new();
    identities
        .into_iter()
        .map(|identity| {
            let count = seen.entry(identity).or_insert(0);
            let key = if *count == 0 {
                identity.to_string()
            } else {
                format!("{}#{}", identity, count)
            };
            *count += 1;
            key
        })
        .collect()
}
