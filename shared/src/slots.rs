//! Grouping of raw intervals into per-day display slots.

use linked_hash_map::LinkedHashMap;

use crate::error::SlotSourceError;
use crate::{DisplaySlot, TimeInterval};

/// Day key -> display slots, in first-seen day order.
///
/// Every key present maps to a non-empty sequence: a group is only created
/// when an interval for that day exists.
pub type SlotsByDay = LinkedHashMap<String, Vec<DisplaySlot>>;

/// Group intervals by their day key.
///
/// Append-only and order-preserving. No sorting, deduplication or validation
/// happens here: duplicate or out-of-order times pass straight through.
pub fn group_slots(intervals: &[TimeInterval]) -> SlotsByDay {
    let mut grouped = SlotsByDay::new();

    for interval in intervals {
        grouped
            .entry(interval.display_date.clone())
            .or_insert_with(Vec::new)
            .push(DisplaySlot {
                display_time: interval.display_time.clone(),
            });
    }

    grouped
}

/// Slots for a single day; empty for unknown days and for "" (no selection)
pub fn slots_for_day<'a>(slots: &'a SlotsByDay, day: &str) -> &'a [DisplaySlot] {
    slots.get(day).map(Vec::as_slice).unwrap_or(&[])
}

/// Parse a JSON array of intervals (the mock slot file format)
pub fn load_intervals(json: &str) -> Result<Vec<TimeInterval>, SlotSourceError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(SlotSourceError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(day: &str, time: &str) -> TimeInterval {
        TimeInterval {
            display_date: day.to_string(),
            display_time: time.to_string(),
            display_time_end: String::new(),
            start_time_utc: 0,
            end_time_utc: 0,
        }
    }

    fn times(slots: &[DisplaySlot]) -> Vec<&str> {
        slots.iter().map(|s| s.display_time.as_str()).collect()
    }

    #[test]
    fn test_group_slots_by_day() {
        let intervals = vec![
            interval("2023-10-01", "09:00"),
            interval("2023-10-01", "10:00"),
            interval("2023-10-02", "09:00"),
        ];

        let grouped = group_slots(&intervals);

        assert_eq!(grouped.len(), 2);
        assert_eq!(times(&grouped["2023-10-01"]), vec!["09:00", "10:00"]);
        assert_eq!(times(&grouped["2023-10-02"]), vec!["09:00"]);
    }

    #[test]
    fn test_group_slots_preserves_source_order_per_day() {
        let intervals = vec![
            interval("2023-10-02", "14:00"),
            interval("2023-10-01", "11:00"),
            interval("2023-10-02", "08:00"),
            interval("2023-10-01", "09:00"),
            interval("2023-10-02", "14:00"),
        ];

        let grouped = group_slots(&intervals);

        // Not sorted, not deduplicated
        assert_eq!(times(&grouped["2023-10-02"]), vec!["14:00", "08:00", "14:00"]);
        assert_eq!(times(&grouped["2023-10-01"]), vec!["11:00", "09:00"]);

        // Each group equals the input subsequence for that day
        for (day, slots) in grouped.iter() {
            let expected: Vec<&str> = intervals
                .iter()
                .filter(|i| &i.display_date == day)
                .map(|i| i.display_time.as_str())
                .collect();
            assert_eq!(times(slots), expected);
        }
    }

    #[test]
    fn test_group_slots_keeps_first_seen_day_order() {
        let intervals = vec![
            interval("2023-10-03", "09:00"),
            interval("2023-10-01", "09:00"),
            interval("2023-10-03", "10:00"),
            interval("2023-10-02", "09:00"),
        ];

        let grouped = group_slots(&intervals);
        let keys: Vec<&String> = grouped.keys().collect();
        assert_eq!(keys, vec!["2023-10-03", "2023-10-01", "2023-10-02"]);
    }

    #[test]
    fn test_group_slots_empty_input() {
        assert!(group_slots(&[]).is_empty());
    }

    #[test]
    fn test_group_slots_passes_through_empty_time() {
        let grouped = group_slots(&[interval("2023-10-01", "")]);
        assert_eq!(times(&grouped["2023-10-01"]), vec![""]);
    }

    #[test]
    fn test_slots_for_day() {
        let grouped = group_slots(&[interval("2023-10-01", "09:00")]);

        assert_eq!(times(slots_for_day(&grouped, "2023-10-01")), vec!["09:00"]);
        assert!(slots_for_day(&grouped, "2023-10-05").is_empty());
        assert!(slots_for_day(&grouped, "").is_empty());
    }

    #[test]
    fn test_load_intervals() {
        let json = r#"[
            {"displayDate": "2023-10-01", "displayTime": "09:00", "displayTimeEnd": "09:30",
             "startTimeUtc": 1696150800, "endTimeUtc": 1696152600},
            {"displayDate": "2023-10-02", "displayTime": "10:00", "displayTimeEnd": "10:30",
             "startTimeUtc": 1696240800, "endTimeUtc": 1696242600}
        ]"#;

        let intervals = load_intervals(json).unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[1].display_date, "2023-10-02");
    }

    #[test]
    fn test_load_intervals_errors() {
        assert!(matches!(
            load_intervals("{\"displayDate\": \"2023-10-01\"}"),
            Err(SlotSourceError::NotAnArray)
        ));
        assert!(matches!(
            load_intervals("not json"),
            Err(SlotSourceError::Malformed(_))
        ));
        assert!(matches!(
            load_intervals("[{\"displayDate\": 1}]"),
            Err(SlotSourceError::Malformed(_))
        ));
    }
}
