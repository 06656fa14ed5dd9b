//! What the calendar widget is told to render.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::instant::anchor_date;

/// Default view of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarGranularity {
    Day,
    #[default]
    Week,
}

/// Fixed display settings handed to the calendar widget with the intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarView {
    /// Date the calendar opens on; the first day of the anchor week.
    pub default_date: NaiveDate,
    pub default_view: CalendarGranularity,
    /// First visible time of day.
    pub min_time: NaiveTime,
    /// Last visible time of day.
    pub max_time: NaiveTime,
    pub scroll_to_time: NaiveTime,
    pub toolbar: bool,
    pub selectable: bool,
}

fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).expect("hour below 24")
}

impl Default for CalendarView {
    fn default() -> Self {
        Self {
            default_date: anchor_date(),
            default_view: CalendarGranularity::Week,
            min_time: on_the_hour(8),
            max_time: on_the_hour(23),
            scroll_to_time: on_the_hour(6),
            toolbar: false,
            selectable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_serializes() {
        let json = serde_json::to_value(CalendarView::default()).unwrap();
        assert_eq!(json["default_date"], "2023-01-01");
        assert_eq!(json["default_view"], "week");
        assert_eq!(json["min_time"], "08:00:00");
        assert_eq!(json["max_time"], "23:00:00");
        assert_eq!(json["scroll_to_time"], "06:00:00");
        assert_eq!(json["toolbar"], false);
    }
}
