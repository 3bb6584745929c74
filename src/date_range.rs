// Calendar range picking for check-in / check-out
use crate::format::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Marker drawn on a calendar day that belongs to the selected range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMarker {
    RangeStart,
    RangeMiddle,
    RangeEnd,
}

pub type Decorations = BTreeMap<NaiveDate, DayMarker>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateSelection {
    pub start: Option<NaiveDate>,
    // Never earlier than `start`
    pub end: Option<NaiveDate>,
    pub label: String,
}

impl DateSelection {
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

// Turns single calendar taps into a check-in / check-out range. A tap with
// nothing selected, or with a complete range, starts a new range. A tap with
// only a start date completes the range when it falls on or after the start,
// otherwise it replaces the start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateRangeSelector {
    selection: DateSelection,
}

impl DateRangeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.selection.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.selection.end
    }

    pub fn label(&self) -> &str {
        &self.selection.label
    }

    pub fn on_day_tap(&mut self, day: NaiveDate) -> &DateSelection {
        match (self.selection.start, self.selection.end) {
            (Some(start), None) if day >= start => {
                self.selection.end = Some(day);
                self.selection.label = format!("{} - {}", format_date(start), format_date(day));
            }
            _ => self.begin(day),
        }
        &self.selection
    }

    // One decoration per selected day. When start and end fall on the same
    // day the end marker is kept.
    pub fn decorations(&self) -> Decorations {
        let mut marked = Decorations::new();

        if let Some(start) = self.selection.start {
            marked.insert(start, DayMarker::RangeStart);
        }

        if let Some(end) = self.selection.end {
            marked.insert(end, DayMarker::RangeEnd);
        }

        if let (Some(start), Some(end)) = (self.selection.start, self.selection.end) {
            let mut current = start.succ_opt();
            while let Some(day) = current.filter(|day| *day < end) {
                marked.insert(day, DayMarker::RangeMiddle);
                current = day.succ_opt();
            }
        }

        marked
    }

    pub fn clear(&mut self) {
        self.selection = DateSelection::default();
    }

    fn begin(&mut self, day: NaiveDate) {
        self.selection = DateSelection {
            start: Some(day),
            end: None,
            label: format_date(day),
        };
    }
}

// Calendar widgets report taps as ISO 8601 day strings
pub fn parse_day(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
}
