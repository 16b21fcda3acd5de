//! Time-window resolution
//!
//! Maps a requested period (a named PI or a rolling-window label) to a
//! concrete half-open `[start, end)` date range. Named PIs resolve through
//! the configured window table; rolling selectors use fixed policy
//! durations.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Error, PIWindowConfig, Result};

/// Fixed rolling-window lengths. Policy constants, not estimates.
const CURRENT_PI_WEEKS: i64 = 5;
const LAST_PI_WEEKS: i64 = 10;
const LAST_QUARTER_WEEKS: i64 = 13;
const LAST_SIX_MONTHS_DAYS: i64 = 180;
const LAST_YEAR_DAYS: i64 = 365;

/// A requested reporting period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowSelector {
    /// Explicit PI label, resolved through the window table
    Pi(String),
    CurrentPi,
    LastPi,
    LastQuarter,
    LastSixMonths,
    LastYear,
}

impl FromStr for WindowSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "current_pi" => Ok(WindowSelector::CurrentPi),
            "last_pi" => Ok(WindowSelector::LastPi),
            "last_quarter" => Ok(WindowSelector::LastQuarter),
            "last_6_months" => Ok(WindowSelector::LastSixMonths),
            "last_year" => Ok(WindowSelector::LastYear),
            "" => Err(Error::validation("empty window selector")),
            label => Ok(WindowSelector::Pi(label.to_string())),
        }
    }
}

/// A concrete half-open `[start, end)` reporting range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Half-open containment: start inclusive, end exclusive
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// Resolve a selector against the configured PI table.
///
/// Named PIs require an exact label match; a missing label is
/// [`Error::WindowNotFound`], never a silent default. Rolling selectors
/// resolve to `[today - duration, today)`.
pub fn resolve(
    selector: &WindowSelector,
    windows: &[PIWindowConfig],
    today: NaiveDate,
) -> Result<TimeWindow> {
    match selector {
        WindowSelector::Pi(label) => windows
            .iter()
            .find(|w| w.name == *label)
            .map(|w| TimeWindow::new(w.start_date, day_after(w.end_date)))
            .ok_or_else(|| Error::WindowNotFound(label.clone())),
        WindowSelector::CurrentPi => Ok(rolling(today, Duration::weeks(CURRENT_PI_WEEKS))),
        WindowSelector::LastPi => Ok(rolling(today, Duration::weeks(LAST_PI_WEEKS))),
        WindowSelector::LastQuarter => Ok(rolling(today, Duration::weeks(LAST_QUARTER_WEEKS))),
        WindowSelector::LastSixMonths => Ok(rolling(today, Duration::days(LAST_SIX_MONTHS_DAYS))),
        WindowSelector::LastYear => Ok(rolling(today, Duration::days(LAST_YEAR_DAYS))),
    }
}

/// First configured window whose inclusive range contains the date.
///
/// `None` is the "no window found" sentinel; callers must handle it
/// explicitly rather than treating resolution as always succeeding.
pub fn pi_containing(date: NaiveDate, windows: &[PIWindowConfig]) -> Option<&PIWindowConfig> {
    windows.iter().find(|w| w.contains(date))
}

fn rolling(today: NaiveDate, length: Duration) -> TimeWindow {
    TimeWindow::new(today - length, today)
}

fn day_after(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn table() -> Vec<PIWindowConfig> {
        vec![
            PIWindowConfig {
                name: "25Q4".to_string(),
                start_date: date(2025, 10, 1),
                end_date: date(2025, 12, 31),
            },
            PIWindowConfig {
                name: "26Q1".to_string(),
                start_date: date(2026, 1, 1),
                end_date: date(2026, 3, 31),
            },
        ]
    }

    #[test]
    fn named_pi_resolves_to_half_open_range() {
        let window = resolve(
            &WindowSelector::Pi("26Q1".to_string()),
            &table(),
            date(2026, 5, 1),
        )
        .unwrap();
        assert_eq!(window.start, date(2026, 1, 1));
        assert_eq!(window.end, date(2026, 4, 1));
        assert!(window.contains(date(2026, 3, 31)));
        assert!(!window.contains(date(2026, 4, 1)));
    }

    #[test]
    fn missing_pi_label_is_window_not_found() {
        let err = resolve(
            &WindowSelector::Pi("24Q1".to_string()),
            &table(),
            date(2026, 5, 1),
        )
        .unwrap_err();
        assert!(matches!(err, Error::WindowNotFound(label) if label == "24Q1"));
    }

    #[test]
    fn rolling_window_lengths_are_fixed_policy() {
        let today = date(2026, 6, 1);
        let cases = [
            (WindowSelector::CurrentPi, 35),
            (WindowSelector::LastPi, 70),
            (WindowSelector::LastQuarter, 91),
            (WindowSelector::LastSixMonths, 180),
            (WindowSelector::LastYear, 365),
        ];
        for (selector, days) in cases {
            let window = resolve(&selector, &[], today).unwrap();
            assert_eq!(window.end, today);
            assert_eq!((window.end - window.start).num_days(), days);
        }
    }

    #[test]
    fn date_resolves_to_first_containing_window() {
        let windows = table();
        let hit = pi_containing(date(2026, 1, 7), &windows).unwrap();
        assert_eq!(hit.name, "26Q1");
    }

    #[test]
    fn unmatched_date_yields_none_not_error() {
        assert!(pi_containing(date(2024, 1, 1), &table()).is_none());
    }

    #[test]
    fn overlapping_windows_pick_configuration_order() {
        let mut windows = table();
        windows.insert(
            0,
            PIWindowConfig {
                name: "overlap".to_string(),
                start_date: date(2026, 1, 1),
                end_date: date(2026, 6, 30),
            },
        );
        let hit = pi_containing(date(2026, 1, 7), &windows).unwrap();
        assert_eq!(hit.name, "overlap");
    }

    #[test]
    fn selector_parses_rolling_labels_and_pi_names() {
        assert_eq!(
            "last_quarter".parse::<WindowSelector>().unwrap(),
            WindowSelector::LastQuarter
        );
        assert_eq!(
            "26Q1".parse::<WindowSelector>().unwrap(),
            WindowSelector::Pi("26Q1".to_string())
        );
        assert!("".parse::<WindowSelector>().is_err());
    }
}
