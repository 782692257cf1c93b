//! Date range presets for filtering transactions
//!
//! Ranges are computed in the calendar of the caller's time zone and stored
//! as UTC instants. Two ranges are equal only when both boundary instants are
//! identical to the millisecond.

use chrono::{
    DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Years covered by the "all time" preset
const ALL_TIME_YEARS: i32 = 10;

/// Inclusive pair of boundary instants, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Build a range, returning `None` when `start > end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Range covering exactly one instant
    pub fn single(at: DateTime<Utc>) -> Self {
        Self { start: at, end: at }
    }

    /// Whether an instant falls inside the range (both ends inclusive)
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Which preset, if any, this range equals when presets are computed
    /// from `now`
    pub fn active_preset<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DatePreset> {
        DatePreset::ALL
            .iter()
            .copied()
            .find(|preset| preset.range(now) == *self)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.start.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.end.format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

/// The fixed set of date filter presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatePreset {
    #[default]
    ThisMonth,
    LastMonth,
    AllTime,
}

impl DatePreset {
    pub const ALL: [DatePreset; 3] = [Self::ThisMonth, Self::LastMonth, Self::AllTime];

    /// Compute this preset's range relative to `now`
    pub fn range<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateRange {
        match self {
            Self::ThisMonth => this_month_range(now),
            Self::LastMonth => last_month_range(now),
            Self::AllTime => all_time_range(now),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::AllTime => "All Time",
        }
    }

    /// Name accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThisMonth => "this-month",
            Self::LastMonth => "last-month",
            Self::AllTime => "all-time",
        }
    }
}

impl fmt::Display for DatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DatePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown range '{}'. Use this-month, last-month or all-time",
                    s
                )
            })
    }
}

/// First day of the current month 00:00:00.000 through the last day
/// 23:59:59.999
pub fn this_month_range<Tz: TimeZone>(now: &DateTime<Tz>) -> DateRange {
    let first = first_of_month(now.date_naive());
    month_range(&now.timezone(), first)
}

/// The same bounds applied to the month before `now`'s month
pub fn last_month_range<Tz: TimeZone>(now: &DateTime<Tz>) -> DateRange {
    let first = first_of_month(now.date_naive());
    let previous = first
        .checked_sub_months(Months::new(1))
        .unwrap_or(first);
    month_range(&now.timezone(), previous)
}

/// January 1st ten years before `now` through the end of `now`'s day
pub fn all_time_range<Tz: TimeZone>(now: &DateTime<Tz>) -> DateRange {
    let tz = now.timezone();
    let today = now.date_naive();
    let start_day = NaiveDate::from_ymd_opt(today.year() - ALL_TIME_YEARS, 1, 1).unwrap_or(today);
    DateRange {
        start: resolve_local(&tz, start_day.and_time(NaiveTime::MIN)),
        end: resolve_local(&tz, today.and_time(end_of_day())),
    }
}

fn month_range<Tz: TimeZone>(tz: &Tz, first: NaiveDate) -> DateRange {
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);
    DateRange {
        start: resolve_local(tz, first.and_time(NaiveTime::MIN)),
        end: resolve_local(tz, last.and_time(end_of_day())),
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN)
}

/// Map a wall-clock time to an instant, taking the earlier instant when
/// the wall time is ambiguous and treating a skipped wall time as UTC
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&local))
}
