use std::fmt;
use std::str::FromStr;

use super::{StatusOption, Taxonomy, Tone};

/// Status of a single event on the class calendar. Which statuses a user may
/// move an event to depends on where it currently stands; see
/// [`CalendarStatus::selectable_after`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalendarStatus {
    ValidForCancellation,
    Completed,
    AbsentWithNoticeCounted,
    Cancelled,
    AbsentWithNoticeNotCounted,
    AbsentWithoutNotice,
    FreeClass,
    FreeClassConsumed,
    FreeClassNotConsumed,
}

impl CalendarStatus {
    /// Dropdown order.
    pub const ALL: [CalendarStatus; 9] = [
        Self::ValidForCancellation,
        Self::Completed,
        Self::AbsentWithNoticeCounted,
        Self::Cancelled,
        Self::AbsentWithNoticeNotCounted,
        Self::AbsentWithoutNotice,
        Self::FreeClass,
        Self::FreeClassConsumed,
        Self::FreeClassNotConsumed,
    ];

    const AFTER_VALID_FOR_CANCELLATION: [CalendarStatus; 5] = [
        Self::Completed,
        Self::AbsentWithNoticeCounted,
        Self::Cancelled,
        Self::AbsentWithNoticeNotCounted,
        Self::AbsentWithoutNotice,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidForCancellation => "Valid for cancellation",
            Self::Completed => "Completed",
            Self::AbsentWithNoticeCounted => "Absent w/ntc counted",
            Self::Cancelled => "Cancelled",
            Self::AbsentWithNoticeNotCounted => "Absent w/ntc-not counted",
            Self::AbsentWithoutNotice => "Absent Without Notice",
            Self::FreeClass => "Free Class",
            Self::FreeClassConsumed => "FC consumed",
            Self::FreeClassNotConsumed => "FC not consumed",
        }
    }

    pub const fn option(self) -> StatusOption<'static> {
        let (icon, tone) = match self {
            Self::ValidForCancellation => ("event_available", Tone::Blue),
            Self::Completed => ("task_alt", Tone::Green),
            Self::AbsentWithNoticeCounted => ("event_note", Tone::Amber),
            Self::Cancelled => ("event_busy", Tone::Red),
            Self::AbsentWithNoticeNotCounted => ("event_note", Tone::Gray),
            Self::AbsentWithoutNotice => ("person_off", Tone::Red),
            Self::FreeClass => ("redeem", Tone::Purple),
            Self::FreeClassConsumed => ("redeem", Tone::Green),
            Self::FreeClassNotConsumed => ("redeem", Tone::Amber),
        };
        StatusOption::new(self.as_str(), self.as_str(), icon, tone)
    }

    /// Statuses an event currently in `current` may be moved to.
    ///
    /// `Valid for cancellation` narrows to the five closing outcomes; free
    /// classes (`Free Class`, `FC not consumed`) can never be marked
    /// `Completed`; everything else, unknown strings included, gets the full
    /// list.
    pub fn selectable_after(current: &str) -> Vec<StatusOption<'static>> {
        match current.parse::<CalendarStatus>() {
            Ok(Self::ValidForCancellation) => Self::AFTER_VALID_FOR_CANCELLATION
                .iter()
                .map(|s| s.option())
                .collect(),
            Ok(Self::FreeClass | Self::FreeClassNotConsumed) => Self::ALL
                .iter()
                .filter(|s| **s != Self::Completed)
                .map(|s| s.option())
                .collect(),
            _ => CALENDAR_STATUSES.options().to_vec(),
        }
    }
}

impl fmt::Display for CalendarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown calendar status")]
pub struct UnknownCalendarStatus;

impl FromStr for CalendarStatus {
    type Err = UnknownCalendarStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or(UnknownCalendarStatus)
    }
}

pub const CALENDAR_STATUSES: Taxonomy = Taxonomy::new(
    "calendar",
    &[
        CalendarStatus::ValidForCancellation.option(),
        CalendarStatus::Completed.option(),
        CalendarStatus::AbsentWithNoticeCounted.option(),
        CalendarStatus::Cancelled.option(),
        CalendarStatus::AbsentWithNoticeNotCounted.option(),
        CalendarStatus::AbsentWithoutNotice.option(),
        CalendarStatus::FreeClass.option(),
        CalendarStatus::FreeClassConsumed.option(),
        CalendarStatus::FreeClassNotConsumed.option(),
    ],
);
