//! Weekly and daily class calendar grids.
//!
//! A grid is a time-slot × weekday lookup table filled by linear filtering
//! over the visible classes. Overlapping classes simply share a cell.

use std::fmt;
use std::str::FromStr;

use crate::config::ClientConfig;
use crate::model::ClassSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    pub fn short(self) -> &'static str {
        &self.name()[..3]
    }

    /// Index as used by JavaScript's `Date.getDay()` (0 = Sunday).
    pub fn from_js_day(day: u32) -> Self {
        match day % 7 {
            0 => Self::Sunday,
            n => Self::ALL[n as usize - 1],
        }
    }

    /// Day of week of a `YYYY-MM-DD` date, `None` if it is not a real date.
    pub fn from_date(date: &str) -> Option<Self> {
        let mut parts = date.get(..10)?.split('-');
        let year: i64 = parts.next()?.parse().ok()?;
        let month: usize = parts.next()?.parse().ok()?;
        let day: i64 = parts.next()?.parse().ok()?;
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return None;
        }

        const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let y = if month < 3 { year - 1 } else { year };
        let dow = (y + y / 4 - y / 100 + y / 400 + OFFSETS[month - 1] + day).rem_euclid(7);
        Some(Self::from_js_day(dow as u32))
    }
}

fn days_in_month(year: i64, month: usize) -> i64 {
    match month {
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ();

    /// Full names or three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| {
                let name = d.name().to_ascii_lowercase();
                s == name || s == name[..3]
            })
            .ok_or(())
    }
}

/// `HH:MM` or `HH:MM:SS` to minutes since midnight.
pub fn parse_time(raw: &str) -> Option<u32> {
    let mut parts = raw.trim().split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Half-open range of minutes since midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: u32,
    pub end: u32,
}

impl TimeSlot {
    pub fn contains(&self, minutes: u32) -> bool {
        (self.start..self.end).contains(&minutes)
    }

    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.start / 60, self.start % 60)
    }

    /// Slots covering the configured opening hours, never past midnight.
    pub fn day_slots(config: &ClientConfig) -> Vec<TimeSlot> {
        let step = config.slot_minutes.clamp(1, 24 * 60);
        let first = config.calendar_start_hour.min(23) * 60;
        let end = config.calendar_end_hour.min(24) * 60;
        (first..end)
            .step_by(step as usize)
            .map(|start| TimeSlot {
                start,
                end: (start + step).min(end),
            })
            .collect()
    }
}

fn placed_in(session: &ClassSession, day: Weekday, slot: &TimeSlot) -> bool {
    session.weekday() == Some(day) && session.start_minutes().is_some_and(|m| slot.contains(m))
}

/// `rows[i][d]` holds the classes starting inside slot `i` on weekday `d`
/// (Monday = 0), in the order they were given.
#[derive(Debug)]
pub struct WeekGrid<'a> {
    pub slots: Vec<TimeSlot>,
    pub rows: Vec<[Vec<&'a ClassSession>; 7]>,
    /// Classes that fit no cell (no parseable day or time, or outside hours).
    pub unplaced: Vec<&'a ClassSession>,
}

impl<'a> WeekGrid<'a> {
    pub fn build(sessions: &[&'a ClassSession], slots: Vec<TimeSlot>) -> Self {
        let rows = slots
            .iter()
            .map(|slot| {
                Weekday::ALL.map(|day| {
                    sessions
                        .iter()
                        .copied()
                        .filter(|s| placed_in(s, day, slot))
                        .collect()
                })
            })
            .collect();
        let unplaced = sessions
            .iter()
            .copied()
            .filter(|s| {
                !slots
                    .iter()
                    .any(|slot| Weekday::ALL.iter().any(|day| placed_in(s, *day, slot)))
            })
            .collect();

        Self { slots, rows, unplaced }
    }

    pub fn cell(&self, slot: usize, day: Weekday) -> &[&'a ClassSession] {
        self.rows
            .get(slot)
            .map(|row| row[day as usize].as_slice())
            .unwrap_or(&[])
    }

    /// Daily view: one column of the weekly grid.
    pub fn day_column(&self, day: Weekday) -> Vec<(TimeSlot, &[&'a ClassSession])> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (*slot, self.cell(i, day)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;

    fn session(id: i64, date: &str, start: &str) -> ClassSession {
        ClassSession {
            id: RecordId::Number(id),
            student_name: format!("student {id}"),
            teacher_name: None,
            class_type: "Regular".into(),
            status: "Scheduled".into(),
            date: date.into(),
            day: None,
            start_time: start.into(),
            end_time: String::new(),
            notes: None,
        }
    }

    #[test]
    fn weekday_from_date() {
        assert_eq!(Weekday::from_date("2024-06-03"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_date("2000-01-01"), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_date("2024-02-29"), Some(Weekday::Thursday));
        assert_eq!(Weekday::from_date("2023-02-29"), None);
        assert_eq!(Weekday::from_date("2024-13-01"), None);
        assert_eq!(Weekday::from_date("soon"), None);
    }

    #[test]
    fn weekday_names_parse_loosely() {
        assert_eq!("wed".parse::<Weekday>(), Ok(Weekday::Wednesday));
        assert_eq!(" SUNDAY ".parse::<Weekday>(), Ok(Weekday::Sunday));
        assert!("funday".parse::<Weekday>().is_err());
        assert_eq!(Weekday::from_js_day(0), Weekday::Sunday);
        assert_eq!(Weekday::from_js_day(1), Weekday::Monday);
    }

    #[test]
    fn times_parse_with_or_without_seconds() {
        assert_eq!(parse_time("09:30"), Some(570));
        assert_eq!(parse_time("14:00:00"), Some(840));
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time(""), None);
    }

    #[test]
    fn out_of_range_hours_do_not_overflow() {
        let late_start = ClientConfig {
            calendar_start_hour: 80_000_000,
            slot_minutes: u32::MAX,
            ..ClientConfig::default()
        };
        assert!(TimeSlot::day_slots(&late_start).is_empty());

        let past_midnight = ClientConfig {
            calendar_start_hour: 22,
            calendar_end_hour: 90,
            slot_minutes: u32::MAX,
            ..ClientConfig::default()
        };
        assert_eq!(TimeSlot::day_slots(&past_midnight), vec![TimeSlot { start: 1320, end: 1440 }]);
    }

    #[test]
    fn slots_follow_config() {
        let config = ClientConfig {
            calendar_start_hour: 8,
            calendar_end_hour: 10,
            slot_minutes: 45,
            ..ClientConfig::default()
        };
        let slots = TimeSlot::day_slots(&config);
        assert_eq!(
            slots,
            vec![
                TimeSlot { start: 480, end: 525 },
                TimeSlot { start: 525, end: 570 },
                TimeSlot { start: 570, end: 600 },
            ]
        );
        assert_eq!(slots[1].label(), "08:45");
    }

    #[test]
    fn sessions_land_in_their_cell() {
        let a = session(1, "2024-06-03", "09:15");
        let b = session(2, "2024-06-03", "09:45:00");
        let c = session(3, "2024-06-05", "08:00");
        let late = session(4, "2024-06-05", "22:00");
        let sessions = vec![&a, &b, &c, &late];

        let grid = WeekGrid::build(&sessions, TimeSlot::day_slots(&ClientConfig::default()));

        let ids = |cell: &[&ClassSession]| cell.iter().map(|s| s.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(grid.cell(1, Weekday::Monday)), vec![RecordId::Number(1), RecordId::Number(2)]);
        assert_eq!(ids(grid.cell(0, Weekday::Wednesday)), vec![RecordId::Number(3)]);
        assert!(grid.cell(0, Weekday::Monday).is_empty());
        assert!(grid.cell(99, Weekday::Monday).is_empty());
        assert_eq!(ids(&grid.unplaced), vec![RecordId::Number(4)]);

        let wednesday = grid.day_column(Weekday::Wednesday);
        assert_eq!(wednesday.len(), 12);
        assert_eq!(wednesday[0].1.len(), 1);
    }
}
