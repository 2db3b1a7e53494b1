//! Status taxonomies: fixed, ordered tables mapping a wire status string to
//! its label, icon and colour tone.
//!
//! `Taxonomy::lookup` is total. Legacy or unknown status strings resolve to a
//! neutral fallback option labelled with the raw value, so a row never
//! renders without a badge.

mod calendar;

pub use calendar::{CALENDAR_STATUSES, CalendarStatus};

/// Colour family of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Green,
    Red,
    Amber,
    Blue,
    Purple,
    Gray,
}

impl Tone {
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::Green => "text-green-700",
            Self::Red => "text-red-700",
            Self::Amber => "text-amber-700",
            Self::Blue => "text-blue-700",
            Self::Purple => "text-purple-700",
            Self::Gray => "text-gray-600",
        }
    }

    pub const fn bg_class(self) -> &'static str {
        match self {
            Self::Green => "bg-green-100",
            Self::Red => "bg-red-100",
            Self::Amber => "bg-amber-100",
            Self::Blue => "bg-blue-100",
            Self::Purple => "bg-purple-100",
            Self::Gray => "bg-gray-100",
        }
    }
}

/// One row of a taxonomy. `value` is the canonical wire string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
    pub icon: &'a str,
    pub tone: Tone,
}

impl<'a> StatusOption<'a> {
    pub const fn new(value: &'a str, label: &'a str, icon: &'a str, tone: Tone) -> Self {
        Self { value, label, icon, tone }
    }

    /// Fallback for strings outside the table.
    pub fn unknown(value: &'a str) -> Self {
        let label = if value.trim().is_empty() { "Unknown" } else { value };
        Self::new(value, label, FALLBACK_ICON, Tone::Gray)
    }

    pub const fn text_class(&self) -> &'static str {
        self.tone.text_class()
    }

    pub const fn bg_class(&self) -> &'static str {
        self.tone.bg_class()
    }
}

const FALLBACK_ICON: &str = "help_outline";

#[derive(Debug, PartialEq, Eq)]
pub struct Taxonomy {
    name: &'static str,
    options: &'static [StatusOption<'static>],
}

impl Taxonomy {
    pub const fn new(name: &'static str, options: &'static [StatusOption<'static>]) -> Self {
        Self { name, options }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Options in dropdown order.
    pub const fn options(&self) -> &'static [StatusOption<'static>] {
        self.options
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|opt| opt.value == value)
    }

    pub fn lookup<'a>(&self, value: &'a str) -> StatusOption<'a> {
        self.options
            .iter()
            .find(|opt| opt.value == value)
            .copied()
            .unwrap_or_else(|| StatusOption::unknown(value))
    }

    /// The other value of a two-state taxonomy (Active/Inactive and friends).
    /// Returns `None` for larger tables and for values outside the table.
    pub fn toggled(&self, value: &str) -> Option<&'static str> {
        match self.options {
            [a, b] if a.value == value => Some(b.value),
            [a, b] if b.value == value => Some(a.value),
            _ => None,
        }
    }
}

pub const TEACHER_STATUSES: Taxonomy = Taxonomy::new(
    "teacher",
    &[
        StatusOption::new("Active", "Active", "check_circle", Tone::Green),
        StatusOption::new("Inactive", "Inactive", "cancel", Tone::Red),
    ],
);

pub const STUDENT_STATUSES: Taxonomy = Taxonomy::new(
    "student",
    &[
        StatusOption::new("Active", "Active", "check_circle", Tone::Green),
        StatusOption::new("Inactive", "Inactive", "pause_circle", Tone::Gray),
    ],
);

pub const POST_STATUSES: Taxonomy = Taxonomy::new(
    "post",
    &[
        StatusOption::new("Published", "Published", "public", Tone::Green),
        StatusOption::new("Draft", "Draft", "edit_note", Tone::Amber),
    ],
);

pub const CLASS_STATUSES: Taxonomy = Taxonomy::new(
    "class",
    &[
        StatusOption::new("Scheduled", "Scheduled", "schedule", Tone::Blue),
        StatusOption::new("Completed (RG)", "Completed (Regular)", "task_alt", Tone::Green),
        StatusOption::new("Completed (FC)", "Completed (Free Class)", "task_alt", Tone::Purple),
        StatusOption::new("Cancelled (RG)", "Cancelled (Regular)", "event_busy", Tone::Red),
        StatusOption::new("Cancelled (FC)", "Cancelled (Free Class)", "event_busy", Tone::Amber),
        StatusOption::new("Absent (RG)", "Absent (Regular)", "person_off", Tone::Red),
        StatusOption::new("Absent (FC)", "Absent (Free Class)", "person_off", Tone::Amber),
        StatusOption::new("Rescheduled", "Rescheduled", "update", Tone::Blue),
    ],
);

/// Class kinds offered by the class-type filter and forms.
pub const CLASS_TYPES: &[&str] = &["Regular", "Free Class", "Trial"];
