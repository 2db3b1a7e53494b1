use serde::de::DeserializeOwned;
use std::fmt;

use crate::form::Draft;
use crate::model::RecordId;
use crate::taxonomy::{
    CALENDAR_STATUSES, CLASS_STATUSES, POST_STATUSES, STUDENT_STATUSES, TEACHER_STATUSES,
    Taxonomy,
};

/// The four record types with a list screen. Carries the naming used in
/// routes, response envelopes and user-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Teacher,
    Student,
    ClassSession,
    PromotionalPost,
}

impl EntityKind {
    /// Lower-case noun used in messages and as the response envelope key.
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::ClassSession => "class",
            Self::PromotionalPost => "post",
        }
    }

    pub const fn plural(self) -> &'static str {
        match self {
            Self::Teacher => "teachers",
            Self::Student => "students",
            Self::ClassSession => "classes",
            Self::PromotionalPost => "posts",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Teacher => "Teacher",
            Self::Student => "Student",
            Self::ClassSession => "Class",
            Self::PromotionalPost => "Post",
        }
    }

    /// Path segment under the API base.
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Teacher => "teachers",
            Self::Student => "students",
            Self::ClassSession => "teacher-classes",
            Self::PromotionalPost => "promotional-posts",
        }
    }

    pub const fn taxonomy(self) -> &'static Taxonomy {
        match self {
            Self::Teacher => &TEACHER_STATUSES,
            Self::Student => &STUDENT_STATUSES,
            Self::ClassSession => &CLASS_STATUSES,
            Self::PromotionalPost => &POST_STATUSES,
        }
    }

    /// Taxonomy used when an event is changed from the calendar.
    pub const fn calendar_taxonomy(self) -> Option<&'static Taxonomy> {
        match self {
            Self::ClassSession => Some(&CALENDAR_STATUSES),
            _ => None,
        }
    }
}

/// A sortable view of one record field. Variant order is the sort order
/// across kinds: missing values first, then numbers, then text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue<'a> {
    Missing,
    Number(i64),
    Text(&'a str),
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Self::Missing, Self::Text)
    }
}

impl<'a> From<&'a RecordId> for FieldValue<'a> {
    fn from(id: &'a RecordId) -> Self {
        match id {
            RecordId::Number(n) => Self::Number(*n),
            RecordId::Text(s) => Self::Text(s),
        }
    }
}

/// What the list view needs to know about a record type: identity, the
/// fields searched and sorted on, its status and class type, and the draft
/// used to edit it.
pub trait Entity: Clone + fmt::Debug + PartialEq + DeserializeOwned + 'static {
    /// Sortable columns.
    type Field: Copy + Eq + fmt::Debug + 'static;

    /// Form model used by add/edit modals.
    type Draft: Draft<Record = Self>;

    const KIND: EntityKind;

    fn id(&self) -> &RecordId;

    fn status(&self) -> &str;

    fn set_status(&mut self, status: &str);

    /// `None` for entities without a class-type dimension.
    fn class_type(&self) -> Option<&str> {
        None
    }

    /// Fields the search box looks into, in no particular order.
    fn search_fields(&self) -> Vec<&str>;

    fn value(&self, field: Self::Field) -> FieldValue<'_>;
}
