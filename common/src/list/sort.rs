use std::cmp::Ordering;

use crate::model::Entity;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "arrow_upward",
            Self::Descending => "arrow_downward",
        }
    }
}

/// A single active sort key. There is no secondary tiebreak; equal keys keep
/// collection order because the visible list is sorted stably.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState<F> {
    pub key: F,
    pub direction: SortDirection,
}

impl<F: Copy + Eq> SortState<F> {
    pub fn ascending(key: F) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Header click: the same key flips direction, a new key starts
    /// ascending.
    pub fn toggle(current: Option<Self>, key: F) -> Self {
        match current {
            Some(state) if state.key == key => Self {
                key,
                direction: state.direction.flipped(),
            },
            _ => Self::ascending(key),
        }
    }
}

pub fn compare<E: Entity>(a: &E, b: &E, sort: &SortState<E::Field>) -> Ordering {
    let ord = a.value(sort.key).cmp(&b.value(sort.key));
    match sort.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassField, ClassSession, Teacher, TeacherField};
    use serde_json::json;

    fn teacher(id: i64, name: &str) -> Teacher {
        serde_json::from_value(json!({ "id": id, "name": name, "email": "x@y.z" })).unwrap()
    }

    #[test]
    fn toggle_flips_same_key_and_resets_new_key() {
        let first = SortState::toggle(None, TeacherField::Name);
        assert_eq!(first, SortState::ascending(TeacherField::Name));

        let second = SortState::toggle(Some(first), TeacherField::Name);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortState::toggle(Some(second), TeacherField::Email);
        assert_eq!(third, SortState::ascending(TeacherField::Email));
    }

    #[test]
    fn directions_are_sign_inverses() {
        let people = [teacher(1, "Ana"), teacher(2, "Ben"), teacher(3, "Ana"), teacher(4, "")];
        let asc = SortState::ascending(TeacherField::Name);
        let desc = SortState { direction: SortDirection::Descending, ..asc };
        for a in &people {
            for b in &people {
                assert_eq!(compare(a, b, &asc), compare(a, b, &desc).reverse());
            }
        }
    }

    #[test]
    fn start_times_sort_numerically() {
        let class = |id: i64, start: &str| -> ClassSession {
            serde_json::from_value(json!({ "id": id, "student_name": "s", "start_time": start }))
                .unwrap()
        };
        let early = class(1, "9:05");
        let late = class(2, "10:00");
        let unknown = class(3, "");
        let asc = SortState::ascending(ClassField::StartTime);
        assert_eq!(compare(&early, &late, &asc), Ordering::Less);
        assert_eq!(compare(&unknown, &early, &asc), Ordering::Less);
    }
}
