//! Records as the backend sends them, plus the traits every listed entity
//! implements.

mod class_session;
mod entity;
mod id;
mod post;
mod student;
mod teacher;

pub use class_session::{ClassDraft, ClassField, ClassSession};
pub use entity::{Entity, EntityKind, FieldValue};
pub use id::RecordId;
pub use post::{PostDraft, PostField, PromotionalPost};
pub use student::{StudentDraft, StudentField, Student, courses};
pub use teacher::{Teacher, TeacherDraft, TeacherField};

/// Deserialises `null` as the type's default; Laravel emits `null` for empty
/// nullable columns where the model wants an empty string.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
