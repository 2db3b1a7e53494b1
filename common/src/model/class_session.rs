use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::calendar::{Weekday, parse_time};
use crate::error::FieldErrors;
use crate::form::{Choices, Draft, FieldSpec, FormMode, InputKind};
use crate::model::{Entity, EntityKind, FieldValue, RecordId};
use crate::taxonomy::{CLASS_STATUSES, CLASS_TYPES};

/// One booked class between a teacher and a student. `date` is
/// `YYYY-MM-DD`; times are `HH:MM` or `HH:MM:SS`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: RecordId,
    pub student_name: String,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default, alias = "classtype", deserialize_with = "null_as_default")]
    pub class_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ClassSession {
    /// Explicit `day` wins; otherwise derived from `date`.
    pub fn weekday(&self) -> Option<Weekday> {
        self.day
            .as_deref()
            .and_then(|d| d.parse().ok())
            .or_else(|| Weekday::from_date(&self.date))
    }

    /// Minutes since midnight of the start time.
    pub fn start_minutes(&self) -> Option<u32> {
        parse_time(&self.start_time)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassField {
    StudentName,
    TeacherName,
    ClassType,
    Status,
    Date,
    StartTime,
}

impl Entity for ClassSession {
    type Field = ClassField;
    type Draft = ClassDraft;

    const KIND: EntityKind = EntityKind::ClassSession;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn class_type(&self) -> Option<&str> {
        Some(&self.class_type)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.student_name]
    }

    fn value(&self, field: ClassField) -> FieldValue<'_> {
        match field {
            ClassField::StudentName => self.student_name.as_str().into(),
            ClassField::TeacherName => self.teacher_name.as_deref().into(),
            ClassField::ClassType => self.class_type.as_str().into(),
            ClassField::Status => self.status.as_str().into(),
            ClassField::Date => self.date.as_str().into(),
            ClassField::StartTime => self
                .start_minutes()
                .map_or(FieldValue::Missing, |m| FieldValue::Number(i64::from(m))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassDraft {
    pub student_name: String,
    pub teacher_name: String,
    pub class_type: String,
    pub status: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
}

impl Draft for ClassDraft {
    type Record = ClassSession;

    fn blank() -> Self {
        Self {
            student_name: String::new(),
            teacher_name: String::new(),
            class_type: "Regular".to_string(),
            status: "Scheduled".to_string(),
            date: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            notes: String::new(),
        }
    }

    fn from_record(c: &ClassSession) -> Self {
        Self {
            student_name: c.student_name.clone(),
            teacher_name: c.teacher_name.clone().unwrap_or_default(),
            class_type: c.class_type.clone(),
            status: c.status.clone(),
            date: c.date.clone(),
            start_time: c.start_time.clone(),
            end_time: c.end_time.clone(),
            notes: c.notes.clone().unwrap_or_default(),
        }
    }

    fn fields(&self, _mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("student_name", "Student", InputKind::Text).required(),
            FieldSpec::new("teacher_name", "Teacher", InputKind::Text),
            FieldSpec::new("class_type", "Class type", InputKind::Select(Choices::Values(CLASS_TYPES)))
                .required(),
            FieldSpec::new("status", "Status", InputKind::Select(Choices::Statuses(&CLASS_STATUSES)))
                .required(),
            FieldSpec::new("date", "Date", InputKind::Date).required(),
            FieldSpec::new("start_time", "Start time", InputKind::Time).required(),
            FieldSpec::new("end_time", "End time", InputKind::Time).required(),
            FieldSpec::new("notes", "Notes", InputKind::TextArea),
        ]
    }

    fn get(&self, name: &str) -> &str {
        match name {
            "student_name" => &self.student_name,
            "teacher_name" => &self.teacher_name,
            "class_type" => &self.class_type,
            "status" => &self.status,
            "date" => &self.date,
            "start_time" => &self.start_time,
            "end_time" => &self.end_time,
            "notes" => &self.notes,
            _ => "",
        }
    }

    fn set(&mut self, name: &str, value: String) {
        match name {
            "student_name" => self.student_name = value,
            "teacher_name" => self.teacher_name = value,
            "class_type" => self.class_type = value,
            "status" => self.status = value,
            "date" => self.date = value,
            "start_time" => self.start_time = value,
            "end_time" => self.end_time = value,
            "notes" => self.notes = value,
            _ => {}
        }
    }

    fn check(&self, _mode: &FormMode, errors: &mut FieldErrors) {
        if !self.date.is_empty() && Weekday::from_date(&self.date).is_none() {
            errors.insert("date", "Please enter a valid date.");
        }
        if let (Some(start), Some(end)) = (parse_time(&self.start_time), parse_time(&self.end_time))
        {
            if end <= start {
                errors.insert("end_time", "The end time must be after the start time.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ClassDraft {
        ClassDraft {
            student_name: "Lia".into(),
            date: "2024-06-03".into(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            ..ClassDraft::blank()
        }
    }

    #[test]
    fn end_before_start_is_rejected() {
        let bad = ClassDraft { end_time: "08:30".into(), ..draft() };
        let errors = bad.validate(&FormMode::Add).unwrap_err();
        assert!(errors.contains("end_time"));
        assert!(draft().validate(&FormMode::Add).is_ok());
    }

    #[test]
    fn weekday_prefers_explicit_day() {
        let mut session: ClassSession = serde_json::from_str(
            r#"{"id": 1, "student_name": "Lia", "date": "2024-06-03", "start_time": "09:00:00"}"#,
        )
        .unwrap();
        assert_eq!(session.weekday(), Some(Weekday::Monday));
        session.day = Some("Friday".into());
        assert_eq!(session.weekday(), Some(Weekday::Friday));
        assert_eq!(session.value(ClassField::StartTime), FieldValue::Number(540));
    }

    #[test]
    fn payload_sends_every_field_trimmed() {
        let payload = ClassDraft { student_name: " Lia ".into(), ..draft() }.to_payload(&FormMode::Add);
        assert_eq!(payload.get_text("student_name"), Some("Lia"));
        assert_eq!(payload.get_text("class_type"), Some("Regular"));
        assert_eq!(payload.get_text("notes"), Some(""));
    }
}
