use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::form::{Choices, Draft, FieldSpec, FormMode, FormPayload, ImageUpload, InputKind};
use crate::model::{Entity, EntityKind, FieldValue, RecordId};
use crate::taxonomy::{CLASS_TYPES, STUDENT_STATUSES};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grade: String,
    #[serde(default, deserialize_with = "courses::deserialize")]
    pub courses: Vec<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, alias = "classtype")]
    pub class_type: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The only place the comma-separated wire form of `courses` is handled.
pub mod courses {
    use serde::{Deserialize, Deserializer};

    pub fn split(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn join(courses: &[String]) -> String {
        courses.join(", ")
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Joined(String),
    }

    /// Accepts a JSON array, a legacy comma-separated string, or `null`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::List(list)) => list
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            Some(Raw::Joined(raw)) => split(&raw),
            None => Vec::new(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudentField {
    Name,
    Grade,
    Status,
    ClassType,
}

impl Entity for Student {
    type Field = StudentField;
    type Draft = StudentDraft;

    const KIND: EntityKind = EntityKind::Student;

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
        self.class_type.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.grade.as_str()];
        fields.extend(self.courses.iter().map(String::as_str));
        fields
    }

    fn value(&self, field: StudentField) -> FieldValue<'_> {
        match field {
            StudentField::Name => self.name.as_str().into(),
            StudentField::Grade => self.grade.as_str().into(),
            StudentField::Status => self.status.as_str().into(),
            StudentField::ClassType => self.class_type.as_deref().into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub grade: String,
    /// Raw text of the courses input; split only when the payload is built.
    pub courses: String,
    pub parent_name: String,
    pub phone: String,
    pub status: String,
    pub class_type: String,
    pub image: Option<ImageUpload>,
}

impl Draft for StudentDraft {
    type Record = Student;

    fn blank() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            grade: String::new(),
            courses: String::new(),
            parent_name: String::new(),
            phone: String::new(),
            status: "Active".to_string(),
            class_type: "Regular".to_string(),
            image: None,
        }
    }

    fn from_record(s: &Student) -> Self {
        Self {
            name: s.name.clone(),
            email: s.email.clone().unwrap_or_default(),
            grade: s.grade.clone(),
            courses: courses::join(&s.courses),
            parent_name: s.parent_name.clone().unwrap_or_default(),
            phone: s.phone.clone().unwrap_or_default(),
            status: s.status.clone(),
            class_type: s.class_type.clone().unwrap_or_default(),
            image: None,
        }
    }

    fn fields(&self, _mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "Name", InputKind::Text).required(),
            FieldSpec::new("email", "Email", InputKind::Email),
            FieldSpec::new("grade", "Grade", InputKind::Text).required(),
            FieldSpec::new("courses", "Courses", InputKind::Text),
            FieldSpec::new("parent_name", "Parent name", InputKind::Text),
            FieldSpec::new("phone", "Phone", InputKind::Tel),
            FieldSpec::new("class_type", "Class type", InputKind::Select(Choices::Values(CLASS_TYPES)))
                .required(),
            FieldSpec::new("status", "Status", InputKind::Select(Choices::Statuses(&STUDENT_STATUSES)))
                .required(),
            FieldSpec::new("image", "Photo", InputKind::Image),
        ]
    }

    fn get(&self, name: &str) -> &str {
        match name {
            "name" => &self.name,
            "email" => &self.email,
            "grade" => &self.grade,
            "courses" => &self.courses,
            "parent_name" => &self.parent_name,
            "phone" => &self.phone,
            "status" => &self.status,
            "class_type" => &self.class_type,
            _ => "",
        }
    }

    fn set(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "grade" => self.grade = value,
            "courses" => self.courses = value,
            "parent_name" => self.parent_name = value,
            "phone" => self.phone = value,
            "status" => self.status = value,
            "class_type" => self.class_type = value,
            _ => {}
        }
    }

    fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    fn set_image(&mut self, upload: Option<ImageUpload>) {
        self.image = upload;
    }

    fn to_payload(&self, mode: &FormMode) -> FormPayload {
        let mut payload = FormPayload::new();
        for spec in self.fields(mode) {
            match spec.name {
                "courses" => {
                    payload.push_text("courses", courses::join(&courses::split(&self.courses)))
                }
                "image" => {
                    if let Some(upload) = &self.image {
                        payload.push_file("image", upload.clone());
                    }
                }
                name => payload.push_text(name, self.get(name).trim()),
            }
        }
        payload
    }
}
