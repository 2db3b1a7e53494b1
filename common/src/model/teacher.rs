use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::error::FieldErrors;
use crate::form::{Choices, Draft, FieldSpec, FormMode, FormPayload, ImageUpload, InputKind};
use crate::model::{Entity, EntityKind, FieldValue, RecordId};
use crate::taxonomy::TEACHER_STATUSES;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Public URL of the profile picture.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeacherField {
    Name,
    Email,
    Username,
    Status,
}

impl Entity for Teacher {
    type Field = TeacherField;
    type Draft = TeacherDraft;

    const KIND: EntityKind = EntityKind::Teacher;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.username]
    }

    fn value(&self, field: TeacherField) -> FieldValue<'_> {
        match field {
            TeacherField::Name => self.name.as_str().into(),
            TeacherField::Email => self.email.as_str().into(),
            TeacherField::Username => self.username.as_str().into(),
            TeacherField::Status => self.status.as_str().into(),
        }
    }
}

/// Besides the record fields, carries the password pair. On edit an empty
/// password means "keep the current one": the confirmation input is disabled
/// and neither field is sent.
#[derive(Clone, Debug, PartialEq)]
pub struct TeacherDraft {
    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub status: String,
    pub password: String,
    pub confirm_password: String,
    pub image: Option<ImageUpload>,
}

impl TeacherDraft {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Whether this submission sets a password at all.
    pub fn changes_password(&self, mode: &FormMode) -> bool {
        mode.is_add() || !self.password.is_empty()
    }

    pub fn confirm_password_enabled(&self, mode: &FormMode) -> bool {
        self.changes_password(mode)
    }
}

impl Draft for TeacherDraft {
    type Record = Teacher;

    fn blank() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            username: String::new(),
            phone: String::new(),
            status: "Active".to_string(),
            password: String::new(),
            confirm_password: String::new(),
            image: None,
        }
    }

    fn from_record(t: &Teacher) -> Self {
        Self {
            name: t.name.clone(),
            email: t.email.clone(),
            username: t.username.clone(),
            phone: t.phone.clone().unwrap_or_default(),
            status: t.status.clone(),
            password: String::new(),
            confirm_password: String::new(),
            image: None,
        }
    }

    fn fields(&self, mode: &FormMode) -> Vec<FieldSpec> {
        let confirm = self.confirm_password_enabled(mode);
        vec![
            FieldSpec::new("name", "Name", InputKind::Text).required(),
            FieldSpec::new("email", "Email", InputKind::Email).required(),
            FieldSpec::new("username", "Username", InputKind::Text).required(),
            FieldSpec::new("phone", "Phone", InputKind::Tel),
            FieldSpec::new("status", "Status", InputKind::Select(Choices::Statuses(&TEACHER_STATUSES)))
                .required(),
            FieldSpec::new("password", "Password", InputKind::Password).required_if(mode.is_add()),
            FieldSpec::new("confirm_password", "Confirm password", InputKind::Password)
                .required_if(confirm)
                .enabled_if(confirm),
            FieldSpec::new("image", "Profile picture", InputKind::Image),
        ]
    }

    fn get(&self, name: &str) -> &str {
        match name {
            "name" => &self.name,
            "email" => &self.email,
            "username" => &self.username,
            "phone" => &self.phone,
            "status" => &self.status,
            "password" => &self.password,
            "confirm_password" => &self.confirm_password,
            _ => "",
        }
    }

    fn set(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "username" => self.username = value,
            "phone" => self.phone = value,
            "status" => self.status = value,
            "password" => {
                self.password = value;
                if self.password.is_empty() {
                    self.confirm_password.clear();
                }
            }
            "confirm_password" => self.confirm_password = value,
            _ => {}
        }
    }

    fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    fn set_image(&mut self, upload: Option<ImageUpload>) {
        self.image = upload;
    }

    fn check(&self, mode: &FormMode, errors: &mut FieldErrors) {
        if self.changes_password(mode)
            && !self.password.is_empty()
            && !self.passwords_match()
        {
            errors.insert("confirm_password", "Passwords do not match.");
        }
    }

    fn to_payload(&self, mode: &FormMode) -> FormPayload {
        let mut payload = FormPayload::new();
        for spec in self.fields(mode).into_iter().filter(|s| s.enabled) {
            match spec.name {
                "password" | "confirm_password" if !self.changes_password(mode) => {}
                "image" => {
                    if let Some(upload) = &self.image {
                        payload.push_file("image", upload.clone());
                    }
                }
                "password" | "confirm_password" => payload.push_text(spec.name, self.get(spec.name)),
                name => payload.push_text(name, self.get(name).trim()),
            }
        }
        payload.rename("confirm_password", "password_confirmation");
        payload
    }
}
