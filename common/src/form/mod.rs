//! Modal form state and the draft contract shared by every add/edit dialog.
//!
//! A form moves through
//! `Closed -> Open(draft) -> submitting -> Closed | Open(with errors)`.
//! Local validation runs inside [`ModalForm::submit`]; a draft that fails it
//! never produces a payload, so nothing reaches the network.

mod payload;

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{FieldErrors, FormError};
use crate::list::Notice;
use crate::model::RecordId;
use crate::taxonomy::Taxonomy;

pub use payload::{FormPayload, FormValue, ImageUpload};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(RecordId),
}

impl FormMode {
    pub fn is_add(&self) -> bool {
        matches!(self, Self::Add)
    }
}

/// Where a select input takes its choices from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choices {
    Statuses(&'static Taxonomy),
    Values(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Tel,
    Date,
    Time,
    TextArea,
    Select(Choices),
    Image,
}

/// Describes one input of a form for the given mode and draft contents.
/// Disabled fields are neither validated nor sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
    pub enabled: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, input: InputKind) -> Self {
        Self {
            name,
            label,
            input,
            required: false,
            enabled: true,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn required_if(mut self, cond: bool) -> Self {
        self.required = cond;
        self
    }

    pub const fn enabled_if(mut self, cond: bool) -> Self {
        self.enabled = cond;
        self
    }
}

/// Editable, possibly partial copy of a record. Text inputs are bound by
/// field name through `get`/`set`; unknown names read as empty and writes to
/// them are ignored.
pub trait Draft: Clone + std::fmt::Debug + PartialEq + 'static {
    type Record;

    /// Empty draft for an add form.
    fn blank() -> Self;

    /// Shallow copy of an existing record for an edit form.
    fn from_record(record: &Self::Record) -> Self;

    fn fields(&self, mode: &FormMode) -> Vec<FieldSpec>;

    fn get(&self, name: &str) -> &str;

    fn set(&mut self, name: &str, value: String);

    fn image(&self) -> Option<&ImageUpload> {
        None
    }

    fn set_image(&mut self, _upload: Option<ImageUpload>) {}

    /// Entity-specific rules on top of required/email checks.
    fn check(&self, _mode: &FormMode, _errors: &mut FieldErrors) {}

    fn validate(&self, mode: &FormMode) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for spec in self.fields(mode).into_iter().filter(|s| s.enabled) {
            if spec.input == InputKind::Image {
                continue;
            }
            let value = self.get(spec.name);
            if spec.required && value.trim().is_empty() {
                errors.insert(
                    spec.name,
                    format!("The {} field is required.", spec.label.to_lowercase()),
                );
            } else if spec.input == InputKind::Email && !value.is_empty() && !is_email(value) {
                errors.insert(spec.name, "Please enter a valid email address.");
            }
        }
        self.check(mode, &mut errors);
        errors.into_result()
    }

    /// Every enabled field in form order, the picked image as a file part.
    fn to_payload(&self, mode: &FormMode) -> FormPayload {
        let mut payload = FormPayload::new();
        for spec in self.fields(mode).into_iter().filter(|s| s.enabled) {
            match spec.input {
                InputKind::Image => {
                    if let Some(upload) = self.image() {
                        payload.push_file(spec.name, upload.clone());
                    }
                }
                _ => payload.push_text(spec.name, self.get(spec.name).trim()),
            }
        }
        payload
    }
}

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

pub fn is_email(value: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok())
        .as_ref()
        .is_none_or(|re| re.is_match(value))
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpenForm<D: Draft> {
    pub mode: FormMode,
    pub draft: D,
    pub errors: FieldErrors,
    pub submitting: bool,
    initial: D,
}

impl<D: Draft> OpenForm<D> {
    fn new(mode: FormMode, draft: D) -> Self {
        Self {
            mode,
            initial: draft.clone(),
            draft,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn fields(&self) -> Vec<FieldSpec> {
        self.draft.fields(&self.mode)
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.initial
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalForm<D: Draft> {
    Closed,
    Open(OpenForm<D>),
}

impl<D: Draft> Default for ModalForm<D> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<D: Draft> ModalForm<D> {
    pub fn open_add(&mut self) {
        *self = Self::Open(OpenForm::new(FormMode::Add, D::blank()));
    }

    pub fn open_edit(&mut self, id: RecordId, record: &D::Record) {
        *self = Self::Open(OpenForm::new(FormMode::Edit(id), D::from_record(record)));
    }

    /// Cancel: the draft is discarded.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn as_open(&self) -> Option<&OpenForm<D>> {
        match self {
            Self::Open(form) => Some(form),
            Self::Closed => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.as_open().is_some_and(|f| f.submitting)
    }

    pub fn is_dirty(&self) -> bool {
        self.as_open().is_some_and(OpenForm::is_dirty)
    }

    /// Writes a text input and clears its stale error.
    pub fn set_field(&mut self, name: &str, value: String) {
        if let Self::Open(form) = self {
            form.draft.set(name, value);
            form.errors.remove(name);
        }
    }

    pub fn set_image(&mut self, name: &str, upload: Option<ImageUpload>) {
        if let Self::Open(form) = self {
            form.draft.set_image(upload);
            form.errors.remove(name);
        }
    }

    /// Validates and, if clean, flips to submitting and returns what to send.
    pub fn submit(&mut self) -> Result<(FormMode, FormPayload), FormError> {
        let Self::Open(form) = self else {
            return Err(FormError::NotOpen);
        };
        if form.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        if let Err(errors) = form.draft.validate(&form.mode) {
            form.errors = errors.clone();
            return Err(FormError::Invalid(errors));
        }
        form.errors = FieldErrors::new();
        form.submitting = true;
        Ok((form.mode.clone(), form.draft.to_payload(&form.mode)))
    }

    /// Applies the controller's verdict: close on success, otherwise stay
    /// open showing the backend's field errors.
    pub fn settle(&mut self, notice: &Notice) {
        if notice.is_success() {
            self.close();
        } else if let Self::Open(form) = self {
            form.submitting = false;
            form.errors = notice.field_errors.clone();
        }
    }
}
