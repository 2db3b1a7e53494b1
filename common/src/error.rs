//! Error taxonomy shared by the controller, the forms and the HTTP layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

use crate::list::Action;

/// Field-keyed validation messages, either produced locally by a draft or
/// returned by the backend as `{ "errors": { "email": ["..."] } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// First message for a field, used for inline rendering under the input.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|msgs| msgs.first()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// All messages in field order, joined for a single toast.
    pub fn flatten(&self) -> String {
        self.0.values().flatten().cloned().collect::<Vec<_>>().join(" ")
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Everything that can go wrong between a controller and the backend.
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ApiError {
    /// 4xx response carrying per-field messages.
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },

    /// HTTP 419: the server-side session (and its CSRF token) is gone.
    #[error("session expired")]
    SessionExpired,

    /// Any other non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// A response arrived but did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Reasons a modal form refuses to produce a payload. None of these ever
/// reach the network.
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum FormError {
    #[error("no form is open")]
    NotOpen,

    #[error("the form is already being submitted")]
    AlreadySubmitting,

    #[error("the form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error(transparent)]
    Refused(#[from] ListError),
}

/// Refusals from the list state before any request is sent.
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ListError {
    #[error("{0:?} is already in flight")]
    Busy(Action),

    #[error("no record with id {0}")]
    UnknownRecord(String),
}
