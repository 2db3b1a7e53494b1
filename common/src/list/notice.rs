use log::{info, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, FieldErrors, ListError};
use crate::model::EntityKind;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Reloading the page...";

/// Backend operation a notice reports on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Load,
    Add,
    Update,
    Remove,
    Status,
}

impl Op {
    fn failure_text(self, kind: EntityKind) -> String {
        match self {
            Self::Load => format!("Error loading {}", kind.plural()),
            Self::Add => format!("Error adding {}", kind.singular()),
            Self::Update => format!("Error updating {}", kind.singular()),
            Self::Remove => format!("Error deleting {}", kind.singular()),
            Self::Status => format!("Error updating {} status", kind.singular()),
        }
    }

    fn success_text(self, kind: EntityKind) -> String {
        match self {
            Self::Load => format!("{} loaded.", kind.plural()),
            Self::Add => format!("{} added successfully.", kind.title()),
            Self::Update => format!("{} updated successfully.", kind.title()),
            Self::Remove => format!("{} deleted successfully.", kind.title()),
            Self::Status => format!("{} status updated.", kind.title()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    SessionExpired,
}

/// User-facing outcome of one backend operation: the toast text plus any
/// field errors for the open form.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub field_errors: FieldErrors,
}

impl Notice {
    /// Prefers the server's own message when it sent one.
    pub fn success(kind: EntityKind, op: Op, server_message: Option<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: server_message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| op.success_text(kind)),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn failure(kind: EntityKind, op: Op, err: &ApiError) -> Self {
        match err {
            ApiError::SessionExpired => Self {
                kind: NoticeKind::SessionExpired,
                message: SESSION_EXPIRED_MESSAGE.to_string(),
                field_errors: FieldErrors::new(),
            },
            ApiError::Validation { message, errors } => {
                let flat = errors.flatten();
                Self {
                    kind: NoticeKind::Error,
                    message: if flat.is_empty() { message.clone() } else { flat },
                    field_errors: errors.clone(),
                }
            }
            _ => Self {
                kind: NoticeKind::Error,
                message: op.failure_text(kind),
                field_errors: FieldErrors::new(),
            },
        }
    }

    /// A request refused locally, before anything was sent.
    pub fn refused(err: &ListError) -> Self {
        let message = match err {
            ListError::Busy(_) => "Please wait for the previous request to finish.",
            ListError::UnknownRecord(_) => "That record no longer exists.",
        };
        Self {
            kind: NoticeKind::Error,
            message: message.to_string(),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// Where notices go. The browser shows a toast and reloads the page; tests
/// record the calls.
pub trait Notifier {
    fn notify(&self, notice: &Notice);

    fn schedule_reload(&self, delay_ms: u32);
}

/// Delivers a notice. A session-expired notice additionally schedules the
/// page reload; this is the single place that rule lives.
pub fn report<N: Notifier + ?Sized>(notifier: &N, config: &ClientConfig, notice: &Notice) {
    match notice.kind {
        NoticeKind::SessionExpired => {
            info!(
                "session expired, reloading in {}ms",
                config.session_reload_delay_ms
            );
            notifier.notify(notice);
            notifier.schedule_reload(config.session_reload_delay_ms);
        }
        NoticeKind::Error => {
            warn!("{}", notice.message);
            notifier.notify(notice);
        }
        NoticeKind::Success => notifier.notify(notice),
    }
}
