//! Backend seam: the injected `RecordApi` trait plus the pure helpers that
//! turn raw HTTP responses into records or an [`ApiError`].
//!
//! Response shapes handled here:
//! - list: a bare JSON array, or an object holding the array under the
//!   plural key (`{"teachers": [...]}`) or `data`;
//! - create/update: `{ "message": ..., "<entity>": { ... } }`;
//! - delete: `{ "message": ... }`;
//! - status patch: `{ "message": ..., "<entity>"?: { ... } }`;
//! - failures: `{ "message": ..., "errors": { "field": ["..."] } }`, with
//!   HTTP 419 always meaning the session expired.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, FieldErrors};
use crate::form::FormPayload;
use crate::model::{Entity, EntityKind, RecordId};

/// Laravel's "page expired" status.
pub const SESSION_EXPIRED_STATUS: u16 = 419;

/// Form field carrying the verb override on multipart updates.
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

/// A record as canonicalised by the server after create/update.
#[derive(Clone, Debug, PartialEq)]
pub struct Saved<E> {
    pub message: Option<String>,
    pub record: E,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusChanged<E> {
    pub message: Option<String>,
    pub record: Option<E>,
}

/// The backend as one entity's list screen sees it. The browser build
/// implements it over `gloo-net`; tests use in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait RecordApi<E: Entity> {
    async fn fetch_all(&self) -> Result<Vec<E>, ApiError>;

    async fn create(&self, payload: FormPayload) -> Result<Saved<E>, ApiError>;

    async fn update(&self, id: &RecordId, payload: FormPayload) -> Result<Saved<E>, ApiError>;

    /// Returns the server's confirmation message.
    async fn delete(&self, id: &RecordId) -> Result<String, ApiError>;

    async fn set_status(&self, id: &RecordId, status: &str) -> Result<StatusChanged<E>, ApiError>;
}

// -----------------------------------------------------------------------------
// Routes
// -----------------------------------------------------------------------------

pub fn collection_url(base: &str, kind: EntityKind) -> String {
    format!("{}/{}", base.trim_end_matches('/'), kind.endpoint())
}

pub fn record_url(base: &str, kind: EntityKind, id: &RecordId) -> String {
    format!("{}/{}", collection_url(base, kind), id)
}

pub fn status_url(base: &str, kind: EntityKind, id: &RecordId) -> String {
    format!("{}/status", record_url(base, kind, id))
}

// -----------------------------------------------------------------------------
// Response decoding
// -----------------------------------------------------------------------------

/// Classifies a response. 2xx bodies are parsed as JSON (an empty body is
/// `null`); everything else becomes an `ApiError`.
pub fn decode_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if (200..300).contains(&status) {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    if status == SESSION_EXPIRED_STATUS {
        return Err(ApiError::SessionExpired);
    }

    let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let message = message_of(&parsed)
        .unwrap_or_else(|| format!("Request failed with status {status}"));

    match parsed.get("errors") {
        Some(errors) if errors.is_object() => {
            let errors: FieldErrors = serde_json::from_value(normalise_errors(errors))
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Err(ApiError::Validation { message, errors })
        }
        _ => Err(ApiError::Status { status, message }),
    }
}

/// Some endpoints send a single string per field instead of a list.
fn normalise_errors(errors: &Value) -> Value {
    match errors {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| {
                    let list = match v {
                        Value::Array(_) => v.clone(),
                        other => Value::Array(vec![Value::String(
                            other.as_str().map_or_else(|| other.to_string(), str::to_string),
                        )]),
                    };
                    (k.clone(), list)
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

pub fn message_of(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn parse_list<E: Entity>(value: Value) -> Result<Vec<E>, ApiError> {
    match value {
        Value::Array(_) => decode(value),
        Value::Object(mut map) => {
            let list = map
                .remove(E::KIND.plural())
                .or_else(|| map.remove("data"))
                .ok_or_else(|| {
                    ApiError::Decode(format!("no `{}` list in response", E::KIND.plural()))
                })?;
            decode(list)
        }
        other => Err(ApiError::Decode(format!("expected a list, got {other}"))),
    }
}

fn take_record(value: &mut Value, kind: EntityKind) -> Option<Value> {
    let map = value.as_object_mut()?;
    map.remove(kind.singular())
        .or_else(|| map.remove("data"))
        .filter(|v| !v.is_null())
}

pub fn parse_saved<E: Entity>(mut value: Value) -> Result<Saved<E>, ApiError> {
    let message = message_of(&value);
    let record = take_record(&mut value, E::KIND).ok_or_else(|| {
        ApiError::Decode(format!("no `{}` in response", E::KIND.singular()))
    })?;
    Ok(Saved {
        message,
        record: decode(record)?,
    })
}

pub fn parse_status_changed<E: Entity>(mut value: Value) -> Result<StatusChanged<E>, ApiError> {
    let message = message_of(&value);
    let record = take_record(&mut value, E::KIND).map(decode::<E>).transpose()?;
    Ok(StatusChanged { message, record })
}

pub fn parse_deleted(value: &Value) -> String {
    message_of(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassSession, Student, Teacher};

    #[test]
    fn routes() {
        let id = RecordId::Number(12);
        assert_eq!(collection_url("/api/", EntityKind::Teacher), "/api/teachers");
        assert_eq!(record_url("/api", EntityKind::ClassSession, &id), "/api/teacher-classes/12");
        assert_eq!(status_url("/api", EntityKind::Student, &id), "/api/students/12/status");
    }

    #[test]
    fn session_expiry_wins_over_body() {
        assert_eq!(
            decode_response(419, r#"{"message": "CSRF token mismatch."}"#),
            Err(ApiError::SessionExpired)
        );
    }

    #[test]
    fn validation_errors_are_field_keyed() {
        let err = decode_response(
            422,
            r#"{"message": "The given data was invalid.", "errors": {"email": ["Taken."], "name": "Required."}}"#,
        )
        .unwrap_err();
        let ApiError::Validation { message, errors } = err else {
            panic!("expected validation error");
        };
        assert_eq!(message, "The given data was invalid.");
        assert_eq!(errors.first("email"), Some("Taken."));
        assert_eq!(errors.first("name"), Some("Required."));
    }

    #[test]
    fn other_failures_keep_status_and_message() {
        assert_eq!(
            decode_response(500, "<html>oops</html>"),
            Err(ApiError::Status { status: 500, message: "Request failed with status 500".into() })
        );
        assert_eq!(
            decode_response(404, r#"{"message": "Not found"}"#),
            Err(ApiError::Status { status: 404, message: "Not found".into() })
        );
    }

    #[test]
    fn success_bodies() {
        assert_eq!(decode_response(204, ""), Ok(Value::Null));
        assert!(matches!(decode_response(200, "{nope"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn lists_come_bare_or_wrapped() {
        let bare = serde_json::json!([{ "id": 1, "name": "Lia" }]);
        let wrapped = serde_json::json!({ "students": [{ "id": 1, "name": "Lia" }] });
        let paged = serde_json::json!({ "data": [{ "id": 1, "name": "Lia" }] });
        for value in [bare, wrapped, paged] {
            let students: Vec<Student> = parse_list(value).unwrap();
            assert_eq!(students.len(), 1);
        }
        assert!(parse_list::<Student>(serde_json::json!({ "teachers": [] })).is_err());
    }

    #[test]
    fn saved_record_is_keyed_by_entity_name() {
        let value = serde_json::json!({
            "message": "Class created",
            "class": { "id": 5, "student_name": "Lia", "class_type": "Trial" }
        });
        let saved: Saved<ClassSession> = parse_saved(value).unwrap();
        assert_eq!(saved.message.as_deref(), Some("Class created"));
        assert_eq!(saved.record.id, RecordId::Number(5));

        let missing = serde_json::json!({ "message": "ok" });
        assert!(matches!(parse_saved::<Teacher>(missing), Err(ApiError::Decode(_))));
    }

    #[test]
    fn status_patch_record_is_optional() {
        let without: StatusChanged<Teacher> =
            parse_status_changed(serde_json::json!({ "message": "Status updated" })).unwrap();
        assert!(without.record.is_none());

        let with: StatusChanged<Teacher> = parse_status_changed(serde_json::json!({
            "message": "Status updated",
            "teacher": { "id": 1, "name": "Ana", "email": "a@b.co", "status": "Inactive" }
        }))
        .unwrap();
        assert_eq!(with.record.map(|t| t.status), Some("Inactive".to_string()));
    }
}
