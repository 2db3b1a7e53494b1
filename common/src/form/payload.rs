//! Plain data handed from a submitted form to the HTTP layer.

use base64::{Engine as _, engine::general_purpose};
use serde_json::{Map, Value};

/// A file picked in a form. The bytes are the original file content and are
/// what gets uploaded; the data URL exists only for the on-screen preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mut mime = mime.into();
        if mime.is_empty() {
            mime = "application/octet-stream".to_string();
        }
        Self {
            file_name: file_name.into(),
            mime,
            bytes,
        }
    }

    /// `data:<mime>;base64,<payload>` for an `<img src>`.
    pub fn preview_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(ImageUpload),
}

/// Ordered list of form parts. The browser client turns it into
/// `multipart/form-data`; tests inspect it directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    parts: Vec<(String, FormValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_text(name, value);
        self
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push((name.into(), FormValue::Text(value.into())));
    }

    pub fn push_file(&mut self, name: impl Into<String>, upload: ImageUpload) {
        self.parts.push((name.into(), FormValue::File(upload)));
    }

    pub fn remove(&mut self, name: &str) {
        self.parts.retain(|(n, _)| n != name);
    }

    pub fn rename(&mut self, from: &str, to: &str) {
        for (name, _) in self.parts.iter_mut().filter(|(n, _)| n == from) {
            *name = to.to_string();
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|(n, _)| n == name)
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(n, v)| match v {
            FormValue::Text(t) if n == name => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn get_file(&self, name: &str) -> Option<&ImageUpload> {
        self.parts.iter().find_map(|(n, v)| match v {
            FormValue::File(f) if n == name => Some(f),
            _ => None,
        })
    }

    pub fn has_files(&self) -> bool {
        self.parts.iter().any(|(_, v)| matches!(v, FormValue::File(_)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.parts.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Text parts as a JSON object; file parts are skipped.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .parts
            .iter()
            .filter_map(|(n, v)| match v {
                FormValue::Text(t) => Some((n.clone(), Value::String(t.clone()))),
                FormValue::File(_) => None,
            })
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_a_base64_data_url() {
        let upload = ImageUpload::new("dot.png", "image/png", vec![0x89, b'P', b'N', b'G']);
        assert_eq!(upload.preview_data_url(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn missing_mime_falls_back_to_octet_stream() {
        let upload = ImageUpload::new("blob", "", vec![1, 2, 3]);
        assert!(upload.preview_data_url().starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn json_view_skips_files_and_keeps_text() {
        let mut payload = FormPayload::new().text("name", "Ana").text("status", "Active");
        payload.push_file("image", ImageUpload::new("a.jpg", "image/jpeg", vec![1]));
        payload.rename("status", "state");

        assert!(payload.has_files());
        assert_eq!(payload.get_file("image").map(|f| f.file_name.as_str()), Some("a.jpg"));
        assert_eq!(
            payload.to_json(),
            serde_json::json!({ "name": "Ana", "state": "Active" })
        );
    }
}
