use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::form::{Choices, Draft, FieldSpec, FormMode, ImageUpload, InputKind};
use crate::model::{Entity, EntityKind, FieldValue, RecordId};
use crate::taxonomy::POST_STATUSES;

/// Promotional post shown on the public landing page. `description` is
/// markdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromotionalPost {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostField {
    Title,
    Status,
    PublishedAt,
}

impl Entity for PromotionalPost {
    type Field = PostField;
    type Draft = PostDraft;

    const KIND: EntityKind = EntityKind::PromotionalPost;

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
        vec![&self.title]
    }

    fn value(&self, field: PostField) -> FieldValue<'_> {
        match field {
            PostField::Title => self.title.as_str().into(),
            PostField::Status => self.status.as_str().into(),
            PostField::PublishedAt => self.published_at.as_deref().into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub status: String,
    pub image: Option<ImageUpload>,
}

impl Draft for PostDraft {
    type Record = PromotionalPost;

    fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: "Draft".to_string(),
            image: None,
        }
    }

    fn from_record(p: &PromotionalPost) -> Self {
        Self {
            title: p.title.clone(),
            description: p.description.clone(),
            status: p.status.clone(),
            image: None,
        }
    }

    fn fields(&self, _mode: &FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("title", "Title", InputKind::Text).required(),
            FieldSpec::new("description", "Description", InputKind::TextArea).required(),
            FieldSpec::new("status", "Status", InputKind::Select(Choices::Statuses(&POST_STATUSES)))
                .required(),
            FieldSpec::new("image", "Banner image", InputKind::Image),
        ]
    }

    fn get(&self, name: &str) -> &str {
        match name {
            "title" => &self.title,
            "description" => &self.description,
            "status" => &self.status,
            _ => "",
        }
    }

    fn set(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "description" => self.description = value,
            "status" => self.status = value,
            _ => {}
        }
    }

    fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    fn set_image(&mut self, upload: Option<ImageUpload>) {
        self.image = upload;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{SortState, compare};

    fn post(id: i64, title: &str, published_at: Option<&str>) -> PromotionalPost {
        serde_json::from_value(serde_json::json!({
            "id": id, "title": title, "description": "**Enrol now**",
            "status": "Published", "published_at": published_at
        }))
        .unwrap()
    }

    #[test]
    fn unpublished_posts_sort_first_ascending() {
        let draft = post(1, "Summer camp", None);
        let live = post(2, "Open house", Some("2024-05-01"));
        let sort = SortState::ascending(PostField::PublishedAt);
        assert_eq!(compare(&draft, &live, &sort), std::cmp::Ordering::Less);
    }

    #[test]
    fn new_post_defaults_to_draft_and_needs_a_body() {
        let mut draft = PostDraft::blank();
        assert_eq!(draft.status, "Draft");
        draft.set("title", "Summer camp".into());
        let errors = draft.validate(&FormMode::Add).unwrap_err();
        assert!(errors.contains("description"));
        assert!(!errors.contains("title"));
    }

    #[test]
    fn payload_carries_markdown_verbatim_apart_from_trim() {
        let draft = PostDraft::from_record(&post(3, "Open house", None));
        let payload = draft.to_payload(&FormMode::Edit(RecordId::Number(3)));
        assert_eq!(payload.get_text("description"), Some("**Enrol now**"));
        assert_eq!(payload.get_text("status"), Some("Published"));
        assert!(!payload.contains("image"));
    }
}
