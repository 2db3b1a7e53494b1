use crate::model::Entity;

/// Empty strings mean "no filter" for every dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub status: String,
    pub class_type: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.status.is_empty() && self.class_type.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Whether `record` is visible under `filter`. All active dimensions must
/// hold. Search is a case-insensitive substring match over the entity's
/// search fields; status and class type compare exactly.
pub fn matches<E: Entity>(record: &E, filter: &FilterState) -> bool {
    matches_search(record, &filter.search_text)
        && (filter.status.is_empty() || record.status() == filter.status)
        && (filter.class_type.is_empty() || record.class_type() == Some(filter.class_type.as_str()))
}

fn matches_search<E: Entity>(record: &E, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
