use log::debug;

use super::filter::{FilterState, matches};
use super::notice::{Notice, Op};
use super::sort::{SortState, compare};
use crate::api::{Saved, StatusChanged};
use crate::error::{ApiError, ListError};
use crate::model::{Entity, RecordId};

/// A backend call in flight. Mutations carry the record they touch so that
/// a second mutation of the same record is refused until the first settles.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Load,
    Add,
    Update(RecordId),
    Remove(RecordId),
    Status(RecordId),
}

impl Action {
    pub fn record(&self) -> Option<&RecordId> {
        match self {
            Self::Load | Self::Add => None,
            Self::Update(id) | Self::Remove(id) | Self::Status(id) => Some(id),
        }
    }
}

/// Proof that the user confirmed a delete. Only
/// [`ListState::confirm_removal`] hands these out.
#[derive(Debug, PartialEq, Eq)]
pub struct RemovalConfirmed {
    id: RecordId,
}

impl RemovalConfirmed {
    pub fn id(&self) -> &RecordId {
        &self.id
    }
}

/// The collection as last confirmed by the backend, plus the view state
/// around it. The collection keeps fetch/creation order; sorting only
/// affects `visible_records`.
#[derive(Debug)]
pub struct ListState<E: Entity> {
    records: Vec<E>,
    pub filter: FilterState,
    pub sort: Option<SortState<E::Field>>,
    selected: Option<RecordId>,
    pending_removal: Option<RecordId>,
    in_flight: Vec<Action>,
    loaded: bool,
}

impl<E: Entity> Default for ListState<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            filter: FilterState::default(),
            sort: None,
            selected: None,
            pending_removal: None,
            in_flight: Vec::new(),
            loaded: false,
        }
    }
}

impl<E: Entity> ListState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&E> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// True once the initial fetch has settled, successfully or not.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Filtered, then stably sorted. Recomputed on every call.
    pub fn visible_records(&self) -> Vec<&E> {
        let mut visible: Vec<&E> = self
            .records
            .iter()
            .filter(|r| matches(*r, &self.filter))
            .collect();
        if let Some(sort) = &self.sort {
            visible.sort_by(|a, b| compare(*a, *b, sort));
        }
        visible
    }

    pub fn sort_by(&mut self, key: E::Field) {
        self.sort = Some(SortState::toggle(self.sort, key));
    }

    // ---------------------------------------------------------------------
    // Selection (detail / edit dialogs)
    // ---------------------------------------------------------------------

    pub fn select(&mut self, id: RecordId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&E> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    // ---------------------------------------------------------------------
    // Delete confirmation
    // ---------------------------------------------------------------------

    pub fn request_removal(&mut self, id: RecordId) -> Result<(), ListError> {
        if self.get(&id).is_none() {
            return Err(ListError::UnknownRecord(id.to_string()));
        }
        self.pending_removal = Some(id);
        Ok(())
    }

    pub fn pending_removal(&self) -> Option<&E> {
        self.pending_removal.as_ref().and_then(|id| self.get(id))
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    pub fn confirm_removal(&mut self) -> Option<RemovalConfirmed> {
        self.pending_removal.take().map(|id| RemovalConfirmed { id })
    }

    // ---------------------------------------------------------------------
    // In-flight tracking
    // ---------------------------------------------------------------------

    /// Marks `action` as in flight. Refused while the same action, or any
    /// other mutation of the same record, is still pending.
    pub fn begin(&mut self, action: Action) -> Result<(), ListError> {
        if self.conflicts(&action) {
            return Err(ListError::Busy(action));
        }
        self.in_flight.push(action);
        Ok(())
    }

    fn conflicts(&self, action: &Action) -> bool {
        self.in_flight.iter().any(|pending| {
            pending == action
                || matches!((pending.record(), action.record()), (Some(a), Some(b)) if a == b)
        })
    }

    pub fn is_busy(&self, action: &Action) -> bool {
        self.in_flight.contains(action)
    }

    pub fn is_record_busy(&self, id: &RecordId) -> bool {
        self.in_flight.iter().any(|a| a.record() == Some(id))
    }

    fn finish(&mut self, action: &Action) {
        self.in_flight.retain(|a| a != action);
    }

    // ---------------------------------------------------------------------
    // Settling backend results
    // ---------------------------------------------------------------------

    /// A failed load leaves the collection empty. A successful load returns
    /// no notice.
    pub fn settle_load(&mut self, result: Result<Vec<E>, ApiError>) -> Option<Notice> {
        self.finish(&Action::Load);
        self.loaded = true;
        match result {
            Ok(records) => {
                debug!("loaded {} {}", records.len(), E::KIND.plural());
                self.records = records;
                None
            }
            Err(err) => {
                self.records.clear();
                Some(Notice::failure(E::KIND, Op::Load, &err))
            }
        }
    }

    /// Appends the server's record, never the draft that was sent.
    pub fn settle_add(&mut self, result: Result<Saved<E>, ApiError>) -> Notice {
        self.finish(&Action::Add);
        match result {
            Ok(saved) => {
                debug!("added {} {}", E::KIND.singular(), saved.record.id());
                self.records.push(saved.record);
                Notice::success(E::KIND, Op::Add, saved.message)
            }
            Err(err) => Notice::failure(E::KIND, Op::Add, &err),
        }
    }

    pub fn settle_update(&mut self, id: &RecordId, result: Result<Saved<E>, ApiError>) -> Notice {
        self.finish(&Action::Update(id.clone()));
        match result {
            Ok(saved) => {
                debug!("updated {} {}", E::KIND.singular(), id);
                self.replace(id, saved.record);
                Notice::success(E::KIND, Op::Update, saved.message)
            }
            Err(err) => Notice::failure(E::KIND, Op::Update, &err),
        }
    }

    pub fn settle_remove(&mut self, id: &RecordId, result: Result<String, ApiError>) -> Notice {
        self.finish(&Action::Remove(id.clone()));
        match result {
            Ok(message) => {
                debug!("removed {} {}", E::KIND.singular(), id);
                self.records.retain(|r| r.id() != id);
                if self.selected.as_ref() == Some(id) {
                    self.selected = None;
                }
                Notice::success(E::KIND, Op::Remove, Some(message))
            }
            Err(err) => Notice::failure(E::KIND, Op::Remove, &err),
        }
    }

    /// Uses the returned record when there is one, otherwise patches the
    /// status field of the local copy.
    pub fn settle_status(
        &mut self,
        id: &RecordId,
        status: &str,
        result: Result<StatusChanged<E>, ApiError>,
    ) -> Notice {
        self.finish(&Action::Status(id.clone()));
        match result {
            Ok(changed) => {
                debug!("{} {} is now {status}", E::KIND.singular(), id);
                match changed.record {
                    Some(record) => self.replace(id, record),
                    None => {
                        if let Some(local) = self.records.iter_mut().find(|r| r.id() == id) {
                            local.set_status(status);
                        }
                    }
                }
                Notice::success(E::KIND, Op::Status, changed.message)
            }
            Err(err) => Notice::failure(E::KIND, Op::Status, &err),
        }
    }

    fn replace(&mut self, id: &RecordId, record: E) {
        if let Some(slot) = self.records.iter_mut().find(|r| r.id() == id) {
            *slot = record;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{NoticeKind, SortDirection};
    use crate::model::{Teacher, TeacherField};
    use serde_json::json;

    fn teacher(id: i64, name: &str, status: &str) -> Teacher {
        serde_json::from_value(json!({
            "id": id, "name": name, "email": "t@tutor.ph", "status": status
        }))
        .unwrap()
    }

    fn loaded(records: Vec<Teacher>) -> ListState<Teacher> {
        let mut state = ListState::new();
        state.begin(Action::Load).unwrap();
        assert!(state.settle_load(Ok(records)).is_none());
        state
    }

    fn ids(records: &[&Teacher]) -> Vec<RecordId> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn status_filter_scenario() {
        let mut state = loaded(vec![teacher(1, "Ana", "Active"), teacher(2, "Ben", "Inactive")]);
        state.filter.status = "Active".into();
        assert_eq!(ids(&state.visible_records()), vec![RecordId::Number(1)]);
    }

    #[test]
    fn sorting_never_reorders_the_collection() {
        let mut state = loaded(vec![
            teacher(1, "Cy", "Active"),
            teacher(2, "Ana", "Active"),
            teacher(3, "Ben", "Active"),
        ]);
        state.sort_by(TeacherField::Name);
        assert_eq!(
            ids(&state.visible_records()),
            vec![RecordId::Number(2), RecordId::Number(3), RecordId::Number(1)]
        );
        state.sort_by(TeacherField::Name);
        assert_eq!(state.sort.map(|s| s.direction), Some(SortDirection::Descending));
        assert_eq!(
            ids(&state.visible_records()),
            vec![RecordId::Number(1), RecordId::Number(3), RecordId::Number(2)]
        );
        assert_eq!(state.records()[0].id, RecordId::Number(1));
    }

    #[test]
    fn equal_keys_keep_collection_order() {
        let state = {
            let mut s = loaded(vec![
                teacher(1, "Ana", "Active"),
                teacher(2, "Ana", "Inactive"),
                teacher(3, "Ana", "Active"),
            ]);
            s.sort_by(TeacherField::Name);
            s
        };
        assert_eq!(
            ids(&state.visible_records()),
            vec![RecordId::Number(1), RecordId::Number(2), RecordId::Number(3)]
        );
    }

    #[test]
    fn failed_load_leaves_collection_empty() {
        let mut state = ListState::<Teacher>::new();
        let notice = state.settle_load(Err(ApiError::Network("offline".into()))).unwrap();
        assert_eq!(notice.message, "Error loading teachers");
        assert!(state.records().is_empty());
        assert!(state.is_loaded());
    }

    #[test]
    fn one_mutation_per_record_at_a_time() {
        let mut state = loaded(vec![teacher(1, "Ana", "Active"), teacher(2, "Ben", "Active")]);
        let one = RecordId::Number(1);

        state.begin(Action::Update(one.clone())).unwrap();
        assert_eq!(
            state.begin(Action::Remove(one.clone())),
            Err(ListError::Busy(Action::Remove(one.clone())))
        );
        assert!(state.begin(Action::Status(RecordId::Number(2))).is_ok());
        assert!(state.begin(Action::Add).is_ok());
        assert!(state.begin(Action::Add).is_err());
        assert!(state.is_record_busy(&one));

        let _ = state.settle_update(&one, Err(ApiError::Network("x".into())));
        assert!(!state.is_record_busy(&one));
        assert!(state.begin(Action::Remove(one)).is_ok());
    }

    #[test]
    fn removal_needs_a_confirmation_token() {
        let mut state = loaded(vec![teacher(1, "Ana", "Active")]);
        assert!(state.confirm_removal().is_none());
        assert!(state.request_removal(RecordId::Number(9)).is_err());

        state.request_removal(RecordId::Number(1)).unwrap();
        assert_eq!(state.pending_removal().map(|t| t.name.as_str()), Some("Ana"));
        state.cancel_removal();
        assert!(state.confirm_removal().is_none());

        state.request_removal(RecordId::Number(1)).unwrap();
        let token = state.confirm_removal().unwrap();
        assert_eq!(token.id(), &RecordId::Number(1));
        assert!(state.pending_removal().is_none());
    }

    #[test]
    fn status_without_returned_record_patches_locally() {
        let mut state = loaded(vec![teacher(1, "Ana", "Active")]);
        let id = RecordId::Number(1);
        state.begin(Action::Status(id.clone())).unwrap();
        let notice = state.settle_status(
            &id,
            "Inactive",
            Ok(StatusChanged { message: Some("Status updated".into()), record: None }),
        );
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(state.get(&id).map(|t| t.status.as_str()), Some("Inactive"));
    }

    #[test]
    fn removing_the_selected_record_clears_selection() {
        let mut state = loaded(vec![teacher(1, "Ana", "Active"), teacher(2, "Ben", "Active")]);
        state.select(RecordId::Number(1));
        assert!(state.selected().is_some());
        let _ = state.settle_remove(&RecordId::Number(1), Ok("Deleted".into()));
        assert!(state.selected().is_none());
        assert_eq!(state.records().len(), 1);
    }
}
