use common::api::{RecordApi, Saved, StatusChanged};
use common::config::ClientConfig;
use common::error::{ApiError, FieldErrors, FormError, ListError};
use common::form::{Draft, FormMode, FormPayload};
use common::list::{
    Action, FilterState, ListController, Notice, NoticeKind, Notifier, Request,
    SESSION_EXPIRED_MESSAGE,
};
use common::model::{Entity, RecordId, Student, Teacher, TeacherDraft};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn teacher(id: i64, name: &str, status: &str) -> Teacher {
    serde_json::from_value(json!({
        "id": id, "name": name, "email": format!("{}@tutor.ph", name.to_lowercase()),
        "username": name.to_lowercase(), "status": status
    }))
    .unwrap()
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    FetchAll,
    Create(FormPayload),
    Update(RecordId, FormPayload),
    Delete(RecordId),
    SetStatus(RecordId, String),
}

/// Scripted backend: every call is recorded and answered from a queue.
struct FakeApi<E> {
    calls: Rc<RefCell<Vec<Call>>>,
    lists: RefCell<VecDeque<Result<Vec<E>, ApiError>>>,
    saves: RefCell<VecDeque<Result<Saved<E>, ApiError>>>,
    deletes: RefCell<VecDeque<Result<String, ApiError>>>,
    statuses: RefCell<VecDeque<Result<StatusChanged<E>, ApiError>>>,
}

impl<E> FakeApi<E> {
    fn new(calls: Rc<RefCell<Vec<Call>>>) -> Self {
        Self {
            calls,
            lists: RefCell::default(),
            saves: RefCell::default(),
            deletes: RefCell::default(),
            statuses: RefCell::default(),
        }
    }

    fn with_list(self, result: Result<Vec<E>, ApiError>) -> Self {
        self.lists.borrow_mut().push_back(result);
        self
    }

    fn with_save(self, result: Result<Saved<E>, ApiError>) -> Self {
        self.saves.borrow_mut().push_back(result);
        self
    }

    fn with_delete(self, result: Result<String, ApiError>) -> Self {
        self.deletes.borrow_mut().push_back(result);
        self
    }

    fn with_status(self, result: Result<StatusChanged<E>, ApiError>) -> Self {
        self.statuses.borrow_mut().push_back(result);
        self
    }
}

fn unscripted<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("no scripted response".into()))
}

impl<E: common::model::Entity> RecordApi<E> for FakeApi<E> {
    async fn fetch_all(&self) -> Result<Vec<E>, ApiError> {
        self.calls.borrow_mut().push(Call::FetchAll);
        self.lists.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn create(&self, payload: FormPayload) -> Result<Saved<E>, ApiError> {
        self.calls.borrow_mut().push(Call::Create(payload));
        self.saves.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn update(&self, id: &RecordId, payload: FormPayload) -> Result<Saved<E>, ApiError> {
        self.calls.borrow_mut().push(Call::Update(id.clone(), payload));
        self.saves.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn delete(&self, id: &RecordId) -> Result<String, ApiError> {
        self.calls.borrow_mut().push(Call::Delete(id.clone()));
        self.deletes.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn set_status(&self, id: &RecordId, status: &str) -> Result<StatusChanged<E>, ApiError> {
        self.calls.borrow_mut().push(Call::SetStatus(id.clone(), status.to_string()));
        self.statuses.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
    reloads: Rc<RefCell<Vec<u32>>>,
    reload_count: Rc<Cell<usize>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }

    fn schedule_reload(&self, delay_ms: u32) {
        self.reloads.borrow_mut().push(delay_ms);
        self.reload_count.set(self.reload_count.get() + 1);
    }
}

type TeacherController = ListController<Teacher, RecordingNotifier>;

async fn loaded_teachers(
    api: FakeApi<Teacher>,
    records: Vec<Teacher>,
) -> (TeacherController, FakeApi<Teacher>, RecordingNotifier) {
    loaded_teachers_with(api, records, ClientConfig::default()).await
}

async fn loaded_teachers_with(
    api: FakeApi<Teacher>,
    records: Vec<Teacher>,
    config: ClientConfig,
) -> (TeacherController, FakeApi<Teacher>, RecordingNotifier) {
    init_logging();
    let api = api.with_list(Ok(records));
    let notifier = RecordingNotifier::default();
    let mut controller = ListController::new(notifier.clone(), config);
    let request = controller.start_load().unwrap();
    assert_eq!(request, Request::Load);
    assert_eq!(controller.run(&api, request).await, None);
    (controller, api, notifier)
}

/// Submits the controller's open form the way the list page does.
async fn submit<E: Entity>(
    controller: &mut ListController<E, RecordingNotifier>,
    api: &FakeApi<E>,
) -> Result<Notice, FormError> {
    let request = controller.start_submit()?;
    Ok(controller.run(api, request).await.expect("mutations always report"))
}

fn fill_form(controller: &mut TeacherController, fields: &[(&str, &str)]) {
    for (name, value) in fields {
        controller.form_mut().set_field(name, value.to_string());
    }
}

fn ids(records: &[&Teacher]) -> Vec<RecordId> {
    records.iter().map(|t| t.id.clone()).collect()
}

#[tokio::test]
async fn load_populates_collection_in_fetch_order() {
    let calls = Rc::default();
    let (controller, _, notifier) = loaded_teachers(
        FakeApi::new(Rc::clone(&calls)),
        vec![teacher(2, "Ben", "Active"), teacher(1, "Ana", "Active")],
    )
    .await;

    assert_eq!(ids(&controller.visible_records()), vec![RecordId::Number(2), RecordId::Number(1)]);
    assert_eq!(*calls.borrow(), vec![Call::FetchAll]);
    assert!(notifier.notices.borrow().is_empty());
}

#[tokio::test]
async fn failed_load_notifies_once_and_does_not_retry() {
    init_logging();
    let calls = Rc::default();
    let api = FakeApi::new(Rc::clone(&calls))
        .with_list(Err(ApiError::Status { status: 500, message: "boom".into() }));
    let notifier = RecordingNotifier::default();
    let mut controller: TeacherController =
        ListController::new(notifier.clone(), ClientConfig::default());

    let request = controller.start_load().unwrap();
    let notice = controller.run(&api, request).await.unwrap();
    assert_eq!(notice.message, "Error loading teachers");
    assert!(controller.visible_records().is_empty());
    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(notifier.notices.borrow().len(), 1);
}

#[tokio::test]
async fn second_load_is_refused_while_the_first_is_pending() {
    init_logging();
    let mut controller: TeacherController =
        ListController::new(RecordingNotifier::default(), ClientConfig::default());

    controller.start_load().unwrap();
    assert_eq!(controller.start_load(), Err(ListError::Busy(Action::Load)));
}

#[tokio::test]
async fn add_appends_the_server_record_not_the_draft() {
    let calls = Rc::default();
    let server_copy = Teacher {
        name: "Ana Cruz".into(),
        ..teacher(10, "ana", "Active")
    };
    let api = FakeApi::new(Rc::clone(&calls)).with_save(Ok(Saved {
        message: Some("Teacher created successfully".into()),
        record: server_copy.clone(),
    }));
    let (mut controller, api, notifier) =
        loaded_teachers(api, vec![teacher(1, "Ben", "Active")]).await;

    controller.form_mut().open_add();
    fill_form(
        &mut controller,
        &[
            ("name", "  ana cruz "),
            ("email", "ana@tutor.ph"),
            ("username", "ana"),
            ("password", "abc123"),
            ("confirm_password", "abc123"),
        ],
    );

    let notice = submit(&mut controller, &api).await.unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "Teacher created successfully");
    assert!(!controller.form().is_open());

    let visible = controller.visible_records();
    assert_eq!(visible.len(), 2);
    assert_eq!(*visible[1], server_copy);
    assert_eq!(notifier.notices.borrow().last(), Some(&notice));

    let Call::Create(payload) = &calls.borrow()[1] else {
        panic!("expected a create call");
    };
    assert_eq!(payload.get_text("name"), Some("ana cruz"));
    assert_eq!(payload.get_text("password_confirmation"), Some("abc123"));
}

#[tokio::test]
async fn mismatched_passwords_never_reach_the_backend() {
    let calls = Rc::default();
    let (mut controller, api, notifier) =
        loaded_teachers(FakeApi::new(Rc::clone(&calls)), vec![]).await;

    controller.form_mut().open_add();
    fill_form(
        &mut controller,
        &[
            ("name", "Ana"),
            ("email", "ana@tutor.ph"),
            ("username", "ana"),
            ("password", "abc123"),
            ("confirm_password", "abc124"),
        ],
    );

    let draft = controller.form().as_open().map(|f| f.draft.clone()).unwrap();
    assert!(!draft.passwords_match());

    let Err(FormError::Invalid(errors)) = submit(&mut controller, &api).await else {
        panic!("submit must be blocked");
    };
    assert!(errors.contains("confirm_password"));
    assert!(controller.form().is_open());
    assert_eq!(*calls.borrow(), vec![Call::FetchAll]);
    assert!(notifier.notices.borrow().is_empty());
}

#[tokio::test]
async fn edit_with_blank_password_sends_no_password_fields() {
    let calls = Rc::default();
    let updated = Teacher { phone: Some("0917 555 0101".into()), ..teacher(1, "Ana", "Active") };
    let api = FakeApi::new(Rc::clone(&calls))
        .with_save(Ok(Saved { message: None, record: updated.clone() }));
    let original = teacher(1, "Ana", "Active");
    let (mut controller, api, _) = loaded_teachers(api, vec![original.clone()]).await;

    controller.form_mut().open_edit(original.id.clone(), &original);
    let confirm = controller
        .form()
        .as_open()
        .unwrap()
        .fields()
        .into_iter()
        .find(|f| f.name == "confirm_password")
        .unwrap();
    assert!(!confirm.enabled && !confirm.required);

    fill_form(&mut controller, &[("phone", "0917 555 0101")]);
    let notice = submit(&mut controller, &api).await.unwrap();
    assert_eq!(notice.message, "Teacher updated successfully.");

    let Call::Update(id, payload) = &calls.borrow()[1] else {
        panic!("expected an update call");
    };
    assert_eq!(id, &RecordId::Number(1));
    assert!(!payload.contains("password"));
    assert!(!payload.contains("password_confirmation"));
    assert_eq!(controller.state().get(&RecordId::Number(1)), Some(&updated));
}

#[tokio::test]
async fn server_validation_errors_reopen_the_form_untouched_collection() {
    let calls = Rc::default();
    let mut errors = FieldErrors::new();
    errors.insert("username", "The username has already been taken.");
    let api = FakeApi::new(Rc::clone(&calls)).with_save(Err(ApiError::Validation {
        message: "The given data was invalid.".into(),
        errors: errors.clone(),
    }));
    let (mut controller, api, notifier) =
        loaded_teachers(api, vec![teacher(1, "Ana", "Active")]).await;

    controller.form_mut().open_add();
    let mut draft = TeacherDraft::blank();
    draft.name = "Ana Two".into();
    draft.email = "ana2@tutor.ph".into();
    draft.username = "ana".into();
    draft.password = "secret1".into();
    draft.confirm_password = "secret1".into();
    for spec in draft.fields(&FormMode::Add) {
        controller.form_mut().set_field(spec.name, draft.get(spec.name).to_string());
    }

    let notice = submit(&mut controller, &api).await.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "The username has already been taken.");
    assert_eq!(controller.form().as_open().map(|f| f.errors.clone()), Some(errors));
    assert!(!controller.form().is_submitting());
    assert_eq!(controller.state().records().len(), 1);
    assert_eq!(notifier.notices.borrow().len(), 1);
}

#[tokio::test]
async fn edit_of_a_busy_record_is_refused_and_the_form_stays_editable() {
    let calls = Rc::default();
    let original = teacher(1, "Ana", "Active");
    let (mut controller, _, notifier) =
        loaded_teachers(FakeApi::new(Rc::clone(&calls)), vec![original.clone()]).await;

    controller.start_status(original.id.clone(), "Inactive").unwrap();
    controller.form_mut().open_edit(original.id.clone(), &original);
    fill_form(&mut controller, &[("phone", "0917 555 0101")]);

    assert_eq!(
        controller.start_submit(),
        Err(FormError::Refused(ListError::Busy(Action::Update(original.id.clone()))))
    );
    assert!(controller.form().is_open());
    assert!(!controller.form().is_submitting());
    assert_eq!(
        notifier.notices.borrow().last().map(|n| n.message.as_str()),
        Some("Please wait for the previous request to finish.")
    );
    assert_eq!(*calls.borrow(), vec![Call::FetchAll]);
}

#[tokio::test]
async fn delete_requires_confirmation_and_removes_by_id() {
    let calls = Rc::default();
    let api = FakeApi::new(Rc::clone(&calls)).with_delete(Ok("Teacher deleted".into()));
    let (mut controller, api, _) = loaded_teachers(
        api,
        vec![teacher(1, "Ana", "Active"), teacher(2, "Ben", "Active")],
    )
    .await;

    controller.state_mut().request_removal(RecordId::Number(1)).unwrap();
    let token = controller.state_mut().confirm_removal().unwrap();
    let request = controller.start_remove(token).unwrap();
    let notice = controller.run(&api, request).await.unwrap();

    assert_eq!(notice.message, "Teacher deleted");
    assert_eq!(ids(&controller.visible_records()), vec![RecordId::Number(2)]);
    assert_eq!(calls.borrow().last(), Some(&Call::Delete(RecordId::Number(1))));
}

#[tokio::test]
async fn session_expired_delete_notifies_and_schedules_reload() {
    let calls = Rc::default();
    let api = FakeApi::new(Rc::clone(&calls)).with_delete(Err(ApiError::SessionExpired));
    let config = ClientConfig { session_reload_delay_ms: 1500, ..ClientConfig::default() };
    let (mut controller, api, notifier) = loaded_teachers_with(
        api,
        vec![teacher(1, "Ana", "Active"), teacher(2, "Ben", "Inactive")],
        config,
    )
    .await;
    let before = controller.state().records().to_vec();

    controller.state_mut().request_removal(RecordId::Number(2)).unwrap();
    let token = controller.state_mut().confirm_removal().unwrap();
    let request = controller.start_remove(token).unwrap();
    let notice = controller.run(&api, request).await.unwrap();

    assert_eq!(notice.kind, NoticeKind::SessionExpired);
    assert_eq!(notifier.notices.borrow().last().map(|n| n.message.as_str()), Some(SESSION_EXPIRED_MESSAGE));
    assert_eq!(*notifier.reloads.borrow(), vec![1500]);
    assert_eq!(notifier.reload_count.get(), 1);
    assert_eq!(controller.state().records(), before.as_slice());
}

#[tokio::test]
async fn generic_delete_failure_leaves_collection_unchanged() {
    let calls = Rc::default();
    let api = FakeApi::new(Rc::clone(&calls))
        .with_delete(Err(ApiError::Network("connection reset".into())));
    let (mut controller, api, notifier) =
        loaded_teachers(api, vec![teacher(1, "Ana", "Active")]).await;

    controller.state_mut().request_removal(RecordId::Number(1)).unwrap();
    let token = controller.state_mut().confirm_removal().unwrap();
    let request = controller.start_remove(token).unwrap();
    let notice = controller.run(&api, request).await.unwrap();

    assert_eq!(notice.message, "Error deleting teacher");
    assert_eq!(controller.state().records().len(), 1);
    assert!(notifier.reloads.borrow().is_empty());
}

#[tokio::test]
async fn status_toggle_replaces_with_server_record() {
    let calls = Rc::default();
    let api = FakeApi::new(Rc::clone(&calls)).with_status(Ok(StatusChanged {
        message: Some("Status updated".into()),
        record: Some(teacher(1, "Ana", "Inactive")),
    }));
    let (mut controller, api, _) = loaded_teachers(api, vec![teacher(1, "Ana", "Active")]).await;

    let request = controller.start_status(RecordId::Number(1), "Inactive").unwrap();
    controller.run(&api, request).await;

    controller.state_mut().filter = FilterState { status: "Inactive".into(), ..FilterState::default() };
    assert_eq!(ids(&controller.visible_records()), vec![RecordId::Number(1)]);
    assert_eq!(
        calls.borrow().last(),
        Some(&Call::SetStatus(RecordId::Number(1), "Inactive".into()))
    );
}

#[tokio::test]
async fn unknown_record_is_refused_before_any_request() {
    let calls = Rc::default();
    let (mut controller, _, _) = loaded_teachers(FakeApi::new(Rc::clone(&calls)), vec![]).await;

    assert_eq!(
        controller.start_status(RecordId::Number(42), "Inactive"),
        Err(ListError::UnknownRecord("42".into()))
    );
    assert_eq!(*calls.borrow(), vec![Call::FetchAll]);
}

#[tokio::test]
async fn student_list_filters_by_course_and_class_type() {
    init_logging();
    let students: Vec<Student> = serde_json::from_value(json!([
        { "id": 1, "name": "Lia", "grade": "4", "courses": "Phonics, Math", "status": "Active", "class_type": "Regular" },
        { "id": 2, "name": "Rey", "grade": "5", "courses": ["Science"], "status": "Active", "classtype": "Trial" },
        { "id": 3, "name": "Kai", "grade": "5", "courses": ["Math"], "status": "Inactive", "class_type": "Trial" }
    ]))
    .unwrap();
    let api = FakeApi::new(Rc::default()).with_list(Ok(students));
    let mut controller: ListController<Student, _> =
        ListController::new(RecordingNotifier::default(), ClientConfig::default());
    let request = controller.start_load().unwrap();
    controller.run(&api, request).await;

    controller.state_mut().filter.search_text = "MATH".into();
    let names: Vec<&str> = controller.visible_records().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Lia", "Kai"]);

    controller.state_mut().filter.class_type = "Trial".into();
    let names: Vec<&str> = controller.visible_records().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Kai"]);
}
