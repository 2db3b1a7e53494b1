//! Backend round trips of a list screen, split at the await point.
//!
//! A `start_*` call checks the action against the list state, marks it in
//! flight and returns the [`Request`] to send. [`Request::send`] performs it
//! against any [`RecordApi`], and [`ListController::finish`] merges the
//! [`Response`] and reports the outcome. The browser runs the three steps
//! across component messages; [`ListController::run`] chains the last two
//! for native callers.

use log::debug;

use crate::api::{RecordApi, Saved, StatusChanged};
use crate::config::ClientConfig;
use crate::error::{ApiError, FormError, ListError};
use crate::form::{FormMode, FormPayload, ModalForm};
use crate::model::{Entity, RecordId};

use super::notice::{Notice, Notifier, report};
use super::state::{Action, ListState, RemovalConfirmed};

/// A backend call that has been started on the list state and still has to
/// be sent.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    Load,
    Create(FormPayload),
    Update(RecordId, FormPayload),
    Delete(RecordId),
    Status(RecordId, String),
}

/// What came back for a [`Request`], carrying the ids needed to settle it.
#[derive(Debug)]
pub enum Response<E> {
    Loaded(Result<Vec<E>, ApiError>),
    Created(Result<Saved<E>, ApiError>),
    Updated(RecordId, Result<Saved<E>, ApiError>),
    Deleted(RecordId, Result<String, ApiError>),
    StatusSet(RecordId, String, Result<StatusChanged<E>, ApiError>),
}

impl Request {
    pub async fn send<E, A>(self, api: &A) -> Response<E>
    where
        E: Entity,
        A: RecordApi<E>,
    {
        match self {
            Self::Load => Response::Loaded(api.fetch_all().await),
            Self::Create(payload) => Response::Created(api.create(payload).await),
            Self::Update(id, payload) => {
                let result = api.update(&id, payload).await;
                Response::Updated(id, result)
            }
            Self::Delete(id) => {
                let result = api.delete(&id).await;
                Response::Deleted(id, result)
            }
            Self::Status(id, status) => {
                let result = api.set_status(&id, &status).await;
                Response::StatusSet(id, status, result)
            }
        }
    }
}

/// Owns a screen's list state and modal form, and reports every outcome
/// through the injected notifier. Nothing is applied to the collection
/// before the backend confirms it, and nothing is retried.
pub struct ListController<E: Entity, N> {
    state: ListState<E>,
    form: ModalForm<E::Draft>,
    notifier: N,
    config: ClientConfig,
}

impl<E, N> ListController<E, N>
where
    E: Entity,
    N: Notifier,
{
    pub fn new(notifier: N, config: ClientConfig) -> Self {
        Self {
            state: ListState::new(),
            form: ModalForm::default(),
            notifier,
            config,
        }
    }

    pub fn state(&self) -> &ListState<E> {
        &self.state
    }

    /// Filter, sort, selection and delete-confirmation live on the state.
    pub fn state_mut(&mut self) -> &mut ListState<E> {
        &mut self.state
    }

    pub fn form(&self) -> &ModalForm<E::Draft> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ModalForm<E::Draft> {
        &mut self.form
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn visible_records(&self) -> Vec<&E> {
        self.state.visible_records()
    }

    pub fn report(&self, notice: &Notice) {
        report(&self.notifier, &self.config, notice);
    }

    fn known(&self, id: &RecordId) -> Result<(), ListError> {
        match self.state.get(id) {
            Some(_) => Ok(()),
            None => Err(ListError::UnknownRecord(id.to_string())),
        }
    }

    /// One fetch per screen; a second call while it is pending is refused.
    pub fn start_load(&mut self) -> Result<Request, ListError> {
        self.state.begin(Action::Load)?;
        Ok(Request::Load)
    }

    pub fn start_add(&mut self, payload: FormPayload) -> Result<Request, ListError> {
        self.state.begin(Action::Add)?;
        Ok(Request::Create(payload))
    }

    pub fn start_update(&mut self, id: RecordId, payload: FormPayload) -> Result<Request, ListError> {
        self.known(&id)?;
        self.state.begin(Action::Update(id.clone()))?;
        Ok(Request::Update(id, payload))
    }

    /// Deleting needs the token handed out by `ListState::confirm_removal`.
    pub fn start_remove(&mut self, confirmed: RemovalConfirmed) -> Result<Request, ListError> {
        let id = confirmed.id().clone();
        self.state.begin(Action::Remove(id.clone()))?;
        Ok(Request::Delete(id))
    }

    pub fn start_status(
        &mut self,
        id: RecordId,
        status: impl Into<String>,
    ) -> Result<Request, ListError> {
        self.known(&id)?;
        self.state.begin(Action::Status(id.clone()))?;
        Ok(Request::Status(id, status.into()))
    }

    /// Validates the open form and starts an add or an update depending on
    /// its mode. An invalid form never produces a request. A refusal from
    /// the list state puts the form back to editing and is reported.
    pub fn start_submit(&mut self) -> Result<Request, FormError> {
        let (mode, payload) = self.form.submit()?;
        let started = match mode {
            FormMode::Add => self.start_add(payload),
            FormMode::Edit(id) => self.start_update(id, payload),
        };
        started.map_err(|err| {
            let notice = Notice::refused(&err);
            self.form.settle(&notice);
            self.report(&notice);
            FormError::Refused(err)
        })
    }

    /// Merges a backend response into the state, settles a submitting form
    /// and reports the notice. A successful load has nothing to report.
    pub fn finish(&mut self, response: Response<E>) -> Option<Notice> {
        let notice = match response {
            Response::Loaded(result) => self.state.settle_load(result),
            Response::Created(result) => {
                let notice = self.state.settle_add(result);
                Some(self.settle_form(notice))
            }
            Response::Updated(id, result) => {
                let notice = self.state.settle_update(&id, result);
                Some(self.settle_form(notice))
            }
            Response::Deleted(id, result) => Some(self.state.settle_remove(&id, result)),
            Response::StatusSet(id, status, result) => {
                Some(self.state.settle_status(&id, &status, result))
            }
        };
        if let Some(notice) = &notice {
            debug!("{} request settled: {:?}", E::KIND.singular(), notice.kind);
            self.report(notice);
        }
        notice
    }

    fn settle_form(&mut self, notice: Notice) -> Notice {
        if self.form.is_submitting() {
            self.form.settle(&notice);
        }
        notice
    }

    /// Sends a started request and finishes it in place.
    pub async fn run<A: RecordApi<E>>(&mut self, api: &A, request: Request) -> Option<Notice> {
        let response = request.send(api).await;
        self.finish(response)
    }
}
