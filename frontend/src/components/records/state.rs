use std::rc::Rc;

use common::config::ClientConfig;
use common::form::ModalForm;
use common::list::{ListController, ListState};
use yew::prelude::*;

use crate::components::entities::EntityView;
use crate::http::HttpApi;
use crate::notifier::BrowserNotifier;

/// One list screen: the shared list controller plus the DOM refs of its
/// three sheets.
pub struct ListPage<E: EntityView> {
    pub controller: ListController<E, BrowserNotifier>,
    pub api: Rc<HttpApi<E>>,

    pub form_ref: NodeRef,
    pub confirm_ref: NodeRef,
    pub detail_ref: NodeRef,

    /// Cancel was pressed on a modified form and is waiting for a second
    /// answer.
    pub discard_prompt: bool,
}

impl<E: EntityView> ListPage<E> {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            controller: ListController::new(
                BrowserNotifier::new(config.toast_duration_ms),
                config.clone(),
            ),
            api: Rc::new(HttpApi::new(config)),
            form_ref: NodeRef::default(),
            confirm_ref: NodeRef::default(),
            detail_ref: NodeRef::default(),
            discard_prompt: false,
        }
    }

    pub fn list(&self) -> &ListState<E> {
        self.controller.state()
    }

    pub fn form(&self) -> &ModalForm<E::Draft> {
        self.controller.form()
    }
}
