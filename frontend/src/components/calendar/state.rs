use std::rc::Rc;

use common::calendar::Weekday;
use common::config::ClientConfig;
use common::list::{ListController, ListState};
use common::model::ClassSession;
use yew::prelude::*;

use super::messages::CalendarMode;
use crate::http::HttpApi;
use crate::notifier::BrowserNotifier;

pub struct ClassCalendar {
    pub controller: ListController<ClassSession, BrowserNotifier>,
    pub api: Rc<HttpApi<ClassSession>>,
    pub mode: CalendarMode,
    /// Day shown in daily mode; starts on today.
    pub day: Weekday,
    pub event_ref: NodeRef,
}

impl ClassCalendar {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            controller: ListController::new(
                BrowserNotifier::new(config.toast_duration_ms),
                config.clone(),
            ),
            api: Rc::new(HttpApi::new(config)),
            mode: CalendarMode::Week,
            day: today(),
            event_ref: NodeRef::default(),
        }
    }

    pub fn classes(&self) -> &ListState<ClassSession> {
        self.controller.state()
    }
}

pub fn today() -> Weekday {
    Weekday::from_js_day(js_sys::Date::new_0().get_day())
}
