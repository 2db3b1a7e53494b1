use std::rc::Rc;

use log::warn;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::calendar::Weekday;
use common::list::{Notice, Request};
use common::model::ClassSession;
use common::taxonomy::CalendarStatus;

use super::messages::Msg;
use super::state::ClassCalendar;
use crate::http::HttpApi;
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

fn send(calendar: &ClassCalendar, ctx: &Context<ClassCalendar>, request: Request) {
    let api = Rc::clone(&calendar.api);
    let link = ctx.link().clone();
    spawn_local(async move {
        let response = request.send::<ClassSession, HttpApi<ClassSession>>(&api).await;
        link.send_message(Msg::Completed(response));
    });
}

pub fn update(calendar: &mut ClassCalendar, ctx: &Context<ClassCalendar>, msg: Msg) -> bool {
    match msg {
        Msg::Load => match calendar.controller.start_load() {
            Ok(request) => {
                send(calendar, ctx, request);
                true
            }
            Err(_) => false,
        },
        Msg::Completed(response) => {
            calendar.controller.finish(response);
            true
        }
        Msg::SetMode(mode) => {
            calendar.mode = mode;
            true
        }
        Msg::SetDay(day) => {
            calendar.day = day;
            true
        }
        Msg::ShiftDay(offset) => {
            let index = (calendar.day as i32 + offset).rem_euclid(7) as usize;
            calendar.day = Weekday::ALL[index];
            true
        }
        Msg::SetSearch(text) => {
            calendar.controller.state_mut().filter.search_text = text;
            true
        }
        Msg::SetClassType(class_type) => {
            calendar.controller.state_mut().filter.class_type = class_type;
            true
        }
        Msg::OpenEvent(id) => {
            calendar.controller.state_mut().select(id);
            open_top_sheet(calendar.event_ref.clone());
            true
        }
        Msg::CloseEvent => {
            calendar.controller.state_mut().clear_selection();
            close_top_sheet(calendar.event_ref.clone());
            true
        }
        Msg::SetStatus(id, status) => {
            let Some(current) = calendar.classes().get(&id).map(|c| c.status.clone()) else {
                return false;
            };
            let allowed = CalendarStatus::selectable_after(&current);
            if status == current || !allowed.iter().any(|opt| opt.value == status) {
                warn!("status {status:?} is not selectable after {current:?}");
                return false;
            }
            match calendar.controller.start_status(id, status) {
                Ok(request) => send(calendar, ctx, request),
                Err(err) => calendar.controller.report(&Notice::refused(&err)),
            }
            true
        }
    }
}
