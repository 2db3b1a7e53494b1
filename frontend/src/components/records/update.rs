//! Elm-style update for the list page.
//!
//! Backend calls all go through the page's `ListController`: a `start_*`
//! call checks and marks the action (refused if the record is already busy)
//! and yields a request, `send` runs it in a spawned task, and the response
//! comes back as `Msg::Completed` for the controller to finish and report.

use std::rc::Rc;

use log::{debug, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::list::{Notice, Request};

use super::helpers::read_image;
use super::messages::Msg;
use super::state::ListPage;
use crate::components::entities::EntityView;
use crate::http::HttpApi;
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

fn send<E: EntityView>(page: &ListPage<E>, ctx: &Context<ListPage<E>>, request: Request) {
    let api = Rc::clone(&page.api);
    let link = ctx.link().clone();
    spawn_local(async move {
        let response = request.send::<E, HttpApi<E>>(&api).await;
        link.send_message(Msg::Completed(response));
    });
}

pub fn update<E: EntityView>(page: &mut ListPage<E>, ctx: &Context<ListPage<E>>, msg: Msg<E>) -> bool {
    match msg {
        Msg::Load => match page.controller.start_load() {
            Ok(request) => {
                send(page, ctx, request);
                true
            }
            Err(_) => false,
        },
        Msg::Completed(response) => {
            page.controller.finish(response);
            if !page.form().is_open() {
                page.discard_prompt = false;
                close_top_sheet(page.form_ref.clone());
            }
            if page.list().selected().is_none() {
                close_top_sheet(page.detail_ref.clone());
            }
            true
        }

        Msg::SetSearch(text) => {
            page.controller.state_mut().filter.search_text = text;
            true
        }
        Msg::SetStatusFilter(status) => {
            page.controller.state_mut().filter.status = status;
            true
        }
        Msg::SetClassTypeFilter(class_type) => {
            page.controller.state_mut().filter.class_type = class_type;
            true
        }
        Msg::ClearFilters => {
            page.controller.state_mut().filter.clear();
            true
        }
        Msg::SortBy(key) => {
            page.controller.state_mut().sort_by(key);
            true
        }

        Msg::OpenAdd => {
            page.controller.form_mut().open_add();
            page.discard_prompt = false;
            open_top_sheet(page.form_ref.clone());
            true
        }
        Msg::OpenEdit(id) => {
            let Some(record) = page.list().get(&id).cloned() else {
                return false;
            };
            page.controller.form_mut().open_edit(id, &record);
            page.controller.state_mut().clear_selection();
            page.discard_prompt = false;
            close_top_sheet(page.detail_ref.clone());
            open_top_sheet(page.form_ref.clone());
            true
        }
        Msg::CloseForm => {
            if page.form().is_submitting() {
                return false;
            }
            if page.form().is_dirty() && !page.discard_prompt {
                page.discard_prompt = true;
                return true;
            }
            page.discard_prompt = false;
            page.controller.form_mut().close();
            close_top_sheet(page.form_ref.clone());
            true
        }
        Msg::KeepEditing => {
            page.discard_prompt = false;
            true
        }
        Msg::SetField(name, value) => {
            page.controller.form_mut().set_field(name, value);
            true
        }
        Msg::PickImage(name, file) => {
            read_image(ctx.link().clone(), name, file);
            false
        }
        Msg::ImageRead(name, upload) => {
            page.controller.form_mut().set_image(name, Some(upload));
            true
        }
        Msg::ClearImage(name) => {
            page.controller.form_mut().set_image(name, None);
            true
        }
        Msg::Submit => {
            match page.controller.start_submit() {
                Ok(request) => send(page, ctx, request),
                Err(err) => debug!("{} form not sent: {err}", E::KIND.singular()),
            }
            true
        }

        Msg::ShowDetail(id) => {
            page.controller.state_mut().select(id);
            open_top_sheet(page.detail_ref.clone());
            true
        }
        Msg::CloseDetail => {
            page.controller.state_mut().clear_selection();
            close_top_sheet(page.detail_ref.clone());
            true
        }

        Msg::AskRemove(id) => {
            match page.controller.state_mut().request_removal(id) {
                Ok(()) => open_top_sheet(page.confirm_ref.clone()),
                Err(err) => warn!("{err}"),
            }
            true
        }
        Msg::CancelRemove => {
            page.controller.state_mut().cancel_removal();
            close_top_sheet(page.confirm_ref.clone());
            true
        }
        Msg::ConfirmRemove => {
            close_top_sheet(page.confirm_ref.clone());
            let Some(confirmed) = page.controller.state_mut().confirm_removal() else {
                return true;
            };
            match page.controller.start_remove(confirmed) {
                Ok(request) => send(page, ctx, request),
                Err(err) => page.controller.report(&Notice::refused(&err)),
            }
            true
        }

        Msg::SetStatus(id, status) => {
            if page.list().get(&id).is_none_or(|r| r.status() == status) {
                return false;
            }
            match page.controller.start_status(id, status) {
                Ok(request) => send(page, ctx, request),
                Err(err) => page.controller.report(&Notice::refused(&err)),
            }
            true
        }
    }
}
