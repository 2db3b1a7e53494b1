//! Small event helpers used by `update.rs` and the views.

use gloo_file::{futures::read_as_bytes, Blob};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::form::ImageUpload;

use super::messages::Msg;
use super::state::ListPage;
use crate::components::entities::EntityView;

pub fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

pub fn picked_file(e: Event) -> Option<web_sys::File> {
    e.target_unchecked_into::<HtmlInputElement>()
        .files()
        .and_then(|files| files.get(0))
}

/// Reads a picked image in the background and hands it back as
/// `Msg::ImageRead`.
pub fn read_image<E: EntityView>(link: Scope<ListPage<E>>, name: &'static str, file: web_sys::File) {
    let file_name = file.name();
    let mime = file.type_();
    wasm_bindgen_futures::spawn_local(async move {
        match read_as_bytes(&Blob::from(file)).await {
            Ok(bytes) => link.send_message(Msg::ImageRead(name, ImageUpload::new(file_name, mime, bytes))),
            Err(err) => {
                log::error!("could not read {file_name}: {err}");
            }
        }
    });
}
