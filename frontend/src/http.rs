//! `RecordApi` over `gloo-net`.
//!
//! Every request is sent as an XHR-style JSON request with the page's CSRF
//! token attached. Create/update bodies are `multipart/form-data` so that
//! image files travel as file parts; updates are POSTed with a `_method=PUT`
//! override because PHP does not parse multipart bodies on PUT.

use std::marker::PhantomData;

use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, FormData, HtmlMetaElement};

use common::api::{
    METHOD_OVERRIDE_FIELD, RecordApi, Saved, StatusChanged, collection_url, decode_response,
    parse_deleted, parse_list, parse_saved, parse_status_changed, record_url, status_url,
};
use common::config::ClientConfig;
use common::error::ApiError;
use common::form::{FormPayload, FormValue};
use common::model::{Entity, RecordId};

pub struct HttpApi<E> {
    base: String,
    _entity: PhantomData<E>,
}

#[derive(Serialize)]
struct StatusPatch<'a> {
    status: &'a str,
}

impl<E: Entity> HttpApi<E> {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: config.api_base.clone(),
            _entity: PhantomData,
        }
    }

    fn collection(&self) -> String {
        collection_url(&self.base, E::KIND)
    }

    fn record(&self, id: &RecordId) -> String {
        record_url(&self.base, E::KIND, id)
    }
}

impl<E: Entity> RecordApi<E> for HttpApi<E> {
    async fn fetch_all(&self) -> Result<Vec<E>, ApiError> {
        let request = with_headers(Request::get(&self.collection()))
            .build()
            .map_err(transport)?;
        parse_list(send(request).await?)
    }

    async fn create(&self, payload: FormPayload) -> Result<Saved<E>, ApiError> {
        let request = with_headers(Request::post(&self.collection()))
            .body(form_data(&payload)?)
            .map_err(transport)?;
        parse_saved(send(request).await?)
    }

    async fn update(&self, id: &RecordId, mut payload: FormPayload) -> Result<Saved<E>, ApiError> {
        payload.push_text(METHOD_OVERRIDE_FIELD, "PUT");
        let request = with_headers(Request::post(&self.record(id)))
            .body(form_data(&payload)?)
            .map_err(transport)?;
        parse_saved(send(request).await?)
    }

    async fn delete(&self, id: &RecordId) -> Result<String, ApiError> {
        let request = with_headers(Request::delete(&self.record(id)))
            .build()
            .map_err(transport)?;
        Ok(parse_deleted(&send(request).await?))
    }

    async fn set_status(&self, id: &RecordId, status: &str) -> Result<StatusChanged<E>, ApiError> {
        let request = with_headers(Request::patch(&status_url(&self.base, E::KIND, id)))
            .json(&StatusPatch { status })
            .map_err(transport)?;
        parse_status_changed(send(request).await?)
    }
}

fn with_headers(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest");
    match csrf_token() {
        Some(token) => builder.header("X-CSRF-TOKEN", &token),
        None => builder,
    }
}

/// Content of `<meta name="csrf-token">`, when the host page renders one.
fn csrf_token() -> Option<String> {
    web_sys::window()?
        .document()?
        .query_selector("meta[name=\"csrf-token\"]")
        .ok()??
        .dyn_into::<HtmlMetaElement>()
        .ok()
        .map(|meta| meta.content())
        .filter(|token| !token.is_empty())
}

async fn send(request: Request) -> Result<Value, ApiError> {
    let response = request.send().await.map_err(transport)?;
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    decode_response(status, &body)
}

fn form_data(payload: &FormPayload) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(js_error)?;
    for (name, value) in payload.iter() {
        match value {
            FormValue::Text(text) => data.append_with_str(name, text).map_err(js_error)?,
            FormValue::File(upload) => {
                let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
                let options = BlobPropertyBag::new();
                options.set_type(&upload.mime);
                let blob = Blob::new_with_u8_array_sequence_and_options(
                    &js_sys::Array::of1(&bytes),
                    &options,
                )
                .map_err(js_error)?;
                data.append_with_blob_and_filename(name, &blob, &upload.file_name)
                    .map_err(js_error)?;
            }
        }
    }
    Ok(data)
}

fn transport(err: gloo_net::Error) -> ApiError {
    gloo_console::error!(format!("request failed: {err}"));
    ApiError::Network(err.to_string())
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}
