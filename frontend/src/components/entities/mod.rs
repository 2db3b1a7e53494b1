//! How each record type appears on its list page: table columns, row cells
//! and the detail sheet. Status and row actions are rendered generically.

mod class_session;
mod post;
mod student;
mod teacher;

use common::model::Entity;
use yew::{html, Html};

pub struct Column<F> {
    pub label: &'static str,
    pub sort: Option<F>,
}

impl<F> Column<F> {
    pub fn sortable(label: &'static str, key: F) -> Self {
        Self { label, sort: Some(key) }
    }

    pub fn plain(label: &'static str) -> Self {
        Self { label, sort: None }
    }
}

pub trait EntityView: Entity {
    /// Page heading, also used in the result counter.
    const HEADING: &'static str;
    const SEARCH_HINT: &'static str;
    /// Sort key behind the generic status column.
    const STATUS_FIELD: Self::Field;
    const FILTERS_CLASS_TYPE: bool = false;

    /// Columns before the status column, matching `cells` one to one.
    fn columns() -> Vec<Column<Self::Field>>;

    fn cells(&self) -> Vec<Html>;

    /// How the record is named in confirmations.
    fn display_name(&self) -> String;

    fn detail(&self) -> Html;
}

fn thumbnail(url: Option<&str>, alt: &str) -> Html {
    match url.filter(|u| !u.is_empty()) {
        Some(url) => html! { <img class="thumb" src={url.to_string()} alt={alt.to_string()} /> },
        None => html! { <span class="thumb placeholder"><i class="material-icons">{"person"}</i></span> },
    }
}

fn text_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn detail_row(label: &'static str, value: Option<&str>) -> Html {
    html! {
        <>
            <dt>{ label }</dt>
            <dd>{ text_or_dash(value) }</dd>
        </>
    }
}
