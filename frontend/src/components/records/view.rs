//! List page rendering: header with the add button, filter bar, the sortable
//! table, and the three sheets (form, delete confirmation, details).

use num_format::{Locale, ToFormattedString};
use yew::html::Scope;
use yew::prelude::*;

use common::list::Action;
use common::taxonomy::CLASS_TYPES;

use super::dialogs::{confirm_dialog, detail_dialog, form_dialog};
use super::helpers::{input_value, select_value};
use super::messages::Msg;
use super::state::ListPage;
use crate::components::entities::{Column, EntityView};
use crate::components::status_badge::status_badge;

pub fn view<E: EntityView>(page: &ListPage<E>, ctx: &Context<ListPage<E>>) -> Html {
    let link = ctx.link();
    html! {
        <section class="records-page">
            { build_header(page, link) }
            { build_filters(page, link) }
            { build_table(page, link) }
            { form_dialog(page, link) }
            { confirm_dialog(page, link) }
            { detail_dialog(page, link) }
        </section>
    }
}

fn build_header<E: EntityView>(page: &ListPage<E>, link: &Scope<ListPage<E>>) -> Html {
    let adding = page.list().is_busy(&Action::Add);
    let shown = page.list().visible_records().len();
    let total = page.list().records().len();

    html! {
        <header class="records-header">
            <div>
                <h1>{ E::HEADING }</h1>
                <p class="muted">
                    { format!(
                        "Showing {} of {}",
                        shown.to_formatted_string(&Locale::en),
                        total.to_formatted_string(&Locale::en),
                    ) }
                </p>
            </div>
            <button class="btn primary" disabled={adding} onclick={link.callback(|_| Msg::OpenAdd)}>
                <i class="material-icons">{"add"}</i>
                { if adding { "Adding...".to_string() } else { format!("Add {}", E::KIND.title()) } }
            </button>
        </header>
    }
}

fn build_filters<E: EntityView>(page: &ListPage<E>, link: &Scope<ListPage<E>>) -> Html {
    let filter = &page.list().filter;
    let statuses = E::KIND.taxonomy().options();

    html! {
        <div class="filter-bar">
            <input
                type="search"
                class="search"
                placeholder={E::SEARCH_HINT}
                value={filter.search_text.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetSearch(input_value(e)))}
            />
            <select onchange={link.callback(|e: Event| Msg::SetStatusFilter(select_value(e)))}>
                <option value="" selected={filter.status.is_empty()}>{"All statuses"}</option>
                { for statuses.iter().map(|opt| html! {
                    <option value={opt.value} selected={filter.status == opt.value}>{ opt.label }</option>
                }) }
            </select>
            if E::FILTERS_CLASS_TYPE {
                <select onchange={link.callback(|e: Event| Msg::SetClassTypeFilter(select_value(e)))}>
                    <option value="" selected={filter.class_type.is_empty()}>{"All class types"}</option>
                    { for CLASS_TYPES.iter().map(|t| html! {
                        <option value={*t} selected={filter.class_type == *t}>{ *t }</option>
                    }) }
                </select>
            }
            if !filter.is_empty() {
                <button class="btn text" onclick={link.callback(|_| Msg::ClearFilters)}>{"Clear filters"}</button>
            }
        </div>
    }
}

fn header_cell<E: EntityView>(
    page: &ListPage<E>,
    link: &Scope<ListPage<E>>,
    column: Column<E::Field>,
) -> Html {
    let Some(key) = column.sort else {
        return html! { <th>{ column.label }</th> };
    };
    let arrow = page
        .list()
        .sort
        .filter(|s| s.key == key)
        .map(|s| html! { <i class="material-icons sort-arrow">{ s.direction.arrow() }</i> });

    html! {
        <th class="sortable" onclick={link.callback(move |_| Msg::SortBy(key))}>
            { column.label }
            { arrow.unwrap_or_default() }
        </th>
    }
}

fn build_table<E: EntityView>(page: &ListPage<E>, link: &Scope<ListPage<E>>) -> Html {
    if !page.list().is_loaded() {
        return html! { <p class="empty">{ format!("Loading {}...", E::KIND.plural()) }</p> };
    }
    let visible = page.list().visible_records();
    if visible.is_empty() {
        let text = if page.list().records().is_empty() {
            format!("No {} yet.", E::KIND.plural())
        } else {
            format!("No {} match the current filters.", E::KIND.plural())
        };
        return html! { <p class="empty">{ text }</p> };
    }

    html! {
        <table class="records-table">
            <thead>
                <tr>
                    { for E::columns().into_iter().map(|c| header_cell(page, link, c)) }
                    { header_cell(page, link, Column::sortable("Status", E::STATUS_FIELD)) }
                    <th class="actions">{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                { for visible.into_iter().map(|record| build_row(page, link, record)) }
            </tbody>
        </table>
    }
}

fn build_row<E: EntityView>(page: &ListPage<E>, link: &Scope<ListPage<E>>, record: &E) -> Html {
    let id = record.id().clone();
    let busy = page.list().is_record_busy(&id);
    let removing = page.list().is_busy(&Action::Remove(id.clone()));
    let (show, edit, remove) = (id.clone(), id.clone(), id.clone());

    html! {
        <tr key={id.to_string()} class={classes!(busy.then_some("busy"))}>
            { for record.cells().into_iter().map(|cell| html! { <td>{ cell }</td> }) }
            <td class="status-cell">{ status_cell(record, busy, link) }</td>
            <td class="actions">
                <button class="icon-btn" title="View" onclick={link.callback(move |_| Msg::ShowDetail(show.clone()))}>
                    <i class="material-icons">{"visibility"}</i>
                </button>
                <button class="icon-btn" title="Edit" disabled={busy} onclick={link.callback(move |_| Msg::OpenEdit(edit.clone()))}>
                    <i class="material-icons">{"edit"}</i>
                </button>
                <button class="icon-btn danger" title="Delete" disabled={busy} onclick={link.callback(move |_| Msg::AskRemove(remove.clone()))}>
                    <i class="material-icons">{ if removing { "hourglass_empty" } else { "delete" } }</i>
                </button>
            </td>
        </tr>
    }
}

/// Badge plus the control that changes the status: a toggle button for
/// two-state taxonomies, a dropdown for larger ones.
pub fn status_cell<E: EntityView>(record: &E, busy: bool, link: &Scope<ListPage<E>>) -> Html {
    let taxonomy = E::KIND.taxonomy();
    let current = record.status();
    let id = record.id().clone();

    let control = match taxonomy.toggled(current) {
        Some(next) => html! {
            <button
                class="icon-btn"
                title={format!("Mark as {next}")}
                disabled={busy}
                onclick={link.callback(move |_| Msg::SetStatus(id.clone(), next.to_string()))}
            >
                <i class="material-icons">{"swap_horiz"}</i>
            </button>
        },
        None => html! {
            <select
                class="status-select"
                disabled={busy}
                onchange={link.callback(move |e: Event| Msg::SetStatus(id.clone(), select_value(e)))}
            >
                if !taxonomy.contains(current) {
                    <option value={current.to_string()} selected=true>{ taxonomy.lookup(current).label.to_string() }</option>
                }
                { for taxonomy.options().iter().map(|opt| html! {
                    <option value={opt.value} selected={opt.value == current}>{ opt.label }</option>
                }) }
            </select>
        },
    };

    html! {
        <div class="status-control">
            { status_badge(taxonomy.lookup(current)) }
            { control }
        </div>
    }
}
