//! Add/edit form sheet. Inputs are generated from the draft's field specs;
//! every input writes back through `Msg::SetField` and shows its first error
//! underneath.

use yew::html::Scope;
use yew::prelude::*;

use common::form::{Choices, Draft, FieldSpec, InputKind, OpenForm};

use crate::components::entities::EntityView;
use crate::components::records::helpers::{input_value, picked_file, select_value, textarea_value};
use crate::components::records::{ListPage, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn form_dialog<E: EntityView>(page: &ListPage<E>, link: &Scope<ListPage<E>>) -> Html {
    let title = match page.form().as_open() {
        Some(open) if open.mode.is_add() => format!("Add {}", E::KIND.title()),
        Some(_) => format!("Edit {}", E::KIND.title()),
        None => E::KIND.title().to_string(),
    };

    html! {
        <YwMaterialTopSheet
            node_ref={page.form_ref.clone()}
            title={title}
            on_close={link.callback(|_| Msg::CloseForm)}
        >
            {
                match page.form().as_open() {
                    Some(open) => build_form(open, page.discard_prompt, link),
                    None => html! {},
                }
            }
        </YwMaterialTopSheet>
    }
}

fn build_form<E: EntityView>(
    open: &OpenForm<E::Draft>,
    discard_prompt: bool,
    link: &Scope<ListPage<E>>,
) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let submit_label = match (open.submitting, open.mode.is_add()) {
        (true, true) => "Adding...",
        (true, false) => "Saving...",
        (false, true) => "Add",
        (false, false) => "Save changes",
    };

    html! {
        <form class="record-form" {onsubmit} novalidate=true>
            { for open.fields().into_iter().map(|spec| build_field(open, spec, link)) }

            if discard_prompt {
                <div class="discard-prompt">
                    <span>{"Discard unsaved changes?"}</span>
                    <button type="button" class="btn text" onclick={link.callback(|_| Msg::KeepEditing)}>{"Keep editing"}</button>
                    <button type="button" class="btn danger" onclick={link.callback(|_| Msg::CloseForm)}>{"Discard"}</button>
                </div>
            }

            <div class="sheet-actions">
                <button type="button" class="btn text" disabled={open.submitting} onclick={link.callback(|_| Msg::CloseForm)}>
                    {"Cancel"}
                </button>
                <button type="submit" class="btn primary" disabled={open.submitting}>{ submit_label }</button>
            </div>
        </form>
    }
}

fn build_field<E: EntityView>(
    open: &OpenForm<E::Draft>,
    spec: FieldSpec,
    link: &Scope<ListPage<E>>,
) -> Html {
    let name = spec.name;
    let value = open.draft.get(name).to_string();
    let disabled = !spec.enabled || open.submitting;
    let error = open.errors.first(name).map(str::to_string);
    let input_id = format!("field-{name}");

    let input = match spec.input {
        InputKind::TextArea => html! {
            <textarea
                id={input_id.clone()}
                rows="6"
                {value}
                {disabled}
                oninput={link.callback(move |e: InputEvent| Msg::SetField(name, textarea_value(e)))}
            />
        },
        InputKind::Select(choices) => {
            let options: Vec<(&'static str, &'static str)> = match choices {
                Choices::Statuses(taxonomy) => taxonomy.options().iter().map(|o| (o.value, o.label)).collect(),
                Choices::Values(values) => values.iter().map(|v| (*v, *v)).collect(),
            };
            html! {
                <select
                    id={input_id.clone()}
                    {disabled}
                    onchange={link.callback(move |e: Event| Msg::SetField(name, select_value(e)))}
                >
                    if !spec.required || value.is_empty() {
                        <option value="" selected={value.is_empty()}>{"Select..."}</option>
                    }
                    { for options.into_iter().map(|(v, label)| html! {
                        <option value={v} selected={v == value}>{ label }</option>
                    }) }
                </select>
            }
        }
        InputKind::Image => build_image_input(open, name, &input_id, disabled, link),
        kind => html! {
            <input
                id={input_id.clone()}
                type={input_type(kind)}
                {value}
                {disabled}
                required={spec.required}
                autocomplete={if kind == InputKind::Password { "new-password" } else { "off" }}
                oninput={link.callback(move |e: InputEvent| Msg::SetField(name, input_value(e)))}
            />
        },
    };

    html! {
        <div class={classes!("form-field", error.is_some().then_some("has-error"), (!spec.enabled).then_some("disabled"))}>
            <label for={input_id}>
                { spec.label }
                if spec.required { <span class="required">{"*"}</span> }
            </label>
            { input }
            if let Some(error) = error {
                <p class="field-error">{ error }</p>
            }
        </div>
    }
}

fn input_type(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Email => "email",
        InputKind::Password => "password",
        InputKind::Tel => "tel",
        InputKind::Date => "date",
        InputKind::Time => "time",
        _ => "text",
    }
}

fn build_image_input<E: EntityView>(
    open: &OpenForm<E::Draft>,
    name: &'static str,
    input_id: &str,
    disabled: bool,
    link: &Scope<ListPage<E>>,
) -> Html {
    let preview = open.draft.image().map(|upload| upload.preview_data_url());

    html! {
        <div class="image-input">
            if let Some(src) = preview {
                <img class="preview" {src} alt="Selected image" />
                <button type="button" class="btn text" {disabled} onclick={link.callback(move |_| Msg::ClearImage(name))}>
                    {"Remove"}
                </button>
            }
            <input
                id={input_id.to_string()}
                type="file"
                accept="image/*"
                {disabled}
                onchange={link.batch_callback(move |e: Event| picked_file(e).map(|file| Msg::PickImage(name, file)))}
            />
        </div>
    }
}
