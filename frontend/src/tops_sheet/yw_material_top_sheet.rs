//! Modal sheet used by every dialog (add/edit forms, delete confirmation,
//! record details). The sheet is always mounted; it is shown and hidden by
//! toggling the `show` class on its root element.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, AttrValue, Callback, Component, Context, Html, NodeRef, Properties};

const SHOW_CLASS: &str = "show";

/// Lets the browser paint the hidden state first so the transition runs.
const SHOW_DELAY_MS: u32 = 50;

pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    pub title: AttrValue,
    /// Close button and backdrop click.
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let close = props.on_close.reform(|_| ());
        let panel_class = if props.wide { "top-sheet-panel wide" } else { "top-sheet-panel" };

        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-backdrop" onclick={close.clone()} />
                <div class={panel_class} role="dialog" aria-labelledby={format!("{}-title", self.id)}>
                    <header class="top-sheet-header">
                        <h2 id={format!("{}-title", self.id)}>{ props.title.clone() }</h2>
                        <button class="icon-btn" title="Close" onclick={close}>
                            <i class="material-icons">{"close"}</i>
                        </button>
                    </header>
                    <div class="top-sheet-body">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        Timeout::new(SHOW_DELAY_MS, move || {
            top_sheet.class_list().add_1(SHOW_CLASS).ok();
        })
        .forget();
    }
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        top_sheet.class_list().remove_1(SHOW_CLASS).ok();
    }
}
