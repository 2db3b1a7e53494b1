use yew::html::Scope;
use yew::prelude::*;

use crate::components::entities::EntityView;
use crate::components::records::{ListPage, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn confirm_dialog<E: EntityView>(page: &ListPage<E>, link: &Scope<ListPage<E>>) -> Html {
    let name = page
        .list()
        .pending_removal()
        .map(E::display_name)
        .unwrap_or_default();

    html! {
        <YwMaterialTopSheet
            node_ref={page.confirm_ref.clone()}
            title={format!("Delete {}", E::KIND.singular())}
            on_close={link.callback(|_| Msg::CancelRemove)}
        >
            <p>{ format!("Delete {name}? This cannot be undone.") }</p>
            <div class="sheet-actions">
                <button class="btn text" onclick={link.callback(|_| Msg::CancelRemove)}>{"Cancel"}</button>
                <button class="btn danger" onclick={link.callback(|_| Msg::ConfirmRemove)}>{"Delete"}</button>
            </div>
        </YwMaterialTopSheet>
    }
}
