use yew::html::Scope;
use yew::prelude::*;

use crate::components::entities::EntityView;
use crate::components::records::{ListPage, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn detail_dialog<E: EntityView>(page: &ListPage<E>, link: &Scope<ListPage<E>>) -> Html {
    let selected = page.list().selected();

    html! {
        <YwMaterialTopSheet
            node_ref={page.detail_ref.clone()}
            title={format!("{} details", E::KIND.title())}
            on_close={link.callback(|_| Msg::CloseDetail)}
            wide=true
        >
            {
                match selected {
                    Some(record) => {
                        let id = record.id().clone();
                        html! {
                            <>
                                { record.detail() }
                                <div class="sheet-actions">
                                    <button class="btn text" onclick={link.callback(|_| Msg::CloseDetail)}>{"Close"}</button>
                                    <button class="btn primary" onclick={link.callback(move |_| Msg::OpenEdit(id.clone()))}>{"Edit"}</button>
                                </div>
                            </>
                        }
                    }
                    None => html! {},
                }
            }
        </YwMaterialTopSheet>
    }
}
