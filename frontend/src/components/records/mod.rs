//! Generic list screen shared by teachers, students, classes and posts.
//!
//! The component owns a `ListController` from `common` and drives it from
//! Yew messages: a `start_*` call yields the request, the request is sent in
//! a spawned task, and its response comes back as `Msg::Completed` to be
//! finished by the controller. Per-entity
//! rendering comes from [`EntityView`].

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::components::entities::EntityView;
pub use messages::Msg;
pub use props::ListPageProps;
pub use state::ListPage;

impl<E: EntityView> Component for ListPage<E> {
    type Message = Msg<E>;
    type Properties = ListPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ListPage::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.list().is_loaded() {
            ctx.link().send_message(Msg::Load);
        }
    }
}
