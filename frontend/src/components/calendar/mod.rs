//! Weekly/daily class calendar. Classes are loaded once, filtered with the
//! same predicate as the class list, and placed into a `WeekGrid`. Opening
//! an event lets the user move it to one of the statuses its current status
//! allows.

use yew::prelude::*;

mod grid;
mod messages;
mod state;
mod update;
mod view;

use crate::components::records::ListPageProps;
pub use messages::{CalendarMode, Msg};
pub use state::ClassCalendar;

impl Component for ClassCalendar {
    type Message = Msg;
    type Properties = ListPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ClassCalendar::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.classes().is_loaded() {
            ctx.link().send_message(Msg::Load);
        }
    }
}
