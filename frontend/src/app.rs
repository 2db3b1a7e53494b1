use common::config::ClientConfig;
use common::model::{ClassSession, PromotionalPost, Student, Teacher};
use yew::{classes, html, Component, Context, Html, Properties};

use crate::components::calendar::ClassCalendar;
use crate::components::records::ListPage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Teachers,
    Students,
    Classes,
    Calendar,
    Posts,
}

impl Tab {
    const ALL: [Tab; 5] = [Tab::Teachers, Tab::Students, Tab::Classes, Tab::Calendar, Tab::Posts];

    fn label(self) -> &'static str {
        match self {
            Tab::Teachers => "Teachers",
            Tab::Students => "Students",
            Tab::Classes => "Classes",
            Tab::Calendar => "Calendar",
            Tab::Posts => "Posts",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tab::Teachers => "school",
            Tab::Students => "groups",
            Tab::Classes => "event_note",
            Tab::Calendar => "calendar_month",
            Tab::Posts => "campaign",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ClientConfig,
}

pub struct App {
    tab: Tab,
}

impl Component for App {
    type Message = Tab;
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { tab: Tab::Teachers }
    }

    fn update(&mut self, _ctx: &Context<Self>, tab: Tab) -> bool {
        let changed = self.tab != tab;
        self.tab = tab;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = ctx.props().config.clone();
        let link = ctx.link();

        html! {
            <div class="admin-shell">
                <nav class="tab-bar">
                    { for Tab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        html! {
                            <button
                                class={classes!("tab-btn", (self.tab == tab).then_some("active"))}
                                onclick={link.callback(move |_| tab)}
                            >
                                <i class="material-icons">{ tab.icon() }</i>
                                { tab.label() }
                            </button>
                        }
                    }) }
                </nav>
                <main>
                    {
                        match self.tab {
                            Tab::Teachers => html! { <ListPage<Teacher> {config} /> },
                            Tab::Students => html! { <ListPage<Student> {config} /> },
                            Tab::Classes => html! { <ListPage<ClassSession> {config} /> },
                            Tab::Calendar => html! { <ClassCalendar {config} /> },
                            Tab::Posts => html! { <ListPage<PromotionalPost> {config} /> },
                        }
                    }
                </main>
            </div>
        }
    }
}
