use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
    /// Day columns, not counting the time-label column.
    pub days: usize,
    /// Time-slot rows, not counting the header row.
    pub slots: usize,
    pub children: Children,
}

/// CSS grid frame of the class calendar: a narrow time-label column
/// followed by one column per day, a header row followed by one row per
/// slot. Children are laid out row by row.
pub struct CalendarGrid;

impl Component for CalendarGrid {
    type Message = ();
    type Properties = CalendarGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CalendarGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: 72px repeat({}, minmax(0, 1fr));
             grid-template-rows: auto repeat({}, minmax(3.5rem, auto));
             gap: 1px;
             background: #e5e7eb;
             border: 1px solid #e5e7eb;",
            props.days.max(1),
            props.slots.max(1)
        );

        html! {
            <div class="calendar-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
