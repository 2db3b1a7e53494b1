use num_format::{Locale, ToFormattedString};
use yew::html::Scope;
use yew::prelude::*;

use common::calendar::{TimeSlot, WeekGrid, Weekday};
use common::list::Action;
use common::model::ClassSession;
use common::taxonomy::{CalendarStatus, CALENDAR_STATUSES, CLASS_TYPES};

use super::grid::CalendarGrid;
use super::messages::{CalendarMode, Msg};
use super::state::{today, ClassCalendar};
use crate::components::status_badge::status_badge;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn view(calendar: &ClassCalendar, ctx: &Context<ClassCalendar>) -> Html {
    let link = ctx.link();
    let visible = calendar.classes().visible_records();
    let grid = WeekGrid::build(&visible, TimeSlot::day_slots(calendar.controller.config()));

    html! {
        <section class="calendar-page">
            { build_toolbar(calendar, link, visible.len()) }
            {
                if !calendar.classes().is_loaded() {
                    html! { <p class="empty">{"Loading classes..."}</p> }
                } else {
                    match calendar.mode {
                        CalendarMode::Week => build_week(&grid, link),
                        CalendarMode::Day => build_day(&grid, calendar.day, link),
                    }
                }
            }
            { build_unplaced(&grid, link) }
            { event_dialog(calendar, link) }
        </section>
    }
}

fn build_toolbar(calendar: &ClassCalendar, link: &Scope<ClassCalendar>, shown: usize) -> Html {
    let mode_button = |mode: CalendarMode, label: &'static str| {
        html! {
            <button
                class={classes!("btn", "toggle", (calendar.mode == mode).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetMode(mode))}
            >
                { label }
            </button>
        }
    };
    let filter = &calendar.classes().filter;

    html! {
        <header class="calendar-toolbar">
            <div class="segmented">
                { mode_button(CalendarMode::Week, "Week") }
                { mode_button(CalendarMode::Day, "Day") }
            </div>
            if calendar.mode == CalendarMode::Day {
                <div class="day-picker">
                    <button class="icon-btn" title="Previous day" onclick={link.callback(|_| Msg::ShiftDay(-1))}>
                        <i class="material-icons">{"chevron_left"}</i>
                    </button>
                    <strong>{ calendar.day.name() }</strong>
                    <button class="icon-btn" title="Next day" onclick={link.callback(|_| Msg::ShiftDay(1))}>
                        <i class="material-icons">{"chevron_right"}</i>
                    </button>
                    <button class="btn text" onclick={link.callback(|_| Msg::SetDay(today()))}>{"Today"}</button>
                </div>
            }
            <input
                type="search"
                placeholder="Search student name"
                value={filter.search_text.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetSearch(e.target_unchecked_into::<web_sys::HtmlInputElement>().value()))}
            />
            <select onchange={link.callback(|e: Event| Msg::SetClassType(e.target_unchecked_into::<web_sys::HtmlSelectElement>().value()))}>
                <option value="" selected={filter.class_type.is_empty()}>{"All class types"}</option>
                { for CLASS_TYPES.iter().map(|t| html! {
                    <option value={*t} selected={filter.class_type == *t}>{ *t }</option>
                }) }
            </select>
            <span class="muted">{ format!("{} classes", shown.to_formatted_string(&Locale::en)) }</span>
        </header>
    }
}

fn event_chip(class: &ClassSession, link: &Scope<ClassCalendar>) -> Html {
    let option = CALENDAR_STATUSES.lookup(&class.status);
    let id = class.id.clone();
    let time = class.start_time.get(..5).unwrap_or(&class.start_time).to_string();

    html! {
        <button
            key={class.id.to_string()}
            class={classes!("event-chip", option.bg_class(), option.text_class())}
            title={format!("{} ({})", class.student_name, option.label)}
            onclick={link.callback(move |_| Msg::OpenEvent(id.clone()))}
        >
            <span class="event-time">{ time }</span>
            <span class="event-student">{ class.student_name.clone() }</span>
            <i class="material-icons">{ option.icon }</i>
        </button>
    }
}

fn cell(classes: &[&ClassSession], link: &Scope<ClassCalendar>) -> Html {
    html! {
        <div class="calendar-cell">
            { for classes.iter().map(|c| event_chip(c, link)) }
        </div>
    }
}

fn build_week(grid: &WeekGrid<'_>, link: &Scope<ClassCalendar>) -> Html {
    let current = today();
    html! {
        <CalendarGrid days={Weekday::ALL.len()} slots={grid.slots.len()}>
            <div class="calendar-corner" />
            { for Weekday::ALL.iter().map(|day| html! {
                <div class={classes!("calendar-day-header", (*day == current).then_some("today"))}>
                    { day.short() }
                </div>
            }) }
            { for grid.slots.iter().enumerate().map(|(i, slot)| html! {
                <>
                    <div class="calendar-time">{ slot.label() }</div>
                    { for Weekday::ALL.iter().map(|day| cell(grid.cell(i, *day), link)) }
                </>
            }) }
        </CalendarGrid>
    }
}

fn build_day(grid: &WeekGrid<'_>, day: Weekday, link: &Scope<ClassCalendar>) -> Html {
    html! {
        <CalendarGrid days={1} slots={grid.slots.len()}>
            <div class="calendar-corner" />
            <div class="calendar-day-header">{ day.name() }</div>
            { for grid.day_column(day).into_iter().map(|(slot, classes)| html! {
                <>
                    <div class="calendar-time">{ slot.label() }</div>
                    { cell(classes, link) }
                </>
            }) }
        </CalendarGrid>
    }
}

fn build_unplaced(grid: &WeekGrid<'_>, link: &Scope<ClassCalendar>) -> Html {
    if grid.unplaced.is_empty() {
        return html! {};
    }
    html! {
        <div class="calendar-unplaced">
            <h3>{ format!("Outside the calendar ({})", grid.unplaced.len()) }</h3>
            <p class="muted">{"Missing day or time, or outside opening hours."}</p>
            { cell(&grid.unplaced, link) }
        </div>
    }
}

fn event_dialog(calendar: &ClassCalendar, link: &Scope<ClassCalendar>) -> Html {
    let body = match calendar.classes().selected() {
        Some(class) => {
            let busy = calendar.classes().is_busy(&Action::Status(class.id.clone()));
            let id = class.id.clone();
            let current = class.status.clone();
            let choices = CalendarStatus::selectable_after(&current);
            let on_change = link.callback(move |e: Event| {
                Msg::SetStatus(
                    id.clone(),
                    e.target_unchecked_into::<web_sys::HtmlSelectElement>().value(),
                )
            });

            html! {
                <div class="event-detail">
                    <dl>
                        <dt>{"Student"}</dt><dd>{ class.student_name.clone() }</dd>
                        <dt>{"Teacher"}</dt><dd>{ class.teacher_name.clone().unwrap_or_default() }</dd>
                        <dt>{"Class type"}</dt><dd>{ class.class_type.clone() }</dd>
                        <dt>{"Date"}</dt><dd>{ class.date.clone() }</dd>
                        <dt>{"Time"}</dt><dd>{ format!("{} - {}", class.start_time, class.end_time) }</dd>
                    </dl>
                    <div class="status-control">
                        { status_badge(CALENDAR_STATUSES.lookup(&class.status)) }
                        <select class="status-select" disabled={busy} onchange={on_change}>
                            <option value={current.clone()} selected=true>{"Change status..."}</option>
                            { for choices.into_iter().filter(|o| o.value != current).map(|o| html! {
                                <option value={o.value}>{ o.label }</option>
                            }) }
                        </select>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <YwMaterialTopSheet
            node_ref={calendar.event_ref.clone()}
            title="Class"
            on_close={link.callback(|_| Msg::CloseEvent)}
        >
            { body }
        </YwMaterialTopSheet>
    }
}
