use common::calendar::Weekday;
use common::list::Response;
use common::model::{ClassSession, RecordId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarMode {
    Week,
    Day,
}

pub enum Msg {
    Load,
    Completed(Response<ClassSession>),
    SetMode(CalendarMode),
    SetDay(Weekday),
    ShiftDay(i32),
    SetSearch(String),
    SetClassType(String),
    OpenEvent(RecordId),
    CloseEvent,
    SetStatus(RecordId, String),
}
