use common::model::{ClassField, ClassSession};
use yew::{html, Html};

use super::{detail_row, text_or_dash, Column, EntityView};

fn time_range(class: &ClassSession) -> String {
    let trim = |t: &str| t.get(..5).unwrap_or(t).to_string();
    match (class.start_time.is_empty(), class.end_time.is_empty()) {
        (true, _) => "-".to_string(),
        (false, true) => trim(&class.start_time),
        (false, false) => format!("{} - {}", trim(&class.start_time), trim(&class.end_time)),
    }
}

impl EntityView for ClassSession {
    const HEADING: &'static str = "Classes";
    const SEARCH_HINT: &'static str = "Search student name";
    const STATUS_FIELD: ClassField = ClassField::Status;
    const FILTERS_CLASS_TYPE: bool = true;

    fn columns() -> Vec<Column<ClassField>> {
        vec![
            Column::sortable("Student", ClassField::StudentName),
            Column::sortable("Teacher", ClassField::TeacherName),
            Column::sortable("Type", ClassField::ClassType),
            Column::sortable("Date", ClassField::Date),
            Column::sortable("Time", ClassField::StartTime),
        ]
    }

    fn cells(&self) -> Vec<Html> {
        let day = self.weekday().map(|d| d.short()).unwrap_or_default();
        vec![
            html! { <strong>{ self.student_name.clone() }</strong> },
            html! { { text_or_dash(self.teacher_name.as_deref()) } },
            html! { { text_or_dash(Some(self.class_type.as_str())) } },
            html! { <span>{ format!("{} {}", day, self.date).trim().to_string() }</span> },
            html! { { time_range(self) } },
        ]
    }

    fn display_name(&self) -> String {
        format!("{}'s class on {}", self.student_name, self.date)
    }

    fn detail(&self) -> Html {
        let day = self.weekday().map(|d| d.name());
        let time = time_range(self);
        html! {
            <div class="record-detail">
                <dl>
                    { detail_row("Student", Some(self.student_name.as_str())) }
                    { detail_row("Teacher", self.teacher_name.as_deref()) }
                    { detail_row("Class type", Some(self.class_type.as_str())) }
                    { detail_row("Date", Some(self.date.as_str())) }
                    { detail_row("Day", day) }
                    { detail_row("Time", Some(time.as_str())) }
                    { detail_row("Status", Some(self.status.as_str())) }
                    { detail_row("Notes", self.notes.as_deref()) }
                </dl>
            </div>
        }
    }
}
