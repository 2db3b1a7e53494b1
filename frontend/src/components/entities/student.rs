use common::model::{courses, Student, StudentField};
use yew::{html, Html};

use super::{detail_row, text_or_dash, thumbnail, Column, EntityView};

impl EntityView for Student {
    const HEADING: &'static str = "Students";
    const SEARCH_HINT: &'static str = "Search name, grade or course";
    const STATUS_FIELD: StudentField = StudentField::Status;
    const FILTERS_CLASS_TYPE: bool = true;

    fn columns() -> Vec<Column<StudentField>> {
        vec![
            Column::plain(""),
            Column::sortable("Name", StudentField::Name),
            Column::sortable("Grade", StudentField::Grade),
            Column::plain("Courses"),
            Column::sortable("Class type", StudentField::ClassType),
        ]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            thumbnail(self.image.as_deref(), &self.name),
            html! { <strong>{ self.name.clone() }</strong> },
            html! { { text_or_dash(Some(self.grade.as_str())) } },
            html! {
                <div class="chips">
                    { for self.courses.iter().map(|c| html! { <span class="chip">{ c.clone() }</span> }) }
                </div>
            },
            html! { { text_or_dash(self.class_type.as_deref()) } },
        ]
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn detail(&self) -> Html {
        let joined = courses::join(&self.courses);
        html! {
            <div class="record-detail">
                { thumbnail(self.image.as_deref(), &self.name) }
                <dl>
                    { detail_row("Name", Some(self.name.as_str())) }
                    { detail_row("Email", self.email.as_deref()) }
                    { detail_row("Grade", Some(self.grade.as_str())) }
                    { detail_row("Courses", Some(joined.as_str())) }
                    { detail_row("Class type", self.class_type.as_deref()) }
                    { detail_row("Parent / guardian", self.parent_name.as_deref()) }
                    { detail_row("Phone", self.phone.as_deref()) }
                    { detail_row("Status", Some(self.status.as_str())) }
                </dl>
            </div>
        }
    }
}
