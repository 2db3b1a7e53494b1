use common::model::{Teacher, TeacherField};
use yew::{html, Html};

use super::{detail_row, text_or_dash, thumbnail, Column, EntityView};

impl EntityView for Teacher {
    const HEADING: &'static str = "Teachers";
    const SEARCH_HINT: &'static str = "Search name, email or username";
    const STATUS_FIELD: TeacherField = TeacherField::Status;

    fn columns() -> Vec<Column<TeacherField>> {
        vec![
            Column::plain(""),
            Column::sortable("Name", TeacherField::Name),
            Column::sortable("Email", TeacherField::Email),
            Column::sortable("Username", TeacherField::Username),
            Column::plain("Phone"),
        ]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            thumbnail(self.image.as_deref(), &self.name),
            html! { <strong>{ self.name.clone() }</strong> },
            html! { <a href={format!("mailto:{}", self.email)}>{ self.email.clone() }</a> },
            html! { { self.username.clone() } },
            html! { { text_or_dash(self.phone.as_deref()) } },
        ]
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn detail(&self) -> Html {
        html! {
            <div class="record-detail">
                { thumbnail(self.image.as_deref(), &self.name) }
                <dl>
                    { detail_row("Name", Some(self.name.as_str())) }
                    { detail_row("Email", Some(self.email.as_str())) }
                    { detail_row("Username", Some(self.username.as_str())) }
                    { detail_row("Phone", self.phone.as_deref()) }
                    { detail_row("Status", Some(self.status.as_str())) }
                </dl>
            </div>
        }
    }
}
