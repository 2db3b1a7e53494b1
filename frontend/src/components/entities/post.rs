use common::markdown::to_safe_html;
use common::model::{PostField, PromotionalPost};
use yew::{html, AttrValue, Html};

use super::{text_or_dash, thumbnail, Column, EntityView};

fn render_markdown(source: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(to_safe_html(source)))
}

fn excerpt(source: &str) -> String {
    let first_line = source.lines().find(|l| !l.trim().is_empty()).unwrap_or_default();
    let plain: String = first_line
        .trim_start_matches(['#', '>', '-', '*', ' '])
        .chars()
        .filter(|c| !matches!(c, '*' | '_' | '`'))
        .collect();
    match plain.char_indices().nth(80) {
        Some((cut, _)) => format!("{}…", &plain[..cut]),
        None => plain,
    }
}

impl EntityView for PromotionalPost {
    const HEADING: &'static str = "Promotional Posts";
    const SEARCH_HINT: &'static str = "Search title";
    const STATUS_FIELD: PostField = PostField::Status;

    fn columns() -> Vec<Column<PostField>> {
        vec![
            Column::plain(""),
            Column::sortable("Title", PostField::Title),
            Column::plain("Excerpt"),
            Column::sortable("Published", PostField::PublishedAt),
        ]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            thumbnail(self.image.as_deref(), &self.title),
            html! { <strong>{ self.title.clone() }</strong> },
            html! { <span class="muted">{ excerpt(&self.description) }</span> },
            html! { { text_or_dash(self.published_at.as_deref()) } },
        ]
    }

    fn display_name(&self) -> String {
        format!("\"{}\"", self.title)
    }

    fn detail(&self) -> Html {
        html! {
            <article class="post-detail">
                if let Some(url) = self.image.as_deref().filter(|u| !u.is_empty()) {
                    <img class="banner" src={url.to_string()} alt={self.title.clone()} />
                }
                <h3>{ self.title.clone() }</h3>
                <p class="muted">{ text_or_dash(self.published_at.as_deref()) }</p>
                <div class="markdown-preview">{ render_markdown(&self.description) }</div>
            </article>
        }
    }
}
