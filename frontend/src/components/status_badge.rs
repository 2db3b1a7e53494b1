use common::taxonomy::StatusOption;
use yew::{classes, html, Html};

/// Coloured pill for a status value: icon plus label, tone from the
/// taxonomy entry (or the grey fallback for unknown values).
pub fn status_badge(option: StatusOption<'_>) -> Html {
    html! {
        <span class={classes!("status-badge", option.bg_class(), option.text_class())}>
            <i class="material-icons">{ option.icon }</i>
            <span>{ option.label }</span>
        </span>
    }
}
