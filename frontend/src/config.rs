use common::config::ClientConfig;

const CONFIG_ELEMENT_ID: &str = "app-config";

/// Reads the `<script id="app-config" type="application/json">` block from the
/// host page. A missing block means defaults; an unreadable one is reported on
/// the console and also means defaults.
pub fn load() -> ClientConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => {
            ClientConfig::from_json(&raw).unwrap_or_else(|err| {
                gloo_console::warn!(format!("invalid #{CONFIG_ELEMENT_ID} block, using defaults: {err}"));
                ClientConfig::default()
            })
        }
        _ => ClientConfig::default(),
    }
}
