//! Markdown rendering for promotional post bodies.
//!
//! Post bodies are written by staff and injected into the admin console as
//! HTML, so raw HTML is dropped and link or image targets are limited to
//! http(s), mailto and relative URLs. Anything else is rewritten to `#`.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Renders `source` to an HTML fragment safe to inject into the page.
pub fn to_safe_html(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES)
        .filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)))
        .map(neutralise_targets);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn neutralise_targets(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            log::warn!("dropped link target {dest_url:?}");
            Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed("#"), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            log::warn!("dropped image source {dest_url:?}");
            Event::Start(Tag::Image { link_type, dest_url: CowStr::Borrowed("#"), title, id })
        }
        other => other,
    }
}

/// A URL is relative unless a `:` comes before any `/`, `?` or `#`; only
/// absolute URLs need an allowed scheme.
fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    match url.find([':', '/', '?', '#']) {
        Some(at) if url[at..].starts_with(':') => {
            let scheme = url[..at].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_links_are_defused() {
        let out = to_safe_html("[Enroll now](javascript:alert(document.cookie))");
        assert!(!out.contains("javascript:"), "{out}");
        assert!(out.contains(r##"<a href="#">Enroll now</a>"##), "{out}");
    }

    #[test]
    fn scheme_check_ignores_case_and_entities() {
        for source in [
            "![banner](JaVaScRiPt:alert(1))",
            "[x](java&#9;script:alert(1))",
            "[x](data:text/html;base64,PHNjcmlwdD4=)",
            "[x]( vbscript:msgbox(1) )",
        ] {
            let out = to_safe_html(source);
            assert!(!out.contains("alert") && !out.contains("data:") && !out.contains("vbscript"), "{out}");
        }
    }

    #[test]
    fn autolinks_keep_their_text_but_not_the_target() {
        let out = to_safe_html("<javascript:alert(1)>");
        assert!(!out.contains(r#"href="javascript"#), "{out}");
    }

    #[test]
    fn ordinary_targets_survive() {
        let out = to_safe_html(
            "[site](https://tutor.ph/enroll) [post](/posts/1?ref=a:b) [mail](mailto:hi@tutor.ph) ![b](banner.png)",
        );
        assert!(out.contains(r#"href="https://tutor.ph/enroll""#), "{out}");
        assert!(out.contains(r#"href="/posts/1?ref=a:b""#), "{out}");
        assert!(out.contains(r#"href="mailto:hi@tutor.ph""#), "{out}");
        assert!(out.contains(r#"src="banner.png""#), "{out}");
    }

    #[test]
    fn raw_html_is_dropped() {
        let out = to_safe_html("Hello <b onclick=\"x()\">there</b>\n\n<script>alert(1)</script>\n\n**bold**");
        assert!(!out.contains("<script"), "{out}");
        assert!(!out.contains("onclick"), "{out}");
        assert!(out.contains("<strong>bold</strong>"), "{out}");
    }
}
