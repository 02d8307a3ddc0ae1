//! Markdown Rendering
//!
//! Renders the markdown fields of the portfolio document (profile `about`,
//! project `notes`) with pulldown-cmark, plus:
//! - Syntax highlighting of fenced code (syntect)
//! - External links open in a new tab

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

/// Dark theme to sit on the slate background
const THEME_NAME: &str = "base16-ocean.dark";

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(THEME_NAME)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// Render markdown to HTML
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }

                Event::Start(Tag::Link { link_type, dest_url, title, .. })
                    if is_external(link_type, &dest_url) =>
                {
                    let html = format!(
                        r#"<a href="{}" title="{}" target="_blank" rel="noreferrer">"#,
                        escape_html(&dest_url),
                        escape_html(&title)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                }

                Event::End(TagEnd::Link) => {
                    events.push(Event::Html(CowStr::from("</a>")));
                }

                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

/// Links leaving the site; fragment and relative links stay in the tab
fn is_external(link_type: LinkType, url: &str) -> bool {
    matches!(link_type, LinkType::Autolink)
        || url.starts_with("http://")
        || url.starts_with("https://")
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    get_theme()
        .and_then(|theme| highlighted_html_for_string(code, ss, syntax, theme).ok())
        .unwrap_or_else(|| format!("<pre><code>{}</code></pre>", escape_html(code)))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(render_markdown("Hello **world**"), "<p>Hello <strong>world</strong></p>\n");
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let html = render_markdown("[repo](https://github.com/me)");
        assert!(html.contains(r#"<a href="https://github.com/me" title="" target="_blank" rel="noreferrer">repo</a>"#));
    }

    #[test]
    fn test_hash_link_stays_in_tab() {
        let html = render_markdown("[projects](#/projects)");
        assert!(html.contains(r##"<a href="#/projects">projects</a>"##));
        assert!(!html.contains("_blank"));
    }

    #[test]
    fn test_fenced_code_is_highlighted() {
        let html = render_markdown("```yaml\nservices:\n  web: {}\n```\n");
        assert!(html.starts_with("<pre"));
        assert!(html.contains("services"));
        assert!(!html.contains("<code class=\"language-yaml\">"));
    }

    #[test]
    fn test_code_without_language_falls_back_to_plain_text() {
        let html = render_markdown("```\n<tag> & more\n```\n");
        assert!(html.contains("&lt;tag&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&"#), "&lt;a href=&quot;x&quot;&gt;&amp;");
    }
}
