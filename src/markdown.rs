//! Markdown Rendering
//!
//! Assistant replies arrive as Markdown (numbered steps, bold crop names).
//! Raw HTML is rendered as text and script links are dropped before the
//! result is injected with `inner_html`.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn is_unsafe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("javascript:") || lower.starts_with("data:") || lower.starts_with("vbscript:")
}

/// Render Markdown to HTML safe for `inner_html`
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        // Raw tags are shown literally; push_html escapes text
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if is_unsafe_url(&dest_url) => {
            Event::Start(Tag::Link { link_type, dest_url: CowStr::from("#"), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) if is_unsafe_url(&dest_url) => {
            Event::Start(Tag::Image { link_type, dest_url: CowStr::from(""), title, id })
        }
        other => other,
    });

    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Sentence enders, including the Devanagari danda
const TERMINAL_PUNCTUATION: [char; 4] = ['.', '?', '!', '।'];

/// Close a block so the synthesizer pauses after it
fn end_block(out: &mut String) {
    out.truncate(out.trim_end().len());
    if out.is_empty() {
        return;
    }
    if !out.ends_with(TERMINAL_PUNCTUATION) {
        out.push('.');
    }
    out.push(' ');
}

/// Text content only, for speech synthesis
pub fn plain_text(text: &str) -> String {
    let mut out = String::new();
    for event in Parser::new_ext(text, get_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item) | Event::End(TagEnd::Heading(_)) => {
                end_block(&mut out);
            }
            _ => {}
        }
    }
    let collapsed = out.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches(['.', ' ']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        let html = render_markdown("**Wheat** sowing:\n\n1. Prepare soil\n2. Irrigate");
        assert!(html.contains("<strong>Wheat</strong>"));
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li>Irrigate</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("Use <script>alert(1)</script> neem oil");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_less_than_in_code() {
        let html = render_markdown("Use `if temp < 10` and");
        assert!(html.contains("<code>if temp &lt; 10</code>"));
        assert!(!html.contains("&amp;lt;"));

        let html = render_markdown("```\nif moisture < 30 {\n    irrigate();\n}\n```");
        assert!(html.contains("if moisture &lt; 30 {"));
        assert!(!html.contains("&amp;lt;"));
    }

    #[test]
    fn test_less_than_in_text() {
        let html = render_markdown("Keep pH < 7.5 for potato");
        assert!(html.contains("pH &lt; 7.5"));
    }

    #[test]
    fn test_plain_text_for_speech() {
        let speech = plain_text("## Wheat\n\n**Sow** in *November*.\n\n- Irrigate\n- Weed");
        assert_eq!(speech, "Wheat. Sow in November. Irrigate. Weed");
    }

    #[test]
    fn test_plain_text_keeps_question_marks() {
        let speech = plain_text("## When to sow wheat?\n\nSow in November!\n\nगेहूं बोएं।\n\nIrrigate");
        assert_eq!(speech, "When to sow wheat? Sow in November! गेहूं बोएं। Irrigate");
    }

    #[test]
    fn test_script_links_dropped() {
        let html = render_markdown("[apply](javascript:alert(1)) or [portal](https://pmkisan.gov.in)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r#"href="https://pmkisan.gov.in""#));
    }
}
