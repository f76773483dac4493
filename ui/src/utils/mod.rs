use jiff::Timestamp;
use pulldown_cmark::{Options, Parser, html};

/// Returns true if the application is running in development mode.
/// Checks if BACKEND_URL points at a local server.
pub fn is_dev_mode() -> bool {
    option_env!("BACKEND_URL")
        .map(|url| url.contains("localhost") || url.contains("127.0.0.1"))
        .unwrap_or(false)
}

/// Converts Markdown written in the admin editor to the HTML stored on the
/// server. HTML already present in the source passes through unchanged, so
/// re-saving a post that was stored as HTML keeps it intact.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION;

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// "Mar 4, 2025"
pub fn format_date(timestamp: &Timestamp) -> String {
    timestamp.strftime("%b %-d, %Y").to_string()
}

/// The text of an HTML fragment with tags dropped and whitespace collapsed,
/// cut to `max_chars`.
pub fn plain_text_excerpt(html: &str, max_chars: usize) -> String {
    let mut text = String::with_capacity(html.len().min(max_chars * 2));
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    let text = words.join(" ");

    if text.chars().count() <= max_chars {
        return text;
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    if let Some(last_space) = cut.rfind(' ') {
        cut.truncate(last_space);
    }
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_becomes_html() {
        let html = render_markdown("# Title\n\nSome *emphasis*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn stored_html_survives_a_resave() {
        let stored = "<div class=\"lead\">\n<p>Hello</p>\n</div>\n";
        let html = render_markdown(stored);
        assert!(html.contains("<div class=\"lead\">"));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn excerpt_drops_markup() {
        let html = "<h1>Title</h1>\n<p>Some <em>rich</em> text.</p>";
        assert_eq!(plain_text_excerpt(html, 100), "Title Some rich text.");
    }

    #[test]
    fn long_excerpt_is_cut_at_a_word() {
        let excerpt = plain_text_excerpt("<p>one two three four</p>", 10);
        assert_eq!(excerpt, "one two…");
    }

    #[test]
    fn dates_are_short_and_readable() {
        let ts: Timestamp = "2025-03-04T10:00:00Z".parse().unwrap();
        assert_eq!(format_date(&ts), "Mar 4, 2025");
    }
}
