//! HTML helper functions

/// Elements that never take a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Closing these ends the visible word even when another tag follows at once
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption", "figure",
    "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "li", "nav", "ol", "p", "pre",
    "section", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Longest prefix of `html` with at most `max_chars` characters that ends on
/// a word boundary outside of any tag.
///
/// A boundary is a position followed by whitespace, or a `<` that directly
/// follows a block-level closing tag or a `<br>`/`<hr>`. Adjacent inline
/// elements (`<b>foo</b><i>bar</i>`) read as one word and are never split.
/// Trailing whitespace is dropped. Input that already fits is returned whole.
pub fn truncate_at_word(html: &str, max_chars: usize) -> &str {
    if html.chars().count() <= max_chars {
        return html;
    }

    let mut in_tag = false;
    let mut cut = 0;
    let mut tag_start = 0;
    // whether the tag ending right before the current char breaks words
    let mut after_break = false;

    // `count` is the number of chars in html[..i]
    for (count, (i, c)) in html.char_indices().enumerate() {
        if count > max_chars {
            break;
        }
        if !in_tag && (c.is_whitespace() || (c == '<' && after_break)) {
            cut = i;
        }
        after_break = false;
        match c {
            '<' => {
                in_tag = true;
                tag_start = i;
            }
            '>' if in_tag => {
                in_tag = false;
                after_break = breaks_words(&html[tag_start + 1..i]);
            }
            _ => {}
        }
    }

    html[..cut].trim_end()
}

/// `/p`, `/li`, `br`, `hr/` and the like
fn breaks_words(tag: &str) -> bool {
    match tag.strip_prefix('/') {
        Some(closing) => BLOCK_ELEMENTS.contains(&tag_name(closing).as_str()),
        None => matches!(tag_name(tag).as_str(), "br" | "hr"),
    }
}

/// Close any elements left open in `fragment`
pub fn balance_tags(fragment: &str) -> String {
    let mut open: Vec<String> = Vec::new();
    let mut rest = fragment;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('>') else {
            break;
        };
        let tag = &after[..end];
        rest = &after[end + 1..];

        // comments, doctypes, self-closing
        if tag.starts_with('!') || tag.starts_with('?') || tag.ends_with('/') {
            continue;
        }

        if let Some(closing) = tag.strip_prefix('/') {
            let name = tag_name(closing);
            if let Some(pos) = open.iter().rposition(|t| *t == name) {
                open.truncate(pos);
            }
        } else {
            let name = tag_name(tag);
            if !name.is_empty() && !VOID_ELEMENTS.contains(&name.as_str()) {
                open.push(name);
            }
        }
    }

    let mut out = String::with_capacity(fragment.len() + open.len() * 6);
    out.push_str(fragment);
    for name in open.iter().rev() {
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
    out
}

fn tag_name(tag: &str) -> String {
    tag.trim()
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}
