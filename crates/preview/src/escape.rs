/// Escape text for embedding in HTML element content or attribute values.
///
/// Single pass over the input, so existing entities in the content
/// (`&amp;` etc.) are escaped again rather than interpreted.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);

    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
