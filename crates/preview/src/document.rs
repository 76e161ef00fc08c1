use crate::escape::escape_html;

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="initial-scale=1.0, user-scalable=no">
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, sans-serif;
            background-color: white;
            color: black;
        }

        pre {
            white-space: pre-wrap;
            word-wrap: break-word;
        }

        @media (prefers-color-scheme: dark) {
            body {
                background-color: #1e1e1e;
                color: #f5f5f5;
            }
        }
    </style>
</head>
<body>
    <pre>"#;

const DOCUMENT_TAIL: &str = r#"</pre>
</body>
</html>
"#;

/// Escape `text` and wrap it in a standalone preformatted HTML page that
/// follows the host's light/dark color scheme.
pub fn html_document(text: &str) -> String {
    let body = escape_html(text);
    let mut html = String::with_capacity(DOCUMENT_HEAD.len() + body.len() + DOCUMENT_TAIL.len());
    html.push_str(DOCUMENT_HEAD);
    html.push_str(&body);
    html.push_str(DOCUMENT_TAIL);
    html
}
