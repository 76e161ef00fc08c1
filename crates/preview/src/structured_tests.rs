use super::*;

const SAMPLE_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Name</key>
    <string>File Browser</string>
    <key>Count</key>
    <integer>3</integer>
    <key>Tags</key>
    <array>
        <string>alpha</string>
        <true/>
        <real>1.5</real>
    </array>
    <key>Nested</key>
    <dict>
        <key>Empty</key>
        <array/>
    </dict>
</dict>
</plist>
"#;

#[test]
fn pretty_json_indents_objects() {
    let got = pretty_json(br#"{"a":1}"#).expect("valid document");
    assert_eq!(got, "{\n  \"a\": 1\n}");
}

#[test]
fn pretty_json_keeps_slashes_readable() {
    let got = pretty_json(br#"{"url":"https:\/\/example.com\/x"}"#).expect("valid document");
    assert!(got.contains(r#""url": "https://example.com/x""#), "got {got}");
}

#[test]
fn pretty_json_rejects_non_documents() {
    let cases: &[&[u8]] = &[b"{invalid", b"", b"42", br#""just a string""#, b"null", b"[1,"];

    for input in cases {
        assert_eq!(
            pretty_json(input),
            None,
            "input {:?} should not be a JSON document",
            String::from_utf8_lossy(input)
        );
    }
}

#[test]
fn pretty_json_accepts_arrays() {
    let got = pretty_json(b"[1,2]").expect("valid document");
    assert_eq!(got, "[\n  1,\n  2\n]");
}

#[test]
fn describe_plist_prints_openstep_form() {
    let got = describe_plist(SAMPLE_PLIST.as_bytes()).expect("valid plist");

    let expected = "{\n    Count = 3;\n    Name = \"File Browser\";\n    Nested = {\n        Empty = (\n        );\n    };\n    Tags = (\n        alpha,\n        1,\n        1.5\n    );\n}";
    assert_eq!(got, expected);
}

#[test]
fn describe_plist_rejects_garbage() {
    assert_eq!(
        describe_plist(b"<?xml version=\"1.0\"?><plist><dict><key>a</key>"),
        None
    );
}

#[test]
fn plist_strings_quote_when_needed() {
    let cases: &[(&str, &str)] = &[
        ("alpha", "alpha"),
        ("com.example.app", "com.example.app"),
        ("", "\"\""),
        ("two words", "\"two words\""),
        ("say \"hi\"", "\"say \\\"hi\\\"\""),
        ("a\\b", "\"a\\\\b\""),
        ("line\nbreak", "\"line\\nbreak\""),
    ];

    for (input, expected) in cases {
        let mut out = String::new();
        push_plist_string(&mut out, input);
        assert_eq!(out, *expected, "push_plist_string({input:?})");
    }
}
