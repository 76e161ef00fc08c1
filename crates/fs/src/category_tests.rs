use super::*;

#[test]
fn classify_maps_known_extensions_case_insensitively() {
    let cases: &[(&str, FileCategory)] = &[
        ("gif", FileCategory::Image),
        ("GIF", FileCategory::Image),
        ("jpg", FileCategory::Image),
        ("JPG", FileCategory::Image),
        ("Png", FileCategory::Image),
        ("pdf", FileCategory::Pdf),
        ("PDF", FileCategory::Pdf),
        ("zip", FileCategory::Archive),
        ("json", FileCategory::StructuredText(StructuredKind::Json)),
        ("JSON", FileCategory::StructuredText(StructuredKind::Json)),
        ("plist", FileCategory::StructuredText(StructuredKind::Plist)),
        ("pList", FileCategory::StructuredText(StructuredKind::Plist)),
    ];

    for (ext, expected) in cases {
        let got = classify(Some(ext));
        assert_eq!(
            got, *expected,
            "classify({:?}) should be {:?}, got {:?}",
            ext, expected, got
        );
    }
}

#[test]
fn classify_falls_back_to_generic() {
    for ext in [None, Some(""), Some("txt"), Some("jpeg"), Some("gift"), Some("tar.gz")] {
        assert_eq!(
            classify(ext),
            FileCategory::Generic,
            "classify({ext:?}) should be Generic"
        );
    }
}

#[test]
fn classify_never_yields_directory() {
    for ext in ["directory", "dir", "folder", ""] {
        assert_ne!(classify(Some(ext)), FileCategory::Directory);
    }
}

#[test]
fn structured_text_helpers() {
    assert!(FileCategory::StructuredText(StructuredKind::Json).is_structured_text());
    assert!(FileCategory::StructuredText(StructuredKind::Plist).is_structured_text());
    assert!(!FileCategory::Image.is_structured_text());
    assert!(!FileCategory::Generic.is_structured_text());
}

#[test]
fn labels_are_stable() {
    let cases: &[(FileCategory, &str)] = &[
        (FileCategory::Directory, "directory"),
        (FileCategory::Image, "image"),
        (FileCategory::Pdf, "pdf"),
        (FileCategory::Archive, "archive"),
        (FileCategory::StructuredText(StructuredKind::Json), "json"),
        (FileCategory::StructuredText(StructuredKind::Plist), "plist"),
        (FileCategory::Generic, "file"),
    ];

    for (category, label) in cases {
        assert_eq!(category.label(), *label);
        assert_eq!(category.to_string(), *label);
    }
}
