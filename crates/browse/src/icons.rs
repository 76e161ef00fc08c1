use filecat_fs::FileCategory;

/// Symbol name a host uses to draw the row icon for a category.
pub fn icon_token(category: FileCategory) -> &'static str {
    match category {
        FileCategory::Directory => "folder",
        FileCategory::Image => "photo",
        FileCategory::Pdf => "doc.richtext",
        FileCategory::Archive => "doc.zipper",
        FileCategory::StructuredText(_) | FileCategory::Generic => "doc",
    }
}
