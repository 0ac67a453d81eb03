/// Extension (lower-case, no dot) to content type.
const MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("html", "text/html"),
    ("css", "text/css"),
    ("txt", "text/plain"),
];

/// Returns the lower-cased extension of the last path segment, without the
/// dot. Dotfiles such as `.bashrc` have no extension.
pub fn extension(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = name.rsplit_once('.')?;

    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Looks up the content type for an extension. Unknown extensions have none.
///
/// ```
/// # use docserve::http::mime::content_type_for_extension;
/// assert_eq!(content_type_for_extension("css"), Some("text/css"));
/// assert_eq!(content_type_for_extension("md"), None);
/// ```
pub fn content_type_for_extension(ext: &str) -> Option<&'static str> {
    MIME_TYPES
        .iter()
        .find(|(e, _)| e.eq_ignore_ascii_case(ext))
        .map(|(_, ct)| *ct)
}

/// Content type for a path, by extension.
pub fn content_type_for_path(path: &str) -> Option<&'static str> {
    extension(path).and_then(|ext| content_type_for_extension(&ext))
}
