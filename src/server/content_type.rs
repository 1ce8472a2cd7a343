//! Content-type resolution from file extensions.

/// How the bytes of a resource are presented once read.
///
/// Both modes read the file end to end without transformation; text mode only
/// promises that the payload is meant to be character data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    Text,
    Binary,
}

/// Extension (without the dot, case-sensitive) to MIME type.
pub const CONTENT_TYPES: &[(&str, &str)] = &[
    ("txt", "text/plain"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("pdf", "application/pdf"),
    ("bmp", "image/bmp"),
    ("gif", "image/gif"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("ico", "image/vnd.microsoft.icon"),
];

/// MIME type to read mode, consulted once per load.
const READ_MODES: &[(&str, ReadMode)] = &[
    ("text/plain", ReadMode::Text),
    ("text/html", ReadMode::Text),
    ("text/css", ReadMode::Text),
    ("text/javascript", ReadMode::Text),
    ("application/json", ReadMode::Text),
    ("application/xml", ReadMode::Text),
    ("image/svg+xml", ReadMode::Text),
    ("application/pdf", ReadMode::Binary),
    ("image/bmp", ReadMode::Binary),
    ("image/gif", ReadMode::Binary),
    ("image/jpeg", ReadMode::Binary),
    ("image/png", ReadMode::Binary),
    ("image/tiff", ReadMode::Binary),
    ("image/vnd.microsoft.icon", ReadMode::Binary),
];

/// Resolve the MIME type of `path` from the text after its last `.`.
///
/// Returns the empty string when there is no dot or the extension is unknown.
/// Extensions are matched exactly as given, so `INDEX.HTML` is unknown.
pub fn resolve(path: &str) -> &'static str {
    let Some((_, extension)) = path.rsplit_once('.') else {
        return "";
    };

    CONTENT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or("")
}

/// The read mode for a MIME type, or `None` when the type is not one we serve.
pub fn read_mode(mime: &str) -> Option<ReadMode> {
    READ_MODES
        .iter()
        .find(|(candidate, _)| *candidate == mime)
        .map(|(_, mode)| *mode)
}
