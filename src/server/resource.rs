//! Loading static resources from the document root.

use std::path::{Path, PathBuf};

use log::debug;

use crate::server::content_type::{self, ReadMode};

/// Directory every request path is resolved under.
pub const DOCUMENT_ROOT: &str = "htdocs";

/// A loaded resource: the file bytes and the MIME type they are served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// The file contents, read end to end
    pub body: Vec<u8>,
    /// The MIME type resolved from the extension
    pub mime: &'static str,
    /// How the payload is meant to be presented
    pub mode: ReadMode,
}

impl Resource {
    /// The payload as text, for text-mode resources holding valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        match self.mode {
            ReadMode::Text => std::str::from_utf8(&self.body).ok(),
            ReadMode::Binary => None,
        }
    }
}

/// Reads request paths from a document root.
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    document_root: PathBuf,
}

impl Default for ResourceLoader {
    fn default() -> Self {
        Self::new(DOCUMENT_ROOT)
    }
}

impl ResourceLoader {
    /// Create a loader rooted at `document_root`.
    pub fn new(document_root: impl Into<PathBuf>) -> Self {
        Self {
            document_root: document_root.into(),
        }
    }

    /// The directory this loader reads from.
    pub fn document_root(&self) -> &Path {
        &self.document_root
    }

    /// The filesystem path for a request path, joined segment by segment onto the root.
    ///
    /// Returns `None` unless the path starts with `/`, and for any path holding a `..`
    /// segment, a backslash or a NUL byte. Empty and `.` segments are skipped.
    pub fn file_path(&self, request_path: &str) -> Option<PathBuf> {
        let relative = request_path.strip_prefix('/')?;
        if relative.contains(['\\', '\0']) {
            return None;
        }

        let mut path = self.document_root.clone();
        for segment in relative.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return None,
                segment => path.push(segment),
            }
        }

        path.starts_with(&self.document_root).then_some(path)
    }

    /// Load the resource for `request_path`.
    ///
    /// Any failure collapses to `None`: unknown extension, rejected path, missing or
    /// unreadable file. The cause is only logged.
    pub async fn load(&self, request_path: &str) -> Option<Resource> {
        let mime = content_type::resolve(request_path);
        let Some(mode) = content_type::read_mode(mime) else {
            debug!("No content type for {request_path:?}, not reading");
            return None;
        };

        let Some(path) = self.file_path(request_path) else {
            debug!("Rejected path outside the document root: {request_path:?}");
            return None;
        };

        match tokio::fs::read(&path).await {
            Ok(body) => {
                debug!("Loaded {len} bytes from {path} as {mode:?}", len = body.len(), path = path.display());
                Some(Resource { body, mime, mode })
            }
            Err(e) => {
                debug!("Cannot read {path}: {e}", path = path.display());
                None
            }
        }
    }
}
