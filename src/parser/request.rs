//! HTTP request parsing and representation.

use std::collections::HashMap;

use crate::parser::error::Error;

/// Represents an HTTP request.
///
/// Fields keep the text of the request line and header lines. No distinction is made between methods,
/// and header names and values are not normalised or trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: String,
    /// The request path, including any query string
    pub path: String,
    /// The protocol version token, e.g. `HTTP/1.1`
    pub version: String,
    /// The HTTP headers, last occurrence wins
    pub headers: HashMap<String, String>,
    /// Query parameters parsed from the path
    pub query_params: HashMap<String, String>,
}

impl HttpRequest {
    /// Create a new HTTP request.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method
    /// * `path` - The request path
    /// * `version` - The protocol version
    /// * `headers` - The HTTP headers
    pub fn new(method: String, path: String, version: String, headers: HashMap<String, String>) -> Self {
        // Parse query parameters from the path
        let query_params: HashMap<String, String> = path
            .split_once('?')
            .map(|(_, query)| query
                .split('&')
                .filter(|s| !s.is_empty())
                .map(|pair| {
                    if let Some((k, v)) = pair.split_once('=') {
                        (k.to_string(), v.to_string())
                    } else {
                        (pair.to_string(), String::new())
                    }
                })
                .collect())
            .unwrap_or_default();

        Self {
            method,
            path,
            version,
            headers,
            query_params,
        }
    }

    /// The path with any query string removed.
    pub fn target_path(&self) -> &str {
        match self.path.split_once('?') {
            Some((target, _)) => target,
            None => &self.path,
        }
    }

    /// Get a header value.
    ///
    /// Header names are matched case-insensitively; the stored value is returned untouched.
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }

    /// Get a query parameter value.
    pub fn get_query_param(&self, name: &str) -> Option<&String> {
        self.query_params.get(name)
    }
}

/// Parse an HTTP request from the bytes actually received on a connection.
///
/// The input is split into lines on `\n`. The first line must hold exactly three
/// whitespace-separated tokens: method, path and version. Each following line is split
/// once on `:`; lines without a colon are ignored. Header names and values are stored
/// without trimming, so `Host: example.com` yields the value `" example.com"`.
///
/// Two things are not kept raw: the `\r` of a CRLF line ending is removed before a
/// line is split, so it never ends up in a version token or header value, and scanning
/// stops at the first empty line, so body lines are never taken as headers.
///
/// # Arguments
///
/// * `input` - The received bytes, bounded to what the transport delivered
///
/// # Returns
///
/// The parsed HTTP request, or [`Error::MalformedRequest`] if the request line is unusable
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    let input_str = String::from_utf8_lossy(input);

    let mut lines = input_str
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    // split always yields at least one item, even for empty input
    let request_line = lines.next().unwrap_or_default();

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let [method, path, version] = parts.as_slice() else {
        return Err(Error::MalformedRequest(request_line.to_string()));
    };

    let mut headers = HashMap::new();
    for line in lines {
        // Empty line indicates the end of headers
        if line.is_empty() {
            break;
        }

        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.to_string(), value.to_string());
        }
    }

    Ok(HttpRequest::new(
        method.to_string(),
        path.to_string(),
        version.to_string(),
        headers,
    ))
}
