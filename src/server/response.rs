//! HTTP response types and wire framing.

/// Value of the `Server` header on every response.
pub const SERVER_NAME: &str = "Basic HTML Server";

/// HTTP status codes with their standard reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// The numeric status code.
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}

/// Represents an HTTP response.
///
/// Headers are written in insertion order. The framing reproduces the server's
/// established wire format: `\n` line endings, no `Content-Length`, and a body
/// followed by `"\n "`. Clients detect the end of the body by the connection closing.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The HTTP headers, in the order they are sent
    pub headers: Vec<(String, String)>,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code and the `Server` header.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: vec![("Server".to_string(), SERVER_NAME.to_string())],
            body: Vec::new(),
        }
    }

    /// Set the response body with bytes.
    pub fn with_body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a header, replacing the value of an existing one with the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(&name)) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Convert the response to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(128 + self.body.len());

        let status_line = format!("HTTP/1.1 {} {}\n", self.status.as_u16(), self.status.reason_phrase());
        bytes.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        bytes.push(b'\n');
        bytes.extend_from_slice(&self.body);
        bytes.extend_from_slice(b"\n ");

        bytes
    }
}

/// Frame a successful response carrying `payload` as `mime`.
pub fn build_ok(payload: &[u8], mime: &str) -> Vec<u8> {
    HttpResponse::new(StatusCode::Ok)
        .with_header("Cache-Control", "no-store")
        .with_content_type(mime)
        .with_body_bytes(payload)
        .to_bytes()
}

/// Frame the not-found response around the contents of the error page.
pub fn build_not_found(error_page: &[u8]) -> Vec<u8> {
    HttpResponse::new(StatusCode::NotFound)
        .with_content_type("text/html; charset=UTF-8")
        .with_body_bytes(error_page)
        .to_bytes()
}

/// Frame the response sent for a request line that cannot be parsed.
pub fn build_bad_request() -> Vec<u8> {
    HttpResponse::new(StatusCode::BadRequest)
        .with_content_type("text/plain")
        .with_body_bytes(&b"Bad Request"[..])
        .to_bytes()
}
