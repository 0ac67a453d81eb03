/// HTTP status codes the server can send.
///
/// - `Ok` (200): File or listing served
/// - `PermanentRedirect` (308): Path found in the redirect table
/// - `Forbidden` (403): Path rejected by the traversal guard
/// - `NotFound` (404): Nothing at the resolved path
/// - `InternalServerError` (500): Read or listing failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 308 Permanent Redirect
    PermanentRedirect,
    /// 403 Forbidden
    Forbidden,
    /// 404 Page Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::PermanentRedirect.as_u16(), 308);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::PermanentRedirect => 308,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Maps a numeric code back to a variant. Codes outside the table have
    /// no reason phrase and yield `None`.
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Ok),
            308 => Some(StatusCode::PermanentRedirect),
            403 => Some(StatusCode::Forbidden),
            404 => Some(StatusCode::NotFound),
            500 => Some(StatusCode::InternalServerError),
            _ => None,
        }
    }

    /// Returns the reason phrase sent on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Page Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::PermanentRedirect => "Permanent Redirect",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Page Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

pub const DEFAULT_VERSION: &str = "HTTP/1.1";
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// An HTTP response under construction.
///
/// Status and headers may be changed any number of times. Handing the
/// response to a [`ResponseWriter`](crate::http::writer::ResponseWriter)
/// consumes it, so it can be sent at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Version token for the status line
    pub version: String,
    /// Headers in insertion order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            version: DEFAULT_VERSION.to_string(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn set_status(&mut self, status: StatusCode) -> &mut Self {
        self.status = status;
        self
    }

    /// Sets a header. An existing header with the same name (compared
    /// case-insensitively) keeps its position and gets the new value.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();

        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(slot) => slot.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) -> &mut Self {
        self.body = body.into();
        self
    }

    /// Fills in the headers every response must carry on the wire:
    /// `Content-Type` (defaulting to `text/html`) and `Content-Length`.
    pub fn finalize(mut self) -> Self {
        if self.header("Content-Type").is_none() {
            self.set_header("Content-Type", DEFAULT_CONTENT_TYPE);
        }
        if self.header("Content-Length").is_none() {
            let len = self.body.len().to_string();
            self.set_header("Content-Length", len);
        }
        self
    }

    /// 200 with the given body and optional content type.
    pub fn ok(body: impl Into<Vec<u8>>, content_type: Option<&str>) -> Self {
        let mut resp = Response::new(StatusCode::Ok);
        if let Some(ct) = content_type {
            resp.set_header("Content-Type", ct);
        }
        resp.set_body(body);
        resp
    }

    /// 308 pointing at `location`, empty body.
    pub fn redirect(location: &str) -> Self {
        let mut resp = Response::new(StatusCode::PermanentRedirect);
        resp.set_header("Location", location)
            .set_header("Content-Type", "text/html");
        resp
    }

    /// 403, plain text, empty body.
    pub fn forbidden() -> Self {
        let mut resp = Response::new(StatusCode::Forbidden);
        resp.set_header("Content-Type", "text/plain");
        resp
    }

    /// 404, plain text, body "Page Not Found".
    pub fn not_found() -> Self {
        let mut resp = Response::new(StatusCode::NotFound);
        resp.set_header("Content-Type", "text/plain")
            .set_body(b"Page Not Found".to_vec());
        resp
    }

    /// 500, plain text, empty body.
    pub fn internal_error() -> Self {
        let mut resp = Response::new(StatusCode::InternalServerError);
        resp.set_header("Content-Type", "text/plain");
        resp
    }
}
