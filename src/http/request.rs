/// HTTP request methods.
///
/// The server answers every method the same way it answers GET; the method
/// is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token found in method position
    Other(String),
}

impl Method {
    /// Parses an HTTP method token. Matching is case-sensitive; unknown
    /// tokens are kept verbatim in [`Method::Other`].
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(s) => s,
        }
    }
}

/// A request as read off the wire: the first line only.
///
/// `path` is `None` when the request line had fewer than two tokens. It is
/// an opaque string until the dispatcher resolves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path (e.g., "/index.html")
    pub path: Option<String>,
    /// HTTP version token, if one was sent
    pub version: Option<String>,
}

impl Request {
    /// Builds a request from a request line, splitting on whitespace.
    /// Tokens past the third are ignored.
    pub fn from_line(line: &str) -> Self {
        let mut parts = line.split_whitespace();

        let method = Method::parse(parts.next().unwrap_or_default());
        let path = parts.next().map(str::to_string);
        let version = parts.next().map(str::to_string);

        Self {
            method,
            path,
            version,
        }
    }

    /// Convenience constructor for a well-formed GET.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: Some(path.into()),
            version: Some("HTTP/1.1".to_string()),
        }
    }

    /// Path for log output; malformed requests show as `-`.
    pub fn path_display(&self) -> &str {
        self.path.as_deref().unwrap_or("-")
    }
}
