use crate::http::request::Request;

/// Largest request line the connection buffers before parsing anyway.
pub const MAX_REQUEST_LINE: usize = 8 * 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No line terminator yet; more bytes are needed.
    Incomplete,
    /// Nothing was received.
    Empty,
}

/// Parses the request line at the start of `buf`.
///
/// Returns the request and the number of bytes consumed, including the line
/// terminator. Everything after the first line (headers, body) is left
/// untouched.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let line_end = find_line_end(buf).ok_or(ParseError::Incomplete)?;
    let request = parse_request_line(&buf[..line_end]);

    Ok((request, line_end + 1))
}

/// Parses whatever was buffered when the peer closed (or the size cap was
/// hit) before a line terminator arrived.
pub fn parse_partial_request(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    match find_line_end(buf) {
        Some(end) => Ok(parse_request_line(&buf[..end])),
        None => Ok(parse_request_line(buf)),
    }
}

fn parse_request_line(line: &[u8]) -> Request {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    Request::from_line(&String::from_utf8_lossy(line))
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n')
}
