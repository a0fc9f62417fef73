use super::{
    error::Error,
    exceeds_line_limit,
    find_crlf,
    CRLF,
};

const PROTOCOL_PREFIX: &str = "HTTP/";

/// The first line of an HTTP request: the method, the request target, and
/// the protocol version.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RequestLine {
    method: String,
    target: String,
    http_version: String,
}

impl RequestLine {
    /// The request method, such as `GET`.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request target exactly as it appeared in the request line.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The protocol version without its `HTTP/` prefix; either `1.0` or
    /// `1.1`.
    #[must_use]
    pub fn http_version(&self) -> &str {
        &self.http_version
    }
}

fn parse_method(method: &str) -> Result<String, Error> {
    if method.bytes().all(|c| c.is_ascii_uppercase()) {
        Ok(method.to_string())
    } else {
        Err(Error::InvalidMethod(method.into()))
    }
}

fn parse_version(protocol: &str) -> Result<String, Error> {
    let version = protocol
        .strip_prefix(PROTOCOL_PREFIX)
        .ok_or_else(|| Error::InvalidVersion(protocol.into()))?;
    match version {
        "1.0" | "1.1" => Ok(version.to_string()),
        _ => Err(Error::UnsupportedVersion(version.into())),
    }
}

fn parse_fields(request_line: &str) -> Result<RequestLine, Error> {
    let fields = request_line.split_whitespace().collect::<Vec<_>>();
    match fields.as_slice() {
        [method, target, protocol] => Ok(RequestLine {
            method: parse_method(method)?,
            target: (*target).to_string(),
            http_version: parse_version(protocol)?,
        }),
        _ => Err(Error::MalformedRequestLine(request_line.into())),
    }
}

/// Look for a complete request line at the front of `raw_message`.
///
/// Returns `Ok(None)` if no CRLF has arrived yet, meaning the caller must
/// supply more bytes.  Otherwise returns the request line along with the
/// number of bytes it spans, terminating CRLF included.
pub(crate) fn parse_request_line(
    raw_message: &[u8],
    limit: Option<usize>,
) -> Result<Option<(RequestLine, usize)>, Error> {
    match (find_crlf(raw_message), limit) {
        (Some(request_line_end), Some(limit)) if request_line_end > limit => {
            Err(Error::RequestLineTooLong(raw_message[..limit].to_vec()))
        },
        (Some(0), _) => Err(Error::MalformedRequestLine(String::new())),
        (Some(request_line_end), _) => {
            let request_line = &raw_message[..request_line_end];
            let request_line = std::str::from_utf8(request_line).map_err(|_| {
                Error::RequestLineNotValidText(request_line.to_vec())
            })?;
            let request_line = parse_fields(request_line)?;
            Ok(Some((request_line, request_line_end + CRLF.len())))
        },
        (None, Some(limit)) if exceeds_line_limit(raw_message, limit) => {
            Err(Error::RequestLineTooLong(raw_message[..limit].to_vec()))
        },
        (None, _) => Ok(None),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_valid_request_line() {
        let raw = "GET /coffee HTTP/1.1\r\nHost: localhost:42069\r\n";
        let (request_line, consumed) =
            parse_request_line(raw.as_bytes(), None).unwrap().unwrap();
        assert_eq!("GET", request_line.method());
        assert_eq!("/coffee", request_line.target());
        assert_eq!("1.1", request_line.http_version());
        assert_eq!(22, consumed);
    }

    #[test]
    fn parse_http_1_0() {
        let (request_line, _) =
            parse_request_line(b"POST / HTTP/1.0\r\n", None).unwrap().unwrap();
        assert_eq!("POST", request_line.method());
        assert_eq!("1.0", request_line.http_version());
    }

    #[test]
    fn parse_extra_whitespace_between_parts() {
        let raw = "GET   /coffee \t HTTP/1.1\r\n";
        let (request_line, consumed) =
            parse_request_line(raw.as_bytes(), None).unwrap().unwrap();
        assert_eq!("GET", request_line.method());
        assert_eq!("/coffee", request_line.target());
        assert_eq!(raw.len(), consumed);
    }

    #[test]
    fn parse_vertical_tab_and_unicode_space_separate_parts() {
        let raw = "GET\x0b/coffee\u{a0}HTTP/1.1\r\n";
        let (request_line, consumed) =
            parse_request_line(raw.as_bytes(), None).unwrap().unwrap();
        assert_eq!("GET", request_line.method());
        assert_eq!("/coffee", request_line.target());
        assert_eq!("1.1", request_line.http_version());
        assert_eq!(raw.len(), consumed);
    }

    #[test]
    fn parse_incomplete_request_line() {
        assert!(matches!(
            parse_request_line(b"GET /coffee HTTP/1.1\r", None),
            Ok(None)
        ));
        assert!(matches!(parse_request_line(b"", None), Ok(None)));
    }

    #[test]
    fn parse_bare_line_feed_is_not_terminator() {
        assert!(matches!(
            parse_request_line(b"GET /coffee HTTP/1.1\n", None),
            Ok(None)
        ));
    }

    #[test]
    fn parse_empty_request_line() {
        assert!(matches!(
            parse_request_line(b"\r\nGET / HTTP/1.1\r\n", None),
            Err(Error::MalformedRequestLine(line)) if line.is_empty()
        ));
    }

    #[test]
    fn parse_too_few_parts() {
        assert!(matches!(
            parse_request_line(b"/coffee HTTP/1.1\r\n", None),
            Err(Error::MalformedRequestLine(line)) if line == "/coffee HTTP/1.1"
        ));
    }

    #[test]
    fn parse_too_many_parts() {
        assert!(matches!(
            parse_request_line(b"GET /coffee extra HTTP/1.1\r\n", None),
            Err(Error::MalformedRequestLine(_))
        ));
    }

    #[test]
    fn parse_lowercase_method() {
        assert!(matches!(
            parse_request_line(b"get /x HTTP/1.1\r\n", None),
            Err(Error::InvalidMethod(method)) if method == "get"
        ));
    }

    #[test]
    fn parse_method_with_digit() {
        assert!(matches!(
            parse_request_line(b"G3T /x HTTP/1.1\r\n", None),
            Err(Error::InvalidMethod(_))
        ));
    }

    #[test]
    fn parse_unsupported_version() {
        assert!(matches!(
            parse_request_line(b"GET /x HTTP/2.0\r\n", None),
            Err(Error::UnsupportedVersion(version)) if version == "2.0"
        ));
    }

    #[test]
    fn parse_missing_protocol_prefix() {
        assert!(matches!(
            parse_request_line(b"GET /x HTTPS/1.1\r\n", None),
            Err(Error::InvalidVersion(protocol)) if protocol == "HTTPS/1.1"
        ));
        assert!(matches!(
            parse_request_line(b"GET /x 1.1\r\n", None),
            Err(Error::InvalidVersion(_))
        ));
    }

    #[test]
    fn parse_request_line_not_text() {
        assert!(matches!(
            parse_request_line(b"GET /\xff HTTP/1.1\r\n", None),
            Err(Error::RequestLineNotValidText(_))
        ));
    }

    #[test]
    fn parse_request_line_too_long() {
        let raw = String::from("GET /") + &"X".repeat(100) + " HTTP/1.1\r\n";
        assert!(matches!(
            parse_request_line(raw.as_bytes(), Some(50)),
            Err(Error::RequestLineTooLong(line)) if line == raw[..50].as_bytes()
        ));
    }

    #[test]
    fn parse_unterminated_request_line_too_long() {
        let raw = "X".repeat(51);
        assert!(matches!(
            parse_request_line(raw.as_bytes(), Some(50)),
            Err(Error::RequestLineTooLong(_))
        ));
        assert!(matches!(
            parse_request_line(&raw.as_bytes()[..50], Some(50)),
            Ok(None)
        ));
    }

    #[test]
    fn parse_request_line_at_limit_split_before_line_feed() {
        let raw = "GET / HTTP/1.1\r\n";
        assert!(matches!(
            parse_request_line(&raw.as_bytes()[..15], Some(14)),
            Ok(None)
        ));
        assert!(matches!(
            parse_request_line(raw.as_bytes(), Some(14)),
            Ok(Some((_, 16)))
        ));
    }

}
