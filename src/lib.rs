#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod buffer;
mod error;
mod headers;
mod log;
mod reader;
mod request;
mod request_line;

pub use crate::buffer::ScratchBuffer;
pub use crate::error::Error;
pub use crate::headers::{
    Headers,
    ParseResults,
};
pub use crate::reader::{
    request_from_reader,
    request_from_reader_with,
    EndOfInput,
    ReaderConfig,
};
pub use crate::request::{
    ParserState,
    Request,
};
pub use crate::request_line::RequestLine;

// This is the character sequence corresponding to a carriage return (CR)
// followed by a line feed (LF), which officially delimits each
// line of an HTTP request.
const CRLF: &str = "\r\n";

/// Tells whether or not a parse call finished the whole request head.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ParseStatus {
    Complete,
    Incomplete,
}

// Bare line feeds are not line terminators here, so only an adjacent
// CR LF pair counts.
fn find_crlf<T>(message: T) -> Option<usize>
where
    T: AsRef<[u8]>,
{
    message
        .as_ref()
        .windows(CRLF.len())
        .position(|window| window == CRLF.as_bytes())
}

// Tells whether bytes holding no CRLF yet are already too long to be a line
// of at most `limit` bytes.  A trailing CR may be the first half of the
// terminator, so it is not counted against the limit.
fn exceeds_line_limit(
    unterminated: &[u8],
    limit: usize,
) -> bool {
    match unterminated.len() {
        len if len > limit + 1 => true,
        len if len == limit + 1 => unterminated.last() != Some(&b'\r'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn find_crlf_in_middle() {
        assert_eq!(Some(3), find_crlf("abc\r\ndef"));
    }

    #[test]
    fn find_crlf_at_start() {
        assert_eq!(Some(0), find_crlf("\r\n"));
    }

    #[test]
    fn find_crlf_ignores_bare_line_feed() {
        assert_eq!(None, find_crlf("abc\ndef\r"));
        assert_eq!(Some(8), find_crlf("abc\ndef\r\r\n"));
    }

    #[test]
    fn line_limit_allows_trailing_carriage_return() {
        assert!(!exceeds_line_limit(b"abcd", 4));
        assert!(!exceeds_line_limit(b"abcd\r", 4));
        assert!(exceeds_line_limit(b"abcde", 4));
        assert!(exceeds_line_limit(b"abcd\r\r", 4));
    }

    #[test]
    fn find_crlf_empty_input() {
        assert_eq!(None, find_crlf(""));
        assert_eq!(None, find_crlf("\r"));
    }

}
