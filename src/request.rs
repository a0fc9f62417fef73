use super::{
    error::Error,
    find_crlf,
    headers::Headers,
    log::debug,
    request_line::{
        parse_request_line,
        RequestLine,
    },
    ParseStatus,
    CRLF,
};

const DEFAULT_LINE_LIMIT: usize = 8000;
const DEFAULT_MAX_MESSAGE_SIZE: usize = 1_000_000;

/// Where a [`Request`] is in parsing its head.  Parsing only ever moves
/// forward through these states.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ParserState {
    AwaitingRequestLine,
    ParsingHeaders,
    Done,
}

/// An HTTP request head, filled in incrementally by [`Request::parse_step`]
/// or [`Request::parse`].
#[derive(Debug)]
pub struct Request {
    body: Vec<u8>,
    headers: Headers,
    pub max_message_size: Option<usize>,
    request_line: Option<RequestLine>,
    pub request_line_limit: Option<usize>,
    state: ParserState,
    total_bytes: usize,
}

impl Request {
    /// This is always empty; request bodies are not parsed.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    // Fail if consuming another `bytes` bytes would make the head too large.
    fn check_bytes(
        &self,
        bytes: usize,
    ) -> Result<(), Error> {
        match self.max_message_size {
            Some(max_message_size) if self.total_bytes + bytes > max_message_size => {
                Err(Error::MessageTooLong)
            },
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == ParserState::Done
    }

    #[must_use]
    pub fn new() -> Self {
        let mut request = Self {
            body: Vec::new(),
            headers: Headers::new(),
            max_message_size: Some(DEFAULT_MAX_MESSAGE_SIZE),
            request_line: None,
            request_line_limit: Some(DEFAULT_LINE_LIMIT),
            state: ParserState::AwaitingRequestLine,
            total_bytes: 0,
        };
        request.headers.set_line_limit(Some(DEFAULT_LINE_LIMIT));
        request
    }

    /// Parse as much of the request head as `raw_message` allows.
    ///
    /// Returns whether the head is now complete, along with the number of
    /// bytes consumed from the front of `raw_message`.  Unconsumed bytes
    /// should be passed again, with more appended, on the next call.
    pub fn parse<T>(
        &mut self,
        raw_message: T,
    ) -> Result<(ParseStatus, usize), Error>
    where
        T: AsRef<[u8]>,
    {
        let raw_message = raw_message.as_ref();
        let mut total_consumed = 0;
        loop {
            let consumed = self.parse_step(&raw_message[total_consumed..])?;
            total_consumed += consumed;
            if self.is_complete() {
                return Ok((ParseStatus::Complete, total_consumed));
            }
            if consumed == 0 {
                return Ok((ParseStatus::Incomplete, total_consumed));
            }
        }
    }

    fn parse_message_for_headers(
        &mut self,
        raw_message: &[u8],
    ) -> Result<usize, Error> {
        if let Some(line_end) = find_crlf(raw_message) {
            self.check_bytes(line_end + CRLF.len())?;
        }
        let parse_results = self.headers.parse(raw_message)?;
        self.total_bytes += parse_results.consumed;
        if parse_results.status == ParseStatus::Complete {
            debug!("request head complete with {} header(s)", self.headers.len());
            self.state = ParserState::Done;
        }
        Ok(parse_results.consumed)
    }

    fn parse_message_for_request_line(
        &mut self,
        raw_message: &[u8],
    ) -> Result<usize, Error> {
        match parse_request_line(raw_message, self.request_line_limit)? {
            Some((request_line, consumed)) => {
                self.check_bytes(consumed)?;
                self.total_bytes += consumed;
                debug!(
                    "request line: {} {} HTTP/{}",
                    request_line.method(),
                    request_line.target(),
                    request_line.http_version()
                );
                self.request_line = Some(request_line);
                self.state = ParserState::ParsingHeaders;
                Ok(consumed)
            },
            None => Ok(0),
        }
    }

    /// Advance the parser by at most one line of `raw_message`: the request
    /// line, one header line, or the blank line ending the head.
    ///
    /// Returns the number of bytes consumed, which is zero if `raw_message`
    /// does not yet hold a complete line.  Once the head is complete, every
    /// further call fails with [`Error::AlreadyComplete`].
    pub fn parse_step<T>(
        &mut self,
        raw_message: T,
    ) -> Result<usize, Error>
    where
        T: AsRef<[u8]>,
    {
        let raw_message = raw_message.as_ref();
        let consumed = match self.state {
            ParserState::AwaitingRequestLine => {
                self.parse_message_for_request_line(raw_message)?
            },
            ParserState::ParsingHeaders => {
                self.parse_message_for_headers(raw_message)?
            },
            ParserState::Done => return Err(Error::AlreadyComplete),
        };

        // Without a CRLF, everything buffered belongs to the current line.
        if consumed == 0 {
            self.check_bytes(raw_message.len())?;
        }
        Ok(consumed)
    }

    /// Set the maximum length of a single header line, not counting its
    /// CRLF.  `None` means header lines may be any length.
    pub fn set_header_line_limit(
        &mut self,
        limit: Option<usize>,
    ) {
        self.headers.set_line_limit(limit);
    }

    /// The request line, once it has been parsed.
    #[must_use]
    pub fn request_line(&self) -> Option<&RequestLine> {
        self.request_line.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> ParserState {
        self.state
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}
