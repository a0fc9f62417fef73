use super::{
    error::Error,
    exceeds_line_limit,
    find_crlf,
    ParseStatus,
    CRLF,
};
use std::collections::HashMap;

// These are the characters other than letters and digits which may appear
// in a header name (the "tchar" rule of RFC 7230).
const TOKEN_SPECIAL_CHARACTERS: &[u8] = b"!#$%&'*+-.^_`|~";

fn is_token_character(c: u8) -> bool {
    c.is_ascii_alphanumeric() || TOKEN_SPECIAL_CHARACTERS.contains(&c)
}

/// The outcome of a successful call to [`Headers::parse`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ParseResults {
    /// `Complete` once the blank line ending the header block was consumed.
    pub status: ParseStatus,

    /// The number of bytes consumed: one header line with its CRLF, the
    /// blank line, or zero if no complete line was available.
    pub consumed: usize,
}

/// The header block of an HTTP request.
///
/// Names are case-insensitive and stored lower-cased.  A header which
/// appears more than once holds all its values in order, joined by `", "`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Headers {
    fields: HashMap<String, String>,
    line_limit: Option<usize>,
}

impl Headers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum length of a single header line, not counting its
    /// CRLF.  `None` means header lines may be any length.
    pub fn set_line_limit(
        &mut self,
        limit: Option<usize>,
    ) {
        self.line_limit = limit;
    }

    /// Add a header.  If a header with the same name (ignoring case) is
    /// already present, the new value is appended to the existing one.
    pub fn add<N, V>(
        &mut self,
        name: N,
        value: V,
    ) where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let name = name.as_ref().to_ascii_lowercase();
        let value = value.as_ref();
        self.fields
            .entry(name)
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    #[must_use]
    pub fn get<T>(
        &self,
        name: T,
    ) -> Option<&str>
    where
        T: AsRef<str>,
    {
        self.fields
            .get(&name.as_ref().to_ascii_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains<T>(
        &self,
        name: T,
    ) -> bool
    where
        T: AsRef<str>,
    {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the (lower-cased) names and values, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Parse at most one header line from the front of `raw_message`.
    ///
    /// A blank line ends the header block and is reported as
    /// [`ParseStatus::Complete`].  If no complete line is available yet,
    /// nothing is consumed and the caller should try again once more bytes
    /// have arrived.
    pub fn parse<T>(
        &mut self,
        raw_message: T,
    ) -> Result<ParseResults, Error>
    where
        T: AsRef<[u8]>,
    {
        let raw_message = raw_message.as_ref();
        match (find_crlf(raw_message), self.line_limit) {
            (Some(line_end), Some(limit)) if line_end > limit => {
                Err(Error::HeaderLineTooLong(raw_message[..limit].to_vec()))
            },
            (Some(0), _) => Ok(ParseResults {
                status: ParseStatus::Complete,
                consumed: CRLF.len(),
            }),
            (Some(line_end), _) => {
                let line = &raw_message[..line_end];
                let line = std::str::from_utf8(line)
                    .map_err(|_| Error::HeaderLineNotValidText(line.to_vec()))?;
                self.parse_header_line(line)?;
                Ok(ParseResults {
                    status: ParseStatus::Incomplete,
                    consumed: line_end + CRLF.len(),
                })
            },
            (None, Some(limit)) if exceeds_line_limit(raw_message, limit) => {
                Err(Error::HeaderLineTooLong(raw_message[..limit].to_vec()))
            },
            (None, _) => Ok(ParseResults {
                status: ParseStatus::Incomplete,
                consumed: 0,
            }),
        }
    }

    fn parse_header_line(
        &mut self,
        line: &str,
    ) -> Result<(), Error> {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| Error::MalformedHeaderLine(line.into()))?;
        if name.ends_with(|c: char| c.is_ascii_whitespace()) {
            return Err(Error::InvalidHeaderSpacing(line.into()));
        }
        let name = name.trim().to_ascii_lowercase();
        if name.is_empty() || !name.bytes().all(is_token_character) {
            return Err(Error::InvalidHeaderKey(name));
        }
        self.add(name, value.trim());
        Ok(())
    }
}
