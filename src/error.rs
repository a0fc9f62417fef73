/// This is the enumeration of all the different kinds of errors which this
/// crate generates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parse step was attempted on a request whose head was already
    /// completely parsed.
    #[error("request head already completely parsed")]
    AlreadyComplete,

    /// The attached header line has whitespace between the header name and
    /// the colon which follows it.
    #[error("whitespace between header name and colon")]
    InvalidHeaderSpacing(String),

    /// The attached header name contains a character which is not allowed in
    /// a token, or is empty.
    #[error("invalid header name")]
    InvalidHeaderKey(String),

    /// The attached method contains a character other than an uppercase
    /// ASCII letter.
    #[error("invalid method in request line")]
    InvalidMethod(String),

    /// The attached protocol version does not begin with `HTTP/`.
    #[error("invalid protocol version in request line")]
    InvalidVersion(String),

    /// The attached bytes are the beginning of a header line, whose length
    /// exceeds the header line limit.
    #[error("header line too long")]
    HeaderLineTooLong(Vec<u8>),

    /// The attached bytes did not parse as valid text for a header line.
    #[error("header line is not valid text")]
    HeaderLineNotValidText(Vec<u8>),

    /// The attached header line does not have a colon separating the header
    /// name from its value.
    #[error("header line is missing colon")]
    MalformedHeaderLine(String),

    /// The attached request line does not consist of exactly three
    /// whitespace-separated parts.
    #[error("request line does not have exactly three parts")]
    MalformedRequestLine(String),

    /// The request head is too large to fit within the configured size
    /// limit.
    #[error("message exceeds maximum size limit")]
    MessageTooLong,

    /// The attached bytes did not parse as valid text for the HTTP request
    /// line.
    #[error("request line is not valid text")]
    RequestLineNotValidText(Vec<u8>),

    /// The attached bytes are the beginning of the request line, whose length
    /// exceeds the request line limit.
    #[error("request line too long")]
    RequestLineTooLong(Vec<u8>),

    /// Reading from the source of the request failed.
    #[error("unable to read request")]
    SourceRead(#[source] std::io::Error),

    /// The source of the request ran out of data before the request head was
    /// completely parsed.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// The attached protocol version is not `1.0` or `1.1`.
    #[error("unsupported protocol version")]
    UnsupportedVersion(String),
}
