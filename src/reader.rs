use super::{
    buffer::ScratchBuffer,
    error::Error,
    log::{
        debug,
        warning,
    },
    request::Request,
};
use std::io::{
    ErrorKind,
    Read,
};

const DEFAULT_INITIAL_BUFFER_SIZE: usize = 8;

/// What to do when the source runs out of data before the request head is
/// completely parsed.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum EndOfInput {
    /// Return the request as far as it got; check
    /// [`Request::is_complete`] to tell whether the head was all there.
    #[default]
    Partial,

    /// Fail with [`Error::UnexpectedEndOfInput`].
    Reject,
}

/// Settings for [`request_from_reader_with`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReaderConfig {
    /// The starting capacity of the scratch buffer, which doubles each time
    /// it fills up before the current line is complete.
    pub initial_buffer_size: usize,

    pub end_of_input: EndOfInput,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            initial_buffer_size: DEFAULT_INITIAL_BUFFER_SIZE,
            end_of_input: EndOfInput::default(),
        }
    }
}

// Hand the parser everything buffered, one line at a time, until it needs
// more bytes or the head is complete.
fn parse_buffered(
    request: &mut Request,
    buffer: &mut ScratchBuffer,
) -> Result<(), Error> {
    while !request.is_complete() {
        let consumed = request.parse_step(buffer.filled()).map_err(|error| {
            warning!("unable to parse request: {}", error);
            error
        })?;
        if consumed == 0 {
            break;
        }
        buffer.consume(consumed);
    }
    Ok(())
}

/// Read and parse a request head from `reader` using the default settings.
pub fn request_from_reader<R>(reader: R) -> Result<Request, Error>
where
    R: Read,
{
    request_from_reader_with(reader, &ReaderConfig::default(), Request::new())
}

/// Read from `reader` until `request` holds a complete head, or the input
/// ends.
///
/// `request` is normally fresh from [`Request::new`], with whatever limits
/// the caller wants set on it.  Bytes which follow the head in the last read
/// are not kept.
pub fn request_from_reader_with<R>(
    mut reader: R,
    config: &ReaderConfig,
    mut request: Request,
) -> Result<Request, Error>
where
    R: Read,
{
    let mut buffer = ScratchBuffer::with_capacity(config.initial_buffer_size);
    while !request.is_complete() {
        let read = match buffer.fill_from(&mut reader) {
            Ok(read) => read,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) => {
                warning!("unable to read request: {}", error);
                return Err(Error::SourceRead(error));
            },
        };
        if read == 0 {
            debug!(
                "end of input with {} byte(s) unparsed in state {:?}",
                buffer.len(),
                request.state()
            );
            return match config.end_of_input {
                EndOfInput::Partial => Ok(request),
                EndOfInput::Reject => Err(Error::UnexpectedEndOfInput),
            };
        }
        parse_buffered(&mut request, &mut buffer)?;
    }
    Ok(request)
}
