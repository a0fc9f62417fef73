use super::log::debug;
use std::io::Read;

/// Holds bytes read from a source which the parser has not consumed yet.
///
/// The buffer doubles in capacity whenever it is full and more bytes are
/// wanted; consumed bytes are discarded from the front, sliding the
/// remainder down.
#[derive(Debug)]
pub struct ScratchBuffer {
    data: Vec<u8>,
    filled: usize,
}

impl ScratchBuffer {
    /// Append a copy of `bytes` after the unconsumed bytes already held,
    /// growing as needed.
    pub fn append<T>(
        &mut self,
        bytes: T,
    ) where
        T: AsRef<[u8]>,
    {
        let bytes = bytes.as_ref();
        while self.data.len() - self.filled < bytes.len() {
            self.grow();
        }
        self.data[self.filled..self.filled + bytes.len()].copy_from_slice(bytes);
        self.filled += bytes.len();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Discard the first `consumed` bytes held, keeping the rest in order.
    pub fn consume(
        &mut self,
        consumed: usize,
    ) {
        let consumed = consumed.min(self.filled);
        self.data.copy_within(consumed..self.filled, 0);
        self.filled -= consumed;
    }

    /// Double the capacity if the buffer is full.  Returns whether or not
    /// it grew.
    pub fn ensure_capacity(&mut self) -> bool {
        if self.is_full() {
            self.grow();
            true
        } else {
            false
        }
    }

    /// Perform a single read from `reader` into the free space after the
    /// unconsumed bytes, first growing the buffer if it is full.
    ///
    /// Returns the number of bytes read, where zero means the end of the
    /// input was reached.
    pub fn fill_from<R>(
        &mut self,
        reader: &mut R,
    ) -> std::io::Result<usize>
    where
        R: Read + ?Sized,
    {
        self.ensure_capacity();
        let read = reader.read(&mut self.data[self.filled..])?;
        self.filled += read;
        Ok(read)
    }

    /// The bytes held which have not been consumed yet.
    #[must_use]
    pub fn filled(&self) -> &[u8] {
        &self.data[..self.filled]
    }

    fn grow(&mut self) {
        let capacity = self.data.len() * 2;
        debug!("growing scratch buffer from {} to {} bytes", self.data.len(), capacity);
        self.data.resize(capacity, 0);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled == self.data.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Make a buffer which starts out able to hold `capacity` bytes.
    /// A capacity of zero is treated as one so that doubling makes progress.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity.max(1)],
            filled: 0,
        }
    }
}
