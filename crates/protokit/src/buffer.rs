//! Refillable, limit-tracked read window over a byte source

use std::io::{self, ErrorKind, Read};

use crate::errors::{Error, Result};

/// Smallest window a [`ReadBuffer`] is created with
///
/// Fixed-width reads need up to 8 contiguous bytes in the window.
pub const MIN_BUFFER_SIZE: usize = 16;

/// A fixed-capacity byte window over a [`Read`] source
///
/// Every consuming operation decrements the remaining limit by exactly the
/// number of bytes consumed. Nested length-delimited regions are bounded by
/// swapping the limit with [`ReadBuffer::set_limit`] instead of slicing the
/// window, so one buffer serves every nesting level.
#[derive(Debug)]
pub struct ReadBuffer<R> {
    input: R,
    limit: u64,
    input_ended: bool,
    buffer: Box<[u8]>,
    position: usize,
    end: usize,
}

impl<R: Read> ReadBuffer<R> {
    /// Create a buffer over `input` with room for `capacity` bytes
    pub fn new(input: R, capacity: usize) -> Self {
        Self {
            input,
            limit: u64::MAX,
            input_ended: false,
            buffer: vec![0; capacity.max(MIN_BUFFER_SIZE)].into_boxed_slice(),
            position: 0,
            end: 0,
        }
    }

    /// Install a new remaining-byte budget, returning the previous one
    pub fn set_limit(&mut self, limit: u64) -> u64 {
        core::mem::replace(&mut self.limit, limit)
    }

    /// Remaining-byte budget
    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Guarantee at least `size` bytes are in the window and charge them to the limit
    ///
    /// Fails with [`Error::LimitExceeded`] before any I/O if `size` exceeds the
    /// limit, and with [`Error::InputEnded`] if the source runs dry first.
    /// The bytes are then consumed with [`ReadBuffer::read_byte`].
    pub fn ensure_available(&mut self, size: usize) -> Result<()> {
        self.assert_limit(size as u64)?;
        debug_assert!(size <= self.buffer.len());

        if self.available() < size && self.fill()? < size {
            return Err(Error::InputEnded);
        }

        self.limit -= size as u64;
        Ok(())
    }

    /// Take the next byte of the window
    ///
    /// Callers must have reserved the byte with [`ReadBuffer::ensure_available`].
    #[inline]
    pub fn read_byte(&mut self) -> u8 {
        let byte = self.buffer[self.position];
        self.position += 1;
        byte
    }

    /// Take the next `N` bytes of the window as an array
    ///
    /// Callers must have reserved the bytes with [`ReadBuffer::ensure_available`].
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> [u8; N] {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buffer[self.position..self.position + N]);
        self.position += N;
        bytes
    }

    /// Read exactly `size` bytes, refilling the window as often as needed
    pub fn read(&mut self, size: usize) -> Result<Vec<u8>> {
        self.assert_limit(size as u64)?;

        let mut result = Vec::with_capacity(size.min(self.buffer.len() * 16));
        let mut remaining = size;
        let mut available = self.available();

        while remaining > available {
            result.extend_from_slice(&self.buffer[self.position..self.end]);
            self.position = self.end;
            remaining -= available;

            if self.input_ended {
                return Err(Error::InputEnded);
            }
            available = self.fill()?;
            if available == 0 {
                return Err(Error::InputEnded);
            }
        }

        result.extend_from_slice(&self.buffer[self.position..self.position + remaining]);
        self.position += remaining;
        self.limit -= size as u64;
        Ok(result)
    }

    /// Read `size` bytes as a UTF-8 string
    pub fn read_string(&mut self, size: usize) -> Result<String> {
        self.assert_limit(size as u64)?;

        if self.available() >= size {
            let value = core::str::from_utf8(&self.buffer[self.position..self.position + size])?;
            let value = value.to_owned();
            self.position += size;
            self.limit -= size as u64;
            return Ok(value);
        }

        Ok(String::from_utf8(self.read(size)?)?)
    }

    /// Discard `size` bytes
    pub fn skip(&mut self, size: u64) -> Result<()> {
        self.assert_limit(size)?;

        let available = self.available() as u64;
        if size <= available {
            self.position += size as usize;
            self.limit -= size;
            return Ok(());
        }

        let rest = size - available;
        let skipped = io::copy(&mut (&mut self.input).take(rest), &mut io::sink())?;
        self.position = 0;
        self.end = 0;
        if skipped < rest {
            self.input_ended = true;
            return Err(Error::InputEnded);
        }

        self.limit -= size;
        Ok(())
    }

    /// Whether another byte can be read within the current limit
    ///
    /// Returns `false` once the limit is spent or the source is exhausted.
    pub fn has_remaining(&mut self) -> Result<bool> {
        if self.limit == 0 {
            return Ok(false);
        }
        if self.available() > 0 {
            return Ok(true);
        }
        if self.input_ended {
            return Ok(false);
        }
        Ok(self.fill()? > 0)
    }

    /// Give back the underlying source
    pub fn into_inner(self) -> R {
        self.input
    }

    #[inline]
    fn available(&self) -> usize {
        self.end - self.position
    }

    #[inline]
    fn assert_limit(&self, size: u64) -> Result<()> {
        if size > self.limit {
            return Err(Error::LimitExceeded);
        }
        Ok(())
    }

    /// Shift unread bytes to the front and top the window up from the source
    fn fill(&mut self) -> Result<usize> {
        let remaining = self.available();
        self.buffer.copy_within(self.position..self.end, 0);
        self.position = 0;
        self.end = remaining;

        while !self.input_ended && self.end < self.buffer.len() {
            match self.input.read(&mut self.buffer[self.end..]) {
                Ok(0) => self.input_ended = true,
                Ok(read) => self.end += read,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(self.end)
    }
}
