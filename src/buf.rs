use {
    crate::error::Result,
    std::{
        cmp::min,
        io::{ErrorKind, Read, Write},
    },
    zeroize::Zeroize,
};

/// A fixed-capacity chunk buffer.
///
/// The capacity is chosen at run time (one record's worth of
/// bytes) and the buffer is reused for every chunk in a pass.
/// Contents are `data[..len]`.
#[derive(Clone, Debug)]
pub(crate) struct Buf {
    data: Vec<u8>,
    len: usize,
}

impl Buf {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
            len: 0,
        }
    }

    /// Reports whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reports whether the buffer is full and no more data can
    /// be read into it.
    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    /// Returns the number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Resets the buffer to empty.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Discards all but the first n bytes in the buffer.
    pub fn truncate(&mut self, n: usize) {
        self.len = min(self.len, n);
    }

    /// Returns the contents of the buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Returns the contents of the buffer as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }

    /// Splits the contents of the buffer at mid, returning
    /// [0, mid) and [mid, len).
    pub fn split_at_mut(&mut self, mid: usize) -> (&mut [u8], &mut [u8]) {
        self.data[..self.len].split_at_mut(mid)
    }

    /// Reads from `src` until the buffer is full or `src`
    /// reaches EOF, retrying interrupted reads.
    pub fn read_from<R: Read + ?Sized>(
        &mut self,
        src: &mut R,
    ) -> Result<usize> {
        let start = self.len;
        while !self.is_full() {
            match src.read(&mut self.data[self.len..]) {
                Ok(0) => break,
                Ok(m) => self.len += m,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(self.len - start)
    }

    /// Writes the entire contents of the buffer to `dst`.
    pub fn write_to<W: Write + ?Sized>(&self, dst: &mut W) -> Result<usize> {
        dst.write_all(self.as_slice())?;
        Ok(self.len)
    }
}

impl Drop for Buf {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}
