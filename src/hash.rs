use {
    crate::{
        buf::Buf,
        error::{Error, Result},
        key::HashKey,
    },
    blake2b_simd::{Params, State},
    std::io::Read,
};

/// An incremental keyed hash (BLAKE2b).
///
/// Used as the tamper-evident whole-stream check appended to an
/// encrypted stream as its trailer, independent of and in
/// addition to per-record tags. The digest length is chosen at
/// construction within [`StreamHash::MIN_SIZE`]..=[`StreamHash::MAX_SIZE`]
/// and must match between the hashing and the verifying party.
pub struct StreamHash {
    state: State,
    size: usize,
}

impl StreamHash {
    /// The minimum digest length in bytes.
    pub const MIN_SIZE: usize = 16;
    /// The recommended digest length in bytes.
    pub const SIZE: usize = 32;
    /// The maximum digest length in bytes.
    pub const MAX_SIZE: usize = 64;

    /// Creates a keyed hash state producing `size`-byte digests.
    ///
    /// Returns [`Error::InvalidHashSize`] unless `size` is
    /// within [`StreamHash::MIN_SIZE`]..=[`StreamHash::MAX_SIZE`].
    pub fn new(key: &HashKey, size: usize) -> Result<Self> {
        if size < Self::MIN_SIZE || size > Self::MAX_SIZE {
            return Err(Error::InvalidHashSize(size));
        }
        let state = Params::new()
            .hash_length(size)
            .key(key.as_bytes())
            .to_state();
        Ok(Self { state, size })
    }

    /// Returns the digest length in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Feeds `data` into the hash.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    /// Finalizes the hash and returns the digest.
    pub fn finalize(self) -> Vec<u8> {
        self.state.finalize().as_bytes().to_vec()
    }

    /// Finalizes the hash and compares the digest against
    /// `expected` in constant time.
    pub fn verify(self, expected: &[u8]) -> bool {
        self.state.finalize() == *expected
    }

    /// Consumes `source` blockwise and returns its digest.
    pub fn hash_reader<R: Read>(mut self, source: &mut R) -> Result<Vec<u8>> {
        let mut buf = Buf::with_capacity(crate::DEFAULT_BLOCK_SIZE);
        loop {
            buf.reset();
            if buf.read_from(source)? == 0 {
                break;
            }
            self.update(buf.as_slice());
        }
        Ok(self.finalize())
    }
}
