use {
    crate::error::{Error, Result},
    rand_core::{CryptoRng, RngCore},
    std::fmt,
    zeroize::Zeroize,
};

/// A secret key for the keyed trailer hash.
///
/// This is a distinct type from the AEAD key ([`aead::Key`]) so
/// the two roles cannot be mixed up. The key length is chosen by
/// the caller within [`HashKey::MIN_SIZE`]..=[`HashKey::MAX_SIZE`];
/// [`HashKey::SIZE`] is the recommended length. The key bytes are
/// zeroized on drop.
#[derive(Clone)]
pub struct HashKey {
    bytes: Vec<u8>,
}

impl HashKey {
    /// The minimum key length in bytes.
    pub const MIN_SIZE: usize = 16;
    /// The recommended key length in bytes.
    pub const SIZE: usize = 32;
    /// The maximum key length in bytes.
    pub const MAX_SIZE: usize = 64;

    /// Copies `bytes` into a new key.
    ///
    /// Returns [`Error::InvalidHashKeySize`] unless
    /// `bytes.len()` is within
    /// [`HashKey::MIN_SIZE`]..=[`HashKey::MAX_SIZE`].
    pub fn new(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::MIN_SIZE || bytes.len() > Self::MAX_SIZE {
            return Err(Error::InvalidHashKeySize(bytes.len()));
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Generates a key of the recommended length from `rng`.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = vec![0u8; Self::SIZE];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self { bytes })
    }

    /// Returns the key length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Reports whether the key is empty. It never is.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashKey").field("len", &self.len()).finish()
    }
}

impl Drop for HashKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
