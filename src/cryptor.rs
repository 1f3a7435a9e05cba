use {
    crate::{
        buf::Buf,
        error::{Error, Result},
        nonce::RunningNonce,
    },
    aead::{AeadCore, AeadInPlace, Key, KeyInit, KeySizeUser, Nonce, Tag},
    std::io::{Read, Write},
    typenum::Unsigned,
    zeroize::Zeroize,
};

/// Options for configuring a [`StreamCryptor`].
#[derive(Clone, Copy, Debug)]
pub struct StreamOpts<'a> {
    blocksize: usize,
    ad: &'a [u8],
}

impl Default for StreamOpts<'_> {
    fn default() -> Self {
        StreamOpts::new()
    }
}

impl<'a> StreamOpts<'a> {
    /// Create the default set of options.
    pub const fn new() -> Self {
        Self {
            blocksize: crate::DEFAULT_BLOCK_SIZE,
            ad: &[0u8; 0],
        }
    }

    /// Set the plaintext block size.
    ///
    /// Smaller blocks detect tampering at a finer granularity at
    /// the cost of one tag per block.
    ///
    /// By default, [`DEFAULT_BLOCK_SIZE`][crate::DEFAULT_BLOCK_SIZE]
    /// is used.
    pub fn with_blocksize(&mut self, blocksize: usize) -> &mut Self {
        self.blocksize = blocksize;
        self
    }

    /// Set the additional authenticated data bound into every
    /// record.
    ///
    /// Additional authenticated data is typically used to bind
    /// the ciphertext to a particular context.
    ///
    /// By default, no additional authenticated data is used.
    pub fn with_additional_data(&mut self, ad: &'a [u8]) -> &mut Self {
        self.ad = ad;
        self
    }

    /// Build the options.
    pub fn build(self) -> Self {
        self
    }
}

/// Encrypts and decrypts streams blockwise, without a trailer.
///
/// The plaintext is split into blocks of a fixed size and every
/// block becomes one record, `tag || ciphertext`, encrypted under
/// a nonce that is incremented per block. Tampering with or
/// swapping records fails decryption; truncating the stream at a
/// record boundary does not (records carry no count). Use
/// [`FileCryptor`][crate::FileCryptor] when truncation must be
/// detected.
///
/// A cryptor holds no per-call state, so one instance may serve
/// concurrent passes over independent streams. The caller must
/// supply a fresh base nonce per encrypted stream.
pub struct StreamCryptor<A>
where
    A: AeadCore + KeySizeUser,
{
    key: Key<A>,
    nonce: Nonce<A>,
    blocksize: usize,
    ad: Vec<u8>,
}

impl<A> StreamCryptor<A>
where
    A: AeadCore + KeySizeUser,
{
    const TAG_SIZE: usize = A::TagSize::USIZE;

    /// Returns the size in bytes of the ciphertext stream for an
    /// `n`-byte plaintext.
    pub fn size(&self, n: u64) -> u64 {
        let nrecords = n.div_ceil(self.blocksize as u64);
        n + nrecords * Self::TAG_SIZE as u64
    }
}

impl<A> StreamCryptor<A>
where
    A: AeadCore + KeyInit,
{
    /// Creates a `StreamCryptor` with the default options.
    pub fn new(key: &Key<A>, nonce: &Nonce<A>) -> Result<Self> {
        Self::new_with(key, nonce, StreamOpts::default())
    }

    /// Creates a `StreamCryptor` with the provided options.
    pub fn new_with(
        key: &Key<A>,
        nonce: &Nonce<A>,
        opts: StreamOpts<'_>,
    ) -> Result<Self> {
        if opts.blocksize == 0 {
            return Err(Error::InvalidBlockSize(0));
        }
        Ok(Self {
            key: key.clone(),
            nonce: nonce.clone(),
            blocksize: opts.blocksize,
            ad: opts.ad.to_vec(),
        })
    }
}

impl<A> StreamCryptor<A>
where
    A: AeadInPlace + KeyInit,
{
    /// Encrypts `source` into `sink` in a single forward pass.
    ///
    /// Identical plaintext, configuration, and base nonce produce
    /// byte-identical ciphertext. Any I/O failure aborts the pass;
    /// bytes already written to `sink` stay written.
    pub fn encrypt<R, W>(&self, source: &mut R, sink: &mut W) -> Result<()>
    where
        R: Read,
        W: Write,
    {
        let aead = A::new(&self.key);
        let mut nonce = RunningNonce::<A>::new(&self.nonce);
        let mut buf = Buf::with_capacity(self.blocksize);
        loop {
            buf.reset();
            if buf.read_from(source)? == 0 {
                break;
            }
            seal_record(&aead, nonce.as_nonce(), &self.ad, &mut buf, sink)?;
            if !buf.is_full() {
                // Partial block: the stream is exhausted and this
                // was the final record.
                break;
            }
            nonce.increment();
        }
        Ok(())
    }

    /// Decrypts `source` into `sink` in a single forward pass.
    ///
    /// A record that fails verification aborts with
    /// [`Error::Authentication`]; plaintext from records verified
    /// before the failure has already been written to `sink` and
    /// must be discarded by the caller.
    pub fn decrypt<R, W>(&self, source: &mut R, sink: &mut W) -> Result<()>
    where
        R: Read,
        W: Write,
    {
        let aead = A::new(&self.key);
        let mut nonce = RunningNonce::<A>::new(&self.nonce);
        let mut buf = Buf::with_capacity(Self::TAG_SIZE + self.blocksize);
        loop {
            buf.reset();
            if buf.read_from(source)? == 0 {
                break;
            }
            open_record(&aead, nonce.as_nonce(), &self.ad, &mut buf, sink)?;
            if !buf.is_full() {
                break;
            }
            nonce.increment();
        }
        Ok(())
    }
}

impl<A> Drop for StreamCryptor<A>
where
    A: AeadCore + KeySizeUser,
{
    fn drop(&mut self) {
        self.key.as_mut_slice().zeroize();
    }
}

/// Encrypts the record in `buf` in place and writes
/// `tag || ciphertext` to `sink`, returning the tag.
pub(crate) fn seal_record<A, W>(
    aead: &A,
    nonce: &Nonce<A>,
    ad: &[u8],
    buf: &mut Buf,
    sink: &mut W,
) -> Result<Tag<A>>
where
    A: AeadInPlace,
    W: Write,
{
    let tag = aead.encrypt_in_place_detached(nonce, ad, buf.as_mut_slice())?;
    sink.write_all(tag.as_slice())?;
    buf.write_to(sink)?;
    Ok(tag)
}

/// Verifies and decrypts the `tag || ciphertext` record in `buf`
/// in place and writes the recovered plaintext to `sink`.
pub(crate) fn open_record<A, W>(
    aead: &A,
    nonce: &Nonce<A>,
    ad: &[u8],
    buf: &mut Buf,
    sink: &mut W,
) -> Result<()>
where
    A: AeadInPlace,
    W: Write,
{
    if buf.len() < A::TagSize::USIZE {
        // Too short to carry a tag, so it clearly cannot be
        // authenticated.
        return Err(Error::Authentication);
    }
    let (tag, body) = buf.split_at_mut(A::TagSize::USIZE);
    aead.decrypt_in_place_detached(nonce, ad, body, Tag::<A>::from_slice(tag))
        .map_err(|_| Error::Authentication)?;
    sink.write_all(body)?;
    Ok(())
}
