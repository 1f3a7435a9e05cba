use {
    crate::{
        buf::Buf,
        cryptor::{open_record, seal_record},
        error::{Error, Result},
        hash::StreamHash,
        key::HashKey,
        nonce::RunningNonce,
    },
    aead::{AeadCore, AeadInPlace, Key, KeyInit, KeySizeUser, Nonce},
    std::io::{Read, Seek, SeekFrom, Write},
    typenum::Unsigned,
    zeroize::Zeroize,
};

/// Options for configuring a [`FileCryptor`].
#[derive(Clone, Copy, Debug)]
pub struct FileOpts<'a> {
    blocksize: usize,
    hashsize: usize,
    ad: &'a [u8],
}

impl Default for FileOpts<'_> {
    fn default() -> Self {
        FileOpts::new()
    }
}

impl<'a> FileOpts<'a> {
    /// Create the default set of options.
    pub const fn new() -> Self {
        Self {
            blocksize: crate::DEFAULT_BLOCK_SIZE,
            hashsize: StreamHash::SIZE,
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

    /// Set the trailer digest size.
    ///
    /// Encrypting and decrypting parties must use the identical
    /// digest size; the trailer can only be located relative to
    /// the end of the stream.
    ///
    /// By default, [`StreamHash::SIZE`] is used.
    pub fn with_hashsize(&mut self, hashsize: usize) -> &mut Self {
        self.hashsize = hashsize;
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

/// Encrypts and decrypts streams blockwise with a keyed-hash
/// trailer.
///
/// The record layer is the same as
/// [`StreamCryptor`][crate::StreamCryptor]'s: per-block records
/// of `tag || ciphertext` under an incrementing nonce. On top of
/// it, a keyed hash is computed over every record byte written
/// and appended to the stream as a fixed-size trailer, so
/// truncation at a record boundary, which per-record
/// authentication cannot see, fails verification too.
///
/// The wire format carries no length field: the trailer is found
/// by seeking to `end - hashsize`. Decryption therefore requires
/// a source that implements [`Seek`]; encryption is a single
/// forward pass.
pub struct FileCryptor<A>
where
    A: AeadCore + KeySizeUser,
{
    key: Key<A>,
    nonce: Nonce<A>,
    blocksize: usize,
    hashkey: HashKey,
    hashsize: usize,
    ad: Vec<u8>,
}

impl<A> FileCryptor<A>
where
    A: AeadCore + KeySizeUser,
{
    const TAG_SIZE: usize = A::TagSize::USIZE;

    /// Returns the size in bytes of the ciphertext stream for an
    /// `n`-byte plaintext.
    ///
    /// An empty plaintext produces a trailer-only stream; a
    /// plaintext that is an exact multiple of the block size
    /// produces no zero-length terminal record.
    pub fn size(&self, n: u64) -> u64 {
        let nrecords = n.div_ceil(self.blocksize as u64);
        n + nrecords * Self::TAG_SIZE as u64 + self.hashsize as u64
    }
}

impl<A> FileCryptor<A>
where
    A: AeadCore + KeyInit,
{
    /// Creates a `FileCryptor` with the default options.
    pub fn new(
        key: &Key<A>,
        nonce: &Nonce<A>,
        hashkey: HashKey,
    ) -> Result<Self> {
        Self::new_with(key, nonce, hashkey, FileOpts::default())
    }

    /// Creates a `FileCryptor` with the provided options.
    ///
    /// The hash key's length was validated when the [`HashKey`]
    /// was built; the block and digest sizes are validated here.
    pub fn new_with(
        key: &Key<A>,
        nonce: &Nonce<A>,
        hashkey: HashKey,
        opts: FileOpts<'_>,
    ) -> Result<Self> {
        if opts.blocksize == 0 {
            return Err(Error::InvalidBlockSize(0));
        }
        if opts.hashsize < StreamHash::MIN_SIZE
            || opts.hashsize > StreamHash::MAX_SIZE
        {
            return Err(Error::InvalidHashSize(opts.hashsize));
        }
        Ok(Self {
            key: key.clone(),
            nonce: nonce.clone(),
            blocksize: opts.blocksize,
            hashkey,
            hashsize: opts.hashsize,
            ad: opts.ad.to_vec(),
        })
    }
}

impl<A> FileCryptor<A>
where
    A: AeadInPlace + KeyInit,
{
    /// Encrypts `source` into `sink` in a single forward pass and
    /// appends the keyed digest of all record bytes as the
    /// trailer.
    ///
    /// Identical plaintext, configuration, and base nonce produce
    /// byte-identical ciphertext. An empty `source` still
    /// produces a trailer. Any I/O failure aborts the pass; bytes
    /// already written to `sink` stay written.
    pub fn encrypt<R, W>(&self, source: &mut R, sink: &mut W) -> Result<()>
    where
        R: Read,
        W: Write,
    {
        let aead = A::new(&self.key);
        let mut hash = StreamHash::new(&self.hashkey, self.hashsize)?;
        let mut nonce = RunningNonce::<A>::new(&self.nonce);
        let mut buf = Buf::with_capacity(self.blocksize);
        loop {
            buf.reset();
            if buf.read_from(source)? == 0 {
                break;
            }
            let tag =
                seal_record(&aead, nonce.as_nonce(), &self.ad, &mut buf, sink)?;
            hash.update(tag.as_slice());
            hash.update(buf.as_slice());
            if !buf.is_full() {
                // Partial block: the stream is exhausted and this
                // was the final record.
                break;
            }
            nonce.increment();
        }
        sink.write_all(&hash.finalize())?;
        Ok(())
    }

    /// Decrypts `source` into `sink`, verifying every record and
    /// the trailer.
    ///
    /// The trailer is read first by seeking to `end - hashsize`;
    /// the source is then rewound and decrypted in one forward
    /// pass while the digest is recomputed over the record bytes.
    /// Streams shorter than one trailer fail with
    /// [`Error::StreamTooShort`], a bad record with
    /// [`Error::Authentication`], and a digest mismatch, detected
    /// only at the end of the pass, with [`Error::Integrity`].
    ///
    /// There is no atomicity: plaintext recovered before a
    /// failure has already been written to `sink`, and the output
    /// of a failed call must be discarded.
    pub fn decrypt<R, W>(&self, source: &mut R, sink: &mut W) -> Result<()>
    where
        R: Read + Seek,
        W: Write,
    {
        // Fetch the trailer from the end before streaming.
        let end = source.seek(SeekFrom::End(0))?;
        if end < self.hashsize as u64 {
            return Err(Error::StreamTooShort(end));
        }
        let trailer_pos = end - self.hashsize as u64;
        source.seek(SeekFrom::Start(trailer_pos))?;
        let mut trailer = Buf::with_capacity(self.hashsize);
        if trailer.read_from(source)? < self.hashsize {
            return Err(Error::TruncatedTrailer(trailer.len()));
        }
        source.seek(SeekFrom::Start(0))?;

        let aead = A::new(&self.key);
        let mut hash = StreamHash::new(&self.hashkey, self.hashsize)?;
        let mut nonce = RunningNonce::<A>::new(&self.nonce);
        let mut buf = Buf::with_capacity(Self::TAG_SIZE + self.blocksize);
        let mut offset = 0u64;
        loop {
            buf.reset();
            let n = buf.read_from(source)?;
            if n == 0 {
                break;
            }
            offset += n as u64;

            // A read crossing trailer_pos picked up trailer
            // bytes; they belong to the digest, not to any
            // record. The excess never exceeds n because earlier
            // iterations stop at or before trailer_pos.
            let trailer_reached = offset > trailer_pos;
            if trailer_reached {
                buf.truncate(n - (offset - trailer_pos) as usize);
                if buf.is_empty() {
                    // The read was trailer material only: the
                    // records ended on the previous chunk.
                    break;
                }
            }
            hash.update(buf.as_slice());
            open_record(&aead, nonce.as_nonce(), &self.ad, &mut buf, sink)?;
            if trailer_reached || !buf.is_full() {
                break;
            }
            nonce.increment();
        }

        if !hash.verify(trailer.as_slice()) {
            return Err(Error::Integrity);
        }
        Ok(())
    }
}

impl<A> Drop for FileCryptor<A>
where
    A: AeadCore + KeySizeUser,
{
    fn drop(&mut self) {
        self.key.as_mut_slice().zeroize();
    }
}
