use {
    crate::error::Result,
    aead::{AeadCore, Nonce},
    rand_core::{CryptoRng, RngCore},
};

/// The per-pass nonce schedule.
///
/// A `RunningNonce` starts as a copy of the stream's base nonce
/// and is incremented once after every full-size record, binding
/// each record to its position. The final, possibly partial,
/// record does not increment it. Both directions of a pass replay
/// the identical schedule.
pub struct RunningNonce<A: AeadCore> {
    nonce: Nonce<A>,
}

impl<A: AeadCore> RunningNonce<A> {
    /// Starts the schedule over from `base`.
    pub fn new(base: &Nonce<A>) -> Self {
        Self {
            nonce: base.clone(),
        }
    }

    /// Advances the nonce in place.
    ///
    /// The nonce is treated as a little-endian integer spanning
    /// the whole buffer and incremented by one, wrapping around
    /// at the maximum value.
    pub fn increment(&mut self) {
        for b in self.nonce.as_mut_slice() {
            *b = b.wrapping_add(1);
            if *b != 0 {
                break;
            }
        }
    }

    /// Returns the current nonce.
    pub fn as_nonce(&self) -> &Nonce<A> {
        &self.nonce
    }
}

/// Fills a fresh base nonce for `A` from `rng`.
///
/// Every encrypted stream needs its own base nonce under a given
/// key; reusing one is a caller error this crate cannot detect.
pub fn random_nonce<A, R>(rng: &mut R) -> Result<Nonce<A>>
where
    A: AeadCore,
    R: RngCore + CryptoRng,
{
    let mut nonce = Nonce::<A>::default();
    rng.try_fill_bytes(nonce.as_mut_slice())?;
    Ok(nonce)
}
