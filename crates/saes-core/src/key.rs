//! Key types for S-AES.

use crate::block::{to_block, Block, State};
use crate::error::{Error, Result};

/// S-AES 16-bit key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SaesKey(pub u16);

impl SaesKey {
    /// Builds a key from any integer, rejecting values wider than 16 bits.
    pub fn from_wide(value: u64) -> Result<Self> {
        u16::try_from(value)
            .map(Self)
            .map_err(|_| Error::InvalidKeyWidth { value })
    }

    /// Builds a key from two big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

impl From<u16> for SaesKey {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl TryFrom<u64> for SaesKey {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Self::from_wide(value)
    }
}

/// Expanded round keys: pre-round, round 1 and round 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoundKeys(pub [State; 3]);

impl RoundKeys {
    /// Key mixed in before the first round.
    #[inline]
    pub fn pre_round(&self) -> &State {
        &self.0[0]
    }

    /// Key mixed in at the end of round 1.
    #[inline]
    pub fn round1(&self) -> &State {
        &self.0[1]
    }

    /// Key mixed in at the end of round 2.
    #[inline]
    pub fn round2(&self) -> &State {
        &self.0[2]
    }

    /// Round keys packed back into 16-bit words.
    pub fn to_blocks(&self) -> [Block; 3] {
        self.0.map(|state| to_block(&state))
    }
}
