//! Block and state representation helpers.
//!
//! The 16-bit block is viewed as a 2x2 matrix of nibbles stored column-major:
//!
//! ```text
//! | s[0] s[2] |
//! | s[1] s[3] |
//! ```
//!
//! Bits 12..16 land in `s[0]`, bits 8..12 in `s[2]`, bits 4..8 in `s[1]` and
//! bits 0..4 in `s[3]`. Positions 1 and 2 are crossed relative to the natural
//! nibble order and must stay that way for published vectors to match.

/// S-AES block of 16 bits.
pub type Block = u16;

/// Cipher state: four nibbles, column-major.
pub type State = [u8; 4];

pub(crate) const NIBBLE_MASK: u8 = 0x0f;

/// Splits a block into its state matrix.
#[inline]
pub fn to_state(block: Block) -> State {
    [
        ((block >> 12) as u8) & NIBBLE_MASK,
        ((block >> 4) as u8) & NIBBLE_MASK,
        ((block >> 8) as u8) & NIBBLE_MASK,
        (block as u8) & NIBBLE_MASK,
    ]
}

/// Packs a state matrix back into a block.
#[inline]
pub fn to_block(state: &State) -> Block {
    (u16::from(state[0] & NIBBLE_MASK) << 12)
        | (u16::from(state[2] & NIBBLE_MASK) << 8)
        | (u16::from(state[1] & NIBBLE_MASK) << 4)
        | u16::from(state[3] & NIBBLE_MASK)
}

/// XORs two states, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut State, rhs: &State) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
