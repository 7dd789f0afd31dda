//! Nibble substitution tables.

use crate::block::NIBBLE_MASK;

/// Forward S-box, used by encryption and key expansion.
pub const SBOX: [u8; 16] = [
    0x9, 0x4, 0xa, 0xb, 0xd, 0x1, 0x8, 0x5, 0x6, 0x2, 0x0, 0x3, 0xc, 0xe, 0xf, 0x7,
];

/// Inverse S-box, used by decryption.
pub const INV_SBOX: [u8; 16] = [
    0xa, 0x5, 0x9, 0xb, 0x1, 0x7, 0x8, 0xf, 0x6, 0x0, 0x2, 0x3, 0xc, 0x4, 0xd, 0xe,
];

/// Substitutes a nibble through the forward S-box.
#[inline]
pub fn sbox(nibble: u8) -> u8 {
    SBOX[usize::from(nibble & NIBBLE_MASK)]
}

/// Substitutes a nibble through the inverse S-box.
#[inline]
pub fn inv_sbox(nibble: u8) -> u8 {
    INV_SBOX[usize::from(nibble & NIBBLE_MASK)]
}
