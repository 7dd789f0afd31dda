//! Arithmetic in GF(2^4) modulo x^4 + x + 1.

use crate::block::NIBBLE_MASK;

/// Irreducible polynomial x^4 + x + 1.
const POLY: u8 = 0b1_0011;

/// Multiplies two nibbles in GF(2^4).
///
/// Both operands are masked to four bits first, so the result is always a
/// nibble.
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut a = a & NIBBLE_MASK;
    let mut b = b & NIBBLE_MASK;
    let mut product = 0u8;
    while a != 0 && b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a & 0x10 != 0 {
            a ^= POLY;
        }
        b >>= 1;
    }
    product
}
