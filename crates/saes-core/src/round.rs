//! S-AES round transformations.

use crate::block::{xor_in_place, State};
use crate::gf::gf_mul;
use crate::sbox::{inv_sbox, sbox};

/// Applies SubNibbles to the state in place.
#[inline]
pub fn sub_nibbles(state: &mut State) {
    for nibble in state.iter_mut() {
        *nibble = sbox(*nibble);
    }
}

/// Applies the inverse SubNibbles transformation.
#[inline]
pub fn inv_sub_nibbles(state: &mut State) {
    for nibble in state.iter_mut() {
        *nibble = inv_sbox(*nibble);
    }
}

/// Performs ShiftRows in place.
///
/// Only the bottom row moves, and rotating two nibbles is its own inverse, so
/// decryption uses this same function.
#[inline]
pub fn shift_rows(state: &mut State) {
    state.swap(2, 3);
}

/// MixColumns with the matrix `[[1, 4], [4, 1]]`.
#[inline]
pub fn mix_columns(state: &mut State) {
    let [s0, s1, s2, s3] = *state;
    *state = [
        s0 ^ gf_mul(4, s2),
        s1 ^ gf_mul(4, s3),
        s2 ^ gf_mul(4, s0),
        s3 ^ gf_mul(4, s1),
    ];
}

/// Inverse MixColumns with the matrix `[[9, 2], [2, 9]]`.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    let [s0, s1, s2, s3] = *state;
    *state = [
        gf_mul(9, s0) ^ gf_mul(2, s2),
        gf_mul(9, s1) ^ gf_mul(2, s3),
        gf_mul(9, s2) ^ gf_mul(2, s0),
        gf_mul(9, s3) ^ gf_mul(2, s1),
    ];
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    xor_in_place(state, round_key);
}
