//! S-AES key schedule and block encryption/decryption.

use crate::block::{to_block, to_state, Block};
use crate::error::{Error, Result};
use crate::key::{RoundKeys, SaesKey};
use crate::round::{
    add_round_key, inv_mix_columns, inv_sub_nibbles, mix_columns, shift_rows, sub_nibbles,
};
use crate::sbox::sbox;

const RCON: [u8; 2] = [0x80, 0x30];

fn rot_word(word: u8) -> u8 {
    word.rotate_left(4)
}

fn sub_word(word: u8) -> u8 {
    (sbox(word >> 4) << 4) | sbox(word)
}

fn join_words(hi: u8, lo: u8) -> Block {
    u16::from_be_bytes([hi, lo])
}

/// Expands a 16-bit key into the three round keys.
pub fn expand_key(key: &SaesKey) -> RoundKeys {
    let [w0, w1] = key.0.to_be_bytes();
    let w2 = w0 ^ sub_word(rot_word(w1)) ^ RCON[0];
    let w3 = w2 ^ w1;
    let w4 = w2 ^ sub_word(rot_word(w3)) ^ RCON[1];
    let w5 = w4 ^ w3;

    RoundKeys([
        to_state(join_words(w0, w1)),
        to_state(join_words(w2, w3)),
        to_state(join_words(w4, w5)),
    ])
}

/// Encrypts a single 16-bit block with pre-expanded round keys.
pub fn encrypt_block(block: Block, round_keys: &RoundKeys) -> Block {
    let mut state = to_state(block);

    add_round_key(&mut state, round_keys.pre_round());

    sub_nibbles(&mut state);
    shift_rows(&mut state);
    mix_columns(&mut state);
    add_round_key(&mut state, round_keys.round1());

    sub_nibbles(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.round2());

    to_block(&state)
}

/// Decrypts a single 16-bit block with pre-expanded round keys.
pub fn decrypt_block(block: Block, round_keys: &RoundKeys) -> Block {
    let mut state = to_state(block);

    add_round_key(&mut state, round_keys.round2());
    shift_rows(&mut state);
    inv_sub_nibbles(&mut state);

    add_round_key(&mut state, round_keys.round1());
    inv_mix_columns(&mut state);
    shift_rows(&mut state);
    inv_sub_nibbles(&mut state);

    add_round_key(&mut state, round_keys.pre_round());

    to_block(&state)
}

fn narrow(what: &'static str, value: u64) -> Result<Block> {
    Block::try_from(value).map_err(|_| Error::OutOfRange { what, value })
}

/// S-AES cipher with its round keys expanded once at construction.
///
/// The value is immutable and every call works on a stack-local state, so a
/// single instance can be shared freely across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Saes {
    round_keys: RoundKeys,
}

impl Saes {
    /// Expands `key` and caches the round keys.
    pub fn new(key: SaesKey) -> Self {
        Self {
            round_keys: expand_key(&key),
        }
    }

    /// Builds a cipher from an untyped key, rejecting keys wider than 16 bits.
    pub fn try_new(key: u64) -> Result<Self> {
        SaesKey::from_wide(key).map(Self::new)
    }

    /// Expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt(&self, plaintext: Block) -> Block {
        encrypt_block(plaintext, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt(&self, ciphertext: Block) -> Block {
        decrypt_block(ciphertext, &self.round_keys)
    }

    /// Encrypts an untyped value, rejecting anything wider than 16 bits.
    pub fn try_encrypt(&self, plaintext: u64) -> Result<Block> {
        narrow("plaintext", plaintext).map(|block| self.encrypt(block))
    }

    /// Decrypts an untyped value, rejecting anything wider than 16 bits.
    pub fn try_decrypt(&self, ciphertext: u64) -> Result<Block> {
        narrow("ciphertext", ciphertext).map(|block| self.decrypt(block))
    }
}
