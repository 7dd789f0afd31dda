//! Simplified AES (S-AES): a 16-bit teaching block cipher over GF(2^4).
//!
//! This crate provides:
//! - Key schedule expanding a 16-bit key into three round keys.
//! - Single-block encryption and decryption (two rounds after a key whitening).
//! - The nibble-level building blocks: S-boxes, GF(2^4) multiplication and the
//!   round transformations.
//!
//! S-AES is a pedagogical cipher with a 16-bit key. It offers no security and
//! the implementation makes no attempt at side-channel resistance.
//!
//! ```
//! use saes_core::{Saes, SaesKey};
//!
//! let cipher = Saes::new(SaesKey(0b0100_1010_1111_0101));
//! let ciphertext = cipher.encrypt(0b1101_0111_0010_1000);
//! assert_eq!(ciphertext, 0b0010_0100_1110_1100);
//! assert_eq!(cipher.decrypt(ciphertext), 0b1101_0111_0010_1000);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
pub mod round;
mod sbox;

pub use crate::block::{to_block, to_state, Block, State};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, Saes};
pub use crate::error::{Error, Result};
pub use crate::gf::gf_mul;
pub use crate::key::{RoundKeys, SaesKey};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
