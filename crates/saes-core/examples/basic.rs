//! Encrypts and decrypts the textbook S-AES vector.

use saes_core::{Saes, SaesKey};

fn main() {
    let key = SaesKey(0b0100_1010_1111_0101);
    let plaintext = 0b1101_0111_0010_1000;

    let cipher = Saes::new(key);
    let ciphertext = cipher.encrypt(plaintext);
    assert_eq!(ciphertext, 0b0010_0100_1110_1100);
    assert_eq!(cipher.decrypt(ciphertext), plaintext);

    let [k0, k1, k2] = cipher.round_keys().to_blocks();
    println!("round keys: {k0:#06x} {k1:#06x} {k2:#06x}");
    println!("plaintext:  {plaintext:016b}");
    println!("ciphertext: {ciphertext:016b}");
}
