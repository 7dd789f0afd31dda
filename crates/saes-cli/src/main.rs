//! Command-line interface for `saes`.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use saes_core::{Block, Saes, SaesKey};

/// Simplified AES CLI.
#[derive(Parser)]
#[command(name = "saes", version, author, about = "Simplified AES (16-bit) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a single 16-bit block.
    Enc {
        #[command(flatten)]
        key: KeyArgs,
        /// Plaintext block (0b.., 0x.., 0o.. or decimal).
        #[arg(long, value_name = "INT")]
        block: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Bin)]
        format: Format,
    },
    /// Decrypt a single 16-bit block.
    Dec {
        #[command(flatten)]
        key: KeyArgs,
        /// Ciphertext block (0b.., 0x.., 0o.. or decimal).
        #[arg(long, value_name = "INT")]
        block: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Bin)]
        format: Format,
    },
    /// Print the three round keys derived from a key.
    Expand {
        #[command(flatten)]
        key: KeyArgs,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Bin)]
        format: Format,
    },
    /// Verify encrypt/decrypt round trips for random keys and blocks.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 1024)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key + block, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// Key as an integer (0b.., 0x.., 0o.. or decimal).
    #[arg(long, value_name = "INT")]
    key: Option<String>,
    /// Key as 4 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Bin,
    Hex,
    Dec,
}

fn main() -> Result<()> {
    run(Cli::parse().command)
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Enc { key, block, format } => cmd_enc(&key, &block, format),
        Commands::Dec { key, block, format } => cmd_dec(&key, &block, format),
        Commands::Expand { key, format } => cmd_expand(&key, format),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(key: &KeyArgs, block: &str, format: Format) -> Result<()> {
    let cipher = Saes::new(resolve_key(key)?);
    let value = parse_int(block).context("parse plaintext")?;
    let ciphertext = cipher.try_encrypt(value)?;
    println!("{}", render(ciphertext, format));
    Ok(())
}

fn cmd_dec(key: &KeyArgs, block: &str, format: Format) -> Result<()> {
    let cipher = Saes::new(resolve_key(key)?);
    let value = parse_int(block).context("parse ciphertext")?;
    let plaintext = cipher.try_decrypt(value)?;
    println!("{}", render(plaintext, format));
    Ok(())
}

fn cmd_expand(key: &KeyArgs, format: Format) -> Result<()> {
    let cipher = Saes::new(resolve_key(key)?);
    let labels = ["pre-round", "round 1", "round 2"];
    for (label, word) in labels.iter().zip(cipher.round_keys().to_blocks()) {
        println!("{label}: {}", render(word, format));
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let key = SaesKey(rng.next_u32() as u16);
        let block = rng.next_u32() as Block;
        let cipher = Saes::new(key);
        let ciphertext = cipher.encrypt(block);
        if cipher.decrypt(ciphertext) != block {
            bail!(
                "round trip failed for key {:#06x}, block {:#06x}",
                key.0,
                block
            );
        }
    }
    println!("{samples} samples round-tripped");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 2];
    rng.fill_bytes(&mut key_bytes);
    let key = SaesKey::from_be_bytes(key_bytes);

    let mut block_bytes = [0u8; 2];
    rng.fill_bytes(&mut block_bytes);
    let plaintext = Block::from_be_bytes(block_bytes);

    let cipher = Saes::new(key);
    let ciphertext = cipher.encrypt(plaintext);
    let decrypted = cipher.decrypt(ciphertext);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(plaintext.to_be_bytes()));
    println!("ciphertext: {}", hex::encode(ciphertext.to_be_bytes()));
    println!("decrypted: {}", hex::encode(decrypted.to_be_bytes()));
    if decrypted != plaintext {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn resolve_key(args: &KeyArgs) -> Result<SaesKey> {
    match (&args.key, &args.key_hex) {
        (Some(int), None) => {
            let value = parse_int(int).context("parse key")?;
            Ok(SaesKey::from_wide(value)?)
        }
        (None, Some(hex_str)) => parse_key_hex(hex_str),
        _ => bail!("exactly one of --key or --key-hex is required"),
    }
}

fn parse_key_hex(hex_str: &str) -> Result<SaesKey> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != 2 {
        bail!("S-AES key must be 2 bytes (4 hex characters)");
    }
    Ok(SaesKey::from_be_bytes([bytes[0], bytes[1]]))
}

fn parse_int(text: &str) -> Result<u64> {
    let text = text.trim().replace('_', "");
    let lower = text.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else {
        (lower.as_str(), 10)
    };
    u64::from_str_radix(digits, radix).with_context(|| format!("invalid integer {text:?}"))
}

fn render(value: Block, format: Format) -> String {
    match format {
        Format::Bin => format!("{value:#018b}"),
        Format::Hex => format!("{value:#06x}"),
        Format::Dec => value.to_string(),
    }
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_integers() {
        assert_eq!(parse_int("0b0100101011110101").unwrap(), 0x4af5);
        assert_eq!(parse_int("0x4AF5").unwrap(), 0x4af5);
        assert_eq!(parse_int("0o45365").unwrap(), 0x4af5);
        assert_eq!(parse_int("19189").unwrap(), 0x4af5);
        assert_eq!(parse_int("0b0100_1010_1111_0101").unwrap(), 0x4af5);
        assert!(parse_int("0xzz").is_err());
        assert!(parse_int("").is_err());
    }

    #[test]
    fn parses_hex_key() {
        assert_eq!(parse_key_hex("4af5").unwrap(), SaesKey(0x4af5));
        assert!(parse_key_hex("4af5aa").is_err());
        assert!(parse_key_hex("4g").is_err());
    }

    #[test]
    fn wide_key_is_rejected() {
        let args = KeyArgs {
            key: Some("0x10000".into()),
            key_hex: None,
        };
        assert!(resolve_key(&args).is_err());
    }

    #[test]
    fn renders_formats() {
        assert_eq!(render(0x24ec, Format::Bin), "0b0010010011101100");
        assert_eq!(render(0x24ec, Format::Hex), "0x24ec");
        assert_eq!(render(0x24ec, Format::Dec), "9452");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(7));
        let mut b = seeded_rng(Some(7));
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    fn int_key(text: &str) -> KeyArgs {
        KeyArgs {
            key: Some(text.into()),
            key_hex: None,
        }
    }

    fn hex_key(text: &str) -> KeyArgs {
        KeyArgs {
            key: None,
            key_hex: Some(text.into()),
        }
    }

    #[test]
    fn enc_and_dec_accept_known_vector() {
        assert!(cmd_enc(&int_key("0x4af5"), "0b1101011100101000", Format::Bin).is_ok());
        assert!(cmd_dec(&int_key("0x4af5"), "0x24ec", Format::Hex).is_ok());
        assert!(cmd_dec(&hex_key("4af5"), "9452", Format::Dec).is_ok());
    }

    #[test]
    fn enc_rejects_wide_block() {
        let err = cmd_enc(&int_key("0x4af5"), "0x10000", Format::Hex).unwrap_err();
        assert_eq!(
            err.downcast_ref::<saes_core::Error>(),
            Some(&saes_core::Error::OutOfRange {
                what: "plaintext",
                value: 0x1_0000
            })
        );
    }

    #[test]
    fn dec_rejects_wide_block_and_bad_input() {
        let err = cmd_dec(&int_key("0x4af5"), "0x10000", Format::Hex).unwrap_err();
        assert_eq!(
            err.downcast_ref::<saes_core::Error>(),
            Some(&saes_core::Error::OutOfRange {
                what: "ciphertext",
                value: 0x1_0000
            })
        );
        assert!(cmd_dec(&int_key("0x4af5"), "0xnope", Format::Hex).is_err());
    }

    #[test]
    fn expand_runs_with_either_key_form() {
        assert!(cmd_expand(&int_key("0b0100101011110101"), Format::Hex).is_ok());
        assert!(cmd_expand(&hex_key("4af5"), Format::Bin).is_ok());
        assert!(cmd_expand(&hex_key("4af5aa"), Format::Bin).is_err());
    }

    #[test]
    fn check_and_demo_succeed_with_seed() {
        assert!(cmd_check(64, Some(1)).is_ok());
        assert!(cmd_demo(Some(1)).is_ok());
    }

    #[test]
    fn parsed_commands_dispatch() {
        let cli = Cli::try_parse_from([
            "saes", "enc", "--key", "0x4af5", "--block", "0xd728", "--format", "hex",
        ])
        .unwrap();
        assert!(run(cli.command).is_ok());

        let cli = Cli::try_parse_from(["saes", "expand", "--key-hex", "4af5"]).unwrap();
        assert!(run(cli.command).is_ok());

        let cli = Cli::try_parse_from(["saes", "check", "--samples", "8", "--seed", "3"]).unwrap();
        assert!(run(cli.command).is_ok());
    }

    #[test]
    fn key_forms_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["saes", "expand"]).is_err());
        assert!(Cli::try_parse_from([
            "saes", "expand", "--key", "1", "--key-hex", "0001",
        ])
        .is_err());
    }
}
