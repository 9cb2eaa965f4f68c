//! The `address` subcommand group.

use anyhow::{anyhow, bail, Context, Result};
use clap::Subcommand;
use coinkit_core::{base58check, AddressVersion};

/// Hex length of a 20-byte public key or script hash.
const HASH_HEX_LEN: usize = 40;

/// Plausible length bounds for a Base58Check address string.
const MIN_ADDRESS_LEN: usize = 14;
const MAX_ADDRESS_LEN: usize = 74;

#[derive(Debug, Subcommand)]
pub enum AddressCommand {
    /// Encode a hash of a public key or script to a bitcoin address
    #[command(visible_alias = "e")]
    Encode {
        /// 20-byte hash as a hex string
        hash: String,

        /// Address type: p2pkh or p2sh
        #[arg(short = 't', long, default_value = "p2pkh")]
        address_type: String,
    },
    /// Decode a bitcoin address to the hash of a public key or script
    #[command(visible_alias = "d")]
    Decode {
        /// Base58Check address string
        address: String,
    },
}

pub fn run_address(command: AddressCommand) -> Result<()> {
    match command {
        AddressCommand::Encode { hash, address_type } => {
            let address = encode_hash(&hash, &address_type)?;
            println!("address: {address}");
        }
        AddressCommand::Decode { address } => {
            let hash = decode_address(&address)?;
            println!("hash: {}", hex::encode(hash));
        }
    }
    Ok(())
}

fn encode_hash(hash: &str, address_type: &str) -> Result<String> {
    if hash.len() != HASH_HEX_LEN {
        bail!("invalid hash is specified: {hash}");
    }
    let payload = hex::decode(hash).context("unable to decode hash")?;

    let version = AddressVersion::from_name(address_type)
        .ok_or_else(|| anyhow!("invalid address type is specified: {address_type}"))?;

    Ok(base58check::encode(&payload, version))
}

fn decode_address(address: &str) -> Result<Vec<u8>> {
    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&address.len()) {
        bail!("invalid address is specified: {address}");
    }
    base58check::decode(address).context("unable to decode address")
}
