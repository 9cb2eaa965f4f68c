//! Base58Check encoding and decoding of bitcoin addresses.
//!
//! An address is the Base58Check form of a 25-byte sequence: a one-byte
//! version, a 20-byte payload (a public key or script hash), and a 4-byte
//! double-SHA256 checksum. Leading zero bytes are preserved as leading '1'
//! characters instead of being absorbed into the numeric encoding.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::encoding::{int_from_bytes, int_to_bytes, Endianness, EncodingError};
use crate::hash::double_sha256;

const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Symbol to digit lookup for the base58 alphabet, -1 for unmapped symbols.
const BASE58_DIGITS: [i8; 128] = {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < BASE58_ALPHABET.len() {
        table[BASE58_ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Total size of a decoded address in bytes: 1-byte version, 20-byte
/// payload, 4-byte checksum.
const ADDRESS_SIZE: usize = 25;
const CHECKSUM_SIZE: usize = 4;

/// The version byte distinguishing payload semantics within an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressVersion {
    /// Pay-to-public-key-hash payload (addresses starting with '1').
    PublicKeyHash,
    /// Pay-to-script-hash payload (addresses starting with '3').
    ScriptHash,
}

impl AddressVersion {
    /// The wire byte for this version.
    pub fn byte(&self) -> u8 {
        match self {
            AddressVersion::PublicKeyHash => 0x00,
            AddressVersion::ScriptHash => 0x05,
        }
    }

    /// Parse a version from its address type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "p2pkh" => Some(AddressVersion::PublicKeyHash),
            "p2sh" => Some(AddressVersion::ScriptHash),
            _ => None,
        }
    }

    /// The address type name for this version.
    pub fn name(&self) -> &'static str {
        match self {
            AddressVersion::PublicKeyHash => "p2pkh",
            AddressVersion::ScriptHash => "p2sh",
        }
    }
}

/// Address decoding errors. These are expected, recoverable validation
/// failures on user-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base58CheckError {
    /// A character outside the base58 alphabet.
    #[error("invalid base58 character: {0}")]
    InvalidCharacter(char),
    /// The decoded value is wider than a 25-byte address.
    #[error(transparent)]
    Overflow(#[from] EncodingError),
    /// The embedded checksum does not match the recomputed one.
    #[error("bad checksum")]
    ChecksumMismatch,
}

/// Encode a payload and its version byte into a bitcoin address.
pub fn encode(payload: &[u8], version: AddressVersion) -> String {
    let mut full = Vec::with_capacity(1 + payload.len() + CHECKSUM_SIZE);
    full.push(version.byte());
    full.extend_from_slice(payload);

    let checksum = double_sha256(&full);
    full.extend_from_slice(&checksum[..CHECKSUM_SIZE]);

    // leading zero bytes carry no numeric weight and become literal '1's
    let leading_zeros = full.iter().take_while(|&&b| b == 0x00).count();

    let fifty_eight = BigInt::from(58);
    let mut num = int_from_bytes(&full[leading_zeros..], Endianness::Big);
    let mut digits = Vec::new();
    while num.sign() == Sign::Plus {
        let (quotient, remainder) = num.div_rem(&fifty_eight);
        let index = remainder.to_usize().expect("base58 remainder below 58");
        digits.push(BASE58_ALPHABET[index]);
        num = quotient;
    }

    let mut address = String::with_capacity(leading_zeros + digits.len());
    for _ in 0..leading_zeros {
        address.push('1');
    }
    for &digit in digits.iter().rev() {
        address.push(digit as char);
    }
    address
}

/// Decode a bitcoin address into its payload, stripping the version byte
/// and verifying the checksum.
pub fn decode(address: &str) -> Result<Vec<u8>, Base58CheckError> {
    let fifty_eight = BigInt::from(58);
    let mut num = BigInt::zero();
    for c in address.chars() {
        let digit = BASE58_DIGITS
            .get(c as usize)
            .copied()
            .filter(|&d| d >= 0)
            .ok_or(Base58CheckError::InvalidCharacter(c))?;
        num = num * &fifty_eight + BigInt::from(digit);
    }

    let bytes = int_to_bytes(&num, ADDRESS_SIZE, Endianness::Big)?;

    let checksum_start = ADDRESS_SIZE - CHECKSUM_SIZE;
    let (data, expected) = bytes.split_at(checksum_start);
    let actual = double_sha256(data);
    if expected != &actual[..CHECKSUM_SIZE] {
        return Err(Base58CheckError::ChecksumMismatch);
    }

    Ok(data[1..].to_vec())
}
