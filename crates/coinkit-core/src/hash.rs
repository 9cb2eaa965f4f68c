//! The two hash constructions used by the bitcoin address system.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Bitcoin's double SHA256: SHA256(SHA256(data)).
///
/// Used for the 4-byte Base58Check checksum.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}

/// Bitcoin's HASH160: RIPEMD160(SHA256(data)).
///
/// Derives the 20-byte payload of a pay-to-public-key-hash or
/// pay-to-script-hash address.
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripe = Ripemd160::digest(sha);
    let mut result = [0u8; 20];
    result.copy_from_slice(&ripe);
    result
}
