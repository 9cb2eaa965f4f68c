//! Core primitives for the bitcoin address system.
//!
//! This crate provides pure Rust implementations of:
//! - Fixed-width big-integer serialization (big- and little-endian)
//! - Prime (Galois) field arithmetic
//! - Elliptic curve point groups over a prime field, secp256k1 included
//! - Base58Check address encoding and decoding
//! - SHA256 double-hashing and HASH160
//!
//! Everything here is pure, CPU-bound work over immutable descriptors, safe
//! to call concurrently without locking. None of the arithmetic is constant
//! time: division and scalar multiplication branch on secret-dependent bits.

pub mod base58check;
pub mod curve;
pub mod encoding;
pub mod field;
pub mod hash;

pub use base58check::{AddressVersion, Base58CheckError};
pub use curve::{secp256k1, EllipticCurve, Point};
pub use encoding::{int_from_bytes, int_to_bytes, Endianness, EncodingError};
pub use field::{FieldError, GaloisField};
pub use hash::{double_sha256, hash160};
