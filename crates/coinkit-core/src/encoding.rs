//! Fixed-width serialization of arbitrary-precision integers.

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

/// Byte order of a serialized integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// Integer serialization errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The integer does not fit into the requested fixed width.
    #[error("{value:x} overflows max size of {size} bytes")]
    Overflow { value: BigInt, size: usize },
}

/// Serialize a non-negative integer into exactly `size` bytes.
///
/// The value is zero-padded on the side opposite its significant digits.
/// Fails with [`EncodingError::Overflow`] if the integer needs more than
/// `size` bytes. A negative input contributes its magnitude.
pub fn int_to_bytes(n: &BigInt, size: usize, endianness: Endianness) -> Result<Vec<u8>, EncodingError> {
    let bytes = if n.is_zero() {
        Vec::new()
    } else {
        n.magnitude().to_bytes_be()
    };

    if bytes.len() > size {
        return Err(EncodingError::Overflow {
            value: n.clone(),
            size,
        });
    }

    let mut buf = vec![0u8; size];
    match endianness {
        Endianness::Big => buf[size - bytes.len()..].copy_from_slice(&bytes),
        Endianness::Little => {
            for (i, b) in bytes.iter().rev().enumerate() {
                buf[i] = *b;
            }
        }
    }
    Ok(buf)
}

/// Reconstruct an integer from its fixed-width serialization.
///
/// The input is treated as an unsigned magnitude; this never fails.
pub fn int_from_bytes(bytes: &[u8], endianness: Endianness) -> BigInt {
    match endianness {
        Endianness::Big => BigInt::from_bytes_be(Sign::Plus, bytes),
        Endianness::Little => BigInt::from_bytes_le(Sign::Plus, bytes),
    }
}
