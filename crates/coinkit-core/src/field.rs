//! Modular arithmetic over a prime-order Galois field.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;

/// Field arithmetic errors.
///
/// These indicate caller or configuration misuse rather than bad user input:
/// the fix is in the calling code, not in retrying the operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// An operand is negative or not below the field order.
    #[error("{0} is not a valid field element")]
    InvalidFieldElement(BigInt),
    /// A folding operation received fewer than two operands.
    #[error("at least two operands are required")]
    InsufficientOperands,
    /// A divisor is the zero element.
    #[error("division by zero is undefined")]
    DivisionByZero,
    /// Zero raised to a zero or negative exponent.
    #[error("zero base is undefined for exponent {0}")]
    UndefinedExponent(BigInt),
}

/// A finite field of integers whose order is a prime number.
///
/// The order is assumed prime, not verified. The derived constants are
/// computed once at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    order: BigInt,
    max_element: BigInt,
    mult_inverse_exponent: BigInt,
}

impl GaloisField {
    /// Create a field of the given prime order.
    ///
    /// # Panics
    /// Panics if the order is not positive. A bad order is a configuration
    /// error and is fatal at startup.
    pub fn new(order: BigInt) -> Self {
        assert!(
            order.sign() == Sign::Plus,
            "field order {} must be positive",
            order
        );

        let max_element = &order - 1;
        let mult_inverse_exponent = &order - 2;
        GaloisField {
            order,
            max_element,
            mult_inverse_exponent,
        }
    }

    /// The prime order of the field.
    pub fn order(&self) -> &BigInt {
        &self.order
    }

    /// Modular addition of two or more field elements,
    /// (x1+x2+...+xN) mod p.
    pub fn add(&self, elems: &[BigInt]) -> Result<BigInt, FieldError> {
        self.validate_elements(elems)?;

        let mut res = elems[0].clone();
        for e in &elems[1..] {
            res = (res + e).mod_floor(&self.order);
        }
        Ok(res)
    }

    /// Modular subtraction of two or more field elements,
    /// (x1-x2-...-xN) mod p.
    pub fn sub(&self, elems: &[BigInt]) -> Result<BigInt, FieldError> {
        self.validate_elements(elems)?;

        let mut res = elems[0].clone();
        for e in &elems[1..] {
            res = (res - e).mod_floor(&self.order);
        }
        Ok(res)
    }

    /// Modular multiplication of two or more field elements,
    /// (x1*x2*...*xN) mod p.
    pub fn mul(&self, elems: &[BigInt]) -> Result<BigInt, FieldError> {
        self.validate_elements(elems)?;

        let mut res = elems[0].clone();
        for e in &elems[1..] {
            res = (res * e).mod_floor(&self.order);
        }
        Ok(res)
    }

    /// Modular division of two or more field elements,
    /// (x1/x2/.../xN) mod p.
    ///
    /// Division is multiplication by the modular inverse. Because p is prime,
    /// Fermat's little theorem x^(p-1) mod p = 1 gives the inverse of y as
    /// y^(p-2) mod p.
    pub fn div(&self, elems: &[BigInt]) -> Result<BigInt, FieldError> {
        self.validate_elements(elems)?;

        let mut res = elems[0].clone();
        for e in &elems[1..] {
            if e.is_zero() {
                return Err(FieldError::DivisionByZero);
            }
            let inverse = e.modpow(&self.mult_inverse_exponent, &self.order);
            res = (res * inverse).mod_floor(&self.order);
        }
        Ok(res)
    }

    /// Modular exponentiation of a field element, x^n mod p.
    ///
    /// The exponent may be any integer. For a nonzero base it is first
    /// reduced modulo p-1, which by Fermat's little theorem maps negative
    /// and oversized exponents into [0, p-2] without changing the result.
    pub fn exp(&self, elem: &BigInt, exponent: &BigInt) -> Result<BigInt, FieldError> {
        self.validate_element(elem)?;

        if elem.is_zero() {
            if exponent.sign() != Sign::Plus {
                return Err(FieldError::UndefinedExponent(exponent.clone()));
            }
            return Ok(BigInt::zero());
        }

        let positive_exp = exponent.mod_floor(&self.max_element);
        Ok(elem.modpow(&positive_exp, &self.order))
    }

    fn validate_elements(&self, elems: &[BigInt]) -> Result<(), FieldError> {
        if elems.len() < 2 {
            return Err(FieldError::InsufficientOperands);
        }
        for e in elems {
            self.validate_element(e)?;
        }
        Ok(())
    }

    fn validate_element(&self, elem: &BigInt) -> Result<(), FieldError> {
        if elem.sign() == Sign::Minus || elem > &self.max_element {
            return Err(FieldError::InvalidFieldElement(elem.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f19() -> GaloisField {
        GaloisField::new(BigInt::from(19))
    }

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_derived_constants() {
        let f = f19();
        assert_eq!(f.order(), &big(19));
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_non_positive_order() {
        GaloisField::new(big(0));
    }

    #[test]
    fn test_add() {
        let f = f19();
        assert_eq!(f.add(&[big(11), big(17)]).unwrap(), big(9));
        assert_eq!(f.add(&[big(0), big(0)]).unwrap(), big(0));
        // folds left to right across all operands
        assert_eq!(f.add(&[big(18), big(18), big(18)]).unwrap(), big(16));
    }

    #[test]
    fn test_sub() {
        let f = f19();
        assert_eq!(f.sub(&[big(11), big(17)]).unwrap(), big(13));
        assert_eq!(f.sub(&[big(17), big(11)]).unwrap(), big(6));
        assert_eq!(f.sub(&[big(0), big(1), big(1)]).unwrap(), big(17));
    }

    #[test]
    fn test_mul() {
        let f = f19();
        assert_eq!(f.mul(&[big(5), big(3)]).unwrap(), big(15));
        assert_eq!(f.mul(&[big(5), big(4)]).unwrap(), big(1));
        assert_eq!(f.mul(&[big(2), big(3), big(4)]).unwrap(), big(5));
    }

    #[test]
    fn test_div() {
        let f = f19();
        // 7^-1 mod 19 = 11, so 2/7 = 2*11 mod 19 = 3
        assert_eq!(f.div(&[big(2), big(7)]).unwrap(), big(3));
        assert_eq!(f.div(&[big(15), big(3), big(5)]).unwrap(), big(1));
        assert_eq!(f.div(&[big(1), big(2)]).unwrap(), big(10));
    }

    #[test]
    fn test_div_by_zero() {
        let f = f19();
        assert_eq!(f.div(&[big(2), big(0)]), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn test_exp() {
        let f = f19();
        assert_eq!(f.exp(&big(7), &big(3)).unwrap(), big(1));
        assert_eq!(f.exp(&big(2), &big(0)).unwrap(), big(1));
        assert_eq!(f.exp(&big(0), &big(5)).unwrap(), big(0));
        // oversized exponents reduce modulo p-1
        assert_eq!(f.exp(&big(7), &big(21)).unwrap(), big(1));
    }

    #[test]
    fn test_exp_negative_exponent() {
        let f = f19();
        // 9^-1 mod 19 = 17
        assert_eq!(f.exp(&big(9), &big(-1)).unwrap(), big(17));
        assert_eq!(f.exp(&big(7), &big(-3)).unwrap(), big(1));
    }

    #[test]
    fn test_exp_undefined_for_zero_base() {
        let f = f19();
        assert_eq!(
            f.exp(&big(0), &big(0)),
            Err(FieldError::UndefinedExponent(big(0)))
        );
        assert_eq!(
            f.exp(&big(0), &big(-2)),
            Err(FieldError::UndefinedExponent(big(-2)))
        );
    }

    #[test]
    fn test_invalid_elements() {
        let f = f19();
        assert_eq!(
            f.add(&[big(-1), big(3)]),
            Err(FieldError::InvalidFieldElement(big(-1)))
        );
        assert_eq!(
            f.mul(&[big(2), big(19)]),
            Err(FieldError::InvalidFieldElement(big(19)))
        );
        assert_eq!(f.add(&[big(4)]), Err(FieldError::InsufficientOperands));
        assert_eq!(f.sub(&[]), Err(FieldError::InsufficientOperands));
    }

    #[test]
    fn test_inverse_round_trips() {
        let f = f19();
        for a in 0..19 {
            for b in 1..19 {
                let product = f.mul(&[big(a), big(b)]).unwrap();
                assert_eq!(f.div(&[product, big(b)]).unwrap(), big(a));
            }
        }
    }

    #[test]
    fn test_additive_round_trips() {
        let f = f19();
        for a in 0..19 {
            for b in 0..19 {
                let difference = f.sub(&[big(a), big(b)]).unwrap();
                assert_eq!(f.add(&[difference, big(b)]).unwrap(), big(a));
            }
        }
    }
}
