//! Elliptic curve point groups over a prime field.

use std::sync::LazyLock;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::field::{FieldError, GaloisField};

/// A point in the curve group: either the additive identity (the point at
/// infinity) or a finite coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Finite { x: BigInt, y: BigInt },
}

impl Point {
    /// A finite point with the given affine coordinates.
    pub fn finite(x: BigInt, y: BigInt) -> Self {
        Point::Finite { x, y }
    }

    /// Whether this point is the group identity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }
}

/// An elliptic curve over a Galois field, defined by the short Weierstrass
/// equation y^2 mod p = (x^3 + ax + b) mod p, together with a generator point
/// of a cyclic subgroup of order n.
///
/// The descriptor is immutable; every operation is a pure function of its
/// inputs.
#[derive(Debug, Clone)]
pub struct EllipticCurve {
    field: GaloisField,
    a: BigInt,
    b: BigInt,
    gx: BigInt,
    gy: BigInt,
    n: BigInt,
    bit_size: usize,
    name: &'static str,
}

impl EllipticCurve {
    /// Create a curve descriptor.
    ///
    /// # Panics
    /// Panics if the generator does not lie on the curve. Malformed curve
    /// parameters are configuration errors and are fatal at startup.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        a: BigInt,
        b: BigInt,
        p: BigInt,
        n: BigInt,
        gx: BigInt,
        gy: BigInt,
        bit_size: usize,
        name: &'static str,
    ) -> Self {
        let curve = EllipticCurve {
            field: GaloisField::new(p),
            a,
            b,
            gx,
            gy,
            n,
            bit_size,
            name,
        };
        assert!(
            curve.is_on_curve(&curve.generator()),
            "curve {}: generator does not lie on the curve",
            curve.name
        );
        curve
    }

    /// The underlying field.
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// The generator (base point) of the cyclic subgroup.
    pub fn generator(&self) -> Point {
        Point::finite(self.gx.clone(), self.gy.clone())
    }

    /// The order of the cyclic subgroup generated by the base point.
    pub fn subgroup_order(&self) -> &BigInt {
        &self.n
    }

    /// The curve's key length in bits.
    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    /// The curve's canonical name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the point satisfies the curve equation. The identity is on
    /// the curve by convention; a coordinate outside the field is not.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        let (x, y) = match point {
            Point::Infinity => return true,
            Point::Finite { x, y } => (x, y),
        };
        self.equation_holds(x, y).unwrap_or(false)
    }

    fn equation_holds(&self, x: &BigInt, y: &BigInt) -> Result<bool, FieldError> {
        let lhs = self.field.exp(y, &BigInt::from(2))?;
        let rhs = self.field.add(&[
            self.field.exp(x, &BigInt::from(3))?,
            self.field.mul(&[self.a.clone(), x.clone()])?,
            self.b.clone(),
        ])?;
        Ok(lhs == rhs)
    }

    /// The group law: the sum of two points on the curve.
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point, FieldError> {
        // the identity is the neutral element
        let (x1, y1) = match p {
            Point::Infinity => return Ok(q.clone()),
            Point::Finite { x, y } => (x, y),
        };
        let (x2, y2) = match q {
            Point::Infinity => return Ok(p.clone()),
            Point::Finite { x, y } => (x, y),
        };

        // for distinct x a secant line intersects the curve at a third point
        if x1 != x2 {
            let slope = self.field.div(&[
                self.field.sub(&[y2.clone(), y1.clone()])?,
                self.field.sub(&[x2.clone(), x1.clone()])?,
            ])?;
            let x = self.intersection_x(&slope, x1, x2)?;
            let y = self.intersection_y(&slope, x1, y1, &x)?;
            return Ok(Point::Finite { x, y });
        }

        // equal x: the line is vertical when the points are negatives of
        // each other, or tangent at a 2-torsion point when y = 0
        if y1 != y2 || y1.is_zero() {
            return Ok(Point::Infinity);
        }

        // equal points: the tangent line intersects the curve at one more
        // point, with slope (3*x1^2 + a) / (2*y1)
        let slope = self.field.div(&[
            self.field.add(&[
                self.field
                    .mul(&[BigInt::from(3), self.field.exp(x1, &BigInt::from(2))?])?,
                self.a.clone(),
            ])?,
            self.field.mul(&[BigInt::from(2), y1.clone()])?,
        ])?;
        let x = self.intersection_x(&slope, x1, x1)?;
        let y = self.intersection_y(&slope, x1, y1, &x)?;
        Ok(Point::Finite { x, y })
    }

    // x = s^2 - x1 - x2 where s is the slope of the intersecting line
    fn intersection_x(&self, slope: &BigInt, x1: &BigInt, x2: &BigInt) -> Result<BigInt, FieldError> {
        self.field.sub(&[
            self.field.exp(slope, &BigInt::from(2))?,
            x1.clone(),
            x2.clone(),
        ])
    }

    // y = s*(x1 - x) - y1 where s is the slope of the intersecting line
    fn intersection_y(
        &self,
        slope: &BigInt,
        x1: &BigInt,
        y1: &BigInt,
        x: &BigInt,
    ) -> Result<BigInt, FieldError> {
        self.field.sub(&[
            self.field
                .mul(&[slope.clone(), self.field.sub(&[x1.clone(), x.clone()])?])?,
            y1.clone(),
        ])
    }

    /// Twice the given point.
    pub fn double(&self, point: &Point) -> Result<Point, FieldError> {
        self.add(point, point)
    }

    /// The scalar product k*P via binary double-and-add.
    ///
    /// The scalar is reduced modulo the subgroup order first, bounding the
    /// bit scan to the curve's bit size.
    pub fn scalar_mult(&self, point: &Point, k: &BigInt) -> Result<Point, FieldError> {
        if point.is_infinity() {
            return Ok(Point::Infinity);
        }

        let mut k = k.mod_floor(&self.n);
        let mut addend = point.clone();
        let mut acc = Point::Infinity;
        while !k.is_zero() {
            if k.is_odd() {
                acc = self.add(&acc, &addend)?;
            }
            addend = self.double(&addend)?;
            k >>= 1;
        }
        Ok(acc)
    }

    /// The scalar product k*G, where G is the base point of the group.
    pub fn scalar_base_mult(&self, k: &BigInt) -> Result<Point, FieldError> {
        self.scalar_mult(&self.generator(), k)
    }
}

static SECP256K1: LazyLock<EllipticCurve> = LazyLock::new(|| {
    // p = 2^256 - 2^32 - 977
    let p = hex_int("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
    let n = hex_int("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
    let gx = hex_int("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
    let gy = hex_int("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");
    EllipticCurve::new(BigInt::zero(), BigInt::from(7), p, n, gx, gy, 256, "secp256k1")
});

/// The secp256k1 curve used by the bitcoin address system.
pub fn secp256k1() -> &'static EllipticCurve {
    &SECP256K1
}

fn hex_int(s: &str) -> BigInt {
    BigInt::parse_bytes(s.as_bytes(), 16).expect("valid hex literal")
}
