/*
    Short Weierstrass curves over a prime field (y^2 = x^3 + ax + b mod p)
    and the secp256k1 parameters used for Bitcoin keys.

    The curve parameters are read-only configuration. They are built once
    and handed to key derivation by reference.
*/

pub mod field;
pub mod point;

pub use point::Point;

use std::sync::LazyLock;

use crate::{
    BigUint, Num
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Curve {
    p: BigUint,
    a: BigUint,
    b: BigUint
}

impl Curve {
    /**
        Creates a curve from its field modulus and coefficients.
        p must be prime and the curve non-singular; neither is checked.
    */
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Self {
        Self { p, a, b }
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /**
        Checks whether (x, y) satisfies the curve equation.
    */
    pub fn contains(&self, x: &BigUint, y: &BigUint) -> bool {
        let p = &self.p;
        let lhs = field::mul(y, y, p);
        let x3 = field::mul(&field::mul(x, x, p), x, p);
        let rhs = field::add(&field::add(&x3, &field::mul(&self.a, x, p), p), &self.b, p);
        lhs == rhs
    }
}

/**
    A curve together with its base point and the order of that point.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    pub curve: Curve,
    pub generator: Point,
    pub order: BigUint
}

impl CurveParams {
    pub fn secp256k1() -> Self {
        let curve = Curve::new(
            hex_const("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
            BigUint::from(0u32),
            BigUint::from(7u32)
        );
        let generator = Point::new_unchecked(
            curve.clone(),
            hex_const("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
            hex_const("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8")
        );
        let order = hex_const("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

        Self { curve, generator, order }
    }
}

/// Global secp256k1 configuration
pub static SECP256K1: LazyLock<CurveParams> = LazyLock::new(CurveParams::secp256k1);

fn hex_const(hex: &str) -> BigUint {
    BigUint::from_str_radix(hex, 16).expect("curve constant is valid hex")
}
