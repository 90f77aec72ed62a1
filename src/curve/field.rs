/*
    Modular arithmetic over the prime field of a curve.
    All results are normalized into [0, p).
*/

use crate::{
    error::{Error, Result},
    BigUint, Zero
};

pub fn add(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

pub fn sub(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a % p) + p - (b % p)) % p
}

pub fn mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

pub fn neg(a: &BigUint, p: &BigUint) -> BigUint {
    (p - (a % p)) % p
}

/**
    Multiplicative inverse of a modulo p.
    A zero residue has no inverse, which only happens when point arithmetic is given non-curve points.
*/
pub fn inv(a: &BigUint, p: &BigUint) -> Result<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return Err(Error::DegenerateCurveOperation);
    }

    a.modinv(p).ok_or(Error::DegenerateCurveOperation)
}

/**
    Square root of a modulo p, for primes with p = 3 mod 4.
    Returns None when a is not a quadratic residue or p has the wrong shape.
*/
pub fn sqrt(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    if p % BigUint::from(4u32) != BigUint::from(3u32) {
        return None;
    }

    let a = a % p;
    let root = a.modpow(&((p + 1u32) >> 2u32), p);
    if mul(&root, &root, p) == a { Some(root) } else { None }
}
