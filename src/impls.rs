/**
    This module combines all the boilerplate
    implementations of fmt::Display.
*/

use crate::{
    address::Address,
    curve::Point,
    key::{PrivKey, PubKey}
};
use std::fmt;

/*
    key module impls
*/
impl fmt::Display for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

/*
    address module impls
*/
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

/*
    curve module impls
*/
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "infinity"),
            Point::Affine { x, y, .. } => write!(f, "({},{})", x, y)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{curve::SECP256K1, key::PubKey, BigUint};

    #[test]
    fn display_forms() {
        assert_eq!(format!("{}", crate::curve::Point::Infinity), "infinity");

        let g = &SECP256K1.generator;
        let shown = format!("{}", g);
        assert!(shown.starts_with("(55066263022277343669578718895168534326250603453777594175500187360389116729240,"));

        let pubk = PubKey::new(BigUint::from(255u32), BigUint::from(16u32));
        assert_eq!(format!("{}", pubk), "(ff,10)");
    }
}
