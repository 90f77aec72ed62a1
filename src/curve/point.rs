/*
    Points on a short Weierstrass curve and the group law.

    Points are immutable values. Every operation returns a new point and
    reports degenerate inputs (a denominator with no inverse) as
    Error::DegenerateCurveOperation instead of panicking.
*/

use crate::{
    curve::{field, Curve},
    error::{Error, Result},
    BigUint, Zero
};

/**
    A point on a curve, or the point at infinity.

    Affine points are only built by `Point::new` or by the group law, so every
    affine point satisfies its curve equation. Outside this crate the variant can
    be matched but not constructed:

    ```compile_fail
    use btc_keyderive::prelude::*;

    let x = SECP256K1.generator.x().unwrap().clone();
    let _ = Point::Affine { x: x.clone(), y: x, curve: SECP256K1.curve.clone() };
    ```
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Point {
    /// The group identity
    Infinity,
    #[non_exhaustive]
    Affine {
        x: BigUint,
        y: BigUint,
        curve: Curve
    }
}

impl Point {
    /**
        Creates an affine point, checking that the coordinates are reduced and satisfy the curve equation.
    */
    pub fn new(curve: Curve, x: BigUint, y: BigUint) -> Result<Self> {
        if &x >= curve.p() || &y >= curve.p() {
            return Err(Error::InvalidArgument("coordinate is not reduced modulo p".to_string()));
        }
        if !curve.contains(&x, &y) {
            return Err(Error::InvalidArgument("point is not on the curve".to_string()));
        }

        Ok(Self::new_unchecked(curve, x, y))
    }

    pub(crate) fn new_unchecked(curve: Curve, x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y, curve }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Affine { x, .. } => Some(x),
            Point::Infinity => None
        }
    }

    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Affine { y, .. } => Some(y),
            Point::Infinity => None
        }
    }

    pub fn curve(&self) -> Option<&Curve> {
        match self {
            Point::Affine { curve, .. } => Some(curve),
            Point::Infinity => None
        }
    }

    /**
        The inverse point, (x, -y).
    */
    pub fn neg(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y, curve } => Point::Affine {
                x: x.clone(),
                y: field::neg(y, curve.p()),
                curve: curve.clone()
            }
        }
    }

    /**
        Group addition.
        Points sharing an x coordinate are either inverses (sum is infinity) or equal (falls through to doubling).
    */
    pub fn add(&self, other: &Point) -> Result<Point> {
        let (x1, y1, curve, x2, y2) = match (self, other) {
            (_, Point::Infinity) => return Ok(self.clone()),
            (Point::Infinity, _) => return Ok(other.clone()),
            (
                Point::Affine { x: x1, y: y1, curve },
                Point::Affine { x: x2, y: y2, curve: other_curve }
            ) => {
                if curve != other_curve {
                    return Err(Error::InvalidArgument("points lie on different curves".to_string()));
                }
                (x1, y1, curve, x2, y2)
            }
        };
        let p = curve.p();

        if x1 == x2 {
            if field::add(y1, y2, p).is_zero() {
                return Ok(Point::Infinity);
            }
            return self.double();
        }

        //Secant slope: (y2 - y1) / (x2 - x1)
        let l = field::mul(&field::sub(y2, y1, p), &field::inv(&field::sub(x2, x1, p), p)?, p);

        Ok(Self::chord(curve, &l, x1, y1, x2))
    }

    /**
        Adds a point to itself using the tangent slope.
    */
    pub fn double(&self) -> Result<Point> {
        let (x, y, curve) = match self {
            Point::Infinity => return Ok(Point::Infinity),
            Point::Affine { x, y, curve } => (x, y, curve)
        };
        let p = curve.p();

        //Points of order two have a vertical tangent
        if y.is_zero() {
            return Ok(Point::Infinity);
        }

        //Tangent slope: (3x^2 + a) / 2y
        let three_x2 = field::mul(&BigUint::from(3u32), &field::mul(x, x, p), p);
        let numerator = field::add(&three_x2, curve.a(), p);
        let denominator = field::add(y, y, p);
        let l = field::mul(&numerator, &field::inv(&denominator, p)?, p);

        Ok(Self::chord(curve, &l, x, y, x))
    }

    /**
        Scalar multiplication k * self.

        Walks the bits of k and 3k together from just below the top bit of 3k down to bit 1.
        Where the two differ the point (or its inverse) is added, which yields the
        non-adjacent form of k without recoding it explicitly.
    */
    pub fn mul(&self, k: &BigUint) -> Result<Point> {
        if k.is_zero() || self.is_infinity() {
            return Ok(Point::Infinity);
        }

        let e1 = k;
        let e3 = k * 3u32;
        let negated = self.neg();

        let mut result = self.clone();
        let top = e3.bits() - 1;

        for i in (1..top).rev() {
            result = result.double()?;

            match (e3.bit(i), e1.bit(i)) {
                (true, false) => result = result.add(self)?,
                (false, true) => result = result.add(&negated)?,
                _ => {}
            }
        }

        Ok(result)
    }

    /**
        Third intersection of the line with slope l through (x1, y1), reflected over the x axis.
    */
    fn chord(curve: &Curve, l: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> Point {
        let p = curve.p();
        let x3 = field::sub(&field::sub(&field::mul(l, l, p), x1, p), x2, p);
        let y3 = field::sub(&field::mul(l, &field::sub(x1, &x3, p), p), y1, p);

        Point::new_unchecked(curve.clone(), x3, y3)
    }
}
