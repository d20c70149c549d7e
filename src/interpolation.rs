use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::Result;
use crate::field::PrimeField;

/// Lagrange interpolation evaluated at x = 0
///
/// Given points `(x_i, y_i)` on a polynomial of degree below the point
/// count, with distinct non-zero `x_i`, recovers the constant term
/// `f(0) = Σ y_i · Π_{j≠i} (0 - x_j) / (x_i - x_j)`. The sum is
/// commutative, so the point order does not matter.
///
/// Distinctness of the x-coordinates is the caller's precondition; a
/// duplicate makes a denominator vanish and surfaces as
/// [`NoModularInverse`](crate::ShamirError::NoModularInverse).
pub fn interpolate_at_zero(field: &PrimeField, points: &[(BigUint, BigUint)]) -> Result<BigUint> {
    let zero = BigUint::zero();
    let mut sum = BigUint::zero();

    for (i, (x_i, y_i)) in points.iter().enumerate() {
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();
        for (j, (x_j, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = field.mul(&numerator, &field.sub(&zero, x_j));
            denominator = field.mul(&denominator, &field.sub(x_i, x_j));
        }
        let basis = field.div(&numerator, &denominator)?;
        sum = field.add(&sum, &field.mul(y_i, &basis));
    }

    Ok(sum)
}
