use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::RngCore;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::field::PrimeField;

/// A polynomial over a prime field, with the secret chunk as constant term
///
/// Coefficients are ordered `[a0, a1, ..., ad]` where `a0` is the constant
/// term. Instances only live inside a single split; all coefficients are
/// overwritten with zero when the polynomial is dropped.
pub struct Polynomial {
    field: PrimeField,
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Creates a polynomial from explicit coefficients, reduced into the field
    pub fn new(field: PrimeField, coefficients: Vec<BigUint>) -> Self {
        let coefficients = coefficients.iter().map(|c| field.reduce(c)).collect();
        Self { field, coefficients }
    }

    /// Builds a random polynomial of the given degree with `constant` as
    /// its constant term
    ///
    /// The non-constant coefficients are drawn from the supplied CSPRNG:
    /// 16 bytes per coefficient interpreted as a big-endian integer for
    /// primes of 128 bits and up; for smaller primes, 64 bits beyond the
    /// prime width are sampled and reduced to keep the distribution
    /// uniform.
    pub fn random<R: RngCore + ?Sized>(
        field: &PrimeField,
        degree: u32,
        constant: BigUint,
        rng: &mut R,
    ) -> Self {
        let mut coefficients = Vec::with_capacity(degree as usize + 1);
        coefficients.push(field.reduce(&constant));
        for _ in 0..degree {
            coefficients.push(sample_coefficient(field, rng));
        }
        Self {
            field: field.clone(),
            coefficients,
        }
    }

    /// Evaluates the polynomial at `x` in Horner form, O(degree) field
    /// multiplications
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        let mut acc = BigUint::zero();
        for coefficient in self.coefficients.iter().rev() {
            acc = self.field.add(&self.field.mul(&acc, x), coefficient);
        }
        acc
    }

    /// Returns the constant term (the embedded secret chunk)
    pub fn constant_term(&self) -> &BigUint {
        &self.coefficients[0]
    }

    /// Returns all coefficients, constant term first
    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// Returns the polynomial degree
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        // Coefficients are secret material; overwrite before release
        for coefficient in &mut self.coefficients {
            *coefficient = BigUint::zero();
        }
    }
}

fn sample_coefficient<R: RngCore + ?Sized>(field: &PrimeField, rng: &mut R) -> BigUint {
    let bits = field.prime().bits();
    let value = if bits >= 128 {
        let mut buf = [0u8; 16];
        rng.fill_bytes(&mut buf);
        let value = BigUint::from_bytes_be(&buf);
        #[cfg(feature = "zeroize")]
        buf.zeroize();
        value
    } else {
        let mut buf = vec![0u8; ((bits + 64) as usize).div_ceil(8)];
        rng.fill_bytes(&mut buf);
        let value = BigUint::from_bytes_be(&buf);
        #[cfg(feature = "zeroize")]
        buf.zeroize();
        value
    };
    field.reduce(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    use crate::config::PRIME_256;

    fn field() -> PrimeField {
        PrimeField::new(PRIME_256.clone())
    }

    fn schoolbook_evaluate(field: &PrimeField, coefficients: &[BigUint], x: &BigUint) -> BigUint {
        let mut sum = BigUint::zero();
        let mut power = BigUint::from(1u32);
        for coefficient in coefficients {
            sum = field.add(&sum, &field.mul(coefficient, &power));
            power = field.mul(&power, x);
        }
        sum
    }

    #[test]
    fn test_constant_polynomial_evaluates_to_constant() {
        let f = field();
        let constant = BigUint::from(42u32);
        let poly = Polynomial::new(f, vec![constant.clone()]);
        assert_eq!(poly.degree(), 0);
        assert_eq!(poly.evaluate(&BigUint::from(17u32)), constant);
    }

    #[test]
    fn test_horner_matches_schoolbook() {
        let f = field();
        let coefficients: Vec<BigUint> = [3u32, 0, 7, 19, 255]
            .iter()
            .map(|&n| BigUint::from(n))
            .collect();
        let poly = Polynomial::new(f.clone(), coefficients.clone());
        for x in 0u32..10 {
            let x = BigUint::from(x);
            assert_eq!(poly.evaluate(&x), schoolbook_evaluate(&f, &coefficients, &x));
        }
    }

    #[test]
    fn test_random_polynomial_shape() {
        let f = field();
        let mut rng = ChaCha20Rng::try_from_rng(&mut OsRng).unwrap();
        let constant = BigUint::from(123456u32);
        let poly = Polynomial::random(&f, 4, constant.clone(), &mut rng);

        assert_eq!(poly.degree(), 4);
        assert_eq!(poly.constant_term(), &constant);
        assert_eq!(poly.coefficients().len(), 5);
        for coefficient in poly.coefficients() {
            assert!(coefficient < f.prime());
        }
    }

    #[test]
    fn test_random_polynomial_is_seed_deterministic() {
        let f = field();
        let constant = BigUint::from(9u32);

        let mut rng_a = ChaCha20Rng::from_seed([7u8; 32]);
        let mut rng_b = ChaCha20Rng::from_seed([7u8; 32]);
        let a = Polynomial::random(&f, 3, constant.clone(), &mut rng_a);
        let b = Polynomial::random(&f, 3, constant, &mut rng_b);

        assert_eq!(a.coefficients(), b.coefficients());
    }

    #[test]
    fn test_small_prime_sampling_stays_in_range() {
        let f = PrimeField::new(BigUint::from(65537u32));
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        for _ in 0..100 {
            let coefficient = sample_coefficient(&f, &mut rng);
            assert!(&coefficient < f.prime());
        }
    }

    #[test]
    fn test_evaluate_at_zero_is_constant_term() {
        let f = field();
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        let constant = BigUint::from(77u32);
        let poly = Polynomial::random(&f, 2, constant.clone(), &mut rng);
        assert_eq!(poly.evaluate(&BigUint::zero()), constant);
    }
}
