use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Result, ShamirError};

/// Arithmetic in the prime field GF(p)
///
/// A value type owning its prime modulus. Elements are non-negative
/// arbitrary-precision integers in `[0, p-1]`; every operation reduces its
/// result back into that range. Operands up to 512 bits are routine.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use prime_share::PrimeField;
///
/// let field = PrimeField::new(BigUint::from(251u32));
/// let a = BigUint::from(200u32);
/// let b = BigUint::from(100u32);
/// assert_eq!(field.add(&a, &b), BigUint::from(49u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    prime: BigUint,
}

impl PrimeField {
    /// Creates a field with the given prime modulus
    pub fn new(prime: BigUint) -> Self {
        Self { prime }
    }

    /// Returns the prime modulus
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Canonical representative of `a` in `[0, p-1]`
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.prime
    }

    /// `(a + b) mod p`
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.prime
    }

    /// `(a - b) mod p`, normalized to a non-negative representative
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = a % &self.prime;
        let b = b % &self.prime;
        (a + &self.prime - b) % &self.prime
    }

    /// `(a * b) mod p`
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.prime
    }

    /// Multiplicative inverse of `a` modulo p via the extended Euclidean
    /// algorithm
    ///
    /// Fails with [`ShamirError::NoModularInverse`] when `a mod p = 0`.
    /// With a prime modulus every other element is invertible.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigUint;
    /// use num_traits::One;
    /// use prime_share::PrimeField;
    ///
    /// let field = PrimeField::new(BigUint::from(251u32));
    /// let a = BigUint::from(7u32);
    /// let inv = field.inv(&a).unwrap();
    /// assert!(field.mul(&a, &inv).is_one());
    /// ```
    pub fn inv(&self, a: &BigUint) -> Result<BigUint> {
        let a = a % &self.prime;
        if a.is_zero() {
            return Err(ShamirError::NoModularInverse);
        }

        let a = BigInt::from(a);
        let modulus = BigInt::from(self.prime.clone());
        let egcd = a.extended_gcd(&modulus);
        if !egcd.gcd.is_one() {
            return Err(ShamirError::NoModularInverse);
        }

        egcd.x
            .mod_floor(&modulus)
            .to_biguint()
            .ok_or(ShamirError::NoModularInverse)
    }

    /// `(a / b) mod p`, i.e. `a * b^-1`
    pub fn div(&self, a: &BigUint, b: &BigUint) -> Result<BigUint> {
        let inv = self.inv(b)?;
        Ok(self.mul(a, &inv))
    }
}
