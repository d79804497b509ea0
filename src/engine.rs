//! DISCLAIMER: This module is part of a toy ElGamal signature scheme in pure
//! Rust. It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive
//! operations. It is not audited, not vetted, and very likely insecure in
//! practice.
//!
//! If you need digital signatures in production, please use a vetted,
//! well-reviewed cryptography library.

use log::debug;

use crate::arith::{hash_modulo, mod_inverse, pow_mod};
use crate::error::{Error, Result};
use crate::generator::find_generator;
use crate::prime::safe_prime;
use crate::rng::{RandomSource, StdRandom};
use crate::signature::Signature;

/// Largest domain-parameter width for which a product of two reduced values
/// is guaranteed to fit in `u128`.
const MAX_MODULUS_BITS: u32 = 64;

/// A private/public key pair with `public_key = generator ^ private_key mod
/// prime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: u128,
    pub public_key: u128,
}

/// Configuration for constructing an engine with the default random source.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Optional RNG seed for reproducibility in demonstrations and tests.
    pub seed: Option<u64>,
}

/// The ElGamal signature engine.
///
/// Holds the domain parameters (prime, generator) and the key pair derived
/// from them. Parameters and keys are either assigned by the caller or
/// generated on request; every operation that needs a field that is still
/// unset fails with [`Error::Precondition`] instead of silently defaulting.
///
/// The random source is injected at construction so that prime search, key
/// generation and nonce generation never touch process-global state.
#[derive(Debug)]
pub struct ElGamal<R: RandomSource = StdRandom> {
    rng: R,
    prime: Option<u128>,
    generator: Option<u128>,
    private_key: Option<u128>,
    public_key: Option<u128>,
}

impl ElGamal<StdRandom> {
    /// Creates an engine with the default random source.
    pub fn new(config: &EngineConfig) -> Self {
        ElGamal::with_rng(StdRandom::new(config.seed))
    }
}

impl<R: RandomSource> ElGamal<R> {
    /// Creates an engine around a caller-supplied random source.
    pub fn with_rng(rng: R) -> Self {
        ElGamal {
            rng,
            prime: None,
            generator: None,
            private_key: None,
            public_key: None,
        }
    }

    /// Assigns the prime modulus.
    ///
    /// Rejects values wider than 64 bits with [`Error::Overflow`]: squaring
    /// such a modulus would overflow the 128-bit domain every multiplication
    /// is reduced into.
    pub fn set_prime(&mut self, prime: u128) -> Result<()> {
        if 128 - prime.leading_zeros() > MAX_MODULUS_BITS {
            return Err(Error::Overflow);
        }
        self.prime = Some(prime);
        Ok(())
    }

    /// Assigns the group generator.
    pub fn set_generator(&mut self, generator: u128) {
        self.generator = Some(generator);
    }

    /// The configured prime, if set.
    pub fn prime(&self) -> Option<u128> {
        self.prime
    }

    /// The configured generator, if set.
    pub fn generator(&self) -> Option<u128> {
        self.generator
    }

    /// The derived public key, if a key pair has been generated.
    pub fn public_key(&self) -> Option<u128> {
        self.public_key
    }

    /// Generates a safe prime, stores it as the modulus and returns it.
    pub fn generate_prime(&mut self) -> u128 {
        let prime = safe_prime(&mut self.rng);
        self.prime = Some(prime);
        prime
    }

    /// Finds the smallest generator for the configured prime, stores and
    /// returns it.
    ///
    /// The prime is assumed safe; see [`find_generator`] for what happens
    /// when it is not.
    pub fn generate_generator(&mut self) -> Result<u128> {
        let prime = self.prime.ok_or(Error::Precondition("prime not set"))?;
        let generator = find_generator(prime)?;
        self.generator = Some(generator);
        Ok(generator)
    }

    /// Derives a key pair from the configured domain parameters.
    ///
    /// A caller-supplied private key is used verbatim; `None` draws random
    /// values until one lands in `(1, prime)`. The pair is stored on the
    /// engine and returned.
    pub fn generate_key_pair(&mut self, private_key: Option<u128>) -> Result<KeyPair> {
        let prime = self.prime.ok_or(Error::Precondition("prime not set"))?;
        let generator = self
            .generator
            .ok_or(Error::Precondition("generator not set"))?;

        let private_key = match private_key {
            Some(key) => key,
            None => loop {
                let candidate = self.rng.next() % prime;
                if candidate > 1 {
                    break candidate;
                }
            },
        };
        let public_key = pow_mod(generator, private_key, prime);
        debug!("private key {}, public key {}", private_key, public_key);

        self.private_key = Some(private_key);
        self.public_key = Some(public_key);
        Ok(KeyPair {
            private_key,
            public_key,
        })
    }

    /// Signs a message, returning a self-describing [`Signature`].
    ///
    /// The nonce `k` must be invertible modulo `prime - 1`. A `None` nonce
    /// (and any supplied value that is zero, even, or divisible by
    /// `(prime - 1) / 2`) is replaced by random draws until one is odd and
    /// not a multiple of `(prime - 1) / 2`; under the safe-prime structure
    /// `prime - 1 = 2q` that is exactly coprimality.
    ///
    /// The message hash is reduced modulo `prime` itself, not `prime - 1`.
    /// Verification applies the same reduction, and existing signatures
    /// depend on it, so both sides keep it.
    pub fn sign(&mut self, message: &str, nonce: Option<u128>) -> Result<Signature> {
        let prime = self.prime.ok_or(Error::Precondition("prime not set"))?;
        let generator = self
            .generator
            .ok_or(Error::Precondition("generator not set"))?;
        let private_key = self
            .private_key
            .ok_or(Error::Precondition("private key not set"))?;
        let public_key = self
            .public_key
            .ok_or(Error::Precondition("public key not set"))?;

        let half_prime = (prime - 1) / 2;
        let mut k = nonce.unwrap_or(0);
        while k == 0 || k % 2 == 0 || k % half_prime == 0 {
            k = self.rng.next() % (prime - 2);
        }

        let r = pow_mod(generator, k, prime);
        let k_inverse = mod_inverse(k, prime - 1)
            .ok_or(Error::Precondition("nonce not invertible modulo prime - 1"))?;
        let hash = hash_modulo(message, prime);
        // Reduced before the final product so it stays inside 128 bits.
        let xr = (private_key % (prime - 1)) * (r % (prime - 1)) % (prime - 1);
        let s = (hash + prime - 1 - xr) % (prime - 1) * k_inverse % (prime - 1);

        Ok(Signature {
            prime,
            generator,
            public_key,
            r,
            s,
        })
    }
}

/// Verifies a signature against a message.
///
/// Stateless: operates purely on the parameters embedded in the signature,
/// independent of any engine. Out-of-range components are rejected before
/// any exponentiation; otherwise the check is
/// `g ^ H(m) = y^r * r^s mod p` with the hash reduced modulo `p`.
pub fn verify(message: &str, signature: &Signature) -> bool {
    let prime = signature.prime;
    if signature.r == 0
        || signature.r >= prime
        || signature.s == 0
        || signature.s >= prime - 1
    {
        return false;
    }

    let hash = hash_modulo(message, prime);
    let lhs = pow_mod(signature.generator, hash, prime);
    let y_r = pow_mod(signature.public_key, signature.r, prime);
    let r_s = pow_mod(signature.r, signature.s, prime);
    lhs == y_r * r_s % prime
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::miller_rabin;

    fn engine() -> ElGamal<StdRandom> {
        ElGamal::new(&EngineConfig { seed: Some(42) })
    }

    // Drives one reference vector through key generation, hashing, signing
    // and verification, then checks that `wrong`, whose hash differs, is
    // rejected.
    #[allow(clippy::too_many_arguments)]
    fn check_vector(
        prime: u128,
        generator: u128,
        private_key: u128,
        public_key: u128,
        message: &str,
        hash: u128,
        k: u128,
        r: u128,
        s: u128,
        wrong: &str,
    ) {
        let mut el_gamal = engine();
        el_gamal.set_prime(prime).unwrap();
        el_gamal.set_generator(generator);
        let pair = el_gamal.generate_key_pair(Some(private_key)).unwrap();
        assert_eq!(pair.public_key, public_key);

        assert_eq!(hash_modulo(message, prime), hash);
        let signature = el_gamal.sign(message, Some(k)).unwrap();
        assert_eq!(signature.r, r);
        assert_eq!(signature.s, s);
        assert_eq!(signature.prime, prime);
        assert_eq!(signature.generator, generator);
        assert_eq!(signature.public_key, public_key);

        assert!(verify(message, &signature));
        assert_ne!(hash_modulo(wrong, prime), hash);
        assert!(!verify(wrong, &signature));
    }

    #[test]
    fn generated_primes_are_safe() {
        let mut el_gamal = engine();
        let mut check = StdRandom::new(Some(7));
        for _ in 0..3 {
            let prime = el_gamal.generate_prime();
            assert_eq!(el_gamal.prime(), Some(prime));
            assert!(miller_rabin(prime, 10, &mut check));
            assert!(miller_rabin((prime - 1) / 2, 10, &mut check));
        }
    }

    #[test]
    fn generates_known_generators() {
        let mut el_gamal = engine();

        el_gamal.set_prime(11).unwrap();
        let generator = el_gamal.generate_generator().unwrap();
        assert!([2u128, 6, 7, 8].contains(&generator));
        assert_eq!(el_gamal.generator(), Some(generator));

        el_gamal.set_prime(23).unwrap();
        let generator = el_gamal.generate_generator().unwrap();
        assert!([5u128, 7, 10, 11, 14, 15, 17, 19, 20, 21].contains(&generator));
    }

    #[test]
    fn generator_requires_prime() {
        let mut el_gamal = engine();
        assert_eq!(
            el_gamal.generate_generator(),
            Err(Error::Precondition("prime not set"))
        );
    }

    #[test]
    fn public_key_vectors() {
        let mut el_gamal = engine();
        el_gamal.set_prime(107).unwrap();
        el_gamal.set_generator(24);

        let cases = [(2u128, 41u128), (1, 24), (80, 61), (100, 33)];
        for (private_key, public_key) in cases {
            let pair = el_gamal.generate_key_pair(Some(private_key)).unwrap();
            assert_eq!(pair.public_key, public_key);
            assert_eq!(el_gamal.public_key(), Some(public_key));
        }
    }

    #[test]
    fn key_pair_requires_parameters() {
        let mut el_gamal = engine();
        assert_eq!(
            el_gamal.generate_key_pair(None),
            Err(Error::Precondition("prime not set"))
        );
        el_gamal.set_prime(107).unwrap();
        assert_eq!(
            el_gamal.generate_key_pair(None),
            Err(Error::Precondition("generator not set"))
        );
    }

    #[test]
    fn random_private_key_is_in_range() {
        let mut el_gamal = engine();
        el_gamal.set_prime(107).unwrap();
        el_gamal.set_generator(24);
        for _ in 0..16 {
            let pair = el_gamal.generate_key_pair(None).unwrap();
            assert!(pair.private_key > 1);
            assert!(pair.private_key < 107);
        }
    }

    #[test]
    fn sign_requires_keys() {
        let mut el_gamal = engine();
        el_gamal.set_prime(19).unwrap();
        el_gamal.set_generator(10);
        assert_eq!(
            el_gamal.sign("n", Some(5)),
            Err(Error::Precondition("private key not set"))
        );
    }

    #[test]
    fn set_prime_rejects_oversized_modulus() {
        let mut el_gamal = engine();
        assert_eq!(el_gamal.set_prime(1 << 70), Err(Error::Overflow));
        assert_eq!(el_gamal.set_prime(u64::MAX as u128), Ok(()));
    }

    // Worked example from a lecture slide deck.
    #[test]
    fn signature_vector_p19() {
        check_vector(19, 10, 16, 4, "n", 14, 5, 3, 4, "wrong");
    }

    // With a modulus this small, hash collisions are expected: "G" hashes to
    // the same value as "n", and the same signature must verify for it.
    #[test]
    fn signature_vector_p19_collision() {
        let signature = Signature {
            prime: 19,
            generator: 10,
            public_key: 4,
            r: 3,
            s: 4,
        };
        assert_eq!(hash_modulo("G", 19), 14);
        assert!(verify("G", &signature));
    }

    #[test]
    fn signature_vector_p211() {
        check_vector(211, 32, 17, 110, "Fb", 154, 47, 157, 85, "wrong_message");
    }

    // Worked example from a lecture-notes PDF.
    #[test]
    fn signature_vector_p467() {
        check_vector(467, 2, 127, 132, "Ma", 100, 213, 29, 51, "wrong_message");
    }

    // Worked example from the Handbook of Applied Cryptography, chapter 11.
    #[test]
    fn signature_vector_p2357() {
        check_vector(2357, 2, 1751, 1185, "7w", 1463, 1529, 1490, 1777, "wrong_message");
    }

    #[test]
    fn signature_vector_p479() {
        check_vector(479, 13, 300, 168, "mf", 379, 11, 237, 89, "wrong_message");
    }

    // The remaining vectors were produced with an online ElGamal calculator
    // as a source of truth.
    #[test]
    fn signature_vector_p295777() {
        check_vector(
            295_777, 204_538, 288_290, 13_448, "abcd", 31_879, 164_971, 269_381, 191_607,
            "wrong_message",
        );
    }

    #[test]
    fn signature_vector_p767909() {
        check_vector(
            767_909, 256_024, 712_647, 125_724, "abcd", 151_301, 548_009, 634_214, 503_947,
            "wrong_message",
        );
    }

    #[test]
    fn signature_vector_p868999() {
        check_vector(
            868_999, 413_329, 424_073, 99_445, "abcd", 50_211, 527_693, 311_152, 594_497,
            "wrong_message",
        );
    }

    #[test]
    fn verify_rejects_out_of_range_components() {
        let good = Signature {
            prime: 19,
            generator: 10,
            public_key: 4,
            r: 3,
            s: 4,
        };
        assert!(verify("n", &good));

        assert!(!verify("n", &Signature { r: 0, ..good }));
        assert!(!verify("n", &Signature { r: 19, ..good }));
        assert!(!verify("n", &Signature { s: 0, ..good }));
        assert!(!verify("n", &Signature { s: 18, ..good }));
    }

    #[test]
    fn verify_rejects_tampered_signature() {
        let signature = Signature {
            prime: 211,
            generator: 32,
            public_key: 110,
            r: 157,
            s: 85,
        };
        assert!(verify("Fb", &signature));
        assert!(!verify(
            "Fb",
            &Signature {
                r: 158,
                ..signature
            }
        ));
        assert!(!verify(
            "Fb",
            &Signature {
                s: 86,
                ..signature
            }
        ));
    }

    // Full generated round trip: fresh parameters, fresh keys, random nonce.
    #[test]
    fn end_to_end_round_trip() {
        let mut el_gamal = engine();
        let prime = el_gamal.generate_prime();
        let generator = el_gamal.generate_generator().unwrap();
        let pair = el_gamal.generate_key_pair(None).unwrap();
        assert_eq!(pow_mod(generator, pair.private_key, prime), pair.public_key);

        let signature = el_gamal.sign("a", None).unwrap();
        assert!(verify("a", &signature));
        // "a" and "b" hash to 1 and 2 modulo any prime above 2, so this
        // rejection does not depend on the drawn prime.
        assert!(!verify("b", &signature));
    }
}
