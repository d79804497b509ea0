//! DISCLAIMER: This library is a toy example of the ElGamal digital
//! signature scheme in pure Rust. It is *EXCLUSIVELY* for demonstration and
//! educational purposes. Absolutely DO NOT use it for real cryptographic or
//! security-sensitive operations. It is not audited, not vetted, and very
//! likely insecure in practice.
//!
//! The crate covers the whole textbook workflow over a prime field:
//! safe-prime search ([`prime`]), primitive-root discovery ([`generator`]),
//! key-pair derivation, signing and verification ([`engine`]), all built on
//! 128-bit modular arithmetic ([`arith`]). Values are bounded to `u128`;
//! the engine rejects moduli wide enough for products to overflow that
//! domain.
//!
//! ```
//! use elgamal_sig::{verify, ElGamal, EngineConfig};
//!
//! let mut el_gamal = ElGamal::new(&EngineConfig { seed: Some(42) });
//! el_gamal.generate_prime();
//! el_gamal.generate_generator().unwrap();
//! el_gamal.generate_key_pair(None).unwrap();
//!
//! let signature = el_gamal.sign("hello", None).unwrap();
//! assert!(verify("hello", &signature));
//! ```

pub mod arith;
pub mod engine;
pub mod error;
pub mod generator;
pub mod prime;
pub mod rng;
pub mod signature;

pub use engine::{verify, ElGamal, EngineConfig, KeyPair};
pub use error::{Error, Result};
pub use rng::{RandomSource, StdRandom};
pub use signature::{Signature, SignatureText};
