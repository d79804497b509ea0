//! DISCLAIMER: This module is part of a toy ElGamal signature scheme in pure
//! Rust. It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive
//! operations. It is not audited, not vetted, and very likely insecure in
//! practice.
//!
//! Modular-arithmetic toolkit: binary exponentiation, modular inverse via the
//! extended Euclidean algorithm, a polynomial rolling hash for messages, a
//! Miller-Rabin primality test, and the permissive decimal parser used at the
//! presentation boundary.
//!
//! All values live in `u128`. Callers keep moduli at or below 64 bits so that
//! every intermediate product of two reduced values fits in 128 bits; the
//! signature engine enforces that bound on its domain parameters.

use crate::error::{Error, Result};
use crate::rng::RandomSource;

/// Multiplier for the polynomial rolling hash.
const HASH_BASE: u128 = 61;

/// Computes `base ^ exponent mod modulus` by binary square-and-multiply,
/// in O(log exponent) multiplications.
///
/// `pow_mod(_, 0, m)` is 1, and any reduced result with `modulus` 1 is 0.
///
/// # Panics
/// Panics if `modulus` is zero.
pub fn pow_mod(mut base: u128, mut exponent: u128, modulus: u128) -> u128 {
    let mut result = 1;
    base %= modulus;
    while exponent > 0 {
        if exponent % 2 == 1 {
            result = result * base % modulus;
        }
        exponent >>= 1;
        base = base * base % modulus;
    }
    result
}

/// One iteration state of the extended Euclidean algorithm: remainder and
/// Bezout coefficients.
fn extended_gcd(mut a: i128, mut b: i128) -> (i128, i128, i128) {
    let (mut x0, mut x1) = (1i128, 0i128);
    let (mut y0, mut y1) = (0i128, 1i128);

    while b != 0 {
        let q = a / b;
        let r = a % b;
        a = b;
        b = r;

        let tmpx = x0 - q * x1;
        x0 = x1;
        x1 = tmpx;

        let tmpy = y0 - q * y1;
        y0 = y1;
        y1 = tmpy;
    }
    (a, x0, y0)
}

/// Returns the unique `x` in `[0, modulus)` with `value * x = 1 mod modulus`,
/// or `None` when `gcd(value, modulus) != 1` and no inverse exists.
pub fn mod_inverse(value: u128, modulus: u128) -> Option<u128> {
    let (g, s, _) = extended_gcd(value as i128, modulus as i128);
    if g != 1 {
        return None;
    }
    let m = modulus as i128;
    Some((((s % m) + m) % m) as u128)
}

/// Maps a message byte to its hash alphabet value:
/// `a-z` to 1-26, `A-Z` to 27-52, `0-9` to 53-62, anything else to 42.
///
/// The fixed sentinel for out-of-alphabet bytes is fine here; this is a
/// fingerprint, not a secure digest. The mapping itself must not change, or
/// previously produced signatures stop verifying.
fn symbol_value(byte: u8) -> u128 {
    match byte {
        b'a'..=b'z' => (byte - b'a') as u128 + 1,
        b'A'..=b'Z' => (byte - b'A') as u128 + 27,
        b'0'..=b'9' => (byte - b'0') as u128 + 53,
        _ => 42,
    }
}

/// Polynomial rolling hash of `message` reduced modulo `modulus`.
///
/// Accumulates `symbol_value(byte) * 61^i` left to right, with `i` starting
/// at 0, reducing after every step.
pub fn hash_modulo(message: &str, modulus: u128) -> u128 {
    let mut hash = 0u128;
    let mut power = 1u128;
    for &byte in message.as_bytes() {
        hash = (hash + symbol_value(byte) * power) % modulus;
        power = power * HASH_BASE % modulus;
    }
    hash
}

/// Miller-Rabin probabilistic primality test with the given number of
/// witness rounds. A composite passes all rounds with probability at most
/// `(1/4) ^ rounds`.
///
/// A drawn witness of zero passes its round without computation; the witness
/// range `[0, candidate - 2)` makes that a rare, accepted shortcut.
pub fn miller_rabin<R: RandomSource + ?Sized>(candidate: u128, rounds: u32, rng: &mut R) -> bool {
    if candidate < 3 {
        return candidate == 2;
    }

    // candidate - 1 = d * 2^s with d odd
    let mut d = candidate - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d >>= 1;
        s += 1;
    }

    for _ in 0..rounds {
        let a = rng.next() % (candidate - 2);
        if a == 0 {
            continue;
        }
        let mut x = pow_mod(a, d, candidate);
        if x == 1 || x == candidate - 1 {
            continue;
        }
        let mut probably_prime = false;
        for _ in 1..s {
            x = x * x % candidate;
            if x == 1 {
                return false;
            }
            if x == candidate - 1 {
                probably_prime = true;
                break;
            }
        }
        if !probably_prime {
            return false;
        }
    }
    true
}

/// Parses a decimal string into `u128`, silently skipping every non-digit
/// byte (embedded separators and spaces are dropped, not rejected).
///
/// Fails with [`Error::Overflow`] when the numeric value does not fit.
pub fn parse_decimal(text: &str) -> Result<u128> {
    let mut value: u128 = 0;
    for byte in text.bytes() {
        if !byte.is_ascii_digit() {
            continue;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((byte - b'0') as u128))
            .ok_or(Error::Overflow)?;
    }
    Ok(value)
}
