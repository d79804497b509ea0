//! Primitive-root discovery for the multiplicative group modulo a prime.

use log::debug;

use crate::arith::pow_mod;
use crate::error::{Error, Result};

/// Finds a generator of `Z_p*` for a safe prime `p`, scanning candidates
/// from 2 upward.
///
/// With `p = 2q + 1` and `q` prime, every element order divides `2q`, so it
/// is one of 1, 2, `q` or `2q`. A candidate whose `q`-th power is not 1 has
/// order `2q` and generates the whole group. The scan does not rule out the
/// single order-2 element `p - 1`; it sits at the top of the range and the
/// scan starts at the bottom, so it is never reached for the moduli in use.
///
/// The input is not checked for safety; for a prime that is not safe the
/// scan still returns the first candidate whose `(p - 1) / 2`-th power is
/// not 1, and the caller owns the consequences.
///
/// Fails with [`Error::SearchExhausted`] when the whole range `[2, p - 1)`
/// is scanned without success, which signals that `p` is not actually an odd
/// prime.
pub fn find_generator(prime: u128) -> Result<u128> {
    if prime < 3 {
        return Err(Error::SearchExhausted("no generator found"));
    }
    let half_prime = (prime - 1) / 2;
    let mut candidate = 2;
    while candidate < prime - 1 {
        if pow_mod(candidate, half_prime, prime) != 1 {
            debug!("generator {} found for prime {}", candidate, prime);
            return Ok(candidate);
        }
        candidate += 1;
    }
    Err(Error::SearchExhausted("no generator found"))
}
