//! Built-in `wikihash`: the MediaWiki password-reset token digest
//!
//! MediaWiki derives its reset tokens from two consecutive outputs of PHP's
//! `mt_rand()`, formatted in hex and run through MD5. Recovering the seed of
//! the underlying Mersenne Twister therefore breaks the token. This module
//! reproduces that construction exactly, including PHP's twist variant and
//! the truncated state initialisation.

use crate::domain::hash::DigestBuf;

/// MD5 output width
pub const WIKIHASH_DIGEST_LEN: usize = 16;

/// Length of the full MT-19937 state vector
const N: usize = 624;

/// MT-19937 period parameter
const M: usize = 397;

/// State words actually initialised.
///
/// The token construction only ever reads state words up to `M + 5`, so
/// initialisation stops at `N - 200` instead of filling the whole vector.
/// Kept as-is: extending it would not change any output.
const INIT_WORDS: usize = N - 200;

/// First state word consumed by the token outputs
const STATE_OFFSET: usize = 4;

fn mt_initialize(seed: u32) -> [u32; INIT_WORDS] {
    let mut state = [0u32; INIT_WORDS];
    state[0] = seed;
    for i in 1..INIT_WORDS {
        let prev = state[i - 1];
        state[i] = 1_812_433_253u32
            .wrapping_mul(prev ^ (prev >> 30))
            .wrapping_add(i as u32);
    }
    state
}

/// PHP's twist: the conditional XOR mask is keyed on the low bit of `u`,
/// not of `v` as in the reference Mersenne Twister.
#[inline]
fn twist(m: u32, u: u32, v: u32) -> u32 {
    let mixed = (u & 0x8000_0000) | (v & 0x7FFF_FFFF);
    m ^ (mixed >> 1) ^ ((u & 1).wrapping_neg() & 0x9908_B0DF)
}

#[inline]
fn temper(mut y: u32) -> u32 {
    y ^= y >> 11;
    y ^= (y << 7) & 0x9D2C_5680;
    y ^= (y << 15) & 0xEFC6_0000;
    y ^ (y >> 18)
}

/// Hash a 32-bit seed the way MediaWiki builds a reset token.
///
/// Two tempered 31-bit outputs are drawn directly from the freshly seeded
/// state (PHP's `mt_rand()` with the generator at its first reload), printed
/// as `%x%x` without padding, and MD5'd.
pub fn wikihash(seed: u32, out: &mut DigestBuf) -> &[u8] {
    let s = mt_initialize(seed);

    let r1 = temper(twist(s[M + STATE_OFFSET], s[STATE_OFFSET], s[STATE_OFFSET + 1])) >> 1;
    let r2 = temper(twist(s[M + STATE_OFFSET + 1], s[STATE_OFFSET + 1], s[STATE_OFFSET + 2])) >> 1;

    let token = format!("{:x}{:x}", r1, r2);
    let digest = md5::compute(token.as_bytes());

    out[..WIKIHASH_DIGEST_LEN].copy_from_slice(&digest.0);
    &out[..WIKIHASH_DIGEST_LEN]
}
